//! Facts slice: catalog plus a category filter and a free-text search.
//!
//! The visible list is derived on demand by [`FactsState::filtered_facts`];
//! nothing but the two filter inputs is stored.

use std::sync::Arc;

use crate::catalog::FACTS;
use crate::models::{Fact, FactCategory};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactsState {
    pub facts: Arc<[Fact]>,
    /// `None` shows every category.
    pub selected_category: Option<FactCategory>,
    pub search_text: String,
}

impl Default for FactsState {
    fn default() -> Self {
        Self::new(Arc::clone(&FACTS))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FactsAction {
    SelectCategory(Option<FactCategory>),
    SearchTextChanged(String),
    OnAppear,
}

impl FactsState {
    pub fn new(facts: Arc<[Fact]>) -> Self {
        Self {
            facts,
            selected_category: None,
            search_text: String::new(),
        }
    }

    pub fn reduce(&mut self, action: FactsAction) {
        match action {
            FactsAction::SelectCategory(category) => self.selected_category = category,
            FactsAction::SearchTextChanged(text) => self.search_text = text,
            FactsAction::OnAppear => {}
        }
    }

    /// Facts matching both the category filter and the search text, in
    /// catalog order.
    pub fn filtered_facts(&self) -> Vec<&Fact> {
        let by_category = filter_by_category(self.facts.iter(), self.selected_category);
        filter_by_search(by_category, &self.search_text)
    }

    pub fn is_filtered(&self) -> bool {
        self.selected_category.is_some() || !self.search_text.is_empty()
    }
}

/// Keep facts in `category`; `None` keeps everything.
pub fn filter_by_category<'a>(
    facts: impl IntoIterator<Item = &'a Fact>,
    category: Option<FactCategory>,
) -> Vec<&'a Fact> {
    facts
        .into_iter()
        .filter(|fact| category.is_none_or(|c| fact.category == c))
        .collect()
}

/// Keep facts whose title or content contains `query`, ignoring case.
/// An empty query keeps everything.
pub fn filter_by_search<'a>(
    facts: impl IntoIterator<Item = &'a Fact>,
    query: &str,
) -> Vec<&'a Fact> {
    if query.is_empty() {
        return facts.into_iter().collect();
    }
    let needle = query.to_lowercase();
    facts
        .into_iter()
        .filter(|fact| {
            fact.title.to_lowercase().contains(&needle)
                || fact.content.to_lowercase().contains(&needle)
        })
        .collect()
}
