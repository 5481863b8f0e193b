use serde::{Deserialize, Serialize};

/// Topic a fact belongs to; used as the facts tab filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FactCategory {
    Behavior,
    Anatomy,
    Intelligence,
    History,
}

impl FactCategory {
    /// Every category in chip display order.
    pub const ALL: [FactCategory; 4] = [
        FactCategory::Behavior,
        FactCategory::Anatomy,
        FactCategory::Intelligence,
        FactCategory::History,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FactCategory::Behavior => "Behavior",
            FactCategory::Anatomy => "Anatomy",
            FactCategory::Intelligence => "Intelligence",
            FactCategory::History => "History",
        }
    }

    /// Single-cell glyph drawn in front of the category label.
    pub fn glyph(self) -> &'static str {
        match self {
            FactCategory::Behavior => "»",
            FactCategory::Anatomy => "♥",
            FactCategory::Intelligence => "✦",
            FactCategory::History => "§",
        }
    }
}

/// A single entry of the facts catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fact {
    pub id: String,
    pub title: String,
    pub content: String,
    pub category: FactCategory,
}

impl Fact {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
        category: FactCategory,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: content.into(),
            category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_categories_in_display_order() {
        let labels: Vec<_> = FactCategory::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(labels, vec!["Behavior", "Anatomy", "Intelligence", "History"]);
    }

    #[test]
    fn test_fact_new_accepts_str_slices() {
        let fact = Fact::new("9", "Title", "Body", FactCategory::History);
        assert_eq!(fact.id, "9");
        assert_eq!(fact.category, FactCategory::History);
    }
}
