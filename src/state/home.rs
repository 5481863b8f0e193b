//! Home dashboard slice.

use crate::catalog::{LATEST_FACT, WELCOME_MESSAGE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeState {
    pub welcome_message: String,
    /// Times the latest-fact card was opened. Never decreases.
    pub facts_read_count: u64,
    pub last_fact: String,
}

impl Default for HomeState {
    fn default() -> Self {
        Self {
            welcome_message: WELCOME_MESSAGE.to_string(),
            facts_read_count: 0,
            last_fact: LATEST_FACT.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeAction {
    OnAppear,
    FactRead,
}

impl HomeState {
    pub fn reduce(&mut self, action: HomeAction) {
        match action {
            HomeAction::OnAppear => {}
            HomeAction::FactRead => {
                self.facts_read_count = self.facts_read_count.saturating_add(1);
            }
        }
    }
}
