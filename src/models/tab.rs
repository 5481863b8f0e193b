use serde::{Deserialize, Serialize};

/// Top-level navigation tab. The only state shared across slices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Tab {
    #[default]
    Home,
    Gallery,
    Facts,
    Quiz,
}

impl Tab {
    /// Tabs in tab-bar order.
    pub const ALL: [Tab; 4] = [Tab::Home, Tab::Gallery, Tab::Facts, Tab::Quiz];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Gallery => "Gallery",
            Tab::Facts => "Facts",
            Tab::Quiz => "Quiz",
        }
    }

    /// Label used on extra-small terminals.
    pub fn short_label(self) -> &'static str {
        match self {
            Tab::Home => "Hm",
            Tab::Gallery => "Gal",
            Tab::Facts => "Fct",
            Tab::Quiz => "Qz",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Tab::Home => "⌂",
            Tab::Gallery => "▣",
            Tab::Facts => "≡",
            Tab::Quiz => "?",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Tab::Home => 0,
            Tab::Gallery => 1,
            Tab::Facts => 2,
            Tab::Quiz => 3,
        }
    }

    pub fn next(self) -> Tab {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    pub fn prev(self) -> Tab {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }

    /// Parse a tab from its label, ignoring case and surrounding whitespace.
    pub fn from_name(name: &str) -> Option<Tab> {
        let name = name.trim();
        Tab::ALL
            .into_iter()
            .find(|tab| tab.label().eq_ignore_ascii_case(name))
    }
}
