//! View-local state owned by the presentation layer.
//!
//! None of this is part of the core state tree: cursors and focus only
//! decide which action a key produces, never what the action does.

/// Which part of the facts tab receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FactsFocus {
    #[default]
    List,
    Search,
}

/// Entries of the home dashboard's quick access grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickAccess {
    Gallery,
    Facts,
    Quiz,
    About,
}

impl QuickAccess {
    pub const ALL: [QuickAccess; 4] = [
        QuickAccess::Gallery,
        QuickAccess::Facts,
        QuickAccess::Quiz,
        QuickAccess::About,
    ];

    pub fn label(self) -> &'static str {
        match self {
            QuickAccess::Gallery => "Gallery",
            QuickAccess::Facts => "Facts",
            QuickAccess::Quiz => "Quiz",
            QuickAccess::About => "About App",
        }
    }
}

/// Cursor and focus positions for every tab.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewState {
    /// Highlighted quick access entry on the home tab
    pub home_cursor: usize,
    /// Highlighted gallery card (index into the catalog)
    pub gallery_cursor: usize,
    /// Highlighted row of the filtered facts list
    pub facts_cursor: usize,
    pub facts_focus: FactsFocus,
    /// Highlighted quiz option
    pub quiz_cursor: usize,
    pub show_about: bool,
}

/// Columns in the gallery grid.
pub const GALLERY_COLUMNS: usize = 2;
