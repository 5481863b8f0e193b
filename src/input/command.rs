//! Command definitions for keyboard and mouse input.
//!
//! A [`Command`] says what the user asked for, independent of the key that
//! produced it. The app turns commands into store dispatches or view-local
//! cursor changes.

use crate::models::Tab;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    // =========================================================================
    // Global
    // =========================================================================
    /// Quit the application (q, Ctrl+C)
    Quit,
    /// Select the tab to the right, wrapping (Tab)
    NextTab,
    /// Select the tab to the left, wrapping (Shift+Tab)
    PrevTab,
    /// Select a specific tab (1-4, mouse click on the tab bar)
    SwitchTab(Tab),
    /// Show or hide the about panel (?)
    ToggleAbout,

    // =========================================================================
    // Cursor movement inside the active tab
    // =========================================================================
    CursorUp,
    CursorDown,
    CursorLeft,
    CursorRight,
    /// Activate the item under the cursor (Enter)
    Activate,
    /// Close the open overlay or leave the current mode (Esc)
    Back,

    // =========================================================================
    // Home
    // =========================================================================
    /// Open the latest-fact card (r, Space)
    ReadFact,

    // =========================================================================
    // Facts
    // =========================================================================
    /// Start editing the search field (/)
    FocusSearch,
    /// Append a character to the search text
    InsertChar(char),
    /// Delete the last search character
    Backspace,
    /// Clear the whole search text (Ctrl+U)
    ClearSearch,
    /// Cycle the category filter forward (], Right)
    NextCategory,
    /// Cycle the category filter backward ([, Left)
    PrevCategory,

    // =========================================================================
    // Quiz
    // =========================================================================
    /// Answer with option `n` (a-d)
    ChooseAnswer(usize),
    /// Move on after the answer was revealed (n)
    NextQuestion,
    /// Start the quiz over (r on the quiz tab)
    RestartQuiz,
}
