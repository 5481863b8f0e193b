//! Color theme constants.

use ratatui::style::Color;

use crate::models::FactCategory;
use crate::state::Grade;

// ============================================================================
// Base palette
// ============================================================================

/// Primary border color
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent for the selected tab, focused borders and cursors
pub const COLOR_ACCENT: Color = Color::Rgb(255, 179, 71); // warm yolk orange

/// Header and title text
pub const COLOR_HEADER: Color = Color::White;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Highlight background for the row under the cursor
pub const COLOR_CURSOR_BG: Color = Color::Rgb(45, 40, 30);

/// Text drawn on a filled category chip
pub const COLOR_CHIP_TEXT: Color = Color::Black;

/// Background for dialog boxes
pub const COLOR_DIALOG_BG: Color = Color::Rgb(20, 18, 14);

// ============================================================================
// Quiz feedback
// ============================================================================

pub const COLOR_CORRECT: Color = Color::Rgb(4, 181, 117);

pub const COLOR_INCORRECT: Color = Color::Red;

/// Color for each result band.
pub fn grade_color(grade: Grade) -> Color {
    match grade {
        Grade::Excellent => Color::Green,
        Grade::Good => Color::Blue,
        Grade::NotBad => Color::Rgb(255, 165, 0),
        Grade::TryAgain => Color::Red,
    }
}

/// Chip color for each fact category.
pub fn category_color(category: FactCategory) -> Color {
    match category {
        FactCategory::Behavior => Color::Blue,
        FactCategory::Anatomy => Color::Red,
        FactCategory::Intelligence => Color::Magenta,
        FactCategory::History => Color::Green,
    }
}
