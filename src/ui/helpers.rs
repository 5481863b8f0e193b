//! Small formatting helpers shared by the views.

use ratatui::layout::Rect;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate `text` to at most `max_width` display columns, ending in `…`
/// when shortened.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// Rect of `width` x `height` centered in `area`, shrunk to fit.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Move `cursor` by `delta` inside `0..len`, clamping at both ends.
pub fn step_cursor(cursor: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    cursor.saturating_add_signed(delta).min(len - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate_to_width("Sussex", 10), "Sussex");
    }

    #[test]
    fn test_truncate_adds_ellipsis() {
        assert_eq!(truncate_to_width("Rhode Island Red", 8), "Rhode I…");
        assert_eq!(truncate_to_width("Rhode Island Red", 8).width(), 8);
    }

    #[test]
    fn test_truncate_wide_chars() {
        let text = "🐔🐔🐔🐔";
        let out = truncate_to_width(text, 5);
        assert!(out.width() <= 5);
        assert!(out.ends_with('…'));
    }

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(centered_rect(area, 40, 10), Rect::new(30, 15, 40, 10));
        assert_eq!(centered_rect(area, 200, 50), area);
    }

    #[test]
    fn test_step_cursor_clamps() {
        assert_eq!(step_cursor(0, -1, 4), 0);
        assert_eq!(step_cursor(3, 1, 4), 3);
        assert_eq!(step_cursor(1, 2, 4), 3);
        assert_eq!(step_cursor(5, 0, 0), 0);
    }
}
