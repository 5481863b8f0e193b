//! Tab bar
//!
//! A horizontal tab selector drawn inside a bordered row at the top of the
//! screen. Uses `▶` as the marker for the selected tab with responsive
//! label sizing. The same geometry is used for mouse hit testing.

use std::ops::Range;

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::models::Tab;
use crate::ui::layout::LayoutContext;
use crate::ui::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM};

/// Rows occupied by the bar, borders included.
pub const HEIGHT: u16 = 3;

const LEADING_PAD: u16 = 2;
const MARKER_WIDTH: u16 = 2;

fn label_for(tab: Tab, ctx: &LayoutContext) -> String {
    if ctx.is_extra_small() {
        tab.short_label().to_string()
    } else if ctx.is_compact() {
        tab.label().to_string()
    } else {
        format!("{} {}", tab.glyph(), tab.label())
    }
}

fn spacing(ctx: &LayoutContext) -> u16 {
    if ctx.is_extra_small() {
        2
    } else {
        4
    }
}

/// Screen columns covered by each tab (marker included), left to right.
pub fn tab_ranges(ctx: &LayoutContext) -> Vec<(Tab, Range<u16>)> {
    // +1 for the left border
    let mut x = 1 + LEADING_PAD;
    let mut ranges = Vec::with_capacity(Tab::ALL.len());
    for tab in Tab::ALL {
        let width = MARKER_WIDTH + label_for(tab, ctx).width() as u16;
        ranges.push((tab, x..x + width));
        x += width + spacing(ctx);
    }
    ranges
}

/// Tab under screen column `column`, if any.
pub fn tab_at(column: u16, ctx: &LayoutContext) -> Option<Tab> {
    tab_ranges(ctx)
        .into_iter()
        .find(|(_, range)| range.contains(&column))
        .map(|(tab, _)| tab)
}

/// Build the tab line.
pub fn tab_line(selected: Tab, ctx: &LayoutContext) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = vec![Span::raw(" ".repeat(LEADING_PAD as usize))];

    for (idx, tab) in Tab::ALL.iter().enumerate() {
        let label = label_for(*tab, ctx);

        if *tab == selected {
            spans.push(Span::styled(
                "▶ ",
                Style::default()
                    .fg(COLOR_ACCENT)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(
                label,
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ));
        } else {
            let dim = Style::default().fg(COLOR_DIM);
            spans.push(Span::styled("  ", dim));
            spans.push(Span::styled(label, dim));
        }

        if idx < Tab::ALL.len() - 1 {
            spans.push(Span::raw(" ".repeat(spacing(ctx) as usize)));
        }
    }

    Line::from(spans)
}

pub fn render_tab_bar(frame: &mut Frame, area: Rect, selected: Tab, ctx: &LayoutContext) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled(
            " cluck ",
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        ));
    frame.render_widget(Paragraph::new(tab_line(selected, ctx)).block(block), area);
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_marker_precedes_selected_tab() {
        let ctx = LayoutContext::new(120, 40);
        let text = text_of(&tab_line(Tab::Facts, &ctx));
        let marker = text.find('▶').unwrap();
        assert!(marker > text.find("Gallery").unwrap());
        assert!(marker < text.find("Facts").unwrap());
    }

    #[test]
    fn test_extra_small_uses_short_labels() {
        let ctx = LayoutContext::new(50, 14);
        let text = text_of(&tab_line(Tab::Home, &ctx));
        assert!(text.contains("Gal"));
        assert!(!text.contains("Gallery"));
    }

    #[test]
    fn test_ranges_match_rendered_line() {
        for ctx in [LayoutContext::new(120, 40), LayoutContext::new(70, 20), LayoutContext::new(50, 14)] {
            let text = text_of(&tab_line(Tab::Home, &ctx));
            for (tab, range) in tab_ranges(&ctx) {
                // Column 0 is the border, so the line starts at column 1.
                let start = (range.start - 1) as usize + MARKER_WIDTH as usize;
                let label = label_for(tab, &ctx);
                let rendered: String = text.chars().skip(start).take(label.chars().count()).collect();
                assert_eq!(rendered, label);
            }
        }
    }

    #[test]
    fn test_tab_at_column() {
        let ctx = LayoutContext::new(120, 40);
        let ranges = tab_ranges(&ctx);
        assert_eq!(tab_at(ranges[0].1.start, &ctx), Some(Tab::Home));
        assert_eq!(tab_at(ranges[3].1.end - 1, &ctx), Some(Tab::Quiz));
        assert_eq!(tab_at(0, &ctx), None);
        assert_eq!(tab_at(ranges[0].1.end, &ctx), None);
    }
}
