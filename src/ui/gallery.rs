//! Gallery tab: a two-column grid of breed cards plus the detail overlay.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::{ViewState, GALLERY_COLUMNS};
use crate::models::GalleryItem;
use crate::state::GalleryState;

use super::components::{render_dialog_frame, DialogFrameConfig};
use super::layout::LayoutContext;
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_CURSOR_BG, COLOR_DIM, COLOR_HEADER};

/// Rows of the "Additional Information" section of the detail sheet.
pub const DETAIL_INFO: [(&str, &str); 3] = [
    ("Breed", "Domestic Chicken"),
    ("Size", "Medium"),
    ("Temperament", "Friendly"),
];

const CARD_HEIGHT: u16 = 5;

pub fn gallery_columns(ctx: &LayoutContext) -> usize {
    if ctx.is_extra_small() {
        1
    } else {
        GALLERY_COLUMNS
    }
}

pub fn render_gallery(
    frame: &mut Frame,
    area: Rect,
    gallery: &GalleryState,
    view: &ViewState,
    ctx: &LayoutContext,
) {
    let columns = gallery_columns(ctx);
    let rows = gallery.images.len().div_ceil(columns);
    let visible_rows = (area.height / CARD_HEIGHT).max(1) as usize;

    // Keep the cursor's row on screen.
    let cursor_row = view.gallery_cursor / columns;
    let first_row = cursor_row.saturating_sub(visible_rows.saturating_sub(1));

    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(CARD_HEIGHT); visible_rows.min(rows)])
        .split(area);

    for (slot, row_area) in row_areas.iter().enumerate() {
        let row = first_row + slot;
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, columns as u32); columns])
            .split(*row_area);
        for (col, cell) in cells.iter().enumerate() {
            let index = row * columns + col;
            if let Some(item) = gallery.images.get(index) {
                render_card(frame, *cell, item, index == view.gallery_cursor);
            }
        }
    }
}

fn render_card(frame: &mut Frame, area: Rect, item: &GalleryItem, selected: bool) {
    let border = if selected { COLOR_ACCENT } else { COLOR_BORDER };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
        .style(if selected {
            Style::default().bg(COLOR_CURSOR_BG)
        } else {
            Style::default()
        });

    let text = vec![
        Line::from(Span::styled(
            item.name.as_str(),
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            item.description.as_str(),
            Style::default().fg(COLOR_DIM),
        )),
    ];
    frame.render_widget(
        Paragraph::new(text).wrap(Wrap { trim: true }).block(block),
        area,
    );
}

/// Detail sheet for the selected breed, drawn over the whole body.
pub fn render_gallery_detail(frame: &mut Frame, area: Rect, item: &GalleryItem, ctx: &LayoutContext) {
    let mut lines = vec![
        Line::from(Span::styled(
            item.name.as_str(),
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("[{}]", item.image_ref),
            Style::default().fg(COLOR_DIM),
        )),
        Line::default(),
        Line::from(item.description.as_str()),
        Line::default(),
        Line::from(Span::styled(
            "Additional Information",
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        )),
    ];
    lines.extend(DETAIL_INFO.iter().map(|(label, value)| {
        Line::from(vec![
            Span::styled(format!("{}: ", label), Style::default().fg(COLOR_DIM)),
            Span::raw(*value),
        ])
    }));

    let config = DialogFrameConfig::new("Details", lines.len() as u16).min_width(36);
    let inner = render_dialog_frame(frame, area, ctx, &config);
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_grid_shows_every_breed() {
        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        let gallery = GalleryState::default();
        terminal
            .draw(|f| {
                let area = f.area();
                render_gallery(f, area, &gallery, &ViewState::default(), &LayoutContext::new(100, 20));
            })
            .unwrap();
        let text = buffer_text(&terminal);
        for name in ["Rhode Island Red", "Leghorn", "Brahma", "Sussex"] {
            assert!(text.contains(name), "missing {}", name);
        }
    }

    #[test]
    fn test_detail_lists_additional_information() {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        let gallery = GalleryState::default();
        let item = &gallery.images[2];
        terminal
            .draw(|f| {
                let area = f.area();
                render_gallery_detail(f, area, item, &LayoutContext::new(100, 30));
            })
            .unwrap();
        let text = buffer_text(&terminal);
        assert!(text.contains("Brahma"));
        assert!(text.contains("Breed: Domestic Chicken"));
        assert!(text.contains("Temperament: Friendly"));
    }
}
