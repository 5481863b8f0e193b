//! About dialog.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::cli::version::VERSION;
use crate::models::Tab;

use super::components::{render_dialog_frame, DialogFrameConfig};
use super::layout::LayoutContext;
use super::theme::{COLOR_ACCENT, COLOR_DIM};

pub fn render_about(frame: &mut Frame, area: Rect, ctx: &LayoutContext) {
    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                "cluck",
                Style::default()
                    .fg(COLOR_ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!(" v{}", VERSION), Style::default().fg(COLOR_DIM)),
        ]),
        Line::default(),
        Line::from("Breeds, facts and a quiz about chickens."),
        Line::default(),
    ];
    lines.extend(
        Tab::ALL
            .iter()
            .map(|tab| Line::from(format!("{}  {}", tab.glyph(), tab.label()))),
    );

    let config = DialogFrameConfig::new("About", lines.len() as u16);
    let inner = render_dialog_frame(frame, area, ctx, &config);
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}
