//! Footer line with key hints for the current input context.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::input::{keybindings, InputContext};

use super::layout::LayoutContext;
use super::theme::{COLOR_ACCENT, COLOR_DIM};

pub fn footer_line(context: &InputContext, ctx: &LayoutContext) -> Line<'static> {
    let mut hints = keybindings::hints(context);
    if ctx.is_extra_small() {
        // Keep the first hint and quit.
        let quit = hints.iter().position(|(key, _)| *key == "q");
        hints = hints
            .into_iter()
            .enumerate()
            .filter(|(i, _)| *i == 0 || Some(*i) == quit)
            .map(|(_, hint)| hint)
            .collect();
    }

    let mut spans = vec![Span::raw(" ")];
    for (i, (key, description)) in hints.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" · ", Style::default().fg(COLOR_DIM)));
        }
        spans.push(Span::styled(key, Style::default().fg(COLOR_ACCENT)));
        spans.push(Span::styled(
            format!(" {}", description),
            Style::default().fg(COLOR_DIM),
        ));
    }
    Line::from(spans)
}

pub fn render_footer(frame: &mut Frame, area: Rect, context: &InputContext, ctx: &LayoutContext) {
    frame.render_widget(Paragraph::new(footer_line(context, ctx)), area);
}
