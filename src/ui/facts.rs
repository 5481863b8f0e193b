//! Facts tab: search field, category chips and the filtered list.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::app::{FactsFocus, ViewState};
use crate::models::{Fact, FactCategory};
use crate::state::FactsState;

use super::helpers::truncate_to_width;
use super::layout::LayoutContext;
use super::theme::{
    category_color, COLOR_ACCENT, COLOR_BORDER, COLOR_CHIP_TEXT, COLOR_CURSOR_BG, COLOR_DIM, COLOR_HEADER,
};

pub const EMPTY_MESSAGE: &str = "No facts match your search";

/// Chip order: "All" followed by every category.
pub fn chips() -> impl Iterator<Item = Option<FactCategory>> {
    std::iter::once(None).chain(FactCategory::ALL.into_iter().map(Some))
}

pub fn render_facts(
    frame: &mut Frame,
    area: Rect,
    facts: &FactsState,
    view: &ViewState,
    ctx: &LayoutContext,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // search
            Constraint::Length(1), // chips
            Constraint::Min(1),    // list
        ])
        .split(area);

    render_search(frame, chunks[0], facts, view.facts_focus == FactsFocus::Search);
    render_chips(frame, chunks[1], facts.selected_category, ctx);
    render_list(frame, chunks[2], facts, view);
}

fn render_search(frame: &mut Frame, area: Rect, facts: &FactsState, focused: bool) {
    let border = if focused { COLOR_ACCENT } else { COLOR_BORDER };
    let content = if facts.search_text.is_empty() && !focused {
        Span::styled("Search facts... (/)", Style::default().fg(COLOR_DIM))
    } else {
        Span::raw(facts.search_text.as_str())
    };
    let mut spans = vec![Span::styled("⌕ ", Style::default().fg(COLOR_DIM)), content];
    if focused {
        spans.push(Span::styled("▏", Style::default().fg(COLOR_ACCENT)));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border));
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn render_chips(
    frame: &mut Frame,
    area: Rect,
    selected: Option<FactCategory>,
    ctx: &LayoutContext,
) {
    let mut spans = Vec::new();
    for chip in chips() {
        let label = match chip {
            None => "All".to_string(),
            Some(category) if ctx.is_extra_small() => category.glyph().to_string(),
            Some(category) => format!("{} {}", category.glyph(), category.label()),
        };
        let color = chip.map(category_color).unwrap_or(COLOR_HEADER);
        let style = if chip == selected {
            Style::default()
                .fg(COLOR_CHIP_TEXT)
                .bg(color)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(color)
        };
        spans.push(Span::styled(format!(" {} ", label), style));
        spans.push(Span::raw(" "));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn fact_item(fact: &Fact, width: usize, selected: bool) -> ListItem<'static> {
    let title_style = if selected {
        Style::default()
            .fg(COLOR_ACCENT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD)
    };
    let chip = format!("{} {}", fact.category.glyph(), fact.category.label());
    let title = Line::from(vec![
        Span::styled(fact.title.clone(), title_style),
        Span::raw("  "),
        Span::styled(chip, Style::default().fg(category_color(fact.category))),
    ]);
    let body = Line::from(Span::styled(
        truncate_to_width(&fact.content, width),
        Style::default().fg(COLOR_DIM),
    ));
    ListItem::new(vec![title, body, Line::default()])
}

fn render_list(frame: &mut Frame, area: Rect, facts: &FactsState, view: &ViewState) {
    let visible = facts.filtered_facts();
    if visible.is_empty() {
        let message = Paragraph::new(Line::from(Span::styled(
            EMPTY_MESSAGE,
            Style::default().fg(COLOR_DIM),
        )))
        .centered();
        frame.render_widget(message, area);
        return;
    }

    let width = area.width.saturating_sub(2) as usize;
    let items: Vec<ListItem> = visible
        .iter()
        .enumerate()
        .map(|(i, fact)| fact_item(fact, width, i == view.facts_cursor))
        .collect();

    let list_focused = view.facts_focus == FactsFocus::List;
    let list = List::new(items).highlight_style(if list_focused {
        Style::default().bg(COLOR_CURSOR_BG)
    } else {
        Style::default()
    });
    let mut list_state =
        ListState::default().with_selected(Some(view.facts_cursor.min(visible.len() - 1)));
    frame.render_stateful_widget(list, area, &mut list_state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FactsAction;
    use ratatui::{backend::TestBackend, Terminal};

    fn render_text(facts: &FactsState, view: &ViewState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                render_facts(f, area, facts, view, &LayoutContext::new(120, 30));
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_chips_start_with_all() {
        let chips: Vec<_> = chips().collect();
        assert_eq!(chips.len(), FactCategory::ALL.len() + 1);
        assert_eq!(chips[0], None);
    }

    #[test]
    fn test_category_filter_hides_other_facts() {
        let mut facts = FactsState::default();
        facts.reduce(FactsAction::SelectCategory(Some(FactCategory::Anatomy)));
        let text = render_text(&facts, &ViewState::default());
        assert!(text.contains("Egg Colors"));
        assert!(text.contains("Body Temperature"));
        assert!(!text.contains("Lifespan"));
    }

    #[test]
    fn test_empty_result_shows_message() {
        let mut facts = FactsState::default();
        facts.reduce(FactsAction::SearchTextChanged("zebra".to_string()));
        let text = render_text(&facts, &ViewState::default());
        assert!(text.contains(EMPTY_MESSAGE));
        assert!(text.contains("zebra"));
    }
}
