//! Home dashboard: banner, stats, the latest-fact card and quick access.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::{QuickAccess, ViewState};
use crate::models::Tab;
use crate::state::HomeState;

use super::helpers::truncate_to_width;
use super::layout::LayoutContext;
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_CURSOR_BG, COLOR_DIM, COLOR_HEADER};

/// Number of sections listed on the stats card.
pub const SECTION_COUNT: usize = Tab::ALL.len();

/// Two columns on wide terminals, one entry per row otherwise.
pub fn quick_access_columns(ctx: &LayoutContext) -> usize {
    if ctx.is_narrow() {
        1
    } else {
        2
    }
}

pub fn render_home(
    frame: &mut Frame,
    area: Rect,
    home: &HomeState,
    view: &ViewState,
    ctx: &LayoutContext,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // banner
            Constraint::Length(3), // stats
            Constraint::Length(4), // latest fact
            Constraint::Min(3),    // quick access
        ])
        .split(area);

    render_banner(frame, chunks[0], home);
    render_stats(frame, chunks[1], home, ctx);
    render_latest_fact(frame, chunks[2], home);
    render_quick_access(frame, chunks[3], view.home_cursor, ctx);
}

fn card(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled(
            format!(" {} ", title),
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        ))
}

fn render_banner(frame: &mut Frame, area: Rect, home: &HomeState) {
    let banner = Paragraph::new(Line::from(Span::styled(
        home.welcome_message.as_str(),
        Style::default()
            .fg(COLOR_ACCENT)
            .add_modifier(Modifier::BOLD),
    )))
    .centered()
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(COLOR_BORDER)),
    );
    frame.render_widget(banner, area);
}

fn render_stats(frame: &mut Frame, area: Rect, home: &HomeState, ctx: &LayoutContext) {
    let (read_label, sections_label) = if ctx.is_extra_small() {
        ("Read", "Sections")
    } else {
        ("Facts Read", "Sections")
    };
    let line = Line::from(vec![
        Span::styled(
            home.facts_read_count.to_string(),
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" {}", read_label), Style::default().fg(COLOR_DIM)),
        Span::raw("    "),
        Span::styled(
            SECTION_COUNT.to_string(),
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" {}", sections_label), Style::default().fg(COLOR_DIM)),
    ]);
    frame.render_widget(Paragraph::new(line).block(card("Your Statistics")), area);
}

fn render_latest_fact(frame: &mut Frame, area: Rect, home: &HomeState) {
    let text = vec![
        Line::from(Span::raw(home.last_fact.as_str())),
        Line::from(Span::styled(
            "press r to mark as read",
            Style::default().fg(COLOR_DIM),
        )),
    ];
    let paragraph = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .block(card("Latest Interesting Fact"));
    frame.render_widget(paragraph, area);
}

fn render_quick_access(frame: &mut Frame, area: Rect, cursor: usize, ctx: &LayoutContext) {
    let block = card("Quick Access");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = quick_access_columns(ctx);
    let rows = QuickAccess::ALL.len().div_ceil(columns);
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(1); rows])
        .split(inner);

    for (row, row_area) in row_areas.iter().enumerate() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, columns as u32); columns])
            .split(*row_area);
        for (col, cell) in cells.iter().enumerate() {
            let index = row * columns + col;
            let Some(entry) = QuickAccess::ALL.get(index) else {
                continue;
            };
            let selected = index == cursor;
            let marker = if selected { "▶ " } else { "  " };
            let label = truncate_to_width(entry.label(), cell.width.saturating_sub(2) as usize);
            let style = if selected {
                Style::default()
                    .fg(COLOR_ACCENT)
                    .bg(COLOR_CURSOR_BG)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(COLOR_HEADER)
            };
            frame.render_widget(
                Paragraph::new(Line::from(vec![
                    Span::styled(marker, Style::default().fg(COLOR_ACCENT)),
                    Span::styled(label, style),
                ])),
                *cell,
            );
        }
    }
}
