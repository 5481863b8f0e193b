//! Quiz tab: the current question, feedback after answering, and the
//! completion screen.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

use crate::app::ViewState;
use crate::state::{QuizPhase, QuizState};

use super::layout::LayoutContext;
use super::theme::{
    grade_color, COLOR_ACCENT, COLOR_BORDER, COLOR_CORRECT, COLOR_CURSOR_BG, COLOR_DIM,
    COLOR_HEADER, COLOR_INCORRECT,
};

/// Letter shown in front of option `index`.
pub fn option_letter(index: usize) -> char {
    (b'A' + (index % 26) as u8) as char
}

/// Label of the button that advances past a revealed answer.
pub fn advance_label(quiz: &QuizState) -> &'static str {
    if quiz.is_last_question() {
        "Finish Quiz"
    } else {
        "Next Question"
    }
}

pub fn render_quiz(
    frame: &mut Frame,
    area: Rect,
    quiz: &QuizState,
    view: &ViewState,
    ctx: &LayoutContext,
) {
    match quiz.phase() {
        QuizPhase::Completed => render_completed(frame, area, quiz),
        QuizPhase::InProgress {
            index,
            selection,
            revealed,
        } => render_question(frame, area, quiz, index, selection, revealed, view, ctx),
    }
}

#[allow(clippy::too_many_arguments)]
fn render_question(
    frame: &mut Frame,
    area: Rect,
    quiz: &QuizState,
    index: usize,
    selection: Option<usize>,
    revealed: bool,
    view: &ViewState,
    ctx: &LayoutContext,
) {
    let question = quiz.current_question();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Length(1), // progress
            Constraint::Length(1),
            Constraint::Min(4),    // question + options
            Constraint::Length(if revealed { 5 } else { 0 }),
        ])
        .split(area);

    let header = Line::from(vec![
        Span::styled(
            format!("Question {} of {}", index + 1, quiz.question_count()),
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled(
            format!("Score: {}", quiz.score),
            Style::default().fg(COLOR_ACCENT),
        ),
    ]);
    frame.render_widget(Paragraph::new(header), chunks[0]);

    let ratio = (index + 1) as f64 / quiz.question_count() as f64;
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(COLOR_ACCENT))
        .ratio(ratio.clamp(0.0, 1.0))
        .label("");
    frame.render_widget(gauge, chunks[1]);

    let mut lines = vec![
        Line::from(Span::styled(
            question.question.as_str(),
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
    ];
    for (i, option) in question.options.iter().enumerate() {
        lines.push(option_line(
            i,
            option,
            question.correct_answer_index,
            selection,
            revealed,
            view.quiz_cursor,
        ));
    }
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }),
        chunks[3],
    );

    if revealed {
        render_feedback(frame, chunks[4], quiz, ctx);
    }
}

fn option_line(
    index: usize,
    option: &str,
    correct: usize,
    selection: Option<usize>,
    revealed: bool,
    cursor: usize,
) -> Line<'static> {
    let letter = option_letter(index);
    let (mark, style) = if revealed && index == correct {
        ("✓", Style::default().fg(COLOR_CORRECT).add_modifier(Modifier::BOLD))
    } else if revealed && selection == Some(index) {
        ("✗", Style::default().fg(COLOR_INCORRECT).add_modifier(Modifier::BOLD))
    } else if revealed {
        (" ", Style::default().fg(COLOR_DIM))
    } else if index == cursor {
        ("▶", Style::default().fg(COLOR_ACCENT).bg(COLOR_CURSOR_BG))
    } else {
        (" ", Style::default().fg(COLOR_HEADER))
    };
    Line::from(vec![
        Span::styled(format!("{} ", mark), style),
        Span::styled(format!("{}. {}", letter, option), style),
    ])
}

fn render_feedback(frame: &mut Frame, area: Rect, quiz: &QuizState, ctx: &LayoutContext) {
    let correct = quiz.answered_correctly().unwrap_or(false);
    let (verdict, color) = if correct {
        ("Correct!", COLOR_CORRECT)
    } else {
        ("Incorrect", COLOR_INCORRECT)
    };
    let title = format!(" {} ", verdict);
    let hint = if ctx.is_extra_small() {
        format!("Enter: {}", advance_label(quiz))
    } else {
        format!("press Enter for {}", advance_label(quiz))
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
        .title(Span::styled(title, Style::default().fg(color).add_modifier(Modifier::BOLD)));
    let text = vec![
        Line::from(quiz.current_question().explanation.clone()),
        Line::from(Span::styled(hint, Style::default().fg(COLOR_DIM))),
    ];
    frame.render_widget(
        Paragraph::new(text).wrap(Wrap { trim: true }).block(block),
        area,
    );
}

fn render_completed(frame: &mut Frame, area: Rect, quiz: &QuizState) {
    let grade = quiz.grade();
    let lines = vec![
        Line::default(),
        Line::from(Span::styled(
            "Quiz Completed!",
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(format!(
            "Your score: {} out of {}",
            quiz.score,
            quiz.question_count()
        )),
        Line::from(Span::styled(
            format!("{:.0}%", quiz.percentage()),
            Style::default().fg(grade_color(grade)).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            grade.label(),
            Style::default().fg(grade_color(grade)),
        )),
        Line::default(),
        Line::from(Span::styled(
            "press r to Try Again",
            Style::default().fg(COLOR_DIM),
        )),
    ];
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));
    frame.render_widget(Paragraph::new(lines).centered().block(block), area);
}
