// Key and mouse events driven through the App into the store.

mod common;

use common::app_on;

use cluck::models::{FactCategory, Tab};
use cluck::ui::tab_bar;
use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn type_text(app: &mut cluck::app::App, text: &str) {
    for c in text.chars() {
        app.handle_key(key(KeyCode::Char(c)));
    }
}

#[test]
fn test_digit_keys_switch_tabs() {
    let mut app = app_on(Tab::Home);
    for (digit, tab) in ['2', '3', '4', '1'].into_iter().zip([
        Tab::Gallery,
        Tab::Facts,
        Tab::Quiz,
        Tab::Home,
    ]) {
        app.handle_key(key(KeyCode::Char(digit)));
        assert_eq!(app.state().selected_tab, tab);
    }
}

#[test]
fn test_search_captures_letters_that_are_shortcuts_elsewhere() {
    let mut app = app_on(Tab::Facts);
    app.handle_key(key(KeyCode::Char('/')));
    type_text(&mut app, "q1r");

    assert_eq!(app.state().selected_tab, Tab::Facts);
    assert!(!app.should_quit);
    assert_eq!(app.state().facts.search_text, "q1r");
}

#[test]
fn test_search_then_escape_keeps_query() {
    let mut app = app_on(Tab::Facts);
    app.handle_key(key(KeyCode::Char('/')));
    type_text(&mut app, "Egg");
    app.handle_key(key(KeyCode::Esc));

    let titles: Vec<String> = app
        .state()
        .facts
        .filtered_facts()
        .iter()
        .map(|f| f.title.clone())
        .collect();
    assert_eq!(titles, ["Egg Colors"]);

    // A second Esc, now in the list, clears the filters.
    app.handle_key(key(KeyCode::Esc));
    assert_eq!(app.state().facts.search_text, "");
}

#[test]
fn test_bracket_keys_cycle_categories() {
    let mut app = app_on(Tab::Facts);
    app.handle_key(key(KeyCode::Char(']')));
    app.handle_key(key(KeyCode::Char(']')));
    assert_eq!(app.state().facts.selected_category, Some(FactCategory::Anatomy));
    app.handle_key(key(KeyCode::Char('[')));
    assert_eq!(app.state().facts.selected_category, Some(FactCategory::Behavior));
}

#[test]
fn test_quiz_letters_answer_once() {
    let mut app = app_on(Tab::Quiz);
    app.handle_key(key(KeyCode::Char('c')));
    app.handle_key(key(KeyCode::Char('c')));
    app.handle_key(key(KeyCode::Char('a')));

    let quiz = &app.state().quiz;
    assert_eq!(quiz.score, 1);
    assert_eq!(quiz.selected_answer_index, Some(2));
}

#[test]
fn test_full_quiz_by_keyboard() {
    let mut app = app_on(Tab::Quiz);
    for letter in ['c', 'd', 'b', 'c', 'c'] {
        app.handle_key(key(KeyCode::Char(letter)));
        app.handle_key(key(KeyCode::Char('n')));
    }
    assert!(app.state().quiz.quiz_completed);
    assert_eq!(app.state().quiz.score, 5);

    app.handle_key(key(KeyCode::Char('r')));
    assert!(!app.state().quiz.quiz_completed);
    assert_eq!(app.state().quiz.score, 0);
}

#[test]
fn test_gallery_enter_and_escape() {
    let mut app = app_on(Tab::Gallery);
    app.handle_key(key(KeyCode::Down));
    app.handle_key(key(KeyCode::Enter));
    assert_eq!(app.state().gallery.selected_image.as_deref(), Some("3"));
    assert_eq!(
        app.state().gallery.selected_item().map(|i| i.name.as_str()),
        Some("Brahma")
    );

    app.handle_key(key(KeyCode::Esc));
    assert_eq!(app.state().gallery.selected_image, None);
}

#[test]
fn test_click_on_tab_bar_switches_tab() {
    let mut app = app_on(Tab::Home);
    app.update_terminal_dimensions(120, 40);
    let ranges = tab_bar::tab_ranges(&app.layout);
    let (tab, range) = ranges[3].clone();

    let click = MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: range.start,
        row: 1,
        modifiers: KeyModifiers::NONE,
    };
    assert!(app.handle_mouse(click));
    assert_eq!(app.state().selected_tab, tab);
}

#[test]
fn test_home_read_fact_key() {
    let mut app = app_on(Tab::Home);
    app.handle_key(key(KeyCode::Char('r')));
    app.handle_key(key(KeyCode::Char(' ')));
    assert_eq!(app.state().home.facts_read_count, 2);
}
