// Full-frame rendering tests against ratatui's TestBackend.

mod common;

use common::{apply, fresh_state, render_rows, render_text};

use cluck::app::{FactsFocus, ViewState};
use cluck::models::{FactCategory, Tab};
use cluck::state::{FactsAction, GalleryAction, QuizAction, RootAction};

#[test]
fn test_tab_bar_lists_every_tab() {
    let text = render_text(&fresh_state(), &ViewState::default(), 100, 30);
    for tab in Tab::ALL {
        assert!(text.contains(tab.label()), "missing {:?}", tab);
    }
}

#[test]
fn test_home_is_default_screen() {
    let text = render_text(&fresh_state(), &ViewState::default(), 100, 30);
    assert!(text.contains("Your Statistics"));
    assert!(text.contains("Latest Interesting Fact"));
    assert!(text.contains("Quick Access"));
}

#[test]
fn test_footer_is_last_row() {
    let rows = render_rows(&fresh_state(), &ViewState::default(), 100, 30);
    let footer = rows.last().expect("rows");
    assert!(footer.contains("quit"));
}

#[test]
fn test_gallery_detail_overlay() {
    let state = apply(
        fresh_state(),
        [
            RootAction::SelectTab(Tab::Gallery),
            RootAction::Gallery(GalleryAction::SelectImage(Some("4".to_string()))),
        ],
    );
    let text = render_text(&state, &ViewState::default(), 100, 30);
    assert!(text.contains("Dual-purpose breed for eggs and meat"));
    assert!(text.contains("Size: Medium"));
}

#[test]
fn test_unknown_gallery_id_shows_no_overlay() {
    let state = apply(
        fresh_state(),
        [
            RootAction::SelectTab(Tab::Gallery),
            RootAction::Gallery(GalleryAction::SelectImage(Some("99".to_string()))),
        ],
    );
    let text = render_text(&state, &ViewState::default(), 100, 30);
    assert!(!text.contains("Additional Information"));
}

#[test]
fn test_facts_search_focus_shows_typed_text() {
    let state = apply(
        fresh_state(),
        [
            RootAction::SelectTab(Tab::Facts),
            RootAction::Facts(FactsAction::SearchTextChanged("memory".to_string())),
        ],
    );
    let view = ViewState {
        facts_focus: FactsFocus::Search,
        ..ViewState::default()
    };
    let text = render_text(&state, &view, 120, 30);
    assert!(text.contains("memory"));
    assert!(text.contains("Memory"));
    assert!(!text.contains("Egg Colors"));
}

#[test]
fn test_facts_category_chip_filters_list() {
    let state = apply(
        fresh_state(),
        [
            RootAction::SelectTab(Tab::Facts),
            RootAction::Facts(FactsAction::SelectCategory(Some(FactCategory::Intelligence))),
        ],
    );
    let text = render_text(&state, &ViewState::default(), 120, 30);
    assert!(text.contains("Memory"));
    assert!(!text.contains("Sleep"));
}

#[test]
fn test_quiz_completion_screen() {
    let mut actions = vec![RootAction::SelectTab(Tab::Quiz)];
    for _ in 0..5 {
        actions.push(RootAction::Quiz(QuizAction::SelectAnswer(0)));
        actions.push(RootAction::Quiz(QuizAction::NextQuestion));
    }
    let state = apply(fresh_state(), actions);
    let text = render_text(&state, &ViewState::default(), 100, 30);
    assert!(text.contains("Your score: 0 out of 5"));
    assert!(text.contains("Try again"));
}

#[test]
fn test_about_panel_overlays_any_tab() {
    let view = ViewState {
        show_about: true,
        ..ViewState::default()
    };
    let state = apply(fresh_state(), [RootAction::SelectTab(Tab::Quiz)]);
    let text = render_text(&state, &view, 100, 30);
    assert!(text.contains("About"));
    assert!(text.contains(cluck::cli::VERSION));
}

#[test]
fn test_tiny_terminal_does_not_panic() {
    for tab in Tab::ALL {
        let state = apply(fresh_state(), [RootAction::SelectTab(tab)]);
        render_rows(&state, &ViewState::default(), 20, 6);
    }
}
