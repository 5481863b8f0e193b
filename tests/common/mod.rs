//! Common test utilities for integration tests.
//!
//! Each test binary pulls this in with `mod common;` and uses only part of
//! it, hence the `dead_code` allowance.

#![allow(dead_code)]

use cluck::app::{App, ViewState};
use cluck::config::AppConfig;
use cluck::models::Tab;
use cluck::state::{dispatch, RootAction, RootState};
use cluck::ui;
use ratatui::{backend::TestBackend, Terminal};

/// Fresh state over the built-in catalogs.
pub fn fresh_state() -> RootState {
    RootState::new().expect("built-in catalogs are valid")
}

/// Fold `actions` through the root reducer.
pub fn apply<I>(state: RootState, actions: I) -> RootState
where
    I: IntoIterator<Item = RootAction>,
{
    actions.into_iter().fold(state, dispatch)
}

/// App started on `tab`, without touching the process environment.
pub fn app_on(tab: Tab) -> App {
    let config = AppConfig::default()
        .with_initial_tab(tab)
        .with_log_file(None);
    App::new(&config).expect("app starts")
}

/// Render a full frame and return the buffer as one string per row.
pub fn render_rows(state: &RootState, view: &ViewState, width: u16, height: u16) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("test backend");
    terminal
        .draw(|f| ui::render(f, state, view))
        .expect("draw");
    terminal
        .backend()
        .buffer()
        .content()
        .chunks(width as usize)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect())
        .collect()
}

/// Render a full frame and return the whole buffer as a single string.
pub fn render_text(state: &RootState, view: &ViewState, width: u16, height: u16) -> String {
    render_rows(state, view, width, height).join("\n")
}
