//! Terminal rendering.
//!
//! Every view is a pure function of the current snapshot, the view-local
//! [`ViewState`] and a [`LayoutContext`]. Nothing here dispatches actions.
//!
//! ```text
//! ┌ tab bar ─────────────────────────┐
//! │ body of the selected tab         │
//! │                 (overlays on top) │
//! └──────────────────────────────────┘
//!  footer hints
//! ```

pub mod about;
pub mod components;
pub mod facts;
pub mod footer;
pub mod gallery;
pub mod helpers;
pub mod home;
pub mod layout;
pub mod quiz;
pub mod tab_bar;
pub mod theme;

pub use layout::{breakpoints, LayoutContext};

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

use crate::app::ViewState;
use crate::input::InputContext;
use crate::models::Tab;
use crate::state::RootState;

/// Split the frame into tab bar, body and footer.
pub fn frame_areas(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(tab_bar::HEIGHT),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);
    (chunks[0], chunks[1], chunks[2])
}

/// Draw one full frame.
pub fn render(frame: &mut Frame, state: &RootState, view: &ViewState) {
    let area = frame.area();
    let ctx = LayoutContext::from_rect(area);
    let (tabs, body, footer_area) = frame_areas(area);

    tab_bar::render_tab_bar(frame, tabs, state.selected_tab, &ctx);

    match state.selected_tab {
        Tab::Home => home::render_home(frame, body, &state.home, view, &ctx),
        Tab::Gallery => gallery::render_gallery(frame, body, &state.gallery, view, &ctx),
        Tab::Facts => facts::render_facts(frame, body, &state.facts, view, &ctx),
        Tab::Quiz => quiz::render_quiz(frame, body, &state.quiz, view, &ctx),
    }

    if state.selected_tab == Tab::Gallery {
        if let Some(item) = state.gallery.selected_item() {
            gallery::render_gallery_detail(frame, body, item, &ctx);
        }
    }
    if view.show_about {
        about::render_about(frame, body, &ctx);
    }

    let context = InputContext::from_state(state, view);
    footer::render_footer(frame, footer_area, &context, &ctx);
}
