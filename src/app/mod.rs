//! Application state and input handling for the TUI.
//!
//! [`App`] owns the [`Store`] and the view-local [`ViewState`]. Key and
//! mouse events become [`Command`]s through the [`CommandRegistry`], and
//! commands become store dispatches in [`App::execute`]. The app never
//! mutates a snapshot; it only replaces its handle after a dispatch.

mod handlers;
mod navigation;
mod types;

pub use types::{FactsFocus, QuickAccess, ViewState, GALLERY_COLUMNS};

use crossterm::event::{KeyEvent, MouseEvent};
use tokio::sync::watch;
use tracing::debug;

use crate::config::AppConfig;
use crate::error::CluckResult;
use crate::input::{Command, CommandRegistry, InputContext};
use crate::models::Tab;
use crate::state::{RootAction, RootState};
use crate::store::{Snapshot, Store};
use crate::ui::LayoutContext;

pub struct App {
    store: Store,
    /// Latest published snapshot
    state: Snapshot,
    pub view: ViewState,
    registry: CommandRegistry,
    pub should_quit: bool,
    /// Set whenever something visible changed since the last draw
    pub needs_redraw: bool,
    /// Terminal size, used for mouse hit-testing
    pub layout: LayoutContext,
}

impl App {
    /// Build the app over the built-in catalogs and show the configured
    /// initial tab.
    pub fn new(config: &AppConfig) -> CluckResult<Self> {
        let mut app = Self::with_state(RootState::new()?);
        app.start(config.initial_tab);
        Ok(app)
    }

    /// App over an explicit initial state. Does not dispatch anything.
    pub fn with_state(initial: RootState) -> Self {
        let store = Store::new(initial);
        let state = store.state();
        Self {
            store,
            state,
            view: ViewState::default(),
            registry: CommandRegistry::new(),
            should_quit: false,
            needs_redraw: true,
            layout: LayoutContext::new(80, 24),
        }
    }

    /// Make `initial` visible: select it if it is not already selected,
    /// then let its slice know it appeared.
    pub fn start(&mut self, initial: Tab) {
        if self.state.selected_tab != initial {
            self.dispatch(RootAction::SelectTab(initial));
        }
        self.dispatch(RootAction::on_appear(initial));
    }

    pub fn state(&self) -> &RootState {
        &self.state
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::clone(&self.state)
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Receiver notified after every dispatch.
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.store.subscribe()
    }

    pub fn dispatch(&mut self, action: RootAction) {
        self.state = self.store.dispatch(action);
        self.mark_dirty();
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn input_context(&self) -> InputContext {
        InputContext::from_state(&self.state, &self.view)
    }

    pub fn update_terminal_dimensions(&mut self, width: u16, height: u16) {
        self.layout = LayoutContext::new(width, height);
        self.mark_dirty();
    }

    /// Handle a key press. Returns whether it mapped to a command.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let context = self.input_context();
        match self.registry.dispatch(key, &context) {
            Some(command) => {
                self.execute(command);
                true
            }
            None => false,
        }
    }

    pub fn handle_mouse(&mut self, event: MouseEvent) -> bool {
        match self.registry.dispatch_mouse(event, &self.layout) {
            Some(command) => {
                self.execute(command);
                true
            }
            None => false,
        }
    }

    /// Carry out one command against the current context.
    pub fn execute(&mut self, command: Command) {
        debug!(?command, tab = self.state.selected_tab.label(), "command");
        let context = self.input_context();
        match command {
            Command::Quit => self.quit(),
            Command::NextTab => self.select_tab(self.state.selected_tab.next()),
            Command::PrevTab => self.select_tab(self.state.selected_tab.prev()),
            Command::SwitchTab(tab) => self.select_tab(tab),
            Command::ToggleAbout => {
                self.view.show_about = !self.view.show_about;
                self.mark_dirty();
            }
            // Nothing else reaches the tab behind an open about panel.
            _ if self.view.show_about => {}
            _ => match context.tab {
                Tab::Home => self.handle_home(command),
                Tab::Gallery => self.handle_gallery(command),
                Tab::Facts => self.handle_facts(command),
                Tab::Quiz => self.handle_quiz(command),
            },
        }
    }
}
