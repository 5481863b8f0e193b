//! Terminal ownership with RAII cleanup.
//!
//! ```no_run
//! use cluck::terminal::TerminalManager;
//!
//! fn main() -> color_eyre::Result<()> {
//!     let mut manager = TerminalManager::new(true)?;
//!     let terminal = manager.terminal();
//!     // ... draw ...
//!     Ok(())
//!     // restored when `manager` drops
//! }
//! ```

mod panic;
mod setup;

pub use panic::setup_panic_hook;
pub use setup::{emergency_restore, enter_tui_mode, leave_tui_mode};

use color_eyre::Result;
use crossterm::terminal::enable_raw_mode;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};

/// Restores the terminal when dropped. Cleanup runs at most once.
pub struct TerminalGuard {
    cleaned_up: bool,
}

impl TerminalGuard {
    fn new() -> Self {
        Self { cleaned_up: false }
    }

    pub fn cleanup(&mut self) {
        if self.cleaned_up {
            return;
        }
        self.cleaned_up = true;
        leave_tui_mode(&mut io::stdout());
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        self.cleanup();
    }
}

/// Raw mode plus alternate screen for as long as the manager lives.
///
/// The panic hook from [`setup_panic_hook`] covers the paths where `Drop`
/// never runs.
pub struct TerminalManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    guard: TerminalGuard,
}

impl TerminalManager {
    /// Take over the terminal, with mouse capture when `mouse` is set.
    pub fn new(mouse: bool) -> Result<Self> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        // Build the guard before anything else can fail so raw mode is
        // undone on every error path.
        let guard = TerminalGuard::new();
        enter_tui_mode(&mut stdout, mouse)?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        Ok(Self { terminal, guard })
    }

    pub fn terminal(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }

    pub fn size(&self) -> Result<ratatui::layout::Rect> {
        let size = self.terminal.size()?;
        Ok(ratatui::layout::Rect::new(0, 0, size.width, size.height))
    }

    /// Restore now instead of on drop.
    pub fn restore(&mut self) {
        self.guard.cleanup();
    }
}
