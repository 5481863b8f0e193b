//! Entering and leaving the alternate screen.

use crossterm::{
    cursor::{Hide, Show},
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};

/// Switch to the alternate screen and hide the cursor. Mouse capture is
/// only requested when `mouse` is set, so terminals keep native selection
/// otherwise.
pub fn enter_tui_mode<W: Write>(writer: &mut W, mouse: bool) -> io::Result<()> {
    execute!(writer, EnterAlternateScreen, Hide)?;
    if mouse {
        execute!(writer, EnableMouseCapture)?;
    }
    Ok(())
}

/// Undo [`enter_tui_mode`] and raw mode. Errors are ignored so this can run
/// from `Drop` and from the panic hook, any number of times.
pub fn leave_tui_mode<W: Write>(writer: &mut W) {
    let _ = disable_raw_mode();
    // Disabling capture that was never enabled is harmless.
    let _ = execute!(writer, DisableMouseCapture, LeaveAlternateScreen, Show);
    let _ = writer.flush();
}

/// Best-effort restore on stdout, for paths that do not own the terminal.
pub fn emergency_restore() {
    leave_tui_mode(&mut io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_without_mouse_skips_capture() {
        let mut with_mouse = Vec::new();
        let mut without_mouse = Vec::new();
        enter_tui_mode(&mut with_mouse, true).unwrap();
        enter_tui_mode(&mut without_mouse, false).unwrap();
        assert!(with_mouse.len() > without_mouse.len());
        assert!(with_mouse.starts_with(&without_mouse));
    }

    #[test]
    fn test_leave_tui_mode_is_repeatable() {
        let mut buffer = Vec::new();
        leave_tui_mode(&mut buffer);
        let first = buffer.len();
        leave_tui_mode(&mut buffer);
        assert_eq!(buffer.len(), first * 2);
    }
}
