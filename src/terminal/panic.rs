//! Panic hook that gives the terminal back before the message prints.

use std::panic;

use tracing::error;

use super::setup::emergency_restore;

/// Install the hook. Call before creating the [`TerminalManager`](super::TerminalManager).
///
/// ```no_run
/// cluck::terminal::setup_panic_hook();
/// ```
pub fn setup_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        emergency_restore();
        error!(%panic_info, "panicked");
        original_hook(panic_info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_panic_hook_does_not_panic() {
        setup_panic_hook();
        // Put the default hook back for the other tests.
        let _ = panic::take_hook();
    }
}
