//! Input handling: keys and mouse events to [`Command`]s.
//!
//! - [`Command`]: what the user asked for
//! - [`InputContext`]: active tab and open modal
//! - [`KeybindingConfig`]: default key layers
//! - [`CommandRegistry`]: resolves an event against a context

pub mod command;
pub mod context;
pub mod keybindings;
pub mod registry;

pub use command::Command;
pub use context::{InputContext, ModalType};
pub use keybindings::{hints, KeyCombo, KeybindingConfig};
pub use registry::CommandRegistry;
