//! CLI module for cluck.
//!
//! Handles flags that run instead of the TUI:
//! - `--version` / `-V`
//! - `--help` / `-h`
//! - `--dump-catalog`
//!
//! `--tab <name>` is carried through in [`CliCommand::RunTui`] and applied
//! on top of the environment configuration.

pub mod args;
pub mod catalog;
pub mod version;

pub use args::{parse_args, CliCommand};
pub use catalog::{handle_dump_catalog_command, write_catalog};
pub use version::{handle_version_command, VERSION};

use color_eyre::Result;

pub const USAGE: &str = "\
Usage: cluck [OPTIONS]

Options:
  -t, --tab <NAME>   Start on a tab: home, gallery, facts or quiz
      --dump-catalog Print the built-in facts, gallery and quiz as JSON
  -V, --version      Print version
  -h, --help         Print this help

Environment:
  CLUCK_TAB, CLUCK_TICK_MS, CLUCK_LOG_FILE, CLUCK_NO_MOUSE, CLUCK_LOG";

/// Run a CLI command if applicable.
///
/// # Returns
///
/// * `None` - If the command is `RunTui` (no CLI action needed)
/// * `Some(Ok(()))` - If a CLI command executed successfully
/// * `Some(Err(e))` - If a CLI command failed
pub fn run_cli_command(command: &CliCommand) -> Option<Result<()>> {
    match command {
        CliCommand::Version => handle_version_command(),
        CliCommand::Help => {
            println!("{}", USAGE);
            Some(Ok(()))
        }
        CliCommand::DumpCatalog => Some(handle_dump_catalog_command().map_err(Into::into)),
        CliCommand::RunTui { .. } => None,
    }
}
