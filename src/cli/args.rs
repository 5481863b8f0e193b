//! Command-line argument parsing for cluck.

use crate::config::parse_tab;
use crate::error::ConfigError;
use crate::models::Tab;

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Print the built-in catalogs as JSON
    DumpCatalog,
    /// Run the TUI application (default)
    RunTui { tab: Option<Tab> },
}

/// Parse command-line arguments and return the appropriate command.
///
/// The first element is the program name and is skipped. Unknown flags are
/// ignored.
///
/// # Examples
///
/// ```
/// use cluck::cli::args::{parse_args, CliCommand};
/// use cluck::models::Tab;
///
/// let args = vec!["cluck".to_string(), "--tab".to_string(), "quiz".to_string()];
/// assert_eq!(
///     parse_args(args.into_iter()),
///     Ok(CliCommand::RunTui { tab: Some(Tab::Quiz) })
/// );
/// ```
pub fn parse_args<I>(args: I) -> Result<CliCommand, ConfigError>
where
    I: Iterator<Item = String>,
{
    let mut tab = None;
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--dump-catalog" => return Ok(CliCommand::DumpCatalog),
            "--tab" | "-t" => {
                let value = args.next().ok_or(ConfigError::MissingValue("--tab"))?;
                tab = Some(parse_tab(&value)?);
            }
            other => {
                if let Some(value) = other.strip_prefix("--tab=") {
                    tab = Some(parse_tab(value)?);
                }
            }
        }
    }

    Ok(CliCommand::RunTui { tab })
}
