//! Tracing setup.
//!
//! The terminal belongs to the TUI, so log output goes to a file. The level
//! filter comes from `CLUCK_LOG` (standard `EnvFilter` syntax, default
//! `info`).

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;

pub const ENV_LOG: &str = "CLUCK_LOG";

const DEFAULT_DIRECTIVE: &str = "info";

/// Install the global subscriber.
///
/// Returns the file being written to, or `None` when logging is disabled
/// because no path is configured or the file cannot be opened. Startup
/// never fails because of logging.
pub fn init(config: &AppConfig) -> Option<PathBuf> {
    let path = config.log_file.as_ref()?;
    let file = match open_log_file(path) {
        Ok(file) => file,
        Err(_) => return None,
    };

    let filter = build_filter(std::env::var(ENV_LOG).ok().as_deref());
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .ok()?;

    Some(path.clone())
}

/// Filter from a directive string, falling back to `info` when it is
/// missing or does not parse.
pub fn build_filter(directive: Option<&str>) -> EnvFilter {
    directive
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Open `path` for appending, creating parent directories as needed.
pub fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    OpenOptions::new().create(true).append(true).open(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_log_file_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("cluck.log");
        open_log_file(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_open_log_file_appends() {
        use std::io::Write;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cluck.log");
        writeln!(open_log_file(&path).unwrap(), "first").unwrap();
        writeln!(open_log_file(&path).unwrap(), "second").unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "first\nsecond\n");
    }

    #[test]
    fn test_build_filter_falls_back_to_info() {
        assert_eq!(build_filter(None).to_string(), "info");
        assert_eq!(build_filter(Some("cluck=debug")).to_string(), "cluck=debug");
    }

    #[test]
    fn test_init_without_path_is_disabled() {
        let config = AppConfig::default().with_log_file(None);
        assert_eq!(init(&config), None);
    }
}
