//! Runtime configuration.
//!
//! Values come from defaults, then environment variables, then CLI flags,
//! each layer overriding the previous one.
//!
//! | Variable | Effect |
//! |---|---|
//! | `CLUCK_TAB` | Tab shown at startup |
//! | `CLUCK_TICK_MS` | Event-loop tick in milliseconds |
//! | `CLUCK_LOG_FILE` | Log file path |
//! | `CLUCK_NO_MOUSE` | Disable mouse capture when set |
//!
//! # Example
//!
//! ```
//! use cluck::config::AppConfig;
//! use cluck::models::Tab;
//!
//! let config = AppConfig::default()
//!     .with_initial_tab(Tab::Quiz)
//!     .with_tick_rate_ms(100);
//! assert_eq!(config.initial_tab, Tab::Quiz);
//! ```

use std::path::PathBuf;
use std::time::Duration;

use crate::error::ConfigError;
use crate::models::Tab;

pub const ENV_TAB: &str = "CLUCK_TAB";
pub const ENV_TICK_MS: &str = "CLUCK_TICK_MS";
pub const ENV_LOG_FILE: &str = "CLUCK_LOG_FILE";
pub const ENV_NO_MOUSE: &str = "CLUCK_NO_MOUSE";

const DEFAULT_TICK_MS: u64 = 250;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Tab selected right after startup
    pub initial_tab: Tab,
    /// How long the event loop waits for input before redrawing
    pub tick_rate_ms: u64,
    /// Where tracing output goes; `None` disables file logging
    pub log_file: Option<PathBuf>,
    /// Capture mouse events (clicks on tabs and list rows)
    pub mouse: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            initial_tab: Tab::Home,
            tick_rate_ms: DEFAULT_TICK_MS,
            log_file: default_log_file(),
            mouse: true,
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_initial_tab(mut self, tab: Tab) -> Self {
        self.initial_tab = tab;
        self
    }

    pub fn with_tick_rate_ms(mut self, ms: u64) -> Self {
        self.tick_rate_ms = ms;
        self
    }

    pub fn with_log_file(mut self, path: Option<PathBuf>) -> Self {
        self.log_file = path;
        self
    }

    pub fn with_mouse(mut self, enabled: bool) -> Self {
        self.mouse = enabled;
        self
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    /// Defaults overridden by the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`AppConfig::from_env`], with a `--tab` flag taking precedence.
    ///
    /// When `cli_tab` is set, `CLUCK_TAB` is not read at all, so a bad value
    /// there cannot abort a run that names its tab on the command line.
    pub fn from_env_with_tab(cli_tab: Option<Tab>) -> Result<Self, ConfigError> {
        Self::from_lookup_with_tab(|key| std::env::var(key).ok(), cli_tab)
    }

    pub fn from_lookup_with_tab<F>(lookup: F, cli_tab: Option<Tab>) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        match cli_tab {
            Some(tab) => Ok(Self::from_lookup(|key| {
                if key == ENV_TAB {
                    None
                } else {
                    lookup(key)
                }
            })?
            .with_initial_tab(tab)),
            None => Self::from_lookup(lookup),
        }
    }

    /// Defaults overridden by whatever `lookup` returns for each variable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(name) = lookup(ENV_TAB) {
            config.initial_tab = parse_tab(&name)?;
        }
        if let Some(raw) = lookup(ENV_TICK_MS) {
            config.tick_rate_ms = parse_tick_rate(&raw)?;
        }
        if let Some(path) = lookup(ENV_LOG_FILE) {
            config.log_file = if path.is_empty() {
                None
            } else {
                Some(PathBuf::from(path))
            };
        }
        if lookup(ENV_NO_MOUSE).is_some() {
            config.mouse = false;
        }

        Ok(config)
    }
}

pub fn parse_tab(name: &str) -> Result<Tab, ConfigError> {
    Tab::from_name(name).ok_or_else(|| ConfigError::UnknownTab(name.to_string()))
}

fn parse_tick_rate(raw: &str) -> Result<u64, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(ms) if ms > 0 => Ok(ms),
        _ => Err(ConfigError::InvalidTickRate(raw.to_string())),
    }
}

/// `<data-local-dir>/cluck/cluck.log`, if the platform has such a directory.
pub fn default_log_file() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("cluck").join("cluck.log"))
}
