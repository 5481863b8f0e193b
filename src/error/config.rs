//! Configuration parsing errors.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A tab name matched none of Home, Gallery, Facts or Quiz.
    #[error("unknown tab '{0}' (expected home, gallery, facts or quiz)")]
    UnknownTab(String),

    /// Tick rate was not a positive integer of milliseconds.
    #[error("invalid tick rate '{0}' (expected milliseconds > 0)")]
    InvalidTickRate(String),

    /// A flag that takes a value was given without one.
    #[error("flag {0} requires a value")]
    MissingValue(&'static str),
}

impl ConfigError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ConfigError::UnknownTab(_) => "CONFIG_UNKNOWN_TAB",
            ConfigError::InvalidTickRate(_) => "CONFIG_INVALID_TICK_RATE",
            ConfigError::MissingValue(_) => "CONFIG_MISSING_VALUE",
        }
    }
}
