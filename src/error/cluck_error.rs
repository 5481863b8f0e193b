//! Unified error type.

use color_eyre::eyre::{eyre, Report};
use thiserror::Error;
use tracing::error;

use super::catalog::CatalogError;
use super::config::ConfigError;

/// Any error a cluck library entry point can return.
#[derive(Debug, Error)]
pub enum CluckError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result alias for cluck operations.
pub type CluckResult<T> = Result<T, CluckError>;

impl CluckError {
    /// Stable machine-readable code, written to the log alongside the message.
    pub fn error_code(&self) -> &'static str {
        match self {
            CluckError::Catalog(e) => e.error_code(),
            CluckError::Config(e) => e.error_code(),
            CluckError::Io(_) => "IO_ERROR",
            CluckError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    /// Message suitable for printing to the user before exiting.
    pub fn user_message(&self) -> String {
        match self {
            CluckError::Catalog(e) => format!("Built-in content is misconfigured: {}", e),
            CluckError::Config(e) => format!("Invalid configuration: {}", e),
            CluckError::Io(e) => format!("I/O failure: {}", e),
            CluckError::Serialization(e) => format!("Could not serialize data: {}", e),
        }
    }

    /// Whether the application cannot start at all with this error.
    pub fn is_fatal(&self) -> bool {
        matches!(self, CluckError::Catalog(_))
    }

    /// Log the error with its code and turn it into the report `main` exits with.
    pub fn into_report(self) -> Report {
        error!(
            code = self.error_code(),
            fatal = self.is_fatal(),
            "startup failed: {}",
            self
        );
        eyre!(self.user_message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_catalog_error_keeps_code() {
        let err: CluckError = CatalogError::EmptyQuiz.into();
        assert_eq!(err.error_code(), "CATALOG_EMPTY_QUIZ");
        assert!(err.user_message().contains("quiz catalog is empty"));
    }

    #[test]
    fn test_io_error_message() {
        let err = CluckError::from(std::io::Error::other("boom"));
        assert_eq!(err.error_code(), "IO_ERROR");
        assert!(err.user_message().contains("boom"));
    }

    #[test]
    fn test_report_carries_user_message() {
        let err: CluckError = ConfigError::UnknownTab("barn".to_string()).into();
        let expected = err.user_message();
        let report = err.into_report();
        assert_eq!(report.to_string(), expected);
        assert!(report.to_string().starts_with("Invalid configuration"));
    }
}
