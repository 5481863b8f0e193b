//! Error types for cluck.
//!
//! Reducers are total and never fail, so errors only arise at the edges:
//!
//! - **Catalog errors**: a seeded catalog breaks an invariant the reducers rely
//!   on (empty quiz, answer index out of range). These are fatal at startup.
//! - **Config errors**: an environment variable or CLI flag could not be parsed.
//!
//! Both are unified under [`CluckError`] so library entry points can return
//! [`CluckResult<T>`].

mod catalog;
mod cluck_error;
mod config;

pub use catalog::CatalogError;
pub use cluck_error::{CluckError, CluckResult};
pub use config::ConfigError;

#[cfg(test)]
mod integration_tests {
    use super::*;

    #[test]
    fn test_every_error_kind_has_code_and_message() {
        let errors: Vec<CluckError> = vec![
            CatalogError::EmptyQuiz.into(),
            CatalogError::AnswerOutOfRange {
                question_id: "1".to_string(),
                index: 9,
                options: 4,
            }
            .into(),
            ConfigError::UnknownTab("settings".to_string()).into(),
            CluckError::Io(std::io::Error::other("disk")),
        ];

        for err in errors {
            assert!(!err.error_code().is_empty());
            assert!(!err.user_message().is_empty());
        }
    }

    #[test]
    fn test_only_catalog_errors_are_fatal() {
        let catalog: CluckError = CatalogError::EmptyQuiz.into();
        let config: CluckError = ConfigError::MissingValue("--tab").into();
        assert!(catalog.is_fatal());
        assert!(!config.is_fatal());
    }
}
