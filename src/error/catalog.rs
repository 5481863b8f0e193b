//! Construction-time catalog validation errors.

use thiserror::Error;

/// A seeded catalog violates an invariant the reducers depend on.
///
/// No action sequence can repair these, so they are reported once at
/// startup and the application refuses to run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The quiz has no questions to index into.
    #[error("quiz catalog is empty")]
    EmptyQuiz,

    /// A question offers fewer than two options.
    #[error("question '{question_id}' has {count} option(s), at least 2 are required")]
    TooFewOptions { question_id: String, count: usize },

    /// `correct_answer_index` does not index into `options`.
    #[error("question '{question_id}' marks answer {index} as correct but only has {options} options")]
    AnswerOutOfRange {
        question_id: String,
        index: usize,
        options: usize,
    },

    /// Two records in one catalog share an id.
    #[error("duplicate id '{id}' in {catalog} catalog")]
    DuplicateId { catalog: &'static str, id: String },
}

impl CatalogError {
    pub fn error_code(&self) -> &'static str {
        match self {
            CatalogError::EmptyQuiz => "CATALOG_EMPTY_QUIZ",
            CatalogError::TooFewOptions { .. } => "CATALOG_TOO_FEW_OPTIONS",
            CatalogError::AnswerOutOfRange { .. } => "CATALOG_ANSWER_OUT_OF_RANGE",
            CatalogError::DuplicateId { .. } => "CATALOG_DUPLICATE_ID",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_question() {
        let err = CatalogError::AnswerOutOfRange {
            question_id: "3".to_string(),
            index: 4,
            options: 4,
        };
        let msg = err.to_string();
        assert!(msg.contains("'3'"));
        assert!(msg.contains("answer 4"));
    }
}
