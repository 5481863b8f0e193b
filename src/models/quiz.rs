use serde::{Deserialize, Serialize};

/// A multiple-choice question.
///
/// `correct_answer_index` must index into `options`; catalogs are checked
/// once when a [`crate::state::QuizState`] is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub id: String,
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer_index: usize,
    pub explanation: String,
}

impl QuizQuestion {
    pub fn new<S: Into<String>>(
        id: impl Into<String>,
        question: impl Into<String>,
        options: impl IntoIterator<Item = S>,
        correct_answer_index: usize,
        explanation: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            question: question.into(),
            options: options.into_iter().map(Into::into).collect(),
            correct_answer_index,
            explanation: explanation.into(),
        }
    }

    pub fn is_correct(&self, index: usize) -> bool {
        index == self.correct_answer_index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_correct_matches_only_the_answer_index() {
        let q = QuizQuestion::new("q", "?", ["a", "b", "c"], 1, "b");
        assert!(q.is_correct(1));
        assert!(!q.is_correct(0));
        assert!(!q.is_correct(7));
    }
}
