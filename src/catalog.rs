//! Built-in content catalogs.
//!
//! Each catalog is seeded once on first access and stays read-only for the
//! lifetime of the process. Slices hold an `Arc` to the shared slice, so
//! cloning a state never copies the records.

use std::collections::HashSet;
use std::sync::Arc;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::error::CatalogError;
use crate::models::{Fact, FactCategory, GalleryItem, QuizQuestion};

pub static FACTS: Lazy<Arc<[Fact]>> = Lazy::new(|| {
    vec![
        Fact::new(
            "1",
            "Lifespan",
            "Chickens can live up to 10-15 years, although most domestic chickens live 5-8 years.",
            FactCategory::Behavior,
        ),
        Fact::new(
            "2",
            "Egg Colors",
            "Chickens can lay eggs of different colors: white, brown, cream, greenish, and even blue!",
            FactCategory::Anatomy,
        ),
        Fact::new(
            "3",
            "Social Animals",
            "Chickens have a complex social hierarchy known as the 'pecking order'.",
            FactCategory::Behavior,
        ),
        Fact::new(
            "4",
            "Memory",
            "Chickens can remember up to 100 different faces and distinguish them.",
            FactCategory::Intelligence,
        ),
        Fact::new(
            "5",
            "Sleep",
            "Chickens sleep on perches, holding onto them with their claws to avoid falling.",
            FactCategory::Behavior,
        ),
        Fact::new(
            "6",
            "Body Temperature",
            "Normal chicken body temperature is 40-42°C, which is higher than human temperature.",
            FactCategory::Anatomy,
        ),
    ]
    .into()
});

pub static GALLERY: Lazy<Arc<[GalleryItem]>> = Lazy::new(|| {
    vec![
        GalleryItem::new(
            "1",
            "Rhode Island Red",
            "chicken1",
            "Popular breed for egg production",
        ),
        GalleryItem::new("2", "Leghorn", "chicken2", "Known for high egg production"),
        GalleryItem::new(
            "3",
            "Brahma",
            "chicken3",
            "Large breed with beautiful plumage",
        ),
        GalleryItem::new(
            "4",
            "Sussex",
            "chicken4",
            "Dual-purpose breed for eggs and meat",
        ),
    ]
    .into()
});

pub static QUIZ: Lazy<Arc<[QuizQuestion]>> = Lazy::new(|| {
    vec![
        QuizQuestion::new(
            "1",
            "How many years can a chicken live?",
            ["3-5 years", "5-8 years", "10-15 years", "20+ years"],
            2,
            "Chickens can live up to 10-15 years with proper care.",
        ),
        QuizQuestion::new(
            "2",
            "What color eggs can a chicken lay?",
            ["Only white", "Only brown", "White and brown", "Various colors"],
            3,
            "Chickens can lay eggs of different colors: white, brown, cream, greenish, and even blue!",
        ),
        QuizQuestion::new(
            "3",
            "What is the 'pecking order'?",
            [
                "Feeding method",
                "Social hierarchy",
                "Sleeping method",
                "Breeding method",
            ],
            1,
            "Pecking order is the social hierarchy in a chicken flock.",
        ),
        QuizQuestion::new(
            "4",
            "How many faces can a chicken remember?",
            ["10", "50", "100", "Cannot remember"],
            2,
            "Chickens can remember up to 100 different faces and distinguish them.",
        ),
        QuizQuestion::new(
            "5",
            "What is the normal body temperature of a chicken?",
            ["36-37°C", "38-39°C", "40-42°C", "43-45°C"],
            2,
            "Normal chicken body temperature is 40-42°C.",
        ),
    ]
    .into()
});

/// Text shown on the home dashboard's "Latest Interesting Fact" card.
pub const LATEST_FACT: &str = "Chickens can live up to 10-15 years!";

/// Banner at the top of the home dashboard.
pub const WELCOME_MESSAGE: &str = "Welcome to Chicken App! 🐔";

/// The three catalogs bundled together, the shape `--dump-catalog` prints.
#[derive(Debug, Clone, Serialize)]
pub struct Catalogs {
    pub facts: Arc<[Fact]>,
    pub gallery: Arc<[GalleryItem]>,
    pub quiz: Arc<[QuizQuestion]>,
}

impl Catalogs {
    /// The built-in catalogs.
    pub fn builtin() -> Self {
        Self {
            facts: Arc::clone(&FACTS),
            gallery: Arc::clone(&GALLERY),
            quiz: Arc::clone(&QUIZ),
        }
    }

    /// Check every catalog invariant the reducers and views rely on.
    pub fn validate(&self) -> Result<(), CatalogError> {
        unique_ids("facts", self.facts.iter().map(|f| f.id.as_str()))?;
        unique_ids("gallery", self.gallery.iter().map(|g| g.id.as_str()))?;
        validate_quiz(&self.quiz)
    }
}

/// Validate a question catalog.
///
/// The quiz reducer indexes `questions[current_question_index]` without
/// bounds checks, so an empty catalog or an out-of-range answer is rejected
/// here instead.
pub fn validate_quiz(questions: &[QuizQuestion]) -> Result<(), CatalogError> {
    if questions.is_empty() {
        return Err(CatalogError::EmptyQuiz);
    }
    for q in questions {
        if q.options.len() < 2 {
            return Err(CatalogError::TooFewOptions {
                question_id: q.id.clone(),
                count: q.options.len(),
            });
        }
        if q.correct_answer_index >= q.options.len() {
            return Err(CatalogError::AnswerOutOfRange {
                question_id: q.id.clone(),
                index: q.correct_answer_index,
                options: q.options.len(),
            });
        }
    }
    unique_ids("quiz", questions.iter().map(|q| q.id.as_str()))
}

fn unique_ids<'a>(
    catalog: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(CatalogError::DuplicateId {
                catalog,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalogs_are_valid() {
        assert_eq!(Catalogs::builtin().validate(), Ok(()));
    }

    #[test]
    fn test_builtin_catalog_sizes() {
        assert_eq!(FACTS.len(), 6);
        assert_eq!(GALLERY.len(), 4);
        assert_eq!(QUIZ.len(), 5);
    }

    #[test]
    fn test_builtin_catalogs_share_storage() {
        let a = Catalogs::builtin();
        let b = Catalogs::builtin();
        assert!(Arc::ptr_eq(&a.facts, &b.facts));
        assert!(Arc::ptr_eq(&a.quiz, &b.quiz));
    }

    #[test]
    fn test_validate_rejects_empty_quiz() {
        assert_eq!(validate_quiz(&[]), Err(CatalogError::EmptyQuiz));
    }

    #[test]
    fn test_validate_rejects_out_of_range_answer() {
        let q = QuizQuestion::new("x", "?", ["a", "b"], 2, "");
        assert_eq!(
            validate_quiz(&[q]),
            Err(CatalogError::AnswerOutOfRange {
                question_id: "x".to_string(),
                index: 2,
                options: 2,
            })
        );
    }

    #[test]
    fn test_validate_rejects_single_option() {
        let q = QuizQuestion::new("x", "?", ["only"], 0, "");
        assert!(matches!(
            validate_quiz(&[q]),
            Err(CatalogError::TooFewOptions { count: 1, .. })
        ));
    }

    #[test]
    fn test_validate_rejects_duplicate_question_ids() {
        let a = QuizQuestion::new("1", "?", ["a", "b"], 0, "");
        let b = QuizQuestion::new("1", "?", ["a", "b"], 1, "");
        assert_eq!(
            validate_quiz(&[a, b]),
            Err(CatalogError::DuplicateId {
                catalog: "quiz",
                id: "1".to_string(),
            })
        );
    }
}
