//! Quiz slice: a linear walk over the question catalog with scoring.
//!
//! ```text
//! InProgress(index, None, false) --SelectAnswer(i)--> InProgress(index, Some(i), true)
//! InProgress(index < last, ..)   --NextQuestion-->    InProgress(index + 1, None, false)
//! InProgress(last, ..)           --NextQuestion-->    Completed
//! any                            --RestartQuiz-->     InProgress(0, None, false), score 0
//! ```

use std::sync::Arc;

use crate::catalog::{validate_quiz, QUIZ};
use crate::error::CatalogError;
use crate::models::QuizQuestion;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizState {
    questions: Arc<[QuizQuestion]>,
    pub current_question_index: usize,
    pub selected_answer_index: Option<usize>,
    pub show_result: bool,
    pub score: u32,
    pub quiz_completed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizAction {
    SelectAnswer(usize),
    NextQuestion,
    RestartQuiz,
    OnAppear,
}

/// Where the quiz currently is, derived from the stored flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    InProgress {
        index: usize,
        selection: Option<usize>,
        revealed: bool,
    },
    Completed,
}

/// Result band for a finished quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grade {
    Excellent,
    Good,
    NotBad,
    TryAgain,
}

impl Grade {
    /// Band for a percentage in `0.0..=100.0`. Lower bounds are inclusive.
    pub fn from_percentage(percentage: f64) -> Grade {
        if percentage >= 80.0 {
            Grade::Excellent
        } else if percentage >= 60.0 {
            Grade::Good
        } else if percentage >= 40.0 {
            Grade::NotBad
        } else {
            Grade::TryAgain
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Grade::Excellent => "Excellent",
            Grade::Good => "Good",
            Grade::NotBad => "Not bad",
            Grade::TryAgain => "Try again",
        }
    }
}

impl QuizState {
    /// Build a quiz over `questions`, rejecting catalogs the reducer could
    /// index out of bounds.
    pub fn new(questions: Arc<[QuizQuestion]>) -> Result<Self, CatalogError> {
        validate_quiz(&questions)?;
        Ok(Self {
            questions,
            current_question_index: 0,
            selected_answer_index: None,
            show_result: false,
            score: 0,
            quiz_completed: false,
        })
    }

    /// Quiz over the built-in questions.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::new(Arc::clone(&QUIZ))
    }

    pub fn reduce(&mut self, action: QuizAction) {
        match action {
            QuizAction::SelectAnswer(index) => {
                self.selected_answer_index = Some(index);
                self.show_result = true;
                // Scores on every dispatch. Callers must stop offering answers
                // once `show_result` is set.
                if self.current_question().is_correct(index) {
                    self.score += 1;
                }
            }
            QuizAction::NextQuestion => {
                if !self.is_last_question() {
                    self.current_question_index += 1;
                    self.selected_answer_index = None;
                    self.show_result = false;
                } else {
                    self.quiz_completed = true;
                }
            }
            QuizAction::RestartQuiz => {
                self.current_question_index = 0;
                self.selected_answer_index = None;
                self.show_result = false;
                self.score = 0;
                self.quiz_completed = false;
            }
            QuizAction::OnAppear => {}
        }
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn current_question(&self) -> &QuizQuestion {
        &self.questions[self.current_question_index]
    }

    pub fn is_last_question(&self) -> bool {
        self.current_question_index + 1 >= self.questions.len()
    }

    /// Whether the current selection, if any, is the right answer.
    pub fn answered_correctly(&self) -> Option<bool> {
        self.selected_answer_index
            .map(|i| self.current_question().is_correct(i))
    }

    pub fn phase(&self) -> QuizPhase {
        if self.quiz_completed {
            QuizPhase::Completed
        } else {
            QuizPhase::InProgress {
                index: self.current_question_index,
                selection: self.selected_answer_index,
                revealed: self.show_result,
            }
        }
    }

    /// Score as a percentage of the question count.
    ///
    /// Can exceed 100 when an answer was scored more than once.
    pub fn percentage(&self) -> f64 {
        f64::from(self.score) * 100.0 / self.questions.len() as f64
    }

    pub fn grade(&self) -> Grade {
        Grade::from_percentage(self.percentage())
    }
}
