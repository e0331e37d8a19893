use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::csv::{MAX_OPTION_LEN, MAX_QUESTION_LEN};
use crate::domain::error::{AppError, Result};

/// Maximum length of a quiz title.
pub const MAX_TITLE_LEN: usize = 50;

static TITLE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z ]+$").unwrap());

/// Where a question came from: typed by hand or bulk-imported from CSV.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionOrigin {
    Manual,
    Imported,
}

/// A single multiple-choice question. Exactly four options, exactly one
/// correct index (1-based).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizQuestion {
    /// Draft-local identity, not persisted by the backend
    pub id: Uuid,
    pub text: String,
    pub options: [String; 4],
    pub correct_option: u8,
    pub origin: QuestionOrigin,
}

impl QuizQuestion {
    pub fn new(
        text: String,
        options: [String; 4],
        correct_option: u8,
        origin: QuestionOrigin,
    ) -> Result<Self> {
        if text.trim().is_empty() {
            return Err(AppError::Validation("Question text is required".to_string()));
        }
        if text.len() > MAX_QUESTION_LEN {
            return Err(AppError::Validation(format!(
                "Question text exceeds {} characters",
                MAX_QUESTION_LEN
            )));
        }
        for (idx, option) in options.iter().enumerate() {
            if option.trim().is_empty() {
                return Err(AppError::Validation(format!(
                    "Option {} is required",
                    idx + 1
                )));
            }
            if option.len() > MAX_OPTION_LEN {
                return Err(AppError::Validation(format!(
                    "Option {} exceeds {} characters",
                    idx + 1,
                    MAX_OPTION_LEN
                )));
            }
        }
        if !(1..=4).contains(&correct_option) {
            return Err(AppError::Validation(format!(
                "Correct option must be between 1 and 4, got {}",
                correct_option
            )));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            text,
            options,
            correct_option,
            origin,
        })
    }
}

/// In-memory, unsaved representation of a quiz being composed.
///
/// Mutated by manual edits or bulk CSV import; submitted as a whole on
/// quiz creation.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct QuizDraft {
    #[validate(length(min = 1, max = 50), regex(path = *TITLE_PATTERN))]
    pub title: String,
    #[validate(range(min = 1))]
    pub duration_minutes: u32,
    pub questions: Vec<QuizQuestion>,
}

impl QuizDraft {
    pub fn new(title: String, duration_minutes: u32) -> Self {
        Self {
            title,
            duration_minutes,
            questions: Vec::new(),
        }
    }

    /// Append a manually composed question.
    pub fn push_question(&mut self, question: QuizQuestion) {
        self.questions.push(question);
    }

    /// Replace the question list wholesale. CSV import goes through this:
    /// importing discards any questions already entered by hand.
    pub fn replace_questions(&mut self, questions: Vec<QuizQuestion>) {
        self.questions = questions;
    }

    /// Field-level and draft-level checks gating quiz creation.
    pub fn validate_for_submit(&self) -> Result<()> {
        self.validate().map_err(|e| {
            AppError::Validation(format!("Quiz title or duration is invalid: {}", e))
        })?;
        if self.questions.is_empty() {
            return Err(AppError::Validation(
                "A quiz needs at least one question".to_string(),
            ));
        }
        Ok(())
    }
}
