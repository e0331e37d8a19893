// ============================================================
// FIELD-LEVEL VALIDATORS
// ============================================================
// Pure checks for a single form field; each returns the first problem
// as a user-presentable Validation error.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::error::{AppError, Result};

static LETTERS_AND_SPACES: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z ]+$").unwrap());

/// The field must hold more than whitespace.
pub fn require_non_blank(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{} is required", field)));
    }
    Ok(())
}

/// The field must not exceed `max` characters.
pub fn max_len(field: &str, value: &str, max: usize) -> Result<()> {
    if value.len() > max {
        return Err(AppError::Validation(format!(
            "{} must be at most {} characters",
            field, max
        )));
    }
    Ok(())
}

/// The field may only contain letters and spaces (quiz titles).
pub fn letters_and_spaces_only(field: &str, value: &str) -> Result<()> {
    if !LETTERS_AND_SPACES.is_match(value) {
        return Err(AppError::Validation(format!(
            "{} may only contain letters and spaces",
            field
        )));
    }
    Ok(())
}

/// Durations and similar counters must be at least 1.
pub fn positive_minutes(field: &str, value: u32) -> Result<()> {
    if value == 0 {
        return Err(AppError::Validation(format!(
            "{} must be a positive number of minutes",
            field
        )));
    }
    Ok(())
}

/// The field must be one of a fixed set of literal values.
pub fn one_of(field: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(AppError::Validation(format!(
            "{} must be one of {:?}, got '{}'",
            field, allowed, value
        )));
    }
    Ok(())
}

/// Per-field checks the quiz form runs while the user types, before the
/// draft-level gate at submission.
pub fn validate_quiz_form(title: &str, duration_minutes: u32) -> Result<()> {
    require_non_blank("Quiz title", title)?;
    max_len("Quiz title", title, crate::domain::quiz::MAX_TITLE_LEN)?;
    letters_and_spaces_only("Quiz title", title)?;
    positive_minutes("Quiz duration", duration_minutes)
}
