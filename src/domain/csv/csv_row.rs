// ============================================================
// CSV ROW TYPES
// ============================================================
// Data structures representing parsed quiz-import CSV content

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Column names a quiz-import CSV must carry. Matching is case-sensitive
/// and order-independent; extra columns are ignored.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "question",
    "option1",
    "option2",
    "option3",
    "option4",
    "correct_option",
];

/// The four option columns, in slot order.
pub const OPTION_COLUMNS: [&str; 4] = ["option1", "option2", "option3", "option4"];

/// Maximum length of a question text.
pub const MAX_QUESTION_LEN: usize = 250;

/// Maximum length of a single option text.
pub const MAX_OPTION_LEN: usize = 255;

/// A single data row of a quiz-import CSV, keyed by header name.
///
/// Rows are transient: produced by the parser, consumed immediately by the
/// validator and mapper, not retained afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CsvRow {
    /// 1-based data-row number (header excluded), used in error messages
    pub line: usize,

    /// Field values keyed by header name; short rows hold "" for
    /// missing trailing columns
    pub values: HashMap<String, String>,
}

impl CsvRow {
    pub fn new(line: usize, values: HashMap<String, String>) -> Self {
        Self { line, values }
    }

    /// Value for a column, or "" when the column is absent.
    pub fn get(&self, column: &str) -> &str {
        self.values.get(column).map(String::as_str).unwrap_or("")
    }

    /// Whether a column holds nothing but whitespace.
    pub fn is_blank(&self, column: &str) -> bool {
        self.get(column).trim().is_empty()
    }

    /// True when question and all four options are blank. Such rows are
    /// treated as intentional padding and skipped by validation and import.
    pub fn is_padding(&self) -> bool {
        self.is_blank("question") && OPTION_COLUMNS.iter().all(|c| self.is_blank(c))
    }
}
