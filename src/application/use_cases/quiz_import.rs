// ============================================================
// QUIZ IMPORT USE CASE
// ============================================================
// Orchestrate CSV parsing, schema validation, and mapping into the
// quiz draft

use std::path::Path;

use tracing::info;

use super::field_validators::{max_len, one_of, require_non_blank};
use crate::domain::csv::{CsvRow, MAX_OPTION_LEN, MAX_QUESTION_LEN, OPTION_COLUMNS, REQUIRED_COLUMNS};
use crate::domain::error::{AppError, Result};
use crate::domain::quiz::{QuestionOrigin, QuizDraft, QuizQuestion};
use crate::infrastructure::csv::CsvParser;

/// Bulk import of quiz questions from a user-supplied CSV file.
pub struct QuizImportUseCase {
    parser: CsvParser,
}

impl QuizImportUseCase {
    pub fn new() -> Self {
        Self {
            parser: CsvParser::new(),
        }
    }

    /// Parse, validate, and import CSV text into the draft.
    ///
    /// Importing REPLACES the draft's question list wholesale; questions
    /// entered by hand in the same session are discarded. Long-standing
    /// behavior the rest of the flow relies on, so it stays.
    ///
    /// On any error the draft is left untouched. Returns the number of
    /// imported questions.
    pub fn import_into(&self, draft: &mut QuizDraft, csv_text: &str) -> Result<usize> {
        let rows = self.parser.parse_content(csv_text)?;
        Self::validate_rows(&rows)?;

        let mut questions = Vec::new();
        for row in rows.iter().filter(|r| !r.is_blank("question")) {
            questions.push(Self::map_row(row)?);
        }

        let count = questions.len();
        draft.replace_questions(questions);
        info!(count, "Imported quiz questions from CSV");
        Ok(count)
    }

    /// File-reading variant of [`import_into`](Self::import_into).
    pub fn import_file(&self, draft: &mut QuizDraft, path: &Path) -> Result<usize> {
        let rows = self.parser.parse_file(path)?;
        Self::validate_rows(&rows)?;

        let mut questions = Vec::new();
        for row in rows.iter().filter(|r| !r.is_blank("question")) {
            questions.push(Self::map_row(row)?);
        }

        let count = questions.len();
        draft.replace_questions(questions);
        info!(count, path = %path.display(), "Imported quiz questions from CSV file");
        Ok(count)
    }

    /// Check parsed rows against the quiz schema, reporting the FIRST
    /// violation found. Scans rows in order and never accumulates a list.
    pub fn validate_rows(rows: &[CsvRow]) -> Result<()> {
        if rows.is_empty() {
            return Err(AppError::Validation("CSV file is empty".to_string()));
        }

        let missing: Vec<&str> = REQUIRED_COLUMNS
            .iter()
            .copied()
            .filter(|c| !rows[0].values.contains_key(*c))
            .collect();
        if !missing.is_empty() {
            let found: Vec<&str> = rows[0].values.keys().map(String::as_str).collect();
            return Err(AppError::Validation(format!(
                "CSV is missing required columns: {}. Found columns: {}",
                missing.join(", "),
                found.join(", ")
            )));
        }

        for row in rows {
            // fully blank rows are intentional padding
            if row.is_padding() {
                continue;
            }

            require_non_blank(&format!("Row {}: question", row.line), row.get("question"))?;
            for (slot, column) in OPTION_COLUMNS.iter().enumerate() {
                require_non_blank(
                    &format!("Row {}: option {}", row.line, slot + 1),
                    row.get(column),
                )?;
            }

            one_of(
                &format!("Row {}: correct_option", row.line),
                row.get("correct_option").trim(),
                &["1", "2", "3", "4"],
            )?;

            max_len(
                &format!("Row {}: question", row.line),
                row.get("question"),
                MAX_QUESTION_LEN,
            )?;
            for (slot, column) in OPTION_COLUMNS.iter().enumerate() {
                max_len(
                    &format!("Row {}: option {}", row.line, slot + 1),
                    row.get(column),
                    MAX_OPTION_LEN,
                )?;
            }
        }

        Ok(())
    }

    fn map_row(row: &CsvRow) -> Result<QuizQuestion> {
        let options = OPTION_COLUMNS.map(|c| row.get(c).to_string());
        let correct: u8 = row
            .get("correct_option")
            .trim()
            .parse()
            .map_err(|_| {
                AppError::Parse(format!(
                    "Row {}: correct_option is not a number",
                    row.line
                ))
            })?;

        QuizQuestion::new(
            row.get("question").to_string(),
            options,
            correct,
            QuestionOrigin::Imported,
        )
    }
}

impl Default for QuizImportUseCase {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "question,option1,option2,option3,option4,correct_option";

    fn draft_with_manual_questions(n: usize) -> QuizDraft {
        let mut draft = QuizDraft::new("Screening".into(), 30);
        for i in 0..n {
            draft.push_question(
                QuizQuestion::new(
                    format!("Manual question {}", i),
                    ["a", "b", "c", "d"].map(String::from),
                    1,
                    QuestionOrigin::Manual,
                )
                .unwrap(),
            );
        }
        draft
    }

    #[test]
    fn test_empty_csv_message() {
        let importer = QuizImportUseCase::new();
        let mut draft = draft_with_manual_questions(0);
        let err = importer.import_into(&mut draft, "").unwrap_err();
        assert!(err.to_string().contains("CSV file is empty"));
    }

    #[test]
    fn test_missing_columns_lists_missing_and_found() {
        let importer = QuizImportUseCase::new();
        let mut draft = draft_with_manual_questions(0);
        let err = importer
            .import_into(&mut draft, "question,option1\nQ?,a")
            .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("option2"));
        assert!(msg.contains("correct_option"));
        assert!(msg.contains("Found columns"));
    }

    #[test]
    fn test_first_violation_wins_and_names_row_and_slot() {
        // option3 missing on data row 2; row 3 carries a later violation
        // that must NOT be reported
        let csv = format!(
            "{}\nQ one?,a,b,c,d,1\nQ two?,a,b,,d,2\nQ three?,a,b,c,d,9",
            HEADER
        );
        let err = QuizImportUseCase::new()
            .import_into(&mut draft_with_manual_questions(0), &csv)
            .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Row 2"), "got: {}", msg);
        assert!(msg.contains("option 3"), "got: {}", msg);
    }

    #[test]
    fn test_correct_option_must_be_literal_digit() {
        let csv = format!("{}\nQ?,a,b,c,d, 2 \nQ2?,a,b,c,d,five", HEADER);
        let err = QuizImportUseCase::new()
            .import_into(&mut draft_with_manual_questions(0), &csv)
            .unwrap_err();
        let msg = err.to_string();
        // " 2 " trims to a valid value; "five" is row 2's offense
        assert!(msg.contains("Row 2"), "got: {}", msg);
        assert!(msg.contains("'five'"), "got: {}", msg);
    }

    #[test]
    fn test_overlong_question_is_rejected() {
        let long = "x".repeat(MAX_QUESTION_LEN + 1);
        let csv = format!("{}\n{},a,b,c,d,1", HEADER, long);
        let err = QuizImportUseCase::new()
            .import_into(&mut draft_with_manual_questions(0), &csv)
            .unwrap_err();
        assert!(err.to_string().contains("at most 250"));
    }

    #[test]
    fn test_blank_rows_are_skipped_not_rejected() {
        let csv = format!("{}\nQ one?,a,b,c,d,1\n,,,,,\nQ two?,w,x,y,z,4\n", HEADER);
        let mut draft = draft_with_manual_questions(0);
        let count = QuizImportUseCase::new().import_into(&mut draft, &csv).unwrap();
        assert_eq!(count, 2);
        assert_eq!(draft.questions.len(), 2);
    }

    #[test]
    fn test_import_replaces_manual_questions() {
        let csv = format!("{}\nQ one?,a,b,c,d,1\nQ two?,w,x,y,z,4", HEADER);
        let mut draft = draft_with_manual_questions(3);
        let count = QuizImportUseCase::new().import_into(&mut draft, &csv).unwrap();

        assert_eq!(count, 2);
        assert_eq!(draft.questions.len(), 2);
        assert!(draft
            .questions
            .iter()
            .all(|q| q.origin == QuestionOrigin::Imported));
    }

    #[test]
    fn test_failed_import_leaves_draft_untouched() {
        let csv = format!("{}\nQ one?,a,b,,d,1", HEADER);
        let mut draft = draft_with_manual_questions(3);
        assert!(QuizImportUseCase::new().import_into(&mut draft, &csv).is_err());
        assert_eq!(draft.questions.len(), 3);
        assert!(draft
            .questions
            .iter()
            .all(|q| q.origin == QuestionOrigin::Manual));
    }

    #[test]
    fn test_end_to_end_quoted_example() {
        let csv = format!(
            "{}\n\"What is 2+2?\",\"3\",\"4\",\"5\",\"6\",\"2\"",
            HEADER
        );
        let mut draft = draft_with_manual_questions(0);
        let count = QuizImportUseCase::new().import_into(&mut draft, &csv).unwrap();

        assert_eq!(count, 1);
        let q = &draft.questions[0];
        assert_eq!(q.text, "What is 2+2?");
        assert_eq!(q.options, ["3", "4", "5", "6"].map(String::from));
        assert_eq!(q.correct_option, 2);
        assert_eq!(q.origin, QuestionOrigin::Imported);
    }
}
