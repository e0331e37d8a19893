// ============================================================
// CSV TEMPLATE
// ============================================================
// Downloadable starter file for bulk quiz-question import

use crate::domain::csv::REQUIRED_COLUMNS;
use crate::domain::error::{AppError, Result};

const EXAMPLE_ROWS: [[&str; 6]; 3] = [
    [
        "What does HTTP stand for?",
        "HyperText Transfer Protocol",
        "High Throughput Transport Protocol",
        "Hyperlink Text Protocol",
        "Host Transfer Protocol",
        "1",
    ],
    [
        "Which data structure is LIFO?",
        "Queue",
        "Stack",
        "Heap",
        "Graph",
        "2",
    ],
    [
        "What is 2+2?",
        "3",
        "4",
        "5",
        "6",
        "2",
    ],
];

/// Render the template users base their import file on: the six-column
/// header plus three example rows.
pub fn template_csv() -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record(REQUIRED_COLUMNS)
        .map_err(|e| AppError::Internal(format!("Failed to write template header: {}", e)))?;
    for row in EXAMPLE_ROWS {
        writer
            .write_record(row)
            .map_err(|e| AppError::Internal(format!("Failed to write template row: {}", e)))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| AppError::Internal(format!("Failed to flush template: {}", e)))?;
    String::from_utf8(bytes)
        .map_err(|e| AppError::Internal(format!("Template was not UTF-8: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::csv::CsvParser;

    #[test]
    fn test_template_has_header_and_three_rows() {
        let text = template_csv().unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "question,option1,option2,option3,option4,correct_option"
        );
        assert_eq!(lines.count(), 3);
    }

    #[test]
    fn test_template_parses_with_import_parser() {
        let text = template_csv().unwrap();
        let rows = CsvParser::new().parse_content(&text).unwrap();
        let data_rows: Vec<_> = rows.iter().filter(|r| !r.is_padding()).collect();
        assert_eq!(data_rows.len(), 3);
        assert_eq!(data_rows[2].get("question"), "What is 2+2?");
    }
}
