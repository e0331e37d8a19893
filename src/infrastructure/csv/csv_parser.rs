// ============================================================
// CSV PARSER
// ============================================================
// Hand-rolled parser for the quiz-import CSV dialect

use std::collections::HashMap;
use std::path::Path;

use crate::domain::csv::CsvRow;
use crate::domain::error::{AppError, Result};

/// Parser for the quiz-import dialect.
///
/// The dialect is deliberately narrower than RFC 4180 and matches what the
/// downloadable template produces: a quoted field may contain commas, but
/// `""` escaping and embedded newlines inside quotes are not supported, and
/// double-quote characters are stripped from values wherever they appear.
/// Known limitation, kept as-is rather than silently widened.
pub struct CsvParser;

impl CsvParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse CSV text into one row mapping per non-header line.
    ///
    /// The first line is the header: split on commas, whitespace-trimmed,
    /// surrounding quotes stripped. Data rows are keyed by header name;
    /// a row shorter than the header yields "" for the missing trailing
    /// columns, and values past the last header are dropped.
    pub fn parse_content(&self, content: &str) -> Result<Vec<CsvRow>> {
        let mut lines = content.split('\n').map(|l| l.trim_end_matches('\r'));

        let header_line = lines.next().unwrap_or("");
        let headers: Vec<String> = header_line
            .split(',')
            .map(|h| h.trim().trim_matches('"').to_string())
            .collect();

        let mut rows = Vec::new();
        for (idx, line) in lines.enumerate() {
            let fields = Self::split_fields(line);
            let mut values = HashMap::with_capacity(headers.len());
            for (col, header) in headers.iter().enumerate() {
                let value = fields.get(col).cloned().unwrap_or_default();
                values.insert(header.clone(), value);
            }
            rows.push(CsvRow::new(idx + 1, values));
        }

        Ok(rows)
    }

    /// Parse a CSV file read as text, replacing invalid UTF-8 rather than
    /// failing the whole import.
    pub fn parse_file(&self, path: &Path) -> Result<Vec<CsvRow>> {
        let bytes = std::fs::read(path)
            .map_err(|e| AppError::Io(format!("Failed to read CSV file: {}", e)))?;
        let content = String::from_utf8_lossy(&bytes);
        self.parse_content(&content)
    }

    /// Manual character scan: commas split fields only outside quotes;
    /// quote characters themselves never reach the output.
    fn split_fields(line: &str) -> Vec<String> {
        let mut fields = Vec::new();
        let mut current = String::new();
        let mut in_quotes = false;

        for c in line.chars() {
            match c {
                '"' => in_quotes = !in_quotes,
                ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
                _ => current.push(c),
            }
        }
        fields.push(current);

        fields
    }
}

impl Default for CsvParser {
    fn default() -> Self {
        Self::new()
    }
}
