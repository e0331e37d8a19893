// ============================================================
// CSV DOMAIN LAYER
// ============================================================
// Core types for the quiz-import CSV schema
// No I/O, no async

mod csv_row;

pub use csv_row::{
    CsvRow, MAX_OPTION_LEN, MAX_QUESTION_LEN, OPTION_COLUMNS, REQUIRED_COLUMNS,
};
