mod csv_parser;
mod template;

pub use csv_parser::CsvParser;
pub use template::template_csv;
