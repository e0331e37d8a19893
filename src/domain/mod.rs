pub mod error;
pub mod quiz;
pub mod recruitment;

// CSV import module
pub mod csv;
