pub mod calendar;
pub mod field_validators;
pub mod quiz_import;
pub mod session;
pub mod status_update;
