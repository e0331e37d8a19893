pub mod api;
pub mod config;
pub mod csv;
pub mod preferences;
pub mod storage;
