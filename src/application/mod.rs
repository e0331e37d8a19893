pub mod use_cases;

pub use use_cases::quiz_import::QuizImportUseCase;
pub use use_cases::session::SessionUseCase;
pub use use_cases::status_update::{StatusBoard, StatusEntity, UpdateOutcome};
