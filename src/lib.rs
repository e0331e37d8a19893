pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::{QuizImportUseCase, SessionUseCase, StatusBoard, UpdateOutcome};
pub use domain::error::{AppError, Result};
pub use infrastructure::api::{HttpRecruitApi, RecruitApi};
pub use infrastructure::config::Settings;
pub use infrastructure::preferences::PreferenceStore;

/// Install the default log subscriber. `RUST_LOG` overrides the filter.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init();
}
