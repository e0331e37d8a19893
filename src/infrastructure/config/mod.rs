use std::path::PathBuf;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::error::{AppError, Result};

/// Runtime settings, merged from defaults, `hireboard.toml`, and
/// `HIREBOARD_`-prefixed environment variables (in that order).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Backend base URL; endpoint paths are joined onto it
    pub api_base_url: Url,

    /// Per-request timeout in seconds
    pub api_timeout_secs: u64,

    /// Directory holding the preference file and other local state
    pub data_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: Url::parse("http://localhost:8000/api/").expect("static URL"),
            api_timeout_secs: 30,
            data_dir: PathBuf::from(".hireboard"),
        }
    }
}

impl Settings {
    pub fn load() -> Result<Self> {
        let _ = dotenvy::dotenv();

        let mut settings: Settings = Figment::from(Serialized::defaults(Settings::default()))
            .merge(Toml::file("hireboard.toml"))
            .merge(Env::prefixed("HIREBOARD_"))
            .extract()
            .map_err(|e| AppError::Internal(format!("Failed to load settings: {}", e)))?;

        // Url::join drops the last path segment without this
        if !settings.api_base_url.path().ends_with('/') {
            let path = format!("{}/", settings.api_base_url.path());
            settings.api_base_url.set_path(&path);
        }

        Ok(settings)
    }
}
