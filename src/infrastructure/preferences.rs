// ============================================================
// PREFERENCE STORE
// ============================================================
// Typed key-value store for display preferences and session leftovers,
// persisted as a single JSON file under the data dir. Injected into use
// cases; nothing reads the file ad hoc.

use std::fs;
use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::error::{AppError, Result};
use crate::domain::quiz::QuizDraft;

/// Everything the dashboard persists between sessions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Preferences {
    /// Greeting/header display name
    pub cached_username: Option<String>,

    /// Profile picture bytes, base64-encoded
    pub profile_picture_b64: Option<String>,

    /// Bearer token from the last login
    pub auth_token: Option<String>,

    /// Quiz draft saved mid-composition
    pub quiz_draft: Option<QuizDraft>,
}

pub struct PreferenceStore {
    path: PathBuf,
    prefs: Preferences,
}

impl PreferenceStore {
    /// Store at its standard location under the configured data dir.
    pub fn open(settings: &crate::infrastructure::config::Settings) -> Result<Self> {
        let data_dir = crate::infrastructure::storage::resolve_data_dir(settings)?;
        Ok(Self::load(&crate::infrastructure::storage::preferences_path(
            &data_dir,
        )))
    }

    /// Load the store, falling back to defaults when the file is missing.
    /// A corrupt file is logged and replaced rather than failing startup.
    pub fn load(path: &Path) -> Self {
        let prefs = match fs::read_to_string(path) {
            Ok(text) => match serde_json::from_str(&text) {
                Ok(prefs) => prefs,
                Err(err) => {
                    warn!(error = %err, path = %path.display(), "Corrupt preference file, resetting");
                    Preferences::default()
                }
            },
            Err(_) => Preferences::default(),
        };

        Self {
            path: path.to_path_buf(),
            prefs,
        }
    }

    fn save(&self) -> Result<()> {
        let text = serde_json::to_string_pretty(&self.prefs)
            .map_err(|e| AppError::Internal(format!("Failed to serialize preferences: {}", e)))?;
        fs::write(&self.path, text)
            .map_err(|e| AppError::Io(format!("Failed to write preferences: {}", e)))?;
        Ok(())
    }

    pub fn username(&self) -> Option<&str> {
        self.prefs.cached_username.as_deref()
    }

    pub fn set_username(&mut self, name: impl Into<String>) -> Result<()> {
        self.prefs.cached_username = Some(name.into());
        self.save()
    }

    pub fn auth_token(&self) -> Option<&str> {
        self.prefs.auth_token.as_deref()
    }

    pub fn set_auth_token(&mut self, token: impl Into<String>) -> Result<()> {
        self.prefs.auth_token = Some(token.into());
        self.save()
    }

    pub fn set_profile_picture(&mut self, bytes: &[u8]) -> Result<()> {
        self.prefs.profile_picture_b64 = Some(BASE64.encode(bytes));
        self.save()
    }

    /// Decoded profile picture, or None when unset or undecodable.
    pub fn profile_picture(&self) -> Option<Vec<u8>> {
        let encoded = self.prefs.profile_picture_b64.as_deref()?;
        match BASE64.decode(encoded) {
            Ok(bytes) => Some(bytes),
            Err(err) => {
                warn!(error = %err, "Cached profile picture is not valid base64");
                None
            }
        }
    }

    pub fn cache_draft(&mut self, draft: QuizDraft) -> Result<()> {
        self.prefs.quiz_draft = Some(draft);
        self.save()
    }

    /// Remove and return a draft saved mid-composition.
    pub fn take_draft(&mut self) -> Result<Option<QuizDraft>> {
        let draft = self.prefs.quiz_draft.take();
        self.save()?;
        Ok(draft)
    }

    /// Forget everything tied to the signed-in user. Called on token expiry
    /// before redirecting to login.
    pub fn clear_credentials(&mut self) -> Result<()> {
        self.prefs.cached_username = None;
        self.prefs.profile_picture_b64 = None;
        self.prefs.auth_token = None;
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("hireboard-prefs-{}-{}.json", name, uuid::Uuid::new_v4()))
    }

    #[test]
    fn test_roundtrip_username_and_token() {
        let path = temp_path("roundtrip");
        let mut store = PreferenceStore::load(&path);
        store.set_username("dana").unwrap();
        store.set_auth_token("tok-123").unwrap();

        let reloaded = PreferenceStore::load(&path);
        assert_eq!(reloaded.username(), Some("dana"));
        assert_eq!(reloaded.auth_token(), Some("tok-123"));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_profile_picture_roundtrip() {
        let path = temp_path("picture");
        let mut store = PreferenceStore::load(&path);
        store.set_profile_picture(&[0xDE, 0xAD, 0xBE, 0xEF]).unwrap();
        assert_eq!(store.profile_picture(), Some(vec![0xDE, 0xAD, 0xBE, 0xEF]));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_corrupt_file_resets_to_defaults() {
        let path = temp_path("corrupt");
        fs::write(&path, "not json {{{").unwrap();
        let store = PreferenceStore::load(&path);
        assert!(store.username().is_none());
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_clear_credentials() {
        let path = temp_path("clear");
        let mut store = PreferenceStore::load(&path);
        store.set_username("dana").unwrap();
        store.set_auth_token("tok").unwrap();
        store.clear_credentials().unwrap();

        assert!(store.username().is_none());
        assert!(store.auth_token().is_none());
        let _ = fs::remove_file(&path);
    }
}
