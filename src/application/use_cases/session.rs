// ============================================================
// SESSION USE CASE
// ============================================================
// Bearer-token lifecycle: stash it on sign-in, hand out an API client,
// and wipe cached credentials when the backend says the token is gone.

use tracing::info;

use crate::domain::error::{AppError, Result};
use crate::infrastructure::api::HttpRecruitApi;
use crate::infrastructure::config::Settings;
use crate::infrastructure::preferences::PreferenceStore;

pub struct SessionUseCase {
    prefs: PreferenceStore,
}

impl SessionUseCase {
    pub fn new(prefs: PreferenceStore) -> Self {
        Self { prefs }
    }

    pub fn sign_in(&mut self, token: &str, username: &str) -> Result<()> {
        self.prefs.set_auth_token(token)?;
        self.prefs.set_username(username)?;
        info!(username, "Signed in");
        Ok(())
    }

    pub fn username(&self) -> Option<&str> {
        self.prefs.username()
    }

    /// Build an API client carrying the current bearer token.
    pub fn api(&self, settings: &Settings) -> Result<HttpRecruitApi> {
        let token = self.prefs.auth_token().ok_or_else(|| {
            AppError::AuthExpired("No bearer token stored; sign in first".to_string())
        })?;
        HttpRecruitApi::new(settings, token)
    }

    /// Funnel API errors through here. Token expiry clears the cached
    /// credentials so the caller can redirect to login; every other error
    /// passes through for in-place display.
    pub fn handle_api_error(&mut self, err: AppError) -> AppError {
        if matches!(err, AppError::AuthExpired(_)) {
            info!("Bearer token expired, clearing cached credentials");
            if let Err(clear_err) = self.prefs.clear_credentials() {
                tracing::warn!(error = %clear_err, "Failed to clear cached credentials");
            }
        }
        err
    }

    pub fn preferences_mut(&mut self) -> &mut PreferenceStore {
        &mut self.prefs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(name: &str) -> (PreferenceStore, std::path::PathBuf) {
        let path = std::env::temp_dir().join(format!(
            "hireboard-session-{}-{}.json",
            name,
            uuid::Uuid::new_v4()
        ));
        (PreferenceStore::load(&path), path)
    }

    #[test]
    fn test_api_requires_a_token() {
        let (prefs, path) = store("no-token");
        let session = SessionUseCase::new(prefs);
        let err = session.api(&Settings::default()).unwrap_err();
        assert!(matches!(err, AppError::AuthExpired(_)));
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_sign_in_then_build_api() {
        let (prefs, path) = store("sign-in");
        let mut session = SessionUseCase::new(prefs);
        session.sign_in("tok-abc", "dana").unwrap();
        assert_eq!(session.username(), Some("dana"));
        assert!(session.api(&Settings::default()).is_ok());
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_auth_expiry_clears_credentials() {
        let (prefs, path) = store("expiry");
        let mut session = SessionUseCase::new(prefs);
        session.sign_in("tok-abc", "dana").unwrap();

        let err = session.handle_api_error(AppError::AuthExpired("gone".to_string()));
        assert!(matches!(err, AppError::AuthExpired(_)));
        assert!(session.username().is_none());
        assert!(session.api(&Settings::default()).is_err());
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_other_errors_pass_through_untouched() {
        let (prefs, path) = store("passthrough");
        let mut session = SessionUseCase::new(prefs);
        session.sign_in("tok-abc", "dana").unwrap();

        let err = session.handle_api_error(AppError::Api("500".to_string()));
        assert!(matches!(err, AppError::Api(_)));
        assert_eq!(session.username(), Some("dana"));
        let _ = std::fs::remove_file(path);
    }
}
