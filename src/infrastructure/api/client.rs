use async_trait::async_trait;
use tracing::warn;
use url::Url;

use super::responses::{decode, Created, CreateQuizRequest, NewInternship, NewInterview, StatusPatch};
use crate::domain::error::{AppError, Result};
use crate::domain::quiz::QuizDraft;
use crate::domain::recruitment::{Application, ApplicationStatus, Internship, Interview};
use crate::infrastructure::config::Settings;

/// Backend seam for the dashboard. Production code goes through
/// [`HttpRecruitApi`]; tests substitute an in-memory implementation.
#[async_trait]
pub trait RecruitApi: Send + Sync {
    async fn list_internships(&self) -> Result<Vec<Internship>>;
    async fn create_internship(&self, internship: &NewInternship) -> Result<Internship>;

    async fn list_applications(&self, internship_id: Option<i64>) -> Result<Vec<Application>>;
    async fn update_application_status(&self, id: i64, status: ApplicationStatus) -> Result<()>;

    async fn list_interviews(&self) -> Result<Vec<Interview>>;
    async fn create_interview(&self, interview: &NewInterview) -> Result<Interview>;
    async fn set_interview_attendance(&self, id: i64, attended: bool) -> Result<()>;
    async fn set_interview_selection(&self, id: i64, selected: bool) -> Result<()>;

    async fn create_quiz(&self, draft: &QuizDraft) -> Result<i64>;
}

/// JSON/REST client with a bearer token attached to every request.
#[derive(Debug)]
pub struct HttpRecruitApi {
    client: reqwest::Client,
    base_url: Url,
    token: String,
}

impl HttpRecruitApi {
    pub fn new(settings: &Settings, token: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(settings.api_timeout_secs))
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: settings.api_base_url.clone(),
            token: token.into(),
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| AppError::Internal(format!("Bad endpoint path {}: {}", path, e)))
    }

    /// Map the response status the way every call site expects: 401 means
    /// the session is gone, any other non-success is surfaced with its body.
    async fn check(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            warn!("Bearer token rejected by backend");
            return Err(AppError::AuthExpired(
                "Bearer token rejected; sign in again".to_string(),
            ));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Api(format!("API error ({}): {}", status, body)));
        }
        Ok(response)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self
            .client
            .get(self.endpoint(path)?)
            .bearer_auth(&self.token)
            .send()
            .await?;
        decode(Self::check(response).await?).await
    }

    async fn post_json<B: serde::Serialize + ?Sized, T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let response = self
            .client
            .post(self.endpoint(path)?)
            .bearer_auth(&self.token)
            .json(body)
            .send()
            .await?;
        decode(Self::check(response).await?).await
    }

    async fn patch_status(&self, path: &str, patch: &StatusPatch) -> Result<()> {
        let response = self
            .client
            .patch(self.endpoint(path)?)
            .bearer_auth(&self.token)
            .json(patch)
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }
}

#[async_trait]
impl RecruitApi for HttpRecruitApi {
    async fn list_internships(&self) -> Result<Vec<Internship>> {
        self.get_json("internships").await
    }

    async fn create_internship(&self, internship: &NewInternship) -> Result<Internship> {
        self.post_json("internships", internship).await
    }

    async fn list_applications(&self, internship_id: Option<i64>) -> Result<Vec<Application>> {
        let path = match internship_id {
            Some(id) => format!("applications?internship_id={}", id),
            None => "applications".to_string(),
        };
        self.get_json(&path).await
    }

    async fn update_application_status(&self, id: i64, status: ApplicationStatus) -> Result<()> {
        let patch = StatusPatch {
            status: Some(status),
            attended: None,
            selected: None,
        };
        self.patch_status(&format!("applications/{}", id), &patch).await
    }

    async fn list_interviews(&self) -> Result<Vec<Interview>> {
        self.get_json("interviews").await
    }

    async fn create_interview(&self, interview: &NewInterview) -> Result<Interview> {
        self.post_json("interviews", interview).await
    }

    async fn set_interview_attendance(&self, id: i64, attended: bool) -> Result<()> {
        let patch = StatusPatch {
            status: None,
            attended: Some(attended),
            selected: None,
        };
        self.patch_status(&format!("interviews/{}", id), &patch).await
    }

    async fn set_interview_selection(&self, id: i64, selected: bool) -> Result<()> {
        let patch = StatusPatch {
            status: None,
            attended: None,
            selected: Some(selected),
        };
        self.patch_status(&format!("interviews/{}", id), &patch).await
    }

    async fn create_quiz(&self, draft: &QuizDraft) -> Result<i64> {
        draft.validate_for_submit()?;
        let created: Created = self
            .post_json("quizzes", &CreateQuizRequest::from_draft(draft))
            .await?;
        Ok(created.id)
    }
}
