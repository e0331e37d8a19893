// ============================================================
// API PAYLOAD SCHEMAS
// ============================================================
// Wire shapes for the recruitment backend, decoded at the boundary.
// Anything that does not match these shapes is normalized to a Parse
// error instead of leaking into UI state.

use serde::{Deserialize, Serialize};

use crate::domain::error::{AppError, Result};
use crate::domain::quiz::QuizDraft;
use crate::domain::recruitment::ApplicationStatus;

/// Payload for posting a new internship.
#[derive(Debug, Clone, Serialize)]
pub struct NewInternship {
    pub title: String,
    pub description: String,
    pub stipend: Option<String>,
    pub duration_weeks: Option<u32>,
}

/// Payload for scheduling an interview against an application.
#[derive(Debug, Clone, Serialize)]
pub struct NewInterview {
    pub application_id: i64,
    pub date: chrono::NaiveDate,
    pub start_time: String,
}

/// Status-mutation body shared by the accept/reject and attendance/selection
/// endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct StatusPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ApplicationStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attended: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected: Option<bool>,
}

/// Quiz creation body; the draft is submitted as a whole.
#[derive(Debug, Clone, Serialize)]
pub struct CreateQuizRequest<'a> {
    pub title: &'a str,
    pub duration_minutes: u32,
    pub questions: &'a [crate::domain::quiz::QuizQuestion],
}

impl<'a> CreateQuizRequest<'a> {
    pub fn from_draft(draft: &'a QuizDraft) -> Self {
        Self {
            title: &draft.title,
            duration_minutes: draft.duration_minutes,
            questions: &draft.questions,
        }
    }
}

/// Response to a create call.
#[derive(Debug, Clone, Deserialize)]
pub struct Created {
    pub id: i64,
}

/// Decode a response body into a typed schema, converting shape mismatches
/// into a user-presentable Parse error.
pub async fn decode<T: serde::de::DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let bytes = response
        .bytes()
        .await
        .map_err(|e| AppError::Api(format!("Failed to read response body: {}", e)))?;
    serde_json::from_slice(&bytes)
        .map_err(|e| AppError::Parse(format!("Unexpected response shape: {}", e)))
}
