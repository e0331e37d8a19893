use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An internship posting as listed by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Internship {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub stipend: Option<String>,
    pub duration_weeks: Option<u32>,
    pub is_open: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Pending,
    Accepted,
    Rejected,
}

/// A candidate's application to an internship.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Application {
    pub id: i64,
    pub internship_id: i64,
    pub candidate_name: String,
    pub candidate_email: String,
    pub status: ApplicationStatus,
}

/// A scheduled interview. Attendance and final selection start out unset
/// and are toggled by the interviewer after the fact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interview {
    pub id: i64,
    pub application_id: i64,
    pub candidate_name: String,
    /// Local calendar day; interviews are bucketed by this, never by
    /// a timestamp
    pub date: NaiveDate,
    /// Display-only wall-clock start, e.g. "14:30"
    pub start_time: String,
    pub attended: Option<bool>,
    pub selected: Option<bool>,
}

/// A single status mutation a dashboard action can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "field", content = "value")]
pub enum StatusChange {
    Application(ApplicationStatus),
    Attendance(bool),
    Selection(bool),
}
