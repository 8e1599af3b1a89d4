use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Job lifecycle. Forward-only: DRAFT -> PUBLISHED -> CLOSED.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobStatus {
    Draft,
    Published,
    Closed,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Draft => "DRAFT",
            JobStatus::Published => "PUBLISHED",
            JobStatus::Closed => "CLOSED",
        }
    }

    /// DRAFT -> PUBLISHED -> CLOSED, no moves backward.
    pub fn can_transition_to(&self, target: JobStatus) -> bool {
        matches!(
            (self, target),
            (JobStatus::Draft, JobStatus::Published)
                | (JobStatus::Draft, JobStatus::Closed)
                | (JobStatus::Published, JobStatus::Closed)
        )
    }
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    pub title: String,
    pub description: String,
    pub location: String,
    pub department: Option<String>,
    pub employment_type: Option<String>,
    pub salary_min: Option<Decimal>,
    pub salary_max: Option<Decimal>,
    pub status: JobStatus,
    /// Owned by the recruiter who created it.
    pub recruiter_id: String,
    #[serde(default)]
    pub recruiter_name: Option<String>,
    pub created_at: Option<NaiveDateTime>,
    pub published_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub application_count: i64,
}
