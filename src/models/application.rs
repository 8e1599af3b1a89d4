use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Application pipeline. The chain runs
/// APPLIED -> SHORTLISTED -> INTERVIEW_SCHEDULED -> INTERVIEW_COMPLETED -> HIRED,
/// with REJECTED reachable from any non-terminal state. HIRED and REJECTED
/// are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationStatus {
    Applied,
    Shortlisted,
    InterviewScheduled,
    InterviewCompleted,
    Hired,
    Rejected,
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Applied => "APPLIED",
            ApplicationStatus::Shortlisted => "SHORTLISTED",
            ApplicationStatus::InterviewScheduled => "INTERVIEW_SCHEDULED",
            ApplicationStatus::InterviewCompleted => "INTERVIEW_COMPLETED",
            ApplicationStatus::Hired => "HIRED",
            ApplicationStatus::Rejected => "REJECTED",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, ApplicationStatus::Hired | ApplicationStatus::Rejected)
    }

    /// Position along the pipeline chain. REJECTED sits outside the chain.
    fn rank(&self) -> Option<u8> {
        match self {
            ApplicationStatus::Applied => Some(0),
            ApplicationStatus::Shortlisted => Some(1),
            ApplicationStatus::InterviewScheduled => Some(2),
            ApplicationStatus::InterviewCompleted => Some(3),
            ApplicationStatus::Hired => Some(4),
            ApplicationStatus::Rejected => None,
        }
    }

    /// The server stays authoritative; this is the client-side model used to
    /// gate actions before a request goes out. Repeating the current status
    /// is a permitted no-op. Terminal states never leave. REJECTED is
    /// reachable from any non-terminal state. Along the chain only forward
    /// moves are allowed, skips included.
    pub fn can_transition_to(&self, target: ApplicationStatus) -> bool {
        if *self == target {
            return true;
        }
        if self.is_terminal() {
            return false;
        }
        if target == ApplicationStatus::Rejected {
            return true;
        }
        match (self.rank(), target.rank()) {
            (Some(from), Some(to)) => to > from,
            _ => false,
        }
    }
}

impl std::fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A candidate's submission against a specific job posting. Created once per
/// (candidate, job) pair; the server rejects duplicates.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: String,
    pub job_id: String,
    #[serde(default)]
    pub job_title: Option<String>,
    pub candidate_id: String,
    #[serde(default)]
    pub candidate_name: Option<String>,
    #[serde(default)]
    pub candidate_email: Option<String>,
    pub status: ApplicationStatus,
    pub cover_letter: Option<String>,
    pub resume_url: Option<String>,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}
