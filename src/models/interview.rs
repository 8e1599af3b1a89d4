use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Candidate-side response axis, independent of recruiter-side completion.
/// PENDING -> ACCEPTED or REJECTED, one-way once resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InterviewResponseStatus {
    #[default]
    Pending,
    Accepted,
    Rejected,
}

impl InterviewResponseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InterviewResponseStatus::Pending => "PENDING",
            InterviewResponseStatus::Accepted => "ACCEPTED",
            InterviewResponseStatus::Rejected => "REJECTED",
        }
    }

    pub fn is_resolved(&self) -> bool {
        !matches!(self, InterviewResponseStatus::Pending)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InterviewType {
    Phone,
    Video,
    InPerson,
}

/// A scheduled meeting tied to one application. The recruiter-side completion
/// flag and the candidate-side response are independent axes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interview {
    pub id: String,
    pub application_id: String,
    pub candidate_id: String,
    #[serde(default)]
    pub candidate_name: Option<String>,
    #[serde(default)]
    pub candidate_email: Option<String>,
    pub recruiter_id: String,
    #[serde(default)]
    pub recruiter_name: Option<String>,
    #[serde(default)]
    pub recruiter_email: Option<String>,
    /// Naive local date-time, the form the backend scheduler expects.
    pub scheduled_at: NaiveDateTime,
    pub completed_at: Option<NaiveDateTime>,
    pub location: Option<String>,
    pub interview_type: Option<InterviewType>,
    pub notes: Option<String>,
    pub is_completed: bool,
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub candidate_response_status: InterviewResponseStatus,
    pub candidate_responded_at: Option<NaiveDateTime>,
    pub candidate_response_note: Option<String>,
}

impl Interview {
    /// Details may be revised only while the interview is open.
    pub fn can_update(&self) -> bool {
        !self.is_completed
    }

    /// The candidate gets exactly one resolution, and only while the
    /// interview is open.
    pub fn can_respond(&self) -> bool {
        !self.is_completed && !self.candidate_response_status.is_resolved()
    }
}
