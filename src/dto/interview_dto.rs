use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::interview::{InterviewResponseStatus, InterviewType};

/// Create/update payload. `scheduled_at` is the one hard requirement; the
/// backend expects a naive local date-time (no zone suffix).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct InterviewCreateRequest {
    #[validate(length(min = 1))]
    pub application_id: String,
    #[validate(required)]
    pub scheduled_at: Option<NaiveDateTime>,
    pub location: Option<String>,
    pub interview_type: Option<InterviewType>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewResponseRequest {
    pub response: InterviewResponseStatus,
    pub note: Option<String>,
}

impl InterviewResponseRequest {
    pub fn accept(note: Option<String>) -> Self {
        Self {
            response: InterviewResponseStatus::Accepted,
            note,
        }
    }

    pub fn decline(note: Option<String>) -> Self {
        Self {
            response: InterviewResponseStatus::Rejected,
            note,
        }
    }
}
