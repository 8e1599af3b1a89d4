use serde::{Deserialize, Serialize};
use validator::Validate;

/// Outgoing chat message; the receiver is addressed by email.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MessageRequest {
    #[validate(email)]
    pub receiver_email: String,
    #[validate(length(min = 1))]
    pub content: String,
}
