use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One chat message. `chat_room_id` groups the bidirectional conversation
/// between exactly two users; `is_read` flips only via an explicit mark-read
/// from the receiving side.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub sender_id: String,
    #[serde(default)]
    pub sender_name: Option<String>,
    pub receiver_id: String,
    #[serde(default)]
    pub receiver_name: Option<String>,
    pub content: String,
    pub is_read: bool,
    pub chat_room_id: String,
    pub created_at: Option<NaiveDateTime>,
}

/// Room id for the conversation between two users, the same on both sides:
/// the lexicographically smaller id first, joined with an underscore.
pub fn chat_room_id(user_a: &str, user_b: &str) -> String {
    if user_a < user_b {
        format!("{}_{}", user_a, user_b)
    } else {
        format!("{}_{}", user_b, user_a)
    }
}
