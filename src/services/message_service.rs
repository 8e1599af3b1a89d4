use tracing::{info, instrument};
use validator::Validate;

use crate::dto::message_dto::MessageRequest;
use crate::error::Result;
use crate::http::ApiClient;
use crate::models::message::Message;

#[derive(Clone)]
pub struct MessageService {
    api: ApiClient,
}

impl MessageService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    #[instrument(skip(self, payload), fields(receiver = %payload.receiver_email))]
    pub async fn send(&self, payload: MessageRequest) -> Result<Message> {
        payload.validate()?;
        let message: Message = self.api.post("/chat/send", &payload).await?;
        info!(chat_room_id = %message.chat_room_id, "Sent message");
        Ok(message)
    }

    /// Full message list for the conversation with `other_user_email`,
    /// oldest first. Callers replace their in-memory list wholesale.
    pub async fn conversation(&self, other_user_email: &str) -> Result<Vec<Message>> {
        self.api
            .get_query(
                "/chat/messages",
                &[("otherUserEmail", other_user_email.to_string())],
            )
            .await
    }

    /// Marks everything addressed to the caller in the room as read.
    /// Idempotent: a second call finds nothing unread and succeeds.
    #[instrument(skip(self))]
    pub async fn mark_read(&self, chat_room_id: &str) -> Result<()> {
        self.api
            .post_empty(
                "/chat/mark-read",
                &[("chatRoomId", chat_room_id.to_string())],
            )
            .await
    }

    /// Unread messages addressed to the caller, across all rooms.
    pub async fn unread_count(&self) -> Result<i64> {
        self.api.get("/chat/unread-count").await
    }
}
