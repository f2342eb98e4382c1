//! Chat conversation and message calls.

use serde::Serialize;

use claritycall_shared::types::{ChatMessage, Conversation, ConversationId, UserId};

use crate::client::ApiClient;
use crate::error::{ApiError, Result};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct OpenConversationRequest<'a> {
    user_id: &'a UserId,
    mentor_id: &'a UserId,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct SendMessageRequest<'a> {
    conversation_id: &'a ConversationId,
    text: &'a str,
}

impl ApiClient {
    /// List the current user's conversations (both roles mixed; the
    /// caller filters to the side it is rendering).
    pub async fn list_conversations(&self) -> Result<Vec<Conversation>> {
        self.get_json("/api/chat/conversations").await
    }

    /// Fetch one conversation with its counterpart summary hydrated.
    pub async fn get_conversation(&self, id: &ConversationId) -> Result<Conversation> {
        self.get_json(&format!("/api/chat/conversations/{id}")).await
    }

    /// Open (or return the existing) conversation between a seeker and a
    /// mentor.
    pub async fn open_conversation(
        &self,
        user_id: &UserId,
        mentor_id: &UserId,
    ) -> Result<Conversation> {
        let body = OpenConversationRequest { user_id, mentor_id };
        self.post_json("/api/chat/conversation", &body).await
    }

    /// List all messages in a conversation, oldest first.
    pub async fn list_messages(&self, id: &ConversationId) -> Result<Vec<ChatMessage>> {
        self.get_json(&format!("/api/chat/conversations/{id}/messages"))
            .await
    }

    /// Send a text message. Blank text is rejected before any request.
    pub async fn send_message(
        &self,
        conversation_id: &ConversationId,
        text: &str,
    ) -> Result<ChatMessage> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ApiError::Validation(
                "Message text must not be empty".to_string(),
            ));
        }

        let body = SendMessageRequest {
            conversation_id,
            text,
        };
        self.post_json("/api/chat/messages", &body).await
    }
}
