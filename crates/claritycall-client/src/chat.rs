//! Chat state: the seeker's conversation list and an open message thread.

use tracing::warn;

use claritycall_api::ApiClient;
use claritycall_shared::types::{ChatMessage, Conversation, ConversationId, UserId};

use crate::error::Result;

/// The conversations where the given user is the seeker side.
///
/// The list endpoint returns bare threads; each is hydrated with its
/// counterpart summary by a follow-up per-thread fetch. A thread whose
/// hydration fails is kept un-hydrated rather than dropped.
#[derive(Debug)]
pub struct ConversationList {
    api: ApiClient,
    conversations: Vec<Conversation>,
}

impl ConversationList {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            conversations: Vec::new(),
        }
    }

    pub fn conversations(&self) -> &[Conversation] {
        &self.conversations
    }

    /// Re-fetch and hydrate, keeping only threads where `me` is the
    /// seeker.
    pub async fn refresh(&mut self, me: &UserId) -> Result<()> {
        let list = self.api.list_conversations().await?;

        let mut hydrated = Vec::with_capacity(list.len());
        for conversation in list {
            match self.api.get_conversation(&conversation.id).await {
                Ok(full) => hydrated.push(full),
                Err(e) => {
                    warn!(conversation = %conversation.id, error = %e, "Hydration failed");
                    hydrated.push(conversation);
                }
            }
        }

        self.conversations = hydrated
            .into_iter()
            .filter(|c| c.user_id.as_ref() == Some(me))
            .collect();
        Ok(())
    }

    /// Open (or find) the thread between a seeker and a mentor.
    pub async fn open(&self, user_id: &UserId, mentor_id: &UserId) -> Result<Conversation> {
        Ok(self.api.open_conversation(user_id, mentor_id).await?)
    }
}

/// One open conversation's messages, re-fetched after every send and on
/// the chat poll interval.
#[derive(Debug)]
pub struct MessageThread {
    api: ApiClient,
    conversation_id: ConversationId,
    messages: Vec<ChatMessage>,
}

impl MessageThread {
    pub fn new(api: ApiClient, conversation_id: ConversationId) -> Self {
        Self {
            api,
            conversation_id,
            messages: Vec::new(),
        }
    }

    pub fn conversation_id(&self) -> &ConversationId {
        &self.conversation_id
    }

    /// The cached messages, oldest first.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// The thread metadata with the counterpart summary.
    pub async fn meta(&self) -> Result<Conversation> {
        Ok(self.api.get_conversation(&self.conversation_id).await?)
    }

    /// Re-fetch the whole thread.
    pub async fn refresh(&mut self) -> Result<()> {
        self.messages = self.api.list_messages(&self.conversation_id).await?;
        Ok(())
    }

    /// Send a message, then re-fetch. Blank text fails validation with
    /// no request issued.
    pub async fn send(&mut self, text: &str) -> Result<()> {
        self.api.send_message(&self.conversation_id, text).await?;
        self.refresh().await
    }
}
