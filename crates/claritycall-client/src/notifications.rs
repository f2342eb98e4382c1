//! The notification bell: unread count, read-state flips, and the
//! chat-message jump target.

use claritycall_api::ApiClient;
use claritycall_shared::types::{ConversationId, Notification, NotificationId, NotificationKind};

use crate::error::Result;

/// Read-through cache of the current user's notifications.
#[derive(Debug)]
pub struct NotificationCenter {
    api: ApiClient,
    notifications: Vec<Notification>,
}

impl NotificationCenter {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            notifications: Vec::new(),
        }
    }

    /// The cached notifications, in server order.
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Number of unread notifications, for the badge.
    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.is_read).count()
    }

    /// Re-fetch the whole collection.
    pub async fn refresh(&mut self) -> Result<()> {
        self.notifications = self.api.list_notifications().await?;
        Ok(())
    }

    /// Mark one notification read, then re-fetch.
    pub async fn mark_read(&mut self, id: &NotificationId) -> Result<()> {
        self.api.mark_notification_read(id).await?;
        self.refresh().await
    }

    /// Mark everything read, then re-fetch.
    pub async fn mark_all_read(&mut self) -> Result<()> {
        self.api.mark_all_notifications_read().await?;
        self.refresh().await
    }
}

/// The conversation a chat-message notification points at, if any.
pub fn chat_target(notification: &Notification) -> Option<&ConversationId> {
    if notification.kind != NotificationKind::ChatMessage {
        return None;
    }
    notification.data.as_ref()?.conversation_id.as_ref()
}
