//! Notification reads and read-state flips.

use claritycall_shared::types::{Notification, NotificationId};

use crate::client::ApiClient;
use crate::error::Result;

impl ApiClient {
    /// List the current user's notifications, newest first
    /// (server-defined order, preserved).
    pub async fn list_notifications(&self) -> Result<Vec<Notification>> {
        self.get_json("/api/notifications").await
    }

    /// Mark one notification as read.
    pub async fn mark_notification_read(&self, id: &NotificationId) -> Result<()> {
        self.put_empty(&format!("/api/notifications/{id}/read")).await
    }

    /// Mark every notification as read.
    pub async fn mark_all_notifications_read(&self) -> Result<()> {
        self.put_empty("/api/notifications/read-all").await
    }
}
