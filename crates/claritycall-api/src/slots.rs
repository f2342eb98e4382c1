//! Slot CRUD for the authenticated mentor, plus the public listing.

use chrono::{DateTime, Utc};
use serde::Serialize;

use claritycall_shared::types::{Slot, SlotId, UserId};

use crate::client::ApiClient;
use crate::error::Result;

/// Payload for creating or replacing a slot. The same shape serves both:
/// an update replaces `start`, duration, price and label in place.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewSlot {
    pub start: DateTime<Utc>,
    pub duration_minutes: u32,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl ApiClient {
    /// List all slots owned by the authenticated mentor.
    /// Ordering is server-defined and preserved as returned.
    pub async fn list_my_slots(&self) -> Result<Vec<Slot>> {
        self.get_json("/api/slots").await
    }

    /// Create a slot. The created record is returned, but callers follow
    /// the refresh-after-write policy rather than inserting it locally.
    pub async fn create_slot(&self, slot: &NewSlot) -> Result<Slot> {
        self.post_json("/api/slots", slot).await
    }

    /// Replace a slot's fields in place, keeping its id.
    pub async fn update_slot(&self, id: &SlotId, slot: &NewSlot) -> Result<Slot> {
        self.put_json(&format!("/api/slots/{id}"), slot).await
    }

    /// Delete a slot. Irreversible on the server side.
    pub async fn delete_slot(&self, id: &SlotId) -> Result<()> {
        self.delete(&format!("/api/slots/{id}")).await
    }

    /// List a mentor's publicly visible slots. Safe without a session.
    pub async fn list_public_slots(&self, mentor_id: &UserId) -> Result<Vec<Slot>> {
        self.get_json(&format!("/api/mentors/{mentor_id}/slots"))
            .await
    }
}
