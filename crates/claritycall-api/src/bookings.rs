//! Booking reads and the two mutations the client performs: a seeker
//! creating a booking against a slot, and a mentor confirming one with a
//! meeting link.

use serde::Serialize;

use claritycall_shared::types::{Booking, BookingId, Role, SlotId};

use crate::client::ApiClient;
use crate::error::{ApiError, Result};

/// Payload for a seeker booking a slot.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewBookingRequest {
    pub slot_id: SlotId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Payload for a mentor confirming a booking.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmBookingRequest {
    pub meeting_link: String,
}

impl ApiClient {
    /// List bookings relevant to the caller's role. Each booking arrives
    /// with its slot and both user summaries embedded.
    pub async fn list_bookings(&self, role: Role) -> Result<Vec<Booking>> {
        let path = match role {
            Role::Seeker => "/api/bookings",
            Role::Mentor => "/api/bookings/mentor",
        };
        self.get_json(path).await
    }

    /// Create a booking against a slot, with optional notes.
    pub async fn create_booking(
        &self,
        slot_id: &SlotId,
        notes: Option<&str>,
    ) -> Result<Booking> {
        let body = NewBookingRequest {
            slot_id: slot_id.clone(),
            notes: notes
                .map(str::trim)
                .filter(|n| !n.is_empty())
                .map(String::from),
        };
        self.post_json("/api/bookings", &body).await
    }

    /// Confirm a booking, attaching the meeting link. A blank link is
    /// rejected here, before any request is issued.
    pub async fn confirm_booking(
        &self,
        id: &BookingId,
        meeting_link: &str,
    ) -> Result<Booking> {
        let meeting_link = meeting_link.trim();
        if meeting_link.is_empty() {
            return Err(ApiError::Validation(
                "Meeting link is required to confirm a booking".to_string(),
            ));
        }

        let body = ConfirmBookingRequest {
            meeting_link: meeting_link.to_string(),
        };
        self.put_json(&format!("/api/bookings/{id}/confirm"), &body)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_booking_serializes_camel_case() {
        let body = NewBookingRequest {
            slot_id: SlotId::from("s1"),
            notes: Some("Resume review focus".to_string()),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["slotId"], "s1");
        assert_eq!(json["notes"], "Resume review focus");
    }

    #[test]
    fn test_new_booking_omits_empty_notes() {
        let body = NewBookingRequest {
            slot_id: SlotId::from("s1"),
            notes: None,
        };
        let json = serde_json::to_string(&body).unwrap();
        assert!(!json.contains("notes"));
    }
}
