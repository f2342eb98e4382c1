//! The mentor's own availability slots: a read-through cache with CRUD
//! mutations, each followed by a full re-list.

use chrono::{DateTime, Local, Utc};
use tracing::info;

use claritycall_api::{ApiClient, NewSlot};
use claritycall_shared::constants::DEFAULT_SLOT_DURATION_MINUTES;
use claritycall_shared::time::{self, Meridiem};
use claritycall_shared::types::{Slot, SlotId};

use crate::error::{Result, StoreError};
use crate::schedule::slot_has_started;

/// The split form a mentor fills to create or edit a slot.
///
/// Date and time stay as the raw input strings until submission; the
/// codec validates and combines them, so a half-filled form fails before
/// any request is made.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotForm {
    /// Calendar date, `YYYY-MM-DD`.
    pub date: String,
    /// 12-hour clock time, `HH:MM`.
    pub time: String,
    pub meridiem: Meridiem,
    pub duration_minutes: u32,
    pub price: f64,
    pub label: Option<String>,
}

impl Default for SlotForm {
    fn default() -> Self {
        Self {
            date: String::new(),
            time: String::new(),
            meridiem: Meridiem::Am,
            duration_minutes: DEFAULT_SLOT_DURATION_MINUTES,
            price: 0.0,
            label: None,
        }
    }
}

impl SlotForm {
    /// Validate the form and build the request payload.
    pub fn to_request(&self) -> Result<NewSlot> {
        let start = time::encode(&self.date, &self.time, self.meridiem)?;

        if self.duration_minutes == 0 {
            return Err(StoreError::Validation(
                "Duration must be positive".to_string(),
            ));
        }
        if self.price < 0.0 {
            return Err(StoreError::Validation(
                "Price must not be negative".to_string(),
            ));
        }

        Ok(NewSlot {
            start: start.with_timezone(&Utc),
            duration_minutes: self.duration_minutes,
            price: self.price,
            label: self
                .label
                .as_deref()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .map(String::from),
        })
    }

    /// Populate an edit form from a stored slot, splitting its start
    /// instant back into date/time/meridiem in the local timezone.
    pub fn from_slot(slot: &Slot) -> Self {
        let split = time::decode(slot.start.with_timezone(&Local));
        Self {
            date: split.date,
            time: split.time,
            meridiem: split.meridiem,
            duration_minutes: slot.duration_minutes,
            price: slot.price,
            label: slot.label.clone(),
        }
    }
}

/// CRUD over the authenticated mentor's own slots.
///
/// Mutations take `&mut self` and run write-then-refresh as one cycle, so
/// a caller cannot issue a second mutation from the same store until the
/// first refresh lands, the per-control serialization the UI relies on.
#[derive(Debug)]
pub struct SlotStore {
    api: ApiClient,
    slots: Vec<Slot>,
}

impl SlotStore {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            slots: Vec::new(),
        }
    }

    /// The cached collection, in server order.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Slots whose start has not yet passed at `now`.
    pub fn available(&self, now: DateTime<Utc>) -> Vec<&Slot> {
        self.slots
            .iter()
            .filter(|s| !slot_has_started(s, now))
            .collect()
    }

    /// Slots whose start has already elapsed at `now`.
    pub fn expired(&self, now: DateTime<Utc>) -> Vec<&Slot> {
        self.slots
            .iter()
            .filter(|s| slot_has_started(s, now))
            .collect()
    }

    /// Re-fetch the whole collection. Single entry point for the
    /// refresh-after-write policy; every mutation funnels through here.
    pub async fn refresh(&mut self) -> Result<()> {
        self.slots = self.api.list_my_slots().await?;
        Ok(())
    }

    /// Create a slot from form input. The created record is not inserted
    /// locally; the follow-up refresh is the only source of truth.
    pub async fn create(&mut self, form: &SlotForm) -> Result<()> {
        let request = form.to_request()?;
        let created = self.api.create_slot(&request).await?;
        info!(slot = %created.id, "Slot created");
        self.refresh().await
    }

    /// Replace a slot's fields in place.
    pub async fn update(&mut self, id: &SlotId, form: &SlotForm) -> Result<()> {
        let request = form.to_request()?;
        self.api.update_slot(id, &request).await?;
        info!(slot = %id, "Slot updated");
        self.refresh().await
    }

    /// Delete a slot. Deletion is irreversible, so the caller-supplied
    /// `confirm` gate runs against the cached record before anything is
    /// dispatched; returns `Ok(false)` when the user declines.
    pub async fn delete<F>(&mut self, id: &SlotId, confirm: F) -> Result<bool>
    where
        F: FnOnce(&Slot) -> bool,
    {
        let slot = self
            .slots
            .iter()
            .find(|s| &s.id == id)
            .ok_or_else(|| StoreError::Validation(format!("Unknown slot: {id}")))?;

        if !confirm(slot) {
            return Ok(false);
        }

        self.api.delete_slot(id).await?;
        info!(slot = %id, "Slot deleted");
        self.refresh().await?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claritycall_shared::types::SlotId;

    #[test]
    fn test_form_builds_request() {
        let form = SlotForm {
            date: "2025-03-10".to_string(),
            time: "09:00".to_string(),
            meridiem: Meridiem::Am,
            price: 500.0,
            label: Some("  Resume review  ".to_string()),
            ..SlotForm::default()
        };
        let req = form.to_request().unwrap();
        assert_eq!(req.duration_minutes, 45);
        assert_eq!(req.price, 500.0);
        assert_eq!(req.label.as_deref(), Some("Resume review"));

        // The instant round-trips through the local timezone.
        let split = time::decode(req.start.with_timezone(&Local));
        assert_eq!(split.date, "2025-03-10");
        assert_eq!(split.time, "09:00");
        assert_eq!(split.meridiem, Meridiem::Am);
    }

    #[test]
    fn test_form_missing_date_is_validation_error() {
        let form = SlotForm {
            time: "09:00".to_string(),
            ..SlotForm::default()
        };
        let err = form.to_request().unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_form_missing_time_is_validation_error() {
        let form = SlotForm {
            date: "2025-03-10".to_string(),
            ..SlotForm::default()
        };
        assert!(form.to_request().unwrap_err().is_validation());
    }

    #[test]
    fn test_form_rejects_zero_duration_and_negative_price() {
        let base = SlotForm {
            date: "2025-03-10".to_string(),
            time: "09:00".to_string(),
            ..SlotForm::default()
        };

        let zero = SlotForm {
            duration_minutes: 0,
            ..base.clone()
        };
        assert!(zero.to_request().unwrap_err().is_validation());

        let negative = SlotForm {
            price: -1.0,
            ..base
        };
        assert!(negative.to_request().unwrap_err().is_validation());
    }

    #[test]
    fn test_form_from_slot_round_trips() {
        let original = SlotForm {
            date: "2025-03-10".to_string(),
            time: "09:00".to_string(),
            meridiem: Meridiem::Am,
            duration_minutes: 30,
            price: 250.0,
            label: Some("Intro call".to_string()),
        };
        let request = original.to_request().unwrap();

        let slot = Slot {
            id: SlotId::from("s1"),
            owner_id: None,
            start: request.start,
            duration_minutes: request.duration_minutes,
            price: request.price,
            label: request.label.clone(),
        };

        assert_eq!(SlotForm::from_slot(&slot), original);
    }
}
