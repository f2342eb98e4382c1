//! Bookings for one side of the marketplace, with the derived schedule
//! buckets the sessions screen renders.

use chrono::{DateTime, Utc};
use tracing::info;

use claritycall_api::ApiClient;
use claritycall_shared::types::{Booking, BookingId, Role};

use crate::error::{Result, StoreError};
use crate::schedule::{self, BucketFilter, ScheduleBuckets};

/// Read-through cache of the caller's bookings.
///
/// The role fixes which list the server returns and which counterpart it
/// embeds; a user acting as both seeker and mentor holds two stores.
#[derive(Debug)]
pub struct BookingStore {
    api: ApiClient,
    role: Role,
    bookings: Vec<Booking>,
}

impl BookingStore {
    pub fn new(api: ApiClient, role: Role) -> Self {
        Self {
            api,
            role,
            bookings: Vec::new(),
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// The cached collection, in server order.
    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    /// Re-fetch the whole collection. Single entry point for the
    /// refresh-after-write policy.
    pub async fn refresh(&mut self) -> Result<()> {
        self.bookings = self.api.list_bookings(self.role).await?;
        Ok(())
    }

    /// Confirm a booking by attaching a meeting link. Mentor side only;
    /// a blank link fails validation with no request issued.
    pub async fn confirm(&mut self, id: &BookingId, meeting_link: &str) -> Result<()> {
        if self.role != Role::Mentor {
            return Err(StoreError::Validation(
                "Only the mentor side can confirm a booking".to_string(),
            ));
        }

        self.api.confirm_booking(id, meeting_link).await?;
        info!(booking = %id, "Booking confirmed");
        self.refresh().await
    }

    /// Partition the cached bookings into display buckets against `now`.
    pub fn buckets(&self, now: DateTime<Utc>) -> ScheduleBuckets {
        schedule::bucket(&self.bookings, now)
    }

    /// The cached bookings matching one filter, in server order.
    pub fn filtered(&self, filter: BucketFilter, now: DateTime<Utc>) -> Vec<&Booking> {
        schedule::filtered(&self.bookings, filter, now)
    }
}
