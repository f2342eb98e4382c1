//! Derived schedule buckets: the pure reconciliation step between raw
//! slot/booking collections and what a screen renders.
//!
//! Bucketing is a function of the collection and an injected `now`; it is
//! recomputed on every render pass and holds no identity of its own.
//! Within a bucket the server's arrival order is preserved, never re-sorted.
//!
//! The three predicates are deliberately not mutually exclusive. "Past"
//! matches on completed status OR elapsed start time, so a completed
//! booking whose start is still in the future would satisfy both the
//! upcoming and past predicates, and a pending booking whose time has
//! elapsed is past by time while its status never moves. This mirrors the
//! shipped behavior and is covered by tests rather than silently fixed.

use chrono::{DateTime, Utc};

use claritycall_shared::types::{Booking, BookingStatus, Slot};

/// The named filter a sessions screen offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BucketFilter {
    Upcoming,
    Past,
    Cancelled,
}

/// Start strictly in the future and not cancelled.
pub fn is_upcoming(booking: &Booking, now: DateTime<Utc>) -> bool {
    booking.slot.start > now && booking.status != BookingStatus::Cancelled
}

/// Completed, or start at or before `now`.
pub fn is_past(booking: &Booking, now: DateTime<Utc>) -> bool {
    booking.status == BookingStatus::Completed || booking.slot.start <= now
}

/// Cancelled, regardless of time.
pub fn is_cancelled(booking: &Booking) -> bool {
    booking.status == BookingStatus::Cancelled
}

/// Evaluate one filter against one booking.
pub fn matches(booking: &Booking, filter: BucketFilter, now: DateTime<Utc>) -> bool {
    match filter {
        BucketFilter::Upcoming => is_upcoming(booking, now),
        BucketFilter::Past => is_past(booking, now),
        BucketFilter::Cancelled => is_cancelled(booking),
    }
}

/// The three derived views over one booking collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScheduleBuckets {
    pub upcoming: Vec<Booking>,
    pub past: Vec<Booking>,
    pub cancelled: Vec<Booking>,
}

/// Partition a booking collection into display buckets against `now`.
pub fn bucket(bookings: &[Booking], now: DateTime<Utc>) -> ScheduleBuckets {
    let mut buckets = ScheduleBuckets::default();
    for booking in bookings {
        if is_upcoming(booking, now) {
            buckets.upcoming.push(booking.clone());
        }
        if is_past(booking, now) {
            buckets.past.push(booking.clone());
        }
        if is_cancelled(booking) {
            buckets.cancelled.push(booking.clone());
        }
    }
    buckets
}

/// Borrowing variant of [`bucket`] for a single filter.
pub fn filtered<'a>(
    bookings: &'a [Booking],
    filter: BucketFilter,
    now: DateTime<Utc>,
) -> Vec<&'a Booking> {
    bookings
        .iter()
        .filter(|b| matches(b, filter, now))
        .collect()
}

/// Whether a slot's start instant has already passed.
pub fn slot_has_started(slot: &Slot, now: DateTime<Utc>) -> bool {
    slot.start <= now
}
