//! # claritycall-client
//!
//! Client-side state for the claritycall mentorship marketplace: slot and
//! booking stores with a strict refresh-after-write policy, the derived
//! schedule buckets a screen renders, the mentor directory, notifications,
//! chat threads, and a cancellable poller for the views that re-fetch on
//! an interval.
//!
//! Every store is a read-through cache over the remote service. Mutations
//! never patch local state: a successful write is followed by a full
//! re-fetch of the affected collection, so the cache never diverges from
//! server truth at the cost of one extra round trip per action.

pub mod bookings;
pub mod chat;
pub mod mentors;
pub mod notifications;
pub mod poll;
pub mod schedule;
pub mod session;
pub mod slots;

mod error;

pub use bookings::BookingStore;
pub use chat::{ConversationList, MessageThread};
pub use error::StoreError;
pub use mentors::{MentorCard, MentorDirectory, PublicSlotBoard};
pub use notifications::NotificationCenter;
pub use poll::{chat_period, notification_period, spawn_poller, PollHandle};
pub use schedule::{bucket, BucketFilter, ScheduleBuckets};
pub use session::Session;
pub use slots::{SlotForm, SlotStore};

use tracing_subscriber::{fmt, EnvFilter};

/// Install the default tracing subscriber for an application embedding
/// this crate. Honours `RUST_LOG`; quiet on everything but this stack.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("claritycall_client=debug,claritycall_api=debug,warn")
    });

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
