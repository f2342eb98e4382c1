//! Shared constants.

/// Slot length applied when a mentor does not pick one explicitly.
pub const DEFAULT_SLOT_DURATION_MINUTES: u32 = 45;

/// How often mounted views re-fetch notifications, in seconds.
pub const NOTIFICATION_POLL_SECS: u64 = 30;

/// How often an open conversation re-fetches its messages, in seconds.
pub const CHAT_POLL_SECS: u64 = 4;
