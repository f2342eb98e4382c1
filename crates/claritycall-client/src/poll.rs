//! Cancellable periodic refresh tasks.
//!
//! Views that stay current by re-fetching (notifications, open chat
//! threads) hold a [`PollHandle`] for as long as they are mounted. The
//! task fires once immediately, then on every interval tick; a tick that
//! lands while the previous fetch is still in flight is skipped rather
//! than queued, so a slow backend never piles up overlapping requests.
//! Dropping the handle cancels the task.

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::debug;

use claritycall_shared::constants::{CHAT_POLL_SECS, NOTIFICATION_POLL_SECS};

/// Period for the notification bell poller.
pub fn notification_period() -> Duration {
    Duration::from_secs(NOTIFICATION_POLL_SECS)
}

/// Period for an open chat thread's message poller.
pub fn chat_period() -> Duration {
    Duration::from_secs(CHAT_POLL_SECS)
}

/// Handle to a running poll task. Aborts the task when stopped or dropped.
#[derive(Debug)]
pub struct PollHandle {
    handle: JoinHandle<()>,
}

impl PollHandle {
    /// Stop the poll task. Idempotent.
    pub fn stop(&self) {
        self.handle.abort();
    }

    /// Whether the task has ended (stopped or aborted).
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for PollHandle {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Run `task` now and then on every `period` tick until the handle is
/// stopped or dropped.
pub fn spawn_poller<F, Fut>(period: Duration, mut task: F) -> PollHandle
where
    F: FnMut() -> Fut + Send + 'static,
    Fut: Future<Output = ()> + Send,
{
    let handle = tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            interval.tick().await;
            task().await;
        }
    });

    debug!(period_ms = period.as_millis() as u64, "Poller started");
    PollHandle { handle }
}
