//! Trailing-edge debouncing of input events.

use std::future::Future;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;

/// Quiet period between the last keystroke and the search.
pub const DEBOUNCE_QUIET_PERIOD: Duration = Duration::from_millis(200);

/// Runs the most recently scheduled action once no new action has been
/// scheduled for the quiet period.
///
/// Only the timer is cancellable. Once an action has started it runs to
/// completion on its own task, even if a newer action is scheduled while it
/// is awaiting I/O.
///
/// Must be used from within a tokio runtime.
#[derive(Debug)]
pub struct Debouncer {
    quiet: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl Debouncer {
    #[must_use]
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            pending: Mutex::new(None),
        }
    }

    /// Schedules `action`, replacing any action still waiting for its timer.
    ///
    /// `action` is only invoked when the timer fires, so anything it reads is
    /// read at that moment rather than now.
    pub fn schedule<F, Fut>(&self, action: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let quiet = self.quiet;
        let timer = tokio::spawn(async move {
            tokio::time::sleep(quiet).await;
            tokio::spawn(action());
        });

        let previous = self
            .pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .replace(timer);
        if let Some(previous) = previous {
            previous.abort();
        }
    }

    /// Drops the pending action, if its timer has not fired yet.
    pub fn cancel(&self) {
        let pending = self
            .pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(timer) = pending {
            timer.abort();
        }
    }

    /// Whether an action is still waiting for its timer.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .is_some_and(|timer| !timer.is_finished())
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEBOUNCE_QUIET_PERIOD)
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
