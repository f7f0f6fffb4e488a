//! Debounced search scheduling
//!
//! At most one search is pending at any time. Arming replaces whatever was
//! pending, so a burst of keystrokes collapses into one evaluation of the
//! last query. Time is passed in explicitly; the host loop decides when to
//! call [`Debouncer::fire_due`].

use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingSearch {
    query: String,
    armed_at: Instant,
}

/// Cancellable single-slot search timer
#[derive(Debug, Clone)]
pub struct Debouncer {
    window: Duration,
    pending: Option<PendingSearch>,
}

impl Debouncer {
    /// Create an idle debouncer with the given quiet period
    #[must_use]
    pub const fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
        }
    }

    /// Quiet period between the last arm and firing
    #[must_use]
    pub const fn window(&self) -> Duration {
        self.window
    }

    /// Whether a search is waiting to fire
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Query captured by the pending search, if any
    #[must_use]
    pub fn pending_query(&self) -> Option<&str> {
        self.pending.as_ref().map(|p| p.query.as_str())
    }

    /// Schedule a search for `query`, cancelling any pending one
    ///
    /// Returns true if a pending search was replaced.
    pub fn arm(&mut self, query: String, now: Instant) -> bool {
        self.pending
            .replace(PendingSearch {
                query,
                armed_at: now,
            })
            .is_some()
    }

    /// Drop the pending search, returning its query
    pub fn cancel(&mut self) -> Option<String> {
        self.pending.take().map(|p| p.query)
    }

    /// Take the pending query once its quiet period has elapsed
    pub fn fire_due(&mut self, now: Instant) -> Option<String> {
        let pending = self.pending.as_ref()?;
        if now.saturating_duration_since(pending.armed_at) < self.window {
            return None;
        }
        self.cancel()
    }

    /// Time left before the pending search fires
    #[must_use]
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        let pending = self.pending.as_ref()?;
        let elapsed = now.saturating_duration_since(pending.armed_at);
        Some(self.window.saturating_sub(elapsed))
    }
}
