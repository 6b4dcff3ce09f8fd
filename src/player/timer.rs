//! Cancellable tick scheduling for automatic playback.
//!
//! The player has no background threads: the event loop asks the ticker
//! whether its deadline has passed. Cancelling drops the deadline, so a
//! cancelled tick can never fire later.

use std::time::{Duration, Instant};

/// A single pending tick, or none.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ticker {
    deadline: Option<Instant>,
}

impl Ticker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the ticker to fire `period` after `now`, replacing any pending tick.
    pub fn schedule(&mut self, now: Instant, period: Duration) {
        self.deadline = Some(now + period);
    }

    /// Retract the pending tick.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_scheduled(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Whether a tick is pending and its deadline has passed.
    pub fn due(&self, now: Instant) -> bool {
        self.deadline.is_some_and(|d| now >= d)
    }

    /// Time left until the pending tick, zero if overdue.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline.map(|d| d.saturating_duration_since(now))
    }
}
