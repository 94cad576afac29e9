//! Non-blocking countdown timer with edge-triggered expiry.

use crate::time::{TimeDuration, TimeInstant};

/// Tracks a single elapsed-time interval against a monotonic clock.
///
/// The timer is polled, never blocking: [`poll`](Self::poll) must be called
/// every tick while armed, and returns true on exactly one tick - the one
/// where the elapsed time first reaches the duration. Missed polls only
/// delay detection, they never cause duplicate firing.
#[derive(Debug, Clone, Copy)]
pub struct CountdownTimer<I: TimeInstant> {
    started_at: Option<I>,
    duration: I::Duration,
}

impl<I: TimeInstant> CountdownTimer<I> {
    /// Creates a disarmed timer.
    pub fn new() -> Self {
        Self {
            started_at: None,
            duration: I::Duration::ZERO,
        }
    }

    /// Arms the timer with the given duration, starting from `now`.
    ///
    /// Re-arming a running timer restarts it.
    pub fn start(&mut self, duration: I::Duration, now: I) {
        self.duration = duration;
        self.started_at = Some(now);
    }

    /// Disarms the timer unconditionally. Idempotent.
    pub fn stop(&mut self) {
        self.started_at = None;
    }

    /// Returns true while the timer is armed and has not yet expired.
    pub fn is_active(&self) -> bool {
        self.started_at.is_some()
    }

    /// Checks for expiry, disarming on the expiry tick.
    ///
    /// Returns true exactly once per arming: on the first poll where
    /// `now - start >= duration`. Every other poll returns false.
    pub fn poll(&mut self, now: I) -> bool {
        let Some(started_at) = self.started_at else {
            return false;
        };
        if now.duration_since(started_at).as_millis() >= self.duration.as_millis() {
            self.started_at = None;
            true
        } else {
            false
        }
    }

    /// Returns the time left before expiry, or zero if disarmed.
    pub fn remaining(&self, now: I) -> I::Duration {
        match self.started_at {
            Some(started_at) => self.duration.saturating_sub(now.duration_since(started_at)),
            None => I::Duration::ZERO,
        }
    }
}

impl<I: TimeInstant> Default for CountdownTimer<I> {
    fn default() -> Self {
        Self::new()
    }
}
