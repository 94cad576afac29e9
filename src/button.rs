//! Button sampling and debounce.
//!
//! Debounce is input-signal shaping, not a resource concern: each consumer
//! keeps its own per-button "last accepted edge" stamp. An edge is accepted
//! when the level is asserted and the guard interval has passed since the
//! previous accepted edge, so a held button auto-repeats at the guard rate.

use crate::hal::DigitalInput;
use crate::time::{TimeDuration, TimeInstant};

/// Default debounce guard interval in milliseconds.
pub const DEBOUNCE_MS: u64 = 200;

/// Momentary per-tick levels of the three appliance buttons.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonLevels {
    /// "Increase" / "yes" button.
    pub increase: bool,
    /// "Decrease" / "no" button.
    pub decrease: bool,
    /// "Confirm" / "cancel session" button.
    pub confirm: bool,
}

/// The three input pins of the appliance.
pub struct Buttons<P: DigitalInput> {
    /// "Increase" / "yes" pin.
    pub increase: P,
    /// "Decrease" / "no" pin.
    pub decrease: P,
    /// "Confirm" / "cancel session" pin.
    pub confirm: P,
}

impl<P: DigitalInput> Buttons<P> {
    /// Samples all three pins once.
    pub fn sample(&mut self) -> ButtonLevels {
        ButtonLevels {
            increase: self.increase.is_asserted(),
            decrease: self.decrease.is_asserted(),
            confirm: self.confirm.is_asserted(),
        }
    }
}

/// Time-stamp debouncer for a single button.
#[derive(Debug, Clone, Copy)]
pub struct Debouncer<I: TimeInstant> {
    guard: I::Duration,
    last_edge_at: Option<I>,
}

impl<I: TimeInstant> Debouncer<I> {
    /// Creates a debouncer with the given guard interval.
    pub fn new(guard: I::Duration) -> Self {
        Self {
            guard,
            last_edge_at: None,
        }
    }

    /// Creates a debouncer with the default guard interval.
    pub fn with_default_guard() -> Self {
        Self::new(I::Duration::from_millis(DEBOUNCE_MS))
    }

    /// Records `now` as the last accepted edge without reporting one.
    ///
    /// A level still held at `now` is then ignored for one guard
    /// interval, so a press that already triggered the caller's
    /// transition is not consumed a second time by the next consumer.
    pub fn stamp(&mut self, now: I) {
        self.last_edge_at = Some(now);
    }

    /// Reports whether an edge is accepted this tick.
    ///
    /// Accepted iff the level is asserted and more than the guard interval
    /// has passed since the last accepted edge; the stamp is updated on
    /// acceptance.
    pub fn edge(&mut self, asserted: bool, now: I) -> bool {
        if !asserted {
            return false;
        }
        let accepted = match self.last_edge_at {
            None => true,
            Some(last) => now.duration_since(last).as_millis() > self.guard.as_millis(),
        };
        if accepted {
            self.last_edge_at = Some(now);
        }
        accepted
    }
}
