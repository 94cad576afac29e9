//! Time abstraction traits for platform-agnostic timing.
//!
//! The control core never reads hardware time directly. The application
//! controller samples its [`TimeSource`] exactly once per tick and threads
//! that single instant through every collaborator, so timer expiry, frame
//! advancement and button debounce all agree on "now" within a tick.

/// Trait for abstracting time sources.
///
/// Implementations must be monotonic: successive calls to [`now`](Self::now)
/// never move backwards. Wrapping at the representation's natural overflow
/// boundary is fine as long as [`TimeInstant::duration_since`] subtracts
/// wrap-safely.
pub trait TimeSource<I: TimeInstant> {
    /// Returns the current time instant.
    fn now(&self) -> I;
}

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy + PartialEq {
    /// Zero duration constant.
    const ZERO: Self;

    /// Converts duration to milliseconds.
    fn as_millis(&self) -> u64;

    /// Creates duration from milliseconds.
    fn from_millis(millis: u64) -> Self;

    /// Saturating subtraction (returns ZERO on underflow).
    fn saturating_sub(self, other: Self) -> Self;
}

/// Trait abstraction for instant types.
pub trait TimeInstant: Copy {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// Calculates duration since an earlier instant.
    ///
    /// Implementations backed by a wrapping tick counter must compute this
    /// with wrapping subtraction (`now - earlier`), never by comparing
    /// `earlier + duration` against `now`.
    fn duration_since(&self, earlier: Self) -> Self::Duration;
}
