//! Animation player for the LED-matrix display.
//!
//! Advances a frame index over a fixed frame interval and renders frames
//! to the matrix, entirely poll-driven. Frame advancement is periodic by
//! the frame duration and decoupled from the caller's poll cadence: at
//! most one frame advances per poll, which is fine because the control
//! loop polls far faster than the frame rate (no catch-up is performed).

use crate::animation::{Animation, FRAME_ROWS};
use crate::hal::MatrixDisplay;
use crate::time::{TimeDuration, TimeInstant};

/// Matrix device in the chain the player renders to.
const DEVICE: usize = 0;

/// Plays [`Animation`]s on a matrix display.
///
/// The player owns the matrix and borrows the frame tables; `current`
/// doubles as the running flag.
pub struct Animator<'a, I: TimeInstant, M: MatrixDisplay> {
    display: M,
    frame_duration: I::Duration,
    current: Option<&'a Animation<'a>>,
    frame: usize,
    looping: bool,
    last_frame_at: Option<I>,
}

impl<'a, I: TimeInstant, M: MatrixDisplay> Animator<'a, I, M> {
    /// Creates a stopped player with the given per-frame duration.
    pub fn new(display: M, frame_duration: I::Duration) -> Self {
        Self {
            display,
            frame_duration,
            current: None,
            frame: 0,
            looping: false,
            last_frame_at: None,
        }
    }

    /// Starts playing an animation from frame 0, rendering it immediately.
    ///
    /// If `animation` is the reference already playing this is a no-op -
    /// even if `looping` differs - so redundant calls from polling code
    /// never reset the frame position or flicker the display. The loop
    /// flag is only applied on a genuine switch.
    pub fn play(&mut self, animation: &'a Animation<'a>, looping: bool, now: I) {
        if let Some(current) = self.current
            && core::ptr::eq(current, animation)
        {
            return;
        }
        self.current = Some(animation);
        self.frame = 0;
        self.looping = looping;
        self.last_frame_at = Some(now);
        self.render_frame();
    }

    /// Stops playback and blanks the matrix.
    pub fn stop(&mut self) {
        self.current = None;
        self.display.clear_display(DEVICE);
    }

    /// Returns true while an animation is playing.
    pub fn is_running(&self) -> bool {
        self.current.is_some()
    }

    /// Returns the current frame index, if playing.
    pub fn current_frame(&self) -> Option<usize> {
        self.current.map(|_| self.frame)
    }

    /// Advances playback if a full frame interval has elapsed.
    ///
    /// A non-looping animation stops after its last frame without
    /// rendering again; a looping one wraps to frame 0.
    pub fn poll(&mut self, now: I) {
        let Some(animation) = self.current else {
            return;
        };
        let Some(last_frame_at) = self.last_frame_at else {
            return;
        };
        if now.duration_since(last_frame_at).as_millis() < self.frame_duration.as_millis() {
            return;
        }

        self.frame += 1;
        if self.frame >= animation.frame_count() {
            if self.looping {
                self.frame = 0;
            } else {
                self.current = None;
                return;
            }
        }
        self.render_frame();
        self.last_frame_at = Some(now);
    }

    fn render_frame(&mut self) {
        let Some(animation) = self.current else {
            return;
        };
        if let Some(frame) = animation.frame(self.frame) {
            for row in 0..FRAME_ROWS {
                self.display.set_row(DEVICE, row as u8, frame[row]);
            }
        }
    }
}
