//! Animation frame tables.
//!
//! An [`Animation`] is a named, immutable sequence of 8-row frames for an
//! 8x8 LED matrix. Frame data is owned by startup code (typically a
//! `static` table) and only referenced here - the player never copies it.

/// Number of pixel rows in a matrix frame.
pub const FRAME_ROWS: usize = 8;

/// One renderable 8x8 image: eight row bit-patterns.
pub type Frame = [u8; FRAME_ROWS];

/// Animation validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AnimationError {
    /// No frames provided.
    NoFrames,
}

impl core::fmt::Display for AnimationError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            AnimationError::NoFrames => {
                write!(f, "animation must have at least one frame")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for AnimationError {}

/// A named immutable sequence of matrix frames.
///
/// Guaranteed non-empty, so a player holding a reference can always index
/// a valid frame.
#[derive(Debug, Clone, Copy)]
pub struct Animation<'a> {
    name: &'static str,
    frames: &'a [Frame],
}

impl<'a> Animation<'a> {
    /// Creates an animation over a borrowed frame table.
    ///
    /// # Errors
    /// * `NoFrames` - the frame table is empty
    pub fn new(name: &'static str, frames: &'a [Frame]) -> Result<Self, AnimationError> {
        if frames.is_empty() {
            return Err(AnimationError::NoFrames);
        }
        Ok(Self { name, frames })
    }

    /// Returns the animation's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the number of frames.
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Returns the frame at the given index.
    pub fn frame(&self, index: usize) -> Option<&'a Frame> {
        self.frames.get(index)
    }
}

/// The four-animation catalog supplied to the controller at startup.
///
/// `config` is accepted and carried but not played by the current
/// transition logic; a future entry screen may use it.
#[derive(Debug, Clone, Copy)]
pub struct AnimationSet<'a> {
    /// Played once (non-looping) while the device starts up.
    pub intro: &'a Animation<'a>,
    /// Reserved for the configuration screen.
    pub config: &'a Animation<'a>,
    /// Looped during a study session.
    pub study: &'a Animation<'a>,
    /// Looped during a break session.
    pub pause: &'a Animation<'a>,
}
