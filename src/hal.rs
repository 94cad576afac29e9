//! Hardware abstraction traits for the appliance peripherals.
//!
//! The control core drives three collaborators: a two-line character
//! display, a chain of 8x8 LED-matrix devices, and momentary push-buttons.
//! Implement these traits for your hardware (I2C LCD, MAX7219 chain, GPIO
//! inputs, ...). All methods are infallible - handle hardware errors
//! internally, the core has no retry model and treats a failed read as
//! absent input for that tick.

/// Trait for abstracting a two-line character display.
///
/// The core only ever renders two lines of ASCII content per screen and
/// always clears before a redraw, so implementations never need
/// partial-line overwrite semantics.
pub trait CharacterDisplay {
    /// Clears the entire display.
    fn clear(&mut self);

    /// Moves the cursor to the given column and row.
    fn set_cursor(&mut self, col: u8, row: u8);

    /// Prints a string at the current cursor position.
    fn print(&mut self, text: &str);
}

/// Trait for abstracting a chain of 8x8 LED-matrix devices.
pub trait MatrixDisplay {
    /// Writes one row of pixels on the given device in the chain.
    ///
    /// Bit `n` of `bits` lights column `n` of the row.
    fn set_row(&mut self, device: usize, row: u8, bits: u8);

    /// Blanks the given device in the chain.
    fn clear_display(&mut self, device: usize);
}

/// Trait for abstracting a momentary digital input such as a push-button.
pub trait DigitalInput {
    /// Returns true while the input is asserted (button held down).
    ///
    /// Sampled once per tick per button; debounce is applied by the core,
    /// not by the implementation.
    fn is_asserted(&mut self) -> bool;
}
