//! Configuration menu state machine.
//!
//! Lets the user set the study and break lengths (in minutes) with three
//! buttons, then confirm the pair. The menu owns its own debounce state,
//! independent of the application controller's: the caller samples raw
//! button levels once per tick and hands them in together with the tick
//! instant.
//!
//! On the confirm screen "increase" means yes and "decrease" means no.
//! An unusual mapping, but it is what the appliance ships with.

use core::fmt::Write;

use crate::button::{ButtonLevels, Debouncer};
use crate::hal::CharacterDisplay;
use crate::time::TimeInstant;

/// Lower bound for both minute values.
pub const MIN_MINUTES: u16 = 5;
/// Upper bound for the study length.
pub const MAX_STUDY_MINUTES: u16 = 60;
/// Upper bound for the break length.
pub const MAX_BREAK_MINUTES: u16 = 30;
/// Amount one button press moves a minute value.
pub const MINUTE_STEP: u16 = 5;

/// The menu's current screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MenuState {
    /// Editing the study length.
    EditStudy,
    /// Editing the break length.
    EditBreak,
    /// Asking whether to start with the entered values.
    Confirm,
    /// Values accepted; terminal until the caller resets the menu.
    Done,
}

/// Three-button duration editor rendered on the character display.
///
/// Out-of-range input is clamped, never rejected; there are no error
/// conditions.
pub struct ConfigMenu<I: TimeInstant> {
    state: MenuState,
    study_minutes: u16,
    break_minutes: u16,
    increase: Debouncer<I>,
    decrease: Debouncer<I>,
    confirm: Debouncer<I>,
}

impl<I: TimeInstant> ConfigMenu<I> {
    /// Creates a menu seeded with default minute values (clamped into
    /// range), starting at [`MenuState::EditStudy`].
    pub fn new(default_study_minutes: u16, default_break_minutes: u16) -> Self {
        Self {
            state: MenuState::EditStudy,
            study_minutes: default_study_minutes.clamp(MIN_MINUTES, MAX_STUDY_MINUTES),
            break_minutes: default_break_minutes.clamp(MIN_MINUTES, MAX_BREAK_MINUTES),
            increase: Debouncer::with_default_guard(),
            decrease: Debouncer::with_default_guard(),
            confirm: Debouncer::with_default_guard(),
        }
    }

    /// Re-enters the menu at [`MenuState::EditStudy`] and draws its screen.
    ///
    /// Previously entered minute values are preserved, so a user returning
    /// from a cancelled session picks up where they left off. The press
    /// that brought the caller here may still be held, so all three
    /// debouncers are stamped at `now`; input is accepted again once the
    /// guard interval has passed.
    pub fn begin<C: CharacterDisplay>(&mut self, lcd: &mut C, now: I) {
        self.state = MenuState::EditStudy;
        self.increase.stamp(now);
        self.decrease.stamp(now);
        self.confirm.stamp(now);
        self.render(lcd);
    }

    /// Runs one tick of the menu.
    ///
    /// Applies the menu's own debounce to the raw levels, updates the
    /// state machine, and redraws the screen when an input was accepted.
    pub fn poll<C: CharacterDisplay>(&mut self, lcd: &mut C, levels: ButtonLevels, now: I) {
        let increase = self.increase.edge(levels.increase, now);
        let decrease = self.decrease.edge(levels.decrease, now);
        let confirm = self.confirm.edge(levels.confirm, now);

        let mut redraw = false;
        match self.state {
            MenuState::EditStudy => {
                if increase {
                    self.study_minutes = (self.study_minutes + MINUTE_STEP).min(MAX_STUDY_MINUTES);
                    redraw = true;
                }
                if decrease {
                    self.study_minutes = self
                        .study_minutes
                        .saturating_sub(MINUTE_STEP)
                        .max(MIN_MINUTES);
                    redraw = true;
                }
                if confirm {
                    self.state = MenuState::EditBreak;
                    redraw = true;
                }
            }
            MenuState::EditBreak => {
                if increase {
                    self.break_minutes = (self.break_minutes + MINUTE_STEP).min(MAX_BREAK_MINUTES);
                    redraw = true;
                }
                if decrease {
                    self.break_minutes = self
                        .break_minutes
                        .saturating_sub(MINUTE_STEP)
                        .max(MIN_MINUTES);
                    redraw = true;
                }
                if confirm {
                    self.state = MenuState::Confirm;
                    redraw = true;
                }
            }
            MenuState::Confirm => {
                if increase {
                    // Yes: the caller reads the values and moves on, so
                    // there is nothing left to draw here.
                    self.state = MenuState::Done;
                }
                if decrease {
                    // No: back to the first screen, values kept.
                    self.state = MenuState::EditStudy;
                    redraw = true;
                }
                // Confirm has no effect on this screen.
            }
            MenuState::Done => {}
        }

        if redraw {
            self.render(lcd);
        }
    }

    /// Returns the menu's current screen.
    pub fn state(&self) -> MenuState {
        self.state
    }

    /// Returns the entered study length in minutes.
    pub fn study_minutes(&self) -> u16 {
        self.study_minutes
    }

    /// Returns the entered break length in minutes.
    pub fn break_minutes(&self) -> u16 {
        self.break_minutes
    }

    fn render<C: CharacterDisplay>(&self, lcd: &mut C) {
        lcd.clear();
        lcd.set_cursor(0, 0);
        match self.state {
            MenuState::EditStudy => {
                lcd.print("Set study time");
                lcd.set_cursor(0, 1);
                print_minutes(lcd, self.study_minutes);
            }
            MenuState::EditBreak => {
                lcd.print("Set break time");
                lcd.set_cursor(0, 1);
                print_minutes(lcd, self.break_minutes);
            }
            MenuState::Confirm => {
                lcd.print("Start session?");
                lcd.set_cursor(0, 1);
                lcd.print("Yes (+)  No (-)");
            }
            MenuState::Done => {}
        }
    }
}

fn print_minutes<C: CharacterDisplay>(lcd: &mut C, minutes: u16) {
    let mut line: heapless::String<16> = heapless::String::new();
    let _ = write!(line, "  {} min", minutes);
    lcd.print(&line);
}
