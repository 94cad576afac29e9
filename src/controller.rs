//! Top-level application state machine.
//!
//! [`AppController`] coordinates the countdown timer, the animation player
//! and the configuration menu through a single periodic [`tick`]. Every
//! tick samples the clock once and threads that instant through all
//! collaborators, then dispatches on the current state. Nothing blocks;
//! all "suspension" is state carried between ticks.
//!
//! [`tick`]: AppController::tick

use core::fmt::Write;

use crate::animation::AnimationSet;
use crate::animator::Animator;
use crate::button::{Buttons, Debouncer};
use crate::hal::{CharacterDisplay, DigitalInput, MatrixDisplay};
use crate::menu::{ConfigMenu, MenuState};
use crate::time::{TimeDuration, TimeInstant, TimeSource};
use crate::timer::CountdownTimer;

/// How often the remaining-time screen is refreshed during a session.
pub const DISPLAY_REFRESH_MS: u64 = 1000;

/// The appliance's top-level state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AppState {
    /// Startup animation and greeting.
    Initializing,
    /// Configuration menu is active.
    Configuring,
    /// Study countdown running.
    Studying,
    /// Break countdown running.
    Pausing,
}

/// Constructor-supplied configuration for the controller.
///
/// The default durations only seed the menu's initial minute values; the
/// durations actually used for sessions are whatever the user confirms.
pub struct AppConfig<'a, D> {
    /// The four-animation catalog.
    pub animations: AnimationSet<'a>,
    /// Default study length.
    pub default_study: D,
    /// Default break length.
    pub default_pause: D,
}

/// Cycles the appliance through startup, configuration and alternating
/// study/break sessions.
///
/// The controller exclusively owns the timer, the animation player, the
/// menu, the character display and the three buttons; the time source and
/// the animation catalog are borrowed. Call [`start`](Self::start) once,
/// then [`tick`](Self::tick) from the main loop as fast as you like.
pub struct AppController<
    'a,
    't,
    I: TimeInstant,
    C: CharacterDisplay,
    M: MatrixDisplay,
    P: DigitalInput,
    T: TimeSource<I>,
> {
    time_source: &'t T,
    lcd: C,
    animator: Animator<'a, I, M>,
    timer: CountdownTimer<I>,
    menu: ConfigMenu<I>,
    buttons: Buttons<P>,
    cancel: Debouncer<I>,
    animations: AnimationSet<'a>,
    state: AppState,
    study_duration: I::Duration,
    pause_duration: I::Duration,
    last_refresh_at: Option<I>,
}

impl<
    'a,
    't,
    I: TimeInstant,
    C: CharacterDisplay,
    M: MatrixDisplay,
    P: DigitalInput,
    T: TimeSource<I>,
> AppController<'a, 't, I, C, M, P, T>
{
    /// Creates a controller in [`AppState::Initializing`].
    ///
    /// The default durations seed the menu's minute values (whole minutes
    /// only; sub-minute remainders are dropped).
    pub fn new(
        time_source: &'t T,
        lcd: C,
        animator: Animator<'a, I, M>,
        buttons: Buttons<P>,
        config: AppConfig<'a, I::Duration>,
    ) -> Self {
        let study_minutes = (config.default_study.as_millis() / 60_000) as u16;
        let break_minutes = (config.default_pause.as_millis() / 60_000) as u16;

        Self {
            time_source,
            lcd,
            animator,
            timer: CountdownTimer::new(),
            menu: ConfigMenu::new(study_minutes, break_minutes),
            buttons,
            cancel: Debouncer::with_default_guard(),
            animations: config.animations,
            state: AppState::Initializing,
            study_duration: config.default_study,
            pause_duration: config.default_pause,
            last_refresh_at: None,
        }
    }

    /// Enters [`AppState::Initializing`]: greeting on the character
    /// display, intro animation played once on the matrix.
    ///
    /// Call once after hardware bring-up, before the first tick.
    pub fn start(&mut self) {
        let now = self.time_source.now();
        self.transition_to(AppState::Initializing, now);
    }

    /// Runs one tick of the control loop.
    ///
    /// Per tick: advance the animation player, poll the timer (capturing
    /// this tick's expiry edge), sample and debounce the buttons, then
    /// dispatch to the current state's handler. Timer expiry is evaluated
    /// before a cancel edge - when both land on the same tick the session
    /// has logically ended, so expiry wins.
    pub fn tick(&mut self) {
        let now = self.time_source.now();

        self.animator.poll(now);
        let expired = self.timer.poll(now);
        let levels = self.buttons.sample();
        let cancel = self.cancel.edge(levels.confirm, now);

        match self.state {
            AppState::Initializing => {
                if !self.animator.is_running() {
                    self.transition_to(AppState::Configuring, now);
                }
            }
            AppState::Configuring => {
                // The menu applies its own debounce to the raw levels.
                self.menu.poll(&mut self.lcd, levels, now);
                if self.menu.state() == MenuState::Done {
                    self.transition_to(AppState::Studying, now);
                }
            }
            AppState::Studying => {
                if expired {
                    self.transition_to(AppState::Pausing, now);
                } else if cancel {
                    self.transition_to(AppState::Configuring, now);
                } else {
                    self.refresh_session_screen(now);
                }
            }
            AppState::Pausing => {
                if expired {
                    self.transition_to(AppState::Studying, now);
                } else if cancel {
                    self.transition_to(AppState::Configuring, now);
                } else {
                    self.refresh_session_screen(now);
                }
            }
        }
    }

    /// Returns the controller's current state.
    pub fn state(&self) -> AppState {
        self.state
    }

    /// Returns the study length currently entered in the menu, in minutes.
    pub fn study_minutes(&self) -> u16 {
        self.menu.study_minutes()
    }

    /// Returns the break length currently entered in the menu, in minutes.
    pub fn break_minutes(&self) -> u16 {
        self.menu.break_minutes()
    }

    /// Returns the menu's current screen.
    pub fn menu_state(&self) -> MenuState {
        self.menu.state()
    }

    /// Performs the full entry setup for `next`.
    ///
    /// Entry is idempotent with respect to side effects: it always stops
    /// or replaces the animation, (re)arms or disarms the timer and
    /// clears and redraws the display, whatever the previous state was,
    /// so nothing carries over between sessions.
    fn transition_to(&mut self, next: AppState, now: I) {
        self.state = next;
        #[cfg(feature = "defmt")]
        defmt::debug!("app state -> {}", next);

        self.lcd.clear();
        self.last_refresh_at = Some(now);

        match next {
            AppState::Initializing => {
                self.timer.stop();
                self.animator.play(self.animations.intro, false, now);
                self.lcd.set_cursor(0, 0);
                self.lcd.print("Hello!");
                self.lcd.set_cursor(0, 1);
                self.lcd.print("Ready to focus");
            }
            AppState::Configuring => {
                self.timer.stop();
                self.animator.stop();
                self.menu.begin(&mut self.lcd, now);
            }
            AppState::Studying => {
                self.study_duration = minutes_to_duration(self.menu.study_minutes());
                self.animator.play(self.animations.study, true, now);
                self.timer.start(self.study_duration, now);
                self.render_remaining(self.study_duration.as_millis());
            }
            AppState::Pausing => {
                self.pause_duration = minutes_to_duration(self.menu.break_minutes());
                self.animator.play(self.animations.pause, true, now);
                self.timer.start(self.pause_duration, now);
                self.render_remaining(self.pause_duration.as_millis());
            }
        }
    }

    /// Redraws the remaining-time screen at a fixed cadence, not every
    /// tick.
    fn refresh_session_screen(&mut self, now: I) {
        let due = match self.last_refresh_at {
            Some(last) => now.duration_since(last).as_millis() >= DISPLAY_REFRESH_MS,
            None => true,
        };
        if due {
            let remaining = self.timer.remaining(now);
            self.render_remaining(remaining.as_millis());
            self.last_refresh_at = Some(now);
        }
    }

    /// Renders the session screen with the remaining time as `MM:SS`.
    ///
    /// Seconds round up, so the screen never shows `00:00` while the
    /// session is still running.
    fn render_remaining(&mut self, remaining_ms: u64) {
        let total_seconds = remaining_ms.div_ceil(1000);
        let minutes = total_seconds / 60;
        let seconds = total_seconds % 60;

        self.lcd.clear();
        self.lcd.set_cursor(0, 0);
        let label = match self.state {
            AppState::Pausing => "On a break...",
            _ => "Studying...",
        };
        self.lcd.print(label);

        self.lcd.set_cursor(0, 1);
        let mut line: heapless::String<16> = heapless::String::new();
        let _ = write!(line, "Time: {:02}:{:02}", minutes, seconds);
        self.lcd.print(&line);
    }
}

fn minutes_to_duration<D: TimeDuration>(minutes: u16) -> D {
    D::from_millis(minutes as u64 * 60_000)
}
