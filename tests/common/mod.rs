//! Shared test infrastructure for focus-timer integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use focus_timer::{
    Animation, AnimationSet, Animator, AppConfig, AppController, ButtonLevels, Buttons,
    CharacterDisplay, DigitalInput, Frame, MatrixDisplay, TimeDuration, TimeInstant, TimeSource,
};

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    const ZERO: Self = TestDuration(0);

    fn as_millis(&self) -> u64 {
        self.0
    }

    fn from_millis(millis: u64) -> Self {
        TestDuration(millis)
    }

    fn saturating_sub(self, other: Self) -> Self {
        TestDuration(self.0.saturating_sub(other.0))
    }
}

/// Mock instant type for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0.wrapping_sub(earlier.0))
    }
}

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: Cell<TestInstant>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: Cell::new(TestInstant(0)),
        }
    }

    /// Advance time by the given number of milliseconds
    pub fn advance(&self, millis: u64) {
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0 + millis));
    }
}

impl TimeSource<TestInstant> for MockTimeSource {
    fn now(&self) -> TestInstant {
        self.current_time.get()
    }
}

// ============================================================================
// Mock Character Display
// ============================================================================

/// Shared handle onto a mock LCD's output, usable after the display itself
/// has moved into the controller.
#[derive(Clone, Default)]
pub struct LcdLog {
    lines: Rc<RefCell<Vec<String>>>,
    screen: Rc<RefCell<Vec<String>>>,
    clears: Rc<Cell<usize>>,
}

impl LcdLog {
    /// All strings printed since construction, in order.
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    /// The strings printed since the most recent clear (one screen).
    pub fn screen(&self) -> Vec<String> {
        self.screen.borrow().clone()
    }

    pub fn last_line(&self) -> Option<String> {
        self.lines.borrow().last().cloned()
    }

    pub fn clear_count(&self) -> usize {
        self.clears.get()
    }
}

/// Mock LCD that records printed text into its shared log
pub struct MockLcd {
    log: LcdLog,
}

impl MockLcd {
    pub fn new(log: LcdLog) -> Self {
        Self { log }
    }
}

impl CharacterDisplay for MockLcd {
    fn clear(&mut self) {
        self.log.clears.set(self.log.clears.get() + 1);
        self.log.screen.borrow_mut().clear();
    }

    fn set_cursor(&mut self, _col: u8, _row: u8) {}

    fn print(&mut self, text: &str) {
        self.log.lines.borrow_mut().push(String::from(text));
        self.log.screen.borrow_mut().push(String::from(text));
    }
}

// ============================================================================
// Mock Matrix Display
// ============================================================================

/// Shared handle onto a mock matrix's output
#[derive(Clone, Default)]
pub struct MatrixLog {
    row_writes: Rc<RefCell<Vec<(usize, u8, u8)>>>,
    clears: Rc<Cell<usize>>,
}

impl MatrixLog {
    pub fn row_writes(&self) -> Vec<(usize, u8, u8)> {
        self.row_writes.borrow().clone()
    }

    pub fn write_count(&self) -> usize {
        self.row_writes.borrow().len()
    }

    pub fn clear_count(&self) -> usize {
        self.clears.get()
    }
}

/// Mock matrix that records every row write
pub struct MockMatrix {
    log: MatrixLog,
}

impl MockMatrix {
    pub fn new(log: MatrixLog) -> Self {
        Self { log }
    }
}

impl MatrixDisplay for MockMatrix {
    fn set_row(&mut self, device: usize, row: u8, bits: u8) {
        self.log.row_writes.borrow_mut().push((device, row, bits));
    }

    fn clear_display(&mut self, _device: usize) {
        self.log.clears.set(self.log.clears.get() + 1);
    }
}

// ============================================================================
// Mock Buttons
// ============================================================================

/// Shared settable level for one mock button
#[derive(Clone, Default)]
pub struct Level(Rc<Cell<bool>>);

impl Level {
    pub fn set(&self, asserted: bool) {
        self.0.set(asserted);
    }

    pub fn get(&self) -> bool {
        self.0.get()
    }
}

/// Mock push-button driven by its shared `Level`
pub struct MockButton(Level);

impl DigitalInput for MockButton {
    fn is_asserted(&mut self) -> bool {
        self.0.get()
    }
}

// ============================================================================
// Controller Fixture
// ============================================================================

/// Identifies one of the three appliance buttons in scripted scenarios.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Increase,
    Decrease,
    Confirm,
}

pub const FRAMES_INTRO: [Frame; 3] = [[0x01; 8], [0x02; 8], [0x03; 8]];
pub const FRAMES_CONFIG: [Frame; 2] = [[0x0C; 8], [0x0D; 8]];
pub const FRAMES_STUDY: [Frame; 2] = [[0x0A; 8], [0x0B; 8]];
pub const FRAMES_PAUSE: [Frame; 2] = [[0xA0; 8], [0xB0; 8]];

/// Frame duration used by every fixture's animator, in milliseconds.
pub const FRAME_MS: u64 = 100;

/// Everything the controller borrows, plus the shared inspection handles.
pub struct Fixture {
    pub clock: MockTimeSource,
    pub lcd: LcdLog,
    pub matrix: MatrixLog,
    pub increase: Level,
    pub decrease: Level,
    pub confirm: Level,
    intro: Animation<'static>,
    config: Animation<'static>,
    study: Animation<'static>,
    pause: Animation<'static>,
}

pub type TestController<'a> = AppController<
    'a,
    'a,
    TestInstant,
    MockLcd,
    MockMatrix,
    MockButton,
    MockTimeSource,
>;

impl Fixture {
    pub fn new() -> Self {
        Self {
            clock: MockTimeSource::new(),
            lcd: LcdLog::default(),
            matrix: MatrixLog::default(),
            increase: Level::default(),
            decrease: Level::default(),
            confirm: Level::default(),
            intro: Animation::new("intro", &FRAMES_INTRO).unwrap(),
            config: Animation::new("config", &FRAMES_CONFIG).unwrap(),
            study: Animation::new("study", &FRAMES_STUDY).unwrap(),
            pause: Animation::new("pause", &FRAMES_PAUSE).unwrap(),
        }
    }

    /// Builds a controller seeded with the given default minute values.
    pub fn controller(&self, study_minutes: u64, pause_minutes: u64) -> TestController<'_> {
        let animations = AnimationSet {
            intro: &self.intro,
            config: &self.config,
            study: &self.study,
            pause: &self.pause,
        };
        let animator = Animator::<TestInstant, MockMatrix>::new(
            MockMatrix::new(self.matrix.clone()),
            TestDuration(FRAME_MS),
        );
        let buttons = Buttons {
            increase: MockButton(self.increase.clone()),
            decrease: MockButton(self.decrease.clone()),
            confirm: MockButton(self.confirm.clone()),
        };
        AppController::new(
            &self.clock,
            MockLcd::new(self.lcd.clone()),
            animator,
            buttons,
            AppConfig {
                animations,
                default_study: TestDuration(study_minutes * 60_000),
                default_pause: TestDuration(pause_minutes * 60_000),
            },
        )
    }

    /// Scripts one accepted button press: advances time past the debounce
    /// guard, ticks with the button held, then ticks again released.
    pub fn press(&self, app: &mut TestController<'_>, button: Button) {
        let level = match button {
            Button::Increase => &self.increase,
            Button::Decrease => &self.decrease,
            Button::Confirm => &self.confirm,
        };
        self.clock.advance(focus_timer::DEBOUNCE_MS + 50);
        level.set(true);
        app.tick();
        level.set(false);
        self.clock.advance(10);
        app.tick();
    }

    /// Runs the intro to completion so the controller sits in the menu.
    pub fn run_past_intro(&self, app: &mut TestController<'_>) {
        app.start();
        // One poll per frame interval; the intro has FRAMES_INTRO frames.
        for _ in 0..=FRAMES_INTRO.len() {
            self.clock.advance(FRAME_MS);
            app.tick();
        }
    }
}

/// Builds raw levels for direct menu polling
pub fn levels(increase: bool, decrease: bool, confirm: bool) -> ButtonLevels {
    ButtonLevels {
        increase,
        decrease,
        confirm,
    }
}
