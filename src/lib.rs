#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`AppController`**: Top-level state machine cycling the appliance through startup, configuration and study/break sessions
//! - **`ConfigMenu`**: Three-button menu for setting the study and break lengths
//! - **`CountdownTimer`**: Non-blocking countdown with edge-triggered expiry
//! - **`Animator`**: Plays `Animation` frame tables on the LED matrix
//! - **`Animation`** / **`AnimationSet`**: Named immutable frame tables and the four-entry catalog
//! - **`Debouncer`**: Per-button time-stamp debounce
//! - **`CharacterDisplay`** / **`MatrixDisplay`** / **`DigitalInput`**: Traits to implement for your hardware
//! - **`TimeSource`**: Trait to implement for your timing system
//!
//! Everything is poll-driven from a single periodic tick; no call blocks,
//! no allocation happens, and all timing state lives in plain fields
//! carried between ticks.

pub mod animation;
pub mod animator;
pub mod button;
pub mod controller;
pub mod hal;
pub mod menu;
pub mod time;
pub mod timer;

pub use animation::{Animation, AnimationError, AnimationSet, FRAME_ROWS, Frame};
pub use animator::Animator;
pub use button::{ButtonLevels, Buttons, DEBOUNCE_MS, Debouncer};
pub use controller::{AppConfig, AppController, AppState, DISPLAY_REFRESH_MS};
pub use hal::{CharacterDisplay, DigitalInput, MatrixDisplay};
pub use menu::{
    ConfigMenu, MAX_BREAK_MINUTES, MAX_STUDY_MINUTES, MIN_MINUTES, MINUTE_STEP, MenuState,
};
pub use time::{TimeDuration, TimeInstant, TimeSource};
