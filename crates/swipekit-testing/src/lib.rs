//! Testing utilities for Swipekit.
//!
//! The [`GestureRobot`] drives a real recognizer with synthetic contact
//! streams and records everything it fires, so tests can script a gesture
//! in a few lines and assert on the resulting dispatch sequence.

mod robot;

pub use robot::{GestureRobot, Recorded};
