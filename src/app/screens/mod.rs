//! Screen components module
//!
//! The application has a single screen showing the timer.

pub mod timer;

pub use timer::{FieldFocus, TimerScreen};
