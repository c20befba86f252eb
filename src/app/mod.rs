//! TUI application module
//!
//! Contains the terminal lifecycle wrapper, the timer screen, and the
//! application controller loop.

pub mod app;
pub mod screens;
pub mod tui;

pub use app::App;
pub use screens::{FieldFocus, TimerScreen};
pub use tui::Tui;
