//! POMOTUI - Pomodoro Terminal Timer
//!
//! A single-screen TUI countdown timer implementing the Pomodoro
//! technique: alternating study and break intervals with a progress bar,
//! lap counter, auto-run mode, and keyboard-editable durations.

use std::fmt;

// Public re-exports
pub mod app;
pub mod config;
pub mod timer;
pub mod util;

// Common error types
#[derive(Debug)]
pub enum PomotuiError {
    /// I/O operation failed
    IoError(std::io::Error),
    /// Configuration validation error
    ConfigError(String),
    /// TUI rendering or terminal setup error
    TuiError(String),
    /// Tick channel error
    ChannelError(String),
}

impl fmt::Display for PomotuiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PomotuiError::IoError(err) => write!(f, "I/O error: {}", err),
            PomotuiError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            PomotuiError::TuiError(msg) => write!(f, "TUI error: {}", msg),
            PomotuiError::ChannelError(msg) => write!(f, "Tick channel error: {}", msg),
        }
    }
}

impl std::error::Error for PomotuiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PomotuiError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PomotuiError {
    fn from(err: std::io::Error) -> Self {
        PomotuiError::IoError(err)
    }
}

/// Result type alias for pomotui operations
pub type Result<T> = std::result::Result<T, PomotuiError>;

// Common types and constants
pub const APP_NAME: &str = "pomotui";
/// Fixed rate of the background tick source
pub const TICKS_PER_SECOND: u64 = 25;
pub const DEFAULT_STUDY_MINUTES: u64 = 25;
pub const DEFAULT_BREAK_MINUTES: u64 = 5;
/// Bound of the tick hand-off queue between the ticker task and the app loop
pub const TICK_CHANNEL_CAPACITY: usize = 100;
