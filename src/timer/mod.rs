//! Timer core module
//!
//! Contains the Pomodoro state machine and the periodic tick source
//! that drives it.

pub mod state;
pub mod ticker;

// Re-export commonly used types
pub use state::{Phase, Snapshot, TimerState};
pub use ticker::{Tick, Ticker};
