//! Utility functions module
//!
//! Contains helper functions for clock formatting and duration-field
//! parsing.

pub mod units;

// Re-export commonly used functions
pub use units::{format_clock, parse_minutes};
