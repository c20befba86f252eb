//! Configuration module
//!
//! Startup parameters for the timer. Configuration lives in memory for
//! the life of the process; nothing is persisted across runs.

use crate::{
    PomotuiError, Result, DEFAULT_BREAK_MINUTES, DEFAULT_STUDY_MINUTES, TICKS_PER_SECOND,
};

/// Timer startup configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerConfig {
    /// Initial study interval length in minutes
    pub study_minutes: u64,
    /// Initial break interval length in minutes
    pub break_minutes: u64,
    /// Whether completed phases flow into the next one automatically
    pub auto_run: bool,
    /// Tick rate of the background time source
    pub ticks_per_second: u64,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            study_minutes: DEFAULT_STUDY_MINUTES,
            break_minutes: DEFAULT_BREAK_MINUTES,
            auto_run: false,
            ticks_per_second: TICKS_PER_SECOND,
        }
    }
}

impl TimerConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the study interval length in minutes
    pub fn with_study_minutes(mut self, minutes: u64) -> Self {
        self.study_minutes = minutes;
        self
    }

    /// Set the break interval length in minutes
    pub fn with_break_minutes(mut self, minutes: u64) -> Self {
        self.break_minutes = minutes;
        self
    }

    /// Set the auto-run mode
    pub fn with_auto_run(mut self, auto_run: bool) -> Self {
        self.auto_run = auto_run;
        self
    }

    /// Set the tick rate
    pub fn with_ticks_per_second(mut self, rate: u64) -> Self {
        self.ticks_per_second = rate;
        self
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.study_minutes == 0 {
            return Err(PomotuiError::ConfigError(
                "Study interval must be at least one minute".to_string(),
            ));
        }

        if self.break_minutes == 0 {
            return Err(PomotuiError::ConfigError(
                "Break interval must be at least one minute".to_string(),
            ));
        }

        if self.ticks_per_second == 0 {
            return Err(PomotuiError::ConfigError(
                "Tick rate must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
