//! Pomodoro state machine
//!
//! Owns the running flag, current phase, elapsed progress, configured
//! interval lengths, lap count, and auto-run flag, and applies both the
//! tick-driven and the user-driven transitions.
//!
//! Progress is tracked as a count of elapsed ticks against the current
//! phase's total tick count and only converted to a fraction on read, so
//! a full interval completes after exactly `phase_secs * TICKS_PER_SECOND`
//! ticks with no float accumulation drift.

use crate::util::units::parse_minutes;
use crate::{DEFAULT_BREAK_MINUTES, DEFAULT_STUDY_MINUTES, TICKS_PER_SECOND};

/// Interval kind currently being timed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Study interval (completing one counts as a lap)
    Study,
    /// Break interval
    Break,
}

impl Phase {
    /// The phase that follows this one
    pub fn flipped(self) -> Self {
        match self {
            Phase::Study => Phase::Break,
            Phase::Break => Phase::Study,
        }
    }

    /// Human-readable phase name
    pub fn label(self) -> &'static str {
        match self {
            Phase::Study => "Study",
            Phase::Break => "Break",
        }
    }
}

/// Read-only view of the timer for rendering
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    /// Current interval kind
    pub phase: Phase,
    /// Fraction of the current interval elapsed, in [0, 1]
    pub progress: f64,
    /// Whole seconds left in the current interval
    pub remaining_secs: u64,
    /// Completed study phases
    pub laps: u64,
    /// Whether progress advances on tick
    pub running: bool,
    /// Whether completed phases flow into the next one automatically
    pub auto_run: bool,
}

/// Pomodoro timer state machine
///
/// Created once at startup and owned by the application loop; every
/// read and write goes through that single owner.
#[derive(Debug, Clone)]
pub struct TimerState {
    running: bool,
    phase: Phase,
    /// Ticks elapsed in the current phase, never above `phase_ticks()`
    elapsed_ticks: u64,
    study_secs: u64,
    break_secs: u64,
    laps: u64,
    auto_run: bool,
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new(
            DEFAULT_STUDY_MINUTES * 60,
            DEFAULT_BREAK_MINUTES * 60,
            false,
        )
    }
}

impl TimerState {
    /// Create a stopped timer at the start of a study phase.
    ///
    /// Both durations must be positive; zero-length intervals are
    /// rejected by `TimerConfig::validate` before this is reached.
    pub fn new(study_secs: u64, break_secs: u64, auto_run: bool) -> Self {
        Self {
            running: false,
            phase: Phase::Study,
            elapsed_ticks: 0,
            study_secs,
            break_secs,
            laps: 0,
            auto_run,
        }
    }

    /// Length of the current phase in seconds
    pub fn phase_secs(&self) -> u64 {
        match self.phase {
            Phase::Study => self.study_secs,
            Phase::Break => self.break_secs,
        }
    }

    fn phase_ticks(&self) -> u64 {
        self.phase_secs() * TICKS_PER_SECOND
    }

    /// Fraction of the current phase elapsed, in [0, 1]
    pub fn progress(&self) -> f64 {
        self.elapsed_ticks as f64 / self.phase_ticks() as f64
    }

    /// Whether the current phase has fully elapsed
    pub fn is_complete(&self) -> bool {
        self.elapsed_ticks >= self.phase_ticks()
    }

    pub fn running(&self) -> bool {
        self.running
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn laps(&self) -> u64 {
        self.laps
    }

    pub fn auto_run(&self) -> bool {
        self.auto_run
    }

    pub fn study_secs(&self) -> u64 {
        self.study_secs
    }

    pub fn break_secs(&self) -> u64 {
        self.break_secs
    }

    /// Consume one tick.
    ///
    /// No-op unless running with the phase incomplete. On completion the
    /// timer either flips to the next phase (auto-run) or clamps at full
    /// progress, still running, until a manual repeat. Returns whether
    /// visible state changed and a redraw is needed.
    pub fn advance(&mut self) -> bool {
        if !self.running || self.is_complete() {
            return false;
        }

        self.elapsed_ticks += 1;

        if self.is_complete() && self.auto_run {
            self.finish_phase();
        }

        true
    }

    /// Complete the current phase: count the lap when leaving study,
    /// zero the progress, flip the phase.
    fn finish_phase(&mut self) {
        if self.phase == Phase::Study {
            self.laps += 1;
        }
        self.elapsed_ticks = 0;
        self.phase = self.phase.flipped();
    }

    /// Handle the main start/stop/repeat action.
    ///
    /// Flips the running flag. If the phase is already complete this is
    /// the repeat action instead: the phase flips, progress zeroes, and
    /// the timer ends up running regardless of the toggle direction.
    /// Whenever the call leaves the timer running, the pending duration
    /// texts are committed; text that does not parse as a positive whole
    /// number of minutes is ignored and the prior value kept.
    pub fn toggle_start_stop(&mut self, study_text: &str, break_text: &str) {
        self.running = !self.running;

        if self.is_complete() {
            // Repeat overrides stop: the button starts the next phase
            // even when the toggle direction would have paused.
            self.finish_phase();
            self.running = true;
        }

        if self.running {
            self.commit_durations(study_text, break_text);
        }
    }

    /// Commit pending duration fields, keeping the elapsed fraction of
    /// the current phase stable when its length changes.
    fn commit_durations(&mut self, study_text: &str, break_text: &str) {
        let fraction = self.progress();

        if let Some(minutes) = parse_minutes(study_text) {
            self.study_secs = minutes * 60;
        }
        if let Some(minutes) = parse_minutes(break_text) {
            self.break_secs = minutes * 60;
        }

        let total = self.phase_ticks();
        self.elapsed_ticks = ((fraction * total as f64).round() as u64).min(total);
    }

    /// Return to the initial state: study phase, stopped, zero progress,
    /// zero laps. Auto-run is left as-is.
    pub fn reset(&mut self) {
        self.laps = 0;
        self.running = false;
        self.phase = Phase::Study;
        self.elapsed_ticks = 0;
    }

    /// Change the auto-run mode; takes effect on the next tick.
    pub fn set_auto_run(&mut self, auto_run: bool) {
        self.auto_run = auto_run;
    }

    /// Current state for rendering
    pub fn snapshot(&self) -> Snapshot {
        let secs = self.phase_secs();
        Snapshot {
            phase: self.phase,
            progress: self.progress(),
            remaining_secs: secs - self.elapsed_ticks / TICKS_PER_SECOND,
            laps: self.laps,
            running: self.running,
            auto_run: self.auto_run,
        }
    }
}
