//! Integration tests for the timer state machine's observable behavior

use pomotui::timer::{Phase, TimerState};

fn started(study_secs: u64, break_secs: u64, auto_run: bool) -> TimerState {
    let mut timer = TimerState::new(study_secs, break_secs, auto_run);
    timer.toggle_start_stop("", "");
    assert!(timer.running());
    timer
}

#[test]
fn progress_matches_tick_count_while_running() {
    // 60 s study phase at 25 ticks/s
    let mut timer = started(60, 60, false);
    for n in 1..=1500u64 {
        timer.advance();
        assert_eq!(timer.progress(), n as f64 / 1500.0);
    }
    assert_eq!(timer.progress(), 1.0);
}

#[test]
fn full_study_interval_completes_after_37500_ticks() {
    // 25 min study phase, auto-run off
    let mut timer = started(1500, 300, false);

    for _ in 0..37500 {
        timer.advance();
    }
    assert_eq!(timer.progress(), 1.0);
    assert_eq!(timer.snapshot().remaining_secs, 0);
    assert!(timer.running());
    assert_eq!(timer.phase(), Phase::Study);

    // One more tick changes nothing: the clamp is idempotent
    let before = timer.snapshot();
    assert!(!timer.advance());
    assert_eq!(timer.snapshot(), before);
}

#[test]
fn reset_returns_to_initial_state_from_anywhere() {
    let mut timer = started(1, 1, true);
    for _ in 0..80 {
        timer.advance();
    }
    assert!(timer.laps() > 0);
    assert_eq!(timer.phase(), Phase::Break);

    timer.reset();
    assert_eq!(timer.phase(), Phase::Study);
    assert!(!timer.running());
    assert_eq!(timer.progress(), 0.0);
    assert_eq!(timer.laps(), 0);
}

#[test]
fn laps_count_study_completions_only() {
    let mut timer = started(1, 2, true);
    // 1 s study (25 ticks) + 2 s break (50 ticks) per cycle
    for cycle in 1..=4u64 {
        for _ in 0..25 {
            timer.advance();
        }
        assert_eq!(timer.phase(), Phase::Break);
        assert_eq!(timer.laps(), cycle);
        for _ in 0..50 {
            timer.advance();
        }
        assert_eq!(timer.phase(), Phase::Study);
        // Completing a break never counts
        assert_eq!(timer.laps(), cycle);
    }
}

#[test]
fn auto_run_cycles_without_manual_action() {
    let mut timer = started(1, 1, true);
    // Five full study+break cycles, 50 ticks each
    for _ in 0..250 {
        timer.advance();
    }
    assert_eq!(timer.laps(), 5);
    assert_eq!(timer.phase(), Phase::Study);
    assert_eq!(timer.progress(), 0.0);
    assert!(timer.running());
}

#[test]
fn manual_repeat_after_clamp() {
    let mut timer = started(1, 1, false);
    for _ in 0..30 {
        timer.advance();
    }
    assert_eq!(timer.progress(), 1.0);

    // The toggle direction would stop, but repeat forces running
    timer.toggle_start_stop("", "");
    assert!(timer.running());
    assert_eq!(timer.phase(), Phase::Break);
    assert_eq!(timer.progress(), 0.0);
    assert_eq!(timer.laps(), 1);
}

#[test]
fn invalid_study_text_keeps_prior_duration() {
    let mut timer = TimerState::new(1500, 300, false);
    timer.toggle_start_stop("abc", "");
    assert!(timer.running());
    assert_eq!(timer.study_secs(), 1500);
    assert_eq!(timer.break_secs(), 300);
}

#[test]
fn sixty_second_phases_flip_after_1500_ticks() {
    let mut timer = started(60, 60, true);
    for _ in 0..1500 {
        timer.advance();
    }
    assert_eq!(timer.phase(), Phase::Break);
    assert_eq!(timer.laps(), 1);
    assert_eq!(timer.progress(), 0.0);
}

#[test]
fn pause_and_resume_preserves_progress() {
    let mut timer = started(60, 60, false);
    for _ in 0..750 {
        timer.advance();
    }
    assert_eq!(timer.progress(), 0.5);

    timer.toggle_start_stop("", "");
    assert!(!timer.running());
    assert!(!timer.advance());
    assert_eq!(timer.progress(), 0.5);

    timer.toggle_start_stop("", "");
    assert!(timer.running());
    timer.advance();
    assert_eq!(timer.progress(), 751.0 / 1500.0);
}
