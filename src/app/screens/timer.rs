//! Timer screen implementation
//!
//! Renders the timer snapshot (draining progress bar, MM:SS clock, lap
//! count, auto-run marker, duration fields, help line) and owns the
//! pending text buffers for the editable study/break minute fields.

use crate::timer::{Phase, Snapshot, TimerState};
use crate::util::units::format_clock;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Bar colors matching the original palette: red study, blue break
const STUDY_COLOR: Color = Color::Rgb(181, 63, 77);
const BREAK_COLOR: Color = Color::Rgb(100, 149, 237);

/// Longest accepted duration field input, in digits
const MAX_FIELD_DIGITS: usize = 4;

/// Which duration field currently receives typed digits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldFocus {
    #[default]
    None,
    Study,
    Break,
}

/// Timer screen component
///
/// Pure presentation plus ownership of the pending duration-field text;
/// it never mutates the timer itself.
#[derive(Debug, Default)]
pub struct TimerScreen {
    focus: FieldFocus,
    study_input: String,
    break_input: String,
}

impl TimerScreen {
    /// Create a new timer screen with empty duration fields
    pub fn new() -> Self {
        Self::default()
    }

    /// Pending study-minutes text, committed on the next start
    pub fn study_text(&self) -> &str {
        &self.study_input
    }

    /// Pending break-minutes text, committed on the next start
    pub fn break_text(&self) -> &str {
        &self.break_input
    }

    /// Whether a duration field currently has focus
    pub fn is_editing(&self) -> bool {
        self.focus != FieldFocus::None
    }

    /// Move focus to a duration field (or away from both)
    pub fn focus(&mut self, focus: FieldFocus) {
        self.focus = focus;
    }

    /// Handle a key while a duration field is focused.
    ///
    /// Digits append to the buffer, Backspace deletes, Enter and Esc
    /// leave edit mode. Returns whether the key was consumed.
    pub fn handle_edit_key(&mut self, key: KeyEvent) -> bool {
        let buffer = match self.focus {
            FieldFocus::Study => &mut self.study_input,
            FieldFocus::Break => &mut self.break_input,
            FieldFocus::None => return false,
        };

        match key.code {
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if buffer.len() < MAX_FIELD_DIGITS {
                    buffer.push(c);
                }
                true
            }
            KeyCode::Backspace => {
                buffer.pop();
                true
            }
            KeyCode::Enter | KeyCode::Esc => {
                self.focus = FieldFocus::None;
                true
            }
            _ => false,
        }
    }

    /// Label of the main action for the current state
    pub fn action_label(snapshot: &Snapshot) -> &'static str {
        if snapshot.running && snapshot.progress >= 1.0 {
            "Repeat"
        } else if snapshot.running {
            "Stop!"
        } else {
            "Go!"
        }
    }

    /// Render the whole screen
    pub fn render(&self, f: &mut Frame, timer: &TimerState) {
        let snapshot = timer.snapshot();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // progress bar
                Constraint::Length(3), // laps + auto-run
                Constraint::Min(5),    // clock
                Constraint::Length(3), // main action
                Constraint::Length(3), // duration fields
                Constraint::Length(3), // help
            ])
            .split(f.size());

        self.render_gauge(f, chunks[0], &snapshot);
        self.render_status(f, chunks[1], &snapshot);
        self.render_clock(f, chunks[2], &snapshot);
        self.render_action(f, chunks[3], &snapshot);
        self.render_fields(f, chunks[4], timer);
        self.render_help(f, chunks[5]);
    }

    /// Render the progress bar; it drains as the interval elapses
    fn render_gauge(&self, f: &mut Frame, area: Rect, snapshot: &Snapshot) {
        let color = match snapshot.phase {
            Phase::Study => STUDY_COLOR,
            Phase::Break => BREAK_COLOR,
        };

        let gauge = Gauge::default()
            .block(Block::default().borders(Borders::ALL).title(snapshot.phase.label()))
            .gauge_style(Style::default().fg(color))
            .ratio((1.0 - snapshot.progress).clamp(0.0, 1.0))
            .label("");

        f.render_widget(gauge, area);
    }

    /// Render the lap counter and auto-run marker
    fn render_status(&self, f: &mut Frame, area: Rect, snapshot: &Snapshot) {
        let auto_marker = Span::styled(
            format!(
                "[a] AutoRun: {}",
                if snapshot.auto_run { "on" } else { "off" }
            ),
            if snapshot.auto_run {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default().add_modifier(Modifier::DIM)
            },
        );

        let line = Line::from(vec![
            auto_marker,
            Span::raw("    "),
            Span::styled(
                format!("Laps: {}", snapshot.laps),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]);

        let status = Paragraph::new(line)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));

        f.render_widget(status, area);
    }

    /// Render the remaining-time clock
    fn render_clock(&self, f: &mut Frame, area: Rect, snapshot: &Snapshot) {
        let clock = Paragraph::new(format_clock(snapshot.remaining_secs))
            .style(
                Style::default()
                    .add_modifier(Modifier::BOLD)
                    .fg(match snapshot.phase {
                        Phase::Study => STUDY_COLOR,
                        Phase::Break => BREAK_COLOR,
                    }),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Remaining"));

        f.render_widget(clock, area);
    }

    /// Render the main-action hint (Go!/Stop!/Repeat)
    fn render_action(&self, f: &mut Frame, area: Rect, snapshot: &Snapshot) {
        let label = Line::from(vec![
            Span::raw("[space] "),
            Span::styled(
                Self::action_label(snapshot),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("    [r] Reset"),
        ]);

        let action = Paragraph::new(label)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));

        f.render_widget(action, area);
    }

    /// Render the two editable duration fields side by side
    fn render_fields(&self, f: &mut Frame, area: Rect, timer: &TimerState) {
        let halves = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        self.render_field(
            f,
            halves[0],
            "[s] Study time",
            &self.study_input,
            timer.study_secs(),
            self.focus == FieldFocus::Study,
        );
        self.render_field(
            f,
            halves[1],
            "[b] Break time",
            &self.break_input,
            timer.break_secs(),
            self.focus == FieldFocus::Break,
        );
    }

    fn render_field(
        &self,
        f: &mut Frame,
        area: Rect,
        title: &str,
        pending: &str,
        configured_secs: u64,
        focused: bool,
    ) {
        // Pending text takes over the display; otherwise show the
        // committed value, as the original shows it in its editors.
        let content = if pending.is_empty() {
            format_clock(configured_secs)
        } else {
            format!("{} min", pending)
        };

        let border_style = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };

        let field = Paragraph::new(content)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style)
                    .title(title),
            );

        f.render_widget(field, area);
    }

    /// Render the key help line
    fn render_help(&self, f: &mut Frame, area: Rect) {
        let text = if self.is_editing() {
            "type minutes | Backspace delete | Enter/Esc done"
        } else {
            "space start/stop | r reset | a auto-run | s/b edit minutes | q quit"
        };

        let help = Paragraph::new(text)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));

        f.render_widget(help, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_edit_keys_ignored_without_focus() {
        let mut screen = TimerScreen::new();
        assert!(!screen.is_editing());
        assert!(!screen.handle_edit_key(key(KeyCode::Char('5'))));
        assert_eq!(screen.study_text(), "");
    }

    #[test]
    fn test_digit_editing() {
        let mut screen = TimerScreen::new();
        screen.focus(FieldFocus::Study);
        assert!(screen.is_editing());

        assert!(screen.handle_edit_key(key(KeyCode::Char('3'))));
        assert!(screen.handle_edit_key(key(KeyCode::Char('0'))));
        assert_eq!(screen.study_text(), "30");

        assert!(screen.handle_edit_key(key(KeyCode::Backspace)));
        assert_eq!(screen.study_text(), "3");

        // Non-digits never reach the buffer
        assert!(!screen.handle_edit_key(key(KeyCode::Char('x'))));
        assert_eq!(screen.study_text(), "3");

        assert!(screen.handle_edit_key(key(KeyCode::Enter)));
        assert!(!screen.is_editing());
    }

    #[test]
    fn test_buffer_length_cap() {
        let mut screen = TimerScreen::new();
        screen.focus(FieldFocus::Break);
        for _ in 0..10 {
            screen.handle_edit_key(key(KeyCode::Char('9')));
        }
        assert_eq!(screen.break_text(), "9999");
    }

    #[test]
    fn test_action_label() {
        let mut snapshot = Snapshot {
            phase: Phase::Study,
            progress: 0.0,
            remaining_secs: 1500,
            laps: 0,
            running: false,
            auto_run: false,
        };
        assert_eq!(TimerScreen::action_label(&snapshot), "Go!");

        snapshot.running = true;
        assert_eq!(TimerScreen::action_label(&snapshot), "Stop!");

        snapshot.progress = 1.0;
        assert_eq!(TimerScreen::action_label(&snapshot), "Repeat");
    }

    #[test]
    fn test_auto_run_state_is_visible() {
        use ratatui::{backend::TestBackend, Terminal};

        let screen = TimerScreen::new();
        let render = |auto_run: bool| {
            let timer = TimerState::new(1500, 300, auto_run);
            let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
            terminal.draw(|f| screen.render(f, &timer)).unwrap();
            terminal.backend().buffer().clone()
        };

        let on = render(true);
        let off = render(false);
        assert_ne!(on, off);

        let on_text: String = on.content().iter().map(|cell| cell.symbol()).collect();
        let off_text: String = off.content().iter().map(|cell| cell.symbol()).collect();
        assert!(on_text.contains("AutoRun: on"));
        assert!(off_text.contains("AutoRun: off"));
    }
}
