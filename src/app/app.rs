//! Main application controller
//!
//! Owns the timer state and serializes every access to it through one
//! loop: ticks drained from the ticker channel drive `advance()`, key
//! events drive the control operations, and a redraw happens whenever
//! either reports a visible change.

use crate::{
    app::{
        screens::{FieldFocus, TimerScreen},
        tui::Tui,
    },
    config::TimerConfig,
    timer::{Tick, Ticker, TimerState},
    Result,
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::io;
use tokio::sync::mpsc;

/// TUI application controller
pub struct App {
    /// Terminal UI handler
    tui: Tui,
    /// The timer state machine; only this loop touches it
    timer: TimerState,
    /// The single screen component
    screen: TimerScreen,
    /// Receiving end of the ticker channel
    tick_rx: mpsc::Receiver<Tick>,
    should_quit: bool,
    needs_redraw: bool,
}

impl App {
    /// Create a new application instance and spawn its tick source
    pub fn new(config: TimerConfig) -> Result<Self> {
        config.validate()?;

        let timer = TimerState::new(
            config.study_minutes * 60,
            config.break_minutes * 60,
            config.auto_run,
        );

        Ok(Self {
            tui: Tui::new()?,
            timer,
            screen: TimerScreen::new(),
            tick_rx: Ticker::start(config.ticks_per_second),
            should_quit: false,
            needs_redraw: true,
        })
    }

    /// Initialize the terminal
    pub fn init(&mut self) -> Result<()> {
        self.tui.init()?;
        Ok(())
    }

    /// Restore the terminal to its original state
    pub fn restore(&mut self) -> Result<()> {
        self.tui.restore()?;
        Ok(())
    }

    /// Run the main application loop
    pub async fn run(&mut self) -> Result<()> {
        while !self.should_quit {
            // Apply every queued tick before drawing; each one is a
            // fixed increment, so none may be skipped.
            while self.tick_rx.try_recv().is_ok() {
                if self.timer.advance() {
                    self.needs_redraw = true;
                }
            }

            if self.needs_redraw {
                self.draw()?;
                self.needs_redraw = false;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Draw the current screen
    fn draw(&mut self) -> io::Result<()> {
        let screen = &self.screen;
        let timer = &self.timer;
        self.tui.draw(|f| screen.render(f, timer))
    }

    /// Handle keyboard events and update state
    fn handle_events(&mut self) -> Result<()> {
        let Some(key) = self.tui.next_key()? else {
            return Ok(());
        };

        // Ctrl-C quits from anywhere, edit mode included
        if is_ctrl_c(key) {
            self.should_quit = true;
            return Ok(());
        }

        if self.screen.is_editing() {
            if self.screen.handle_edit_key(key) {
                self.needs_redraw = true;
            }
            return Ok(());
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Char(' ') | KeyCode::Enter => {
                self.timer
                    .toggle_start_stop(self.screen.study_text(), self.screen.break_text());
                self.needs_redraw = true;
            }
            KeyCode::Char('r') => {
                self.timer.reset();
                self.needs_redraw = true;
            }
            KeyCode::Char('a') => {
                let auto_run = !self.timer.auto_run();
                self.timer.set_auto_run(auto_run);
                self.needs_redraw = true;
            }
            KeyCode::Char('s') => {
                self.screen.focus(FieldFocus::Study);
                self.needs_redraw = true;
            }
            KeyCode::Char('b') => {
                self.screen.focus(FieldFocus::Break);
                self.needs_redraw = true;
            }
            _ => {}
        }

        Ok(())
    }
}

fn is_ctrl_c(key: KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_ctrl_c() {
        assert!(is_ctrl_c(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!is_ctrl_c(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::NONE
        )));
    }
}
