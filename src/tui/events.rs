//! Event handling for the TUI.
//!
//! - `Event`: key presses, bracketed pastes, ticks and resizes
//! - `EventHandler`: polls crossterm with a tick timeout

use crossterm::event::{self, Event as CrosstermEvent, KeyEventKind};
use eyre::Result;
use std::time::Duration;

use super::input::KeyEvent;

/// Unified event type for the TUI.
#[derive(Debug, Clone)]
pub enum Event {
    /// Keyboard input event
    Key(KeyEvent),
    /// Text pasted while bracketed paste is enabled
    Paste(String),
    /// Poll timeout with no input
    Tick,
    /// Terminal resize
    Resize(u16, u16),
}

/// Polls for crossterm events with a tick interval.
pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    pub fn new(tick_rate_ms: u64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
        }
    }

    /// Get the next event.
    ///
    /// Returns `Event::Tick` when the poll timeout expires without input.
    pub async fn next(&self) -> Result<Event> {
        let tick_rate = self.tick_rate;

        let event = tokio::task::spawn_blocking(move || -> Result<Event> {
            if event::poll(tick_rate)? {
                Ok(translate(event::read()?))
            } else {
                Ok(Event::Tick)
            }
        })
        .await??;

        Ok(event)
    }
}

/// Map a crossterm event onto the board's events; anything unused is a tick.
fn translate(event: CrosstermEvent) -> Event {
    match event {
        // Only handle key press events, not release
        CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Event::Key(key.into()),
        CrosstermEvent::Paste(text) => Event::Paste(text),
        CrosstermEvent::Resize(w, h) => Event::Resize(w, h),
        _ => Event::Tick,
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(250)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent as CrosstermKeyEvent, KeyModifiers};

    #[test]
    fn test_event_handler_creation() {
        let handler = EventHandler::new(100);
        assert_eq!(handler.tick_rate, Duration::from_millis(100));
    }

    #[test]
    fn test_event_handler_default() {
        let handler = EventHandler::default();
        assert_eq!(handler.tick_rate, Duration::from_millis(250));
    }

    #[test]
    fn test_translate_key_press_only() {
        let press = CrosstermKeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        assert!(matches!(translate(CrosstermEvent::Key(press)), Event::Key(k) if k.code == KeyCode::Char('a')));

        let release = CrosstermKeyEvent::new_with_kind(KeyCode::Char('a'), KeyModifiers::NONE, KeyEventKind::Release);
        assert!(matches!(translate(CrosstermEvent::Key(release)), Event::Tick));
    }

    #[test]
    fn test_translate_paste_and_resize() {
        assert!(matches!(translate(CrosstermEvent::Paste("Build App".to_string())), Event::Paste(t) if t == "Build App"));
        assert!(matches!(translate(CrosstermEvent::Resize(80, 24)), Event::Resize(80, 24)));
        assert!(matches!(translate(CrosstermEvent::FocusGained), Event::Tick));
    }
}
