//! Input handling for TUI
//!
//! Classifies key presses and applies editing keys to form fields.

use crossterm::event::{KeyCode, KeyModifiers};

use crate::form::TextInput;

/// Key event representation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyEvent {
    /// The key code
    pub code: KeyCode,
    /// Modifier keys held
    pub modifiers: KeyModifiers,
}

impl From<crossterm::event::KeyEvent> for KeyEvent {
    fn from(key: crossterm::event::KeyEvent) -> Self {
        Self::new(key.code, key.modifiers)
    }
}

impl KeyEvent {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    /// Ctrl+C quits from anywhere
    pub fn is_quit(&self) -> bool {
        self.code == KeyCode::Char('c') && self.modifiers.contains(KeyModifiers::CONTROL)
    }

    pub fn is_escape(&self) -> bool {
        self.code == KeyCode::Esc
    }

    /// Enter submits the form
    pub fn is_submit(&self) -> bool {
        self.code == KeyCode::Enter
    }

    /// Keys that close the alert
    pub fn is_dismiss(&self) -> bool {
        matches!(self.code, KeyCode::Enter | KeyCode::Esc)
    }

    pub fn is_next_field(&self) -> bool {
        matches!(self.code, KeyCode::Tab | KeyCode::Down)
    }

    pub fn is_prev_field(&self) -> bool {
        matches!(self.code, KeyCode::BackTab | KeyCode::Up)
    }
}

/// Apply an editing key to `input`. Returns false if the key is not an
/// editing key.
pub fn edit(input: &mut TextInput, key: &KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return false;
    }
    match key.code {
        KeyCode::Char(c) => input.insert(c),
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_home(),
        KeyCode::End => input.move_end(),
        _ => return false,
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_event_is_quit() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(ctrl_c.is_quit());

        // plain 'q' is text input, not quit
        assert!(!KeyEvent::plain(KeyCode::Char('q')).is_quit());
        assert!(!KeyEvent::plain(KeyCode::Char('c')).is_quit());
    }

    #[test]
    fn test_key_event_navigation() {
        assert!(KeyEvent::plain(KeyCode::Tab).is_next_field());
        assert!(KeyEvent::plain(KeyCode::Down).is_next_field());
        assert!(KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT).is_prev_field());
        assert!(KeyEvent::plain(KeyCode::Up).is_prev_field());
        assert!(!KeyEvent::plain(KeyCode::Left).is_next_field());
    }

    #[test]
    fn test_key_event_submit_and_dismiss() {
        assert!(KeyEvent::plain(KeyCode::Enter).is_submit());
        assert!(KeyEvent::plain(KeyCode::Enter).is_dismiss());
        assert!(KeyEvent::plain(KeyCode::Esc).is_dismiss());
        assert!(KeyEvent::plain(KeyCode::Esc).is_escape());
        assert!(!KeyEvent::plain(KeyCode::Char('x')).is_dismiss());
    }

    #[test]
    fn test_edit_keys() {
        let mut input = TextInput::new();
        assert!(edit(&mut input, &KeyEvent::plain(KeyCode::Char('h'))));
        assert!(edit(&mut input, &KeyEvent::new(KeyCode::Char('I'), KeyModifiers::SHIFT)));
        assert_eq!(input.content(), "hI");

        assert!(edit(&mut input, &KeyEvent::plain(KeyCode::Home)));
        assert!(edit(&mut input, &KeyEvent::plain(KeyCode::Delete)));
        assert_eq!(input.content(), "I");

        assert!(edit(&mut input, &KeyEvent::plain(KeyCode::End)));
        assert!(edit(&mut input, &KeyEvent::plain(KeyCode::Backspace)));
        assert_eq!(input.content(), "");
    }

    #[test]
    fn test_edit_ignores_other_keys() {
        let mut input = TextInput::with_content("abc");
        assert!(!edit(&mut input, &KeyEvent::plain(KeyCode::F(1))));
        assert!(!edit(&mut input, &KeyEvent::plain(KeyCode::Enter)));
        assert!(!edit(&mut input, &KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert_eq!(input.content(), "abc");
    }
}
