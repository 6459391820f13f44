//! Application state for the TUI.
//!
//! Everything the screen needs besides the board itself: the interaction
//! mode (normal editing or the blocking alert), a status line and the quit
//! flag.

/// Current interaction mode.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum InteractionMode {
    /// Editing the form
    #[default]
    Normal,
    /// Blocking alert; only dismiss keys are handled
    Alert(String),
}

#[derive(Debug, Default)]
pub struct AppState {
    pub interaction_mode: InteractionMode,
    /// One-line message under the form
    pub status_message: Option<String>,
    pub should_quit: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alert(&mut self, message: impl Into<String>) {
        self.interaction_mode = InteractionMode::Alert(message.into());
    }

    pub fn dismiss_alert(&mut self) {
        self.interaction_mode = InteractionMode::Normal;
    }

    pub fn alert_message(&self) -> Option<&str> {
        match &self.interaction_mode {
            InteractionMode::Alert(message) => Some(message),
            InteractionMode::Normal => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_default() {
        let state = AppState::new();
        assert_eq!(state.interaction_mode, InteractionMode::Normal);
        assert!(state.status_message.is_none());
        assert!(!state.should_quit);
    }

    #[test]
    fn test_alert_roundtrip() {
        let mut state = AppState::new();
        state.alert("Invalid Input! Try Again!");
        assert_eq!(state.alert_message(), Some("Invalid Input! Try Again!"));

        state.dismiss_alert();
        assert!(state.alert_message().is_none());
    }
}
