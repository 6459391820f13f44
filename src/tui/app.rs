//! TUI Application
//!
//! Owns the board and the screen state and turns key presses into form
//! edits and submissions.

use log::{debug, info};

use super::input::{KeyEvent, edit};
use super::state::AppState;
use crate::board::Board;

pub struct App {
    board: Board,
    state: AppState,
}

impl App {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            state: AppState::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    /// Handle one key press. Returns true when the app should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.is_quit() {
            self.state.should_quit = true;
            return true;
        }

        if self.state.alert_message().is_some() {
            if key.is_dismiss() {
                self.state.dismiss_alert();
            }
            return false;
        }

        if key.is_escape() {
            self.state.should_quit = true;
        } else if key.is_submit() {
            self.submit();
        } else if key.is_next_field() {
            self.board.form_mut().focus_next();
        } else if key.is_prev_field() {
            self.board.form_mut().focus_prev();
        } else if !edit(self.board.form_mut().focused_mut(), &key) {
            debug!("Unhandled key: {:?}", key.code);
        }

        self.state.should_quit
    }

    /// Insert pasted text into the focused field. Ignored while the alert is up.
    pub fn handle_paste(&mut self, text: &str) {
        if self.state.alert_message().is_some() {
            return;
        }
        debug!("Pasted {} char(s) into {}", text.chars().count(), self.board.form().focus());
        self.board.form_mut().focused_mut().insert_str(text);
    }

    fn submit(&mut self) {
        match self.board.submit() {
            Ok(entry) => {
                self.state.status_message = Some(format!("Added '{}'", entry.title()));
            }
            Err(e) => {
                info!("Showing alert: {}", e);
                self.state.status_message = None;
                self.state.alert(e.to_string());
            }
        }
    }
}
