//! Terminal User Interface for projboard.
//!
//! One screen: the new-project form on top, the active and finished
//! project lists below it. Validation failures open a blocking alert.

mod app;
mod events;
mod input;
mod runner;
mod state;
mod views;

pub use app::App;
pub use events::{Event, EventHandler};
pub use input::KeyEvent;
pub use runner::TuiRunner;
pub use state::{AppState, InteractionMode};

use crossterm::{
    ExecutableCommand,
    event::{DisableBracketedPaste, EnableBracketedPaste},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use eyre::Result;
use log::{error, info};
use ratatui::prelude::*;
use std::io::{Stdout, stdout};

use crate::board::Board;
use crate::config::Config;

/// Type alias for our terminal backend.
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode.
///
/// Enables raw mode, switches to the alternate screen and turns on bracketed
/// paste so a paste arrives as one event.
pub fn init_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?.execute(EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to its original state.
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    stdout().execute(DisableBracketedPaste)?.execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Run the TUI on a fresh board until the user quits.
///
/// The terminal is restored even when the loop fails.
pub async fn run(config: &Config) -> Result<()> {
    let board = Board::new(config.form.clone());
    let terminal = init_terminal()?;
    info!("Terminal initialized");

    let mut runner = TuiRunner::new(terminal, App::new(board), config.tui.tick_rate_ms);
    let result = runner.run().await;

    if let Err(e) = restore_terminal() {
        error!("Failed to restore terminal: {}", e);
    }
    result
}

/// Colors used across the screen.
pub mod colors {
    use ratatui::style::Color;

    pub const ACTIVE: Color = Color::Rgb(0, 255, 127); // Spring green
    pub const FINISHED: Color = Color::Rgb(50, 205, 50); // Lime green
    pub const ALERT: Color = Color::Rgb(220, 20, 60); // Crimson
    pub const HEADER: Color = Color::Rgb(0, 255, 255); // Cyan
    pub const KEYBIND: Color = Color::Rgb(0, 255, 255); // Cyan
    pub const DIM: Color = Color::DarkGray;
}
