//! TUI Runner - main event loop.
//!
//! The `TuiRunner` owns the terminal, app, and event handler. It runs the
//! main loop: render → handle event → repeat.

use eyre::Result;
use log::{debug, info};

use super::Tui;
use super::app::App;
use super::events::{Event, EventHandler};
use super::views::render;

/// Main TUI runner that owns the event loop.
pub struct TuiRunner {
    terminal: Tui,
    app: App,
    event_handler: EventHandler,
}

impl TuiRunner {
    pub fn new(terminal: Tui, app: App, tick_rate_ms: u64) -> Self {
        Self {
            terminal,
            app,
            event_handler: EventHandler::new(tick_rate_ms),
        }
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    /// Run until the user quits.
    pub async fn run(&mut self) -> Result<()> {
        info!("Starting TUI main loop");

        loop {
            self.terminal.draw(|f| render(&self.app, f))?;

            match self.event_handler.next().await? {
                Event::Key(key) => {
                    if self.app.handle_key(key) {
                        break;
                    }
                }
                Event::Paste(text) => self.app.handle_paste(&text),
                Event::Tick => {}
                Event::Resize(w, h) => {
                    // Next draw picks up the new size
                    debug!("Terminal resized to {}x{}", w, h);
                }
            }
        }

        info!(
            "TUI main loop ended with {} project(s)",
            self.app.board().store().len()
        );
        Ok(())
    }
}
