use crate::event_handler::{EventHandler, KeyAction};
use crate::state::AppState;

use crossterm::event::Event;
use parley_core::logging::redact_message;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::Result;

mod event_loop;
mod rendering;

pub use rendering::render;

/// Main TUI application
///
/// Owns the state and ties terminal events, ticks and rendering together.
pub struct App {
    state: AppState,
}

impl App {
    /// Create a new application
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// Get a mutable reference to the application state
    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    /// Get a reference to the application state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn should_exit(&self) -> bool {
        self.state.should_exit()
    }

    /// Run the TUI until the user quits
    pub async fn run(&mut self) -> Result<()> {
        event_loop::run(self).await
    }

    /// Handle a terminal event
    pub fn handle_event(&mut self, event: &Event) -> Option<KeyAction> {
        let action = EventHandler::handle_event(event, &mut self.state);
        if let Some(ref action) = action {
            self.log_action(action);
        }
        action
    }

    /// Advance animations; returns whether a redraw is needed
    pub fn tick(&mut self) -> bool {
        self.state.tick()
    }

    fn log_action(&self, action: &KeyAction) {
        match action {
            KeyAction::Committed { index, author } => {
                let text = self.state.session.store().get(*index).map(|m| redact_message(m.text(), 40));
                tracing::debug!(index, %author, text = text.as_deref().unwrap_or_default(), "message committed");
            }
            KeyAction::Rejected => tracing::trace!("blank draft not submitted"),
            KeyAction::Exit => tracing::info!(messages = self.state.session.transcript().len(), "exit requested"),
            other => tracing::debug!(?other, "ui action"),
        }
    }

    /// Draw the UI
    pub fn draw(&mut self, terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> Result<()> {
        terminal.draw(|frame| render(frame, &mut self.state))?;
        Ok(())
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(AppState::default())
    }
}
