mod chat;
mod join;
mod key_action;
mod menu;
mod mouse;

pub use key_action::KeyAction;

use crate::state::{AppState, Screen};

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use self::{chat::handle_chat_key, join::handle_join_key, menu::handle_quit_menu_key, mouse::handle_mouse_event};

/// Event handler for the TUI application
pub struct EventHandler;

impl EventHandler {
    /// Handle a keyboard event
    pub fn handle_key_event(event: KeyEvent, state: &mut AppState) -> Option<KeyAction> {
        if event.kind != KeyEventKind::Press {
            return None;
        }

        if event.code == KeyCode::Char('c') && event.modifiers.contains(KeyModifiers::CONTROL) {
            state.request_exit();
            return Some(KeyAction::Exit);
        }

        if state.quit_menu.is_open() {
            return handle_quit_menu_key(event, state);
        }

        match state.screen {
            Screen::Chat => handle_chat_key(event, state),
            Screen::Join => handle_join_key(event, state),
        }
    }

    /// Handle pasted text as a single edit
    pub fn handle_paste(text: &str, state: &mut AppState) {
        if state.quit_menu.is_open() {
            return;
        }

        match state.screen {
            Screen::Chat => state.edit_input(|input| input.insert_str(text)),
            Screen::Join => {
                if !state.join.is_loading()
                    && let Some(input) = state.join.focused_input_mut()
                {
                    input.insert_str(text);
                }
            }
        }
    }

    /// Handle any terminal event
    pub fn handle_event(event: &Event, state: &mut AppState) -> Option<KeyAction> {
        match event {
            Event::Key(key_event) => Self::handle_key_event(*key_event, state),
            Event::Mouse(mouse_event) => handle_mouse_event(*mouse_event, state),
            Event::Paste(text) => {
                Self::handle_paste(text, state);
                None
            }
            _ => None,
        }
    }
}
