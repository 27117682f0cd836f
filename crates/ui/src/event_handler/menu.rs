use super::KeyAction;
use crate::state::{AppState, QuitChoice};

use crossterm::event::{KeyCode, KeyEvent};

pub(super) fn handle_quit_menu_key(event: KeyEvent, state: &mut AppState) -> Option<KeyAction> {
    match event.code {
        KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down | KeyCode::Tab | KeyCode::BackTab => {
            state.quit_menu.select_next();
            None
        }
        KeyCode::Enter => match state.quit_menu.selected {
            QuitChoice::Yes => exit(state),
            QuitChoice::Cancel => close(state),
        },
        KeyCode::Char('y') | KeyCode::Char('Y') => exit(state),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => close(state),
        _ => None,
    }
}

fn exit(state: &mut AppState) -> Option<KeyAction> {
    state.quit_menu.close();
    state.request_exit();
    Some(KeyAction::Exit)
}

fn close(state: &mut AppState) -> Option<KeyAction> {
    state.quit_menu.close();
    Some(KeyAction::ToggleQuitMenu)
}
