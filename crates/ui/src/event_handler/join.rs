use super::KeyAction;
use crate::state::{AppState, JoinField};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub(super) fn handle_join_key(event: KeyEvent, state: &mut AppState) -> Option<KeyAction> {
    match event.code {
        KeyCode::Esc => {
            state.request_exit();
            return Some(KeyAction::Exit);
        }
        KeyCode::Tab => {
            state.join.focus_next();
            return None;
        }
        KeyCode::BackTab => {
            state.join.focus_prev();
            return None;
        }
        _ => {}
    }

    if state.join.is_loading() {
        return None;
    }

    let form = &mut state.join;
    match (form.focus, event.code) {
        (JoinField::Join, KeyCode::Enter) => form.join().then_some(KeyAction::JoinRequested),
        (JoinField::Create, KeyCode::Enter) => form.create().then_some(KeyAction::CreateRequested),
        (JoinField::Password, KeyCode::Enter) => {
            form.focus_next();
            None
        }
        (_, code) => {
            if event.modifiers.contains(KeyModifiers::CONTROL) {
                return None;
            }
            if let Some(input) = form.focused_input_mut() {
                match code {
                    KeyCode::Enter => input.insert_newline(),
                    KeyCode::Char(c) => input.insert_char(c),
                    KeyCode::Backspace => input.backspace(),
                    KeyCode::Delete => input.delete(),
                    KeyCode::Left => input.move_left(),
                    KeyCode::Right => input.move_right(),
                    KeyCode::Home => input.move_home(),
                    KeyCode::End => input.move_end(),
                    _ => {}
                }
            }
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Screen;

    fn join_state() -> AppState {
        AppState::default().with_screen(Screen::Join)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_auth_key_accepts_multiple_lines() {
        let mut state = join_state();
        handle_join_key(key(KeyCode::Char('a')), &mut state);
        handle_join_key(key(KeyCode::Enter), &mut state);
        handle_join_key(key(KeyCode::Char('b')), &mut state);

        assert_eq!(state.join.auth_key.buffer, "a\nb");
    }

    #[test]
    fn test_join_button_sets_loading() {
        let mut state = join_state();
        handle_join_key(key(KeyCode::Tab), &mut state);
        handle_join_key(key(KeyCode::Char('p')), &mut state);
        handle_join_key(key(KeyCode::Enter), &mut state);
        assert_eq!(state.join.focus, JoinField::Join);

        let action = handle_join_key(key(KeyCode::Enter), &mut state);

        assert_eq!(action, Some(KeyAction::JoinRequested));
        assert!(state.join.is_loading());
        assert_eq!(state.join.password.buffer, "p");
    }

    #[test]
    fn test_edits_ignored_while_loading() {
        let mut state = join_state();
        state.join.create();
        handle_join_key(key(KeyCode::Char('x')), &mut state);
        assert!(state.join.auth_key.is_empty());
    }

    #[test]
    fn test_esc_exits() {
        let mut state = join_state();
        assert_eq!(handle_join_key(key(KeyCode::Esc), &mut state), Some(KeyAction::Exit));
        assert!(state.should_exit());
    }
}
