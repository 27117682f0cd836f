use super::KeyAction;
use crate::state::{AppState, FocusPane, InputState};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use parley_core::{Key, SubmitOutcome};

pub(super) fn handle_chat_key(event: KeyEvent, state: &mut AppState) -> Option<KeyAction> {
    let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
    let transcript_focused = state.focus == FocusPane::Transcript;
    let step = state.ui.scroll_step as usize;

    match event.code {
        KeyCode::Esc => {
            state.quit_menu.toggle();
            Some(KeyAction::ToggleQuitMenu)
        }
        KeyCode::Char('s') if ctrl => {
            let outcome = state.session.send_button_clicked();
            state.after_submit(outcome);
            KeyAction::from_outcome(outcome)
        }
        KeyCode::BackTab => {
            state.focus = state.focus.toggled();
            None
        }
        KeyCode::PageUp => {
            state.viewport.page_up();
            None
        }
        KeyCode::PageDown => {
            state.viewport.page_down();
            None
        }
        KeyCode::Up if ctrl || transcript_focused => {
            state.viewport.scroll_up(step);
            None
        }
        KeyCode::Down if ctrl || transcript_focused => {
            state.viewport.scroll_down(step);
            None
        }
        KeyCode::Home if transcript_focused => {
            state.viewport.scroll_up(usize::MAX);
            None
        }
        KeyCode::End if transcript_focused => {
            state.viewport.scroll_down(usize::MAX);
            None
        }
        _ => handle_composer_key(event, state),
    }
}

/// Keys that reach the composer go through the session first; only a plain
/// Enter can submit, everything else falls through to text editing.
fn handle_composer_key(event: KeyEvent, state: &mut AppState) -> Option<KeyAction> {
    // Alt+Enter stands in for Shift+Enter on terminals that do not report it
    let newline_held = event.modifiers.intersects(KeyModifiers::SHIFT | KeyModifiers::ALT);

    let outcome = state.session.key_pressed(session_key(event.code), newline_held);
    if !matches!(outcome, SubmitOutcome::Ignored) {
        state.after_submit(outcome);
        return KeyAction::from_outcome(outcome);
    }

    if event.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    match event.code {
        KeyCode::Enter | KeyCode::Tab => state.edit_input(|input| input.insert_newline()),
        KeyCode::Char(c) => state.edit_input(|input| input.insert_char(c)),
        KeyCode::Backspace => state.edit_input(|input| input.backspace()),
        KeyCode::Delete => state.edit_input(|input| input.delete()),
        KeyCode::Left => state.move_cursor(InputState::move_left),
        KeyCode::Right => state.move_cursor(InputState::move_right),
        KeyCode::Home => state.move_cursor(InputState::move_home),
        KeyCode::End => state.move_cursor(InputState::move_end),
        _ => {}
    }
    None
}

fn session_key(code: KeyCode) -> Key {
    match code {
        KeyCode::Enter => Key::Enter,
        KeyCode::Char(c) => Key::Char(c),
        _ => Key::Other,
    }
}
