use super::KeyAction;
use crate::state::{AppState, FocusPane, JoinField, Screen};

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

pub(super) fn handle_mouse_event(event: MouseEvent, state: &mut AppState) -> Option<KeyAction> {
    if state.quit_menu.is_open() {
        return None;
    }

    let position = Position::new(event.column, event.row);
    let hit = |area: Option<Rect>| area.is_some_and(|area| area.contains(position));
    let step = state.ui.scroll_step as usize;

    match (event.kind, state.screen) {
        (MouseEventKind::Down(MouseButton::Left), Screen::Chat) => {
            if hit(state.areas.send_button) {
                let outcome = state.session.send_button_clicked();
                state.after_submit(outcome);
                return KeyAction::from_outcome(outcome);
            }
            if hit(state.areas.composer) {
                state.focus = FocusPane::Composer;
            } else if hit(state.areas.transcript) {
                state.focus = FocusPane::Transcript;
            }
            None
        }
        (MouseEventKind::Down(MouseButton::Left), Screen::Join) => {
            if hit(state.areas.join_button) {
                state.join.focus = JoinField::Join;
                return state.join.join().then_some(KeyAction::JoinRequested);
            }
            if hit(state.areas.create_button) {
                state.join.focus = JoinField::Create;
                return state.join.create().then_some(KeyAction::CreateRequested);
            }
            None
        }
        (MouseEventKind::ScrollUp, Screen::Chat) => {
            state.viewport.scroll_up(step);
            None
        }
        (MouseEventKind::ScrollDown, Screen::Chat) => {
            state.viewport.scroll_down(step);
            None
        }
        _ => None,
    }
}
