use crate::components::{Composer, Header, Hints, JoinView, QuitMenuPopup, Transcript, transcript};
use crate::layout::ChatLayout;
use crate::state::{AppState, FocusPane, HitAreas, Screen};
use crate::theme::Theme;

use ratatui::{Frame, layout::Rect, widgets::Block};

/// Render one frame of the application
///
/// Takes the state mutably: the transcript viewport is laid out here, and
/// pending scroll requests are applied only once the new lines are known.
pub fn render(frame: &mut Frame<'_>, state: &mut AppState) {
    let area = frame.area();
    frame.render_widget(Block::default().style(Theme::base()), area);

    match state.screen {
        Screen::Chat => render_chat(frame, state, area),
        Screen::Join => render_join(frame, state, area),
    }

    if state.quit_menu.is_open() {
        QuitMenuPopup::new(&state.quit_menu).render(frame, area);
    }
}

fn render_chat(frame: &mut Frame<'_>, state: &mut AppState, area: Rect) {
    let layout = ChatLayout::calculate(area, state.input.line_count());
    state.areas = HitAreas {
        transcript: Some(layout.transcript),
        composer: Some(layout.composer),
        send_button: Some(layout.send_button),
        ..HitAreas::default()
    };

    Header::new(state).render(frame, layout.header);

    let inner = Transcript::inner_area(layout.transcript);
    let lines = transcript::build_lines(&state.session, inner.width, state.ui.show_timestamps);
    state.viewport.set_layout(lines.len(), inner.height as usize);
    if let Some(request) = state.session.sync_scroll() {
        state.viewport.apply(request);
    }
    let focused = state.focus == FocusPane::Transcript && !state.quit_menu.is_open();
    Transcript::new(&lines, &state.viewport, focused).render(frame, layout.transcript);

    Composer::new(state).render(frame, layout.composer, layout.send_button);
    Hints::new(state).render(frame, layout.hints);
}

fn render_join(frame: &mut Frame<'_>, state: &mut AppState, area: Rect) {
    let hints = Rect { y: area.bottom().saturating_sub(1), height: area.height.min(1), ..area };
    let form_area = Rect { height: area.height.saturating_sub(1), ..area };

    let layout = JoinView::new(&state.join).render(frame, form_area);
    state.areas = HitAreas {
        join_button: Some(layout.join_button),
        create_button: Some(layout.create_button),
        ..HitAreas::default()
    };

    Hints::new(state).render(frame, hints);
}
