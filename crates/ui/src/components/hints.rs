use crate::{
    state::{AppState, FocusPane, Screen},
    theme::Theme,
};

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

const COMPOSER_HINTS: &[(&str, &str)] = &[
    ("Enter", "send"),
    ("Shift+Enter", "newline"),
    ("PgUp/PgDn", "scroll"),
    ("Shift+Tab", "transcript"),
    ("Esc", "quit"),
];

const TRANSCRIPT_HINTS: &[(&str, &str)] =
    &[("↑/↓", "scroll"), ("Home/End", "top/bottom"), ("Shift+Tab", "composer"), ("Esc", "quit")];

const JOIN_HINTS: &[(&str, &str)] = &[("Tab", "next field"), ("Enter", "activate"), ("Esc", "quit")];

/// Key hints line at the bottom of the screen
pub struct Hints<'a> {
    state: &'a AppState,
}

impl<'a> Hints<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn entries(&self) -> &'static [(&'static str, &'static str)] {
        match (self.state.screen, self.state.focus) {
            (Screen::Join, _) => JOIN_HINTS,
            (Screen::Chat, FocusPane::Transcript) => TRANSCRIPT_HINTS,
            (Screen::Chat, FocusPane::Composer) => COMPOSER_HINTS,
        }
    }

    /// Render hints to the given frame
    pub fn render(&self, frame: &mut Frame<'_>, area: Rect) {
        let mut spans = vec![Span::raw(" ")];
        for (key, action) in self.entries() {
            spans.push(Span::styled(format!("[{}]", key), Style::default().fg(Theme::BLUE)));
            spans.push(Span::styled(format!(" {}  ", action), Theme::muted()));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)).style(Theme::base()), area);
    }
}
