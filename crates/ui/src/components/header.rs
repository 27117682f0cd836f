use crate::{state::AppState, theme::Theme};

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Header bar for the chat screen
///
/// Left: app name and message count. Right: who the next message is from.
pub struct Header<'a> {
    state: &'a AppState,
}

impl<'a> Header<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn count_label(&self) -> String {
        match self.state.session.transcript().len() {
            1 => "1 message".to_string(),
            n => format!("{} messages", n),
        }
    }

    /// Render the header to the given frame
    pub fn render(&self, frame: &mut Frame<'_>, area: Rect) {
        let title = Line::from(vec![
            Span::styled(" Parley ", Style::default().fg(Theme::BG).bg(Theme::BLUE).add_modifier(Modifier::BOLD)),
            Span::styled(format!("  {}", self.count_label()), Theme::muted()),
        ]);
        frame.render_widget(Paragraph::new(title).style(Theme::base()), area);

        let author = self.state.session.pending_author();
        let next = Line::from(vec![
            Span::styled("next: ", Theme::muted()),
            Span::styled(self.state.session.label(author).to_string(), Theme::author_label(author)),
            Span::raw(" "),
        ]);
        frame.render_widget(Paragraph::new(next).alignment(Alignment::Right), area);
    }
}
