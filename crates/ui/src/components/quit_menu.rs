use crate::{
    layout::centered_rect,
    state::{QuitChoice, QuitMenu},
    theme::Theme,
};

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

/// Quit confirmation popup
pub struct QuitMenuPopup<'a> {
    menu: &'a QuitMenu,
}

impl<'a> QuitMenuPopup<'a> {
    pub fn new(menu: &'a QuitMenu) -> Self {
        Self { menu }
    }

    fn option(&self, choice: QuitChoice) -> Span<'static> {
        let label = format!(" {} ", choice.as_str());
        if self.menu.selected == choice {
            Span::styled(label, Style::default().fg(Theme::BG).bg(Theme::BLUE).add_modifier(Modifier::BOLD))
        } else {
            Span::styled(label, Style::default().fg(Theme::FG).bg(Theme::PANEL_BG))
        }
    }

    /// Render the popup centered in `area`
    pub fn render(&self, frame: &mut Frame<'_>, area: Rect) {
        let popup = centered_rect(area, 30, 5);
        frame.render_widget(Clear, popup);

        let block = Block::default()
            .title(" Quit? ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Theme::YELLOW))
            .style(Theme::panel());

        let options = Line::from(vec![self.option(QuitChoice::Yes), Span::raw("   "), self.option(QuitChoice::Cancel)]);
        let body = Paragraph::new(vec![Line::default(), options]).alignment(Alignment::Center).block(block);
        frame.render_widget(body, popup);
    }
}
