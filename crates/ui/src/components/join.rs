use crate::{
    layout::{JoinLayout, centered_rect},
    state::{InputState, JoinField, JoinForm},
    theme::Theme,
};

use ratatui::{
    Frame,
    layout::{Alignment, Position, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

/// Join screen: auth key, password and the two actions
pub struct JoinView<'a> {
    form: &'a JoinForm,
}

impl<'a> JoinView<'a> {
    pub fn new(form: &'a JoinForm) -> Self {
        Self { form }
    }

    /// Render the form centered in `area` and return where it was placed
    pub fn render(&self, frame: &mut Frame<'_>, area: Rect) -> JoinLayout {
        let layout = JoinLayout::calculate(area);

        self.render_auth_key(frame, layout.auth_key);
        self.render_password(frame, layout.password);
        self.render_button(frame, layout.join_button, "Join", Theme::PURPLE, JoinField::Join, Borders::ALL);
        self.render_button(frame, layout.create_button, "Create new chat", Theme::GREEN, JoinField::Create, Borders::NONE);

        if self.form.is_loading() {
            self.render_loading(frame, area);
        }

        layout
    }

    fn field_block(&self, title: &'static str, field: JoinField) -> Block<'static> {
        Block::default()
            .title(Span::styled(title, Style::default().fg(Theme::MUTED)))
            .borders(Borders::ALL)
            .border_style(Theme::border(self.form.focus == field))
            .style(Theme::panel())
    }

    fn render_auth_key(&self, frame: &mut Frame<'_>, area: Rect) {
        let block = self.field_block(" Auth key ", JoinField::AuthKey);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let input = &self.form.auth_key;
        let body = if input.is_empty() {
            Paragraph::new(Span::styled("Paste the auth key you were given", Theme::muted()))
        } else {
            Paragraph::new(input.buffer.clone()).style(Theme::panel()).wrap(Wrap { trim: false })
        };
        frame.render_widget(body, inner);

        if self.form.focus == JoinField::AuthKey {
            place_cursor(frame, inner, input, input.cursor_line_col().1);
        }
    }

    fn render_password(&self, frame: &mut Frame<'_>, area: Rect) {
        let block = self.field_block(" Password ", JoinField::Password);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let masked = self.form.masked_password();
        frame.render_widget(Paragraph::new(masked).style(Theme::panel()), inner);

        if self.form.focus == JoinField::Password {
            let column = self.form.password.buffer[..self.form.password.cursor].chars().count();
            place_cursor(frame, inner, &self.form.password, column);
        }
    }

    fn render_button(
        &self, frame: &mut Frame<'_>, area: Rect, label: &'static str, color: Color, field: JoinField, borders: Borders,
    ) {
        let style = Theme::action_button(color, self.form.focus == field, self.form.is_loading());
        let block = Block::default().borders(borders).border_style(Style::default().fg(color));
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(Paragraph::new(Line::from(label)).alignment(Alignment::Center).style(style), inner);
    }

    fn render_loading(&self, frame: &mut Frame<'_>, area: Rect) {
        let popup = centered_rect(area, 24, 3);
        frame.render_widget(Clear, popup);
        let overlay = Paragraph::new(Line::from(Span::styled("connecting…", Style::default().fg(Theme::YELLOW))))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Theme::YELLOW)))
            .style(Theme::panel());
        frame.render_widget(overlay, popup);
    }
}

fn place_cursor(frame: &mut Frame<'_>, inner: Rect, input: &InputState, column: usize) {
    if inner.width == 0 || inner.height == 0 {
        return;
    }
    let line = input.cursor_line_col().0.min(inner.height as usize - 1) as u16;
    let column = (column as u16).min(inner.width - 1);
    frame.set_cursor_position(Position::new(inner.x + column, inner.y + line));
}
