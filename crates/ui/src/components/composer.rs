use crate::{
    state::{AppState, FocusPane},
    theme::Theme,
};

use ratatui::{
    Frame,
    layout::{Alignment, Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub const PLACEHOLDER: &str = "Type your message";

/// Composer card and send button
pub struct Composer<'a> {
    state: &'a AppState,
}

impl<'a> Composer<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn focused(&self) -> bool {
        self.state.focus == FocusPane::Composer && !self.state.quit_menu.is_open()
    }

    /// Render the input card into `input_area` and the button into `button_area`
    pub fn render(&self, frame: &mut Frame<'_>, input_area: Rect, button_area: Rect) {
        self.render_input(frame, input_area);
        self.render_send_button(frame, button_area);
    }

    fn render_input(&self, frame: &mut Frame<'_>, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Theme::border(self.focused()))
            .style(Theme::panel());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let input = &self.state.input;
        if input.is_empty() {
            frame.render_widget(
                Paragraph::new(Span::styled(PLACEHOLDER, Style::default().fg(Theme::MUTED).bg(Theme::PANEL_BG))),
                inner,
            );
            if self.focused() {
                frame.set_cursor_position(Position::new(inner.x, inner.y));
            }
            return;
        }

        let (cursor_line, cursor_col) = input.cursor_line_col();
        let (first, left) = scroll_offsets(cursor_line, cursor_col, inner);

        let lines: Vec<Line> = input.buffer.split('\n').map(|line| Line::from(line.to_string())).collect();
        frame.render_widget(
            Paragraph::new(lines).style(Theme::panel()).scroll((first as u16, left as u16)),
            inner,
        );

        if self.focused() && inner.width > 0 && inner.height > 0 {
            let x = inner.x + (cursor_col - left) as u16;
            let y = inner.y + (cursor_line - first) as u16;
            frame.set_cursor_position(Position::new(x, y));
        }
    }

    fn render_send_button(&self, frame: &mut Frame<'_>, area: Rect) {
        let enabled = self.state.send_enabled();
        let block = Block::default().borders(Borders::ALL).border_style(Theme::border(enabled));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let middle = Rect { y: inner.y + inner.height / 2, height: inner.height.min(1), ..inner };
        let label = Paragraph::new(Line::from("Send")).alignment(Alignment::Center).style(Theme::send_button(enabled));
        frame.render_widget(label, middle);
    }
}

/// First visible line and column so the cursor stays inside `inner`
///
/// Lines are not wrapped; a line wider than the field scrolls sideways
/// with the cursor.
fn scroll_offsets(cursor_line: usize, cursor_col: usize, inner: Rect) -> (usize, usize) {
    let height = inner.height.max(1) as usize;
    let width = inner.width.max(1) as usize;
    let first = (cursor_line + 1).saturating_sub(height);
    let left = (cursor_col + 1).saturating_sub(width);
    (first, left)
}
