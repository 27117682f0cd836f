use crate::{state::TranscriptViewport, theme::Theme};

use parley_core::{Author, ChatSession, Message};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

/// Share of the transcript width a bubble may take, in percent
const MAX_BUBBLE_PERCENT: usize = 70;

const MIN_BUBBLE_WIDTH: usize = 8;

/// Build the display lines for every message, in transcript order
///
/// Each message is a header line (label and optional time) followed by a
/// padded bubble. Local messages are right-aligned.
pub fn build_lines(session: &ChatSession, width: u16, show_timestamps: bool) -> Vec<Line<'static>> {
    let width = width as usize;
    let mut lines = Vec::new();

    for (i, message) in session.transcript().iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        let label = session.label(message.author());
        lines.push(header_line(message, label, show_timestamps));
        lines.extend(bubble_lines(message, width));
    }

    lines
}

fn alignment(author: Author) -> Alignment {
    match author {
        Author::Local => Alignment::Right,
        Author::Remote => Alignment::Left,
    }
}

fn header_line(message: &Message, label: &str, show_timestamps: bool) -> Line<'static> {
    let author = message.author();
    let mut spans = vec![Span::styled(label.to_string(), Theme::author_label(author))];
    if show_timestamps {
        spans.push(Span::styled(format!(" · {}", message.time_label()), Style::default().fg(Theme::MUTED)));
    }
    Line::from(spans).alignment(alignment(author))
}

fn bubble_lines(message: &Message, width: usize) -> Vec<Line<'static>> {
    let author = message.author();
    let max_bubble = (width * MAX_BUBBLE_PERCENT / 100).max(MIN_BUBBLE_WIDTH).min(width);
    let text_width = max_bubble.saturating_sub(2).max(1);

    let wrapped: Vec<String> =
        textwrap::wrap(message.text(), text_width).into_iter().map(|line| line.into_owned()).collect();
    let inner = wrapped.iter().map(|line| line.width()).max().unwrap_or(0);

    wrapped
        .into_iter()
        .map(|line| {
            let padding = inner.saturating_sub(line.width());
            let body = format!(" {}{} ", line, " ".repeat(padding));
            Line::from(Span::styled(body, Theme::bubble(author))).alignment(alignment(author))
        })
        .collect()
}

/// Transcript pane: a bordered window onto the pre-built message lines
pub struct Transcript<'a> {
    lines: &'a [Line<'static>],
    viewport: &'a TranscriptViewport,
    focused: bool,
}

impl<'a> Transcript<'a> {
    pub fn new(lines: &'a [Line<'static>], viewport: &'a TranscriptViewport, focused: bool) -> Self {
        Self { lines, viewport, focused }
    }

    /// Area available to message lines inside the pane border
    pub fn inner_area(area: Rect) -> Rect {
        Block::default().borders(Borders::ALL).inner(area)
    }

    /// Render transcript to the given frame
    pub fn render(&self, frame: &mut Frame<'_>, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Theme::border(self.focused))
            .title(Span::styled(" Transcript ", Style::default().fg(Theme::MUTED)))
            .style(Theme::base());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if self.lines.is_empty() {
            let placeholder = Paragraph::new(Line::from(Span::styled("No messages yet. Say hello!", Theme::muted())))
                .alignment(Alignment::Center);
            let middle = Rect { y: inner.y + inner.height / 2, height: inner.height.min(1), ..inner };
            frame.render_widget(placeholder, middle);
            return;
        }

        let start = self.viewport.offset().min(self.lines.len());
        let end = (start + inner.height as usize).min(self.lines.len());
        let visible = self.lines[start..end].to_vec();
        frame.render_widget(Paragraph::new(visible).style(Theme::base()), inner);

        // Drawn on the bottom border so no message line is covered
        let below = self.viewport.lines_below();
        if below > 0 && inner.height > 0 {
            let indicator = Paragraph::new(Line::from(Span::styled(
                format!(" ↓ {} more ", below),
                Style::default().fg(Theme::BG).bg(Theme::YELLOW),
            )))
            .alignment(Alignment::Right);
            let border = Rect { y: area.bottom() - 1, height: 1, ..inner };
            frame.render_widget(indicator, border);
        }
    }
}
