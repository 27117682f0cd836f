use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Most composer lines shown before the composer stops growing
pub const MAX_COMPOSER_LINES: u16 = 4;

/// Width of the send button, borders included
pub const SEND_BUTTON_WIDTH: u16 = 10;

/// Calculated layout for the chat screen
///
/// ```text
/// header      (1 line)
/// transcript  (rest)
/// composer    (draft lines + 2 border lines) | [ Send ]
/// hints       (1 line)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChatLayout {
    pub header: Rect,
    pub transcript: Rect,
    pub composer: Rect,
    pub send_button: Rect,
    pub hints: Rect,
}

impl ChatLayout {
    /// Calculate layout for a draft spanning `draft_lines` lines
    pub fn calculate(area: Rect, draft_lines: usize) -> Self {
        let composer_height = (draft_lines.max(1) as u16).min(MAX_COMPOSER_LINES) + 2;

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(composer_height),
                Constraint::Length(1),
            ])
            .split(area);

        let footer = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(SEND_BUTTON_WIDTH)])
            .split(chunks[2]);

        Self { header: chunks[0], transcript: chunks[1], composer: footer[0], send_button: footer[1], hints: chunks[3] }
    }
}

/// Calculated layout for the join screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JoinLayout {
    pub auth_key: Rect,
    pub password: Rect,
    pub join_button: Rect,
    pub create_button: Rect,
    pub status: Rect,
}

impl JoinLayout {
    /// Centered form, at most 60 columns wide
    pub fn calculate(area: Rect) -> Self {
        let form = centered_rect(area, 60, 20);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(10),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(form);

        let create_width = rows[5].width.min(20);
        let create_button = Rect { width: create_width, ..rows[5] };

        Self {
            auth_key: rows[0],
            password: rows[1],
            join_button: rows[3],
            create_button,
            status: rows[6],
        }
    }
}

/// A rectangle of at most `width` x `height` centered in `area`
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_layout_heights() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = ChatLayout::calculate(area, 1);

        assert_eq!(layout.header.height, 1);
        assert_eq!(layout.composer.height, 3);
        assert_eq!(layout.hints.height, 1);
        assert_eq!(layout.transcript.height, 24 - 1 - 3 - 1);
        assert_eq!(layout.send_button.width, SEND_BUTTON_WIDTH);
        assert_eq!(layout.composer.width + layout.send_button.width, 80);
    }

    #[test]
    fn test_composer_grows_with_draft() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(ChatLayout::calculate(area, 3).composer.height, 5);
        assert_eq!(ChatLayout::calculate(area, 40).composer.height, MAX_COMPOSER_LINES + 2);
        assert_eq!(ChatLayout::calculate(area, 0).composer.height, 3);
    }

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 40);
        let rect = centered_rect(area, 60, 20);
        assert_eq!(rect, Rect::new(20, 10, 60, 20));

        let small = centered_rect(Rect::new(0, 0, 30, 10), 60, 20);
        assert_eq!(small, Rect::new(0, 0, 30, 10));
    }

    #[test]
    fn test_join_layout_fits() {
        let area = Rect::new(0, 0, 100, 40);
        let layout = JoinLayout::calculate(area);
        assert_eq!(layout.auth_key.height, 10);
        assert_eq!(layout.password.height, 3);
        assert!(layout.join_button.y > layout.password.y);
        assert!(layout.create_button.width <= 20);
    }
}
