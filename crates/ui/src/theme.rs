use parley_core::Author;
use ratatui::style::{Color, Modifier, Style};

/// Iceberg-based color theme for the Parley TUI
///
/// Local messages take the blue accent, remote messages a neutral gray panel,
/// mirroring a two-party chat where "you" stand out.
#[derive(Debug, Clone, Copy)]
pub struct Theme;

impl Theme {
    /// Primary background: deep blue-black (fills terminal)
    pub const BG: Color = Color::Rgb(22, 24, 33);

    /// Foreground: light blue-gray (primary text)
    pub const FG: Color = Color::Rgb(198, 200, 209);

    /// Secondary background: panels, composer, remote bubbles
    pub const PANEL_BG: Color = Color::Rgb(30, 33, 50);

    /// Background for local bubbles
    pub const LOCAL_BG: Color = Color::Rgb(45, 65, 100);

    /// Primary accent: blue
    pub const BLUE: Color = Color::Rgb(132, 160, 198);

    /// Secondary accent: cyan
    pub const CYAN: Color = Color::Rgb(137, 184, 194);

    /// Join action: purple
    pub const PURPLE: Color = Color::Rgb(160, 147, 199);

    /// Create action: green
    pub const GREEN: Color = Color::Rgb(180, 190, 130);

    /// Loading overlay: yellow
    pub const YELLOW: Color = Color::Rgb(226, 164, 120);

    /// Muted text: dimmed foreground
    pub const MUTED: Color = Color::Rgb(107, 112, 137);

    /// Border color
    pub const BORDER: Color = Color::Rgb(60, 65, 90);

    /// Base style for all text
    pub fn base() -> Style {
        Style::default().fg(Self::FG).bg(Self::BG)
    }

    /// Muted style (for secondary text)
    pub fn muted() -> Style {
        Style::default().fg(Self::MUTED).bg(Self::BG)
    }

    /// Panel style
    pub fn panel() -> Style {
        Style::default().fg(Self::FG).bg(Self::PANEL_BG)
    }

    /// Border style, highlighted when the pane has focus
    pub fn border(focused: bool) -> Style {
        if focused { Style::default().fg(Self::BLUE) } else { Style::default().fg(Self::BORDER) }
    }

    /// Accent color for an author
    pub fn author_color(author: Author) -> Color {
        match author {
            Author::Local => Self::BLUE,
            Author::Remote => Self::CYAN,
        }
    }

    /// Bubble body style for an author
    pub fn bubble(author: Author) -> Style {
        match author {
            Author::Local => Style::default().fg(Self::FG).bg(Self::LOCAL_BG),
            Author::Remote => Style::default().fg(Self::FG).bg(Self::PANEL_BG),
        }
    }

    /// Author label style
    pub fn author_label(author: Author) -> Style {
        Style::default().fg(Self::author_color(author)).add_modifier(Modifier::BOLD)
    }

    /// Send button style
    pub fn send_button(enabled: bool) -> Style {
        if enabled {
            Style::default().fg(Self::BG).bg(Self::BLUE).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Self::MUTED).bg(Self::PANEL_BG)
        }
    }

    /// Action button style on the join screen
    pub fn action_button(color: Color, focused: bool, disabled: bool) -> Style {
        if disabled {
            Style::default().fg(Self::MUTED).bg(Self::PANEL_BG)
        } else if focused {
            Style::default().fg(Self::BG).bg(color).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(color).bg(Self::PANEL_BG)
        }
    }
}
