use parley_core::{ChatSession, SubmitOutcome, UiConfig, ViewEffect};
use ratatui::layout::Rect;

mod input;
mod join;
mod menu;
mod viewport;

pub use input::InputState;
pub use join::{JoinField, JoinForm};
pub use menu::{QuitChoice, QuitMenu};
pub use viewport::TranscriptViewport;

/// Top-level screen being shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Chat,
    Join,
}

/// Pane receiving keyboard input on the chat screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPane {
    #[default]
    Composer,
    Transcript,
}

impl FocusPane {
    pub fn toggled(self) -> Self {
        match self {
            FocusPane::Composer => FocusPane::Transcript,
            FocusPane::Transcript => FocusPane::Composer,
        }
    }
}

/// Screen regions from the last render, used for mouse hit-testing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HitAreas {
    pub transcript: Option<Rect>,
    pub composer: Option<Rect>,
    pub send_button: Option<Rect>,
    pub join_button: Option<Rect>,
    pub create_button: Option<Rect>,
}

/// Application state for the terminal front-end
///
/// Wraps the chat session with everything that is purely presentational:
/// the text input, the transcript viewport and the popups.
#[derive(Debug)]
pub struct AppState {
    pub screen: Screen,
    pub session: ChatSession,
    pub input: InputState,
    pub viewport: TranscriptViewport,
    pub focus: FocusPane,
    pub quit_menu: QuitMenu,
    pub join: JoinForm,
    pub ui: UiConfig,
    pub areas: HitAreas,
    should_exit: bool,
}

impl AppState {
    pub fn new(session: ChatSession, ui: UiConfig) -> Self {
        Self {
            screen: Screen::Chat,
            session,
            input: InputState::new(),
            viewport: TranscriptViewport::new(),
            focus: FocusPane::Composer,
            quit_menu: QuitMenu::default(),
            join: JoinForm::new(),
            ui,
            areas: HitAreas::default(),
            should_exit: false,
        }
    }

    pub fn with_screen(mut self, screen: Screen) -> Self {
        self.screen = screen;
        self
    }

    pub fn should_exit(&self) -> bool {
        self.should_exit
    }

    pub fn request_exit(&mut self) {
        self.should_exit = true;
    }

    /// Apply an edit to the composer input and forward the new text
    pub fn edit_input(&mut self, edit: impl FnOnce(&mut InputState)) {
        edit(&mut self.input);
        self.focus = FocusPane::Composer;
        self.session.text_changed(self.input.buffer.clone());
    }

    /// Move the composer cursor; the draft text is unchanged
    pub fn move_cursor(&mut self, movement: impl FnOnce(&mut InputState)) {
        movement(&mut self.input);
        self.focus = FocusPane::Composer;
    }

    /// Bring the input and focus in line with the session after a submit attempt
    pub fn after_submit(&mut self, outcome: SubmitOutcome) {
        if outcome.is_committed() {
            self.input.set(self.session.draft());
        }
        self.apply_effects();
    }

    /// Drain and apply view effects queued by the session
    pub fn apply_effects(&mut self) {
        for effect in self.session.take_effects() {
            tracing::debug!(?effect, "applying view effect");
            match effect {
                ViewEffect::FocusComposer => self.focus = FocusPane::Composer,
            }
        }
    }

    /// Whether the send button accepts clicks
    pub fn send_enabled(&self) -> bool {
        self.session.is_submittable()
    }

    /// Advance animations; returns whether a redraw is needed
    pub fn tick(&mut self) -> bool {
        self.viewport.tick(self.ui.scroll_step as usize)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ChatSession::default(), UiConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parley_core::{Author, Key};

    #[test]
    fn test_edit_forwards_full_text() {
        let mut state = AppState::default();
        state.edit_input(|input| input.insert_str("hi"));
        assert_eq!(state.session.draft(), "hi");
        assert!(state.send_enabled());

        state.edit_input(|input| input.clear());
        assert_eq!(state.session.draft(), "");
        assert!(!state.send_enabled());
    }

    #[test]
    fn test_commit_clears_input_and_focuses_composer() {
        let mut state = AppState::default();
        state.edit_input(|input| input.insert_str("  hello  "));
        state.focus = FocusPane::Transcript;

        let outcome = state.session.key_pressed(Key::Enter, false);
        state.after_submit(outcome);

        assert!(state.input.is_empty());
        assert_eq!(state.input.cursor, 0);
        assert_eq!(state.focus, FocusPane::Composer);
        assert_eq!(state.session.transcript()[0].text(), "hello");
        assert_eq!(state.session.pending_author(), Author::Remote);
    }

    #[test]
    fn test_rejected_submit_keeps_input() {
        let mut state = AppState::default();
        state.edit_input(|input| input.insert_str("   "));

        let outcome = state.session.send_button_clicked();
        state.after_submit(outcome);

        assert_eq!(state.input.buffer, "   ");
        assert!(state.session.transcript().is_empty());
    }

    #[test]
    fn test_focus_toggle() {
        assert_eq!(FocusPane::Composer.toggled(), FocusPane::Transcript);
        assert_eq!(FocusPane::Transcript.toggled(), FocusPane::Composer);
    }
}
