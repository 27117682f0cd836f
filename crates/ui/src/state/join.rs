use super::InputState;

/// Focusable elements of the join form, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JoinField {
    #[default]
    AuthKey,
    Password,
    Join,
    Create,
}

impl JoinField {
    pub const VALUES: &[JoinField] = &[JoinField::AuthKey, JoinField::Password, JoinField::Join, JoinField::Create];

    pub fn next(self) -> Self {
        match self {
            JoinField::AuthKey => JoinField::Password,
            JoinField::Password => JoinField::Join,
            JoinField::Join => JoinField::Create,
            JoinField::Create => JoinField::AuthKey,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            JoinField::AuthKey => JoinField::Create,
            JoinField::Password => JoinField::AuthKey,
            JoinField::Join => JoinField::Password,
            JoinField::Create => JoinField::Join,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, JoinField::AuthKey | JoinField::Password)
    }
}

/// Join screen placeholder
///
/// Holds an auth key and password and exposes two actions. Neither action
/// connects to anything: both only raise the loading flag.
#[derive(Debug, Clone, Default)]
pub struct JoinForm {
    pub auth_key: InputState,
    pub password: InputState,
    pub focus: JoinField,
    loading: bool,
}

impl JoinForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// "Join" action
    pub fn join(&mut self) -> bool {
        self.start_loading("join")
    }

    /// "Create new chat" action
    pub fn create(&mut self) -> bool {
        self.start_loading("create")
    }

    fn start_loading(&mut self, action: &str) -> bool {
        if self.loading {
            return false;
        }
        self.loading = true;
        tracing::info!(action, "join screen action triggered");
        true
    }

    /// The text field with focus, if any
    pub fn focused_input_mut(&mut self) -> Option<&mut InputState> {
        match self.focus {
            JoinField::AuthKey => Some(&mut self.auth_key),
            JoinField::Password => Some(&mut self.password),
            JoinField::Join | JoinField::Create => None,
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Password rendered as bullets
    pub fn masked_password(&self) -> String {
        "•".repeat(self.password.buffer.chars().count())
    }
}
