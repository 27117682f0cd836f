/// Composition flow state derived from the draft
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComposeState {
    /// Draft is the empty string
    #[default]
    Empty,
    /// Draft holds any text, whitespace included
    Composing,
}

/// Buffer for the in-progress message
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompositionBuffer {
    draft: String,
}

impl CompositionBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the draft verbatim, embedded newlines included
    pub fn set_text(&mut self, value: impl Into<String>) {
        self.draft = value.into();
    }

    /// True iff the trimmed draft is non-empty
    pub fn is_submittable(&self) -> bool {
        !self.draft.trim().is_empty()
    }

    /// The draft with leading and trailing whitespace removed
    pub fn trimmed(&self) -> &str {
        self.draft.trim()
    }

    pub fn text(&self) -> &str {
        &self.draft
    }

    pub fn state(&self) -> ComposeState {
        if self.draft.is_empty() { ComposeState::Empty } else { ComposeState::Composing }
    }

    /// Only the submission controller clears the draft, after a commit.
    pub(crate) fn clear(&mut self) {
        self.draft.clear();
    }
}
