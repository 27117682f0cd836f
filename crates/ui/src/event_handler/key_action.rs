use parley_core::{Author, SubmitOutcome};

/// Actions that can be triggered by terminal events
#[derive(Debug, Clone, PartialEq)]
pub enum KeyAction {
    /// A message was committed to the transcript
    Committed { index: usize, author: Author },
    /// A submit was attempted with a blank draft
    Rejected,
    /// The quit popup was opened or closed
    ToggleQuitMenu,
    /// Join screen "Join" action
    JoinRequested,
    /// Join screen "Create new chat" action
    CreateRequested,
    /// Leave the application
    Exit,
}

impl KeyAction {
    /// Action reported for a submit attempt, if any
    pub fn from_outcome(outcome: SubmitOutcome) -> Option<Self> {
        match outcome {
            SubmitOutcome::Committed { index, author } => Some(KeyAction::Committed { index, author }),
            SubmitOutcome::Rejected => Some(KeyAction::Rejected),
            SubmitOutcome::Ignored => None,
        }
    }
}
