use crate::composer::CompositionBuffer;
use crate::message::Author;
use crate::transcript::MessageStore;

/// Keys the controller distinguishes
///
/// Front-ends map their native key events onto this; only `Enter` matters to
/// the submission rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Char(char),
    Other,
}

/// Presentation side effects requested of the view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewEffect {
    /// Place input focus on the composition field
    FocusComposer,
}

/// Result of a key or click event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The event is not a submission trigger
    Ignored,
    /// Draft was empty or whitespace-only; nothing changed
    Rejected,
    /// Draft became a message
    Committed { index: usize, author: Author },
}

impl SubmitOutcome {
    pub fn is_committed(&self) -> bool {
        matches!(self, SubmitOutcome::Committed { .. })
    }
}

/// Decides when a draft becomes a message and who sent it
#[derive(Debug, Clone)]
pub struct SubmissionController {
    pending_author: Author,
    effects: Vec<ViewEffect>,
}

impl SubmissionController {
    pub fn new(initial_author: Author) -> Self {
        Self { pending_author: initial_author, effects: Vec::new() }
    }

    /// Author the next committed message will carry
    pub fn pending_author(&self) -> Author {
        self.pending_author
    }

    /// Keyboard path
    ///
    /// Shift+Enter never submits: the text input inserts the newline itself and
    /// reports it through `set_text`.
    pub fn on_key_event(
        &mut self, key: Key, shift_held: bool, buffer: &mut CompositionBuffer, store: &mut MessageStore,
    ) -> SubmitOutcome {
        match key {
            Key::Enter if !shift_held => self.try_submit(buffer, store),
            _ => SubmitOutcome::Ignored,
        }
    }

    /// Click/button path, same as Enter without shift
    pub fn on_submit_requested(&mut self, buffer: &mut CompositionBuffer, store: &mut MessageStore) -> SubmitOutcome {
        self.try_submit(buffer, store)
    }

    pub fn try_submit(&mut self, buffer: &mut CompositionBuffer, store: &mut MessageStore) -> SubmitOutcome {
        if !buffer.is_submittable() {
            tracing::debug!(draft_len = buffer.text().len(), "rejected empty draft");
            return SubmitOutcome::Rejected;
        }

        let author = self.pending_author;
        let index = store.append(buffer.trimmed(), author);
        self.pending_author = author.toggled();
        buffer.clear();
        self.effects.push(ViewEffect::FocusComposer);

        tracing::debug!(index, %author, next = %self.pending_author, "draft committed");
        SubmitOutcome::Committed { index, author }
    }

    /// Drain requested view effects in request order
    pub fn take_effects(&mut self) -> Vec<ViewEffect> {
        std::mem::take(&mut self.effects)
    }
}

impl Default for SubmissionController {
    fn default() -> Self {
        Self::new(Author::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composer::ComposeState;

    fn setup() -> (SubmissionController, CompositionBuffer, MessageStore) {
        (SubmissionController::default(), CompositionBuffer::new(), MessageStore::new())
    }

    #[test]
    fn test_enter_submits() {
        let (mut controller, mut buffer, mut store) = setup();
        buffer.set_text("Hello");

        let outcome = controller.on_key_event(Key::Enter, false, &mut buffer, &mut store);

        assert_eq!(outcome, SubmitOutcome::Committed { index: 0, author: Author::Local });
        assert_eq!(store.len(), 1);
        assert_eq!(store.all()[0].text(), "Hello");
        assert_eq!(buffer.state(), ComposeState::Empty);
        assert_eq!(controller.pending_author(), Author::Remote);
    }

    #[test]
    fn test_shift_enter_does_not_submit() {
        let (mut controller, mut buffer, mut store) = setup();
        buffer.set_text("line1");

        let outcome = controller.on_key_event(Key::Enter, true, &mut buffer, &mut store);

        assert_eq!(outcome, SubmitOutcome::Ignored);
        assert!(store.is_empty());
        assert_eq!(buffer.text(), "line1");
        assert_eq!(controller.pending_author(), Author::Local);
    }

    #[test]
    fn test_other_keys_ignored() {
        let (mut controller, mut buffer, mut store) = setup();
        buffer.set_text("text");

        assert_eq!(controller.on_key_event(Key::Char('a'), false, &mut buffer, &mut store), SubmitOutcome::Ignored);
        assert_eq!(controller.on_key_event(Key::Other, true, &mut buffer, &mut store), SubmitOutcome::Ignored);
        assert!(store.is_empty());
        assert_eq!(buffer.text(), "text");
    }

    #[test]
    fn test_submit_requested_matches_enter() {
        let (mut controller, mut buffer, mut store) = setup();
        buffer.set_text("clicked");

        assert!(controller.on_submit_requested(&mut buffer, &mut store).is_committed());
        assert_eq!(store.all()[0].text(), "clicked");
    }

    #[test]
    fn test_whitespace_draft_rejected_without_changes() {
        let (mut controller, mut buffer, mut store) = setup();
        buffer.set_text(" \n\t ");

        let outcome = controller.try_submit(&mut buffer, &mut store);

        assert_eq!(outcome, SubmitOutcome::Rejected);
        assert!(store.is_empty());
        assert_eq!(buffer.text(), " \n\t ");
        assert_eq!(controller.pending_author(), Author::Local);
        assert!(controller.take_effects().is_empty());
    }

    #[test]
    fn test_commit_trims_text() {
        let (mut controller, mut buffer, mut store) = setup();
        buffer.set_text("  padded  \n");

        controller.try_submit(&mut buffer, &mut store);
        assert_eq!(store.all()[0].text(), "padded");
    }

    #[test]
    fn test_authors_alternate() {
        let (mut controller, mut buffer, mut store) = setup();
        for text in ["one", "two", "three", "four"] {
            buffer.set_text(text);
            controller.try_submit(&mut buffer, &mut store);
        }

        let authors: Vec<Author> = store.iter().map(|m| m.author()).collect();
        assert_eq!(authors, vec![Author::Local, Author::Remote, Author::Local, Author::Remote]);
    }

    #[test]
    fn test_initial_author_is_configurable() {
        let mut controller = SubmissionController::new(Author::Remote);
        let mut buffer = CompositionBuffer::new();
        let mut store = MessageStore::new();
        buffer.set_text("first");

        controller.try_submit(&mut buffer, &mut store);
        assert_eq!(store.all()[0].author(), Author::Remote);
        assert_eq!(controller.pending_author(), Author::Local);
    }

    #[test]
    fn test_commit_requests_focus() {
        let (mut controller, mut buffer, mut store) = setup();
        buffer.set_text("a");
        controller.try_submit(&mut buffer, &mut store);

        assert_eq!(controller.take_effects(), vec![ViewEffect::FocusComposer]);
        assert!(controller.take_effects().is_empty());
    }
}
