use crate::composer::{ComposeState, CompositionBuffer};
use crate::config::SessionConfig;
use crate::controller::{Key, SubmissionController, SubmitOutcome, ViewEffect};
use crate::message::{Author, Message};
use crate::scroll::{ScrollRequest, ScrollSynchronizer};
use crate::transcript::MessageStore;

/// One chat session: transcript, draft and the rules that connect them
///
/// This is the boundary a front-end talks to. It forwards text edits, key
/// presses and send clicks in, and reads back the transcript, the draft and
/// the submit flag on every redraw. View effects are pulled, never pushed:
/// - `take_effects` after handling an event
/// - `sync_scroll` after laying out the transcript
#[derive(Debug)]
pub struct ChatSession {
    store: MessageStore,
    buffer: CompositionBuffer,
    controller: SubmissionController,
    scroll: ScrollSynchronizer,
    config: SessionConfig,
}

impl ChatSession {
    pub fn new(config: SessionConfig) -> Self {
        let mut store = MessageStore::new();
        let scroll = ScrollSynchronizer::new(store.subscribe());
        let controller = SubmissionController::new(config.initial_author);

        tracing::info!(initial_author = %config.initial_author, "chat session started");
        Self { store, buffer: CompositionBuffer::new(), controller, scroll, config }
    }

    /// The text input changed; `value` is its full content
    pub fn text_changed(&mut self, value: impl Into<String>) {
        self.buffer.set_text(value);
    }

    pub fn key_pressed(&mut self, key: Key, shift_held: bool) -> SubmitOutcome {
        self.controller.on_key_event(key, shift_held, &mut self.buffer, &mut self.store)
    }

    pub fn send_button_clicked(&mut self) -> SubmitOutcome {
        self.controller.on_submit_requested(&mut self.buffer, &mut self.store)
    }

    pub fn try_submit(&mut self) -> SubmitOutcome {
        self.controller.try_submit(&mut self.buffer, &mut self.store)
    }

    pub fn transcript(&self) -> &[Message] {
        self.store.all()
    }

    pub fn store(&self) -> &MessageStore {
        &self.store
    }

    pub fn draft(&self) -> &str {
        self.buffer.text()
    }

    pub fn is_submittable(&self) -> bool {
        self.buffer.is_submittable()
    }

    pub fn compose_state(&self) -> ComposeState {
        self.buffer.state()
    }

    pub fn pending_author(&self) -> Author {
        self.controller.pending_author()
    }

    /// Display label for an author tag
    pub fn label(&self, author: Author) -> &str {
        self.config.label(author)
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Effects requested since the last call
    pub fn take_effects(&mut self) -> Vec<ViewEffect> {
        self.controller.take_effects()
    }

    /// Scroll request for appends the view has not revealed yet
    ///
    /// Call after the view has laid out the current transcript.
    pub fn sync_scroll(&mut self) -> Option<ScrollRequest> {
        self.scroll.poll()
    }

    pub fn scroll_requests_issued(&self) -> u64 {
        self.scroll.requests_issued()
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
