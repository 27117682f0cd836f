use crate::message::{Author, Message};

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Notification published after every append
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranscriptChange {
    /// Index of the appended message
    pub index: usize,
    /// Transcript length after the append
    pub len: usize,
}

/// Receiving end of a transcript subscription
pub type TranscriptReceiver = UnboundedReceiver<TranscriptChange>;

/// MessageStore holds the ordered, append-only transcript of a session
///
/// Supports:
/// - Appending messages (the only mutation)
/// - Read-only, restartable views of the transcript
/// - Change notifications for observers such as the scroll synchronizer
#[derive(Debug, Default)]
pub struct MessageStore {
    messages: Vec<Message>,
    observers: Vec<UnboundedSender<TranscriptChange>>,
}

impl MessageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message to the end of the transcript
    ///
    /// Never fails; callers validate the text. Observers whose receiver has been
    /// dropped are pruned here.
    pub fn append(&mut self, text: impl Into<String>, author: Author) -> usize {
        let index = self.messages.len();
        self.messages.push(Message::new(text, author));

        let change = TranscriptChange { index, len: self.messages.len() };
        self.observers.retain(|tx| tx.send(change).is_ok());

        tracing::debug!(index, %author, observers = self.observers.len(), "message appended");
        index
    }

    /// Register an observer for append notifications
    pub fn subscribe(&mut self) -> TranscriptReceiver {
        let (tx, rx) = mpsc::unbounded_channel();
        self.observers.push(tx);
        rx
    }

    /// All messages in commit order
    pub fn all(&self) -> &[Message] {
        &self.messages
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Message> {
        self.messages.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Message> {
        self.messages.get(index)
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Number of live observers
    pub fn observer_count(&self) -> usize {
        self.observers.iter().filter(|tx| !tx.is_closed()).count()
    }
}

impl<'a> IntoIterator for &'a MessageStore {
    type Item = &'a Message;
    type IntoIter = std::slice::Iter<'a, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}
