use crate::transcript::{TranscriptChange, TranscriptReceiver};

/// Where the view should scroll to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollTarget {
    /// Sentinel positioned after the last message
    EndOfTranscript,
}

/// How the view should move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollBehavior {
    #[default]
    Smooth,
    Instant,
}

/// A "scroll into view" request for the transcript view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollRequest {
    pub target: ScrollTarget,
    pub behavior: ScrollBehavior,
}

impl ScrollRequest {
    pub fn to_latest() -> Self {
        Self { target: ScrollTarget::EndOfTranscript, behavior: ScrollBehavior::Smooth }
    }
}

/// Observes transcript appends and asks the view to reveal the newest message
///
/// Fed by a `MessageStore` subscription. The synchronizer remembers the last
/// transcript length it scrolled for, so a repeated notification for the same
/// state produces nothing.
#[derive(Debug)]
pub struct ScrollSynchronizer {
    changes: TranscriptReceiver,
    synced_len: usize,
    fired: u64,
}

impl ScrollSynchronizer {
    pub fn new(changes: TranscriptReceiver) -> Self {
        Self { changes, synced_len: 0, fired: 0 }
    }

    /// Handle one append notification
    pub fn on_transcript_changed(&mut self, change: TranscriptChange) -> Option<ScrollRequest> {
        if change.len <= self.synced_len {
            tracing::trace!(len = change.len, synced = self.synced_len, "scroll already in sync");
            return None;
        }

        self.synced_len = change.len;
        self.fired += 1;
        tracing::trace!(index = change.index, len = change.len, "scroll to latest");
        Some(ScrollRequest::to_latest())
    }

    /// Drain pending notifications without blocking
    ///
    /// Each notification is handled once; the requests they produce collapse
    /// into a single request for the view.
    pub fn poll(&mut self) -> Option<ScrollRequest> {
        let mut request = None;
        while let Ok(change) = self.changes.try_recv() {
            if let Some(next) = self.on_transcript_changed(change) {
                request = Some(next);
            }
        }
        request
    }

    /// Transcript length the view was last asked to reveal
    pub fn synced_len(&self) -> usize {
        self.synced_len
    }

    /// Number of scroll requests issued so far
    pub fn requests_issued(&self) -> u64 {
        self.fired
    }
}
