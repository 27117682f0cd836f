use parley_core::{ScrollBehavior, ScrollRequest, ScrollTarget};

/// Vertical scroll state of the transcript pane
///
/// Offsets count rendered lines from the top. Heights come from the last
/// layout, so a scroll request applied right after rendering targets the
/// freshly laid-out content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TranscriptViewport {
    offset: usize,
    content_height: usize,
    viewport_height: usize,
    /// Offset a smooth scroll is moving toward
    target: Option<usize>,
}

impl TranscriptViewport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the heights from the latest layout and clamp the offset
    ///
    /// A viewport resting at the bottom stays there when the pane is resized
    /// over the same content. Growth in content is left to scroll requests.
    pub fn set_layout(&mut self, content_height: usize, viewport_height: usize) {
        let pinned = self.target.is_none() && self.is_at_bottom() && content_height <= self.content_height;
        self.content_height = content_height;
        self.viewport_height = viewport_height;
        self.offset = if pinned { self.max_offset() } else { self.offset.min(self.max_offset()) };
        if let Some(target) = self.target {
            self.target = Some(target.min(self.max_offset()));
        }
    }

    pub fn max_offset(&self) -> usize {
        self.content_height.saturating_sub(self.viewport_height)
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn content_height(&self) -> usize {
        self.content_height
    }

    pub fn viewport_height(&self) -> usize {
        self.viewport_height
    }

    pub fn is_at_bottom(&self) -> bool {
        self.offset >= self.max_offset()
    }

    pub fn is_animating(&self) -> bool {
        self.target.is_some()
    }

    /// Lines below the visible window
    pub fn lines_below(&self) -> usize {
        self.max_offset().saturating_sub(self.offset)
    }

    /// Apply a scroll request from the session
    ///
    /// Returns whether anything will move. A request while already at the
    /// bottom is a no-op, so repeating one never scrolls further.
    pub fn apply(&mut self, request: ScrollRequest) -> bool {
        let destination = match request.target {
            ScrollTarget::EndOfTranscript => self.max_offset(),
        };

        if self.offset == destination {
            self.target = None;
            return false;
        }

        match request.behavior {
            ScrollBehavior::Smooth => self.target = Some(destination),
            ScrollBehavior::Instant => {
                self.offset = destination;
                self.target = None;
            }
        }
        true
    }

    /// Advance a smooth scroll by up to `step` lines; returns whether it moved
    pub fn tick(&mut self, step: usize) -> bool {
        let Some(target) = self.target else {
            return false;
        };

        let step = step.max(1);
        self.offset = if self.offset < target {
            self.offset.saturating_add(step).min(target)
        } else {
            self.offset.saturating_sub(step).max(target)
        };

        if self.offset == target {
            self.target = None;
        }
        true
    }

    /// Manual scroll toward older messages; cancels any animation
    pub fn scroll_up(&mut self, lines: usize) {
        self.target = None;
        self.offset = self.offset.saturating_sub(lines);
    }

    /// Manual scroll toward newer messages; cancels any animation
    pub fn scroll_down(&mut self, lines: usize) {
        self.target = None;
        self.offset = self.offset.saturating_add(lines).min(self.max_offset());
    }

    pub fn page_up(&mut self) {
        self.scroll_up(self.viewport_height.saturating_sub(1).max(1));
    }

    pub fn page_down(&mut self) {
        self.scroll_down(self.viewport_height.saturating_sub(1).max(1));
    }
}
