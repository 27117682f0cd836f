use unicode_width::UnicodeWidthStr;

/// Text input state: a UTF-8 buffer with a cursor
///
/// This is the text-input side of the composer. It owns editing (newlines
/// included); the chat session only ever sees the full buffer via
/// `text_changed`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputState {
    /// Current input buffer
    pub buffer: String,
    /// Cursor position as a byte offset, always on a char boundary
    pub cursor: usize,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_char(&mut self, c: char) {
        self.buffer.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn insert_newline(&mut self) {
        self.insert_char('\n');
    }

    /// Insert pasted text, normalizing CRLF and lone CR to LF
    pub fn insert_str(&mut self, text: &str) {
        let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
        self.buffer.insert_str(self.cursor, &normalized);
        self.cursor += normalized.len();
    }

    pub fn backspace(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.buffer.replace_range(prev..self.cursor, "");
            self.cursor = prev;
        }
    }

    pub fn delete(&mut self) {
        if let Some(next) = self.next_boundary() {
            self.buffer.replace_range(self.cursor..next, "");
        }
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.cursor = prev;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(next) = self.next_boundary() {
            self.cursor = next;
        }
    }

    /// Start of the current line
    pub fn move_home(&mut self) {
        self.cursor = self.buffer[..self.cursor].rfind('\n').map(|i| i + 1).unwrap_or(0);
    }

    /// End of the current line
    pub fn move_end(&mut self) {
        self.cursor = self.buffer[self.cursor..].find('\n').map(|i| self.cursor + i).unwrap_or(self.buffer.len());
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    /// Replace the buffer and put the cursor at the end
    pub fn set(&mut self, value: &str) {
        self.buffer = value.to_string();
        self.cursor = self.buffer.len();
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Number of lines, at least one
    pub fn line_count(&self) -> usize {
        self.buffer.split('\n').count()
    }

    /// Cursor as (line, display column)
    pub fn cursor_line_col(&self) -> (usize, usize) {
        let before = &self.buffer[..self.cursor];
        let line = before.matches('\n').count();
        let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
        (line, before[line_start..].width())
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.buffer[..self.cursor].char_indices().next_back().map(|(i, _)| i)
    }

    fn next_boundary(&self) -> Option<usize> {
        self.buffer[self.cursor..].chars().next().map(|c| self.cursor + c.len_utf8())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(text: &str) -> InputState {
        let mut state = InputState::new();
        state.set(text);
        state
    }

    #[test]
    fn test_insert_and_backspace() {
        let mut state = InputState::new();
        state.insert_char('h');
        state.insert_char('i');
        assert_eq!(state.buffer, "hi");
        assert_eq!(state.cursor, 2);

        state.backspace();
        assert_eq!(state.buffer, "h");
        assert_eq!(state.cursor, 1);
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut state = InputState::new();
        state.backspace();
        assert!(state.is_empty());
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn test_multibyte_editing() {
        let mut state = InputState::new();
        for c in "héllo 👋".chars() {
            state.insert_char(c);
        }
        state.backspace();
        assert_eq!(state.buffer, "héllo ");

        state.move_home();
        state.move_right();
        state.delete();
        assert_eq!(state.buffer, "hllo ");
        assert_eq!(state.cursor, 1);
    }

    #[test]
    fn test_cursor_movement_bounds() {
        let mut state = input("ab");
        state.move_right();
        assert_eq!(state.cursor, 2);

        state.move_left();
        state.move_left();
        state.move_left();
        assert_eq!(state.cursor, 0);

        state.delete();
        assert_eq!(state.buffer, "b");
    }

    #[test]
    fn test_insert_in_middle() {
        let mut state = input("ac");
        state.move_left();
        state.insert_char('b');
        assert_eq!(state.buffer, "abc");
        assert_eq!(state.cursor, 2);
    }

    #[test]
    fn test_newlines_and_line_navigation() {
        let mut state = input("line1");
        state.insert_newline();
        state.insert_str("line2");
        assert_eq!(state.buffer, "line1\nline2");
        assert_eq!(state.line_count(), 2);
        assert_eq!(state.cursor_line_col(), (1, 5));

        state.move_home();
        assert_eq!(state.cursor_line_col(), (1, 0));
        state.move_left();
        assert_eq!(state.cursor_line_col(), (0, 5));
        state.move_home();
        state.move_end();
        assert_eq!(state.cursor, 5);
    }

    #[test]
    fn test_paste_normalizes_line_endings() {
        let mut state = InputState::new();
        state.insert_str("a\r\nb\rc");
        assert_eq!(state.buffer, "a\nb\nc");
        assert_eq!(state.cursor, state.buffer.len());
    }

    #[test]
    fn test_clear() {
        let mut state = input("text");
        state.clear();
        assert!(state.is_empty());
        assert_eq!(state.cursor, 0);
        assert_eq!(state.line_count(), 1);
    }

    #[test]
    fn test_cursor_column_uses_display_width() {
        let state = input("日本");
        assert_eq!(state.cursor_line_col(), (0, 4));
    }
}
