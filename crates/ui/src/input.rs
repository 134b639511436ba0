//! Text input handler with cursor management.
//!
//! Handles character insertion, deletion, and cursor navigation for the
//! login form fields. Cursor position is tracked in characters (not
//! bytes) so multi-byte input behaves correctly.

#[derive(Debug, Clone, Default)]
pub struct TextInput {
    input: String,
    cursor_pos: usize, // Position in characters, not bytes
}

impl TextInput {
    /// Create a new text input handler with empty input
    pub fn new() -> Self {
        Self {
            input: String::new(),
            cursor_pos: 0,
        }
    }

    /// Create a text input handler with default value
    pub fn with_text(text: impl Into<String>) -> Self {
        let input = text.into();
        let cursor_pos = input.chars().count();
        Self { input, cursor_pos }
    }

    /// Get the current input text
    pub fn text(&self) -> &str {
        &self.input
    }

    /// Get the cursor position (in characters)
    pub fn cursor_pos(&self) -> usize {
        self.cursor_pos
    }

    /// Clear all input
    pub fn clear(&mut self) {
        self.input.clear();
        self.cursor_pos = 0;
    }

    /// Convert cursor position (in characters) to byte index
    fn byte_index(&self) -> usize {
        self.input
            .char_indices()
            .nth(self.cursor_pos)
            .map(|(idx, _)| idx)
            .unwrap_or(self.input.len())
    }

    /// Insert a character at the cursor position
    pub fn insert(&mut self, c: char) {
        let byte_idx = self.byte_index();
        self.input.insert(byte_idx, c);
        self.cursor_pos += 1;
    }

    /// Delete character before cursor (backspace)
    pub fn backspace(&mut self) -> bool {
        if self.cursor_pos > 0 {
            self.cursor_pos -= 1;
            let byte_idx = self.byte_index();
            self.input.remove(byte_idx);
            true
        } else {
            false
        }
    }

    /// Delete character at cursor (delete key)
    pub fn delete(&mut self) -> bool {
        let char_count = self.input.chars().count();
        if self.cursor_pos < char_count {
            let byte_idx = self.byte_index();
            self.input.remove(byte_idx);
            true
        } else {
            false
        }
    }

    /// Move cursor left
    pub fn move_left(&mut self) -> bool {
        if self.cursor_pos > 0 {
            self.cursor_pos -= 1;
            true
        } else {
            false
        }
    }

    /// Move cursor right
    pub fn move_right(&mut self) -> bool {
        let char_count = self.input.chars().count();
        if self.cursor_pos < char_count {
            self.cursor_pos += 1;
            true
        } else {
            false
        }
    }

    /// Move cursor to start (Home)
    pub fn move_home(&mut self) {
        self.cursor_pos = 0;
    }

    /// Move cursor to end (End)
    pub fn move_end(&mut self) {
        self.cursor_pos = self.input.chars().count();
    }

    /// Check if input is empty
    pub fn is_empty(&self) -> bool {
        self.input.is_empty()
    }

    /// Get text before cursor (for rendering)
    pub fn text_before_cursor(&self) -> &str {
        let byte_idx = self.byte_index();
        &self.input[..byte_idx]
    }

    /// Get text after cursor (for rendering)
    pub fn text_after_cursor(&self) -> &str {
        let byte_idx = self.byte_index();
        &self.input[byte_idx..]
    }
}
