//! Input field handling for the terminal user interface.

/// A single-line text input with cursor position management.
///
/// `cursor` counts characters, not bytes, so multi-byte input stays on
/// char boundaries when inserting or removing.
#[derive(Clone, Default)]
pub struct InputField {
    pub value: String,
    pub cursor: usize,
}

impl InputField {
    /// Create a new empty input field.
    pub fn new() -> Self {
        Self::default()
    }

    /// Byte offset of the cursor within `value`.
    fn byte_offset(&self) -> usize {
        self.value
            .char_indices()
            .nth(self.cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    /// Insert a character at the current cursor position.
    pub fn handle_char(&mut self, c: char) {
        let at = self.byte_offset();
        self.value.insert(at, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor.
    pub fn handle_backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_offset();
            self.value.remove(at);
        }
    }

    /// Delete the character at the cursor position.
    pub fn handle_delete(&mut self) {
        if self.cursor < self.value.chars().count() {
            let at = self.byte_offset();
            self.value.remove(at);
        }
    }

    /// Move cursor one position to the left.
    pub fn move_cursor_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// Move cursor one position to the right.
    pub fn move_cursor_right(&mut self) {
        if self.cursor < self.value.chars().count() {
            self.cursor += 1;
        }
    }

    /// Reset the field to empty.
    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typing_after_multibyte_char() {
        let mut field = InputField::new();
        field.handle_char('é');
        field.handle_char('x');
        assert_eq!(field.value, "éx");
        assert_eq!(field.cursor, 2);
    }

    #[test]
    fn test_backspace_removes_multibyte_char() {
        let mut field = InputField::new();
        field.handle_char('a');
        field.handle_char('é');
        field.handle_backspace();
        assert_eq!(field.value, "a");
        assert_eq!(field.cursor, 1);
    }

    #[test]
    fn test_insert_in_middle() {
        let mut field = InputField::new();
        field.handle_char('h');
        field.handle_char('t');
        field.move_cursor_left();
        field.handle_char('é');
        assert_eq!(field.value, "hét");
        assert_eq!(field.cursor, 2);
    }

    #[test]
    fn test_delete_at_cursor() {
        let mut field = InputField::new();
        field.handle_char('ü');
        field.handle_char('b');
        field.move_cursor_left();
        field.move_cursor_left();
        field.handle_delete();
        assert_eq!(field.value, "b");
        assert_eq!(field.cursor, 0);
    }

    #[test]
    fn test_cursor_clamped_at_ends() {
        let mut field = InputField::new();
        field.move_cursor_left();
        field.handle_backspace();
        field.handle_char('a');
        field.move_cursor_right();
        assert_eq!(field.cursor, 1);
        assert_eq!(field.value, "a");
    }
}
