//! Single-line text field with a cursor.
//!
//! The cursor is a character column, so it can be drawn directly; byte
//! offsets are only computed when the content is edited.

/// Editable text buffer for one form field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    content: String,
    /// Column in chars, `0..=char_count()`
    cursor: usize,
}

impl TextInput {
    /// Create an empty field
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a field holding `content`, cursor at the end
    pub fn with_content(content: &str) -> Self {
        let mut input = Self::new();
        input.set(content);
        input
    }

    /// Get the raw field text
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the cursor column
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of characters in the field
    pub fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    /// Replace the text, cursor at the end
    pub fn set(&mut self, content: &str) {
        self.content = content.to_string();
        self.cursor = self.char_count();
    }

    /// Type one character at the cursor
    pub fn insert(&mut self, c: char) {
        let at = self.byte_offset(self.cursor);
        self.content.insert(at, c);
        self.cursor += 1;
    }

    /// Insert pasted text at the cursor.
    ///
    /// Fields are single-line: line breaks and tabs become spaces and other
    /// control characters are dropped.
    pub fn insert_str(&mut self, text: &str) {
        let cleaned: String = text
            .chars()
            .filter(|c| *c != '\r')
            .map(|c| if c == '\n' || c == '\t' { ' ' } else { c })
            .filter(|c| !c.is_control())
            .collect();
        let at = self.byte_offset(self.cursor);
        self.content.insert_str(at, &cleaned);
        self.cursor += cleaned.chars().count();
    }

    /// Delete the character left of the cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_offset(self.cursor);
            self.content.remove(at);
        }
    }

    /// Delete the character under the cursor
    pub fn delete(&mut self) {
        if self.cursor < self.char_count() {
            let at = self.byte_offset(self.cursor);
            self.content.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_count());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// Empty the field after a successful submit
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    fn byte_offset(&self, column: usize) -> usize {
        self.content
            .char_indices()
            .nth(column)
            .map_or(self.content.len(), |(offset, _)| offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_backspace() {
        let mut input = TextInput::new();
        input.insert('h');
        input.insert('i');
        assert_eq!(input.content(), "hi");
        assert_eq!(input.cursor(), 2);

        input.backspace();
        assert_eq!(input.content(), "h");
        input.backspace();
        input.backspace();
        assert_eq!(input.content(), "");
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn test_insert_in_middle() {
        let mut input = TextInput::with_content("hllo");
        input.move_home();
        input.move_right();
        input.insert('e');
        assert_eq!(input.content(), "hello");
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn test_delete_at_cursor() {
        let mut input = TextInput::with_content("hello");
        input.move_home();
        input.delete();
        assert_eq!(input.content(), "ello");
        input.move_end();
        input.delete();
        assert_eq!(input.content(), "ello");
    }

    #[test]
    fn test_cursor_counts_chars_not_bytes() {
        let mut input = TextInput::with_content("añb");
        assert_eq!(input.cursor(), 3);
        assert_eq!(input.char_count(), 3);
        input.move_left();
        input.move_left();
        assert_eq!(input.cursor(), 1);
        input.insert('é');
        assert_eq!(input.content(), "aéñb");
        input.move_right();
        input.backspace();
        assert_eq!(input.content(), "aéb");
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn test_cursor_stays_in_bounds() {
        let mut input = TextInput::with_content("ab");
        input.move_right();
        assert_eq!(input.cursor(), 2);
        input.move_home();
        input.move_left();
        assert_eq!(input.cursor(), 0);
        input.backspace();
        assert_eq!(input.content(), "ab");
    }

    #[test]
    fn test_paste_is_flattened_to_one_line() {
        let mut input = TextInput::with_content("Build");
        input.insert_str(" App\r\nfor\tteam\u{7}");
        assert_eq!(input.content(), "Build App for team");
        assert_eq!(input.cursor(), input.char_count());

        input.move_home();
        input.insert_str("My ");
        assert_eq!(input.content(), "My Build App for team");
        assert_eq!(input.cursor(), 3);
    }

    #[test]
    fn test_set_and_clear() {
        let mut input = TextInput::new();
        input.set("Build App");
        assert_eq!(input.cursor(), 9);
        input.clear();
        assert_eq!(input, TextInput::new());
    }
}
