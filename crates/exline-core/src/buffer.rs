//! Cursor-addressed edit buffer for a single line.

use crate::word;

/// The live, editable character sequence for the line being composed.
///
/// The cursor is a zero-based insertion point in `[0, len]`; every operation
/// keeps it in that range. All operations are total: edge cases at the buffer
/// boundaries degrade to no-ops.
#[derive(Debug, Clone, Default)]
pub struct LineBuffer {
    chars: Vec<char>,
    cursor: usize,
}

impl LineBuffer {
    /// Create an empty buffer with the cursor at position 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// The buffer content as a string.
    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }

    /// The current cursor position.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of characters in the buffer.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Returns true if the buffer holds no characters.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Discard the content and reset the cursor.
    pub(crate) fn clear(&mut self) {
        self.chars.clear();
        self.cursor = 0;
    }

    /// Replace the content and put the cursor at the end.
    pub(crate) fn set_text(&mut self, text: &str) {
        self.chars = text.chars().collect();
        self.cursor = self.chars.len();
    }

    // --- Boundary predicates, computed fresh from the cursor's neighbors ---

    fn at_start(&self) -> bool {
        self.cursor == 0
    }

    fn at_end(&self) -> bool {
        self.cursor >= self.chars.len()
    }

    fn at_word_start(&self) -> bool {
        self.cursor > 0
            && self.cursor < self.chars.len()
            && self.chars[self.cursor - 1] == word::BLANK
            && self.chars[self.cursor] != word::BLANK
    }

    fn at_word_end(&self) -> bool {
        self.cursor > 0
            && self.chars[self.cursor - 1] != word::BLANK
            && (self.cursor >= self.chars.len() || self.chars[self.cursor] == word::BLANK)
    }

    fn inside_word(&self) -> bool {
        self.cursor > 0
            && self.cursor < self.chars.len()
            && self.chars[self.cursor] != word::BLANK
            && self.chars[self.cursor - 1] != word::BLANK
    }

    fn between_blanks(&self) -> bool {
        self.cursor > 0
            && self.cursor < self.chars.len()
            && self.chars[self.cursor - 1] == word::BLANK
            && self.chars[self.cursor] == word::BLANK
    }

    // --- Core editing operations ---

    /// Insert a character at the cursor and advance past it.
    pub fn insert_char(&mut self, c: char) {
        self.chars.insert(self.cursor, c);
        self.cursor += 1;
    }

    /// Remove the character before the cursor, if any.
    pub fn delete_before(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.chars.remove(self.cursor);
        }
    }

    /// Remove the character at the cursor, if any.
    pub fn delete_after(&mut self) {
        if self.cursor < self.chars.len() {
            self.chars.remove(self.cursor);
        }
    }

    /// Move the cursor one position left, clamped at the start.
    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// Move the cursor one position right, clamped at the end.
    pub fn move_right(&mut self) {
        if self.cursor < self.chars.len() {
            self.cursor += 1;
        }
    }

    /// Move the cursor to the start of the word before it.
    pub fn move_word_left(&mut self) {
        self.cursor = word::prev_word_start(&self.chars, self.cursor);
    }

    /// Move the cursor to the end of the word after it.
    pub fn move_word_right(&mut self) {
        self.cursor = word::next_word_end(&self.chars, self.cursor);
    }

    /// Delete backward from the cursor to a word-aware anchor.
    ///
    /// The branches form an ordered decision procedure; the first matching
    /// case picks the anchor. At the start of a word (or at the end of the
    /// line) deletion reaches back to the end of the previous word, inside a
    /// word it stops at the word's own start, and in a blank run it reaches
    /// back to the end of the word before the blanks.
    pub fn delete_word_before(&mut self) {
        if self.at_start() {
            return;
        }
        let from = if self.at_word_start() || self.at_end() {
            word::prev_word_end(&self.chars, self.cursor)
        } else if self.inside_word() {
            word::prev_word_start(&self.chars, self.cursor)
        } else if self.between_blanks() {
            word::prev_word_end(&self.chars, self.cursor)
        } else {
            // At the end of a word.
            word::prev_word_start(&self.chars, self.cursor)
        };
        self.chars.drain(from..self.cursor);
        self.cursor = from;
    }

    /// Delete forward from the cursor to a word-aware anchor.
    ///
    /// Mirror image of [`delete_word_before`](Self::delete_word_before): at
    /// the end of a word (or at the start of the line) deletion reaches the
    /// start of the next word, inside a word it stops at the word's own end,
    /// and in a blank run it reaches the start of the word after the blanks.
    /// The cursor does not move.
    pub fn delete_word_after(&mut self) {
        if self.at_end() {
            return;
        }
        let to = if self.at_word_end() || self.at_start() {
            word::next_word_start(&self.chars, self.cursor)
        } else if self.inside_word() {
            word::next_word_end(&self.chars, self.cursor)
        } else if self.between_blanks() {
            word::next_word_start(&self.chars, self.cursor)
        } else {
            // At the start of a word.
            word::next_word_end(&self.chars, self.cursor)
        };
        self.chars.drain(self.cursor..to);
    }

    /// Truncate the buffer at the cursor (kill to end of line).
    pub fn delete_to_end(&mut self) {
        self.chars.truncate(self.cursor);
    }

    /// Remove everything before the cursor (kill to start of line).
    pub fn delete_to_start(&mut self) {
        self.chars.drain(..self.cursor);
        self.cursor = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer(text: &str, cursor: usize) -> LineBuffer {
        let mut buf = LineBuffer::new();
        buf.set_text(text);
        buf.cursor = cursor;
        buf
    }

    fn state(buf: &LineBuffer) -> (String, usize) {
        (buf.text(), buf.cursor())
    }

    #[test]
    fn test_insert_advances_cursor() {
        let mut buf = LineBuffer::new();
        buf.insert_char('a');
        buf.insert_char('c');
        buf.move_left();
        buf.insert_char('b');
        assert_eq!(state(&buf), ("abc".to_string(), 2));
    }

    #[test]
    fn test_insert_then_delete_before_is_inverse() {
        let mut buf = buffer("foo bar", 4);
        let before = state(&buf);
        buf.insert_char('x');
        buf.delete_before();
        assert_eq!(state(&buf), before);
    }

    #[test]
    fn test_edge_deletions_are_noops() {
        let mut buf = LineBuffer::new();
        buf.delete_before();
        buf.delete_after();
        buf.delete_word_before();
        buf.delete_word_after();
        assert_eq!(state(&buf), (String::new(), 0));

        let mut buf = buffer("foo", 0);
        buf.delete_before();
        buf.delete_word_before();
        assert_eq!(state(&buf), ("foo".to_string(), 0));

        let mut buf = buffer("foo", 3);
        buf.delete_after();
        buf.delete_word_after();
        assert_eq!(state(&buf), ("foo".to_string(), 3));
    }

    #[test]
    fn test_cursor_movement_is_clamped() {
        let mut buf = buffer("ab", 0);
        buf.move_left();
        assert_eq!(buf.cursor(), 0);
        buf.move_right();
        buf.move_right();
        buf.move_right();
        assert_eq!(buf.cursor(), 2);
    }

    #[test]
    fn test_word_movement() {
        let mut buf = buffer("foo  bar", 8);
        buf.move_word_left();
        assert_eq!(buf.cursor(), 5);
        buf.move_word_left();
        assert_eq!(buf.cursor(), 0);
        buf.move_word_right();
        assert_eq!(buf.cursor(), 3);
        buf.move_word_right();
        assert_eq!(buf.cursor(), 8);
    }

    #[test]
    fn test_delete_word_before_at_end_of_line() {
        // At the end, deletion reaches back past the word and its leading
        // blanks to the end of the previous word.
        let mut buf = buffer("foo bar", 7);
        buf.delete_word_before();
        assert_eq!(state(&buf), ("foo".to_string(), 3));
    }

    #[test]
    fn test_delete_word_before_at_word_start() {
        // At the start of "bar" only the blank run behind the cursor goes.
        let mut buf = buffer("foo bar", 4);
        buf.delete_word_before();
        assert_eq!(state(&buf), ("foobar".to_string(), 3));
    }

    #[test]
    fn test_delete_word_before_inside_word() {
        // Inside "bar": back to the word's own start.
        let mut buf = buffer("foo bar", 6);
        buf.delete_word_before();
        assert_eq!(state(&buf), ("foo r".to_string(), 4));
    }

    #[test]
    fn test_delete_word_before_between_blanks() {
        // In the middle of a blank run: back to the end of "foo".
        let mut buf = buffer("foo  bar", 4);
        buf.delete_word_before();
        assert_eq!(state(&buf), ("foo bar".to_string(), 3));
    }

    #[test]
    fn test_delete_word_before_at_word_end() {
        // Just after "foo": the whole word goes.
        let mut buf = buffer("foo bar", 3);
        buf.delete_word_before();
        assert_eq!(state(&buf), (" bar".to_string(), 0));
    }

    #[test]
    fn test_delete_word_after_at_start_of_line() {
        // At the start, deletion reaches past the word and its trailing
        // blanks to the start of the next word.
        let mut buf = buffer("foo bar", 0);
        buf.delete_word_after();
        assert_eq!(state(&buf), ("bar".to_string(), 0));
    }

    #[test]
    fn test_delete_word_after_inside_word() {
        // Inside "foo": forward to the word's own end, cursor stays.
        let mut buf = buffer("foo bar", 2);
        buf.delete_word_after();
        assert_eq!(state(&buf), ("fo bar".to_string(), 2));
    }

    #[test]
    fn test_delete_word_after_at_word_end() {
        // Just after "foo": the blank run and "bar"'s absence of leading
        // blanks put the anchor at the start of "bar".
        let mut buf = buffer("foo bar", 3);
        buf.delete_word_after();
        assert_eq!(state(&buf), ("foobar".to_string(), 3));
    }

    #[test]
    fn test_delete_word_after_between_blanks() {
        let mut buf = buffer("foo  bar", 4);
        buf.delete_word_after();
        assert_eq!(state(&buf), ("foo bar".to_string(), 4));
    }

    #[test]
    fn test_delete_word_after_at_word_start() {
        // At the start of "bar": the whole word goes, cursor stays.
        let mut buf = buffer("foo bar", 4);
        buf.delete_word_after();
        assert_eq!(state(&buf), ("foo ".to_string(), 4));
    }

    #[test]
    fn test_kill_line_primitives() {
        let mut buf = buffer("foo bar", 3);
        buf.delete_to_end();
        assert_eq!(state(&buf), ("foo".to_string(), 3));

        let mut buf = buffer("foo bar", 4);
        buf.delete_to_start();
        assert_eq!(state(&buf), ("bar".to_string(), 0));
    }
}
