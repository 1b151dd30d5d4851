//! Word-boundary anchor functions.
//!
//! A word is a maximal run of non-blank characters. The only blank the
//! editor recognizes is the literal space character; tabs and other
//! whitespace count as word characters.
//!
//! The four derived anchors each compose two skip primitives in a fixed
//! order. The order decides the semantics: `prev_word_start` skips trailing
//! blanks before walking over the word, while `prev_word_end` walks over the
//! word first and then the blanks behind it.

/// The only separator the word anchors recognize.
pub const BLANK: char = ' ';

/// Advance past a run of non-blank characters.
pub fn skip_chars_forward(chars: &[char], mut pos: usize) -> usize {
    while pos < chars.len() && chars[pos] != BLANK {
        pos += 1;
    }
    pos
}

/// Retreat past a run of non-blank characters.
pub fn skip_chars_backward(chars: &[char], mut pos: usize) -> usize {
    while pos > 0 && chars[pos - 1] != BLANK {
        pos -= 1;
    }
    pos
}

/// Advance past a run of blanks.
pub fn skip_blanks_forward(chars: &[char], mut pos: usize) -> usize {
    while pos < chars.len() && chars[pos] == BLANK {
        pos += 1;
    }
    pos
}

/// Retreat past a run of blanks.
pub fn skip_blanks_backward(chars: &[char], mut pos: usize) -> usize {
    while pos > 0 && chars[pos - 1] == BLANK {
        pos -= 1;
    }
    pos
}

/// Start of the word immediately before `pos`, skipping trailing blanks first.
pub fn prev_word_start(chars: &[char], pos: usize) -> usize {
    skip_chars_backward(chars, skip_blanks_backward(chars, pos))
}

/// Position just past the end of the word before the one containing or
/// preceding `pos`.
pub fn prev_word_end(chars: &[char], pos: usize) -> usize {
    skip_blanks_backward(chars, skip_chars_backward(chars, pos))
}

/// End of the next word after `pos`.
pub fn next_word_end(chars: &[char], pos: usize) -> usize {
    skip_chars_forward(chars, skip_blanks_forward(chars, pos))
}

/// Start of the word after the one containing or following `pos`.
pub fn next_word_start(chars: &[char], pos: usize) -> usize {
    skip_blanks_forward(chars, skip_chars_forward(chars, pos))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_skip_primitives() {
        let buf = chars("foo  bar");

        assert_eq!(skip_chars_forward(&buf, 0), 3);
        assert_eq!(skip_chars_forward(&buf, 3), 3);
        assert_eq!(skip_blanks_forward(&buf, 3), 5);
        assert_eq!(skip_chars_forward(&buf, 5), 8);

        assert_eq!(skip_chars_backward(&buf, 8), 5);
        assert_eq!(skip_blanks_backward(&buf, 5), 3);
        assert_eq!(skip_chars_backward(&buf, 3), 0);
        assert_eq!(skip_blanks_backward(&buf, 0), 0);
    }

    #[test]
    fn test_prev_word_start_skips_trailing_blanks() {
        let buf = chars("foo  bar");
        // From the end: back over "bar".
        assert_eq!(prev_word_start(&buf, 8), 5);
        // From the blank run: back over the blanks, then over "foo".
        assert_eq!(prev_word_start(&buf, 5), 0);
        assert_eq!(prev_word_start(&buf, 4), 0);
        // From inside a word: back to its start.
        assert_eq!(prev_word_start(&buf, 7), 5);
        assert_eq!(prev_word_start(&buf, 0), 0);
    }

    #[test]
    fn test_prev_word_end_walks_word_then_blanks() {
        let buf = chars("foo  bar");
        // From the end: over "bar", then over the blank run.
        assert_eq!(prev_word_end(&buf, 8), 3);
        // At the start of "bar": only the blanks are behind.
        assert_eq!(prev_word_end(&buf, 5), 3);
        // Inside "foo": nothing but word characters behind.
        assert_eq!(prev_word_end(&buf, 2), 0);
    }

    #[test]
    fn test_next_word_end() {
        let buf = chars("foo  bar");
        assert_eq!(next_word_end(&buf, 0), 3);
        assert_eq!(next_word_end(&buf, 3), 8);
        assert_eq!(next_word_end(&buf, 8), 8);
    }

    #[test]
    fn test_next_word_start() {
        let buf = chars("foo  bar");
        assert_eq!(next_word_start(&buf, 0), 5);
        assert_eq!(next_word_start(&buf, 5), 8);
        assert_eq!(next_word_start(&buf, 8), 8);
    }

    #[test]
    fn test_tab_is_a_word_character() {
        let buf = chars("a\tb c");
        // The tab does not separate "a" from "b".
        assert_eq!(next_word_end(&buf, 0), 3);
        assert_eq!(prev_word_start(&buf, 3), 0);
    }

    #[test]
    fn test_empty_buffer() {
        let buf: Vec<char> = Vec::new();
        assert_eq!(prev_word_start(&buf, 0), 0);
        assert_eq!(prev_word_end(&buf, 0), 0);
        assert_eq!(next_word_start(&buf, 0), 0);
        assert_eq!(next_word_end(&buf, 0), 0);
    }
}
