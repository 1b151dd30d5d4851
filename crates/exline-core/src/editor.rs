//! The line-editing engine: buffer and history behind one stateful object.

use crate::buffer::LineBuffer;
use crate::history::History;

/// A logical editing operation, as resolved by the host's key-event mapping.
///
/// This is the closed inbound surface of the engine: the host translates each
/// raw key event into at most one operation and feeds it to
/// [`LineEditor::apply`]. Unrecognized input is simply not forwarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOp {
    /// Insert a character at the cursor.
    InsertChar(char),
    /// Remove the character before the cursor.
    DeleteBefore,
    /// Remove the character at the cursor.
    DeleteAfter,
    /// Move the cursor one position left.
    MoveLeft,
    /// Move the cursor one position right.
    MoveRight,
    /// Move the cursor to the start of the previous word.
    MoveWordLeft,
    /// Move the cursor to the end of the next word.
    MoveWordRight,
    /// Delete backward to a word-aware anchor.
    DeleteWordBefore,
    /// Delete forward to a word-aware anchor.
    DeleteWordAfter,
    /// Kill to the end of the line (no default keybinding).
    DeleteToEnd,
    /// Kill to the start of the line (no default keybinding).
    DeleteToStart,
    /// Recall the previous history entry.
    HistoryPrev,
    /// Recall the next history entry, or return to the live empty line.
    HistoryNext,
    /// Accept the line.
    Accept,
    /// Abandon the line.
    Cancel,
}

/// Outcome of an operation that ends the current line.
///
/// Exactly one signal is produced per accept or cancel, on the same call
/// stack as the triggering operation; the host consumes it after the call
/// returns. No other operation produces a signal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorSignal {
    /// The line was accepted; carries the raw text, possibly empty.
    Submitted(String),
    /// Editing was abandoned; the text is discarded.
    Cancelled,
}

/// Single-line editor with word-aware motions and an append-only history.
///
/// The editor exclusively owns its buffer and history; all mutation goes
/// through its operation set. Every operation is total - boundary cursors,
/// empty buffers, and empty histories all degrade to no-ops.
#[derive(Debug, Clone, Default)]
pub struct LineEditor {
    buffer: LineBuffer,
    history: History,
}

impl LineEditor {
    /// Create an editor with an empty buffer and empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Dispatch one logical operation.
    ///
    /// Returns a signal only for [`EditOp::Accept`] and [`EditOp::Cancel`].
    pub fn apply(&mut self, op: EditOp) -> Option<EditorSignal> {
        match op {
            EditOp::InsertChar(c) => self.buffer.insert_char(c),
            EditOp::DeleteBefore => self.buffer.delete_before(),
            EditOp::DeleteAfter => self.buffer.delete_after(),
            EditOp::MoveLeft => self.buffer.move_left(),
            EditOp::MoveRight => self.buffer.move_right(),
            EditOp::MoveWordLeft => self.buffer.move_word_left(),
            EditOp::MoveWordRight => self.buffer.move_word_right(),
            EditOp::DeleteWordBefore => self.buffer.delete_word_before(),
            EditOp::DeleteWordAfter => self.buffer.delete_word_after(),
            EditOp::DeleteToEnd => self.buffer.delete_to_end(),
            EditOp::DeleteToStart => self.buffer.delete_to_start(),
            EditOp::HistoryPrev => self.history_prev(),
            EditOp::HistoryNext => self.history_next(),
            EditOp::Accept => return Some(self.accept()),
            EditOp::Cancel => return Some(self.cancel()),
        }
        None
    }

    /// Accept the current line.
    ///
    /// The text is recorded to history when non-empty, the buffer is cleared,
    /// and browsing stops. The signal carries the text either way, so an
    /// empty submission still reaches the host without touching the history.
    pub fn accept(&mut self) -> EditorSignal {
        let text = self.buffer.text();
        self.history.record(&text);
        self.buffer.clear();
        self.history.reset();
        EditorSignal::Submitted(text)
    }

    /// Abandon the current line. The text is discarded unconditionally and
    /// never recorded.
    pub fn cancel(&mut self) -> EditorSignal {
        self.buffer.clear();
        self.history.reset();
        EditorSignal::Cancelled
    }

    /// Recall the previous history entry into the buffer, cursor at the end.
    /// No-op when the history is empty.
    pub fn history_prev(&mut self) {
        if let Some(entry) = self.history.browse_prev() {
            self.buffer.set_text(entry);
        }
    }

    /// Recall the next history entry into the buffer, cursor at the end.
    /// Walking off the most recent entry clears back to a live empty line.
    pub fn history_next(&mut self) {
        match self.history.browse_next() {
            Some(entry) => self.buffer.set_text(entry),
            None => self.buffer.clear(),
        }
    }

    /// The live buffer content, for display only.
    pub fn text(&self) -> String {
        self.buffer.text()
    }

    /// The cursor position within the live buffer.
    pub fn cursor(&self) -> usize {
        self.buffer.cursor()
    }

    /// The edit buffer, for display only.
    pub fn buffer(&self) -> &LineBuffer {
        &self.buffer
    }

    /// The accepted-line history.
    pub fn history(&self) -> &History {
        &self.history
    }
}
