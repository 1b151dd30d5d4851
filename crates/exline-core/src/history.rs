//! Append-only history of accepted lines with browse semantics.

/// Log of previously accepted lines, oldest first.
///
/// Entries are append-only: nothing edits or removes them for the life of
/// the editor. The browse offset counts backward from the most recent entry
/// (`Some(0)`); `None` means not browsing, with the buffer holding live,
/// uncommitted text.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<String>,
    browse: Option<usize>,
}

impl History {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an accepted line. Empty lines are never recorded; there is no
    /// de-duplication and no size cap.
    pub fn record(&mut self, line: &str) {
        if !line.is_empty() {
            self.entries.push(line.to_string());
        }
    }

    /// Step one entry further into the past.
    ///
    /// Returns `None` when the history is empty; browsing saturates at the
    /// oldest entry.
    pub fn browse_prev(&mut self) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }
        let offset = match self.browse {
            None => 0,
            Some(offset) => (offset + 1).min(self.entries.len() - 1),
        };
        self.browse = Some(offset);
        Some(&self.entries[self.entries.len() - 1 - offset])
    }

    /// Step one entry back toward the present.
    ///
    /// Walking off the most recent entry stops browsing and returns `None`;
    /// the caller goes back to a live empty line.
    pub fn browse_next(&mut self) -> Option<&str> {
        match self.browse {
            None | Some(0) => {
                self.browse = None;
                None
            }
            Some(offset) => {
                let offset = offset - 1;
                self.browse = Some(offset);
                Some(&self.entries[self.entries.len() - 1 - offset])
            }
        }
    }

    /// Stop browsing without touching the entries.
    pub fn reset(&mut self) {
        self.browse = None;
    }

    /// Whether a browse is in progress.
    pub fn is_browsing(&self) -> bool {
        self.browse.is_some()
    }

    /// Number of recorded entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The recorded entries, oldest first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}
