//! Submitted-command history with an Up/Down recall cursor.

/// Append-only history of submitted commands.
///
/// The cursor ranges over `0..=len`; `len` means "past the end", where the
/// input buffer is blank.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandHistory {
    /// Oldest first.
    entries: Vec<String>,
    index: usize,
}

impl CommandHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `entry` and park the cursor past the end.
    pub fn push(&mut self, entry: impl Into<String>) {
        self.entries.push(entry.into());
        self.index = self.entries.len();
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn reset_cursor(&mut self) {
        self.index = self.entries.len();
    }

    /// Step back one entry (floor 0) and return it.
    pub fn previous(&mut self) -> Option<&str> {
        self.index = self.index.saturating_sub(1);
        self.entries.get(self.index).map(String::as_str)
    }

    /// Step forward one entry (ceiling `len`). `None` once past the end.
    pub fn next(&mut self) -> Option<&str> {
        if self.index < self.entries.len() {
            self.index += 1;
        }
        self.entries.get(self.index).map(String::as_str)
    }
}
