//! Undo/Redo history
//!
//! Every edit replaces the whole document, so an entry is just the text
//! before and after. Undo hands back the `before` text for the caller to
//! feed through the normal edit path.

/// Default number of undo levels
pub const DEFAULT_LIMIT: usize = 100;

/// One whole-document replacement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditEntry {
    /// Content before the edit
    pub before: String,
    /// Content after the edit
    pub after: String,
}

/// Manages undo/redo history.
#[derive(Debug, Clone)]
pub struct EditHistory {
    /// Entries that can be undone, most recent last
    undo_stack: Vec<EditEntry>,
    /// Entries that can be redone, most recent last
    redo_stack: Vec<EditEntry>,
    /// Maximum number of undo levels
    max_size: usize,
}

impl EditHistory {
    /// Creates a history keeping at most `max_size` undo levels
    pub fn new(max_size: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_size: max_size.max(1),
        }
    }

    /// Record an edit. No-op edits are ignored. Clears the redo stack.
    pub fn record(&mut self, before: &str, after: &str) {
        if before == after {
            return;
        }
        self.redo_stack.clear();
        self.undo_stack.push(EditEntry {
            before: before.to_string(),
            after: after.to_string(),
        });
        if self.undo_stack.len() > self.max_size {
            self.undo_stack.remove(0);
        }
    }

    /// Pop the last edit; returns the text to restore
    pub fn undo(&mut self) -> Option<String> {
        let entry = self.undo_stack.pop()?;
        let text = entry.before.clone();
        self.redo_stack.push(entry);
        Some(text)
    }

    /// Re-apply the last undone edit; returns the text to restore
    pub fn redo(&mut self) -> Option<String> {
        let entry = self.redo_stack.pop()?;
        let text = entry.after.clone();
        self.undo_stack.push(entry);
        Some(text)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Drop all history
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    /// Number of undo levels currently held
    pub fn len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.undo_stack.is_empty()
    }
}

impl Default for EditHistory {
    fn default() -> Self {
        Self::new(DEFAULT_LIMIT)
    }
}
