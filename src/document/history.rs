//! Linear edit history (undo/redo) over whole-document states.

use crate::geometry::Position;

use super::Document;

/// Undo steps kept when no limit is configured
pub const DEFAULT_HISTORY_LIMIT: usize = 1000;

/// A restorable editor state: the document and where the caret was.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub document: Document,
    pub caret: Position,
}

impl HistoryEntry {
    pub fn new(document: Document, caret: Position) -> Self {
        Self { document, caret }
    }
}

/// Edit history with undo/redo stacks.
#[derive(Debug, Clone)]
pub struct EditHistory {
    undo_stack: Vec<HistoryEntry>,
    redo_stack: Vec<HistoryEntry>,
    max_size: usize,
}

impl Default for EditHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl EditHistory {
    /// Create a new edit history with default max size
    pub fn new() -> Self {
        Self::with_max_size(DEFAULT_HISTORY_LIMIT)
    }

    /// Create a new edit history with specified max size
    pub fn with_max_size(max_size: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_size,
        }
    }

    /// Record the state that preceded an edit (clears redo stack).
    ///
    /// Entries whose document equals the most recent one are skipped, so
    /// edits that changed nothing do not produce empty undo steps.
    pub fn push(&mut self, before: HistoryEntry) {
        if self
            .undo_stack
            .last()
            .is_some_and(|last| last.document == before.document)
        {
            return;
        }
        self.redo_stack.clear();
        self.undo_stack.push(before);

        // Trim if exceeded max size
        while self.undo_stack.len() > self.max_size {
            self.undo_stack.remove(0);
        }
    }

    /// Step back: returns the state to restore and parks `current` for redo
    pub fn undo(&mut self, current: HistoryEntry) -> Option<HistoryEntry> {
        let entry = self.undo_stack.pop()?;
        self.redo_stack.push(current);
        Some(entry)
    }

    /// Step forward: returns the state to restore and parks `current` for undo
    pub fn redo(&mut self, current: HistoryEntry) -> Option<HistoryEntry> {
        let entry = self.redo_stack.pop()?;
        self.undo_stack.push(current);
        Some(entry)
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Clear all history
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    /// Get the number of operations in the undo stack
    pub fn undo_count(&self) -> usize {
        self.undo_stack.len()
    }

    /// Get the number of operations in the redo stack
    pub fn redo_count(&self) -> usize {
        self.redo_stack.len()
    }
}
