//! Undo/redo history as stacks of full document snapshots.
//!
//! DESIGN
//! ======
//! The undo stack is split into `current` (its top) and `past` (everything
//! beneath it), which makes the "never empty" invariant structural: there is
//! always a `current`, and the bottom of the stack is whatever `past[0]` is,
//! or `current` itself when `past` is empty. Snapshots are owned `Document`
//! values; nothing outside this module can reach them mutably.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use crate::doc::Document;

pub struct History {
    /// Top of the undo stack; equals the last committed or restored document.
    current: Document,
    /// Remainder of the undo stack, oldest first.
    past: Vec<Document>,
    /// Redo stack, most recently undone last.
    future: Vec<Document>,
    /// Maximum length of `past`. `None` keeps everything.
    limit: Option<usize>,
}

impl History {
    /// Start a history whose floor is `initial`.
    #[must_use]
    pub fn new(initial: Document, limit: Option<usize>) -> Self {
        Self { current: initial, past: Vec::new(), future: Vec::new(), limit }
    }

    /// Push an independent copy of `doc` and discard all redo history.
    pub fn snapshot(&mut self, doc: &Document) {
        let prev = std::mem::replace(&mut self.current, doc.clone());
        self.past.push(prev);
        self.future.clear();
        if let Some(limit) = self.limit {
            if self.past.len() > limit {
                let excess = self.past.len() - limit;
                self.past.drain(..excess);
            }
        }
    }

    /// Step back one snapshot and return the document to restore.
    ///
    /// At the floor this changes nothing and returns the current top.
    pub fn undo(&mut self) -> &Document {
        if let Some(prev) = self.past.pop() {
            let undone = std::mem::replace(&mut self.current, prev);
            self.future.push(undone);
        }
        &self.current
    }

    /// Step forward one snapshot and return the document to restore.
    ///
    /// With nothing to redo this changes nothing and returns the current top.
    pub fn redo(&mut self) -> &Document {
        if let Some(next) = self.future.pop() {
            let prev = std::mem::replace(&mut self.current, next);
            self.past.push(prev);
        }
        &self.current
    }

    /// The top of the undo stack.
    #[must_use]
    pub fn current(&self) -> &Document {
        &self.current
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Number of entries on the undo stack, floor included. Always at least 1.
    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.past.len() + 1
    }

    /// Number of entries on the redo stack.
    #[must_use]
    pub fn redo_depth(&self) -> usize {
        self.future.len()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(Document::default(), None)
    }
}
