//! Bounded snapshot history for undo/redo.

use crate::line::Line;

/// Maximum number of undo states to keep.
pub const MAX_UNDO_HISTORY: usize = 100;

/// A deep, independent copy of the full line sequence at one instant.
pub type Snapshot = Vec<Line>;

/// Undo/redo stacks over whole-document snapshots.
///
/// The undo stack is bounded at [`MAX_UNDO_HISTORY`]; when the bound is
/// exceeded the oldest snapshot is evicted. The redo stack only ever holds
/// states displaced by `undo` and is cleared whenever a new change is
/// recorded, so its depth can never exceed the undo bound either.
#[derive(Debug, Clone, Default)]
pub struct History {
    undo_stack: Vec<Snapshot>,
    redo_stack: Vec<Snapshot>,
}

impl History {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the pre-mutation state. Call immediately before a change;
    /// any pending redo states are dropped.
    pub fn record(&mut self, current: Snapshot) {
        self.undo_stack.push(current);
        self.redo_stack.clear();

        if self.undo_stack.len() > MAX_UNDO_HISTORY {
            self.undo_stack.remove(0);
        }
    }

    /// Pop the most recent snapshot, pushing `current` onto the redo stack.
    /// Returns the snapshot to install, or `None` when there is nothing to
    /// undo (in which case `current` is dropped unused).
    pub fn undo(&mut self, current: Snapshot) -> Option<Snapshot> {
        let previous = self.undo_stack.pop()?;
        self.redo_stack.push(current);
        Some(previous)
    }

    /// Symmetric to [`undo`](Self::undo): pop a redo snapshot, pushing
    /// `current` onto the undo stack.
    pub fn redo(&mut self, current: Snapshot) -> Option<Snapshot> {
        let next = self.redo_stack.pop()?;
        self.undo_stack.push(current);
        Some(next)
    }

    /// Check if undo is available.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Check if redo is available.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Current undo stack depth.
    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }
}
