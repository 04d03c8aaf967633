//! The line document controller.
//!
//! Owns the authoritative line collection, mutates it through a fixed set of
//! operations, keeps bounded undo/redo history, and synchronously notifies
//! every subscriber with the resulting state after each mutation.

use crate::history::History;
use crate::line::{Line, LineDraft, LineId, LinePatch};
use log::debug;

/// Handle identifying a registered subscriber. Returned by
/// [`LineController::subscribe`]; pass it to
/// [`LineController::unsubscribe`] to deregister.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

type Subscriber = Box<dyn FnMut(&[Line])>;

/// Controller for a single line document.
///
/// Explicit instance, not a singleton; callers decide how it is shared.
/// All operations are synchronous and run to completion: subscribers never
/// observe the document, history, or registry in a partially-updated state.
/// Lookup misses are reported as `false` returns, never as errors, and
/// leave every piece of state untouched.
pub struct LineController {
    lines: Vec<Line>,
    history: History,
    subscribers: Vec<(SubscriberId, Subscriber)>,
    next_subscriber_id: u64,
}

impl Default for LineController {
    fn default() -> Self {
        Self::new()
    }
}

impl LineController {
    /// Create a controller with an empty document.
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            history: History::new(),
            subscribers: Vec::new(),
            next_subscriber_id: 0,
        }
    }

    /// Register a callback invoked with the full line sequence after every
    /// mutation, in registration order. Callbacks must not panic; failures
    /// are not isolated from other subscribers.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&[Line]) + 'static) -> SubscriberId {
        let id = SubscriberId(self.next_subscriber_id);
        self.next_subscriber_id += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Deregister a subscriber. Unknown or already-removed ids are
    /// harmless no-ops, so repeated calls are safe.
    pub fn unsubscribe(&mut self, id: SubscriberId) {
        self.subscribers.retain(|(subscriber_id, _)| *subscriber_id != id);
    }

    fn notify(&mut self) {
        for (_, subscriber) in &mut self.subscribers {
            subscriber(&self.lines);
        }
    }

    /// Append a new line built from `draft`, assigning it a fresh id.
    /// Any coordinates are accepted, degenerate segments included; the
    /// controller performs no range validation.
    pub fn create_line(&mut self, draft: LineDraft) -> Line {
        self.history.record(self.lines.clone());
        let line = Line::from_draft(draft);
        debug!("create line {}", line.id());
        self.lines.push(line.clone());
        self.notify();
        line
    }

    /// Replace the line with `id` by a merge of its current fields and
    /// `patch` (supplied fields win). Returns `false` without any side
    /// effect when no line has that id.
    pub fn update_line(&mut self, id: LineId, patch: LinePatch) -> bool {
        let Some(index) = self.lines.iter().position(|line| line.id() == id) else {
            return false;
        };
        self.history.record(self.lines.clone());
        self.lines[index] = self.lines[index].apply(&patch);
        self.notify();
        true
    }

    /// Remove the line with `id`. Returns `false` without any side effect
    /// when no line has that id.
    pub fn delete_line(&mut self, id: LineId) -> bool {
        let Some(index) = self.lines.iter().position(|line| line.id() == id) else {
            return false;
        };
        self.history.record(self.lines.clone());
        debug!("delete line {id}");
        self.lines.remove(index);
        self.notify();
        true
    }

    /// Shift both endpoints of the line with `id` by `(dx, dy)`.
    ///
    /// Delegates to [`update_line`](Self::update_line), so a move records
    /// exactly one snapshot and costs one undo step.
    pub fn move_line(&mut self, id: LineId, dx: f64, dy: f64) -> bool {
        let Some(line) = self.line(id) else {
            return false;
        };
        let patch = LinePatch::endpoints(
            line.start_x + dx,
            line.start_y + dy,
            line.end_x + dx,
            line.end_y + dy,
        );
        self.update_line(id, patch)
    }

    /// A defensive copy of the current line sequence, in insertion order
    /// (later lines draw on top).
    pub fn lines(&self) -> Vec<Line> {
        self.lines.clone()
    }

    /// Look up a single line by id. Never mutates, snapshots, or notifies.
    pub fn line(&self, id: LineId) -> Option<&Line> {
        self.lines.iter().find(|line| line.id() == id)
    }

    /// Replace the whole document, e.g. on project import. The owned input
    /// is the document's new backing store; structural validity of the
    /// elements is the caller's responsibility.
    pub fn set_lines(&mut self, lines: Vec<Line>) {
        self.history.record(self.lines.clone());
        debug!("replace document with {} lines", lines.len());
        self.lines = lines;
        self.notify();
    }

    /// Restore the most recent undo snapshot. Returns `false` with no
    /// effect when the undo stack is empty.
    pub fn undo(&mut self) -> bool {
        if !self.history.can_undo() {
            return false;
        }
        if let Some(snapshot) = self.history.undo(self.lines.clone()) {
            self.lines = snapshot;
            self.notify();
            true
        } else {
            false
        }
    }

    /// Reapply the most recently undone state. Returns `false` with no
    /// effect when the redo stack is empty.
    pub fn redo(&mut self) -> bool {
        if !self.history.can_redo() {
            return false;
        }
        if let Some(snapshot) = self.history.redo(self.lines.clone()) {
            self.lines = snapshot;
            self.notify();
            true
        } else {
            false
        }
    }

    /// Empty the document (undoable).
    pub fn clear(&mut self) {
        self.history.record(self.lines.clone());
        self.lines.clear();
        self.notify();
    }

    /// Check if undo is available.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Check if redo is available.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Check if the document is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of lines in the document.
    pub fn len(&self) -> usize {
        self.lines.len()
    }
}
