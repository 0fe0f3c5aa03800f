//! Linear undo/redo history kept by each layer.
//!
//! The history is a list of complete shape-list snapshots plus a cursor. The
//! snapshot at the cursor is always the layer's live content. Recording a new
//! snapshot after some undos discards the redo branch.

use crate::shapes::Shape;

/// Snapshot history with a movable cursor.
#[derive(Debug, Clone, PartialEq)]
pub struct History {
    /// Index 0 is the empty layer at creation time.
    snapshots: Vec<Vec<Shape>>,
    cursor: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    /// Create a history holding only the empty snapshot.
    pub fn new() -> Self {
        Self {
            snapshots: vec![Vec::new()],
            cursor: 0,
        }
    }

    /// Truncate everything after the cursor, append `shapes` and move the
    /// cursor onto it.
    pub fn record(&mut self, shapes: Vec<Shape>) {
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(shapes);
        self.cursor = self.snapshots.len() - 1;
    }

    /// Replace the snapshot at the cursor instead of appending a new one.
    ///
    /// Used while a gesture is still resizing a shape it just added, so the
    /// whole gesture undoes in one step. The root snapshot is never
    /// overwritten; at the root this records instead.
    pub fn amend(&mut self, shapes: Vec<Shape>) {
        if self.cursor == 0 {
            self.record(shapes);
            return;
        }
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots[self.cursor] = shapes;
    }

    /// Step back. At the root this is a no-op returning the current snapshot.
    pub fn undo(&mut self) -> &[Shape] {
        if self.can_undo() {
            self.cursor -= 1;
        }
        self.current()
    }

    /// Step forward. At the newest snapshot this is a no-op.
    pub fn redo(&mut self) -> &[Shape] {
        if self.can_redo() {
            self.cursor += 1;
        }
        self.current()
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    /// The snapshot under the cursor.
    pub fn current(&self) -> &[Shape] {
        &self.snapshots[self.cursor]
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of snapshots, the root included. Never zero.
    pub fn snapshot_count(&self) -> usize {
        self.snapshots.len()
    }

    pub fn snapshots(&self) -> &[Vec<Shape>] {
        &self.snapshots
    }
}
