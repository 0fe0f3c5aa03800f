//! Layers: independently visible, independently undoable shape lists.

use crate::history::History;
use crate::shapes::{Shape, ShapeId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use uuid::Uuid;

/// Unique layer identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayerId(pub Uuid);

impl LayerId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for LayerId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named layer. Its shapes always equal the snapshot under its history
/// cursor; only the document mutates them.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Layer {
    pub(crate) id: LayerId,
    pub name: String,
    pub visible: bool,
    /// Paint order, back to front.
    shapes: Vec<Shape>,
    #[serde(skip)]
    history: History,
}

impl Layer {
    /// Create a new, visible, empty layer.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: LayerId::new(),
            name: name.into(),
            visible: true,
            shapes: Vec::new(),
            history: History::new(),
        }
    }

    pub fn id(&self) -> LayerId {
        self.id
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Get a shape by ID.
    pub fn shape(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|shape| shape.id() == id)
    }

    /// Check if the layer holds a shape with this ID.
    pub fn contains(&self, id: ShapeId) -> bool {
        self.shape(id).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Replace the live shapes and record them as a new undo step.
    pub(crate) fn commit(&mut self, shapes: Vec<Shape>) {
        self.history.record(shapes.clone());
        self.shapes = shapes;
    }

    /// Replace the live shapes, folding them into undo step `step` if it is
    /// still the current one. Otherwise a new step is recorded. Returns the
    /// step now holding the shapes.
    pub(crate) fn commit_provisional(&mut self, shapes: Vec<Shape>, step: usize) -> usize {
        if self.history.cursor() == step {
            self.history.amend(shapes.clone());
        } else {
            self.history.record(shapes.clone());
        }
        self.shapes = shapes;
        self.history.cursor()
    }

    /// Undo the last change.
    /// Returns true if undo was performed, false if nothing to undo.
    pub(crate) fn undo(&mut self) -> bool {
        if !self.history.can_undo() {
            return false;
        }
        self.shapes = self.history.undo().to_vec();
        true
    }

    /// Redo the last undone change.
    /// Returns true if redo was performed, false if nothing to redo.
    pub(crate) fn redo(&mut self) -> bool {
        if !self.history.can_redo() {
            return false;
        }
        self.shapes = self.history.redo().to_vec();
        true
    }

    /// Live shapes match the history cursor and shape ids are unique.
    pub fn is_consistent(&self) -> bool {
        let mut seen = HashSet::new();
        self.shapes == self.history.current() && self.shapes.iter().all(|shape| seen.insert(shape.id()))
    }
}
