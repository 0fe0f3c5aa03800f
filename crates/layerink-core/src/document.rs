//! Layered document and editing operations.
//!
//! Every public mutation either succeeds and leaves the document consistent,
//! or returns an [`EditError`] and leaves it untouched.

use crate::config::EditorConfig;
use crate::error::{EditError, EditResult};
use crate::hit_test::topmost_hit;
use crate::layer::{Layer, LayerId};
use crate::shapes::{Rgba, Shape, ShapeId, ShapeIdGenerator, ShapeUpdate};
use crate::tools::ToolKind;
use kurbo::Point;
use serde::Serialize;
use uuid::Uuid;

/// The full editor state: drawing settings, selection and ordered layers.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Unique document identifier.
    pub id: String,
    tool: ToolKind,
    stroke_color: Rgba,
    stroke_width: f64,
    selected_shape: Option<ShapeId>,
    active_layer: LayerId,
    /// Bottom to top.
    layers: Vec<Layer>,
    #[serde(skip)]
    config: EditorConfig,
    #[serde(skip)]
    ids: ShapeIdGenerator,
}

impl Default for Document {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl Document {
    /// Create a document with a single empty layer named after the config.
    pub fn new(config: EditorConfig) -> Self {
        let first = Layer::new(config.layer_name(1));
        Self {
            id: Uuid::new_v4().to_string(),
            tool: config.tool,
            stroke_color: config.stroke_color,
            stroke_width: config.stroke_width,
            selected_shape: None,
            active_layer: first.id(),
            layers: vec![first],
            ids: ShapeIdGenerator::starting_at(config.first_shape_id),
            config,
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn tool(&self) -> ToolKind {
        self.tool
    }

    pub fn stroke_color(&self) -> Rgba {
        self.stroke_color
    }

    pub fn stroke_width(&self) -> f64 {
        self.stroke_width
    }

    pub fn selected_shape(&self) -> Option<ShapeId> {
        self.selected_shape
    }

    pub fn active_layer_id(&self) -> LayerId {
        self.active_layer
    }

    /// Set the current tool.
    pub fn set_tool(&mut self, tool: ToolKind) {
        log::debug!("Tool set to {tool}");
        self.tool = tool;
    }

    /// Set the color used for new shapes.
    pub fn set_stroke_color(&mut self, color: Rgba) {
        self.stroke_color = color;
    }

    /// Set the width used for new freehand strokes.
    pub fn set_stroke_width(&mut self, width: f64) {
        self.stroke_width = width;
    }

    /// Reserve a fresh shape id.
    pub fn next_shape_id(&mut self) -> EditResult<ShapeId> {
        self.ids.next_id().ok_or(EditError::ShapeIdsExhausted)
    }

    // --- Layers ---

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Get a layer by ID.
    pub fn layer(&self, id: LayerId) -> Option<&Layer> {
        self.layers.iter().find(|layer| layer.id() == id)
    }

    /// Resolve a layer by its position in the stack.
    pub fn layer_id_at(&self, index: usize) -> EditResult<LayerId> {
        self.layers
            .get(index)
            .map(Layer::id)
            .ok_or(EditError::LayerIndexOutOfRange(index))
    }

    pub fn active_layer(&self) -> Option<&Layer> {
        self.layer(self.active_layer)
    }

    /// Visible layers, bottom to top.
    pub fn visible_layers(&self) -> impl Iterator<Item = &Layer> {
        self.layers.iter().filter(|layer| layer.visible)
    }

    fn layer_index(&self, id: LayerId) -> EditResult<usize> {
        self.layers
            .iter()
            .position(|layer| layer.id() == id)
            .ok_or(EditError::LayerNotFound(id))
    }

    fn active_index(&self) -> EditResult<usize> {
        self.layers
            .iter()
            .position(|layer| layer.id() == self.active_layer)
            .ok_or(EditError::NoActiveLayer)
    }

    /// Append a new empty layer and make it active.
    pub fn add_layer(&mut self) -> LayerId {
        let layer = Layer::new(self.config.layer_name(self.layers.len() + 1));
        let id = layer.id();
        log::info!("Added layer {:?} ({id})", layer.name);
        self.layers.push(layer);
        self.active_layer = id;
        id
    }

    /// Remove a layer. The last remaining layer cannot be removed. If the
    /// active layer goes away, the bottom layer becomes active.
    pub fn delete_layer(&mut self, id: LayerId) -> EditResult<Layer> {
        let index = self.layer_index(id)?;
        if self.layers.len() == 1 {
            return Err(EditError::LastLayer);
        }
        let removed = self.layers.remove(index);
        if self.active_layer == id {
            self.active_layer = self.layers[0].id();
        }
        self.prune_selection();
        log::info!("Deleted layer {:?} ({id})", removed.name);
        Ok(removed)
    }

    /// Flip a layer's visibility and return the new value. Not undoable.
    pub fn toggle_layer_visibility(&mut self, id: LayerId) -> EditResult<bool> {
        let index = self.layer_index(id)?;
        let layer = &mut self.layers[index];
        layer.visible = !layer.visible;
        log::debug!("Layer {id} visible: {}", layer.visible);
        Ok(layer.visible)
    }

    pub fn set_active_layer(&mut self, id: LayerId) -> EditResult<()> {
        self.layer_index(id)?;
        log::debug!("Active layer set to {id}");
        self.active_layer = id;
        Ok(())
    }

    pub fn rename_layer(&mut self, id: LayerId, name: impl Into<String>) -> EditResult<()> {
        let index = self.layer_index(id)?;
        self.layers[index].name = name.into();
        Ok(())
    }

    // --- Shapes ---

    /// Find a shape in any layer.
    pub fn find_shape(&self, id: ShapeId) -> Option<(&Layer, &Shape)> {
        self.layers
            .iter()
            .find_map(|layer| layer.shape(id).map(|shape| (layer, shape)))
    }

    /// Index of the active layer if it holds the shape. A shape that lives in
    /// another layer is rejected with a notice.
    fn editable_index(&self, id: ShapeId) -> EditResult<usize> {
        let active = self.active_index()?;
        if self.layers[active].contains(id) {
            return Ok(active);
        }
        match self.find_shape(id) {
            Some((layer, _)) => {
                let err = EditError::NotInActiveLayer {
                    shape: id,
                    layer: layer.id(),
                };
                log::warn!("{err}");
                Err(err)
            }
            None => Err(EditError::ShapeNotFound(id)),
        }
    }

    /// A shape that may be edited right now, i.e. one in the active layer.
    pub fn editable_shape(&self, id: ShapeId) -> EditResult<&Shape> {
        let index = self.editable_index(id)?;
        self.layers[index]
            .shape(id)
            .ok_or(EditError::ShapeNotFound(id))
    }

    /// Append a shape to the active layer as a new undo step.
    pub fn add_shape(&mut self, shape: Shape) -> EditResult<ShapeId> {
        let index = self.active_index()?;
        let layer = &mut self.layers[index];
        let id = shape.id();
        if layer.contains(id) {
            return Err(EditError::DuplicateShape {
                shape: id,
                layer: layer.id(),
            });
        }
        if !self.ids.observe(id) {
            return Err(EditError::ShapeIdOverflow(id));
        }
        let kind = shape.kind();
        let mut shapes = layer.shapes().to_vec();
        shapes.push(shape);
        layer.commit(shapes);
        log::debug!("Added {kind} {id} to layer {}", layer.id());
        Ok(id)
    }

    /// Merge a partial update into a shape of the active layer as a new undo
    /// step. An empty update only checks that the shape is editable.
    pub fn update_shape(&mut self, id: ShapeId, update: &ShapeUpdate) -> EditResult<()> {
        let index = self.editable_index(id)?;
        if update.is_empty() {
            return Ok(());
        }
        let shapes = Self::updated(self.layers[index].shapes(), id, update);
        self.layers[index].commit(shapes);
        log::debug!("Updated shape {id}");
        Ok(())
    }

    /// Like [`Document::update_shape`], but folded into undo step `step` of
    /// the active layer while that step is still current. Used while a
    /// gesture is sizing the shape it created. Returns the step now holding
    /// the change, to be passed on the next call.
    pub fn amend_shape(&mut self, id: ShapeId, update: &ShapeUpdate, step: usize) -> EditResult<usize> {
        let index = self.editable_index(id)?;
        let shapes = Self::updated(self.layers[index].shapes(), id, update);
        Ok(self.layers[index].commit_provisional(shapes, step))
    }

    fn updated(shapes: &[Shape], id: ShapeId, update: &ShapeUpdate) -> Vec<Shape> {
        shapes
            .iter()
            .map(|shape| {
                let mut shape = shape.clone();
                if shape.id() == id {
                    shape.apply(update);
                }
                shape
            })
            .collect()
    }

    /// Remove a shape from the active layer as a new undo step.
    pub fn delete_shape(&mut self, id: ShapeId) -> EditResult<Shape> {
        let index = self.editable_index(id)?;
        let layer = &mut self.layers[index];
        let mut shapes = layer.shapes().to_vec();
        let position = shapes
            .iter()
            .position(|shape| shape.id() == id)
            .ok_or(EditError::ShapeNotFound(id))?;
        let removed = shapes.remove(position);
        layer.commit(shapes);
        if self.selected_shape == Some(id) {
            self.selected_shape = None;
        }
        log::debug!("Deleted shape {id}");
        Ok(removed)
    }

    /// Delete the selected shape, if any.
    pub fn delete_selected(&mut self) -> EditResult<Option<Shape>> {
        match self.selected_shape {
            Some(id) => self.delete_shape(id).map(Some),
            None => Ok(None),
        }
    }

    // --- Selection ---

    /// Select a shape in any layer, or clear the selection with `None`.
    pub fn select_shape(&mut self, id: Option<ShapeId>) -> EditResult<()> {
        if let Some(id) = id.filter(|&id| self.find_shape(id).is_none()) {
            return Err(EditError::ShapeNotFound(id));
        }
        self.selected_shape = id;
        Ok(())
    }

    /// Topmost rectangle or circle of the active layer under the point.
    pub fn hit_test(&self, point: Point) -> Option<ShapeId> {
        self.active_layer()
            .and_then(|layer| topmost_hit(layer.shapes(), point))
    }

    /// Drop the selection if its shape no longer exists.
    fn prune_selection(&mut self) {
        if let Some(id) = self.selected_shape.filter(|&id| self.find_shape(id).is_none()) {
            log::debug!("Selection {id} cleared");
            self.selected_shape = None;
        }
    }

    // --- History ---

    /// Undo the last change in the active layer.
    /// Returns true if undo was performed, false if nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Ok(index) = self.active_index() else {
            return false;
        };
        let moved = self.layers[index].undo();
        if moved {
            self.prune_selection();
        }
        moved
    }

    /// Redo the last undone change in the active layer.
    /// Returns true if redo was performed, false if nothing to redo.
    pub fn redo(&mut self) -> bool {
        let Ok(index) = self.active_index() else {
            return false;
        };
        let moved = self.layers[index].redo();
        if moved {
            self.prune_selection();
        }
        moved
    }

    /// Check if undo is available in the active layer.
    pub fn can_undo(&self) -> bool {
        self.active_layer().is_some_and(|layer| layer.history().can_undo())
    }

    /// Check if redo is available in the active layer.
    pub fn can_redo(&self) -> bool {
        self.active_layer().is_some_and(|layer| layer.history().can_redo())
    }

    // --- Read model ---

    /// Serialize the read model to pretty JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Every structural invariant holds: at least one layer, the active layer
    /// exists, the selection exists, and each layer matches its history.
    pub fn is_consistent(&self) -> bool {
        !self.layers.is_empty()
            && self.active_layer().is_some()
            && self.selected_shape.is_none_or(|id| self.find_shape(id).is_some())
            && self.layers.iter().all(Layer::is_consistent)
    }
}
