//! Serializable inbound commands and the session that dispatches them.

use crate::config::EditorConfig;
use crate::document::Document;
use crate::error::EditResult;
use crate::interaction::{Action, Interaction};
use crate::layer::LayerId;
use crate::shapes::{Rgba, Shape, ShapeId, ShapeUpdate};
use crate::tools::ToolKind;
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// A layer named either by its position in the stack or by its id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LayerRef {
    Index(usize),
    Id(LayerId),
}

impl From<LayerId> for LayerRef {
    fn from(id: LayerId) -> Self {
        LayerRef::Id(id)
    }
}

/// Everything a host can ask of an editing session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum Command {
    SetTool { tool: ToolKind },
    SetStrokeColor { color: Rgba },
    SetStrokeWidth { width: f64 },
    AddShape { shape: Shape },
    UpdateShape { id: ShapeId, update: ShapeUpdate },
    DeleteShape { id: ShapeId },
    DeleteSelected,
    SelectShape {
        #[serde(default)]
        id: Option<ShapeId>,
    },
    Undo,
    Redo,
    AddLayer,
    DeleteLayer { layer: LayerRef },
    ToggleLayerVisibility { layer: LayerRef },
    SetActiveLayer { layer: LayerRef },
    RenameLayer { layer: LayerRef, name: String },
    PointerDown { x: f64, y: f64 },
    PointerMove { x: f64, y: f64 },
    PointerUp,
    TextInput { text: String },
    TextCancelled,
    ShapeClicked { id: ShapeId },
    TransformEnd { id: ShapeId, update: ShapeUpdate },
}

/// A document plus the gesture state driving it.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub document: Document,
    pub interaction: Interaction,
}

impl Session {
    pub fn new(config: EditorConfig) -> Self {
        Self {
            document: Document::new(config),
            interaction: Interaction::new(),
        }
    }

    fn resolve(&self, layer: LayerRef) -> EditResult<LayerId> {
        match layer {
            LayerRef::Index(index) => self.document.layer_id_at(index),
            LayerRef::Id(id) => Ok(id),
        }
    }

    /// Route a command to the document or the interaction state machine.
    pub fn dispatch(&mut self, command: Command) -> Action {
        log::trace!("Dispatching {command:?}");
        let doc = &mut self.document;
        let result = match command {
            Command::SetTool { tool } => {
                doc.set_tool(tool);
                Ok(Action::Changed)
            }
            Command::SetStrokeColor { color } => {
                doc.set_stroke_color(color);
                Ok(Action::Changed)
            }
            Command::SetStrokeWidth { width } => {
                doc.set_stroke_width(width);
                Ok(Action::Changed)
            }
            Command::AddShape { shape } => doc.add_shape(shape).map(Action::ShapeCreated),
            Command::UpdateShape { id, update } => doc.update_shape(id, &update).map(|()| Action::ShapeUpdated(id)),
            Command::DeleteShape { id } => doc.delete_shape(id).map(|_| Action::ShapeDeleted(id)),
            Command::DeleteSelected => doc.delete_selected().map(|removed| match removed {
                Some(shape) => Action::ShapeDeleted(shape.id()),
                None => Action::None,
            }),
            Command::SelectShape { id } => doc.select_shape(id).map(|()| Action::Selected(id)),
            Command::Undo => Ok(if doc.undo() { Action::Changed } else { Action::None }),
            Command::Redo => Ok(if doc.redo() { Action::Changed } else { Action::None }),
            Command::AddLayer => Ok(Action::LayerAdded(doc.add_layer())),
            Command::DeleteLayer { layer } => self
                .resolve(layer)
                .and_then(|id| self.document.delete_layer(id))
                .map(|_| Action::Changed),
            Command::ToggleLayerVisibility { layer } => self
                .resolve(layer)
                .and_then(|id| self.document.toggle_layer_visibility(id))
                .map(|_| Action::Changed),
            Command::SetActiveLayer { layer } => self
                .resolve(layer)
                .and_then(|id| self.document.set_active_layer(id))
                .map(|()| Action::Changed),
            Command::RenameLayer { layer, name } => self
                .resolve(layer)
                .and_then(|id| self.document.rename_layer(id, name))
                .map(|()| Action::Changed),
            Command::PointerDown { x, y } => Ok(self.interaction.pointer_down(doc, Point::new(x, y))),
            Command::PointerMove { x, y } => Ok(self.interaction.pointer_move(doc, Point::new(x, y))),
            Command::PointerUp => Ok(self.interaction.pointer_up(doc)),
            Command::TextInput { text } => Ok(self.interaction.text_input(doc, &text)),
            Command::TextCancelled => Ok(self.interaction.text_cancelled()),
            Command::ShapeClicked { id } => Ok(self.interaction.shape_clicked(doc, id)),
            Command::TransformEnd { id, update } => Ok(self.interaction.transform_end(doc, id, &update)),
        };
        result.unwrap_or_else(Action::Rejected)
    }
}
