//! Rejections returned by editing operations.
//!
//! Every variant is a rejected no-op: the document is left exactly as it was.

use crate::layer::LayerId;
use crate::shapes::ShapeId;
use thiserror::Error;

/// Why an editing operation was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("Shape not found: {0}")]
    ShapeNotFound(ShapeId),
    #[error("Shape {shape} already exists in layer {layer}")]
    DuplicateShape { shape: ShapeId, layer: LayerId },
    #[error("Shape id {0} is out of range")]
    ShapeIdOverflow(ShapeId),
    #[error("No shape ids left")]
    ShapeIdsExhausted,
    #[error("Layer not found: {0}")]
    LayerNotFound(LayerId),
    #[error("No layer at index {0}")]
    LayerIndexOutOfRange(usize),
    #[error("Cannot delete the last remaining layer")]
    LastLayer,
    #[error("No active layer")]
    NoActiveLayer,
    #[error("You can only interact with shapes in the active layer.")]
    NotInActiveLayer { shape: ShapeId, layer: LayerId },
}

impl EditError {
    /// Rejections the operator should be told about, as opposed to silently
    /// ignored ones.
    pub fn is_notice(&self) -> bool {
        matches!(self, EditError::NotInActiveLayer { .. })
    }
}

/// Result type for editing operations.
pub type EditResult<T> = Result<T, EditError>;

/// A color string that is not `#rgb`, `#rrggbb` or `#rrggbbaa`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid color {0:?}: expected #rgb, #rrggbb or #rrggbbaa")]
pub struct ColorParseError(pub String);
