//! Editor defaults applied when a session starts.

use crate::shapes::{Rgba, Text};
use crate::tools::ToolKind;
use serde::{Deserialize, Serialize};

/// Default drawing color (`#6602f2`).
pub const DEFAULT_STROKE_COLOR: Rgba = Rgba::opaque(0x66, 0x02, 0xf2);
/// Default stroke width for freehand lines.
pub const DEFAULT_STROKE_WIDTH: f64 = 5.0;

/// Initial editor state. Every field has a default, so a partial JSON
/// object is a valid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorConfig {
    pub tool: ToolKind,
    pub stroke_color: Rgba,
    pub stroke_width: f64,
    /// Font size for text created with the text tool.
    pub font_size: f64,
    /// Layers are named `"{prefix} {n}"`.
    pub layer_name_prefix: String,
    /// First value handed out by the shape id generator.
    pub first_shape_id: u64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            tool: ToolKind::default(),
            stroke_color: DEFAULT_STROKE_COLOR,
            stroke_width: DEFAULT_STROKE_WIDTH,
            font_size: Text::DEFAULT_FONT_SIZE,
            layer_name_prefix: "Layer".to_string(),
            first_shape_id: 1,
        }
    }
}

impl EditorConfig {
    /// Parse a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Display name of the `number`-th layer (1-based).
    pub fn layer_name(&self, number: usize) -> String {
        format!("{} {}", self.layer_name_prefix, number)
    }
}
