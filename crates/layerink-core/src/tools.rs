//! Drawing tools.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Available tools. Each one creates the shape variant of the same name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ToolKind {
    #[default]
    Rectangle,
    Circle,
    Freehand,
    Text,
}

impl ToolKind {
    pub fn name(self) -> &'static str {
        match self {
            ToolKind::Rectangle => "rectangle",
            ToolKind::Circle => "circle",
            ToolKind::Freehand => "freehand",
            ToolKind::Text => "text",
        }
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
