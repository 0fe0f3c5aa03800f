//! Session scripts and their results.

use layerink_core::{Command, Document, EditorConfig};
use serde::{Deserialize, Serialize};

/// A recorded editing session: optional editor defaults plus the commands
/// to replay, in order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Script {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<EditorConfig>,
    #[serde(default)]
    pub commands: Vec<Command>,
}

/// Final document state and every notice raised while replaying.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub document: Document,
    pub notices: Vec<String>,
}
