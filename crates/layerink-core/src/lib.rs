//! LayerInk Core Library
//!
//! Document and state engine for a layered vector drawing surface: shapes,
//! per-layer undo history, selection and the pointer interaction state machine.

pub mod command;
pub mod config;
pub mod document;
pub mod error;
pub mod export;
pub mod history;
pub mod interaction;
pub mod layer;
pub mod shapes;
pub mod tools;

pub use command::{Command, LayerRef, Session};
pub use config::EditorConfig;
pub use document::Document;
pub use error::{ColorParseError, EditError, EditResult};
pub use export::{ExportLayer, ExportOptions, ExportScene, SceneEncoder};
pub use history::History;
pub use hit_test::{hit_test, topmost_hit};
pub use interaction::{Action, CursorHint, DragKind, Interaction, InteractionState};
pub use layer::{Layer, LayerId};
pub use shapes::{Circle, Freehand, Rectangle, Rgba, Scale, Shape, ShapeId, ShapeIdGenerator, ShapeUpdate, Text};
pub use tools::ToolKind;
