//! LayerInk Application
//!
//! Headless host that replays session scripts through the editing engine
//! and reports the resulting document.

mod app;
mod script;

pub use app::{App, AppConfig, AppError, Output};
pub use script::{Report, Script};
