//! Session runner: loads configuration and scripts, drives the engine.

use crate::script::{Report, Script};
use layerink_core::{EditorConfig, ExportOptions, ExportScene, Session};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Application errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid JSON in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    /// Editor defaults for scripts that do not bring their own.
    pub editor: EditorConfig,
    /// Pretty-print JSON output.
    pub pretty: bool,
    /// Resolution multiplier for `--export`.
    pub export_scale: f64,
    /// Margin around exported content.
    pub export_padding: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        let export = ExportOptions::default();
        Self {
            editor: EditorConfig::default(),
            pretty: true,
            export_scale: export.scale,
            export_padding: export.padding,
        }
    }
}

impl AppConfig {
    /// Load configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        read_json(path)
    }

    pub fn export_options(&self) -> ExportOptions {
        ExportOptions {
            scale: self.export_scale,
            padding: self.export_padding,
            ..ExportOptions::default()
        }
    }
}

/// What to print after a script ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Output {
    /// Document read model plus operator notices.
    #[default]
    Report,
    /// Export scene of the visible layers.
    Export,
}

/// Headless host for editing sessions.
pub struct App {
    config: AppConfig,
}

impl App {
    /// Create a new application.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Run every command of a script against a fresh session.
    pub fn run_script(&self, script: Script) -> Report {
        let editor = script.config.unwrap_or_else(|| self.config.editor.clone());
        let mut session = Session::new(editor);
        let mut notices = Vec::new();

        log::info!("Running {} commands", script.commands.len());
        for (index, command) in script.commands.into_iter().enumerate() {
            let action = session.dispatch(command);
            let interrupted = session.interaction.take_interrupted();
            for action in interrupted.iter().chain([&action]) {
                log::debug!("#{index}: {action:?}");
                if let Some(notice) = action.notice() {
                    log::warn!("#{index}: {notice}");
                    notices.push(notice);
                }
            }
        }

        Report {
            document: session.document,
            notices,
        }
    }

    /// Load a script from disk and run it.
    pub fn run_script_file(&self, path: &Path) -> Result<Report, AppError> {
        let script: Script = read_json(path)?;
        Ok(self.run_script(script))
    }

    /// Render a report as JSON.
    pub fn render(&self, report: &Report, output: Output) -> Result<String, AppError> {
        let json = match output {
            Output::Report => self.to_json(report)?,
            Output::Export => {
                let scene = ExportScene::from_document(&report.document, &self.config.export_options());
                self.to_json(&scene)?
            }
        };
        Ok(json)
    }

    fn to_json<T: Serialize>(&self, value: &T) -> Result<String, AppError> {
        let json = if self.config.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(json)
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, AppError> {
    let text = fs::read_to_string(path).map_err(|source| AppError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| AppError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
