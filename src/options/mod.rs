//! Centralized configuration with TOML preset support.
//!
//! All tweakable settings (camera, focus animation, screen bindings and
//! hit-plane tweaks, overlay placement, repository source) are consolidated
//! here. Options serialize to/from TOML presets.

mod camera;
mod focus;
mod repos;
mod screens;

use std::path::Path;

pub use camera::CameraOptions;
pub use focus::FocusOptions;
pub use repos::RepoOptions;
pub use screens::{OverlayOptions, ScreenBinding, ScreenOptions};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::VitrineError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[focus]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Camera projection, controls and home pose.
    pub camera: CameraOptions,
    /// Focus animation timing and framing.
    pub focus: FocusOptions,
    /// Screen mesh bindings and hit-plane tweaks.
    #[schemars(skip)]
    pub screens: ScreenOptions,
    /// Overlay placement.
    pub overlay: OverlayOptions,
    /// Repository metadata source.
    pub repos: RepoOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, VitrineError> {
        let content = std::fs::read_to_string(path).map_err(VitrineError::Io)?;
        toml::from_str(&content)
            .map_err(|e| VitrineError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), VitrineError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| VitrineError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(VitrineError::Io)?;
        }
        std::fs::write(path, content).map_err(VitrineError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}
