//! Whiteboard settings.
//!
//! Settings are plain JSON. Every field is optional; anything missing takes
//! its default, so an empty object is a valid settings file.

use crate::constants::{DEFAULT_STROKE_SIZE, DEFAULT_THEME};
use crate::geometry::HitTolerance;
use crate::types::ToolType;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Tool selected when a board opens
    pub default_tool: ToolType,
    /// Hit-testing tolerances
    pub hit: HitTolerance,
    /// Freehand stroke diameter passed to the renderer
    pub stroke_size: f64,
    /// Theme preselected for image generation
    pub default_theme: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_tool: ToolType::default(),
            hit: HitTolerance::default(),
            stroke_size: DEFAULT_STROKE_SIZE,
            default_theme: DEFAULT_THEME.to_string(),
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
