//! Engine configuration: drawing defaults, selection styling, history depth.
//!
//! Hosts usually embed a JSON blob next to the canvas element and hand it to
//! [`EngineConfig::from_json`]. Missing keys fall back to their defaults, so
//! `{}` is a valid configuration.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_BACKGROUND, DEFAULT_COLOR, DEFAULT_STROKE_WIDTH, SELECTION_COLOR, SELECTION_MARGIN};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid config json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config value for {field}: {reason}")]
    Invalid { field: &'static str, reason: &'static str },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Initial color for new strokes and shapes.
    pub color: String,
    /// Initial width for new strokes.
    pub stroke_width: f64,
    /// Outline distance around the selected element's bounds.
    pub selection_margin: f64,
    /// Outline color for the selection highlight.
    pub selection_color: String,
    /// Surface clear color.
    pub background: String,
    /// Undo steps kept above the floor. `None` (the default) keeps every
    /// step, so undo can always reach the initial document. A cap drops the
    /// oldest steps, the initial document included.
    pub history_limit: Option<usize>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            color: DEFAULT_COLOR.to_owned(),
            stroke_width: DEFAULT_STROKE_WIDTH,
            selection_margin: SELECTION_MARGIN,
            selection_color: SELECTION_COLOR.to_owned(),
            background: DEFAULT_BACKGROUND.to_owned(),
            history_limit: None,
        }
    }
}

impl EngineConfig {
    /// Parse and validate a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns `Parse` for malformed JSON or mistyped fields and `Invalid`
    /// when a value is out of range.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every field is in range.
    ///
    /// # Errors
    ///
    /// Returns `Invalid` naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.stroke_width.is_finite() && self.stroke_width > 0.0) {
            return Err(ConfigError::Invalid { field: "stroke_width", reason: "must be a positive number" });
        }
        if !(self.selection_margin.is_finite() && self.selection_margin >= 0.0) {
            return Err(ConfigError::Invalid { field: "selection_margin", reason: "must be zero or positive" });
        }
        if self.history_limit == Some(0) {
            return Err(ConfigError::Invalid { field: "history_limit", reason: "must keep at least one step" });
        }
        for (field, value) in [
            ("color", &self.color),
            ("selection_color", &self.selection_color),
            ("background", &self.background),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::Invalid { field, reason: "must not be empty" });
            }
        }
        Ok(())
    }
}
