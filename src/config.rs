//! Visual settings for the editor.
//!
//! Defaults reproduce the stock look. A JSON object stored under
//! [`CONFIG_STORAGE_KEY`] in localStorage overrides any subset of fields.
//! The editor only reads this key.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::model::{CircleColor, CircleLabel};

pub const CONFIG_STORAGE_KEY: &str = "two_circles_config";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid editor config: {0}")]
    Parse(#[from] serde_json::Error),
    /// No window, or the browser exposes no localStorage.
    #[error("localStorage unavailable")]
    NoStorage,
    /// The browser threw, e.g. a `SecurityError` when storage is blocked.
    #[error("localStorage {op} failed: {detail}")]
    Storage { op: &'static str, detail: String },
}

impl ConfigError {
    fn storage(op: &'static str, err: &JsValue) -> Self {
        Self::Storage { op, detail: format!("{err:?}") }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Canvas height in CSS pixels; the width follows the window.
    pub canvas_height: f64,
    pub self_fill: String,
    pub nature_fill: String,
    pub center_dot_radius: f64,
    pub center_dot_fill: String,
    pub label_font: String,
    pub label_fill: String,
    /// Gap between the bottom of a circle and its label baseline.
    pub label_offset: f64,
    pub self_label: String,
    pub nature_label: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            canvas_height: 400.0,
            self_fill: "rgba(255, 255, 0, 0.5)".into(),
            nature_fill: "rgba(0, 255, 0, 0.5)".into(),
            center_dot_radius: 3.0,
            center_dot_fill: "black".into(),
            label_font: "12px Arial".into(),
            label_fill: "black".into(),
            label_offset: 15.0,
            self_label: "self".into(),
            nature_label: "nature".into(),
        }
    }
}

impl EditorConfig {
    /// Parse a (possibly partial) JSON override.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when `raw` is not a valid config object.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// CSS fill for a colour token.
    #[must_use]
    pub fn fill_for(&self, color: CircleColor) -> &str {
        match color {
            CircleColor::SelfColor => &self.self_fill,
            CircleColor::NatureColor => &self.nature_fill,
        }
    }

    #[must_use]
    pub fn label_text(&self, label: CircleLabel) -> &str {
        match label {
            CircleLabel::SelfCircle => &self.self_label,
            CircleLabel::NatureCircle => &self.nature_label,
        }
    }

    /// Read the override from localStorage, falling back to defaults.
    #[must_use]
    pub fn load() -> Self {
        match Self::read_stored() {
            Ok(Some(cfg)) => {
                log::info!("loaded editor config from {CONFIG_STORAGE_KEY}");
                cfg
            }
            Ok(None) => Self::default(),
            Err(e) => {
                log::warn!("{e}; using default editor config");
                Self::default()
            }
        }
    }

    fn read_stored() -> Result<Option<Self>, ConfigError> {
        let window = web_sys::window().ok_or(ConfigError::NoStorage)?;
        let store = window
            .local_storage()
            .map_err(|e| ConfigError::storage("access", &e))?
            .ok_or(ConfigError::NoStorage)?;
        match store.get_item(CONFIG_STORAGE_KEY).map_err(|e| ConfigError::storage("read", &e))? {
            Some(raw) => Self::from_json(&raw).map(Some),
            None => Ok(None),
        }
    }
}
