//! Configuration types for Coberturas
//!
//! Defines:
//! - `Settings` - Top-level contents of `config.toml`
//! - `DefaultSettings` - Initial calculator values
//! - `UiSettings` - Display toggles

use coberturas_core::MaterialType;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub defaults: DefaultSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Initial calculator values, also used by reset
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DefaultSettings {
    /// Width in metres
    #[serde(default = "default_width")]
    pub width: f64,

    /// Length in metres
    #[serde(default = "default_length")]
    pub length: f64,

    /// Material key; unknown keys fall back to the default material
    #[serde(default)]
    pub material: MaterialType,
}

impl Default for DefaultSettings {
    fn default() -> Self {
        Self {
            width: default_width(),
            length: default_length(),
            material: MaterialType::default(),
        }
    }
}

impl DefaultSettings {
    /// Apply command-line overrides on top of the file values
    pub fn apply_overrides(
        &mut self,
        width: Option<f64>,
        length: Option<f64>,
        material: Option<MaterialType>,
    ) {
        if let Some(width) = width {
            self.width = width;
        }
        if let Some(length) = length {
            self.length = length;
        }
        if let Some(material) = material {
            self.material = material;
        }
    }

    /// Floor negative or non-finite dimensions at zero, as the input fields do
    pub fn sanitized(mut self) -> Self {
        self.width = sanitize_dimension("width", self.width);
        self.length = sanitize_dimension("length", self.length);
        self
    }
}

fn sanitize_dimension(name: &str, value: f64) -> f64 {
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        warn!("Invalid default {} {}, using 0", name, value);
        0.0
    }
}

fn default_width() -> f64 {
    30.0
}

fn default_length() -> f64 {
    20.0
}

fn default_true() -> bool {
    true
}

/// Display settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Draw the grid texture inside the coverage rectangle
    #[serde(default = "default_true")]
    pub show_grid: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self { show_grid: true }
    }
}
