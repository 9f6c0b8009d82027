//! Covering materials and the static price table
//!
//! The catalogue is a closed set. Every lookup is total: a key outside the
//! set resolves to [`MaterialType::default()`] for price and name alike, so
//! there is no error path to handle.

use serde::{Deserialize, Serialize};

/// One of the four covering products offered in a quote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(from = "String", into = "&'static str")]
pub enum MaterialType {
    /// Multiwall polycarbonate sheets
    #[default]
    PolicarbonatoAlveolar,
    /// PVC canvas
    LonaPvc,
    /// Translucent roof tiles
    TelhaTranslucida,
    /// Blackout premium canvas
    LonaPremium,
}

impl MaterialType {
    /// All materials in selector order
    pub const ALL: [MaterialType; 4] = [
        MaterialType::PolicarbonatoAlveolar,
        MaterialType::LonaPvc,
        MaterialType::TelhaTranslucida,
        MaterialType::LonaPremium,
    ];

    /// Stable identifier used in config files, CLI flags and JSON output
    pub fn key(&self) -> &'static str {
        match self {
            MaterialType::PolicarbonatoAlveolar => "policarbonato-alveolar",
            MaterialType::LonaPvc => "lona-pvc",
            MaterialType::TelhaTranslucida => "telha-translucida",
            MaterialType::LonaPremium => "lona-premium",
        }
    }

    /// Human-readable product name
    pub fn display_name(&self) -> &'static str {
        match self {
            MaterialType::PolicarbonatoAlveolar => "Policarbonato Alveolar",
            MaterialType::LonaPvc => "Lona PVC",
            MaterialType::TelhaTranslucida => "Telha Translúcida",
            MaterialType::LonaPremium => "Lona Premium Blackout",
        }
    }

    /// Price in R$ per square metre
    pub fn unit_price(&self) -> f64 {
        match self {
            MaterialType::PolicarbonatoAlveolar => 120.0,
            MaterialType::LonaPvc => 85.0,
            MaterialType::TelhaTranslucida => 35.0,
            MaterialType::LonaPremium => 150.0,
        }
    }

    /// Resolve a key, falling back to the default material when unknown
    pub fn from_key(key: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|m| m.key() == key)
            .unwrap_or_default()
    }

    /// Next material in selector order (wraps around)
    pub fn next(&self) -> Self {
        let idx = self.index();
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Previous material in selector order (wraps around)
    pub fn previous(&self) -> Self {
        let idx = self.index();
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Position within [`MaterialType::ALL`]
    pub fn index(&self) -> usize {
        match self {
            MaterialType::PolicarbonatoAlveolar => 0,
            MaterialType::LonaPvc => 1,
            MaterialType::TelhaTranslucida => 2,
            MaterialType::LonaPremium => 3,
        }
    }
}

impl std::fmt::Display for MaterialType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

impl From<String> for MaterialType {
    fn from(key: String) -> Self {
        Self::from_key(&key)
    }
}

impl From<MaterialType> for &'static str {
    fn from(material: MaterialType) -> Self {
        material.key()
    }
}

/// Unit price for a material
pub fn price_of(material: MaterialType) -> f64 {
    material.unit_price()
}

/// Display name for a material
pub fn name_of(material: MaterialType) -> &'static str {
    material.display_name()
}

/// Unit price for a raw key; unknown keys price as the default material
pub fn price_of_key(key: &str) -> f64 {
    price_of(MaterialType::from_key(key))
}

/// Display name for a raw key; unknown keys name the default material
pub fn name_of_key(key: &str) -> &'static str {
    name_of(MaterialType::from_key(key))
}
