//! Color palette.

use coberturas_core::MaterialType;
use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black;
pub const CARD_BG: Color = Color::Black;

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray;
pub const BORDER_ACTIVE: Color = Color::Cyan;

// --- Accent ---
pub const ACCENT: Color = Color::Cyan;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;

// --- Money ---
pub const PRICE: Color = Color::Green;
pub const PRICE_TOTAL: Color = Color::LightGreen;

// --- Inputs ---
pub const INPUT_BG: Color = Color::Rgb(30, 30, 40);
pub const INPUT_ACTIVE_BG: Color = Color::Rgb(60, 60, 80);

/// Fill color of the coverage drawing for a material
pub fn material_color(material: MaterialType) -> Color {
    match material {
        MaterialType::PolicarbonatoAlveolar => Color::Rgb(34, 211, 238),
        MaterialType::LonaPvc => Color::Rgb(59, 130, 246),
        MaterialType::TelhaTranslucida => Color::Rgb(251, 191, 36),
        MaterialType::LonaPremium => Color::Rgb(55, 65, 81),
    }
}
