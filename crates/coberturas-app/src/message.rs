//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;
use coberturas_core::MaterialType;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Terminal was resized; nothing changes but the view is redrawn
    Resize,

    /// Quit the application
    Quit,

    // ─────────────────────────────────────────────────────────
    // Calculator Input Messages
    // ─────────────────────────────────────────────────────────
    /// Move focus to the next calculator field
    FocusNext,
    /// Move focus to the previous calculator field
    FocusPrevious,
    /// Replace the text of the focused dimension field
    DimensionInput { text: String },
    /// Select the next material in the list
    NextMaterial,
    /// Select the previous material in the list
    PreviousMaterial,
    /// Select a specific material
    SelectMaterial(MaterialType),
    /// Restore width, length and material to their configured defaults
    ResetInputs,

    // ─────────────────────────────────────────────────────────
    // Notifications from the calculator to the page
    // ─────────────────────────────────────────────────────────
    /// Area was recomputed after a dimension edit
    AreaChanged { area: f64, width: f64, length: f64 },
    /// Material selection changed
    MaterialChanged { material: MaterialType },
}
