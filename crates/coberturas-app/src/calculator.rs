//! Calculator input state
//!
//! Local state of the input component: the two dimension fields (both as
//! typed text and as parsed values), the selected material and which field
//! has focus. Edits never fail; text that does not parse becomes zero.

use coberturas_core::{compute_area, MaterialType};

use crate::config::DefaultSettings;

/// Focusable fields of the calculator, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CalculatorField {
    #[default]
    Width,
    Length,
    Material,
}

impl CalculatorField {
    pub fn next(self) -> Self {
        match self {
            CalculatorField::Width => CalculatorField::Length,
            CalculatorField::Length => CalculatorField::Material,
            CalculatorField::Material => CalculatorField::Width,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            CalculatorField::Width => CalculatorField::Material,
            CalculatorField::Length => CalculatorField::Width,
            CalculatorField::Material => CalculatorField::Length,
        }
    }

    /// Whether this field holds a numeric dimension
    pub fn is_dimension(self) -> bool {
        !matches!(self, CalculatorField::Material)
    }
}

/// State owned by the calculator input component
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorState {
    pub width: f64,
    pub length: f64,
    pub material: MaterialType,
    /// Raw text of the width field
    pub width_input: String,
    /// Raw text of the length field
    pub length_input: String,
    pub focus: CalculatorField,
}

impl CalculatorState {
    pub fn new(defaults: &DefaultSettings) -> Self {
        Self {
            width: defaults.width,
            length: defaults.length,
            material: defaults.material,
            width_input: defaults.width.to_string(),
            length_input: defaults.length.to_string(),
            focus: CalculatorField::default(),
        }
    }

    pub fn area(&self) -> f64 {
        compute_area(self.width, self.length)
    }

    /// Replace the width text; returns the area from the new width and current length
    pub fn set_width_text(&mut self, text: impl Into<String>) -> f64 {
        self.width_input = text.into();
        self.width = parse_dimension(&self.width_input);
        compute_area(self.width, self.length)
    }

    /// Replace the length text; returns the area from the current width and new length
    pub fn set_length_text(&mut self, text: impl Into<String>) -> f64 {
        self.length_input = text.into();
        self.length = parse_dimension(&self.length_input);
        compute_area(self.width, self.length)
    }

    /// Text of the focused field, if it is a dimension field
    pub fn focused_text(&self) -> Option<&str> {
        match self.focus {
            CalculatorField::Width => Some(&self.width_input),
            CalculatorField::Length => Some(&self.length_input),
            CalculatorField::Material => None,
        }
    }

    /// Replace the text of the focused dimension field
    ///
    /// Returns the recomputed area, or `None` when the material selector has focus.
    pub fn set_focused_text(&mut self, text: impl Into<String>) -> Option<f64> {
        match self.focus {
            CalculatorField::Width => Some(self.set_width_text(text)),
            CalculatorField::Length => Some(self.set_length_text(text)),
            CalculatorField::Material => None,
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }
}

/// Characters a dimension field accepts
pub fn is_dimension_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

/// Parse a typed dimension
///
/// Uses the longest leading prefix that reads as a finite number, so
/// `"12abc"` is 12 and `"1.5.2"` is 1.5. Empty, unparsable and negative
/// input all become 0.
pub fn parse_dimension(text: &str) -> f64 {
    let text = text.trim();

    let parsed = (1..=text.len())
        .rev()
        .filter(|&end| text.is_char_boundary(end))
        .find_map(|end| text[..end].parse::<f64>().ok().filter(|v| v.is_finite()));

    match parsed {
        Some(value) if value > 0.0 => value,
        _ => 0.0,
    }
}
