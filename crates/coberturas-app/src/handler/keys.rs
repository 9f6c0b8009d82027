//! Key event handlers

use coberturas_core::MaterialType;

use crate::calculator::{is_dimension_char, CalculatorField};
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::AppState;

/// Convert key events to messages based on the focused field
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        // Global keys
        InputKey::CharCtrl('c') | InputKey::Esc | InputKey::Char('q') => Some(Message::Quit),
        InputKey::Char('r') => Some(Message::ResetInputs),
        InputKey::Tab | InputKey::Down => Some(Message::FocusNext),
        InputKey::BackTab | InputKey::Up => Some(Message::FocusPrevious),

        _ => match state.calculator.focus {
            CalculatorField::Width | CalculatorField::Length => {
                handle_key_dimension(state, key)
            }
            CalculatorField::Material => handle_key_material(key),
        },
    }
}

/// Handle key events while a dimension field has focus
fn handle_key_dimension(state: &AppState, key: InputKey) -> Option<Message> {
    let current = state.calculator.focused_text()?;

    match key {
        InputKey::Char(c) if is_dimension_char(c) => {
            let mut text = current.to_string();
            text.push(c);
            Some(Message::DimensionInput { text })
        }

        // Delete character
        InputKey::Backspace => {
            let mut text = current.to_string();
            text.pop()?;
            Some(Message::DimensionInput { text })
        }

        // Clear all input
        InputKey::CharCtrl('u') => Some(Message::DimensionInput {
            text: String::new(),
        }),

        // Submit moves on to the next field
        InputKey::Enter => Some(Message::FocusNext),

        _ => None,
    }
}

/// Handle key events while the material selector has focus
fn handle_key_material(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Left => Some(Message::PreviousMaterial),
        InputKey::Right | InputKey::Enter | InputKey::Char(' ') => Some(Message::NextMaterial),

        // 1-4 pick a material directly
        InputKey::Char(c @ '1'..='4') => {
            let idx = c as usize - '1' as usize;
            MaterialType::ALL.get(idx).copied().map(Message::SelectMaterial)
        }

        _ => None,
    }
}
