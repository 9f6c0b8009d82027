//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::{AppPhase, AppState};
use tracing::debug;

use super::{calculator, keys::handle_key, UpdateResult};

/// Process a message and update state
/// Returns follow-up messages, if any
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Resize => UpdateResult::none(),

        // ─────────────────────────────────────────────────────────
        // Calculator Input Messages
        // ─────────────────────────────────────────────────────────
        Message::FocusNext => {
            state.calculator.focus_next();
            UpdateResult::none()
        }
        Message::FocusPrevious => {
            state.calculator.focus_previous();
            UpdateResult::none()
        }
        Message::DimensionInput { text } => calculator::handle_dimension_input(state, text),
        Message::NextMaterial => {
            let material = state.calculator.material.next();
            calculator::handle_select_material(state, material)
        }
        Message::PreviousMaterial => {
            let material = state.calculator.material.previous();
            calculator::handle_select_material(state, material)
        }
        Message::SelectMaterial(material) => calculator::handle_select_material(state, material),
        Message::ResetInputs => calculator::handle_reset(state),

        // ─────────────────────────────────────────────────────────
        // Notifications (page-level shared state)
        // ─────────────────────────────────────────────────────────
        Message::AreaChanged {
            area,
            width,
            length,
        } => {
            debug!("Area changed: {} ({} x {})", area, width, length);
            state.coverage.area = area;
            state.coverage.width = width;
            state.coverage.length = length;
            UpdateResult::none()
        }
        Message::MaterialChanged { material } => {
            debug!("Material changed: {}", material.key());
            state.coverage.material = material;
            UpdateResult::none()
        }
    }
}
