//! Calculator edit handlers
//!
//! Each handler updates the calculator's local state first and then reports
//! the result to the page through a notification message.

use coberturas_core::MaterialType;

use crate::calculator::CalculatorState;
use crate::message::Message;
use crate::state::AppState;

use super::UpdateResult;

/// Replace the focused dimension's text and report the recomputed area
pub fn handle_dimension_input(state: &mut AppState, text: String) -> UpdateResult {
    match state.calculator.set_focused_text(text) {
        Some(area) => UpdateResult::message(area_changed(&state.calculator, area)),
        None => UpdateResult::none(),
    }
}

/// Select a material and report it
pub fn handle_select_material(state: &mut AppState, material: MaterialType) -> UpdateResult {
    state.calculator.material = material;
    UpdateResult::message(Message::MaterialChanged { material })
}

/// Restore configured defaults and report both area and material
pub fn handle_reset(state: &mut AppState) -> UpdateResult {
    let focus = state.calculator.focus;
    state.calculator = CalculatorState::new(&state.settings.defaults);
    state.calculator.focus = focus;

    let area = state.calculator.area();
    UpdateResult::messages(vec![
        area_changed(&state.calculator, area),
        Message::MaterialChanged {
            material: state.calculator.material,
        },
    ])
}

fn area_changed(calculator: &CalculatorState, area: f64) -> Message {
    Message::AreaChanged {
        area,
        width: calculator.width,
        length: calculator.length,
    }
}
