//! Tests for handler module

use super::*;
use crate::calculator::CalculatorField;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppPhase, AppState};
use coberturas_core::MaterialType;

/// Run a message and all its follow-ups
fn run(state: &mut AppState, message: Message) {
    let mut pending = vec![message];
    while !pending.is_empty() {
        let msg = pending.remove(0);
        pending.extend(update(state, msg).messages);
    }
}

fn state_focused_on(field: CalculatorField) -> AppState {
    let mut state = AppState::new();
    state.calculator.focus = field;
    state
}

// ─────────────────────────────────────────────────────────
// Quit
// ─────────────────────────────────────────────────────────

#[test]
fn test_quit_message_sets_quitting_phase() {
    let mut state = AppState::new();
    assert_ne!(state.phase, AppPhase::Quitting);

    update(&mut state, Message::Quit);

    assert_eq!(state.phase, AppPhase::Quitting);
    assert!(state.should_quit());
}

#[test]
fn test_q_escape_and_ctrl_c_quit() {
    let state = AppState::new();
    for key in [InputKey::Char('q'), InputKey::Esc, InputKey::CharCtrl('c')] {
        assert_eq!(handle_key(&state, key), Some(Message::Quit));
    }
}

// ─────────────────────────────────────────────────────────
// Focus
// ─────────────────────────────────────────────────────────

#[test]
fn test_tab_and_arrows_move_focus() {
    let state = AppState::new();
    assert_eq!(handle_key(&state, InputKey::Tab), Some(Message::FocusNext));
    assert_eq!(handle_key(&state, InputKey::Down), Some(Message::FocusNext));
    assert_eq!(handle_key(&state, InputKey::BackTab), Some(Message::FocusPrevious));
    assert_eq!(handle_key(&state, InputKey::Up), Some(Message::FocusPrevious));
}

#[test]
fn test_enter_on_dimension_moves_focus() {
    let state = AppState::new();
    assert_eq!(handle_key(&state, InputKey::Enter), Some(Message::FocusNext));
}

#[test]
fn test_focus_messages_update_calculator() {
    let mut state = AppState::new();
    update(&mut state, Message::FocusNext);
    assert_eq!(state.calculator.focus, CalculatorField::Length);
    update(&mut state, Message::FocusPrevious);
    assert_eq!(state.calculator.focus, CalculatorField::Width);
}

// ─────────────────────────────────────────────────────────
// Dimension editing
// ─────────────────────────────────────────────────────────

#[test]
fn test_digit_appends_to_focused_field() {
    let state = AppState::new();
    assert_eq!(
        handle_key(&state, InputKey::Char('5')),
        Some(Message::DimensionInput {
            text: "305".to_string()
        })
    );
}

#[test]
fn test_dot_appends_to_focused_field() {
    let state = state_focused_on(CalculatorField::Length);
    assert_eq!(
        handle_key(&state, InputKey::Char('.')),
        Some(Message::DimensionInput {
            text: "20.".to_string()
        })
    );
}

#[test]
fn test_minus_and_letters_are_ignored() {
    let state = AppState::new();
    assert_eq!(handle_key(&state, InputKey::Char('-')), None);
    assert_eq!(handle_key(&state, InputKey::Char('x')), None);
}

#[test]
fn test_backspace_on_empty_field_is_ignored() {
    let mut state = AppState::new();
    state.calculator.set_width_text("");
    assert_eq!(handle_key(&state, InputKey::Backspace), None);
}

#[test]
fn test_ctrl_u_clears_field() {
    let state = AppState::new();
    assert_eq!(
        handle_key(&state, InputKey::CharCtrl('u')),
        Some(Message::DimensionInput {
            text: String::new()
        })
    );
}

#[test]
fn test_dimension_input_reports_area() {
    let mut state = AppState::new();

    let result = update(
        &mut state,
        Message::DimensionInput {
            text: "10".to_string(),
        },
    );

    assert_eq!(state.calculator.width, 10.0);
    assert_eq!(
        result.messages,
        vec![Message::AreaChanged {
            area: 200.0,
            width: 10.0,
            length: 20.0
        }]
    );
    // Page state only changes once the notification is processed
    assert_eq!(state.coverage.area, 600.0);
}

#[test]
fn test_area_changed_updates_coverage() {
    let mut state = AppState::new();
    update(
        &mut state,
        Message::AreaChanged {
            area: 12.0,
            width: 3.0,
            length: 4.0,
        },
    );
    assert_eq!(state.coverage.area, 12.0);
    assert_eq!(state.coverage.width, 3.0);
    assert_eq!(state.coverage.length, 4.0);
}

#[test]
fn test_empty_width_zeroes_area_regardless_of_length() {
    let mut state = AppState::new();
    run(&mut state, Message::DimensionInput { text: String::new() });

    assert_eq!(state.calculator.width, 0.0);
    assert_eq!(state.coverage.area, 0.0);
    assert_eq!(state.calculator.length, 20.0);
}

#[test]
fn test_non_numeric_length_zeroes_area() {
    let mut state = state_focused_on(CalculatorField::Length);
    run(&mut state, Message::DimensionInput { text: "abc".into() });

    assert_eq!(state.calculator.length, 0.0);
    assert_eq!(state.coverage.area, 0.0);
}

#[test]
fn test_typing_sequence() {
    let mut state = AppState::new();
    run(&mut state, Message::Key(InputKey::CharCtrl('u')));
    for c in ['2', '.', '5'] {
        run(&mut state, Message::Key(InputKey::Char(c)));
    }

    assert_eq!(state.calculator.width_input, "2.5");
    assert_eq!(state.coverage.area, 50.0);
    assert_eq!(state.coverage.width, 2.5);
}

#[test]
fn test_dimension_input_with_material_focus_is_noop() {
    let mut state = state_focused_on(CalculatorField::Material);
    let result = update(&mut state, Message::DimensionInput { text: "9".into() });
    assert!(result.messages.is_empty());
    assert_eq!(state.calculator.width, 30.0);
}

// ─────────────────────────────────────────────────────────
// Material selection
// ─────────────────────────────────────────────────────────

#[test]
fn test_material_keys() {
    let state = state_focused_on(CalculatorField::Material);
    assert_eq!(handle_key(&state, InputKey::Right), Some(Message::NextMaterial));
    assert_eq!(handle_key(&state, InputKey::Char(' ')), Some(Message::NextMaterial));
    assert_eq!(handle_key(&state, InputKey::Left), Some(Message::PreviousMaterial));
    assert_eq!(
        handle_key(&state, InputKey::Char('3')),
        Some(Message::SelectMaterial(MaterialType::TelhaTranslucida))
    );
    assert_eq!(handle_key(&state, InputKey::Char('5')), None);
}

#[test]
fn test_digits_edit_dimension_not_material_when_width_focused() {
    let state = AppState::new();
    assert!(matches!(
        handle_key(&state, InputKey::Char('3')),
        Some(Message::DimensionInput { .. })
    ));
}

#[test]
fn test_next_material_reports_change() {
    let mut state = AppState::new();
    let result = update(&mut state, Message::NextMaterial);

    assert_eq!(state.calculator.material, MaterialType::LonaPvc);
    assert_eq!(
        result.messages,
        vec![Message::MaterialChanged {
            material: MaterialType::LonaPvc
        }]
    );
}

#[test]
fn test_previous_material_wraps() {
    let mut state = AppState::new();
    run(&mut state, Message::PreviousMaterial);
    assert_eq!(state.coverage.material, MaterialType::LonaPremium);
}

#[test]
fn test_material_change_reprices_budget() {
    let mut state = AppState::new();
    run(&mut state, Message::SelectMaterial(MaterialType::LonaPvc));

    let budget = state.coverage.budget();
    assert!((budget.material_subtotal - 51_000.0).abs() < 1e-6);
    assert_eq!(format!("{:.2}", budget.financed_total), "80640.00");
}

// ─────────────────────────────────────────────────────────
// Reset
// ─────────────────────────────────────────────────────────

#[test]
fn test_reset_restores_defaults_and_keeps_focus() {
    let mut state = state_focused_on(CalculatorField::Length);
    run(&mut state, Message::DimensionInput { text: "1".into() });
    run(&mut state, Message::SelectMaterial(MaterialType::LonaPremium));

    let result = update(&mut state, Message::ResetInputs);

    assert_eq!(state.calculator.length_input, "20");
    assert_eq!(state.calculator.focus, CalculatorField::Length);
    assert_eq!(result.messages.len(), 2);

    for msg in result.messages {
        update(&mut state, msg);
    }
    assert_eq!(state.coverage.area, 600.0);
    assert_eq!(state.coverage.material, MaterialType::PolicarbonatoAlveolar);
}

#[test]
fn test_r_key_resets() {
    let state = AppState::new();
    assert_eq!(handle_key(&state, InputKey::Char('r')), Some(Message::ResetInputs));
}
