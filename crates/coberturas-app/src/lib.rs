//! coberturas-app - Application state and orchestration for Coberturas
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: key presses become [`Message`]s, [`handler::update`] applies
//! them to [`AppState`], and the TUI renders the state. It also owns
//! configuration loading.

pub mod calculator;
pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod state;

// Re-export primary types
pub use calculator::{parse_dimension, CalculatorField, CalculatorState};
pub use handler::UpdateResult;
pub use input_key::InputKey;
pub use message::Message;
pub use state::{AppPhase, AppState, Coverage};
