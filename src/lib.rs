//! Coberturas library
//!
//! Terminal budget calculator for awning and roof-covering installations.

pub mod headless;

// Re-export main entry points
pub use coberturas_tui::run;
pub use headless::run_headless;
