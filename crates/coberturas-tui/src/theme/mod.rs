//! Centralized theme for the calculator UI.
//!
//! - `palette`: Raw color constants and the per-material colors
//! - `styles`: Semantic style builder functions

pub mod palette;
pub mod styles;
