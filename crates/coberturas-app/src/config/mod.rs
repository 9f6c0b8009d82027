//! Configuration file parsing for Coberturas
//!
//! Supports a single `config.toml`, either at an explicit path or at
//! `<config_dir>/coberturas/config.toml`.

pub mod settings;
pub mod types;

pub use settings::{
    default_config_path, init_config_file, load_settings, load_settings_from, read_settings,
};
pub use types::*;
