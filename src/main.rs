//! Coberturas - Terminal budget calculator for awning and roof coverings
//!
//! This is the binary entry point. All logic lives in the library crates.

use std::path::PathBuf;

use clap::Parser;
use coberturas::headless::HeadlessEvent;
use coberturas_app::config::{self, Settings};
use coberturas_core::MaterialType;
use color_eyre::eyre::{eyre, Result};
use tracing::{info, warn};

/// Coberturas - Budget calculator for awning and roof coverings
#[derive(Parser, Debug)]
#[command(name = "coberturas")]
#[command(about = "Terminal budget calculator for awning and roof coverings", long_about = None)]
struct Args {
    /// Width in metres (overrides the config default)
    #[arg(long, value_name = "METERS")]
    width: Option<f64>,

    /// Length in metres (overrides the config default)
    #[arg(long, value_name = "METERS")]
    length: Option<f64>,

    /// Material key, e.g. lona-pvc (unknown keys fall back to the default)
    #[arg(long, value_name = "KEY")]
    material: Option<String>,

    /// Path to config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print a single JSON quote instead of starting the TUI
    #[arg(long)]
    headless: bool,

    /// Write the default config file and exit
    #[arg(long)]
    init_config: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    if let Err(e) = coberturas_core::logging::init() {
        eprintln!("Failed to initialise logging: {e}");
    }

    if args.init_config {
        return init_config(args.config);
    }

    let settings = match resolve_settings(&args) {
        Ok(settings) => settings,
        Err(e) => {
            if args.headless {
                HeadlessEvent::error(e.to_string(), e.is_fatal()).emit();
            }
            return Err(e.into());
        }
    };

    if args.headless {
        coberturas::run_headless(settings)?;
    } else {
        coberturas::run(settings)?;
    }
    Ok(())
}

/// Config file, then CLI overrides, then sanitizing
fn resolve_settings(args: &Args) -> coberturas_core::Result<Settings> {
    let mut settings = config::load_settings_from(args.config.as_deref())?;

    let material = args.material.as_deref().map(|key| {
        let material = MaterialType::from_key(key);
        if material.key() != key {
            warn!("Unknown material '{}', using '{}'", key, material.key());
        }
        material
    });

    settings
        .defaults
        .apply_overrides(args.width, args.length, material);
    settings.defaults = settings.defaults.sanitized();

    info!(
        "Settings resolved: {}m x {}m, material={}",
        settings.defaults.width,
        settings.defaults.length,
        settings.defaults.material.key()
    );
    Ok(settings)
}

fn init_config(explicit: Option<PathBuf>) -> Result<()> {
    let path = explicit
        .or_else(config::default_config_path)
        .ok_or_else(|| eyre!("No config directory available on this system"))?;

    if config::init_config_file(&path)? {
        println!("Created {}", path.display());
    } else {
        println!("Config already exists at {}", path.display());
    }
    Ok(())
}
