//! Settings loader for config.toml

use super::types::Settings;
use coberturas_core::prelude::*;
use std::path::{Path, PathBuf};

const CONFIG_DIR: &str = "coberturas";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_CONFIG: &str = r#"# Coberturas Configuration

[defaults]
width = 30.0                        # metres
length = 20.0                       # metres
# One of: policarbonato-alveolar, lona-pvc, telha-translucida, lona-premium
material = "policarbonato-alveolar"

[ui]
show_grid = true                    # grid texture in the coverage drawing
"#;

/// Default location: `<config_dir>/coberturas/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILENAME))
}

/// Parse a config file, reporting read and parse failures
pub fn read_settings(config_path: &Path) -> Result<Settings> {
    let content = std::fs::read_to_string(config_path).map_err(|e| {
        Error::config(format!("Failed to read {}: {}", config_path.display(), e))
    })?;

    toml::from_str::<Settings>(&content)
        .map_err(|e| Error::config_invalid(format!("{}: {}", config_path.display(), e)))
}

/// Load settings from a config file
///
/// Returns default settings if the file doesn't exist or can't be parsed.
pub fn load_settings(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    let settings = match read_settings(config_path) {
        Ok(settings) => {
            debug!("Loaded settings from {:?}", config_path);
            settings
        }
        Err(e) => {
            warn!("{}; using defaults", e);
            Settings::default()
        }
    };

    Settings {
        defaults: settings.defaults.sanitized(),
        ..settings
    }
}

/// Resolve and load settings
///
/// An explicitly requested path must exist; the default location is optional.
pub fn load_settings_from(explicit: Option<&Path>) -> Result<Settings> {
    match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(Error::config_not_found(path));
            }
            Ok(load_settings(path))
        }
        None => Ok(default_config_path()
            .map(|path| load_settings(&path))
            .unwrap_or_default()),
    }
}

/// Write a commented default config file if none exists
///
/// Returns `true` when a file was created.
pub fn init_config_file(config_path: &Path) -> Result<bool> {
    if config_path.exists() {
        debug!("Config file already exists at {:?}", config_path);
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
    }

    std::fs::write(config_path, DEFAULT_CONFIG)
        .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;

    info!("Created default config at {:?}", config_path);
    Ok(true)
}
