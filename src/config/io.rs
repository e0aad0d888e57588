use crate::config::AppConfig;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Load configuration from `path`, falling back to defaults when the
/// file is missing or malformed. The viewer must still launch.
pub fn load_config(path: &Path) -> AppConfig {
    match fs::read_to_string(path) {
        Ok(data) => match parse_config(&data) {
            Ok(config) => {
                info!(path = %path.display(), "Loaded configuration");
                config
            }
            Err(err) => {
                warn!(path = %path.display(), "Invalid configuration, using defaults: {err}");
                AppConfig::default()
            }
        },
        Err(_) => {
            info!(path = %path.display(), "No configuration file, using defaults");
            AppConfig::default()
        }
    }
}

pub fn parse_config(data: &str) -> Result<AppConfig> {
    toml::from_str(data).context("Failed to parse configuration TOML")
}

pub fn serialize_config(config: &AppConfig) -> Result<String> {
    toml::to_string_pretty(config).context("Failed to serialize configuration")
}

/// Persist the configuration, creating the parent directory if needed.
/// Failures are logged and swallowed: losing a preference write should
/// never take the UI down.
pub fn save_config(path: &Path, config: &AppConfig) {
    let serialized = match serialize_config(config) {
        Ok(serialized) => serialized,
        Err(err) => {
            warn!("Skipping config save: {err}");
            return;
        }
    };
    if let Some(parent) = path.parent() {
        if let Err(err) = fs::create_dir_all(parent) {
            warn!(path = %path.display(), "Could not create config directory: {err}");
            return;
        }
    }
    if let Err(err) = fs::write(path, serialized) {
        warn!(path = %path.display(), "Could not write config: {err}");
    }
}
