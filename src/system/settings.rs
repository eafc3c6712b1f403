// src/system/settings.rs

use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::{core::paths, models::Settings};

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Filesystem Error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Could not find script-launcher config directory.")]
    ConfigDirNotFound(#[from] paths::PathError),
    #[error("Failed to parse settings.toml: {0}")]
    TomlParse(#[from] toml::de::Error),
    #[error("Failed to serialize settings to TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

/// Loads `settings.toml` from the config directory, writing the defaults on first use.
pub fn load_settings() -> Result<Settings, SettingsError> {
    let settings_path = paths::get_settings_path()?;
    load_settings_from(&settings_path)
}

/// Loads settings from an explicit file, creating it with defaults when missing.
pub fn load_settings_from(settings_path: &Path) -> Result<Settings, SettingsError> {
    if !settings_path.exists() {
        let default_settings = Settings::default();
        let toml_string = toml::to_string_pretty(&default_settings)?;
        fs::write(settings_path, toml_string)?;
        log::debug!("Default settings written to '{}'", settings_path.display());
        Ok(default_settings)
    } else {
        let content = fs::read_to_string(settings_path)?;
        Ok(toml::from_str(&content)?)
    }
}
