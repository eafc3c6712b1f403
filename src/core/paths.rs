// src/core/paths.rs

use crate::constants::{CONFIG_DIR_NAME, SETTINGS_FILENAME, STORE_FILENAME, STORE_PATH_ENV};
use crate::models::Settings;
use std::env;
use std::fs;
use std::path::PathBuf;
use std::sync::OnceLock;
use thiserror::Error;

static CONFIG_DIR: OnceLock<PathBuf> = OnceLock::new();

#[derive(Error, Debug)]
pub enum PathError {
    #[error("Could not find system config directory.")]
    ConfigDirNotFound,
    #[error("Could not create config directory at '{path}': {source}")]
    ConfigDirCreation {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to expand store path '{template}': {message}")]
    Expansion { template: String, message: String },
}

/// Returns the configuration directory (`<config dir>/script-launcher`),
/// creating it if it doesn't exist.
///
/// Memoized: only the first call touches the filesystem.
pub fn get_config_dir() -> Result<PathBuf, PathError> {
    if let Some(path) = CONFIG_DIR.get() {
        return Ok(path.clone());
    }

    let config_path = dirs::config_dir()
        .ok_or(PathError::ConfigDirNotFound)?
        .join(CONFIG_DIR_NAME);

    if !config_path.exists() {
        fs::create_dir_all(&config_path).map_err(|e| PathError::ConfigDirCreation {
            path: config_path.display().to_string(),
            source: e,
        })?;
    }

    Ok(CONFIG_DIR.get_or_init(|| config_path).clone())
}

/// Path of `settings.toml`.
pub fn get_settings_path() -> Result<PathBuf, PathError> {
    get_config_dir().map(|dir| dir.join(SETTINGS_FILENAME))
}

/// Resolves the catalogue location with clear priority:
/// `SCRIPT_LAUNCHER_STORE` > `store_path` in settings > `<config dir>/commands.toml`.
pub fn get_store_path(settings: &Settings) -> Result<PathBuf, PathError> {
    let from_env = env::var(STORE_PATH_ENV).ok().filter(|v| !v.trim().is_empty());
    match from_env.or_else(|| settings.store_path.clone()) {
        Some(template) => expand_path(&template),
        None => get_config_dir().map(|dir| dir.join(STORE_FILENAME)),
    }
}

/// Expands `~` and environment variables (`$VAR`, `${VAR}`) in a path.
pub fn expand_path(template: &str) -> Result<PathBuf, PathError> {
    let expanded = shellexpand::full(template).map_err(|e| PathError::Expansion {
        template: template.to_string(),
        message: e.to_string(),
    })?;
    Ok(PathBuf::from(expanded.into_owned()))
}
