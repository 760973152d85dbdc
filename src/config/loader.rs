//! Configuration loading functionality
//!
//! This module contains functions for loading and validating configuration.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use log::{debug, info};
use serde_yaml::from_str;

use crate::utils::{expand_path, find_project_folder};

use super::model::Config;

/// Loads a configuration from a file
///
/// # Arguments
/// * `file` - Path to the configuration file
///
/// # Returns
/// * `Result<Config>` - The loaded configuration or an error
///
/// # Errors
/// Returns an error if the file cannot be read or if the configuration is invalid
pub fn load_config(file: &Path) -> Result<Config> {
    let file_content = fs::read(file).map_err(|e| {
        anyhow!(
            "Failed to read configuration file {}: {}",
            file.display(),
            e
        )
    })?;

    let content_str = String::from_utf8(file_content).map_err(|e| {
        anyhow!(
            "Configuration file {} contains invalid UTF-8 characters: {}",
            file.display(),
            e
        )
    })?;

    parse_config(&content_str).map_err(|e| anyhow!("{}: {}", file.display(), e))
}

/// Parses and validates configuration text
///
/// An empty document gives the default configuration.
pub fn parse_config(content: &str) -> Result<Config> {
    if content.trim().is_empty() {
        return Ok(Config::default());
    }

    let config: Config = from_str(content).map_err(|e| {
        anyhow!(
            "Failed to parse configuration: {}\nPlease check the YAML syntax.",
            e
        )
    })?;

    config.validate()?;
    Ok(config)
}

/// Finds the configuration file to use
///
/// The given path wins when it exists, otherwise a file with the same name
/// in the platform configuration folder is used.
///
/// # Returns
/// * `Option<PathBuf>` - The file to load, or `None` when neither exists
pub fn locate_config(config: &str) -> Option<PathBuf> {
    let local = expand_path(config);
    if local.exists() {
        return Some(local);
    }

    let folder = match find_project_folder() {
        Ok(folder) => folder,
        Err(e) => {
            debug!("No configuration folder available: {e}");
            return None;
        }
    };
    let fallback = folder.config_dir().join(&local);
    if fallback.exists() {
        return Some(fallback);
    }

    debug!(
        "No configuration at {} or {}",
        local.display(),
        fallback.display()
    );
    None
}

/// Loads the configuration if one exists, the defaults otherwise
///
/// # Errors
/// Returns an error if an existing configuration cannot be loaded
pub fn load_or_default(config: &str) -> Result<Config> {
    match locate_config(config) {
        Some(path) => {
            let loaded = load_config(&path)?;
            info!("Loaded configuration from {}", path.display());
            Ok(loaded)
        }
        None => Ok(Config::default()),
    }
}
