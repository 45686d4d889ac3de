//! Configuration loading functionality
//!
//! This module contains functions for locating, loading and saving configuration.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use log::{debug, info};
use serde_yaml::from_str;

use crate::errors::config_parsing_error;
use crate::utils::find_project_folder;

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

    // An empty file is a valid, all-default configuration
    let config: Config = if content_str.trim().is_empty() {
        Config::default()
    } else {
        from_str(&content_str).map_err(|e| {
            config_parsing_error(
                e,
                &format!(
                    "Failed to parse configuration file {}. Please check the YAML syntax.",
                    file.display()
                ),
            )
        })?
    };

    config
        .validate()
        .with_context(|| format!("Invalid configuration in {}", file.display()))?;

    debug!("Configuration loaded from {}", file.display());
    Ok(config)
}

/// Finds the configuration file to use
///
/// The path is used as given if it exists, otherwise it is looked up in the
/// platform configuration directory. No configuration file is created.
///
/// # Returns
/// * `Option<PathBuf>` - The existing file, or `None` if there is none
fn resolve_config_path(config: &Path) -> Option<PathBuf> {
    if config.exists() {
        return Some(config.to_path_buf());
    }

    let folder = match find_project_folder() {
        Ok(folder) => folder,
        Err(e) => {
            debug!("Skipping the platform configuration directory: {e}");
            return None;
        }
    };

    let candidate = folder.config_dir().join(config);
    candidate.exists().then_some(candidate)
}

/// Loads the configuration at `config`, or the defaults if there is no such file
///
/// # Errors
/// Returns an error if an existing file cannot be loaded
pub fn load_or_default(config: &Path) -> Result<Config> {
    match resolve_config_path(config) {
        Some(path) => load_config(&path),
        None => {
            info!(
                "No configuration file {} found, using defaults",
                config.display()
            );
            Ok(Config::default())
        }
    }
}

/// Saves a configuration to a file
///
/// Parent directories are created. An existing file is never overwritten.
///
/// # Errors
/// Returns an error if the file exists or cannot be written
pub fn save_config(config: &Config, output_path: &Path) -> Result<()> {
    if output_path.exists() {
        return Err(anyhow!(
            "Configuration file {} already exists",
            output_path.display()
        ));
    }

    let yaml = serde_yaml::to_string(config)?;

    // Create parent directories if they don't exist
    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    fs::write(output_path, yaml)
        .with_context(|| format!("Failed to write configuration file {}", output_path.display()))?;
    debug!("Configuration saved to {}", output_path.display());

    Ok(())
}
