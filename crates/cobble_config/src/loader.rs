//! Manifest file loading and validation.

use crate::error::ConfigError;
use crate::types::ProjectConfig;
use std::path::{Path, PathBuf};

/// The manifest file name looked up at the project root.
pub const MANIFEST_NAME: &str = "cobble.toml";

/// Loads and validates a `cobble.toml` manifest from a project directory.
///
/// Reads `<project_dir>/cobble.toml`, parses it, and validates required fields.
pub fn load_config(project_dir: &Path) -> Result<ProjectConfig, ConfigError> {
    let manifest_path = project_dir.join(MANIFEST_NAME);
    let content = std::fs::read_to_string(&manifest_path)?;
    load_config_from_str(&content)
}

/// Parses and validates a `cobble.toml` manifest from a string.
///
/// Useful for testing without filesystem dependencies.
pub fn load_config_from_str(content: &str) -> Result<ProjectConfig, ConfigError> {
    let config: ProjectConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

/// Walks up from `start` looking for the nearest directory containing `cobble.toml`.
///
/// Returns the directory containing the manifest, or an error if none is found.
pub fn find_project_root(start: &Path) -> Result<PathBuf, ConfigError> {
    let mut current = start.to_path_buf();
    loop {
        if current.join(MANIFEST_NAME).exists() {
            return Ok(current);
        }
        if !current.pop() {
            return Err(ConfigError::NotFound(start.display().to_string()));
        }
    }
}

/// Validates that required fields are present.
fn validate_config(config: &ProjectConfig) -> Result<(), ConfigError> {
    if config.project.name.is_empty() {
        return Err(ConfigError::MissingField("project.name".to_string()));
    }
    Ok(())
}
