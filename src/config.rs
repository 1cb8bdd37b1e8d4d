//! Configuration for the todo store.
//!
//! This module handles the `.todo-store/config.yaml` file which stores
//! host-specific settings: where the backing document lives and whether the
//! operation log is written.

use crate::error::Result;
use crate::paths;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file path relative to the base directory.
pub const CONFIG_FILE_PATH: &str = ".todo-store/config.yaml";

/// Store configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct StoreConfig {
    /// Path to the backing document. None means the default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,

    /// Whether mutating operations are appended to the operation log.
    #[serde(default)]
    pub debug_logging: bool,
}

impl StoreConfig {
    /// Load config from the home directory, returning None if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load() -> Result<Option<Self>> {
        match dirs::home_dir() {
            Some(home) => Self::load_from(&home),
            None => Ok(None),
        }
    }

    /// Load config from a specific base directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load_from(base_dir: &Path) -> Result<Option<Self>> {
        let config_path = base_dir.join(CONFIG_FILE_PATH);
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&config_path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(Some(config))
    }

    /// Save config to a specific base directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to(&self, base_dir: &Path) -> Result<()> {
        let config_path = base_dir.join(CONFIG_FILE_PATH);

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_yaml::to_string(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    /// The backing document path this config resolves to.
    ///
    /// Returns the configured override if set, otherwise the default
    /// location, or `None` if neither can be determined.
    #[must_use]
    pub fn effective_data_file(&self) -> Option<PathBuf> {
        self.data_file.clone().or_else(paths::data_file_path)
    }

    /// Get the config file path for a base directory.
    #[must_use]
    pub fn config_path(base_dir: &Path) -> PathBuf {
        base_dir.join(CONFIG_FILE_PATH)
    }
}
