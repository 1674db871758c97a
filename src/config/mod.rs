//! Configuration management for nix-action

pub mod schema;

pub use schema::Config;

use crate::error::{ActionError, ActionResult};
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration manager
pub struct ConfigManager {
    config_path: PathBuf,
    explicit: bool,
}

impl ConfigManager {
    /// Create a new config manager with default path
    pub fn new() -> Self {
        Self {
            config_path: Self::default_config_path(),
            explicit: false,
        }
    }

    /// Create a config manager with a custom path, which must exist
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            config_path: path,
            explicit: true,
        }
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("nix-action")
            .join("config.toml")
    }

    /// Load configuration, using defaults if the default file does not exist
    pub fn load(&self) -> ActionResult<Config> {
        if !self.config_path.exists() {
            if self.explicit {
                return Err(ActionError::ConfigNotFound(self.config_path.clone()));
            }
            return Ok(Config::default());
        }

        self.load_from_file(&self.config_path)
    }

    /// Load configuration from a specific file
    pub fn load_from_file(&self, path: &Path) -> ActionResult<Config> {
        let content = fs::read_to_string(path)
            .map_err(|e| ActionError::io(format!("reading config from {}", path.display()), e))?;

        toml::from_str(&content).map_err(|e| ActionError::ConfigInvalid {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Get the config file path
    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// Whether the config file exists on disk
    pub fn exists(&self) -> bool {
        self.config_path.exists()
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
