//! Configuration schema for nix-action
//!
//! Configuration is stored at `~/.config/nix-action/config.toml`

use crate::cache::DEFAULT_CACHE_PATHS;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,

    /// Script location settings
    pub scripts: ScriptsConfig,

    /// Cache settings
    pub cache: CacheConfig,
}

/// General application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log format: "text" or "json"
    pub log_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_format: "text".to_string(),
        }
    }
}

/// Script location settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScriptsConfig {
    /// Scripts directory (defaults to `scripts/` next to the install location)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

/// Cache configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Paths the cache step saves and restores
    pub paths: Vec<String>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            paths: DEFAULT_CACHE_PATHS.iter().map(|p| p.to_string()).collect(),
        }
    }
}
