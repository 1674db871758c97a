//! Error types for nix-action
//!
//! All modules use `ActionResult<T>` as their return type.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for nix-action operations
pub type ActionResult<T> = Result<T, ActionError>;

/// All errors that can occur in nix-action
#[derive(Error, Debug)]
pub enum ActionError {
    // Script errors
    #[error("Unknown script: {0}")]
    UnknownScript(String),

    // Configuration errors
    #[error("Invalid configuration at {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },

    #[error("Configuration file not found: {0}")]
    ConfigNotFound(PathBuf),

    // Runner file errors
    #[error("Unexpected input: name or value for {name} contains the env file delimiter")]
    EnvFileDelimiter { name: String },

    // IO errors
    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("{0}")]
    User(String),
}

impl ActionError {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::UnknownScript(_) => Some(
                "Valid scripts: configureSubstituter, configureAWS, configureGit, \
                 configureGithub, configureSsh, recordNixStorePaths, pushNewNixStorePaths, \
                 restartNixDaemon, configureBuilders, configurePostBuildHook",
            ),
            Self::ConfigNotFound(_) => Some("Check --config or NIX_ACTION_CONFIG"),
            _ => None,
        }
    }
}
