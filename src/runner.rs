//! Runner command files and workflow commands
//!
//! The Actions runner reads `GITHUB_ENV` and `GITHUB_OUTPUT` after each step.
//! Entries use a heredoc form with a random delimiter so values may span
//! multiple lines.

use crate::error::{ActionError, ActionResult};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Runner file collecting environment variables for later steps
pub const ENV_FILE_VAR: &str = "GITHUB_ENV";
/// Runner file collecting step outputs
pub const OUTPUT_FILE_VAR: &str = "GITHUB_OUTPUT";
/// Set to "1" when step debug logging is enabled
pub const RUNNER_DEBUG_VAR: &str = "RUNNER_DEBUG";

/// An append-only runner command file
#[derive(Debug, Clone)]
pub struct RunnerFile {
    path: PathBuf,
}

impl RunnerFile {
    /// Wrap an explicit file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// File named by `var`, if it is set and non-empty
    pub fn from_env(var: &str) -> Option<Self> {
        std::env::var(var)
            .ok()
            .filter(|p| !p.is_empty())
            .map(Self::new)
    }

    /// Path of the file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one `key<<delimiter` entry
    pub fn append(&self, key: &str, value: &str) -> ActionResult<()> {
        let entry = format_entry(key, value)?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| ActionError::io(format!("opening {}", self.path.display()), e))?;

        file.write_all(entry.as_bytes())
            .map_err(|e| ActionError::io(format!("writing {}", self.path.display()), e))?;

        debug!("Wrote {} to {}", key, self.path.display());
        Ok(())
    }
}

/// Format a heredoc entry, rejecting keys or values containing the delimiter
fn format_entry(key: &str, value: &str) -> ActionResult<String> {
    let delimiter = format!("ghadelimiter_{}", uuid::Uuid::new_v4());

    if key.contains(&delimiter) || value.contains(&delimiter) {
        return Err(ActionError::EnvFileDelimiter {
            name: key.to_string(),
        });
    }

    Ok(format!("{key}<<{delimiter}\n{value}\n{delimiter}\n"))
}

/// Format a workflow command such as `::debug::message`
pub fn issue_command(command: &str, message: &str) -> String {
    let escaped = message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A");
    format!("::{command}::{escaped}")
}

/// Whether the runner has step debug logging enabled
pub fn runner_debug_enabled() -> bool {
    std::env::var(RUNNER_DEBUG_VAR).is_ok_and(|v| v == "1")
}
