//! Action inputs exported as environment variables
//!
//! The runner passes each action input as `INPUT_<NAME>`. The setup scripts
//! read their parameters from normalized `INPUT_*` variables, so every input
//! they need is re-exported here with its default applied.

use crate::error::ActionResult;
use crate::runner::{RunnerFile, ENV_FILE_VAR};
use tracing::debug;

/// Prefix of every input variable
pub const INPUT_PREFIX: &str = "INPUT_";

/// Variable the runner passes an input in (`my input` -> `INPUT_MY_INPUT`)
fn runner_input_var(input: &str) -> String {
    format!("{INPUT_PREFIX}{}", input.replace(' ', "_").to_uppercase())
}

/// Exported variable name for an input (`my-input` -> `INPUT_MY_INPUT`)
pub fn exported_var_name(input: &str) -> String {
    format!("{INPUT_PREFIX}{}", input.to_uppercase().replace('-', "_"))
}

/// Read an action input, trimmed; empty when unset
pub fn get_input(input: &str) -> String {
    std::env::var(runner_input_var(input))
        .map(|v| v.trim().to_string())
        .unwrap_or_default()
}

/// Copies action inputs into the environment
#[derive(Debug, Clone, Default)]
pub struct InputExporter {
    env_file: Option<RunnerFile>,
}

impl InputExporter {
    /// Exporter that also appends to `GITHUB_ENV` when the runner provides it
    pub fn from_env() -> Self {
        Self {
            env_file: RunnerFile::from_env(ENV_FILE_VAR),
        }
    }

    /// Exporter writing to an explicit env file
    pub fn with_env_file(env_file: RunnerFile) -> Self {
        Self {
            env_file: Some(env_file),
        }
    }

    /// Export an input as `INPUT_<NAME>`, falling back to `default_value`
    /// when the input is missing or empty. Returns the exported value.
    pub fn export_variable_from_input(
        &self,
        input: &str,
        default_value: &str,
    ) -> ActionResult<String> {
        let name = exported_var_name(input);
        let value = match get_input(input) {
            v if v.is_empty() => default_value.to_string(),
            v => v,
        };

        debug!("Exporting variable {} to '{}'", name, value);
        self.export_variable(&name, &value)?;
        Ok(value)
    }

    /// Set a variable for this process and, if configured, for later steps
    pub fn export_variable(&self, name: &str, value: &str) -> ActionResult<()> {
        std::env::set_var(name, value);

        if let Some(ref file) = self.env_file {
            file.append(name, value)?;
        }
        Ok(())
    }
}
