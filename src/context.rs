//! Runner context captured from the process environment
//!
//! The context is read once at startup and passed explicitly into the
//! key derivation, so the derivation itself never touches the environment.

use std::fmt;

/// Environment variable holding the workflow reference
pub const WORKFLOW_REF_VAR: &str = "GITHUB_WORKFLOW_REF";
/// Environment variable holding the runner name
pub const RUNNER_NAME_VAR: &str = "RUNNER_NAME";
/// Environment variable holding the runner operating system
pub const RUNNER_OS_VAR: &str = "RUNNER_OS";
/// Environment variable holding the runner architecture
pub const RUNNER_ARCH_VAR: &str = "RUNNER_ARCH";
/// Environment variable holding the job identifier
pub const JOB_ID_VAR: &str = "GITHUB_JOB";

/// Ambient build context for one invocation.
///
/// Missing variables are represented as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Context {
    /// Workflow reference (e.g. "owner/repo/.github/workflows/ci.yml@refs/heads/main")
    pub workflow_ref: String,
    /// Runner name (e.g. "GitHub Actions 2")
    pub runner_name: String,
    /// Runner operating system (e.g. "Linux")
    pub runner_os: String,
    /// Runner architecture (e.g. "X64")
    pub runner_arch: String,
    /// Job identifier from the workflow file
    pub job_id: String,
}

impl Context {
    /// Build the context from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the context from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).unwrap_or_default();

        Self {
            workflow_ref: get(WORKFLOW_REF_VAR),
            runner_name: get(RUNNER_NAME_VAR),
            runner_os: get(RUNNER_OS_VAR),
            runner_arch: get(RUNNER_ARCH_VAR),
            job_id: get(JOB_ID_VAR),
        }
    }

    /// Runner fingerprint input: name, OS and architecture concatenated as-is
    pub fn runner_fingerprint(&self) -> String {
        format!("{}{}{}", self.runner_name, self.runner_os, self.runner_arch)
    }
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} on {}/{}/{} (job {})",
            self.workflow_ref, self.runner_name, self.runner_os, self.runner_arch, self.job_id
        )
    }
}
