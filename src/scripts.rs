//! Script path resolution
//!
//! Maps the fixed set of logical script names to files under the scripts
//! directory shipped next to the binary. Paths are computed only; the
//! scripts themselves are never read or run from here.

use crate::error::{ActionError, ActionResult};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

/// Environment variable overriding the scripts directory
pub const SCRIPTS_DIR_VAR: &str = "NIX_ACTION_SCRIPTS_DIR";

/// Shell scripts shipped with the action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Script {
    /// Adds binary cache substituters to nix.conf
    ConfigureSubstituter,
    /// Writes AWS credentials for S3 caches
    ConfigureAws,
    /// Configures git credentials
    ConfigureGit,
    /// Configures GitHub access tokens for Nix
    ConfigureGithub,
    /// Sets up SSH keys and known hosts
    ConfigureSsh,
    /// Snapshots the store paths present before the build
    RecordNixStorePaths,
    /// Pushes store paths added since the snapshot
    PushNewNixStorePaths,
    /// Restarts the daemon to pick up configuration changes
    RestartNixDaemon,
    /// Adds remote builders
    ConfigureBuilders,
    /// Installs the post-build hook
    ConfigurePostBuildHook,
}

impl Script {
    /// All scripts in declaration order
    pub fn all() -> &'static [Self] {
        &[
            Self::ConfigureSubstituter,
            Self::ConfigureAws,
            Self::ConfigureGit,
            Self::ConfigureGithub,
            Self::ConfigureSsh,
            Self::RecordNixStorePaths,
            Self::PushNewNixStorePaths,
            Self::RestartNixDaemon,
            Self::ConfigureBuilders,
            Self::ConfigurePostBuildHook,
        ]
    }

    /// Logical name callers use to refer to the script
    pub fn logical_name(&self) -> &'static str {
        match self {
            Self::ConfigureSubstituter => "configureSubstituter",
            Self::ConfigureAws => "configureAWS",
            Self::ConfigureGit => "configureGit",
            Self::ConfigureGithub => "configureGithub",
            Self::ConfigureSsh => "configureSsh",
            Self::RecordNixStorePaths => "recordNixStorePaths",
            Self::PushNewNixStorePaths => "pushNewNixStorePaths",
            Self::RestartNixDaemon => "restartNixDaemon",
            Self::ConfigureBuilders => "configureBuilders",
            Self::ConfigurePostBuildHook => "configurePostBuildHook",
        }
    }

    /// File name inside the scripts directory
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::ConfigureSubstituter => "configure-substituter.sh",
            Self::ConfigureAws => "configure-aws.sh",
            Self::ConfigureGit => "configure-git.sh",
            Self::ConfigureGithub => "configure-github.sh",
            Self::ConfigureSsh => "configure-ssh.sh",
            Self::RecordNixStorePaths => "record-nix-store-paths.sh",
            Self::PushNewNixStorePaths => "push-new-nix-store-paths.sh",
            Self::RestartNixDaemon => "restart-nix-daemon.sh",
            Self::ConfigureBuilders => "configure-builders.sh",
            Self::ConfigurePostBuildHook => "configure-post-build-hook.sh",
        }
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.logical_name())
    }
}

impl FromStr for Script {
    type Err = ActionError;

    /// Accepts the logical name (`configureAWS`) or the file stem (`configure-aws`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|script| {
                script.logical_name() == s || script.file_name().strip_suffix(".sh") == Some(s)
            })
            .ok_or_else(|| ActionError::UnknownScript(s.to_string()))
    }
}

/// Resolves scripts to paths under a root directory
#[derive(Debug, Clone)]
pub struct PathResolver {
    root: PathBuf,
}

impl PathResolver {
    /// Create a resolver rooted at an explicit scripts directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Create a resolver rooted at `<install dir>/../scripts`
    pub fn from_install_location() -> ActionResult<Self> {
        let exe = std::env::current_exe()
            .map_err(|e| ActionError::io("locating current executable", e))?;
        let install_dir = exe.parent().unwrap_or_else(|| Path::new("."));
        let root = install_dir.join("..").join("scripts");
        debug!("Scripts directory: {}", root.display());
        Ok(Self::new(root))
    }

    /// Scripts directory this resolver points into
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of a known script
    pub fn path(&self, script: Script) -> PathBuf {
        self.root.join(script.file_name())
    }

    /// Resolve a logical script name to its path
    pub fn resolve(&self, logical_name: &str) -> ActionResult<PathBuf> {
        let script: Script = logical_name.parse()?;
        Ok(self.path(script))
    }

    /// Every script with its resolved path
    pub fn all(&self) -> Vec<(Script, PathBuf)> {
        Script::all().iter().map(|&s| (s, self.path(s))).collect()
    }
}
