//! CLI argument definitions using clap derive

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// nix-action - helper for the Nix CI action
///
/// Derives Nix store cache keys, resolves setup script paths and exports
/// action inputs for the scripts to read.
#[derive(Parser, Debug)]
#[command(name = "nix-action")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true, env = "NIX_ACTION_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Derive the cache key and restore keys from the runner environment
    CacheKey(CacheKeyArgs),

    /// Resolve the path of a setup script
    Script(ScriptArgs),

    /// Export action inputs as INPUT_* environment variables
    ExportInput(ExportInputArgs),

    /// Show configuration
    Config(ConfigArgs),
}

/// Arguments for the cache-key command
#[derive(Parser, Debug)]
pub struct CacheKeyArgs {
    /// Output format
    #[arg(short, long, default_value = "plain")]
    pub format: OutputFormat,

    /// Also write key, restore-keys and paths to $GITHUB_OUTPUT
    #[arg(long)]
    pub github_output: bool,
}

/// Arguments for the script command
#[derive(Parser, Debug)]
pub struct ScriptArgs {
    /// Logical script name (e.g. configureAWS); lists all scripts when omitted
    pub name: Option<String>,

    /// Scripts directory (defaults to config, then the install location)
    #[arg(long, env = "NIX_ACTION_SCRIPTS_DIR")]
    pub scripts_dir: Option<PathBuf>,
}

/// Arguments for the export-input command
#[derive(Parser, Debug)]
pub struct ExportInputArgs {
    /// Inputs to export (NAME or NAME=DEFAULT)
    #[arg(required = true, value_parser = parse_input_spec)]
    pub inputs: Vec<(String, String)>,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Subcommand for config
    #[command(subcommand)]
    pub action: Option<ConfigAction>,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,
}

/// Output format for cache-key
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Primary key then restore keys, one per line
    Plain,
    /// JSON object
    Json,
}

/// Parse an input in NAME or NAME=DEFAULT format
fn parse_input_spec(s: &str) -> Result<(String, String), String> {
    let (name, default) = match s.find('=') {
        Some(pos) => (&s[..pos], &s[pos + 1..]),
        None => (s, ""),
    };
    if name.is_empty() {
        return Err(format!("invalid input '{s}': name is empty"));
    }
    Ok((name.to_string(), default.to_string()))
}
