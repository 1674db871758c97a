//! nix-action - helper for the Nix CI action
//!
//! CLI entry point that dispatches to subcommands.

use clap::Parser;
use console::style;
use nix_action::cli::{Cli, Commands};
use nix_action::config::{Config, ConfigManager};
use nix_action::error::ActionResult;
use nix_action::runner::{issue_command, runner_debug_enabled};
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            if let Some(hint) = e.hint() {
                eprintln!("{} {}", style("Hint:").yellow(), hint);
            }
            // Annotate the workflow step when running under Actions
            if std::env::var("GITHUB_ACTIONS").is_ok_and(|v| v == "true") {
                println!("{}", issue_command("error", &e.to_string()));
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> ActionResult<()> {
    let cli = Cli::parse();

    let config_manager = match cli.config {
        Some(ref path) => ConfigManager::with_path(path.clone()),
        None => ConfigManager::new(),
    };
    let config = config_manager.load()?;

    init_logging(cli.verbose, &config);
    if config_manager.exists() {
        debug!("Loaded configuration from {}", config_manager.path().display());
    } else {
        debug!(
            "Config file {} not found, using defaults",
            config_manager.path().display()
        );
    }

    match cli.command {
        Commands::CacheKey(args) => nix_action::cli::commands::cache_key(args, &config),
        Commands::Script(args) => nix_action::cli::commands::script(args, &config),
        Commands::ExportInput(args) => nix_action::cli::commands::export_input(args),
        Commands::Config(args) => {
            nix_action::cli::commands::config(args, &config, &config_manager)
        }
    }
}

/// Initialize logging: 0 = warn, 1 = info, 2+ or RUNNER_DEBUG = debug
fn init_logging(verbose: u8, config: &Config) {
    let level = if runner_debug_enabled() {
        2
    } else {
        verbose
    };
    let filter = match level {
        0 => EnvFilter::new("nix_action=warn"),
        1 => EnvFilter::new("nix_action=info"),
        _ => EnvFilter::new("nix_action=debug"),
    };

    // stdout carries command results, logs go to stderr
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time();

    if config.general.log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}
