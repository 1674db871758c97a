//! Script command - resolve setup script paths

use crate::cli::args::ScriptArgs;
use crate::config::Config;
use crate::error::ActionResult;
use crate::scripts::PathResolver;
use tracing::debug;

/// Execute the script command
pub fn execute(args: ScriptArgs, config: &Config) -> ActionResult<()> {
    let resolver = match args.scripts_dir.or_else(|| config.scripts.dir.clone()) {
        Some(dir) => {
            debug!("Using scripts directory {}", dir.display());
            PathResolver::new(dir)
        }
        None => PathResolver::from_install_location()?,
    };

    match args.name {
        Some(name) => println!("{}", resolver.resolve(&name)?.display()),
        None => {
            for (script, path) in resolver.all() {
                println!("{:<24} {}", script, path.display());
            }
        }
    }

    Ok(())
}
