//! Cache-key command - derive the Nix store cache key for this job

use crate::cache::{derive_key, CacheKey};
use crate::cli::args::{CacheKeyArgs, OutputFormat};
use crate::config::Config;
use crate::context::Context;
use crate::error::{ActionError, ActionResult};
use crate::runner::{RunnerFile, OUTPUT_FILE_VAR};
use tracing::info;

/// Execute the cache-key command
pub fn execute(args: CacheKeyArgs, config: &Config) -> ActionResult<()> {
    let context = Context::from_env();
    let key = derive_key(&context);

    match args.format {
        OutputFormat::Plain => print_plain(&key),
        OutputFormat::Json => print_json(&key, &config.cache.paths)?,
    }

    if args.github_output {
        write_outputs(&key, &config.cache.paths)?;
    }

    Ok(())
}

fn print_plain(key: &CacheKey) {
    println!("{}", key.primary);
    for restore in &key.restore_keys {
        println!("{}", restore);
    }
}

fn print_json(key: &CacheKey, paths: &[String]) -> ActionResult<()> {
    #[derive(serde::Serialize)]
    struct CacheKeyJson<'a> {
        #[serde(flatten)]
        key: &'a CacheKey,
        paths: &'a [String],
    }

    println!(
        "{}",
        serde_json::to_string_pretty(&CacheKeyJson { key, paths })?
    );
    Ok(())
}

fn write_outputs(key: &CacheKey, paths: &[String]) -> ActionResult<()> {
    let Some(output) = RunnerFile::from_env(OUTPUT_FILE_VAR) else {
        return Err(ActionError::User(format!(
            "--github-output requires {OUTPUT_FILE_VAR} to be set"
        )));
    };

    output.append("key", &key.primary)?;
    output.append("restore-keys", &key.restore_keys_multiline())?;
    output.append("paths", &paths.join("\n"))?;

    info!("Wrote cache key outputs to {}", output.path().display());
    Ok(())
}
