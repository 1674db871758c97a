//! Cache key derivation
//!
//! Keys are hierarchical: `nix-cache-<workflow>-<runner>-<job>`. The restore
//! keys drop one trailing component at a time so a cache store can fall back
//! from an exact job match to any cache saved by the same runner and
//! workflow, then the same workflow, then anything.

use crate::context::Context;
use serde::Serialize;
use tracing::debug;

/// Prefix shared by every key this action produces
pub const CACHE_KEY_PREFIX: &str = "nix-cache-";

/// A primary cache key and its ordered restore-key fallbacks
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CacheKey {
    /// Exact key to save under and to try first on restore
    pub primary: String,
    /// Prefixes of `primary`, most specific first
    pub restore_keys: Vec<String>,
}

/// Hex MD5 digest used as a compact fingerprint.
///
/// MD5 keeps keys identical to the ones already stored by earlier runs.
fn fingerprint(input: &str) -> String {
    hex::encode(md5::compute(input.as_bytes()).0)
}

/// Derive the cache key hierarchy for a context
pub fn derive_key(context: &Context) -> CacheKey {
    let workflow_hash = fingerprint(&context.workflow_ref);
    let runner_hash = fingerprint(&context.runner_fingerprint());

    let workflow_prefix = format!("{CACHE_KEY_PREFIX}{workflow_hash}-");
    let runner_prefix = format!("{workflow_prefix}{runner_hash}-");
    let primary = format!("{runner_prefix}{}", context.job_id);

    debug!("Derived cache key {} for {}", primary, context);

    CacheKey {
        primary,
        restore_keys: vec![runner_prefix, workflow_prefix, CACHE_KEY_PREFIX.to_string()],
    }
}

impl CacheKey {
    /// Restore keys joined by newlines, the multi-line input format cache steps accept
    pub fn restore_keys_multiline(&self) -> String {
        self.restore_keys.join("\n")
    }
}
