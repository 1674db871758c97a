//! Cache key hierarchy for the Nix store cache
//!
//! The action saves `~/.cache/nix` under a key derived from the workflow,
//! the runner and the job. Restore falls back through progressively broader
//! prefixes of that key.
//!
//! | Tier | Key | Matches |
//! |------|-----|---------|
//! | primary | `nix-cache-<wf>-<runner>-<job>` | exact job |
//! | 1 | `nix-cache-<wf>-<runner>-` | same runner and workflow |
//! | 2 | `nix-cache-<wf>-` | same workflow |
//! | 3 | `nix-cache-` | any |

pub mod key;

pub use key::{derive_key, CacheKey, CACHE_KEY_PREFIX};

/// Directories saved and restored by the cache step when not configured
pub const DEFAULT_CACHE_PATHS: &[&str] = &["~/.cache/nix"];
