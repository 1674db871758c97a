//! nix-action - helper for the Nix CI action
//!
//! Derives Nix store cache keys from the runner environment, resolves the
//! setup script paths and exports action inputs for those scripts.

pub mod cache;
pub mod cli;
pub mod config;
pub mod context;
pub mod error;
pub mod inputs;
pub mod runner;
pub mod scripts;

pub use error::{ActionError, ActionResult};
