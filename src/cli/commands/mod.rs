//! CLI command implementations

pub mod cache_key;
pub mod config;
pub mod export_input;
pub mod script;

pub use cache_key::execute as cache_key;
pub use config::execute as config;
pub use export_input::execute as export_input;
pub use script::execute as script;
