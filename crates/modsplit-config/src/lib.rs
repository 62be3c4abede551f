//! modsplit-config: configuration loading and logging setup
//!
//! Loads the module plan, import table and source settings from defaults,
//! `modsplit.toml` and `MODSPLIT__*` environment variables.

pub mod config;
pub mod defaults;
pub mod logging;

pub use config::{AppConfig, LogFormat, LoggingConfig, SourceConfig};
