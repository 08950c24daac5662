//! Configuration file loading for plog
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `PLOG_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./plog.toml` or `./.plog.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/plog/config.toml`
//! 5. Default values
//!
//! [`RegistryBuilder`] turns the merged configuration into loggers.

mod builder;
mod file_config;
mod loader;

pub use builder::{DEFAULT_LOGGER, RegistryBuilder};
pub use file_config::{
    ConfigValidationError, FileConfig, FileLoggerConfig, FileOutputKind, FileRotationConfig,
};
pub use loader::ConfigLoader;
