//! Application-level configuration.
//!
//! - [`LoggerConfig`]: level threshold, formatter, timestamp layout and colors of a logger
//! - [`TimestampFormat`]: RFC3339 or a custom `strftime` pattern

pub mod logger_config;

pub use logger_config::{LoggerConfig, TimestampFormat};
