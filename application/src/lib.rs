//! Application layer for plog
//!
//! This crate contains the sink ports, the logger configuration and the
//! `Logger`/`LoggerRegistry` use cases. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{LoggerConfig, TimestampFormat};
pub use ports::{
    byte_sink::ByteSink, error::SinkError, file_sink::FileSink, format_writer::FormatWriter,
};
pub use use_cases::logger::{Logger, LoggerError};
pub use use_cases::registry::{BroadcastError, BroadcastOutcome, LoggerRegistry, RegistryError};
