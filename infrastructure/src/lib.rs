//! Infrastructure layer for plog
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: real and in-memory files, the rotating file
//! sink, the structural format writers, stream sinks and configuration
//! file loading.

pub mod config;
pub mod file;
pub mod sinks;
pub mod writers;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, DEFAULT_LOGGER, FileConfig, FileLoggerConfig,
    FileOutputKind, FileRotationConfig, RegistryBuilder,
};
pub use file::{MemoryFile, OsFile, RotatingFile, RotatingFileConfig};
pub use sinks::{StderrSink, StdoutSink, WriterSink};
pub use writers::{CsvWriter, JsonWriter, TextWriter, WriterKind};
