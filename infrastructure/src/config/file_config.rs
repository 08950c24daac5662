//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.
//!
//! ```toml
//! [loggers.console]
//! level = "debug"
//!
//! [loggers.audit]
//! output = "file"
//! level = "info"
//!
//! [loggers.audit.file]
//! name_format = "logs/audit-%03d.json"
//! writer = "json"
//! sequencer = "increment"
//! max_size = 1048576
//! ```

use crate::writers::WriterKind;
use plog_domain::{Attribute, LogFormat, LogLevel, SequencerKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("logger '{logger}': name_format cannot be empty")]
    EmptyNameFormat { logger: String },

    #[error("logger '{logger}': output = \"file\" requires a [loggers.{logger}.file] section")]
    MissingFileSection { logger: String },

    #[error("logger '{logger}': unknown level '{level}' in level_colors")]
    UnknownLevel { logger: String, level: String },

    #[error("logger '{logger}': invalid name_format: {source}")]
    InvalidNameFormat {
        logger: String,
        source: plog_domain::SequenceError,
    },

    #[error(transparent)]
    Registry(#[from] plog_application::RegistryError),
}

/// Complete configuration file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Loggers by name
    pub loggers: BTreeMap<String, FileLoggerConfig>,
}

/// Where a logger writes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileOutputKind {
    #[default]
    Stdout,
    Stderr,
    File,
}

/// Raw logger configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggerConfig {
    pub output: FileOutputKind,
    pub level: LogLevel,
    /// Line format; defaults to `text` on streams and to the writer's
    /// record format for files
    pub format: Option<LogFormat>,
    /// ANSI colors; defaults to on for streams and off for files
    pub color: Option<bool>,
    /// chrono `strftime` pattern; RFC3339 when unset
    pub timestamp_format: Option<String>,
    /// Replaces the built-in color of the listed levels (keyed by level name)
    pub level_colors: BTreeMap<String, Vec<Attribute>>,
    pub tag_colors: BTreeMap<String, Vec<Attribute>>,
    /// Required when `output = "file"`
    pub file: Option<FileRotationConfig>,
}

/// Raw rotating file configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRotationConfig {
    /// File name, or a template with one placeholder when a sequencer is set
    pub name_format: String,
    pub writer: WriterKind,
    pub sequencer: Option<SequencerKind>,
    /// Rotation threshold in bytes (0 = never rotate)
    pub max_size: u64,
}

impl FileLoggerConfig {
    /// Line format after applying the output-dependent default
    pub fn effective_format(&self) -> LogFormat {
        match (self.format, &self.file) {
            (Some(format), _) => format,
            (None, Some(file)) if self.output == FileOutputKind::File => {
                file.writer.record_format()
            }
            _ => LogFormat::Text,
        }
    }

    /// Color setting after applying the output-dependent default
    pub fn effective_color(&self) -> bool {
        self.color.unwrap_or(self.output != FileOutputKind::File)
    }
}
