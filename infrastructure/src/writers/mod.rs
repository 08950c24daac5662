//! Structural format writers
//!
//! Each writer appends one record to a [`plog_application::FileSink`]
//! while keeping the whole file valid for its format. Validity is re-read
//! from the file on every call (at least two extra reads per write for JSON
//! and one for CSV), so pre-existing files and external edits are detected.
//! A file that fails validation is never repaired.

pub mod csv;
pub mod json;
pub mod text;

pub use csv::{CSV_HEADER, CsvWriter};
pub use json::{JSON_FOOTER, JSON_HEADER, JsonWriter};
pub use text::TextWriter;

use plog_application::FormatWriter;
use plog_domain::LogFormat;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Built-in format writers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WriterKind {
    #[default]
    Text,
    Json,
    Csv,
}

impl WriterKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            WriterKind::Text => "text",
            WriterKind::Json => "json",
            WriterKind::Csv => "csv",
        }
    }

    pub fn writer(&self) -> Arc<dyn FormatWriter> {
        match self {
            WriterKind::Text => Arc::new(TextWriter),
            WriterKind::Json => Arc::new(JsonWriter),
            WriterKind::Csv => Arc::new(CsvWriter),
        }
    }

    /// Line format whose records this writer expects
    pub fn record_format(&self) -> LogFormat {
        match self {
            WriterKind::Text => LogFormat::Text,
            WriterKind::Json => LogFormat::Json,
            WriterKind::Csv => LogFormat::Csv,
        }
    }
}

impl std::fmt::Display for WriterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
