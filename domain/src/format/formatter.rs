//! Formatter trait and built-in format selection

use super::{csv::CsvFormatter, json::JsonFormatter, plain::PlainFormatter, text::TextFormatter};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;

/// Errors raised while rendering an event to a string
#[derive(Error, Debug)]
pub enum FormatError {
    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Format error: {0}")]
    Custom(String),
}

/// Renders an already-stringified event into a single line
///
/// The timestamp, level and tags arrive pre-rendered (and possibly
/// colored); variables arrive as raw values. Any closure with the same
/// signature is a formatter.
pub trait Formatter: Send + Sync {
    fn format(
        &self,
        timestamp: &str,
        level: &str,
        variables: &[Value],
        tags: &[String],
    ) -> Result<String, FormatError>;
}

impl<F> Formatter for F
where
    F: Fn(&str, &str, &[Value], &[String]) -> Result<String, FormatError> + Send + Sync,
{
    fn format(
        &self,
        timestamp: &str,
        level: &str,
        variables: &[Value],
        tags: &[String],
    ) -> Result<String, FormatError> {
        self(timestamp, level, variables, tags)
    }
}

/// Built-in log formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable line with level and tag blocks
    #[default]
    Text,
    /// One JSON object per event
    Json,
    /// Comma-separated record matching the CSV file header
    Csv,
    /// Variables only
    Plain,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Text => "text",
            LogFormat::Json => "json",
            LogFormat::Csv => "csv",
            LogFormat::Plain => "plain",
        }
    }

    /// The formatter implementing this format
    pub fn formatter(&self) -> Arc<dyn Formatter> {
        match self {
            LogFormat::Text => Arc::new(TextFormatter),
            LogFormat::Json => Arc::new(JsonFormatter),
            LogFormat::Csv => Arc::new(CsvFormatter),
            LogFormat::Plain => Arc::new(PlainFormatter),
        }
    }
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_closure_is_formatter() {
        let upper = |_: &str, level: &str, variables: &[Value], _: &[String]| {
            Ok::<_, FormatError>(format!("{}:{}", level, variables.len()))
        };
        let out = upper.format("ts", "INFO", &[json!(1), json!(2)], &[]).unwrap();
        assert_eq!(out, "INFO:2");
    }

    #[test]
    fn test_format_selection() {
        let out = LogFormat::Plain
            .formatter()
            .format("ts", "INFO", &[json!("a"), json!(1)], &[])
            .unwrap();
        assert_eq!(out, "a 1");
    }

    #[test]
    fn test_default_is_text() {
        assert_eq!(LogFormat::default(), LogFormat::Text);
    }
}
