//! Logger configuration

use chrono::{DateTime, SecondsFormat, Utc};
use plog_domain::{FormatError, Formatter, LevelColorMap, LogFormat, LogLevel, TagColorMap};
use std::fmt::Write;
use std::sync::Arc;

/// How event timestamps are rendered
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TimestampFormat {
    /// `2006-01-02T15:04:05Z`
    #[default]
    Rfc3339,
    /// A chrono `strftime` pattern, e.g. `%d/%m/%Y %H:%M`
    Custom(String),
}

impl TimestampFormat {
    pub fn render(&self, at: DateTime<Utc>) -> Result<String, FormatError> {
        match self {
            TimestampFormat::Rfc3339 => Ok(at.to_rfc3339_opts(SecondsFormat::Secs, true)),
            TimestampFormat::Custom(pattern) => {
                let mut out = String::new();
                write!(out, "{}", at.format(pattern)).map_err(|_| {
                    FormatError::Custom(format!("invalid timestamp format '{}'", pattern))
                })?;
                Ok(out)
            }
        }
    }
}

/// All settings of a [`crate::Logger`]
#[derive(Clone)]
pub struct LoggerConfig {
    /// Most verbose level that is emitted
    pub level: LogLevel,
    /// Renders events into lines
    pub formatter: Arc<dyn Formatter>,
    pub timestamp_format: TimestampFormat,
    /// Color the level and tags with ANSI escapes
    pub color: bool,
    pub level_colors: LevelColorMap,
    pub tag_colors: TagColorMap,
}

impl LoggerConfig {
    /// Defaults for terminal output: info level, colored text
    pub fn new() -> Self {
        Self {
            level: LogLevel::Info,
            formatter: LogFormat::Text.formatter(),
            timestamp_format: TimestampFormat::Rfc3339,
            color: true,
            level_colors: LevelColorMap::default(),
            tag_colors: TagColorMap::new(),
        }
    }

    /// Defaults for file output: same as [`LoggerConfig::new`] without color
    pub fn file_defaults(format: LogFormat) -> Self {
        Self::new().with_format(format).with_color(false)
    }

    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.formatter = format.formatter();
        self
    }

    pub fn with_formatter(mut self, formatter: Arc<dyn Formatter>) -> Self {
        self.formatter = formatter;
        self
    }

    pub fn with_timestamp_format(mut self, timestamp_format: TimestampFormat) -> Self {
        self.timestamp_format = timestamp_format;
        self
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn with_level_colors(mut self, level_colors: LevelColorMap) -> Self {
        self.level_colors = level_colors;
        self
    }

    pub fn with_tag_colors(mut self, tag_colors: TagColorMap) -> Self {
        self.tag_colors = tag_colors;
        self
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for LoggerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoggerConfig")
            .field("level", &self.level)
            .field("timestamp_format", &self.timestamp_format)
            .field("color", &self.color)
            .finish_non_exhaustive()
    }
}
