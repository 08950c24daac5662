//! Log level value object

use crate::color::{attribute::colorize, color_map::LevelColorMap};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How severe a log event is, and how verbose a logger should be
///
/// Levels are ordered from least to most verbose. A logger configured at
/// level `L` accepts events at any level `E` with `E <= L`, except `None`
/// which is never emitted and, as a logger level, silences everything.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Stop all logs being written
    None,
    /// Errors that stop the program from continuing
    Fatal,
    /// Non-fatal errors
    Error,
    /// Something that needs highlighting but isn't an error
    Warn,
    /// Events and basic information
    #[default]
    Info,
    /// Variables during debugging
    Debug,
    /// Extremely detailed output
    Trace,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid log level: '{0}'")]
pub struct ParseLevelError(pub String);

impl LogLevel {
    pub const ALL: [LogLevel; 7] = [
        LogLevel::None,
        LogLevel::Fatal,
        LogLevel::Error,
        LogLevel::Warn,
        LogLevel::Info,
        LogLevel::Debug,
        LogLevel::Trace,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::None => "NONE",
            LogLevel::Fatal => "FATAL",
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
            LogLevel::Trace => "TRACE",
        }
    }

    /// Whether a logger at this level should emit an event at `event_level`
    pub fn accepts(&self, event_level: LogLevel) -> bool {
        event_level != LogLevel::None && event_level <= *self
    }

    /// Render the level name, colored from `colors` when `color` is set
    pub fn text(&self, color: bool, colors: &LevelColorMap) -> String {
        let attributes = colors.get(*self);
        if color && !attributes.is_empty() {
            colorize(self.as_str(), attributes)
        } else {
            self.as_str().to_string()
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for LogLevel {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LogLevel::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseLevelError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering() {
        assert!(LogLevel::None < LogLevel::Fatal);
        assert!(LogLevel::Warn < LogLevel::Info);
        assert!(LogLevel::Debug < LogLevel::Trace);
    }

    #[test]
    fn test_accepts() {
        assert!(LogLevel::Info.accepts(LogLevel::Error));
        assert!(LogLevel::Info.accepts(LogLevel::Info));
        assert!(!LogLevel::Info.accepts(LogLevel::Debug));
        assert!(!LogLevel::Trace.accepts(LogLevel::None));
        assert!(!LogLevel::None.accepts(LogLevel::Fatal));
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("warn".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        assert_eq!("TRACE".parse::<LogLevel>().unwrap(), LogLevel::Trace);
        assert!("verbose".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_text_with_and_without_color() {
        let colors = LevelColorMap::default();
        assert_eq!(LogLevel::Error.text(false, &colors), "ERROR");
        assert_eq!(LogLevel::Error.text(true, &colors), "\x1b[31mERROR\x1b[0m");
        assert_eq!(LogLevel::None.text(true, &colors), "NONE");
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&LogLevel::Debug).unwrap();
        assert_eq!(json, "\"debug\"");
        let level: LogLevel = serde_json::from_str("\"fatal\"").unwrap();
        assert_eq!(level, LogLevel::Fatal);
    }
}
