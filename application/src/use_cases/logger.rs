//! Logger use case
//!
//! Renders events through the configured formatter and forwards the line to
//! a byte sink, gated by the level threshold.

use crate::config::LoggerConfig;
use crate::ports::{byte_sink::ByteSink, error::SinkError};
use plog_domain::{FormatError, LogEvent, LogLevel, render_tags};
use std::sync::{Mutex, RwLock};
use thiserror::Error;

/// Errors that can occur while logging an event
#[derive(Error, Debug)]
pub enum LoggerError {
    #[error("Failed to format event: {0}")]
    Format(#[from] FormatError),

    #[error("Failed to write event: {0}")]
    Sink(#[from] SinkError),
}

/// A named output with its own threshold and rendering settings
///
/// `Logger` is `Sync`: the sink sits behind a mutex held for the whole
/// write, and configuration changes apply from the next event on.
pub struct Logger {
    config: RwLock<LoggerConfig>,
    sink: Mutex<Box<dyn ByteSink>>,
}

impl Logger {
    pub fn new(sink: impl ByteSink + 'static, config: LoggerConfig) -> Self {
        Self::from_boxed(Box::new(sink), config)
    }

    pub fn from_boxed(sink: Box<dyn ByteSink>, config: LoggerConfig) -> Self {
        Self {
            config: RwLock::new(config),
            sink: Mutex::new(sink),
        }
    }

    /// Log an event
    ///
    /// Returns `Ok(false)` if the event was filtered out by the level
    /// threshold, in which case the sink is not touched.
    pub fn log(&self, event: &LogEvent) -> Result<bool, LoggerError> {
        let Some(line) = self.render(event)? else {
            return Ok(false);
        };

        let mut sink = self.sink.lock().map_err(|_| SinkError::Poisoned)?;
        sink.write(line.as_bytes())?;
        Ok(true)
    }

    /// Render an event to the line that would be written, newline included
    pub fn render(&self, event: &LogEvent) -> Result<Option<String>, LoggerError> {
        let config = self
            .config
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if !config.level.accepts(event.level()) {
            return Ok(None);
        }

        let timestamp = config.timestamp_format.render(event.timestamp())?;
        let level = event.level().text(config.color, &config.level_colors);
        let tags = render_tags(event.tags(), config.color, &config.tag_colors);

        let mut line = config
            .formatter
            .format(&timestamp, &level, event.variables(), &tags)?;
        line.push('\n');
        Ok(Some(line))
    }

    pub fn level(&self) -> LogLevel {
        self.config().level
    }

    /// Snapshot of the current configuration
    pub fn config(&self) -> LoggerConfig {
        self.config
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn set_level(&self, level: LogLevel) {
        self.update(|config| config.level = level);
    }

    pub fn set_color(&self, color: bool) {
        self.update(|config| config.color = color);
    }

    /// Replace the whole configuration
    pub fn set_config(&self, new_config: LoggerConfig) {
        self.update(|config| *config = new_config);
    }

    /// Apply an arbitrary change to the configuration
    pub fn update(&self, change: impl FnOnce(&mut LoggerConfig)) {
        let mut config = self
            .config
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        change(&mut config);
    }

    pub fn fatal(&self, message: impl Into<String>) -> Result<bool, LoggerError> {
        self.log(&LogEvent::message(LogLevel::Fatal, message))
    }

    pub fn error(&self, message: impl Into<String>) -> Result<bool, LoggerError> {
        self.log(&LogEvent::message(LogLevel::Error, message))
    }

    pub fn warn(&self, message: impl Into<String>) -> Result<bool, LoggerError> {
        self.log(&LogEvent::message(LogLevel::Warn, message))
    }

    pub fn info(&self, message: impl Into<String>) -> Result<bool, LoggerError> {
        self.log(&LogEvent::message(LogLevel::Info, message))
    }

    pub fn debug(&self, message: impl Into<String>) -> Result<bool, LoggerError> {
        self.log(&LogEvent::message(LogLevel::Debug, message))
    }

    pub fn trace(&self, message: impl Into<String>) -> Result<bool, LoggerError> {
        self.log(&LogEvent::message(LogLevel::Trace, message))
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("config", &self.config())
            .finish_non_exhaustive()
    }
}
