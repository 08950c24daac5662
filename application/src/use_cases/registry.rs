//! Named logger registry
//!
//! An explicit, caller-owned map of loggers. Broadcasting an event writes it
//! to every registered logger in name order.

use super::logger::{Logger, LoggerError};
use plog_domain::{LogEvent, LogLevel};
use std::collections::BTreeMap;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Logger '{0}' already exists")]
    AlreadyExists(String),

    #[error("Logger '{0}' not found")]
    NotFound(String),
}

/// Loggers that failed during a broadcast
///
/// The event was still offered to every other logger.
#[derive(Error, Debug)]
#[error("{} logger(s) failed: {}", .failures.len(), failed_names(.failures))]
pub struct BroadcastError {
    /// What happened on the loggers that didn't fail
    pub outcome: BroadcastOutcome,
    pub failures: Vec<(String, LoggerError)>,
}

fn failed_names(failures: &[(String, LoggerError)]) -> String {
    failures
        .iter()
        .map(|(name, _)| name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result of broadcasting one event
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BroadcastOutcome {
    /// Loggers that wrote the event
    pub written: Vec<String>,
    /// Loggers that filtered it out by level
    pub filtered: Vec<String>,
}

#[derive(Debug, Default)]
pub struct LoggerRegistry {
    loggers: BTreeMap<String, Arc<Logger>>,
}

impl LoggerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a logger under a unique name
    pub fn add(
        &mut self,
        name: impl Into<String>,
        logger: Logger,
    ) -> Result<Arc<Logger>, RegistryError> {
        let logger = Arc::new(logger);
        self.add_shared(name, Arc::clone(&logger))?;
        Ok(logger)
    }

    /// Register a logger that is also held elsewhere
    pub fn add_shared(
        &mut self,
        name: impl Into<String>,
        logger: Arc<Logger>,
    ) -> Result<(), RegistryError> {
        let name = name.into();
        if self.loggers.contains_key(&name) {
            return Err(RegistryError::AlreadyExists(name));
        }
        debug!(logger = %name, "Registered logger");
        self.loggers.insert(name, logger);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<Arc<Logger>> {
        self.loggers.get(name).cloned()
    }

    pub fn remove(&mut self, name: &str) -> Result<Arc<Logger>, RegistryError> {
        let logger = self
            .loggers
            .remove(name)
            .ok_or_else(|| RegistryError::NotFound(name.to_string()))?;
        debug!(logger = %name, "Removed logger");
        Ok(logger)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.loggers.contains_key(name)
    }

    /// Registered names in sorted order
    pub fn names(&self) -> Vec<&str> {
        self.loggers.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.loggers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loggers.is_empty()
    }

    /// Write an event to every logger
    ///
    /// A failing logger does not stop the others; all failures are returned
    /// together.
    pub fn broadcast(&self, event: &LogEvent) -> Result<BroadcastOutcome, BroadcastError> {
        let mut outcome = BroadcastOutcome::default();
        let mut failures = Vec::new();

        for (name, logger) in &self.loggers {
            match logger.log(event) {
                Ok(true) => outcome.written.push(name.clone()),
                Ok(false) => outcome.filtered.push(name.clone()),
                Err(e) => {
                    warn!(logger = %name, error = %e, "Failed to write event");
                    failures.push((name.clone(), e));
                }
            }
        }

        if failures.is_empty() {
            Ok(outcome)
        } else {
            Err(BroadcastError { outcome, failures })
        }
    }

    /// Set the level of every registered logger
    pub fn set_level(&self, level: LogLevel) {
        for logger in self.loggers.values() {
            logger.set_level(level);
        }
    }

    pub fn fatal(&self, message: impl Into<String>) -> Result<BroadcastOutcome, BroadcastError> {
        self.broadcast(&LogEvent::message(LogLevel::Fatal, message))
    }

    pub fn error(&self, message: impl Into<String>) -> Result<BroadcastOutcome, BroadcastError> {
        self.broadcast(&LogEvent::message(LogLevel::Error, message))
    }

    pub fn warn(&self, message: impl Into<String>) -> Result<BroadcastOutcome, BroadcastError> {
        self.broadcast(&LogEvent::message(LogLevel::Warn, message))
    }

    pub fn info(&self, message: impl Into<String>) -> Result<BroadcastOutcome, BroadcastError> {
        self.broadcast(&LogEvent::message(LogLevel::Info, message))
    }

    pub fn debug(&self, message: impl Into<String>) -> Result<BroadcastOutcome, BroadcastError> {
        self.broadcast(&LogEvent::message(LogLevel::Debug, message))
    }

    pub fn trace(&self, message: impl Into<String>) -> Result<BroadcastOutcome, BroadcastError> {
        self.broadcast(&LogEvent::message(LogLevel::Trace, message))
    }
}
