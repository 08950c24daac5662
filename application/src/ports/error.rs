//! Error taxonomy shared by every sink

use plog_domain::SequenceError;
use std::io;
use thiserror::Error;

/// Errors that can occur while writing to a sink
#[derive(Error, Debug)]
pub enum SinkError {
    /// The file doesn't match the structure its format writer expects.
    /// Never repaired automatically.
    #[error("File '{name}' is not valid: {reason}")]
    Corrupt { name: String, reason: String },

    /// The sequencer couldn't produce the next file name
    #[error("Failed to compute next file name: {0}")]
    Sequencing(#[from] SequenceError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// An I/O error after part of a multi-step write had already landed
    #[error("Write interrupted after {written} bytes: {source}")]
    Interrupted { written: usize, source: io::Error },

    #[error("Sink closed")]
    Closed,

    /// No file is open because reopening after a rotation failed
    #[error("No open file: opening '{name}' failed")]
    Unavailable { name: String },

    #[error("Sink lock poisoned")]
    Poisoned,
}

impl SinkError {
    /// Wrap an I/O error raised after `written` bytes of the current call
    pub fn after(written: usize, source: io::Error) -> Self {
        if written == 0 {
            SinkError::Io(source)
        } else {
            SinkError::Interrupted { written, source }
        }
    }

    pub fn corrupt(name: impl Into<String>, reason: impl Into<String>) -> Self {
        SinkError::Corrupt {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Bytes that reached the sink before the failure
    pub fn bytes_written(&self) -> usize {
        match self {
            SinkError::Interrupted { written, .. } => *written,
            _ => 0,
        }
    }

    pub fn is_corrupt(&self) -> bool {
        matches!(self, SinkError::Corrupt { .. })
    }
}
