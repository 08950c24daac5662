//! Sequencer trait, errors and built-in strategy selection

use super::{
    clock::SystemClock, datetime::DateTimeSequencer, increment::IncrementSequencer,
    noop::NoopSequencer,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// Errors raised while computing the next file name
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    #[error("Name format '{0}' has no placeholder")]
    MissingPlaceholder(String),

    #[error("Name format '{0}' has more than one placeholder")]
    MultiplePlaceholders(String),

    #[error("Name format '{format}' has a padding width over {max}: '{width}'")]
    InvalidWidth {
        format: String,
        width: String,
        max: usize,
    },

    #[error("File name '{name}' does not match format '{format}'")]
    NameMismatch { format: String, name: String },

    #[error("Invalid sequence index: {0}")]
    InvalidIndex(String),

    #[error("Sequencer error: {0}")]
    Custom(String),
}

/// Computes the name of the next file in a rotation sequence
///
/// `previous` is the name of the file being rotated away from, or the
/// empty string when the first name of the sequence is requested. Any
/// closure with the same signature is a sequencer.
pub trait Sequencer: Send + Sync {
    fn next_name(&self, format: &str, previous: &str) -> Result<String, SequenceError>;
}

impl<F> Sequencer for F
where
    F: Fn(&str, &str) -> Result<String, SequenceError> + Send + Sync,
{
    fn next_name(&self, format: &str, previous: &str) -> Result<String, SequenceError> {
        self(format, previous)
    }
}

/// Built-in sequencers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SequencerKind {
    /// `app-0.log`, `app-1.log`, ...
    Increment,
    /// `app-2024-05-01T10:00:00.000Z.log`, ...
    DateTime,
    /// Always the format itself (overwrites on every rotation)
    Noop,
}

impl SequencerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SequencerKind::Increment => "increment",
            SequencerKind::DateTime => "datetime",
            SequencerKind::Noop => "noop",
        }
    }

    pub fn sequencer(&self) -> Arc<dyn Sequencer> {
        match self {
            SequencerKind::Increment => Arc::new(IncrementSequencer),
            SequencerKind::DateTime => Arc::new(DateTimeSequencer::<SystemClock>::default()),
            SequencerKind::Noop => Arc::new(NoopSequencer),
        }
    }
}

impl std::fmt::Display for SequencerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_is_sequencer() {
        let reverse = |format: &str, _previous: &str| -> Result<String, SequenceError> {
            Ok(format.chars().rev().collect())
        };
        assert_eq!(reverse.next_name("gol", "").unwrap(), "log");
    }

    #[test]
    fn test_kind_builds_strategy() {
        let seq = SequencerKind::Increment.sequencer();
        assert_eq!(seq.next_name("a-%d", "a-4").unwrap(), "a-5");
        let seq = SequencerKind::Noop.sequencer();
        assert_eq!(seq.next_name("a.log", "a.log").unwrap(), "a.log");
    }

    #[test]
    fn test_kind_serde() {
        let kind: SequencerKind = serde_json::from_str("\"datetime\"").unwrap();
        assert_eq!(kind, SequencerKind::DateTime);
    }
}
