//! Sequencer that never changes the name

use super::sequencer::{SequenceError, Sequencer};

/// Returns the format unchanged
///
/// Every rotation reopens the same file name and, since rotation truncates
/// the new file, discards everything written before it. Combined with a
/// maximum size this keeps only the most recent records: useful for demos
/// and "latest state" files, never for log retention.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSequencer;

impl Sequencer for NoopSequencer {
    fn next_name(&self, format: &str, _previous: &str) -> Result<String, SequenceError> {
        Ok(format.to_string())
    }
}
