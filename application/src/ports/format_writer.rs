//! Port for structural file writers
//!
//! A [`FormatWriter`] owns the whole-file contract of an output format
//! (a JSON array's brackets, a CSV header) and appends one record at a time
//! while keeping that contract intact. Writers keep no state between calls:
//! the file content itself is re-validated on every write, which tolerates
//! pre-existing files and external edits at the cost of extra reads.

use super::{error::SinkError, file_sink::FileSink};

/// Appends a record to a file while maintaining its structure
///
/// Returns the number of bytes written to the file in this call, framing
/// included. Any closure with the same signature is a writer.
pub trait FormatWriter: Send + Sync {
    fn write(&self, file: &mut dyn FileSink, data: &[u8]) -> Result<usize, SinkError>;
}

impl<F> FormatWriter for F
where
    F: Fn(&mut dyn FileSink, &[u8]) -> Result<usize, SinkError> + Send + Sync,
{
    fn write(&self, file: &mut dyn FileSink, data: &[u8]) -> Result<usize, SinkError> {
        self(file, data)
    }
}
