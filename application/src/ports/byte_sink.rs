//! Port for write-only byte destinations (stdout, rotating files, buffers)

use super::error::SinkError;
use std::sync::{Arc, Mutex};

/// A destination that accepts rendered log lines
///
/// Each call receives one complete record. Implementations either write
/// all of it or report an error; they never buffer across calls.
pub trait ByteSink: Send {
    fn write(&mut self, data: &[u8]) -> Result<usize, SinkError>;
}

impl<S: ByteSink + ?Sized> ByteSink for Box<S> {
    fn write(&mut self, data: &[u8]) -> Result<usize, SinkError> {
        (**self).write(data)
    }
}

/// A sink shared between loggers or threads.
///
/// The lock is held for the whole inner `write`, so for a rotating file the
/// size check, the rotation and the write are one critical section.
impl<S: ByteSink> ByteSink for Arc<Mutex<S>> {
    fn write(&mut self, data: &[u8]) -> Result<usize, SinkError> {
        let mut sink = self.lock().map_err(|_| SinkError::Poisoned)?;
        sink.write(data)
    }
}
