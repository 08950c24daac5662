//! `ByteSink` adapters for `std::io::Write`

use plog_application::{ByteSink, SinkError};
use std::io::{self, Write};

/// Forwards each record to an `io::Write`, flushing after every write
#[derive(Debug)]
pub struct WriterSink<W: Write + Send> {
    inner: W,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write + Send> ByteSink for WriterSink<W> {
    fn write(&mut self, data: &[u8]) -> Result<usize, SinkError> {
        self.inner.write_all(data)?;
        self.inner.flush()?;
        Ok(data.len())
    }
}

/// Standard output; each record is written under the stdout lock
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl ByteSink for StdoutSink {
    fn write(&mut self, data: &[u8]) -> Result<usize, SinkError> {
        let mut out = io::stdout().lock();
        out.write_all(data)?;
        out.flush()?;
        Ok(data.len())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StderrSink;

impl ByteSink for StderrSink {
    fn write(&mut self, data: &[u8]) -> Result<usize, SinkError> {
        let mut err = io::stderr().lock();
        err.write_all(data)?;
        Ok(data.len())
    }
}
