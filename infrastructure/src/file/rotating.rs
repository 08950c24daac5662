//! Size-based rotating file sink
//!
//! A [`RotatingFile`] owns at most one open file at a time. Before every
//! write it checks whether the record would push the current file past
//! `max_size`; if so it asks the sequencer for the next name, closes the
//! current file and opens the new one, so a record never spans two files.
//!
//! The check and the write are not atomic on their own. Share a rotating
//! file between threads as `Arc<Mutex<RotatingFile>>`, whose `ByteSink`
//! impl holds the lock across the whole sequence.

use super::os_file::OsFile;
use crate::writers::WriterKind;
use plog_application::{ByteSink, FileSink, FormatWriter, SinkError};
use plog_domain::{SequenceError, Sequencer};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Construction settings of a [`RotatingFile`]
#[derive(Clone)]
pub struct RotatingFileConfig {
    /// File name, or a template with one placeholder for the sequencer
    pub name_format: String,
    /// Structural writer (default: plain text)
    pub writer: Arc<dyn FormatWriter>,
    /// Naming strategy (default: none, size rotation then fails)
    pub sequencer: Option<Arc<dyn Sequencer>>,
    /// Rotation threshold in bytes; 0 disables rotation
    ///
    /// A write rotates when the file is non-empty and `size + len` would
    /// exceed the threshold. An empty file is always written to, so a
    /// record larger than `max_size` lands whole in its own file.
    pub max_size: u64,
}

impl RotatingFileConfig {
    pub fn new(name_format: impl Into<String>) -> Self {
        Self {
            name_format: name_format.into(),
            writer: WriterKind::Text.writer(),
            sequencer: None,
            max_size: 0,
        }
    }

    pub fn with_writer(mut self, writer: Arc<dyn FormatWriter>) -> Self {
        self.writer = writer;
        self
    }

    pub fn with_sequencer(mut self, sequencer: Arc<dyn Sequencer>) -> Self {
        self.sequencer = Some(sequencer);
        self
    }

    pub fn with_max_size(mut self, max_size: u64) -> Self {
        self.max_size = max_size;
        self
    }
}

impl std::fmt::Debug for RotatingFileConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingFileConfig")
            .field("name_format", &self.name_format)
            .field("sequencer", &self.sequencer.is_some())
            .field("max_size", &self.max_size)
            .finish_non_exhaustive()
    }
}

#[derive(Debug)]
enum State {
    /// Nothing opened yet; the first write opens the file
    Unopened,
    Open(OsFile),
    /// Opening `name` during a rotation failed; the next write retries it
    Unavailable { name: String },
    Closed,
}

/// A log file that rolls over to a new name when it grows too large
pub struct RotatingFile {
    name_format: String,
    writer: Arc<dyn FormatWriter>,
    sequencer: Option<Arc<dyn Sequencer>>,
    max_size: u64,
    state: State,
}

impl RotatingFile {
    /// Create a rotating file; no file is opened until the first write
    pub fn new(config: RotatingFileConfig) -> Self {
        Self {
            name_format: config.name_format,
            writer: config.writer,
            sequencer: config.sequencer,
            max_size: config.max_size,
            state: State::Unopened,
        }
    }

    /// Plain text file
    pub fn text(name_format: impl Into<String>) -> Self {
        Self::new(RotatingFileConfig::new(name_format))
    }

    /// File holding a JSON array of records
    pub fn json(name_format: impl Into<String>) -> Self {
        Self::new(RotatingFileConfig::new(name_format).with_writer(WriterKind::Json.writer()))
    }

    /// CSV file with a header line
    pub fn csv(name_format: impl Into<String>) -> Self {
        Self::new(RotatingFileConfig::new(name_format).with_writer(WriterKind::Csv.writer()))
    }

    pub fn name_format(&self) -> &str {
        &self.name_format
    }

    pub fn max_size(&self) -> u64 {
        self.max_size
    }

    /// Takes effect from the next write; never rotates on its own
    pub fn set_max_size(&mut self, max_size: u64) {
        self.max_size = max_size;
    }

    /// Takes effect from the next write
    pub fn set_writer(&mut self, writer: Arc<dyn FormatWriter>) {
        self.writer = writer;
    }

    /// Takes effect from the next rotation
    pub fn set_sequencer(&mut self, sequencer: Option<Arc<dyn Sequencer>>) {
        self.sequencer = sequencer;
    }

    /// Name of the open file, if any
    pub fn current_name(&self) -> Option<&str> {
        match &self.state {
            State::Open(file) => Some(file.name()),
            _ => None,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, State::Open(_))
    }

    pub fn is_closed(&self) -> bool {
        matches!(self.state, State::Closed)
    }

    /// Release the file handle; later writes fail with [`SinkError::Closed`]
    pub fn close(&mut self) {
        if let State::Open(file) = &self.state {
            debug!(file = %file.name(), "Closing file");
        }
        self.state = State::Closed;
    }

    /// Write one record, rotating first if it wouldn't fit
    pub fn write(&mut self, data: &[u8]) -> Result<usize, SinkError> {
        let writer = Arc::clone(&self.writer);
        let max_size = self.max_size;

        let file = self.open_file()?;
        let size = file.size()?;

        // An empty file is never rotated away from: the record would not
        // fit in a fresh file either.
        let file = if max_size > 0 && size > 0 && size + data.len() as u64 > max_size {
            let current = file.name().to_string();
            self.rotate(&current)?
        } else {
            file
        };

        writer.write(file, data)
    }

    /// The open file, opening it first if needed
    fn open_file(&mut self) -> Result<&mut OsFile, SinkError> {
        match &self.state {
            State::Open(_) => {}
            State::Closed => return Err(SinkError::Closed),
            State::Unopened => {
                let name = self.first_name()?;
                let file = OsFile::open(&name).inspect_err(|e| {
                    warn!(file = %name, error = %e, "Failed to open file");
                })?;
                debug!(file = %name, "Opened file");
                self.state = State::Open(file);
            }
            State::Unavailable { name } => {
                let name = name.clone();
                match OsFile::create(&name) {
                    Ok(file) => {
                        info!(file = %name, "Reopened file after failed rotation");
                        self.state = State::Open(file);
                    }
                    Err(e) => {
                        warn!(file = %name, error = %e, "File still unavailable");
                        return Err(SinkError::Unavailable { name });
                    }
                }
            }
        }

        match &mut self.state {
            State::Open(file) => Ok(file),
            _ => Err(SinkError::Closed),
        }
    }

    fn first_name(&self) -> Result<String, SinkError> {
        match &self.sequencer {
            Some(sequencer) => Ok(sequencer.next_name(&self.name_format, "")?),
            None => Ok(self.name_format.clone()),
        }
    }

    /// Close `current` and open the next file in the sequence, truncated
    ///
    /// A sequencer failure leaves the current file open. A failed open
    /// leaves no file open at all.
    fn rotate(&mut self, current: &str) -> Result<&mut OsFile, SinkError> {
        let Some(sequencer) = &self.sequencer else {
            warn!(file = %current, "Size limit reached but no sequencer is set");
            return Err(SequenceError::Custom("no sequencer set for rotation".to_string()).into());
        };

        let next = sequencer
            .next_name(&self.name_format, current)
            .inspect_err(|e| warn!(file = %current, error = %e, "Failed to compute next file name"))?;

        info!(from = %current, to = %next, max_size = self.max_size, "Rotating file");
        self.state = State::Unavailable { name: next.clone() };

        let file = OsFile::create(&next).inspect_err(|e| {
            warn!(file = %next, error = %e, "Failed to open rotated file");
        })?;
        self.state = State::Open(file);

        match &mut self.state {
            State::Open(file) => Ok(file),
            _ => Err(SinkError::Unavailable { name: next }),
        }
    }
}

impl ByteSink for RotatingFile {
    fn write(&mut self, data: &[u8]) -> Result<usize, SinkError> {
        RotatingFile::write(self, data)
    }
}

impl std::fmt::Debug for RotatingFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingFile")
            .field("name_format", &self.name_format)
            .field("max_size", &self.max_size)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
