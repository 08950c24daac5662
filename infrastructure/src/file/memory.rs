//! In-memory `FileSink`

use plog_application::FileSink;
use std::io;

/// A file held entirely in memory
///
/// Behaves like a sparse file: writing past the end zero-fills the gap.
/// A write limit can be set to simulate a device that fails part way
/// through a multi-step write.
#[derive(Debug, Clone, Default)]
pub struct MemoryFile {
    name: String,
    data: Vec<u8>,
    writes_left: Option<usize>,
}

impl MemoryFile {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data: Vec::new(),
            writes_left: None,
        }
    }

    /// Start with existing content
    pub fn with_content(name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            data: content.into(),
            ..Self::new(name)
        }
    }

    /// Allow only `count` more successful `write_at` calls
    pub fn fail_after_writes(mut self, count: usize) -> Self {
        self.writes_left = Some(count);
        self
    }

    pub fn contents(&self) -> &[u8] {
        &self.data
    }

    /// Contents as text (lossy)
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.data).into_owned()
    }
}

impl FileSink for MemoryFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn size(&mut self) -> io::Result<u64> {
        Ok(self.data.len() as u64)
    }

    fn read_exact_at(&mut self, buf: &mut [u8], offset: u64) -> io::Result<()> {
        let start = offset as usize;
        let end = start.saturating_add(buf.len());
        if end > self.data.len() {
            return Err(io::Error::from(io::ErrorKind::UnexpectedEof));
        }
        buf.copy_from_slice(&self.data[start..end]);
        Ok(())
    }

    fn write_at(&mut self, data: &[u8], offset: u64) -> io::Result<usize> {
        if let Some(left) = self.writes_left.as_mut() {
            if *left == 0 {
                return Err(io::Error::other("simulated write failure"));
            }
            *left -= 1;
        }

        let start = offset as usize;
        let end = start + data.len();
        if self.data.len() < end {
            self.data.resize(end, 0);
        }
        self.data[start..end].copy_from_slice(data);
        Ok(data.len())
    }

    fn truncate(&mut self, len: u64) -> io::Result<()> {
        self.data.resize(len as usize, 0);
        Ok(())
    }
}
