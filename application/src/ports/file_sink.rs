//! Port for random-access files that format writers operate on

use std::io;

/// A file that can report its size, be read back, written at an offset
/// and truncated
///
/// Format writers use this instead of a concrete file type so that they
/// can be exercised against an in-memory fake.
pub trait FileSink {
    /// Name of the file (used in error messages)
    fn name(&self) -> &str;

    /// Current size in bytes, as reported by the underlying storage
    fn size(&mut self) -> io::Result<u64>;

    /// Fill `buf` from `offset`; fails if fewer bytes are available
    fn read_exact_at(&mut self, buf: &mut [u8], offset: u64) -> io::Result<()>;

    /// Write all of `data` at `offset`, returning `data.len()`
    fn write_at(&mut self, data: &[u8], offset: u64) -> io::Result<usize>;

    fn truncate(&mut self, len: u64) -> io::Result<()>;

    /// Write `data` at the current end of the file
    fn append(&mut self, data: &[u8]) -> io::Result<usize> {
        let end = self.size()?;
        self.write_at(data, end)
    }
}
