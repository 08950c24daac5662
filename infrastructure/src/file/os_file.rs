//! `FileSink` over `std::fs::File`

use plog_application::FileSink;
use std::fs::{File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::Path;

/// Permissions of newly created log files (owner rw, group/other r)
#[cfg(unix)]
const FILE_MODE: u32 = 0o644;

/// An open log file
///
/// Every read and write is positioned explicitly; the handle keeps no
/// append cursor of its own.
#[derive(Debug)]
pub struct OsFile {
    name: String,
    file: File,
}

impl OsFile {
    /// Open `name` for reading and writing, creating it if needed and
    /// keeping existing content
    pub fn open(name: impl AsRef<Path>) -> io::Result<Self> {
        Self::open_with(name.as_ref(), false)
    }

    /// Open `name` for reading and writing, creating it if needed and
    /// discarding existing content
    pub fn create(name: impl AsRef<Path>) -> io::Result<Self> {
        Self::open_with(name.as_ref(), true)
    }

    fn open_with(path: &Path, truncate: bool) -> io::Result<Self> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let mut options = OpenOptions::new();
        options.read(true).write(true).create(true).truncate(truncate);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(FILE_MODE);
        }

        let file = options.open(path)?;
        Ok(Self {
            name: path.display().to_string(),
            file,
        })
    }

    /// Flush file content and metadata to disk
    pub fn sync(&self) -> io::Result<()> {
        self.file.sync_all()
    }
}

impl FileSink for OsFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn size(&mut self) -> io::Result<u64> {
        Ok(self.file.metadata()?.len())
    }

    fn read_exact_at(&mut self, buf: &mut [u8], offset: u64) -> io::Result<()> {
        self.file.seek(SeekFrom::Start(offset))?;
        self.file.read_exact(buf)
    }

    fn write_at(&mut self, data: &[u8], offset: u64) -> io::Result<usize> {
        self.file.seek(SeekFrom::Start(offset))?;
        self.file.write_all(data)?;
        Ok(data.len())
    }

    fn truncate(&mut self, len: u64) -> io::Result<()> {
        self.file.set_len(len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_keeps_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.log");
        std::fs::write(&path, "existing\n").unwrap();

        let mut file = OsFile::open(&path).unwrap();

        assert_eq!(file.size().unwrap(), 9);
        file.append(b"more\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "existing\nmore\n");
    }

    #[test]
    fn test_create_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.log");
        std::fs::write(&path, "existing\n").unwrap();

        let mut file = OsFile::create(&path).unwrap();

        assert_eq!(file.size().unwrap(), 0);
    }

    #[test]
    fn test_write_and_read_at_offset() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = OsFile::create(dir.path().join("data.bin")).unwrap();

        file.write_at(b"hello world", 0).unwrap();
        file.write_at(b"W", 6).unwrap();

        let mut buf = [0u8; 5];
        file.read_exact_at(&mut buf, 6).unwrap();
        assert_eq!(&buf, b"World");
        assert!(file.read_exact_at(&mut buf, 8).is_err());
    }

    #[test]
    fn test_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("logs").join("app.log");

        OsFile::open(&path).unwrap();

        assert!(path.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_new_file_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.log");
        let file = OsFile::open(&path).unwrap();
        file.sync().unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        // umask can only clear bits
        assert_eq!(mode & 0o7133, 0);
        assert_eq!(mode & 0o600, 0o600);
    }
}
