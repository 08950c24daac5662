//! Plain append writer

use plog_application::{FileSink, FormatWriter, SinkError};

/// Appends records as-is; the file has no structure to keep
#[derive(Debug, Clone, Copy, Default)]
pub struct TextWriter;

impl FormatWriter for TextWriter {
    fn write(&self, file: &mut dyn FileSink, data: &[u8]) -> Result<usize, SinkError> {
        Ok(file.append(data)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::file::MemoryFile;

    #[test]
    fn test_appends_raw_bytes() {
        let mut file = MemoryFile::with_content("app.log", "first\n");

        let written = TextWriter.write(&mut file, b"second\n").unwrap();

        assert_eq!(written, 7);
        assert_eq!(file.text(), "first\nsecond\n");
    }

    #[test]
    fn test_custom_banner_writer() {
        // A user-supplied writer that stamps new files before the first record
        let banner = |file: &mut dyn FileSink, data: &[u8]| -> Result<usize, SinkError> {
            let mut written = 0;
            if file.size()? == 0 {
                written += file.append(b"--- Created: 2006-01-02T15:04:05Z ---\n")?;
            }
            written += TextWriter.write(file, data)?;
            Ok(written)
        };

        let mut file = MemoryFile::new("app.log");
        banner.write(&mut file, b"one\n").unwrap();
        banner.write(&mut file, b"two\n").unwrap();

        assert_eq!(
            file.text(),
            "--- Created: 2006-01-02T15:04:05Z ---\none\ntwo\n"
        );
    }
}
