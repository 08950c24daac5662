//! CSV writer with a fixed header line

use plog_application::{FileSink, FormatWriter, SinkError};

/// First line of every CSV log file (columns of `plog_domain::CSV_COLUMNS`)
pub const CSV_HEADER: &[u8] = b"Timestamp,LogLevel,Message,Tags\n";

/// Appends one CSV row per record below a fixed header
///
/// A missing trailing newline is added to the record.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvWriter;

impl FormatWriter for CsvWriter {
    fn write(&self, file: &mut dyn FileSink, data: &[u8]) -> Result<usize, SinkError> {
        let mut written = 0;
        let mut size = file.size()?;

        if size == 0 {
            file.truncate(0)?;
            written += file.write_at(CSV_HEADER, 0)?;
            size = CSV_HEADER.len() as u64;
        }

        if size < CSV_HEADER.len() as u64 {
            return Err(SinkError::corrupt(file.name(), "missing CSV header"));
        }
        let mut header = [0u8; CSV_HEADER.len()];
        file.read_exact_at(&mut header, 0)
            .map_err(|e| SinkError::after(written, e))?;
        if header != CSV_HEADER {
            return Err(SinkError::corrupt(file.name(), "first line is not the CSV header"));
        }

        let mut row = data.to_vec();
        if !row.ends_with(b"\n") {
            row.push(b'\n');
        }
        written += file
            .write_at(&row, size)
            .map_err(|e| SinkError::after(written, e))?;

        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::file::MemoryFile;
    use plog_domain::CSV_COLUMNS;

    #[test]
    fn test_header_matches_columns() {
        assert_eq!(CSV_HEADER, format!("{}\n", CSV_COLUMNS.join(",")).as_bytes());
    }

    #[test]
    fn test_header_written_once() {
        let mut file = MemoryFile::new("app.csv");

        for i in 0..5 {
            CsvWriter
                .write(&mut file, format!("ts,INFO,message {},\n", i).as_bytes())
                .unwrap();
        }

        let text = file.text();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "Timestamp,LogLevel,Message,Tags");
        assert_eq!(lines[5], "ts,INFO,message 4,");
    }

    #[test]
    fn test_adds_missing_newline() {
        let mut file = MemoryFile::new("app.csv");

        CsvWriter.write(&mut file, b"a,b,c,d").unwrap();
        CsvWriter.write(&mut file, b"e,f,g,h").unwrap();

        assert_eq!(
            file.text(),
            "Timestamp,LogLevel,Message,Tags\na,b,c,d\ne,f,g,h\n"
        );
    }

    #[test]
    fn test_appends_after_existing_rows() {
        let mut file =
            MemoryFile::with_content("app.csv", "Timestamp,LogLevel,Message,Tags\nold,,,\n");

        CsvWriter.write(&mut file, b"new,,,\n").unwrap();

        assert!(file.text().ends_with("old,,,\nnew,,,\n"));
    }

    #[test]
    fn test_wrong_header_rejected() {
        let before = "time,level,msg,tags\nrow\n";
        let mut file = MemoryFile::with_content("app.csv", before);

        let err = CsvWriter.write(&mut file, b"x,y,z,w\n").unwrap_err();

        assert!(err.is_corrupt());
        assert_eq!(file.text(), before);
    }

    #[test]
    fn test_short_file_rejected() {
        let mut file = MemoryFile::with_content("app.csv", "Time");

        assert!(CsvWriter.write(&mut file, b"x\n").unwrap_err().is_corrupt());
    }
}
