//! JSON array writer
//!
//! Keeps the file a closed JSON array with one record per line:
//!
//! ```text
//! [
//! 	{"a":1}
//! ,	{"a":2}
//! ]
//! ```
//!
//! Each append overwrites the footer with the new record and rewrites the
//! footer after it.

use plog_application::{FileSink, FormatWriter, SinkError};

pub const JSON_HEADER: &[u8] = b"[\n";
pub const JSON_FOOTER: &[u8] = b"]\n";

/// Size of a freshly initialized file, which holds no record yet
const EMPTY_ARRAY_LEN: u64 = (JSON_HEADER.len() + JSON_FOOTER.len()) as u64;

/// Appends serialized JSON objects to a JSON array file
///
/// Records are expected to be a single value without surrounding brackets.
/// Trailing newlines are stripped, and an empty record writes nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonWriter;

impl JsonWriter {
    fn validate(file: &mut dyn FileSink, size: u64) -> Result<(), SinkError> {
        if size < EMPTY_ARRAY_LEN {
            return Err(SinkError::corrupt(
                file.name(),
                format!("{} bytes is too short for a JSON array", size),
            ));
        }

        let mut header = [0u8; JSON_HEADER.len()];
        file.read_exact_at(&mut header, 0)?;
        if header != JSON_HEADER {
            return Err(SinkError::corrupt(file.name(), "missing JSON array header"));
        }

        let mut footer = [0u8; JSON_FOOTER.len()];
        file.read_exact_at(&mut footer, size - JSON_FOOTER.len() as u64)?;
        if footer != JSON_FOOTER {
            return Err(SinkError::corrupt(file.name(), "missing JSON array footer"));
        }

        Ok(())
    }
}

impl FormatWriter for JsonWriter {
    fn write(&self, file: &mut dyn FileSink, data: &[u8]) -> Result<usize, SinkError> {
        let record = trim_newlines(data);
        if record.is_empty() {
            return Ok(0);
        }

        let mut written = 0;
        let mut size = file.size()?;

        if size == 0 {
            file.truncate(0)?;
            let init = [JSON_HEADER, JSON_FOOTER].concat();
            written += file.write_at(&init, 0)?;
            size = init.len() as u64;
        }

        Self::validate(file, size).map_err(|e| match e {
            SinkError::Io(source) => SinkError::after(written, source),
            other => other,
        })?;

        // The record replaces the footer
        let pos = size - JSON_FOOTER.len() as u64;
        let first = size == EMPTY_ARRAY_LEN;

        let mut line = Vec::with_capacity(record.len() + 3);
        if !first {
            line.push(b',');
        }
        line.push(b'\t');
        line.extend_from_slice(record);
        line.push(b'\n');

        written += file
            .write_at(&line, pos)
            .map_err(|e| SinkError::after(written, e))?;
        written += file
            .write_at(JSON_FOOTER, pos + line.len() as u64)
            .map_err(|e| SinkError::after(written, e))?;

        Ok(written)
    }
}

fn trim_newlines(data: &[u8]) -> &[u8] {
    let end = data
        .iter()
        .rposition(|b| !matches!(b, b'\n' | b'\r'))
        .map_or(0, |i| i + 1);
    &data[..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::file::MemoryFile;
    use serde_json::Value;

    #[test]
    fn test_two_records_layout() {
        let mut file = MemoryFile::new("app.json");

        JsonWriter.write(&mut file, br#"{"a":1}"#).unwrap();
        JsonWriter.write(&mut file, b"{\"a\":2}\n").unwrap();

        assert_eq!(file.text(), "[\n\t{\"a\":1}\n,\t{\"a\":2}\n]\n");
    }

    #[test]
    fn test_file_parses_as_array_in_order() {
        let mut file = MemoryFile::new("app.json");

        for i in 0..25 {
            JsonWriter
                .write(&mut file, format!("{{\"n\":{}}}\n", i).as_bytes())
                .unwrap();
        }

        let parsed: Vec<Value> = serde_json::from_slice(file.contents()).unwrap();
        assert_eq!(parsed.len(), 25);
        for (i, value) in parsed.iter().enumerate() {
            assert_eq!(value["n"], i);
        }
    }

    #[test]
    fn test_first_write_reports_init_bytes() {
        let mut file = MemoryFile::new("app.json");

        let written = JsonWriter.write(&mut file, b"{}").unwrap();

        // "[\n]\n" + "\t{}\n" + "]\n"
        assert_eq!(written, 4 + 4 + 2);
        assert_eq!(file.contents().len(), 8);
    }

    #[test]
    fn test_appends_to_existing_array() {
        let mut file = MemoryFile::with_content("app.json", "[\n\t1\n]\n");

        JsonWriter.write(&mut file, b"2").unwrap();

        assert_eq!(file.text(), "[\n\t1\n,\t2\n]\n");
    }

    #[test]
    fn test_corrupt_footer_is_sticky() {
        let before = "[\n\t{\"a\":1}\nXX";
        let mut file = MemoryFile::with_content("app.json", before);

        for _ in 0..3 {
            let err = JsonWriter.write(&mut file, br#"{"a":2}"#).unwrap_err();
            assert!(err.is_corrupt());
        }
        assert_eq!(file.text(), before);
    }

    #[test]
    fn test_corrupt_header_rejected() {
        let mut file = MemoryFile::with_content("app.json", "{\n]\n");

        let err = JsonWriter.write(&mut file, b"{}").unwrap_err();

        assert!(matches!(err, SinkError::Corrupt { ref name, .. } if name == "app.json"));
    }

    #[test]
    fn test_too_short_file_rejected() {
        let mut file = MemoryFile::with_content("app.json", "[");

        assert!(JsonWriter.write(&mut file, b"{}").unwrap_err().is_corrupt());
    }

    #[test]
    fn test_empty_record_is_noop() {
        let mut file = MemoryFile::new("app.json");

        assert_eq!(JsonWriter.write(&mut file, b"\n").unwrap(), 0);
        assert!(file.contents().is_empty());
    }

    #[test]
    fn test_interrupted_write_reports_bytes() {
        // Init and record land, footer write fails
        let mut file = MemoryFile::new("app.json").fail_after_writes(2);

        let err = JsonWriter.write(&mut file, b"{}").unwrap_err();

        assert!(matches!(err, SinkError::Interrupted { .. }));
        assert_eq!(err.bytes_written(), 8);
    }

    #[test]
    fn test_failure_before_any_byte_is_io() {
        let mut file = MemoryFile::with_content("app.json", "[\n]\n").fail_after_writes(0);

        let err = JsonWriter.write(&mut file, b"{}").unwrap_err();

        assert!(matches!(err, SinkError::Io(_)));
        assert_eq!(file.text(), "[\n]\n");
    }
}
