//! CSV record formatter

use super::formatter::{FormatError, Formatter};
use crate::core::event::join_values;
use serde_json::Value;

/// Column layout shared with the CSV file writer's header line
pub const CSV_COLUMNS: [&str; 4] = ["Timestamp", "LogLevel", "Message", "Tags"];

/// `timestamp,LEVEL,variables joined by spaces,tags joined by colons`
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvFormatter;

impl Formatter for CsvFormatter {
    fn format(
        &self,
        timestamp: &str,
        level: &str,
        variables: &[Value],
        tags: &[String],
    ) -> Result<String, FormatError> {
        Ok(format!(
            "{},{},{},{}",
            timestamp,
            level,
            join_values(variables),
            tags.join(":")
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_csv_record() {
        let out = CsvFormatter
            .format(
                "2006-01-02T15:04:05Z",
                "INFO",
                &[json!("Test string"), json!(123), json!(4.5), json!(true)],
                &["tag1".to_string(), "tag2".to_string()],
            )
            .unwrap();
        assert_eq!(out, "2006-01-02T15:04:05Z,INFO,Test string 123 4.5 true,tag1:tag2");
    }

    #[test]
    fn test_csv_record_without_tags() {
        let out = CsvFormatter.format("ts", "ERROR", &[json!("boom")], &[]).unwrap();
        assert_eq!(out, "ts,ERROR,boom,");
    }
}
