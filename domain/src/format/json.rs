//! JSON object formatter

use super::formatter::{FormatError, Formatter};
use serde::Serialize;
use serde_json::Value;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonRecord<'a> {
    timestamp: &'a str,
    log_level: &'a str,
    #[serde(skip_serializing_if = "is_empty")]
    variables: &'a [Value],
    #[serde(skip_serializing_if = "is_empty")]
    tags: &'a [String],
}

fn is_empty<T>(items: &&[T]) -> bool {
    items.is_empty()
}

/// One compact JSON object per event
///
/// `{"timestamp":"..","logLevel":"..","variables":[..],"tags":[..]}` with
/// `variables` and `tags` omitted when empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format(
        &self,
        timestamp: &str,
        level: &str,
        variables: &[Value],
        tags: &[String],
    ) -> Result<String, FormatError> {
        let record = JsonRecord {
            timestamp,
            log_level: level,
            variables,
            tags,
        };
        Ok(serde_json::to_string(&record)?)
    }
}
