//! Log event entity

use super::{level::LogLevel, tag::Tag};
use chrono::{DateTime, Utc};
use serde_json::Value;

/// A single log event (immutable once built)
///
/// Holds the severity, an ordered list of arbitrary values, the UTC time of
/// creation and an optional list of tags.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEvent {
    level: LogLevel,
    variables: Vec<Value>,
    timestamp: DateTime<Utc>,
    tags: Vec<Tag>,
}

impl LogEvent {
    /// Create an event from any number of values, stamped with the current time
    pub fn new<I, V>(level: LogLevel, variables: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self {
            level,
            variables: variables.into_iter().map(Into::into).collect(),
            timestamp: Utc::now(),
            tags: Vec::new(),
        }
    }

    /// Create an event holding a single message string
    pub fn message(level: LogLevel, message: impl Into<String>) -> Self {
        Self::new(level, [Value::String(message.into())])
    }

    pub fn with_tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Tag>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Override the creation time (replay, tests)
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn variables(&self) -> &[Value] {
        &self.variables
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }
}

/// Human-readable form of a variable: strings unquoted, everything else as JSON
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// All variables in display form, joined by single spaces
pub fn join_values(values: &[Value]) -> String {
    values
        .iter()
        .map(display_value)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_new_event() {
        let event = LogEvent::new(LogLevel::Warn, [json!("disk"), json!(93)]).with_tags(["io"]);
        assert_eq!(event.level(), LogLevel::Warn);
        assert_eq!(event.variables(), &[json!("disk"), json!(93)]);
        assert_eq!(event.tags(), &[Tag::from("io")]);
    }

    #[test]
    fn test_message_event() {
        let ts = Utc.with_ymd_and_hms(2006, 1, 2, 15, 4, 5).unwrap();
        let event = LogEvent::message(LogLevel::Info, "started").with_timestamp(ts);
        assert_eq!(event.variables(), &[json!("started")]);
        assert_eq!(event.timestamp(), ts);
        assert!(event.tags().is_empty());
    }

    #[test]
    fn test_join_values() {
        let values = vec![json!("Test string"), json!(123), json!(4.5), json!(true)];
        assert_eq!(join_values(&values), "Test string 123 4.5 true");
        assert_eq!(join_values(&[]), "");
    }

    #[test]
    fn test_display_nested_value() {
        assert_eq!(display_value(&json!(["a", 1])), r#"["a",1]"#);
        assert_eq!(display_value(&Value::Null), "null");
    }
}
