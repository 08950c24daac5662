//! Human-readable text formatter

use super::formatter::{FormatError, Formatter};
use crate::core::event::join_values;
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

/// A tag wrapped in exactly one SGR sequence and a trailing reset
static COLORED_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\x1b\[\d{1,3}(?:;\d{1,3})*m)(.*)(\x1b\[0m)$").expect("valid tag regex")
});

/// `2006-01-02T15:04:05Z [INFO] [#tag1 #tag2] Test string 123`
///
/// The tag block is omitted when there are no tags.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextFormatter;

impl TextFormatter {
    /// Prefix a tag with `#`, inside its color sequence if it has one
    fn hash_tag(tag: &str) -> String {
        match COLORED_TAG.captures(tag) {
            Some(caps) => format!("{}#{}{}", &caps[1], &caps[2], &caps[3]),
            None => format!("#{}", tag),
        }
    }
}

impl Formatter for TextFormatter {
    fn format(
        &self,
        timestamp: &str,
        level: &str,
        variables: &[Value],
        tags: &[String],
    ) -> Result<String, FormatError> {
        let tag_block = if tags.is_empty() {
            String::new()
        } else {
            let tags: Vec<String> = tags.iter().map(|t| Self::hash_tag(t)).collect();
            format!("[{}] ", tags.join(" "))
        };

        Ok(format!(
            "{} [{}] {}{}",
            timestamp,
            level,
            tag_block,
            join_values(variables)
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_with_tags() {
        let out = TextFormatter
            .format(
                "2006-01-02T15:04:05Z",
                "INFO",
                &[json!("Test string"), json!(123), json!(4.5), json!(true)],
                &["tag1".to_string(), "tag2".to_string()],
            )
            .unwrap();
        assert_eq!(out, "2006-01-02T15:04:05Z [INFO] [#tag1 #tag2] Test string 123 4.5 true");
    }

    #[test]
    fn test_text_without_tags() {
        let out = TextFormatter
            .format("2006-01-02T15:04:05Z", "WARN", &[json!("low disk")], &[])
            .unwrap();
        assert_eq!(out, "2006-01-02T15:04:05Z [WARN] low disk");
    }

    #[test]
    fn test_hash_goes_inside_color() {
        let out = TextFormatter
            .format("ts", "INFO", &[json!("x")], &["\x1b[35mdb\x1b[0m".to_string()])
            .unwrap();
        assert_eq!(out, "ts [INFO] [\x1b[35m#db\x1b[0m] x");
    }
}
