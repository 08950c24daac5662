//! Plain formatter (variables only)

use super::formatter::{FormatError, Formatter};
use crate::core::event::join_values;
use serde_json::Value;

#[derive(Debug, Clone, Copy, Default)]
pub struct PlainFormatter;

impl Formatter for PlainFormatter {
    fn format(
        &self,
        _timestamp: &str,
        _level: &str,
        variables: &[Value],
        _tags: &[String],
    ) -> Result<String, FormatError> {
        Ok(join_values(variables))
    }
}
