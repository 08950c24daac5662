//! Counter-based sequencer

use super::{
    sequencer::{SequenceError, Sequencer},
    template::NameTemplate,
};

/// Increases the number in the file name by one on each rotation
///
/// The first name in the sequence uses index 0. Every later name is derived
/// by scanning the index out of `previous` with the format as the template,
/// so a `previous` that doesn't match the format is an error rather than a
/// restart.
#[derive(Debug, Clone, Copy, Default)]
pub struct IncrementSequencer;

impl Sequencer for IncrementSequencer {
    fn next_name(&self, format: &str, previous: &str) -> Result<String, SequenceError> {
        let template = NameTemplate::parse(format)?;

        if previous.is_empty() {
            return Ok(template.render_index(0));
        }

        let index = template.scan_index(previous)?;
        let next = index
            .checked_add(1)
            .ok_or_else(|| SequenceError::InvalidIndex(index.to_string()))?;

        Ok(template.render_index(next))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_name_is_zero() {
        assert_eq!(IncrementSequencer.next_name("log-%d.txt", "").unwrap(), "log-0.txt");
    }

    #[test]
    fn test_chain_reaches_index_k() {
        let format = "logs/app-%03d.json";
        let mut name = String::new();
        for _ in 0..=12 {
            name = IncrementSequencer.next_name(format, &name).unwrap();
        }
        assert_eq!(name, "logs/app-012.json");
    }

    #[test]
    fn test_mismatched_previous_is_error() {
        let result = IncrementSequencer.next_name("log-%d.txt", "other-3.txt");
        assert!(matches!(result, Err(SequenceError::NameMismatch { .. })));
    }

    #[test]
    fn test_format_without_placeholder_is_error() {
        let result = IncrementSequencer.next_name("log.txt", "");
        assert!(matches!(result, Err(SequenceError::MissingPlaceholder(_))));
    }

    #[test]
    fn test_unrenderable_width_is_error() {
        for format in ["app-%99999d.log", "app-%99999999999999999999999d.log"] {
            let result = IncrementSequencer.next_name(format, "");
            assert!(matches!(result, Err(SequenceError::InvalidWidth { .. })));
        }
    }

    #[test]
    fn test_overflow_is_error() {
        let previous = format!("log-{}", u64::MAX);
        let result = IncrementSequencer.next_name("log-%d", &previous);
        assert!(matches!(result, Err(SequenceError::InvalidIndex(_))));
    }
}
