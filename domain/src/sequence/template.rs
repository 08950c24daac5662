//! File name templates with a single placeholder
//!
//! A name format such as `logs/app-%03d.json` or `logs/app-{}.txt` holds
//! exactly one placeholder that sequencers fill in:
//!
//! | placeholder | renders                                  |
//! |-------------|------------------------------------------|
//! | `%d`        | an index                                 |
//! | `%0Nd`      | an index zero-padded to `N` digits       |
//! | `%Nd`       | an index space-padded to `N` characters  |
//! | `%s`, `{}`  | any string                               |
//!
//! `%%` is a literal percent sign.

use super::sequencer::SequenceError;

/// Widest padding the standard formatter can render
pub const MAX_WIDTH: usize = u16::MAX as usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Placeholder {
    Index { width: usize, zero_pad: bool },
    Text,
}

/// A parsed name format
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameTemplate {
    prefix: String,
    suffix: String,
    placeholder: Placeholder,
}

impl NameTemplate {
    /// Parse a name format, requiring exactly one placeholder
    pub fn parse(format: &str) -> Result<Self, SequenceError> {
        let mut prefix = String::new();
        let mut suffix = String::new();
        let mut placeholder = None;

        let chars: Vec<char> = format.chars().collect();
        let mut i = 0;
        while i < chars.len() {
            let (literal, consumed, found) = match chars[i] {
                '%' if chars.get(i + 1) == Some(&'%') => (Some('%'), 2, None),
                '%' => match Self::parse_verb(format, &chars[i + 1..])? {
                    Some((found, len)) => (None, len + 1, Some(found)),
                    None => (Some('%'), 1, None),
                },
                '{' if chars.get(i + 1) == Some(&'}') => (None, 2, Some(Placeholder::Text)),
                c => (Some(c), 1, None),
            };

            if let Some(found) = found {
                if placeholder.is_some() {
                    return Err(SequenceError::MultiplePlaceholders(format.to_string()));
                }
                placeholder = Some(found);
            }
            if let Some(c) = literal {
                if placeholder.is_some() {
                    suffix.push(c);
                } else {
                    prefix.push(c);
                }
            }
            i += consumed;
        }

        let placeholder =
            placeholder.ok_or_else(|| SequenceError::MissingPlaceholder(format.to_string()))?;

        Ok(Self {
            prefix,
            suffix,
            placeholder,
        })
    }

    /// Parse the part of a `%` verb after the percent sign.
    /// Returns the placeholder and the number of chars consumed, or `None`
    /// when the `%` starts no verb.
    fn parse_verb(
        format: &str,
        rest: &[char],
    ) -> Result<Option<(Placeholder, usize)>, SequenceError> {
        let zero_pad = rest.first() == Some(&'0');
        let digits_start = usize::from(zero_pad);
        let digits: String = rest[digits_start..]
            .iter()
            .take_while(|c| c.is_ascii_digit())
            .collect();
        let verb_at = digits_start + digits.len();

        match rest.get(verb_at) {
            Some('d') => {
                let width = Self::parse_width(format, &digits)?;
                Ok(Some((Placeholder::Index { width, zero_pad }, verb_at + 1)))
            }
            Some('s') if !zero_pad && digits.is_empty() => {
                Ok(Some((Placeholder::Text, verb_at + 1)))
            }
            _ => Ok(None),
        }
    }

    fn parse_width(format: &str, digits: &str) -> Result<usize, SequenceError> {
        if digits.is_empty() {
            return Ok(0);
        }
        digits
            .parse::<usize>()
            .ok()
            .filter(|width| *width <= MAX_WIDTH)
            .ok_or_else(|| SequenceError::InvalidWidth {
                format: format.to_string(),
                width: digits.to_string(),
                max: MAX_WIDTH,
            })
    }

    /// Render with an index in place of the placeholder
    pub fn render_index(&self, index: u64) -> String {
        let value = match self.placeholder {
            Placeholder::Index {
                width,
                zero_pad: true,
            } => format!("{:0width$}", index),
            Placeholder::Index {
                width,
                zero_pad: false,
            } => format!("{:width$}", index),
            Placeholder::Text => index.to_string(),
        };
        self.render(&value)
    }

    /// Render with arbitrary text in place of the placeholder
    pub fn render(&self, value: &str) -> String {
        format!("{}{}{}", self.prefix, value, self.suffix)
    }

    /// Extract the placeholder's value from a rendered name
    pub fn scan<'a>(&self, name: &'a str) -> Option<&'a str> {
        name.strip_prefix(self.prefix.as_str())?
            .strip_suffix(self.suffix.as_str())
    }

    /// Extract and parse the index from a rendered name
    pub fn scan_index(&self, name: &str) -> Result<u64, SequenceError> {
        let mismatch = || SequenceError::NameMismatch {
            format: format!("{}{{}}{}", self.prefix, self.suffix),
            name: name.to_string(),
        };

        let value = self.scan(name).ok_or_else(mismatch)?.trim_start();
        if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(mismatch());
        }
        value
            .parse()
            .map_err(|_| SequenceError::InvalidIndex(value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_index_placeholder() {
        let t = NameTemplate::parse("logs/app-%d.log").unwrap();
        assert_eq!(t.render_index(7), "logs/app-7.log");
    }

    #[test]
    fn test_zero_padded_index() {
        let t = NameTemplate::parse("log-%03d.json").unwrap();
        assert_eq!(t.render_index(4), "log-004.json");
        assert_eq!(t.render_index(1234), "log-1234.json");
        assert_eq!(t.scan_index("log-004.json").unwrap(), 4);
    }

    #[test]
    fn test_space_padded_index_scans_back() {
        let t = NameTemplate::parse("log-%3d").unwrap();
        assert_eq!(t.render_index(5), "log-  5");
        assert_eq!(t.scan_index("log-  5").unwrap(), 5);
    }

    #[test]
    fn test_text_placeholders() {
        let t = NameTemplate::parse("log-%s.txt").unwrap();
        assert_eq!(t.render("abc"), "log-abc.txt");
        let t = NameTemplate::parse("log-{}.txt").unwrap();
        assert_eq!(t.render("abc"), "log-abc.txt");
        assert_eq!(t.scan("log-xyz.txt"), Some("xyz"));
    }

    #[test]
    fn test_literal_percent() {
        let t = NameTemplate::parse("100%%-%d.log").unwrap();
        assert_eq!(t.render_index(1), "100%-1.log");
    }

    #[test]
    fn test_missing_placeholder() {
        assert!(matches!(
            NameTemplate::parse("app.log"),
            Err(SequenceError::MissingPlaceholder(_))
        ));
    }

    #[test]
    fn test_multiple_placeholders() {
        assert!(matches!(
            NameTemplate::parse("%d-%d.log"),
            Err(SequenceError::MultiplePlaceholders(_))
        ));
    }

    #[test]
    fn test_width_limits() {
        let t = NameTemplate::parse(&format!("log-%0{}d", MAX_WIDTH)).unwrap();
        assert_eq!(t.render_index(1).len(), 4 + MAX_WIDTH);

        for format in ["log-%65536d", "log-%099999d", "log-%99999999999999999999999d"] {
            assert!(
                matches!(
                    NameTemplate::parse(format),
                    Err(SequenceError::InvalidWidth { .. })
                ),
                "{} should be rejected",
                format
            );
        }
    }

    #[test]
    fn test_scan_index_mismatch() {
        let t = NameTemplate::parse("app-%d.log").unwrap();
        assert!(matches!(
            t.scan_index("other-1.log"),
            Err(SequenceError::NameMismatch { .. })
        ));
        assert!(matches!(
            t.scan_index("app-x.log"),
            Err(SequenceError::NameMismatch { .. })
        ));
        assert!(matches!(
            t.scan_index("app-.log"),
            Err(SequenceError::NameMismatch { .. })
        ));
    }
}
