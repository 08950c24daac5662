//! Lookup tables from log levels and tags to text attributes

use super::attribute::Attribute;
use crate::core::{level::LogLevel, tag::Tag};
use std::collections::HashMap;

/// Which text attributes are used for each log level
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelColorMap {
    entries: HashMap<LogLevel, Vec<Attribute>>,
}

impl LevelColorMap {
    /// A map with no colors at all
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Attributes for a level (empty if the level has no entry)
    pub fn get(&self, level: LogLevel) -> &[Attribute] {
        self.entries.get(&level).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Assign attributes to a level, replacing any previous entry
    pub fn set(&mut self, level: LogLevel, attributes: impl Into<Vec<Attribute>>) {
        self.entries.insert(level, attributes.into());
    }

    pub fn contains(&self, level: LogLevel) -> bool {
        self.entries.contains_key(&level)
    }
}

impl Default for LevelColorMap {
    fn default() -> Self {
        let mut map = Self::empty();
        map.set(LogLevel::Fatal, [Attribute::FgBlack, Attribute::BgRed]);
        map.set(LogLevel::Error, [Attribute::FgRed]);
        map.set(LogLevel::Warn, [Attribute::FgYellow]);
        map.set(LogLevel::Info, [Attribute::FgGreen]);
        map.set(LogLevel::Debug, [Attribute::FgCyan]);
        map.set(LogLevel::Trace, [Attribute::FgBlue]);
        map
    }
}

/// Which text attributes are used for each tag
///
/// Empty by default; tags without an entry are rendered uncolored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagColorMap {
    entries: HashMap<Tag, Vec<Attribute>>,
}

impl TagColorMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, tag: &Tag) -> &[Attribute] {
        self.entries.get(tag).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn set(&mut self, tag: impl Into<Tag>, attributes: impl Into<Vec<Attribute>>) {
        self.entries.insert(tag.into(), attributes.into());
    }

    pub fn contains(&self, tag: &Tag) -> bool {
        self.entries.contains_key(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level_colors() {
        let map = LevelColorMap::default();
        assert_eq!(map.get(LogLevel::Fatal), &[Attribute::FgBlack, Attribute::BgRed]);
        assert_eq!(map.get(LogLevel::Info), &[Attribute::FgGreen]);
        assert!(map.get(LogLevel::None).is_empty());
    }

    #[test]
    fn test_set_overrides_level() {
        let mut map = LevelColorMap::default();
        map.set(LogLevel::Info, [Attribute::Bold, Attribute::FgHiGreen]);
        assert_eq!(map.get(LogLevel::Info), &[Attribute::Bold, Attribute::FgHiGreen]);
    }

    #[test]
    fn test_tag_colors_start_empty() {
        let mut map = TagColorMap::new();
        assert!(!map.contains(&Tag::from("db")));

        map.set("db", [Attribute::FgMagenta]);
        assert_eq!(map.get(&Tag::from("db")), &[Attribute::FgMagenta]);
    }
}
