//! Tag value object

use crate::color::{attribute::colorize, color_map::TagColorMap};
use serde::{Deserialize, Serialize};

/// A metadata string that can be attached to any log event
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tag(String);

impl Tag {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Render the tag, colored from `colors` when `color` is set
    pub fn text(&self, color: bool, colors: &TagColorMap) -> String {
        let attributes = colors.get(self);
        if color && !attributes.is_empty() {
            colorize(&self.0, attributes)
        } else {
            self.0.clone()
        }
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Tag {
    fn from(s: &str) -> Self {
        Tag::new(s)
    }
}

impl From<String> for Tag {
    fn from(s: String) -> Self {
        Tag(s)
    }
}

/// Render every tag in order
pub fn render_tags(tags: &[Tag], color: bool, colors: &TagColorMap) -> Vec<String> {
    tags.iter().map(|tag| tag.text(color, colors)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::attribute::Attribute;

    #[test]
    fn test_render_tags_uncolored() {
        let tags = vec![Tag::from("db"), Tag::from("auth")];
        assert_eq!(render_tags(&tags, true, &TagColorMap::new()), vec!["db", "auth"]);
    }

    #[test]
    fn test_render_tags_colored() {
        let mut colors = TagColorMap::new();
        colors.set("db", [Attribute::FgMagenta]);

        let tags = vec![Tag::from("db"), Tag::from("auth")];
        assert_eq!(
            render_tags(&tags, true, &colors),
            vec!["\x1b[35mdb\x1b[0m".to_string(), "auth".to_string()]
        );
        assert_eq!(render_tags(&tags, false, &colors), vec!["db", "auth"]);
    }
}
