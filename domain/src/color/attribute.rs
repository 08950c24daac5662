//! SGR attribute value object and the ANSI color generator

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Matches any SGR escape sequence (e.g. `\x1b[31m`, `\x1b[1;4;32m`).
static SGR_SEQUENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1b\[(?:\d+;?)+m").expect("valid SGR regex"));

/// A single Select Graphic Rendition code
///
/// `Reset` and `NoReset` are special: `Reset` strips all color from the text
/// passed to [`colorize`], `NoReset` stops [`colorize`] from appending the
/// trailing reset sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    Reset,
    NoReset,

    // Font decorations
    Bold,
    Faint,
    Italic,
    Underline,
    BlinkSlow,
    BlinkRapid,
    ReverseVideo,
    Concealed,
    CrossedOut,

    // Foreground
    FgBlack,
    FgRed,
    FgGreen,
    FgYellow,
    FgBlue,
    FgMagenta,
    FgCyan,
    FgWhite,

    // Foreground (hi-intensity)
    FgHiBlack,
    FgHiRed,
    FgHiGreen,
    FgHiYellow,
    FgHiBlue,
    FgHiMagenta,
    FgHiCyan,
    FgHiWhite,

    // Background
    BgBlack,
    BgRed,
    BgGreen,
    BgYellow,
    BgBlue,
    BgMagenta,
    BgCyan,
    BgWhite,

    // Background (hi-intensity)
    BgHiBlack,
    BgHiRed,
    BgHiGreen,
    BgHiYellow,
    BgHiBlue,
    BgHiMagenta,
    BgHiCyan,
    BgHiWhite,
}

impl Attribute {
    /// Numeric SGR code. `NoReset` is a pseudo attribute and reports -1.
    pub fn code(self) -> i16 {
        use Attribute::*;
        match self {
            Reset => 0,
            NoReset => -1,
            Bold => 1,
            Faint => 2,
            Italic => 3,
            Underline => 4,
            BlinkSlow => 5,
            BlinkRapid => 6,
            ReverseVideo => 7,
            Concealed => 8,
            CrossedOut => 9,
            FgBlack => 30,
            FgRed => 31,
            FgGreen => 32,
            FgYellow => 33,
            FgBlue => 34,
            FgMagenta => 35,
            FgCyan => 36,
            FgWhite => 37,
            BgBlack => 40,
            BgRed => 41,
            BgGreen => 42,
            BgYellow => 43,
            BgBlue => 44,
            BgMagenta => 45,
            BgCyan => 46,
            BgWhite => 47,
            FgHiBlack => 90,
            FgHiRed => 91,
            FgHiGreen => 92,
            FgHiYellow => 93,
            FgHiBlue => 94,
            FgHiMagenta => 95,
            FgHiCyan => 96,
            FgHiWhite => 97,
            BgHiBlack => 100,
            BgHiRed => 101,
            BgHiGreen => 102,
            BgHiYellow => 103,
            BgHiBlue => 104,
            BgHiMagenta => 105,
            BgHiCyan => 106,
            BgHiWhite => 107,
        }
    }
}

/// Wrap `text` in the escape sequence for `attributes`.
///
/// If `attributes` contains [`Attribute::Reset`], every SGR sequence is
/// stripped from `text` instead and nothing is added. An empty attribute
/// list returns the text untouched.
pub fn colorize(text: &str, attributes: &[Attribute]) -> String {
    if attributes.contains(&Attribute::Reset) {
        return strip_colors(text);
    }

    let codes: Vec<String> = attributes
        .iter()
        .filter(|a| **a != Attribute::NoReset)
        .map(|a| a.code().to_string())
        .collect();

    if codes.is_empty() {
        return text.to_string();
    }

    let reset = if attributes.contains(&Attribute::NoReset) {
        String::new()
    } else {
        format!("\x1b[{}m", Attribute::Reset.code())
    };

    format!("\x1b[{}m{}{}", codes.join(";"), text, reset)
}

/// Remove every SGR escape sequence from `text`
pub fn strip_colors(text: &str) -> String {
    SGR_SEQUENCE.replace_all(text, "").into_owned()
}
