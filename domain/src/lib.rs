//! Domain layer for plog
//!
//! This crate contains the pure, I/O-free parts of the logging library:
//! events and their severities, ANSI colorization, line formatters and the
//! file name sequencing used by rotating files.
//!
//! # Core Concepts
//!
//! ## Events
//!
//! A [`LogEvent`] carries a [`LogLevel`], any number of values and optional
//! [`Tag`]s. A [`Formatter`] renders it into a single line of text, JSON or
//! CSV.
//!
//! ## Sequencing
//!
//! A [`Sequencer`] decides the name of the next file when a rotating file
//! rolls over. Name formats hold a single placeholder (see [`NameTemplate`]).

pub mod color;
pub mod core;
pub mod format;
pub mod sequence;

// Re-export commonly used types
pub use color::{
    attribute::{Attribute, colorize, strip_colors},
    color_map::{LevelColorMap, TagColorMap},
};
pub use core::{
    event::{LogEvent, display_value, join_values},
    level::{LogLevel, ParseLevelError},
    tag::{Tag, render_tags},
};
pub use format::{
    csv::{CSV_COLUMNS, CsvFormatter},
    formatter::{FormatError, Formatter, LogFormat},
    json::JsonFormatter,
    plain::PlainFormatter,
    text::TextFormatter,
};
pub use sequence::{
    clock::{Clock, FixedClock, SystemClock},
    datetime::DateTimeSequencer,
    increment::IncrementSequencer,
    noop::NoopSequencer,
    sequencer::{SequenceError, Sequencer, SequencerKind},
    template::NameTemplate,
};
