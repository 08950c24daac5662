//! Event formatters.
//!
//! A [`formatter::Formatter`] turns the rendered parts of an event into one
//! line of output. [`formatter::LogFormat`] selects one of the built-ins.

pub mod csv;
pub mod formatter;
pub mod json;
pub mod plain;
pub mod text;
