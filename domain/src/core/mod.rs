//! Core domain concepts shared across all subdomains.
//!
//! - [`level::LogLevel`]: severity of an event and verbosity of a logger
//! - [`tag::Tag`]: metadata label attached to events
//! - [`event::LogEvent`]: a single immutable log event

pub mod event;
pub mod level;
pub mod tag;
