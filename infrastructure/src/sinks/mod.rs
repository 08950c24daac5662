//! Byte sinks over standard streams and arbitrary writers

pub mod writer;

pub use writer::{StderrSink, StdoutSink, WriterSink};
