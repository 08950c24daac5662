//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod byte_sink;
pub mod error;
pub mod file_sink;
pub mod format_writer;
