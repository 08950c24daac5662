//! Presentation layer for plog
//!
//! This crate contains the CLI definition and the console summary printed
//! after events have been dispatched.

pub mod cli;
pub mod output;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use output::summary::DispatchSummary;
