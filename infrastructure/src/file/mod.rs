//! File handles and the rotating file sink
//!
//! - [`OsFile`]: a [`plog_application::FileSink`] over a real file
//! - [`MemoryFile`]: an in-memory stand-in for tests and buffering
//! - [`RotatingFile`]: size-gated rotation across a sequence of files

pub mod memory;
pub mod os_file;
pub mod rotating;

pub use memory::MemoryFile;
pub use os_file::OsFile;
pub use rotating::{RotatingFile, RotatingFileConfig};
