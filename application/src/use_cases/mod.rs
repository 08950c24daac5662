//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod logger;
pub mod registry;
