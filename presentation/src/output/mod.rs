//! Console output

pub mod summary;
