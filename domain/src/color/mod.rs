//! ANSI colorization.
//!
//! - [`attribute::Attribute`]: SGR codes and the [`attribute::colorize`] generator
//! - [`color_map`]: per-level and per-tag attribute tables

pub mod attribute;
pub mod color_map;
