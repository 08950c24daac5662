//! File name sequencing for rotation.
//!
//! - [`template::NameTemplate`]: name formats with one placeholder
//! - [`sequencer::Sequencer`]: strategy computing the next file name
//! - [`increment`], [`datetime`], [`noop`]: built-in strategies
//! - [`clock`]: time source for [`datetime::DateTimeSequencer`]

pub mod clock;
pub mod datetime;
pub mod increment;
pub mod noop;
pub mod sequencer;
pub mod template;
