//! Library components of the `contact-scrub` command.
//!
//! The binary adds argument parsing and terminal output on top of these.

pub mod config;
pub mod logging;
pub mod pipeline;
pub mod prompt;
