//! CLI support
//!
//! Argument handling and error reporting for the `questions-converter` binary.

pub mod commands;
pub mod error;
