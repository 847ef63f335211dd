//! Conversion pipeline
//!
//! Cleans loaded question rows, splits their answers and drives a full
//! CSV to JSON run.

pub mod answers;
pub mod clean;
pub mod config;
pub mod converter;

pub use answers::{ANSWER_DELIMITER, split_answer_cell, split_answers};
pub use clean::{QUOTE_CHAR, clean, strip_quotes};
pub use config::{ConverterConfig, DEFAULT_INPUT_FILENAME, DEFAULT_OUTPUT_FILENAME};
pub use converter::{ConversionSummary, Converter, convert_file};
