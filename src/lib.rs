//! Questions converter - turn a CSV of reading-comprehension questions into JSON
//!
//! Provides:
//! - CSV loading with missing-value handling and column typing
//! - Required-column validation
//! - Text cleaning and model answer splitting
//! - JSON export and reload

#[cfg(feature = "cli")]
pub mod cli;
pub mod convert;
pub mod error;
pub mod export;
pub mod import;
pub mod models;
pub mod validation;

// Re-export commonly used types
pub use convert::{
    ConversionSummary, Converter, ConverterConfig, clean, convert_file, split_answers,
};
pub use error::{ConvertError, ConvertResult};
pub use export::{read_json, serialize};
pub use import::{CsvLoader, load};
pub use models::{CellValue, Dataset, Record, SourceRecord, SourceTable};
pub use validation::REQUIRED_COLUMNS;
