//! Library error type

use std::path::PathBuf;
use thiserror::Error;

/// Error during a conversion run
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("The CSV file is missing one or more required columns: {}", .0.join(", "))]
    Schema(Vec<String>),

    #[error("Failed to read file {0}: {1}")]
    FileRead(PathBuf, String),

    #[error("Failed to parse CSV file {0}: {1}")]
    CsvParse(PathBuf, String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Failed to write file {0}: {1}")]
    FileWrite(PathBuf, String),

    #[error("Invalid configuration in {0}: {1}")]
    Config(PathBuf, String),

    #[error("Failed to write report: {0}")]
    Report(String),
}

impl ConvertError {
    /// Whether the run failed the required-column check.
    pub fn is_schema_error(&self) -> bool {
        matches!(self, ConvertError::Schema(_))
    }
}

pub type ConvertResult<T> = Result<T, ConvertError>;
