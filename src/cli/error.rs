//! CLI-specific error types

use crate::error::ConvertError;
use thiserror::Error;

/// CLI-specific error type
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Convert(#[from] ConvertError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
