//! Validation functionality
//!
//! Provides the required-column check applied to every input header.

pub mod columns;

pub use columns::{
    REQUIRED_COLUMNS, RequiredColumns, missing_required_columns, validate_required_columns,
};
