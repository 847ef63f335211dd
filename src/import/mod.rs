//! Import functionality
//!
//! Loads the question CSV into typed source records.

pub mod csv_loader;

pub use csv_loader::{
    CSV_DELIMITER, CsvLoader, MISSING_SENTINELS, RawTable, is_missing_sentinel, load,
};
