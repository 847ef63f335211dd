//! Export functionality
//!
//! Writes converted datasets as JSON and reads them back.

pub mod json;

pub use json::{parse_records, read_json, serialize, to_json_string};
