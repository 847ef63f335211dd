//! Models module
//!
//! Defines the row and cell types that flow through the conversion pipeline.

pub mod cell;
pub mod record;

pub use cell::{CellValue, ColumnKind};
pub use record::{
    Dataset, ID_COLUMN, MODEL_ANSWERS_COLUMN, QUESTION_COLUMN, READING_TEXT_COLUMN, Record,
    RecordField, SourceRecord, SourceTable,
};
