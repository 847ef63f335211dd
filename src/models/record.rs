//! Question records and datasets
//!
//! [`SourceTable`] holds rows as loaded from CSV, every field still a
//! [`CellValue`]. After cleaning and answer splitting it becomes a
//! [`Dataset`] of [`Record`]s, which is what gets written as JSON.

use std::collections::BTreeMap;

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Serialize, Serializer};

use super::cell::CellValue;

pub const ID_COLUMN: &str = "id";
pub const READING_TEXT_COLUMN: &str = "reading_text";
pub const QUESTION_COLUMN: &str = "question";
pub const MODEL_ANSWERS_COLUMN: &str = "model_answers";

/// A loaded row before any transformation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SourceRecord {
    pub id: CellValue,
    pub reading_text: CellValue,
    pub question: CellValue,
    pub model_answers: CellValue,
    /// Columns beyond the four required ones, keyed by header name
    pub extra: BTreeMap<String, CellValue>,
}

/// Loaded rows together with the header order they came from.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SourceTable {
    pub columns: Vec<String>,
    pub records: Vec<SourceRecord>,
}

impl SourceTable {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// One transformed question row.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Record {
    #[serde(default)]
    pub id: CellValue,
    pub reading_text: String,
    pub question: String,
    pub model_answers: Vec<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, CellValue>,
}

/// Borrowed view of one field of a [`Record`], looked up by column name.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RecordField<'a> {
    Cell(&'a CellValue),
    Text(&'a str),
    List(&'a [String]),
}

impl Serialize for RecordField<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            RecordField::Cell(cell) => cell.serialize(serializer),
            RecordField::Text(text) => serializer.serialize_str(text),
            RecordField::List(items) => items.serialize(serializer),
        }
    }
}

impl Record {
    pub fn field(&self, column: &str) -> Option<RecordField<'_>> {
        match column {
            ID_COLUMN => Some(RecordField::Cell(&self.id)),
            READING_TEXT_COLUMN => Some(RecordField::Text(&self.reading_text)),
            QUESTION_COLUMN => Some(RecordField::Text(&self.question)),
            MODEL_ANSWERS_COLUMN => Some(RecordField::List(&self.model_answers)),
            other => self.extra.get(other).map(RecordField::Cell),
        }
    }
}

/// Ordered collection of records.
///
/// Serializes as a JSON array of objects whose keys follow `columns`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    pub columns: Vec<String>,
    pub records: Vec<Record>,
}

impl Dataset {
    pub fn new(columns: Vec<String>, records: Vec<Record>) -> Self {
        Self { columns, records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }
}

struct OrderedRecord<'a> {
    columns: &'a [String],
    record: &'a Record,
}

impl Serialize for OrderedRecord<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let fields: Vec<(&str, RecordField<'_>)> = self
            .columns
            .iter()
            .filter_map(|column| {
                self.record
                    .field(column)
                    .map(|field| (column.as_str(), field))
            })
            .collect();

        let mut map = serializer.serialize_map(Some(fields.len()))?;
        for (column, field) in fields {
            map.serialize_entry(column, &field)?;
        }
        map.end()
    }
}

impl Serialize for Dataset {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.records.len()))?;
        for record in &self.records {
            seq.serialize_element(&OrderedRecord {
                columns: &self.columns,
                record,
            })?;
        }
        seq.end()
    }
}
