//! CSV loader
//!
//! Reads the question file into a [`SourceTable`]. Loading happens in two
//! steps so that callers can inspect the header before validation:
//!
//! 1. [`CsvLoader::read`] parses the file into raw header and row strings.
//! 2. [`RawTable::into_source_table`] validates the required columns, maps
//!    missing-value sentinels to [`CellValue::Missing`] and types each
//!    column with [`ColumnKind::infer`].

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use tracing::{debug, info};

use crate::error::ConvertError;
use crate::models::{CellValue, ColumnKind, SourceRecord, SourceTable};
use crate::validation::validate_required_columns;

/// Cell texts treated as absent values
pub const MISSING_SENTINELS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Whether a raw cell stands for a missing value.
pub fn is_missing_sentinel(raw: &str) -> bool {
    MISSING_SENTINELS.contains(&raw)
}

/// Header and rows exactly as read from the CSV file.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Field delimiter of the question file
pub const CSV_DELIMITER: u8 = b',';

/// Reader for comma-separated question files
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvLoader;

impl CsvLoader {
    pub fn new() -> Self {
        Self
    }

    /// Read a CSV file from disk.
    pub fn read(&self, path: &Path) -> Result<RawTable, ConvertError> {
        let file = File::open(path)
            .map_err(|e| ConvertError::FileRead(path.to_path_buf(), e.to_string()))?;
        self.read_from(file, path)
    }

    /// Read CSV content from any reader. `origin` is only used in errors.
    pub fn read_from<R: Read>(&self, reader: R, origin: &Path) -> Result<RawTable, ConvertError> {
        let parse_error = |message: String| ConvertError::CsvParse(origin.to_path_buf(), message);

        let mut reader = ReaderBuilder::new()
            .delimiter(CSV_DELIMITER)
            .has_headers(true)
            .trim(Trim::None)
            .flexible(true)
            .from_reader(reader);

        let header_record = reader
            .headers()
            .map_err(|e| parse_error(format!("failed to read headers: {}", e)))?
            .clone();
        let headers = dedupe_headers(
            header_record
                .iter()
                .enumerate()
                .map(|(idx, h)| {
                    if idx == 0 {
                        h.trim_start_matches('\u{feff}').to_string()
                    } else {
                        h.to_string()
                    }
                })
                .collect(),
        );

        let mut rows = Vec::new();
        for (index, result) in reader.records().enumerate() {
            let record = result.map_err(|e| parse_error(format!("row {}: {}", index + 1, e)))?;
            if record.len() > headers.len() {
                return Err(parse_error(format!(
                    "row {}: expected {} fields, saw {}",
                    index + 1,
                    headers.len(),
                    record.len()
                )));
            }
            let mut row: Vec<String> = record.iter().map(str::to_string).collect();
            row.resize(headers.len(), String::new());
            rows.push(row);
        }

        debug!("Read {} columns and {} rows", headers.len(), rows.len());
        Ok(RawTable { headers, rows })
    }

    /// Read, validate and type a CSV file.
    pub fn load(&self, path: &Path) -> Result<SourceTable, ConvertError> {
        let raw = self.read(path)?;
        info!("Columns found in {}: {:?}", path.display(), raw.headers);
        raw.into_source_table()
    }
}

impl RawTable {
    /// Validate the header and build typed source records.
    ///
    /// Rows shorter than the header are treated as having missing trailing
    /// cells. Cells past the last header column are dropped.
    pub fn into_source_table(self) -> Result<SourceTable, ConvertError> {
        let required = validate_required_columns(&self.headers)?;

        let kinds: Vec<ColumnKind> = (0..self.headers.len())
            .map(|col| {
                ColumnKind::infer(
                    self.rows
                        .iter()
                        .filter_map(|row| row.get(col))
                        .map(String::as_str)
                        .filter(|raw| !is_missing_sentinel(raw)),
                )
            })
            .collect();

        let records = self
            .rows
            .into_iter()
            .map(|row| {
                let mut cells: Vec<CellValue> = kinds
                    .iter()
                    .enumerate()
                    .map(|(col, kind)| match row.get(col) {
                        Some(raw) if !is_missing_sentinel(raw) => kind.parse(raw),
                        _ => CellValue::Missing,
                    })
                    .collect();

                let extra = self
                    .headers
                    .iter()
                    .enumerate()
                    .filter(|(idx, _)| !required.contains(*idx))
                    .map(|(idx, name)| (name.clone(), std::mem::take(&mut cells[idx])))
                    .collect();

                SourceRecord {
                    id: std::mem::take(&mut cells[required.id]),
                    reading_text: std::mem::take(&mut cells[required.reading_text]),
                    question: std::mem::take(&mut cells[required.question]),
                    model_answers: std::mem::take(&mut cells[required.model_answers]),
                    extra,
                }
            })
            .collect();

        Ok(SourceTable {
            columns: self.headers,
            records,
        })
    }
}

/// Load a question CSV with default settings.
pub fn load(path: impl AsRef<Path>) -> Result<SourceTable, ConvertError> {
    CsvLoader::new().load(path.as_ref())
}

/// Rename repeated header names to `name.1`, `name.2`, ... so every column
/// keeps a unique key.
fn dedupe_headers(headers: Vec<String>) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut result = Vec::with_capacity(headers.len());
    for header in headers {
        let mut name = header.clone();
        while let Some(count) = seen.get_mut(&name) {
            *count += 1;
            name = format!("{}.{}", header, count);
        }
        seen.insert(name.clone(), 0);
        result.push(name);
    }
    result
}
