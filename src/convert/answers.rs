//! Model answer splitting
//!
//! Turns the `model_answers` cell into a list and produces the final
//! [`Record`]s.

use tracing::warn;

use crate::models::{CellValue, Dataset, Record, SourceTable};

/// Separator between answers in the `model_answers` column
pub const ANSWER_DELIMITER: &str = "; ";

/// Split one `model_answers` cell.
///
/// Text is split on [`ANSWER_DELIMITER`] with no trimming. Missing and empty
/// cells yield no answers, as do numeric cells.
pub fn split_answer_cell(cell: &CellValue) -> Vec<String> {
    match cell {
        CellValue::Missing => Vec::new(),
        CellValue::Text(text) if text.is_empty() => Vec::new(),
        CellValue::Text(text) => text.split(ANSWER_DELIMITER).map(str::to_string).collect(),
        CellValue::Integer(_) | CellValue::Float(_) => Vec::new(),
    }
}

/// Split `model_answers` and build the dataset.
pub fn split_answers(table: SourceTable) -> Dataset {
    let non_textual = table
        .records
        .iter()
        .filter(|r| matches!(r.model_answers, CellValue::Integer(_) | CellValue::Float(_)))
        .count();
    if non_textual > 0 {
        warn!(
            "{} model_answers values are not text; they become empty answer lists",
            non_textual
        );
    }

    let records = table
        .records
        .into_iter()
        .map(|source| Record {
            model_answers: split_answer_cell(&source.model_answers),
            reading_text: source.reading_text.to_text(),
            question: source.question.to_text(),
            id: source.id,
            extra: source.extra,
        })
        .collect();

    Dataset::new(table.columns, records)
}
