//! Required-column validation
//!
//! The input header must name `id`, `reading_text`, `question` and
//! `model_answers`. Any other columns are tolerated.

use crate::error::ConvertError;
use crate::models::{ID_COLUMN, MODEL_ANSWERS_COLUMN, QUESTION_COLUMN, READING_TEXT_COLUMN};

/// Column names every input header must contain
pub const REQUIRED_COLUMNS: [&str; 4] = [
    ID_COLUMN,
    READING_TEXT_COLUMN,
    QUESTION_COLUMN,
    MODEL_ANSWERS_COLUMN,
];

/// Header positions of the required columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequiredColumns {
    pub id: usize,
    pub reading_text: usize,
    pub question: usize,
    pub model_answers: usize,
}

impl RequiredColumns {
    /// Whether the header position belongs to one of the required columns.
    pub fn contains(&self, index: usize) -> bool {
        [self.id, self.reading_text, self.question, self.model_answers].contains(&index)
    }
}

/// Return the required columns absent from `headers`, in canonical order.
pub fn missing_required_columns(headers: &[String]) -> Vec<String> {
    REQUIRED_COLUMNS
        .iter()
        .filter(|required| !headers.iter().any(|h| h == *required))
        .map(|required| required.to_string())
        .collect()
}

/// Validate that all required columns are present and locate them.
///
/// Matching is exact and case-sensitive.
pub fn validate_required_columns(headers: &[String]) -> Result<RequiredColumns, ConvertError> {
    let missing = missing_required_columns(headers);
    if !missing.is_empty() {
        return Err(ConvertError::Schema(missing));
    }

    let position = |name: &str| {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| ConvertError::Schema(vec![name.to_string()]))
    };

    Ok(RequiredColumns {
        id: position(ID_COLUMN)?,
        reading_text: position(READING_TEXT_COLUMN)?,
        question: position(QUESTION_COLUMN)?,
        model_answers: position(MODEL_ANSWERS_COLUMN)?,
    })
}
