//! JSON exporter
//!
//! Writes a [`Dataset`] as a JSON array of objects with 2-space indentation.
//! The document is rendered in memory first, so the output file is only
//! created once serialization has succeeded.

use std::path::Path;

use tracing::info;

use crate::error::ConvertError;
use crate::models::{Dataset, Record};

/// Render a dataset as pretty-printed JSON.
pub fn to_json_string(dataset: &Dataset) -> Result<String, ConvertError> {
    serde_json::to_string_pretty(dataset).map_err(|e| ConvertError::Serialization(e.to_string()))
}

/// Write a dataset to `path`, replacing any existing file.
pub fn serialize(dataset: &Dataset, path: impl AsRef<Path>) -> Result<(), ConvertError> {
    let path = path.as_ref();
    let content = to_json_string(dataset)?;
    std::fs::write(path, content)
        .map_err(|e| ConvertError::FileWrite(path.to_path_buf(), e.to_string()))?;
    info!("Wrote {} records to {}", dataset.len(), path.display());
    Ok(())
}

/// Parse records back from a JSON document.
pub fn parse_records(content: &str) -> Result<Vec<Record>, ConvertError> {
    serde_json::from_str(content).map_err(|e| ConvertError::Serialization(e.to_string()))
}

/// Reload records from a file written by [`serialize`].
pub fn read_json(path: impl AsRef<Path>) -> Result<Vec<Record>, ConvertError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .map_err(|e| ConvertError::FileRead(path.to_path_buf(), e.to_string()))?;
    parse_records(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CellValue;

    fn dataset() -> Dataset {
        Dataset::new(
            vec![
                "id".to_string(),
                "reading_text".to_string(),
                "question".to_string(),
                "model_answers".to_string(),
            ],
            vec![Record {
                id: CellValue::Integer(1),
                reading_text: "The sky is blue".to_string(),
                question: "What color?".to_string(),
                model_answers: vec!["blue".to_string(), "sky-blue".to_string()],
                ..Default::default()
            }],
        )
    }

    #[test]
    fn test_two_space_indentation() {
        let json = to_json_string(&dataset()).unwrap();
        let expected = r#"[
  {
    "id": 1,
    "reading_text": "The sky is blue",
    "question": "What color?",
    "model_answers": [
      "blue",
      "sky-blue"
    ]
  }
]"#;
        assert_eq!(json, expected);
    }

    #[test]
    fn test_empty_dataset() {
        let json = to_json_string(&Dataset::default()).unwrap();
        assert_eq!(json, "[]");
        assert!(parse_records(&json).unwrap().is_empty());
    }

    #[test]
    fn test_parse_records_round_trip() {
        let data = dataset();
        let json = to_json_string(&data).unwrap();
        assert_eq!(parse_records(&json).unwrap(), data.records);
    }

    #[test]
    fn test_parse_records_rejects_non_array() {
        assert!(matches!(
            parse_records(r#"{"id": 1}"#),
            Err(ConvertError::Serialization(_))
        ));
    }
}
