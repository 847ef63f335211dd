//! Text field cleaning

use crate::models::{CellValue, SourceTable};

/// Character stripped from both ends of the text fields
pub const QUOTE_CHAR: char = '"';

/// Strip every contiguous `"` from both ends of `value`.
pub fn strip_quotes(value: &str) -> String {
    value.trim_matches(QUOTE_CHAR).to_string()
}

/// Coerce `reading_text` and `question` to text and strip wrapping quotes.
pub fn clean(mut table: SourceTable) -> SourceTable {
    for record in &mut table.records {
        record.reading_text = clean_cell(&record.reading_text);
        record.question = clean_cell(&record.question);
    }
    table
}

fn clean_cell(cell: &CellValue) -> CellValue {
    CellValue::Text(strip_quotes(&cell.to_text()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SourceRecord;

    fn table_with(reading_text: CellValue, question: CellValue) -> SourceTable {
        SourceTable {
            columns: vec![],
            records: vec![SourceRecord {
                reading_text,
                question,
                ..Default::default()
            }],
        }
    }

    #[test]
    fn test_strip_single_pair() {
        assert_eq!(strip_quotes("\"Hello world\""), "Hello world");
    }

    #[test]
    fn test_strip_removes_runs_of_quotes() {
        assert_eq!(strip_quotes("\"\"\"Hi\"\""), "Hi");
    }

    #[test]
    fn test_strip_keeps_inner_quotes_and_whitespace() {
        assert_eq!(
            strip_quotes(" \"say \"hi\"\" "),
            " \"say \"hi\"\" "
        );
        assert_eq!(strip_quotes("a \"b\" c"), "a \"b\" c");
    }

    #[test]
    fn test_strip_only_quotes() {
        assert_eq!(strip_quotes("\"\""), "");
    }

    #[test]
    fn test_clean_coerces_to_text() {
        let cleaned = clean(table_with(CellValue::Missing, CellValue::Integer(12)));
        let record = &cleaned.records[0];
        assert_eq!(record.reading_text, CellValue::from(""));
        assert_eq!(record.question, CellValue::from("12"));
    }

    #[test]
    fn test_clean_leaves_other_fields() {
        let mut table = table_with(CellValue::from("\"r\""), CellValue::from("\"q\""));
        table.records[0].model_answers = CellValue::from("\"a\"; \"b\"");
        let cleaned = clean(table);
        let record = &cleaned.records[0];
        assert_eq!(record.reading_text, CellValue::from("r"));
        assert_eq!(record.question, CellValue::from("q"));
        assert_eq!(record.model_answers, CellValue::from("\"a\"; \"b\""));
    }
}
