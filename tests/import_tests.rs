//! CSV import tests

use std::io::Write;

use questions_converter::import::load;
use questions_converter::models::CellValue;
use questions_converter::{ConvertError, REQUIRED_COLUMNS};
use tempfile::NamedTempFile;

fn csv_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_counts_data_rows() {
    let file = csv_file(
        "id,reading_text,question,model_answers\n\
         1,text one,q one,a\n\
         2,text two,q two,b; c\n\
         3,text three,q three,\n",
    );

    let table = load(file.path()).unwrap();
    assert_eq!(table.len(), 3);
    assert_eq!(
        table.columns,
        vec!["id", "reading_text", "question", "model_answers"]
    );
}

#[test]
fn test_load_header_only_gives_empty_table() {
    let file = csv_file("id,reading_text,question,model_answers\n");
    let table = load(file.path()).unwrap();
    assert!(table.is_empty());
}

#[test]
fn test_load_tolerates_extra_columns() {
    let file = csv_file(
        "topic,id,reading_text,question,model_answers,difficulty\n\
         weather,1,r,q,a,easy\n",
    );

    let table = load(file.path()).unwrap();
    let record = &table.records[0];
    assert_eq!(record.id, CellValue::Integer(1));
    assert_eq!(record.extra.len(), 2);
    assert_eq!(record.extra.get("topic"), Some(&CellValue::from("weather")));
    assert_eq!(record.extra.get("difficulty"), Some(&CellValue::from("easy")));
}

#[test]
fn test_load_each_missing_column_fails() {
    for skipped in REQUIRED_COLUMNS {
        let header: Vec<&str> = REQUIRED_COLUMNS
            .iter()
            .copied()
            .filter(|c| *c != skipped)
            .collect();
        let file = csv_file(&format!("{}\na,b,c\n", header.join(",")));

        match load(file.path()) {
            Err(ConvertError::Schema(missing)) => assert_eq!(missing, vec![skipped]),
            other => panic!("expected schema error for {skipped}, got {other:?}"),
        }
    }
}

#[test]
fn test_load_empty_file_fails_validation() {
    let file = csv_file("");
    let err = load(file.path()).unwrap_err();
    assert!(err.is_schema_error());
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = load(dir.path().join("nope.csv")).unwrap_err();
    assert!(matches!(err, ConvertError::FileRead(_, _)));
}

#[test]
fn test_load_quoted_fields_with_commas_and_newlines() {
    let file = csv_file(
        "id,reading_text,question,model_answers\n\
         7,\"First line,\nsecond line\",\"Why, though?\",\"x; y\"\n",
    );

    let table = load(file.path()).unwrap();
    let record = &table.records[0];
    assert_eq!(
        record.reading_text,
        CellValue::from("First line,\nsecond line")
    );
    assert_eq!(record.question, CellValue::from("Why, though?"));
    assert_eq!(record.model_answers, CellValue::from("x; y"));
}

#[test]
fn test_load_missing_sentinels() {
    let file = csv_file(
        "id,reading_text,question,model_answers\n\
         1,NA,null,N/A\n\
         2,,None,\n",
    );

    let table = load(file.path()).unwrap();
    for record in &table.records {
        assert!(record.reading_text.is_missing());
        assert!(record.question.is_missing());
        assert!(record.model_answers.is_missing());
    }
}
