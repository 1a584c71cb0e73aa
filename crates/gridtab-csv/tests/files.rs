//! CSV file helpers

use gridtab_core::{CellValue, Sheet};
use gridtab_csv::{CsvReadOptions, CsvReader, CsvWriteOptions, CsvWriter};
use pretty_assertions::assert_eq;

#[test]
fn test_write_then_read_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("people.csv");

    let sheet = Sheet::from_rows(vec![
        vec![Some(CellValue::text("name")), Some(CellValue::text("score"))],
        vec![Some(CellValue::text("Ann")), Some(CellValue::Number(1.5))],
        vec![Some(CellValue::text("Bo")), None],
    ])
    .unwrap();

    CsvWriter::write_file(&sheet, &path, &CsvWriteOptions::default()).unwrap();
    let read = CsvReader::read_file(&path, &CsvReadOptions::default()).unwrap();

    assert_eq!(read, sheet);
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = CsvReader::read_file(dir.path().join("absent.csv"), &CsvReadOptions::default())
        .unwrap_err();
    assert!(matches!(err, gridtab_csv::CsvError::Io(_)), "{err}");
}
