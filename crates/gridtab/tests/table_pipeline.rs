//! Sheets from files through parse, validate and render

use gridtab::prelude::*;
use gridtab::{CsvWriteOptions, LineTerminator};
use pretty_assertions::assert_eq;

fn contacts() -> Sheet {
    Sheet::from_rows_named(
        "Contacts",
        vec![
            vec![Some("Full Name"), Some("E-Mail"), Some("Tags"), Some("Score")],
            vec![Some("Ann"), Some("ann@example.com"), Some("a, b"), Some("9.5")],
            vec![Some("Bo"), Some("bo.example.com"), None, Some("7")],
            vec![Some("Cy"), Some("cy@example.com"), Some("c"), Some("n/a")],
        ],
    )
    .unwrap()
}

fn options() -> ParseOptions {
    ParseOptions::new()
        .with_required("name")
        .with_alias("name", ["Full Name"])
        .with_alias("email", ["e-mail"])
        .with_converter("Tags", Converter::TextList)
        .with_converter("Score", Converter::Number)
}

fn validators() -> Validators {
    Validators::new()
        .with("email", |value: FieldValue, _ctx| async move {
            if value.as_text().is_some_and(|text| text.contains('@')) {
                Ok(value)
            } else {
                Err(ValidationError::new("invalid e-mail"))
            }
        })
        .with("Score", |value: FieldValue, _ctx| async move {
            match value.as_number() {
                Some(n) if !n.is_nan() => Ok(FieldValue::Number(n * 10.0)),
                _ => Err(ValidationError::new("score is not a number")),
            }
        })
}

#[tokio::test]
async fn test_pipeline_through_xlsx() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("contacts.xlsx");
    Workbook::from_sheets([contacts()]).unwrap().save(&path).unwrap();

    let workbook = Workbook::open(&path).unwrap();
    let table = Table::parse(workbook.sheet("Contacts").unwrap(), &options()).unwrap();
    assert_eq!(table.headers(), ["name", "email", "Tags", "Score"]);
    assert_eq!(table.rows()[0]["Tags"], FieldValue::from(vec!["a", "b"]));
    assert!(!table.rows()[1].contains_key("Tags"));

    for validate_options in [ValidateOptions::sequential(), ValidateOptions::parallel()] {
        let report = table.validate_partial(&validators(), &validate_options).await;

        assert_eq!(report.failures.keys().copied().collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(report.failures[&1].field(), Some("email"));
        assert_eq!(report.failures[&2].field(), Some("Score"));
        assert_eq!(report.table.len(), 1);
        assert_eq!(report.table.rows()[0]["Score"], FieldValue::Number(95.0));
    }

    let err = table
        .validate(&validators(), &ValidateOptions::parallel().with_concurrency(2))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "2 row(s) failed validation");
}

#[test]
fn test_missing_required_header() {
    let sheet = Sheet::from_rows([["email"], ["a@b.c"]]).unwrap();
    let err = Table::parse(&sheet, &options()).unwrap_err();
    assert!(matches!(err, TableError::MissingHeader(ref name) if name == "name"), "{err}");
}

#[test]
fn test_rendered_table_exports_to_csv() {
    let table = Table::parse(&contacts(), &options()).unwrap();
    let rendered = table.to_sheet_named("Out").unwrap();

    let mut out = Vec::new();
    let csv_options = CsvWriteOptions::new().with_line_terminator(LineTerminator::LF);
    CsvWriter::write(&rendered, &mut out, &csv_options).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "name,email,Tags,Score\n\
         Ann,ann@example.com,\"a,b\",9.5\n\
         Bo,bo.example.com,,7\n\
         Cy,cy@example.com,c,NaN\n"
    );
}
