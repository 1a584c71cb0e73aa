//! End-to-end tests for XLSX roundtrip (create -> save -> read -> verify)

use gridtab::prelude::*;
use pretty_assertions::assert_eq;

/// Test basic roundtrip with numeric values
#[test]
fn test_roundtrip_numbers() {
    let mut sheet = Sheet::named("Numbers");
    sheet.set(0, 0, 42.0).unwrap();
    sheet.set(0, 1, 3.14159).unwrap();
    sheet.set(0, 2, -100.5).unwrap();
    sheet.set(1, 0, 0.0).unwrap();
    sheet.set(1, 1, 1e10).unwrap();
    let wb = Workbook::from_sheets([sheet]).unwrap();

    let bytes = wb.encode(&XlsxCodec).unwrap();
    let wb2 = Workbook::decode(&XlsxCodec, &bytes).unwrap();
    let sheet2 = wb2.sheet("Numbers").unwrap();

    assert_eq!(sheet2.get_a1("A1").unwrap(), Some(&CellValue::Number(42.0)));
    assert_eq!(sheet2.get_a1("B1").unwrap(), Some(&CellValue::Number(3.14159)));
    assert_eq!(sheet2.get_a1("C1").unwrap(), Some(&CellValue::Number(-100.5)));
    assert_eq!(sheet2.get_a1("A2").unwrap(), Some(&CellValue::Number(0.0)));
    assert_eq!(sheet2.get_a1("B2").unwrap(), Some(&CellValue::Number(1e10)));
    assert_eq!(sheet2.get_a1("C2").unwrap(), None);
}

/// Test basic roundtrip with string values
#[test]
fn test_roundtrip_strings() {
    let mut sheet = Sheet::new();
    sheet.set(0, 0, "Hello, World!").unwrap();
    sheet.set(0, 1, "").unwrap();
    sheet.set(0, 2, "Special: <>&\"'").unwrap();
    sheet.set(1, 0, "Multi\nLine").unwrap();
    sheet.set(1, 1, "Unicode: \u{1F600}").unwrap();
    sheet.set(1, 2, "42").unwrap();
    let wb = Workbook::from_sheets([sheet]).unwrap();

    let wb2 = Workbook::decode(&XlsxCodec, &wb.encode(&XlsxCodec).unwrap()).unwrap();

    assert_eq!(wb2.sheet_names(), vec!["Sheet1"]);
    assert_eq!(wb2, wb);
    // numeric-looking text stays text
    assert_eq!(
        wb2.sheet("Sheet1").unwrap().get(1, 2),
        Some(&CellValue::text("42"))
    );
}

/// Sheet order, names and high-water ranges survive
#[test]
fn test_roundtrip_sheets_and_ranges() {
    let mut first = Sheet::named("Zeta");
    first.set(4, 3, "x").unwrap();
    first.clear(4, 3);

    let second = Sheet::from_rows_named("Alpha", [["a", "b"]]).unwrap();
    let wb = Workbook::from_sheets([first, second, Sheet::new()]).unwrap();

    let wb2 = Workbook::decode(&XlsxCodec, &wb.encode(&XlsxCodec).unwrap()).unwrap();

    assert_eq!(wb2.sheet_names(), vec!["Zeta", "Alpha", "Sheet1"]);
    let zeta = wb2.sheet("Zeta").unwrap();
    assert!(zeta.is_empty());
    assert_eq!((zeta.rows(), zeta.columns()), (5, 4));
    assert_eq!(wb2.sheet("Sheet1").unwrap().range().to_a1_string(), "A1");
}

/// File helpers pick the format from the extension
#[test]
fn test_open_and_save_by_extension() {
    let dir = tempfile::tempdir().unwrap();
    let wb = Workbook::from_sheets([Sheet::from_rows_named("Data", [["k", "v"], ["a", "1"]]).unwrap()])
        .unwrap();

    let xlsx = dir.path().join("book.XLSX");
    wb.save(&xlsx).unwrap();
    assert_eq!(Workbook::open(&xlsx).unwrap(), wb);

    let csv = dir.path().join("book.csv");
    wb.save(&csv).unwrap();
    let from_csv = Workbook::open(&csv).unwrap();
    assert_eq!(from_csv.sheet_names(), vec!["Sheet1"]);
    // type detection turns "1" into a number
    assert_eq!(
        from_csv.sheet("Sheet1").unwrap().get(1, 1),
        Some(&CellValue::Number(1.0))
    );

    let err = wb.save(dir.path().join("book.ods")).unwrap_err();
    assert!(err.to_string().contains("Unsupported file format"), "{err}");
}

#[test]
fn test_open_corrupt_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.xlsx");
    std::fs::write(&path, b"not a zip").unwrap();

    let err = Workbook::open(&path).unwrap_err();
    assert!(matches!(err, Error::Codec(_)), "{err}");
}
