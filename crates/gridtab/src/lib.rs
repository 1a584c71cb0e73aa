//! # gridtab
//!
//! Typed, header-addressed tables over spreadsheet grids.
//!
//! - [`Sheet`] and [`Workbook`]: sparse cell grids with A1 addressing and a
//!   range that only grows
//! - [`Table`]: header-row parsing with aliases, converters and required
//!   fields, plus async per-field validation run sequentially or in parallel
//! - XLSX and CSV codecs (features `xlsx` and `csv`, on by default) and
//!   [`WorkbookExt`] for opening and saving files by extension
//!
//! ## Example
//!
//! ```rust
//! use gridtab::prelude::*;
//!
//! let sheet = Sheet::from_rows([["Name", "Age"], ["Ann", "34"], ["Bo", "x"]])?;
//! let options = ParseOptions::new()
//!     .with_required("Name")
//!     .with_converter("Age", Converter::Number);
//!
//! let table = Table::parse(&sheet, &options)?;
//! assert_eq!(table.rows()[0]["Age"], FieldValue::Number(34.0));
//! assert!(table.rows()[1]["Age"].is_nan());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod prelude;

pub use gridtab_core::{
    format_number, CellAddress, CellMap, CellRange, CellValue, Error, IntoCellValue, RawWorkbook,
    Result, Sheet, Workbook, WorkbookCodec, MAX_COLS, MAX_ROWS, MAX_SHEET_NAME_LEN,
};

pub use gridtab_table::{
    parse_number, AggregateValidationError, Converter, DuplicateHeaders, FieldContext,
    FieldValue, ParseOptions, Record, Table, TableError, TableResult, ValidateOptions,
    ValidationError, ValidationReport, Validator, Validators,
};

#[cfg(feature = "csv")]
pub use gridtab_csv::{
    CsvError, CsvReadOptions, CsvReader, CsvResult, CsvWriteOptions, CsvWriter, LineTerminator,
};
#[cfg(feature = "xlsx")]
pub use gridtab_xlsx::{XlsxCodec, XlsxError, XlsxReader, XlsxResult, XlsxWriter};

use std::path::Path;

/// Extension trait for Workbook to add file I/O
///
/// The format is chosen by file extension: `.xlsx`/`.xlsm` go through the
/// XLSX codec, `.csv` holds a single sheet.
pub trait WorkbookExt: Sized {
    /// Open a workbook from a file
    fn open<P: AsRef<Path>>(path: P) -> Result<Self>;

    /// Save the workbook to a file
    fn save<P: AsRef<Path>>(&self, path: P) -> Result<()>;
}

fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
}

impl WorkbookExt for Workbook {
    fn open<P: AsRef<Path>>(path: P) -> Result<Workbook> {
        let path = path.as_ref();

        match extension_of(path).as_deref() {
            #[cfg(feature = "xlsx")]
            Some("xlsx") | Some("xlsm") => {
                let raw = XlsxReader::read_file(path).map_err(Error::codec)?;
                Workbook::from_raw(raw)
            }
            #[cfg(feature = "csv")]
            Some("csv") => {
                let sheet = CsvReader::read_file(path, &CsvReadOptions::default())
                    .map_err(Error::codec)?;
                Workbook::from_sheets([sheet])
            }
            _ => Err(Error::other(format!(
                "Unsupported file format: {}",
                path.display()
            ))),
        }
    }

    fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();

        match extension_of(path).as_deref() {
            #[cfg(feature = "xlsx")]
            Some("xlsx") => XlsxWriter::write_file(&self.to_raw(), path).map_err(Error::codec),
            #[cfg(feature = "csv")]
            Some("csv") => match self.sheet_at(0) {
                Some(sheet) => CsvWriter::write_file(sheet, path, &CsvWriteOptions::default())
                    .map_err(Error::codec),
                None => Err(Error::other("No sheets to save")),
            },
            _ => Err(Error::other(format!(
                "Unsupported file format: {}",
                path.display()
            ))),
        }
    }
}
