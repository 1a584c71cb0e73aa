//! [`WorkbookCodec`] over the XLSX reader and writer

use std::io::Cursor;

use gridtab_core::{RawWorkbook, WorkbookCodec};

use crate::error::{XlsxError, XlsxResult};
use crate::reader::XlsxReader;
use crate::writer::XlsxWriter;

/// Office Open XML spreadsheet codec
///
/// ```rust
/// use gridtab_core::{Sheet, Workbook};
/// use gridtab_xlsx::XlsxCodec;
///
/// let sheet = Sheet::from_rows_named("People", [["name", "age"], ["Ann", "34"]]).unwrap();
/// let workbook = Workbook::from_sheets([sheet]).unwrap();
///
/// let bytes = workbook.encode(&XlsxCodec).unwrap();
/// let decoded = Workbook::decode(&XlsxCodec, &bytes).unwrap();
/// assert_eq!(decoded, workbook);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct XlsxCodec;

impl WorkbookCodec for XlsxCodec {
    type Error = XlsxError;

    fn read_workbook(&self, bytes: &[u8]) -> XlsxResult<RawWorkbook> {
        XlsxReader::read(Cursor::new(bytes))
    }

    fn write_workbook(&self, workbook: &RawWorkbook) -> XlsxResult<Vec<u8>> {
        let mut cursor = Cursor::new(Vec::new());
        XlsxWriter::write(workbook, &mut cursor)?;
        Ok(cursor.into_inner())
    }
}
