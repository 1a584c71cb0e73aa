//! Codec boundary types
//!
//! A container format never sees a [`Sheet`](crate::Sheet) directly. Sheets
//! are flattened into a [`CellMap`] (A1-keyed cells plus an encoded range)
//! and a workbook into a [`RawWorkbook`]; a [`WorkbookCodec`] turns those
//! into bytes and back.

use std::collections::BTreeMap;

use crate::cell::CellValue;

/// One sheet in codec form: cells keyed by A1 address plus the A1 range
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellMap {
    /// Cells keyed by A1 address ("B3")
    pub cells: BTreeMap<String, CellValue>,
    /// Encoded bounding range ("A1:C3")
    pub range: String,
}

impl CellMap {
    /// Create an empty cell map covering `range`
    pub fn new<S: Into<String>>(range: S) -> Self {
        Self {
            cells: BTreeMap::new(),
            range: range.into(),
        }
    }
}

impl Default for CellMap {
    fn default() -> Self {
        Self::new("A1")
    }
}

/// A workbook in codec form
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawWorkbook {
    /// Sheet names in workbook order
    pub sheet_names: Vec<String>,
    /// Sheet contents keyed by name
    pub sheets: BTreeMap<String, CellMap>,
}

impl RawWorkbook {
    /// Iterate sheets in workbook order, skipping names without contents
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CellMap)> {
        self.sheet_names
            .iter()
            .filter_map(|name| self.sheets.get(name).map(|map| (name.as_str(), map)))
    }
}

/// A binary container format for workbooks
pub trait WorkbookCodec {
    /// Error produced by this codec
    type Error: std::error::Error + Send + Sync + 'static;

    /// Decode a container into its raw sheets
    fn read_workbook(&self, bytes: &[u8]) -> Result<RawWorkbook, Self::Error>;

    /// Encode raw sheets into a container
    fn write_workbook(&self, workbook: &RawWorkbook) -> Result<Vec<u8>, Self::Error>;
}
