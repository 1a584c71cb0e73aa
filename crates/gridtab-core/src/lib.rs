//! # gridtab-core
//!
//! Core data structures for the gridtab spreadsheet/table library.
//!
//! This crate provides the fundamental types used throughout gridtab:
//! - [`CellValue`] - A cell's value (number or text)
//! - [`CellAddress`] and [`CellRange`] - Cell addressing and the A1 codec
//! - [`Sheet`] - A sparse, range-tracked grid of cells
//! - [`Workbook`] - An ordered collection of named sheets
//! - [`WorkbookCodec`], [`RawWorkbook`], [`CellMap`] - The container format boundary
//!
//! ## Example
//!
//! ```rust
//! use gridtab_core::{CellValue, Sheet, Workbook};
//!
//! let mut sheet = Sheet::named("People");
//! sheet.set(0, 0, "Name").unwrap();
//! sheet.set(1, 0, "Ann").unwrap();
//! sheet.set(1, 1, 34).unwrap();
//!
//! assert_eq!(sheet.get(1, 1), Some(&CellValue::Number(34.0)));
//! assert_eq!(sheet.range().to_a1_string(), "A1:B2");
//!
//! let workbook = Workbook::from_sheets([sheet]).unwrap();
//! assert_eq!(workbook.sheet_names(), vec!["People"]);
//! ```

pub mod cell;
pub mod codec;
pub mod error;
pub mod sheet;
pub mod workbook;

// Re-exports for convenience
pub use cell::{format_number, CellAddress, CellRange, CellValue, IntoCellValue};
pub use codec::{CellMap, RawWorkbook, WorkbookCodec};
pub use error::{Error, Result};
pub use sheet::Sheet;
pub use workbook::Workbook;

/// Maximum number of rows in a sheet (Excel limit)
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a sheet (Excel limit)
pub const MAX_COLS: u16 = 16_384;

/// Maximum length of a sheet name
pub const MAX_SHEET_NAME_LEN: usize = 31;
