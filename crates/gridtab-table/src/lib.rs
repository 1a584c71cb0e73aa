//! # gridtab-table
//!
//! Header-addressed tables on top of [`gridtab_core::Sheet`].
//!
//! - [`Table::parse`] reads the first sheet row as headers (with alias
//!   resolution and per-field converters) and every following row as a
//!   [`Record`]
//! - [`Table::validate`] runs async per-field [`Validators`] over every row,
//!   sequentially or concurrently, and reports failures per row
//! - [`Table::to_sheet`] renders the table back into a sheet
//!
//! ## Example
//!
//! ```rust
//! use gridtab_core::Sheet;
//! use gridtab_table::{Converter, FieldValue, ParseOptions, Table};
//!
//! let sheet = Sheet::from_rows([["Name", "Age"], ["Ann", "34"]]).unwrap();
//! let options = ParseOptions::new().with_converter("Age", Converter::Number);
//!
//! let table = Table::parse(&sheet, &options).unwrap();
//! assert_eq!(table.headers(), ["name", "Age"]);
//! assert_eq!(table.rows()[0]["Age"], FieldValue::Number(34.0));
//! ```

mod convert;
mod error;
mod options;
mod table;
mod validate;
mod value;

pub use convert::{parse_number, Converter};
pub use error::{AggregateValidationError, TableError, TableResult, ValidationError};
pub use options::{DuplicateHeaders, ParseOptions, ValidateOptions};
pub use table::Table;
pub use validate::{FieldContext, ValidationReport, Validator, Validators};
pub use value::{FieldValue, Record};
