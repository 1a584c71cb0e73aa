//! # gridtab-csv
//!
//! CSV reader and writer for gridtab sheets.
//!
//! CSV holds a single sheet. [`CsvWriter`] exports the dense view of a sheet
//! (every row and column its range covers); [`CsvReader`] builds a sheet
//! back, optionally storing numeric fields as numbers.

mod error;
mod options;
mod reader;
mod writer;

pub use error::{CsvError, CsvResult};
pub use options::{CsvReadOptions, CsvWriteOptions, LineTerminator};
pub use reader::CsvReader;
pub use writer::CsvWriter;
