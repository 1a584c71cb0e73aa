//! Prelude module - common imports for gridtab users
//!
//! ```rust
//! use gridtab::prelude::*;
//! ```

pub use crate::{
    // Grid types
    CellAddress,
    CellRange,
    CellValue,
    Sheet,
    Workbook,
    WorkbookExt,

    // Table types
    Converter,
    FieldContext,
    FieldValue,
    ParseOptions,
    Record,
    Table,
    ValidateOptions,
    ValidationError,
    Validators,

    // Error types
    Error,
    Result,
    TableError,
    TableResult,
};

#[cfg(feature = "csv")]
pub use crate::{CsvReader, CsvWriter};
#[cfg(feature = "xlsx")]
pub use crate::{XlsxCodec, XlsxReader, XlsxWriter};
