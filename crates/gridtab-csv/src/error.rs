//! CSV error types

use thiserror::Error;

/// Result type for CSV operations
pub type CsvResult<T> = std::result::Result<T, CsvError>;

/// Errors that can occur during CSV operations
#[derive(Debug, Error)]
pub enum CsvError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV library error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A record lies outside the sheet's grid
    #[error("Record {row} does not fit the sheet: {source}")]
    OutOfBounds {
        /// 0-based record number
        row: usize,
        #[source]
        source: gridtab_core::Error,
    },
}
