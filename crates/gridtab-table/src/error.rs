//! Table error types

use std::collections::BTreeMap;

use thiserror::Error;

/// Result type for table operations
pub type TableResult<T> = std::result::Result<T, TableError>;

/// Errors that can occur while parsing, validating or rendering a table
#[derive(Debug, Error)]
pub enum TableError {
    /// A required header is missing from the header row
    #[error("Missing required header in table: \"{0}\"")]
    MissingHeader(String),

    /// A row lacks a value for a required field
    #[error("Missing required field \"{field}\" in row #{row}")]
    MissingField {
        /// 1-based spreadsheet row number
        row: u32,
        field: String,
    },

    /// Two header cells resolved to the same name
    #[error("Duplicate header \"{name}\" in columns {first} and {second}")]
    DuplicateHeader {
        name: String,
        /// Column letters of the first occurrence
        first: String,
        /// Column letters of the repeated occurrence
        second: String,
    },

    /// A custom converter rejected a cell value
    #[error("Cannot convert field \"{field}\" in row #{row}: {message}")]
    Conversion {
        /// 1-based spreadsheet row number
        row: u32,
        field: String,
        message: String,
    },

    /// One or more rows failed validation
    #[error(transparent)]
    Validation(#[from] AggregateValidationError),

    /// Sheet error while rendering
    #[error("Sheet error: {0}")]
    Sheet(#[from] gridtab_core::Error),
}

/// A validator's rejection of a field value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    message: String,
    field: Option<String>,
}

impl ValidationError {
    /// Create a new validation error with a message
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self {
            message: message.into(),
            field: None,
        }
    }

    /// The rejection message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The field whose validator failed, once the error has left the validator
    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    pub(crate) fn in_field(mut self, field: &str) -> Self {
        if self.field.is_none() {
            self.field = Some(field.to_string());
        }
        self
    }
}

impl From<&str> for ValidationError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for ValidationError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

/// Every failed row of a validation pass, keyed by 0-based row index
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} row(s) failed validation", .errors.len())]
pub struct AggregateValidationError {
    errors: BTreeMap<usize, ValidationError>,
}

impl AggregateValidationError {
    /// Wrap a map of row index to error
    pub fn new(errors: BTreeMap<usize, ValidationError>) -> Self {
        Self { errors }
    }

    /// Error for a row, if that row failed
    pub fn get(&self, row: usize) -> Option<&ValidationError> {
        self.errors.get(&row)
    }

    /// Indices of the failed rows, ascending
    pub fn rows(&self) -> impl Iterator<Item = usize> + '_ {
        self.errors.keys().copied()
    }

    /// Iterate over (row index, error) pairs, ascending
    pub fn iter(&self) -> impl Iterator<Item = (usize, &ValidationError)> {
        self.errors.iter().map(|(&row, err)| (row, err))
    }

    /// Number of failed rows
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Check if no row failed
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Take the underlying map
    pub fn into_inner(self) -> BTreeMap<usize, ValidationError> {
        self.errors
    }
}
