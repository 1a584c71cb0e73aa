//! Record field values

use std::fmt;

use gridtab_core::{format_number, CellValue};
use indexmap::IndexMap;

/// One parsed record: field name to value, in header order
pub type Record = IndexMap<String, FieldValue>;

/// The value of a record field
///
/// A field starts out as the cell's value and may be reshaped by a
/// converter into a list.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum FieldValue {
    /// Numeric value
    Number(f64),
    /// Text value
    Text(String),
    /// List of numbers
    NumberList(Vec<f64>),
    /// List of strings
    TextList(Vec<String>),
}

impl FieldValue {
    /// Create a new text value
    pub fn text<S: Into<String>>(s: S) -> Self {
        FieldValue::Text(s.into())
    }

    /// Try to get the value as a number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Try to get the value as a string slice
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get the value as a list of numbers
    pub fn as_number_list(&self) -> Option<&[f64]> {
        match self {
            FieldValue::NumberList(list) => Some(list),
            _ => None,
        }
    }

    /// Try to get the value as a list of strings
    pub fn as_text_list(&self) -> Option<&[String]> {
        match self {
            FieldValue::TextList(list) => Some(list),
            _ => None,
        }
    }

    /// Whether this is a number that failed to parse
    pub fn is_nan(&self) -> bool {
        matches!(self, FieldValue::Number(n) if n.is_nan())
    }

    /// Get the type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldValue::Number(_) => "number",
            FieldValue::Text(_) => "text",
            FieldValue::NumberList(_) => "number list",
            FieldValue::TextList(_) => "text list",
        }
    }

    /// Render into a single cell; lists become comma-joined text
    pub fn to_cell_value(&self) -> CellValue {
        match self {
            FieldValue::Number(n) => CellValue::Number(*n),
            FieldValue::Text(s) => CellValue::Text(s.clone()),
            FieldValue::NumberList(_) | FieldValue::TextList(_) => CellValue::Text(self.to_string()),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Number(n) => f.write_str(&format_number(*n)),
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::NumberList(list) => {
                let parts: Vec<String> = list.iter().map(|n| format_number(*n)).collect();
                f.write_str(&parts.join(","))
            }
            FieldValue::TextList(list) => f.write_str(&list.join(",")),
        }
    }
}

impl From<CellValue> for FieldValue {
    fn from(value: CellValue) -> Self {
        match value {
            CellValue::Number(n) => FieldValue::Number(n),
            CellValue::Text(s) => FieldValue::Text(s),
        }
    }
}

impl From<&CellValue> for FieldValue {
    fn from(value: &CellValue) -> Self {
        FieldValue::from(value.clone())
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Number(n)
    }
}

impl From<i32> for FieldValue {
    fn from(n: i32) -> Self {
        FieldValue::Number(n as f64)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<Vec<f64>> for FieldValue {
    fn from(list: Vec<f64>) -> Self {
        FieldValue::NumberList(list)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(list: Vec<String>) -> Self {
        FieldValue::TextList(list)
    }
}

impl From<Vec<&str>> for FieldValue {
    fn from(list: Vec<&str>) -> Self {
        FieldValue::TextList(list.into_iter().map(String::from).collect())
    }
}
