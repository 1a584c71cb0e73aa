//! Cell value types

use std::fmt;

/// Represents the value stored in a cell
///
/// There is no empty variant: an empty cell is the absence of an entry in
/// the sheet's storage.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum CellValue {
    /// Numeric value (all numbers stored as f64)
    Number(f64),

    /// Text value
    Text(String),
}

impl CellValue {
    /// Create a new text value
    pub fn text<S: Into<String>>(s: S) -> Self {
        CellValue::Text(s.into())
    }

    /// Check if the cell holds a number
    pub fn is_number(&self) -> bool {
        matches!(self, CellValue::Number(_))
    }

    /// Check if the cell holds text
    pub fn is_text(&self) -> bool {
        matches!(self, CellValue::Text(_))
    }

    /// Try to get the value as a number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            CellValue::Text(_) => None,
        }
    }

    /// Try to get the value as a string slice
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            CellValue::Number(_) => None,
        }
    }

    /// Whether this value terminates a header row: empty text, zero or NaN
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Number(n) => *n == 0.0 || n.is_nan(),
            CellValue::Text(s) => s.is_empty(),
        }
    }

    /// Get the type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            CellValue::Number(_) => "number",
            CellValue::Text(_) => "text",
        }
    }
}

/// Render a number the way spreadsheet text cells expect it
///
/// Integral values have no trailing `.0`, infinities read `Infinity` /
/// `-Infinity` and NaN reads `NaN`.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if n == 0.0 {
        // covers -0.0
        "0".to_string()
    } else {
        n.to_string()
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Number(n) => f.write_str(&format_number(*n)),
            CellValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<i32> for CellValue {
    fn from(n: i32) -> Self {
        CellValue::Number(n as f64)
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Number(n as f64)
    }
}

impl From<u32> for CellValue {
    fn from(n: u32) -> Self {
        CellValue::Number(n as f64)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Text(b.to_string())
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

/// Anything that can be written into a sheet cell
///
/// `None` means "no value" and clears the target cell. Numbers become
/// [`CellValue::Number`], everything else is stringified into
/// [`CellValue::Text`].
pub trait IntoCellValue {
    /// Convert into a cell value, `None` for an absent value
    fn into_cell_value(self) -> Option<CellValue>;
}

impl IntoCellValue for CellValue {
    fn into_cell_value(self) -> Option<CellValue> {
        Some(self)
    }
}

impl IntoCellValue for &CellValue {
    fn into_cell_value(self) -> Option<CellValue> {
        Some(self.clone())
    }
}

impl<T: IntoCellValue> IntoCellValue for Option<T> {
    fn into_cell_value(self) -> Option<CellValue> {
        self.and_then(IntoCellValue::into_cell_value)
    }
}

macro_rules! into_cell_value_via_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IntoCellValue for $ty {
                fn into_cell_value(self) -> Option<CellValue> {
                    Some(CellValue::from(self))
                }
            }
        )*
    };
}

into_cell_value_via_from!(i32, i64, u32, f64, bool, &str, String);

impl IntoCellValue for &String {
    fn into_cell_value(self) -> Option<CellValue> {
        Some(CellValue::Text(self.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_value_conversions() {
        assert_eq!(CellValue::from(42), CellValue::Number(42.0));
        assert_eq!(CellValue::from(3.25), CellValue::Number(3.25));
        assert_eq!(CellValue::from(true), CellValue::text("true"));
        assert_eq!(CellValue::from(false), CellValue::text("false"));

        let s = CellValue::from("hello");
        assert_eq!(s.as_text(), Some("hello"));
        assert_eq!(s.as_number(), None);
    }

    #[test]
    fn test_into_cell_value_option() {
        assert_eq!(None::<f64>.into_cell_value(), None);
        assert_eq!(Some("x").into_cell_value(), Some(CellValue::text("x")));
        // Empty text and zero are values, not absences
        assert_eq!("".into_cell_value(), Some(CellValue::text("")));
        assert_eq!(0.into_cell_value(), Some(CellValue::Number(0.0)));
    }

    #[test]
    fn test_display() {
        assert_eq!(CellValue::Number(34.0).to_string(), "34");
        assert_eq!(CellValue::Number(3.5).to_string(), "3.5");
        assert_eq!(CellValue::Number(-0.0).to_string(), "0");
        assert_eq!(CellValue::Number(f64::NAN).to_string(), "NaN");
        assert_eq!(CellValue::Number(f64::INFINITY).to_string(), "Infinity");
        assert_eq!(CellValue::text("Ann").to_string(), "Ann");
    }

    #[test]
    fn test_is_blank() {
        assert!(CellValue::text("").is_blank());
        assert!(CellValue::Number(0.0).is_blank());
        assert!(CellValue::Number(f64::NAN).is_blank());
        assert!(!CellValue::text("0").is_blank());
        assert!(!CellValue::Number(1.0).is_blank());
    }
}
