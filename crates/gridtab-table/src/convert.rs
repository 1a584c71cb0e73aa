//! Field converters
//!
//! Numeric conversion follows numeric-literal rules rather than Rust's
//! `f64::from_str`: surrounding whitespace is ignored, the empty string is
//! zero, `0x`/`0o`/`0b` prefixes are honoured and anything unparseable
//! becomes NaN instead of an error.

use std::fmt;
use std::sync::Arc;

use crate::value::FieldValue;

type CustomFn = dyn Fn(FieldValue) -> Result<FieldValue, String> + Send + Sync;

/// How a column's raw cell value is turned into a field value
#[derive(Clone, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Converter {
    /// Keep the cell value as is
    #[default]
    Identity,
    /// Parse as a number (NaN when unparseable)
    #[cfg_attr(feature = "serde", serde(alias = "num"))]
    Number,
    /// Stringify
    #[cfg_attr(feature = "serde", serde(alias = "string"))]
    Text,
    /// Split on commas and parse each piece as a number
    #[cfg_attr(feature = "serde", serde(alias = "number[]"))]
    NumberList,
    /// Split on commas and trim each piece
    #[cfg_attr(feature = "serde", serde(alias = "string[]"))]
    TextList,
    /// User-supplied fallible conversion
    #[cfg_attr(feature = "serde", serde(skip))]
    Custom(Arc<CustomFn>),
}

impl Converter {
    /// Wrap a fallible conversion function
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(FieldValue) -> Result<FieldValue, String> + Send + Sync + 'static,
    {
        Converter::Custom(Arc::new(f))
    }

    /// Apply this converter to a value
    ///
    /// Only [`Converter::Custom`] can fail; the error is its message.
    pub fn apply(&self, value: FieldValue) -> Result<FieldValue, String> {
        match self {
            Converter::Identity => Ok(value),
            Converter::Number => Ok(FieldValue::Number(to_number(&value))),
            Converter::Text => Ok(FieldValue::Text(value.to_string())),
            Converter::NumberList => Ok(FieldValue::NumberList(
                split_list(&value).iter().map(|s| parse_number(s)).collect(),
            )),
            Converter::TextList => Ok(FieldValue::TextList(split_list(&value))),
            Converter::Custom(f) => f(value),
        }
    }
}

impl fmt::Debug for Converter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Converter::Identity => f.write_str("Identity"),
            Converter::Number => f.write_str("Number"),
            Converter::Text => f.write_str("Text"),
            Converter::NumberList => f.write_str("NumberList"),
            Converter::TextList => f.write_str("TextList"),
            Converter::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

fn to_number(value: &FieldValue) -> f64 {
    match value {
        FieldValue::Number(n) => *n,
        // a list reads as its joined text, so a one-element list keeps its number
        other => parse_number(&other.to_string()),
    }
}

fn split_list(value: &FieldValue) -> Vec<String> {
    value
        .to_string()
        .split(',')
        .map(|piece| piece.trim().to_string())
        .collect()
}

/// Parse text as a numeric literal, yielding NaN when it is not one
///
/// # Examples
/// ```
/// use gridtab_table::parse_number;
///
/// assert_eq!(parse_number(" 34 "), 34.0);
/// assert_eq!(parse_number(""), 0.0);
/// assert_eq!(parse_number("0x1F"), 31.0);
/// assert!(parse_number("x").is_nan());
/// ```
pub fn parse_number(text: &str) -> f64 {
    let s = text.trim();
    if s.is_empty() {
        return 0.0;
    }

    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    let radix = match s.get(..2) {
        Some("0x") | Some("0X") => Some(16),
        Some("0o") | Some("0O") => Some(8),
        Some("0b") | Some("0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return parse_radix(&s[2..], radix);
    }

    // f64::from_str also accepts "inf" and "nan", which are not literals
    let is_decimal = s
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'));
    if !is_decimal {
        return f64::NAN;
    }

    s.parse::<f64>().unwrap_or(f64::NAN)
}

fn parse_radix(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }

    let mut acc = 0.0f64;
    for c in digits.chars() {
        match c.to_digit(radix) {
            Some(d) => acc = acc * radix as f64 + d as f64,
            None => return f64::NAN,
        }
    }
    acc
}
