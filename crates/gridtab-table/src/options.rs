//! Parse and validation options

use std::collections::BTreeMap;

use crate::convert::Converter;

/// What to do when two header cells resolve to the same field name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum DuplicateHeaders {
    /// Keep both columns; a present value in the later column overwrites the earlier one
    #[default]
    LastWins,
    /// Fail the parse with [`TableError::DuplicateHeader`](crate::TableError::DuplicateHeader)
    Reject,
}

/// Options for [`Table::parse`](crate::Table::parse)
///
/// # Examples
/// ```
/// use gridtab_table::{Converter, ParseOptions};
///
/// let options = ParseOptions::new()
///     .with_required("email")
///     .with_alias("email", ["E-mail", "Mail"])
///     .with_converter("tags", Converter::TextList);
///
/// assert_eq!(options.required, vec!["email"]);
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ParseOptions {
    /// Field names every row must contain (after alias resolution)
    pub required: Vec<String>,
    /// Canonical name to synonyms, matched case-insensitively
    pub aliases: BTreeMap<String, Vec<String>>,
    /// Canonical name to converter
    pub converters: BTreeMap<String, Converter>,
    /// Policy for repeated header names
    pub duplicate_headers: DuplicateHeaders,
}

impl ParseOptions {
    /// Create options with no requirements, aliases or converters
    pub fn new() -> Self {
        Self::default()
    }

    /// Require a field
    pub fn with_required<S: Into<String>>(mut self, name: S) -> Self {
        self.required.push(name.into());
        self
    }

    /// Register synonyms for a canonical field name
    pub fn with_alias<S, I, A>(mut self, canonical: S, aliases: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        self.aliases
            .entry(canonical.into())
            .or_default()
            .extend(aliases.into_iter().map(Into::into));
        self
    }

    /// Set the converter for a field
    pub fn with_converter<S: Into<String>>(mut self, name: S, converter: Converter) -> Self {
        self.converters.insert(name.into(), converter);
        self
    }

    /// Set the duplicate header policy
    pub fn with_duplicate_headers(mut self, policy: DuplicateHeaders) -> Self {
        self.duplicate_headers = policy;
        self
    }
}

/// Options for [`Table::validate`](crate::Table::validate)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ValidateOptions {
    /// Validate rows concurrently instead of one at a time
    pub parallel: bool,
    /// Upper bound on rows in flight when `parallel` is set (None = all rows)
    pub concurrency: Option<usize>,
}

impl ValidateOptions {
    /// Rows are validated one at a time, in order
    pub fn sequential() -> Self {
        Self::default()
    }

    /// Every row is started at once
    pub fn parallel() -> Self {
        Self {
            parallel: true,
            concurrency: None,
        }
    }

    /// Limit the number of rows in flight; implies `parallel`
    pub fn with_concurrency(mut self, limit: usize) -> Self {
        self.parallel = true;
        self.concurrency = Some(limit);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_options_builder() {
        let options = ParseOptions::new()
            .with_required("Name")
            .with_alias("email", ["E-mail"])
            .with_alias("email", vec!["Mail".to_string()])
            .with_converter("Age", Converter::Number)
            .with_duplicate_headers(DuplicateHeaders::Reject);

        assert_eq!(options.required, vec!["Name"]);
        assert_eq!(options.aliases["email"], vec!["E-mail", "Mail"]);
        assert!(matches!(options.converters["Age"], Converter::Number));
        assert_eq!(options.duplicate_headers, DuplicateHeaders::Reject);
    }

    #[test]
    fn test_validate_options() {
        assert!(!ValidateOptions::default().parallel);
        assert_eq!(ValidateOptions::sequential(), ValidateOptions::default());

        let options = ValidateOptions::sequential().with_concurrency(4);
        assert!(options.parallel);
        assert_eq!(options.concurrency, Some(4));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_parse_options_from_json() {
        let options: ParseOptions = serde_json::from_str(
            r#"{
                "required": ["email"],
                "aliases": {"email": ["E-mail"]},
                "converters": {"age": "number", "tags": "string[]"}
            }"#,
        )
        .unwrap();

        assert_eq!(options.required, vec!["email"]);
        assert!(matches!(options.converters["age"], Converter::Number));
        assert!(matches!(options.converters["tags"], Converter::TextList));
        assert_eq!(options.duplicate_headers, DuplicateHeaders::LastWins);
    }
}
