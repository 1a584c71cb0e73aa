//! Table type: header-addressed records parsed from a sheet

use std::collections::HashMap;

use gridtab_core::{CellAddress, CellValue, Sheet};

use crate::error::{TableError, TableResult};
use crate::options::{DuplicateHeaders, ParseOptions};
use crate::value::{FieldValue, Record};

/// An ordered sequence of records with a header list
///
/// Row order is the source row order and survives parsing, validation and
/// rendering.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Record>,
}

impl Table {
    /// Create a table from records
    ///
    /// When `headers` is `None` they are taken from the keys of the first
    /// record (empty if there are no records).
    pub fn new(rows: Vec<Record>, headers: Option<Vec<String>>) -> Self {
        let headers = headers.unwrap_or_else(|| {
            rows.first()
                .map(|record| record.keys().cloned().collect())
                .unwrap_or_default()
        });
        Self { headers, rows }
    }

    /// Parse a sheet whose first row holds the headers
    ///
    /// Headers are read left to right up to the first blank cell, lower-cased
    /// and resolved through the alias table built from `options`. Every
    /// following row up to `sheet.rows()` becomes one record.
    pub fn parse(sheet: &Sheet, options: &ParseOptions) -> TableResult<Self> {
        let aliases = AliasTable::new(options);
        let headers = Self::read_headers(sheet, &aliases, options.duplicate_headers)?;

        for name in &options.required {
            if !headers.contains(name) {
                return Err(TableError::MissingHeader(name.clone()));
            }
        }

        let mut rows = Vec::new();
        for r in 1..sheet.rows() {
            let mut record = Record::new();

            for (c, header) in headers.iter().enumerate() {
                // headers.len() <= sheet.columns() <= MAX_COLS
                let Some(cell) = sheet.get(r, c as u16) else {
                    continue;
                };

                let value = FieldValue::from(cell);
                let value = match options.converters.get(header) {
                    Some(converter) => {
                        converter
                            .apply(value)
                            .map_err(|message| TableError::Conversion {
                                row: r + 1,
                                field: header.clone(),
                                message,
                            })?
                    }
                    None => value,
                };
                record.insert(header.clone(), value);
            }

            for name in &options.required {
                if !record.contains_key(name) {
                    return Err(TableError::MissingField {
                        row: r + 1,
                        field: name.clone(),
                    });
                }
            }

            rows.push(record);
        }

        tracing::debug!("Parsed table: {} headers {:?}, {} rows", headers.len(), headers, rows.len());
        Ok(Self { headers, rows })
    }

    fn read_headers(
        sheet: &Sheet,
        aliases: &AliasTable,
        policy: DuplicateHeaders,
    ) -> TableResult<Vec<String>> {
        let mut headers = Vec::new();
        let mut seen: HashMap<String, u16> = HashMap::new();

        for c in 0..sheet.columns() {
            let col = c as u16;
            let name = match sheet.get(0, col) {
                Some(cell) if !cell.is_blank() => cell.to_string(),
                _ => break,
            };
            let name = aliases.resolve(&name);

            if let Some(&first) = seen.get(&name) {
                if policy == DuplicateHeaders::Reject {
                    return Err(TableError::DuplicateHeader {
                        name,
                        first: CellAddress::column_to_letters(first),
                        second: CellAddress::column_to_letters(col),
                    });
                }
                tracing::debug!("Header {name:?} repeated in column {col}, later values win");
            } else {
                seen.insert(name.clone(), col);
            }

            headers.push(name);
        }

        Ok(headers)
    }

    /// Render into a new sheet: headers in row 0, one row per record
    ///
    /// Missing fields become absent cells and lists become comma-joined text.
    pub fn to_sheet(&self) -> TableResult<Sheet> {
        Ok(Sheet::from_rows(self.dense_rows())?)
    }

    /// Render into a new named sheet
    pub fn to_sheet_named<S: Into<String>>(&self, name: S) -> TableResult<Sheet> {
        Ok(Sheet::from_rows_named(name, self.dense_rows())?)
    }

    fn dense_rows(&self) -> Vec<Vec<Option<CellValue>>> {
        let header_row = self
            .headers
            .iter()
            .map(|h| Some(CellValue::text(h.as_str())))
            .collect();

        std::iter::once(header_row)
            .chain(self.rows.iter().map(|record| {
                self.headers
                    .iter()
                    .map(|h| record.get(h).map(FieldValue::to_cell_value))
                    .collect()
            }))
            .collect()
    }

    /// Header names in column order
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Records in row order
    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    /// Get a record by 0-based index
    pub fn get(&self, index: usize) -> Option<&Record> {
        self.rows.get(index)
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table has no records
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate over records in row order
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.rows.iter()
    }

    /// Take the records
    pub fn into_rows(self) -> Vec<Record> {
        self.rows
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Table {
    type Item = Record;
    type IntoIter = std::vec::IntoIter<Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

/// Lower-cased name or synonym to canonical field name
struct AliasTable {
    names: HashMap<String, String>,
}

impl AliasTable {
    fn new(options: &ParseOptions) -> Self {
        let mut names = HashMap::new();

        // later inserts take precedence: converters < aliases < required
        for name in options.converters.keys() {
            names.insert(name.to_lowercase(), name.clone());
        }
        for (name, synonyms) in &options.aliases {
            names.insert(name.to_lowercase(), name.clone());
            for alias in synonyms {
                names.insert(alias.to_lowercase(), name.clone());
            }
        }
        for name in &options.required {
            names.insert(name.to_lowercase(), name.clone());
        }

        Self { names }
    }

    /// Resolve a raw header; unknown names come back lower-cased
    fn resolve(&self, raw: &str) -> String {
        let lower = raw.to_lowercase();
        match self.names.get(&lower) {
            Some(canonical) => canonical.clone(),
            None => lower,
        }
    }
}
