//! CSV reader

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::{CsvError, CsvResult};
use crate::options::CsvReadOptions;
use gridtab_core::{CellValue, Sheet};

/// CSV file reader
pub struct CsvReader;

impl CsvReader {
    /// Read a CSV file into a sheet
    pub fn read_file<P: AsRef<Path>>(path: P, options: &CsvReadOptions) -> CsvResult<Sheet> {
        let file = File::open(path)?;
        Self::read(BufReader::new(file), options)
    }

    /// Read CSV from a reader into a sheet
    ///
    /// Every record becomes a sheet row, the first one included; empty
    /// fields leave their cell absent. Records may differ in length.
    pub fn read<R: Read>(reader: R, options: &CsvReadOptions) -> CsvResult<Sheet> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut sheet = match &options.sheet_name {
            Some(name) => Sheet::named(name.clone()),
            None => Sheet::new(),
        };

        for (row_idx, result) in csv_reader.records().enumerate() {
            let record = result?;
            let row = u32::try_from(row_idx).unwrap_or(u32::MAX);

            for (col, field) in record.iter().enumerate() {
                if field.is_empty() {
                    continue;
                }

                let value = if options.auto_detect_types {
                    Self::detect_type(field)
                } else {
                    CellValue::text(field)
                };

                let col = u16::try_from(col).unwrap_or(u16::MAX);
                sheet
                    .set(row, col, value)
                    .map_err(|source| CsvError::OutOfBounds { row: row_idx, source })?;
            }
        }

        Ok(sheet)
    }

    /// Detect the type of a field value
    ///
    /// Only plain decimal numbers are converted; anything else, including
    /// `inf`/`NaN` spellings, stays text exactly as written.
    fn detect_type(field: &str) -> CellValue {
        let trimmed = field.trim();

        let numeric_chars = trimmed
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'));
        let has_digit = trimmed.chars().any(|c| c.is_ascii_digit());

        if numeric_chars && has_digit {
            if let Ok(n) = trimmed.parse::<f64>() {
                return CellValue::Number(n);
            }
        }

        CellValue::text(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_detect_type() {
        assert_eq!(CsvReader::detect_type("42"), CellValue::Number(42.0));
        assert_eq!(CsvReader::detect_type(" -1.5e3 "), CellValue::Number(-1500.0));
        assert_eq!(CsvReader::detect_type("true"), CellValue::text("true"));
        assert_eq!(CsvReader::detect_type("NaN"), CellValue::text("NaN"));
        assert_eq!(CsvReader::detect_type("inf"), CellValue::text("inf"));
        assert_eq!(CsvReader::detect_type("1-2"), CellValue::text("1-2"));
        assert_eq!(CsvReader::detect_type("  "), CellValue::text("  "));
    }

    #[test]
    fn test_read_sparse_records() {
        let csv = "Name,Age,\nAnn,34\n,,x\n";
        let sheet = CsvReader::read(csv.as_bytes(), &CsvReadOptions::default()).unwrap();

        assert_eq!(sheet.rows(), 3);
        assert_eq!(sheet.columns(), 3);
        assert_eq!(sheet.get(0, 0), Some(&CellValue::text("Name")));
        assert_eq!(sheet.get(1, 1), Some(&CellValue::Number(34.0)));
        assert_eq!(sheet.get(0, 2), None);
        assert_eq!(sheet.get(2, 0), None);
        assert_eq!(sheet.get(2, 2), Some(&CellValue::text("x")));
    }

    #[test]
    fn test_read_without_detection() {
        let options = CsvReadOptions::new()
            .with_type_detection(false)
            .with_delimiter(b';')
            .with_sheet_name("Raw");
        let sheet = CsvReader::read("a;007\n".as_bytes(), &options).unwrap();

        assert_eq!(sheet.name(), Some("Raw"));
        assert_eq!(sheet.get(0, 1), Some(&CellValue::text("007")));
    }

    #[test]
    fn test_quoted_fields() {
        let csv = "\"a,b\",\"line\nbreak\",\"\"\"q\"\"\"\n";
        let sheet = CsvReader::read(csv.as_bytes(), &CsvReadOptions::default()).unwrap();

        assert_eq!(sheet.get(0, 0), Some(&CellValue::text("a,b")));
        assert_eq!(sheet.get(0, 1), Some(&CellValue::text("line\nbreak")));
        assert_eq!(sheet.get(0, 2), Some(&CellValue::text("\"q\"")));
    }
}
