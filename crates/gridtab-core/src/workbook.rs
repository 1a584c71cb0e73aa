//! Workbook type - an ordered collection of named sheets

use crate::codec::{RawWorkbook, WorkbookCodec};
use crate::error::{Error, Result};
use crate::sheet::Sheet;
use crate::MAX_SHEET_NAME_LEN;

/// A workbook (spreadsheet document)
///
/// Sheets keep their insertion order and every sheet carries a name that is
/// unique within the workbook, compared case-insensitively.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Workbook {
    /// Sheets in workbook order
    sheets: Vec<Sheet>,
}

impl Workbook {
    /// Create an empty workbook with no sheets
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a workbook from sheets, in order
    ///
    /// Unnamed sheets are given the first free `SheetN` name.
    pub fn from_sheets<I: IntoIterator<Item = Sheet>>(sheets: I) -> Result<Self> {
        let mut wb = Self::new();
        for sheet in sheets {
            wb.add_sheet(sheet)?;
        }
        Ok(wb)
    }

    /// Decode a workbook from container bytes
    pub fn decode<C: WorkbookCodec>(codec: &C, bytes: &[u8]) -> Result<Self> {
        let raw = codec.read_workbook(bytes).map_err(Error::codec)?;
        Self::from_raw(raw)
    }

    /// Encode this workbook into container bytes
    pub fn encode<C: WorkbookCodec>(&self, codec: &C) -> Result<Vec<u8>> {
        codec.write_workbook(&self.to_raw()).map_err(Error::codec)
    }

    /// Build a workbook from its codec form
    pub fn from_raw(mut raw: RawWorkbook) -> Result<Self> {
        let mut wb = Self::new();
        for name in raw.sheet_names {
            if wb.sheet(&name).is_some() {
                return Err(Error::DuplicateSheetName(name));
            }
            let map = raw
                .sheets
                .remove(&name)
                .ok_or_else(|| Error::SheetNotFound(name.clone()))?;
            wb.add_sheet(Sheet::from_cell_map(Some(name), map)?)?;
        }
        Ok(wb)
    }

    /// Flatten into codec form
    pub fn to_raw(&self) -> RawWorkbook {
        let mut raw = RawWorkbook::default();
        for sheet in &self.sheets {
            // every stored sheet is named by add_sheet
            let name = sheet.name().unwrap_or_default().to_string();
            raw.sheets.insert(name.clone(), sheet.to_cell_map());
            raw.sheet_names.push(name);
        }
        raw
    }

    /// Get the number of sheets
    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    /// Check if the workbook has no sheets
    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    /// Get a sheet by name
    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name() == Some(name))
    }

    /// Get a mutable sheet by name
    pub fn sheet_mut(&mut self, name: &str) -> Option<&mut Sheet> {
        self.sheets.iter_mut().find(|s| s.name() == Some(name))
    }

    /// Get a sheet by position
    pub fn sheet_at(&self, index: usize) -> Option<&Sheet> {
        self.sheets.get(index)
    }

    /// Get the index of a sheet by name
    pub fn sheet_index(&self, name: &str) -> Option<usize> {
        self.sheets.iter().position(|s| s.name() == Some(name))
    }

    /// Sheet names in workbook order
    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().filter_map(Sheet::name).collect()
    }

    /// Iterate over all sheets in order
    pub fn iter(&self) -> std::slice::Iter<'_, Sheet> {
        self.sheets.iter()
    }

    /// Append a sheet, returning its index
    ///
    /// An unnamed sheet receives a generated `SheetN` name.
    pub fn add_sheet(&mut self, sheet: Sheet) -> Result<usize> {
        let sheet = match sheet.name() {
            Some(name) => {
                self.validate_sheet_name(name)?;
                sheet
            }
            None => {
                let name = self.generate_sheet_name();
                sheet.into_named(name)
            }
        };

        let index = self.sheets.len();
        self.sheets.push(sheet);
        Ok(index)
    }

    /// Remove a sheet by name
    pub fn remove_sheet(&mut self, name: &str) -> Result<Sheet> {
        let index = self
            .sheet_index(name)
            .ok_or_else(|| Error::SheetNotFound(name.into()))?;
        Ok(self.sheets.remove(index))
    }

    /// Validate a sheet name against the existing sheets
    fn validate_sheet_name(&self, name: &str) -> Result<()> {
        if name.is_empty() {
            return Err(Error::InvalidSheetName("Sheet name cannot be empty".into()));
        }
        if name.chars().count() > MAX_SHEET_NAME_LEN {
            return Err(Error::InvalidSheetName(format!(
                "Sheet name too long (max {} characters)",
                MAX_SHEET_NAME_LEN
            )));
        }

        const INVALID_CHARS: &[char] = &[':', '\\', '/', '?', '*', '[', ']'];
        for c in INVALID_CHARS {
            if name.contains(*c) {
                return Err(Error::InvalidSheetName(format!(
                    "Sheet name cannot contain '{}'",
                    c
                )));
            }
        }

        // Check for duplicate names (case-insensitive)
        let name_lower = name.to_lowercase();
        if self
            .sheets
            .iter()
            .filter_map(Sheet::name)
            .any(|existing| existing.to_lowercase() == name_lower)
        {
            return Err(Error::DuplicateSheetName(name.into()));
        }

        Ok(())
    }

    /// Generate the first free `SheetN` name
    fn generate_sheet_name(&self) -> String {
        let mut n = 1;
        loop {
            let name = format!("Sheet{}", n);
            if self.validate_sheet_name(&name).is_ok() {
                return name;
            }
            n += 1;
        }
    }
}

impl<'a> IntoIterator for &'a Workbook {
    type Item = &'a Sheet;
    type IntoIter = std::slice::Iter<'a, Sheet>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
