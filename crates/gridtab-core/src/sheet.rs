//! Sheet type

use crate::cell::{CellAddress, CellRange, CellStorage, CellValue, IntoCellValue};
use crate::codec::CellMap;
use crate::error::{Error, Result};
use crate::{MAX_COLS, MAX_ROWS};

/// A sparse grid of cells with a name and a bounding range
///
/// The range is a high-water mark: it grows to cover every cell ever
/// written and is never shrunk by [`Sheet::clear`]. Use
/// [`Sheet::used_range`] for the tight box around the cells present now.
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    /// Sheet name, fixed at construction
    name: Option<String>,
    /// Cell storage
    cells: CellStorage,
    /// Bounds of every cell written so far
    range: CellRange,
}

impl Sheet {
    /// Create a new unnamed, empty sheet
    pub fn new() -> Self {
        Self {
            name: None,
            cells: CellStorage::new(),
            range: CellRange::default(),
        }
    }

    /// Create a new empty sheet with the given name
    pub fn named<S: Into<String>>(name: S) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::new()
        }
    }

    /// Build a sheet from a dense array of rows
    ///
    /// Rows are written top to bottom and columns left to right. Elements that
    /// convert to `None` are skipped.
    ///
    /// # Examples
    /// ```
    /// use gridtab_core::{CellValue, Sheet};
    ///
    /// let sheet = Sheet::from_rows([["Name", "Age"], ["Ann", "34"]]).unwrap();
    /// assert_eq!(sheet.rows(), 2);
    /// assert_eq!(sheet.get(1, 1), Some(&CellValue::text("34")));
    /// ```
    pub fn from_rows<R, C, V>(rows: R) -> Result<Self>
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator<Item = V>,
        V: IntoCellValue,
    {
        let mut sheet = Self::new();
        sheet.fill_rows(rows)?;
        Ok(sheet)
    }

    /// Build a named sheet from a dense array of rows
    pub fn from_rows_named<S, R, C, V>(name: S, rows: R) -> Result<Self>
    where
        S: Into<String>,
        R: IntoIterator<Item = C>,
        C: IntoIterator<Item = V>,
        V: IntoCellValue,
    {
        let mut sheet = Self::named(name);
        sheet.fill_rows(rows)?;
        Ok(sheet)
    }

    fn fill_rows<R, C, V>(&mut self, rows: R) -> Result<()>
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator<Item = V>,
        V: IntoCellValue,
    {
        for (row, columns) in rows.into_iter().enumerate() {
            let row = u32::try_from(row).map_err(|_| Error::RowOutOfBounds(u32::MAX, MAX_ROWS - 1))?;
            for (col, value) in columns.into_iter().enumerate() {
                let col = u16::try_from(col)
                    .map_err(|_| Error::ColumnOutOfBounds(u32::MAX, MAX_COLS - 1))?;
                self.set(row, col, value)?;
            }
        }
        Ok(())
    }

    /// Build a sheet from its codec form
    ///
    /// The declared range is kept, widened if a cell lies outside it.
    pub fn from_cell_map(name: Option<String>, map: CellMap) -> Result<Self> {
        let mut range = CellRange::parse(&map.range)?;
        let mut cells = CellStorage::new();

        for (key, value) in map.cells {
            let addr = CellAddress::parse(&key)?;
            range.expand_to(addr);
            cells.insert(addr.row, addr.col, value);
        }

        Ok(Self { name, cells, range })
    }

    /// Flatten into codec form
    pub fn to_cell_map(&self) -> CellMap {
        let mut map = CellMap::new(self.range.to_a1_string());
        for (row, col, value) in self.cells.iter() {
            map.cells
                .insert(CellAddress::new(row, col).to_a1_string(), value.clone());
        }
        map
    }

    /// Consume this sheet, returning the same contents under a new name
    pub fn into_named<S: Into<String>>(self, name: S) -> Self {
        Self {
            name: Some(name.into()),
            ..self
        }
    }

    /// Get the sheet name
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Bounding range of every cell written so far
    pub fn range(&self) -> CellRange {
        self.range
    }

    /// Number of rows covered by the range, counted from row 0
    pub fn rows(&self) -> u32 {
        self.range.end.row + 1
    }

    /// Number of columns covered by the range, counted from column 0
    pub fn columns(&self) -> u32 {
        self.range.end.col as u32 + 1
    }

    // === Cell Access ===

    /// Get a cell value by row and column indices
    pub fn get(&self, row: u32, col: u16) -> Option<&CellValue> {
        self.cells.get(row, col)
    }

    /// Get a cell value by A1 address
    pub fn get_a1(&self, address: &str) -> Result<Option<&CellValue>> {
        let addr = CellAddress::parse(address)?;
        Ok(self.cells.get(addr.row, addr.col))
    }

    /// Store a value, growing the range to cover it
    ///
    /// Returns the stored value. A `None` value clears the cell instead and
    /// returns `Ok(None)`.
    pub fn set<V: IntoCellValue>(&mut self, row: u32, col: u16, value: V) -> Result<Option<CellValue>> {
        let Some(value) = value.into_cell_value() else {
            self.clear(row, col);
            return Ok(None);
        };

        if row >= MAX_ROWS {
            return Err(Error::RowOutOfBounds(row, MAX_ROWS - 1));
        }
        if col >= MAX_COLS {
            return Err(Error::ColumnOutOfBounds(col as u32, MAX_COLS - 1));
        }

        self.range.expand_to(CellAddress::new(row, col));
        self.cells.insert(row, col, value.clone());
        Ok(Some(value))
    }

    /// Remove a cell, returning its value. The range is left as is.
    pub fn clear(&mut self, row: u32, col: u16) -> Option<CellValue> {
        self.cells.remove(row, col)
    }

    /// Tight bounds around the cells present now, by full rescan
    pub fn used_range(&self) -> Option<CellRange> {
        self.cells
            .used_bounds()
            .map(|(min_row, min_col, max_row, max_col)| {
                CellRange::from_indices(min_row, min_col, max_row, max_col)
            })
    }

    /// Number of present cells
    pub fn cell_count(&self) -> usize {
        self.cells.cell_count()
    }

    /// Check if the sheet holds no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over present cells in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (u32, u16, &CellValue)> {
        self.cells.iter()
    }

    /// Dense view of one row across `columns()`, absent cells as `None`
    pub fn row_values(&self, row: u32) -> Vec<Option<&CellValue>> {
        let mut values = vec![None; self.columns() as usize];
        for (col, value) in self.cells.iter_row(row) {
            if let Some(slot) = values.get_mut(col as usize) {
                *slot = Some(value);
            }
        }
        values
    }
}

impl Default for Sheet {
    fn default() -> Self {
        Self::new()
    }
}
