//! Categorical table storage with positive integer codes
//!
//! Every cell of a table holds a code greater than zero. Zero is kept free so
//! that masked copies built during evaluation can mark withheld values, and
//! `u32::MAX` so that a fresh target code above every real code exists.

use crate::io::configuration::MAX_CODE;
use crate::io::error::{Result, invalid_table};
use ndarray::{Array2, ArrayView2, Axis};

/// Immutable R×C matrix of categorical codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    cells: Array2<u32>,
}

impl Table {
    /// Wrap a matrix of codes
    ///
    /// # Errors
    ///
    /// Returns `InvalidTable` if any cell is 0 or exceeds `MAX_CODE`
    pub fn new(cells: Array2<u32>) -> Result<Self> {
        if let Some(((row, col), code)) = cells
            .indexed_iter()
            .find(|&(_, &code)| code == 0 || code > MAX_CODE)
        {
            return Err(invalid_table(&format!(
                "cell ({}, {}) holds {code}, codes must lie in 1..={MAX_CODE}",
                row + 1,
                col + 1
            )));
        }
        Ok(Self { cells })
    }

    /// Build a table from row vectors of equal length
    ///
    /// # Errors
    ///
    /// Returns `InvalidTable` if rows differ in length or any cell is out of range
    pub fn from_rows(rows: &[Vec<u32>]) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        if let Some(index) = rows.iter().position(|row| row.len() != cols) {
            return Err(invalid_table(&format!(
                "line {} has a different number of cells than line 1",
                index + 1
            )));
        }

        let flat: Vec<u32> = rows.iter().flatten().copied().collect();
        let cells = Array2::from_shape_vec((rows.len(), cols), flat)
            .map_err(|e| invalid_table(&e))?;
        Self::new(cells)
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns (attributes)
    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    /// Number of cells
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    /// Test if the table has no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Code at (row, col)
    pub fn get(&self, row: usize, col: usize) -> Option<u32> {
        self.cells.get([row, col]).copied()
    }

    /// Code at a row-major linear position
    pub fn at(&self, position: usize) -> Option<u32> {
        let (row, col) = self.coordinates(position)?;
        self.get(row, col)
    }

    /// Convert a row-major linear position into (row, col)
    pub fn coordinates(&self, position: usize) -> Option<(usize, usize)> {
        let cols = self.cols();
        (cols > 0 && position < self.size()).then(|| (position / cols, position % cols))
    }

    /// Largest code in the table, 0 when empty
    pub fn max_code(&self) -> u32 {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Read-only view of the codes
    pub fn view(&self) -> ArrayView2<'_, u32> {
        self.cells.view()
    }

    /// Owned copy of the codes, used as scratch space for masking
    pub fn to_array(&self) -> Array2<u32> {
        self.cells.clone()
    }

    /// Create the table left after deleting rows and columns
    ///
    /// Remaining rows and columns keep their relative order.
    #[must_use]
    pub fn without(&self, removed_rows: &[usize], removed_cols: &[usize]) -> Self {
        let kept_rows: Vec<usize> = (0..self.rows())
            .filter(|row| !removed_rows.contains(row))
            .collect();
        let kept_cols: Vec<usize> = (0..self.cols())
            .filter(|col| !removed_cols.contains(col))
            .collect();

        if kept_rows.is_empty() || kept_cols.is_empty() {
            return Self {
                cells: Array2::zeros((kept_rows.len(), kept_cols.len())),
            };
        }

        let cells = self
            .cells
            .select(Axis(0), &kept_rows)
            .select(Axis(1), &kept_cols);
        Self { cells }
    }
}
