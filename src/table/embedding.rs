//! Re-embedding of reduced result matrices into the full table shape
//!
//! A reduced computation only sees the rows and columns that survived
//! deletion. Its values are copied back into their original positions while
//! every deleted row and column is padded with one, the score of a cell no
//! dependency can constrain.

use ndarray::Array2;
use num_traits::One;

/// Rows and columns deleted from a table, both ascending
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Removal {
    /// Deleted row indices
    pub rows: Vec<usize>,
    /// Deleted column indices
    pub cols: Vec<usize>,
}

impl Removal {
    /// Test if nothing was deleted
    pub const fn is_empty(&self) -> bool {
        self.rows.is_empty() && self.cols.is_empty()
    }
}

/// Expand `reduced` to `shape`, padding deleted rows and columns with one
///
/// Values of `reduced` are consumed in row-major order across the retained
/// cells; a reduced matrix with fewer values than retained cells leaves the
/// remainder padded as well.
pub fn embed_with_ones<T: Copy + One>(
    reduced: &Array2<T>,
    shape: (usize, usize),
    removal: &Removal,
) -> Array2<T> {
    let mut full = Array2::from_elem(shape, T::one());
    let mut values = reduced.iter().copied();

    for row in (0..shape.0).filter(|row| !removal.rows.contains(row)) {
        for col in (0..shape.1).filter(|col| !removal.cols.contains(col)) {
            let Some(value) = values.next() else {
                return full;
            };
            if let Some(cell) = full.get_mut([row, col]) {
                *cell = value;
            }
        }
    }

    full
}
