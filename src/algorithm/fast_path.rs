//! Exact short-circuit for cells whose information content is provably one
//!
//! A cell can only be forced by a dependency whose dependent attribute is the
//! cell's column, and only if another row agrees with the cell's row on that
//! dependency's determinant. When no such row exists for any dependency, every
//! masking pattern leaves the fresh code consistent and the score is one.

use crate::algorithm::cache::{DeterminantCache, DeterminantCounts};
use crate::dependency::functional::FunctionalDependency;
use crate::dependency::violation::visible_values;
use crate::table::Table;
use ndarray::Array2;

/// Classifies cells as free without enumerating masking patterns
///
/// Only simple dependencies take part; compound dependencies never reach a
/// computation's working list.
pub struct FastPathClassifier<'a> {
    table: &'a Table,
    fds: &'a [FunctionalDependency],
    dependent_columns: Vec<bool>,
    cache: DeterminantCache,
}

impl<'a> FastPathClassifier<'a> {
    /// Index the determinant tuples of every dependency in `fds`
    pub fn new(table: &'a Table, fds: &'a [FunctionalDependency]) -> Self {
        let mut dependent_columns = vec![false; table.cols()];
        let mut cache = DeterminantCache::new();

        for fd in fds {
            let Some(col) = fd.simple_dependent() else {
                continue;
            };
            if let Some(flag) = dependent_columns.get_mut(col) {
                *flag = true;
            }
            cache.get_or_compute(fd.determinant(), || {
                DeterminantCounts::build(table, fd.determinant())
            });
        }

        Self {
            table,
            fds,
            dependent_columns,
            cache,
        }
    }

    /// Test if no dependency has `col` as its dependent attribute
    pub fn is_column_free(&self, col: usize) -> bool {
        !self.dependent_columns.get(col).copied().unwrap_or(false)
    }

    /// Test if the cell at (row, col) provably has information content one
    pub fn is_free(&self, row: usize, col: usize) -> bool {
        if self.is_column_free(col) {
            return true;
        }

        self.fds
            .iter()
            .filter(|fd| fd.simple_dependent() == Some(col))
            .all(|fd| !self.shares_determinant(row, fd))
    }

    /// Test if every cell of `row` is free
    pub fn is_row_free(&self, row: usize) -> bool {
        (0..self.table.cols()).all(|col| self.is_free(row, col))
    }

    /// Classify every cell of the table
    pub fn classify(&self) -> Array2<bool> {
        Array2::from_shape_fn((self.table.rows(), self.table.cols()), |(row, col)| {
            self.is_free(row, col)
        })
    }

    /// Test if another row holds the same determinant values as `row`
    fn shares_determinant(&self, row: usize, fd: &FunctionalDependency) -> bool {
        let Some(tuple) = visible_values(self.table.view(), row, fd.determinant()) else {
            return false;
        };
        self.cache
            .get(fd.determinant())
            .is_some_and(|counts| counts.occurrences(&tuple) > 1)
    }
}
