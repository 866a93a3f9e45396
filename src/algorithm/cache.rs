use crate::dependency::attributes::AttributeSet;
use crate::dependency::violation::{ValueTuple, visible_values};
use crate::table::Table;
use std::collections::HashMap;

/// Occurrence counts of each determinant value tuple in a table
///
/// Answers "does another row share this row's determinant values" in constant
/// time instead of scanning every other row.
#[derive(Debug, Clone, Default)]
pub struct DeterminantCounts {
    counts: HashMap<ValueTuple, usize>,
}

impl DeterminantCounts {
    /// Count the determinant tuples of every row of `table`
    pub fn build(table: &Table, determinant: &AttributeSet) -> Self {
        let view = table.view();
        let mut counts = HashMap::new();
        for row in 0..table.rows() {
            if let Some(tuple) = visible_values(view, row, determinant) {
                *counts.entry(tuple).or_insert(0) += 1;
            }
        }
        Self { counts }
    }

    /// Number of rows holding `tuple`
    pub fn occurrences(&self, tuple: &ValueTuple) -> usize {
        self.counts.get(tuple).copied().unwrap_or(0)
    }
}

/// Memoization cache of determinant counts keyed by determinant attributes
///
/// Dependencies sharing a determinant share one index.
#[derive(Default)]
pub struct DeterminantCache {
    by_determinant: HashMap<AttributeSet, DeterminantCounts>,
}

impl DeterminantCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Retrieve cached counts or compute and store new ones
    pub fn get_or_compute<F>(&mut self, determinant: &AttributeSet, compute_fn: F) -> &DeterminantCounts
    where
        F: FnOnce() -> DeterminantCounts,
    {
        self.by_determinant
            .entry(determinant.clone())
            .or_insert_with(compute_fn)
    }

    /// Cached counts for `determinant`, if computed
    pub fn get(&self, determinant: &AttributeSet) -> Option<&DeterminantCounts> {
        self.by_determinant.get(determinant)
    }
}
