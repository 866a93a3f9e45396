//! Violation checking for real and partially masked tables

use crate::dependency::attributes::AttributeSet;
use crate::dependency::functional::FunctionalDependency;
use ndarray::ArrayView2;
use smallvec::SmallVec;
use std::collections::HashMap;
use std::collections::hash_map::Entry;

/// Values of one row restricted to a set of attributes
pub type ValueTuple = SmallVec<[u32; 4]>;

/// Read the values of `attributes` in `row`, or `None` if any of them is masked
///
/// A masked cell holds 0. Out-of-range indices read as masked.
pub fn visible_values(
    table: ArrayView2<'_, u32>,
    row: usize,
    attributes: &AttributeSet,
) -> Option<ValueTuple> {
    attributes
        .iter()
        .map(|col| table.get([row, col]).copied().filter(|&value| value != 0))
        .collect()
}

/// Test if some pair of rows agrees on the determinant but not on the dependents
///
/// Rows with a masked determinant or dependent value cannot witness a conflict
/// and are skipped.
pub fn is_violated(table: ArrayView2<'_, u32>, fd: &FunctionalDependency) -> bool {
    let mut seen: HashMap<ValueTuple, ValueTuple> = HashMap::new();

    for row in 0..table.nrows() {
        let Some(determinant) = visible_values(table, row, fd.determinant()) else {
            continue;
        };
        let Some(dependent) = visible_values(table, row, fd.dependent()) else {
            continue;
        };

        match seen.entry(determinant) {
            Entry::Occupied(entry) => {
                if *entry.get() != dependent {
                    return true;
                }
            }
            Entry::Vacant(entry) => {
                entry.insert(dependent);
            }
        }
    }

    false
}

/// Test if no dependency in `fds` is violated by `table`
pub fn satisfies_all(table: ArrayView2<'_, u32>, fds: &[FunctionalDependency]) -> bool {
    fds.iter().all(|fd| !is_violated(table, fd))
}
