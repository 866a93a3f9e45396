//! Problem-size reduction by deleting rows and columns no dependency can touch
//!
//! A row whose cells are all free under the fast path never shares a
//! determinant tuple with another row for any dependency constraining one of
//! its columns, so it cannot take part in a conflict with a target cell. A
//! column no dependency references is never read by the violation check.
//! Deleting both leaves every remaining cell's score unchanged while shrinking
//! the 2^(N−1) pattern space.

use crate::algorithm::control::{CancelFlag, LeafTracker};
use crate::algorithm::executor::{Computation, ComputationConfig};
use crate::algorithm::fast_path::FastPathClassifier;
use crate::dependency::attributes::AttributeSet;
use crate::dependency::functional::FunctionalDependency;
use crate::io::error::Result;
use crate::table::embedding::{Removal, embed_with_ones};
use crate::table::Table;
use ndarray::Array2;

/// Find the redundant rows and columns of `table` under `fds`
pub fn plan_removal(table: &Table, fds: &[FunctionalDependency]) -> Removal {
    let classifier = FastPathClassifier::new(table, fds);
    let rows = (0..table.rows())
        .filter(|&row| classifier.is_row_free(row))
        .collect();

    let referenced = fds
        .iter()
        .fold(AttributeSet::default(), |acc, fd| acc.union(&fd.attributes()));
    let cols = (0..table.cols())
        .filter(|&col| !referenced.contains(col))
        .collect();

    Removal { rows, cols }
}

/// Delete the planned rows and columns and renumber the dependencies to match
pub fn reduce(
    table: &Table,
    fds: &[FunctionalDependency],
    removal: &Removal,
) -> (Table, Vec<FunctionalDependency>) {
    let reduced = table.without(&removal.rows, &removal.cols);
    let remapped = fds
        .iter()
        .map(|fd| fd.remap_for_subtable(&removal.cols))
        .collect();
    (reduced, remapped)
}

/// Compute the full matrix through a computation over the reduced table
///
/// The nested computation keeps the fast-path and sampling settings but never
/// reduces again, bounding the recursion to one level.
///
/// # Errors
///
/// Returns `Cancelled` if `cancel` is raised before the nested computation
/// finishes
pub fn reduced_matrix(
    table: &Table,
    fds: &[FunctionalDependency],
    config: ComputationConfig,
    cancel: &CancelFlag,
    tracker: &mut LeafTracker<'_>,
) -> Result<Array2<f64>> {
    let removal = plan_removal(table, fds);
    let nested_config = ComputationConfig {
        subtable_reduction: false,
        ..config
    };

    if removal.is_empty() {
        let nested =
            Computation::from_parts(table.clone(), fds.to_vec(), nested_config, cancel.clone());
        return nested.build(tracker);
    }

    let (reduced, remapped) = reduce(table, fds, &removal);
    let nested = Computation::from_parts(reduced, remapped, nested_config, cancel.clone());
    let matrix = nested.build(tracker)?;

    Ok(embed_with_ones(
        &matrix,
        (table.rows(), table.cols()),
        &removal,
    ))
}
