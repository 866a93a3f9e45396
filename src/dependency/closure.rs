//! Transitive closure of a list of simple functional dependencies
//!
//! Derivation repeatedly groups the list by determinant and applies the
//! transitivity rule to every ordered pair of groups. The list only grows and
//! never receives a trivial or covered dependency, so the fixpoint is reached
//! after finitely many passes.

use crate::dependency::attributes::AttributeSet;
use crate::dependency::functional::FunctionalDependency;
use std::collections::BTreeMap;

/// Add every simple dependency implied by transitivity to `fds`
///
/// Returns the number of dependencies appended. Running it again on its own
/// output appends nothing.
pub fn compute_closure(fds: &mut Vec<FunctionalDependency>) -> usize {
    let initial = fds.len();

    loop {
        let combined = combine_by_determinant(fds);
        if !derive_next(fds, &combined) {
            break;
        }
    }

    fds.len() - initial
}

/// Merge all dependencies sharing a determinant into one compound dependency
///
/// Groups come out in canonical determinant order.
pub fn combine_by_determinant(fds: &[FunctionalDependency]) -> Vec<FunctionalDependency> {
    let mut groups: BTreeMap<AttributeSet, AttributeSet> = BTreeMap::new();

    for fd in fds {
        groups
            .entry(fd.determinant().clone())
            .and_modify(|dependent| *dependent = dependent.union(fd.dependent()))
            .or_insert_with(|| fd.dependent().clone());
    }

    groups
        .into_iter()
        .filter_map(|(determinant, dependent)| {
            FunctionalDependency::new(determinant, dependent).ok()
        })
        .collect()
}

/// Test if some dependency already in `fds` makes `fd` redundant
pub fn is_covered(fd: &FunctionalDependency, fds: &[FunctionalDependency]) -> bool {
    fds.iter().any(|existing| fd.covers(existing))
}

/// Apply transitivity until one pair of groups yields a new dependency
///
/// Returns whether anything was appended; the caller regroups before trying
/// again because the new dependency may enable further derivations.
fn derive_next(fds: &mut Vec<FunctionalDependency>, combined: &[FunctionalDependency]) -> bool {
    for second in combined {
        for first in combined {
            if !first.dependent().is_superset(second.determinant()) {
                continue;
            }

            let Ok(derived) =
                FunctionalDependency::new(first.determinant().clone(), second.dependent().clone())
            else {
                continue;
            };

            if !derived.is_trivial() && append_simple(fds, derived.decompose()) {
                return true;
            }
        }
    }

    false
}

/// Append the non-trivial, uncovered dependencies from `candidates`
fn append_simple(fds: &mut Vec<FunctionalDependency>, candidates: Vec<FunctionalDependency>) -> bool {
    let mut added = false;

    for candidate in candidates {
        if !(candidate.is_trivial() || is_covered(&candidate, fds)) {
            fds.push(candidate);
            added = true;
        }
    }

    added
}
