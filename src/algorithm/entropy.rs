//! Exact and sampled information content of a single cell
//!
//! For a target cell, each masking pattern of the remaining N−1 cells yields a
//! masked table in which the target holds a code no visible cell has. The
//! pattern scores one when that table violates no dependency, zero otherwise,
//! and the information content is the mean score over all 2^(N−1) patterns
//! (exact mode) or over a uniform sample of them (randomised mode).

use crate::algorithm::control::LeafTracker;
use crate::algorithm::mask::MaskPattern;
use crate::dependency::functional::FunctionalDependency;
use crate::dependency::violation::satisfies_all;
use crate::io::configuration::SEED_MIX;
use crate::table::Table;
use ndarray::Array2;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Evaluates masking patterns of one table against a fixed dependency list
pub struct EntropyEvaluator<'a> {
    table: &'a Table,
    fds: &'a [FunctionalDependency],
    fresh: u32,
}

impl<'a> EntropyEvaluator<'a> {
    /// Create an evaluator over `table` and `fds`
    ///
    /// The fresh code is one above the largest code of the real table, which
    /// differs from every visible value under any masking pattern.
    pub fn new(table: &'a Table, fds: &'a [FunctionalDependency]) -> Self {
        Self {
            table,
            fds,
            fresh: table.max_code().saturating_add(1),
        }
    }

    /// Score one masking pattern: 1 if the masked table violates nothing, else 0
    pub fn entropy(&self, mask: &MaskPattern) -> f64 {
        let mut scratch = self.table.to_array();
        mask.apply(self.table, self.fresh, &mut scratch);
        self.score(&scratch)
    }

    /// Mean score over every masking pattern of the cells other than `target`
    ///
    /// Walks the patterns depth-first, deciding hidden or revealed for one
    /// position per level and averaging both branches, so each subset is
    /// visited once and only one masked table exists at a time.
    pub fn exact(&self, target: usize, tracker: &mut LeafTracker<'_>) -> f64 {
        let mut scratch = Array2::zeros((self.table.rows(), self.table.cols()));
        let Some(coordinates) = self.table.coordinates(target) else {
            return 1.0;
        };
        if let Some(cell) = scratch.get_mut(coordinates) {
            *cell = self.fresh;
        }

        let others: Vec<usize> = (0..self.table.size())
            .filter(|&position| position != target)
            .collect();
        self.descend(&mut scratch, &others, tracker)
    }

    /// Mean score over `samples` uniformly drawn masking patterns
    ///
    /// Falls back to exact enumeration when `samples` is 0.
    pub fn randomised<R: Rng + ?Sized>(
        &self,
        target: usize,
        samples: usize,
        rng: &mut R,
        tracker: &mut LeafTracker<'_>,
    ) -> f64 {
        if samples == 0 {
            return self.exact(target, tracker);
        }

        let mut scratch = self.table.to_array();
        let mut sum = 0.0;
        for _ in 0..samples {
            let mask = MaskPattern::random(self.table.size(), target, rng);
            mask.apply(self.table, self.fresh, &mut scratch);
            sum += self.score(&scratch);
            tracker.record(1);
        }

        sum / samples as f64
    }

    fn descend(
        &self,
        scratch: &mut Array2<u32>,
        remaining: &[usize],
        tracker: &mut LeafTracker<'_>,
    ) -> f64 {
        let Some((&position, rest)) = remaining.split_first() else {
            tracker.record(1);
            return self.score(scratch);
        };
        let Some((row, col)) = self.table.coordinates(position) else {
            return self.descend(scratch, rest, tracker);
        };
        let real = self.table.get(row, col).unwrap_or(0);

        set_cell(scratch, row, col, 0);
        let hidden = self.descend(scratch, rest, tracker);
        set_cell(scratch, row, col, real);
        let revealed = self.descend(scratch, rest, tracker);

        f64::midpoint(hidden, revealed)
    }

    fn score(&self, masked: &Array2<u32>) -> f64 {
        if satisfies_all(masked.view(), self.fds) {
            1.0
        } else {
            0.0
        }
    }
}

fn set_cell(scratch: &mut Array2<u32>, row: usize, col: usize, value: u32) {
    if let Some(cell) = scratch.get_mut([row, col]) {
        *cell = value;
    }
}

/// Number of masking patterns evaluated for one cell
///
/// 2^(size−1) in exact mode, saturating at `u64::MAX`; `samples` otherwise.
pub fn leaves_per_cell(size: usize, samples: usize) -> u64 {
    if samples > 0 {
        return samples as u64;
    }
    let exponent = size.saturating_sub(1);
    u32::try_from(exponent)
        .ok()
        .and_then(|shift| 1_u64.checked_shl(shift))
        .unwrap_or(u64::MAX)
}

/// Random source for one cell, independent of evaluation order
pub fn cell_rng(seed: u64, position: usize) -> StdRng {
    let stream = (position as u64).wrapping_add(1).wrapping_mul(SEED_MIX);
    StdRng::seed_from_u64(seed ^ stream)
}
