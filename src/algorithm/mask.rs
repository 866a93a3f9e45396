use crate::table::Table;
use bitvec::bitvec;
use bitvec::vec::BitVec;
use ndarray::Array2;
use rand::Rng;
use std::fmt;

/// Hidden/revealed assignment for every cell of a table except one target
///
/// Uses row-major linear positions. The target position is never revealed;
/// its slot in the masked table receives a fresh code instead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MaskPattern {
    revealed: BitVec,
    target: usize,
}

impl MaskPattern {
    /// Create a pattern hiding every cell
    pub fn hidden(size: usize, target: usize) -> Self {
        Self {
            revealed: bitvec![0; size],
            target,
        }
    }

    /// Create a pattern revealing every cell except the target
    pub fn revealed(size: usize, target: usize) -> Self {
        let mut pattern = Self {
            revealed: bitvec![1; size],
            target,
        };
        pattern.hide(target);
        pattern
    }

    /// Draw a pattern revealing each non-target cell with probability 1/2
    pub fn random<R: Rng + ?Sized>(size: usize, target: usize, rng: &mut R) -> Self {
        let mut pattern = Self::hidden(size, target);
        for position in (0..size).filter(|&position| position != target) {
            if rng.random::<bool>() {
                pattern.reveal(position);
            }
        }
        pattern
    }

    /// Number of positions covered, including the target
    pub fn size(&self) -> usize {
        self.revealed.len()
    }

    /// Reveal a position; the target and out-of-range positions are ignored
    pub fn reveal(&mut self, position: usize) {
        if position != self.target && position < self.revealed.len() {
            self.revealed.set(position, true);
        }
    }

    /// Hide a position
    pub fn hide(&mut self, position: usize) {
        if position < self.revealed.len() {
            self.revealed.set(position, false);
        }
    }

    /// Test if a position shows its real value
    pub fn is_revealed(&self, position: usize) -> bool {
        self.revealed.get(position).as_deref() == Some(&true)
    }

    /// Count revealed positions
    pub fn revealed_count(&self) -> usize {
        self.revealed.count_ones()
    }

    /// Extract all revealed positions in ascending order
    pub fn revealed_positions(&self) -> Vec<usize> {
        self.revealed.iter_ones().collect()
    }

    /// Write the masked copy of `table` into `scratch`
    ///
    /// Revealed cells take their real code, hidden cells 0 and the target
    /// receives `fresh`. `scratch` must have the table's shape.
    pub fn apply(&self, table: &Table, fresh: u32, scratch: &mut Array2<u32>) {
        let cols = table.cols();
        for ((row, col), cell) in scratch.indexed_iter_mut() {
            let position = row * cols + col;
            *cell = if position == self.target {
                fresh
            } else if self.is_revealed(position) {
                table.at(position).unwrap_or(0)
            } else {
                0
            };
        }
    }
}

impl fmt::Display for MaskPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MaskPattern(target {}, {} of {} revealed: {:?})",
            self.target,
            self.revealed_count(),
            self.size().saturating_sub(1),
            self.revealed_positions()
        )
    }
}
