use crate::{
    algorithm::control::{CancelFlag, LeafTracker, NoProgress, ProgressObserver},
    algorithm::entropy::{EntropyEvaluator, cell_rng, leaves_per_cell},
    algorithm::fast_path::FastPathClassifier,
    algorithm::subtable::reduced_matrix,
    dependency::closure::compute_closure,
    dependency::functional::FunctionalDependency,
    dependency::violation::is_violated,
    io::configuration::{DEFAULT_SEED, EXACT_SAMPLE_COUNT, NO_DEPENDENCIES},
    io::error::{FdError, Result, invalid_configuration},
    table::Table,
};
use ndarray::Array2;

/// Computation parameters selecting optimizations and evaluation mode
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ComputationConfig {
    /// Classify provably free cells before evaluating the rest
    pub fast_path: bool,
    /// Delete redundant rows and columns and compute on the smaller table
    pub subtable_reduction: bool,
    /// Masking patterns sampled per cell, 0 for exhaustive enumeration
    pub sample_count: usize,
    /// Seed for the per-cell random sources
    pub seed: u64,
}

impl Default for ComputationConfig {
    fn default() -> Self {
        Self {
            fast_path: false,
            subtable_reduction: false,
            sample_count: EXACT_SAMPLE_COUNT,
            seed: DEFAULT_SEED,
        }
    }
}

impl ComputationConfig {
    /// Set the sample count from a signed user value
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if `count` is negative
    pub fn with_sample_count(self, count: i64) -> Result<Self> {
        let sample_count = usize::try_from(count).map_err(|e| {
            invalid_configuration("sample_count", &count, &format!("must be non-negative ({e})"))
        })?;
        Ok(Self {
            sample_count,
            ..self
        })
    }

    /// Test if every masking pattern is enumerated
    pub const fn is_exact(&self) -> bool {
        self.sample_count == EXACT_SAMPLE_COUNT
    }
}

/// Information content computation over one table and its dependencies
///
/// Dependencies are added (and optionally closed under transitivity) before
/// the matrix is requested; the table never changes.
pub struct Computation {
    table: Table,
    fds: Vec<FunctionalDependency>,
    config: ComputationConfig,
    cancel: CancelFlag,
}

impl Computation {
    /// Create a computation without dependencies
    pub fn new(table: Table, config: ComputationConfig) -> Self {
        Self::from_parts(table, Vec::new(), config, CancelFlag::new())
    }

    /// Assemble a computation whose dependencies are already known to hold
    pub(crate) const fn from_parts(
        table: Table,
        fds: Vec<FunctionalDependency>,
        config: ComputationConfig,
        cancel: CancelFlag,
    ) -> Self {
        Self {
            table,
            fds,
            config,
            cancel,
        }
    }

    /// Observe `flag` between cells and stop when it is raised
    #[must_use]
    pub fn with_cancel_flag(mut self, flag: CancelFlag) -> Self {
        self.cancel = flag;
        self
    }

    /// The table being analysed
    pub const fn table(&self) -> &Table {
        &self.table
    }

    /// Configuration given at construction
    pub const fn config(&self) -> ComputationConfig {
        self.config
    }

    /// Working list of simple dependencies in insertion order
    pub fn functional_dependencies(&self) -> &[FunctionalDependency] {
        &self.fds
    }

    /// Comma-separated text form of the working list, `none` when empty
    pub fn fds_string(&self) -> String {
        if self.fds.is_empty() {
            return NO_DEPENDENCIES.to_string();
        }
        self.fds
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Validate a dependency against the table and append its non-trivial
    /// simple parts
    ///
    /// A dependency whose parts are all trivial is accepted without changing
    /// the list.
    ///
    /// # Errors
    ///
    /// Returns `AttributeOutOfRange` if it references a missing column and
    /// `ConstraintViolated` if the table breaks it; the list is unchanged in
    /// both cases
    pub fn add_functional_dependency(&mut self, fd: &FunctionalDependency) -> Result<()> {
        let columns = self.table.cols();
        if let Some(attribute) = fd.max_attribute().filter(|&attribute| attribute >= columns) {
            return Err(FdError::AttributeOutOfRange {
                dependency: fd.to_string(),
                attribute,
                columns,
            });
        }

        if is_violated(self.table.view(), fd) {
            return Err(FdError::ConstraintViolated {
                dependency: fd.to_string(),
            });
        }

        self.fds.extend(
            fd.decompose()
                .into_iter()
                .filter(|part| !part.is_trivial()),
        );
        Ok(())
    }

    /// Extend the working list with every dependency implied by transitivity
    ///
    /// Returns how many dependencies were added.
    pub fn compute_closure(&mut self) -> usize {
        compute_closure(&mut self.fds)
    }

    /// Compute the information content of every cell
    ///
    /// # Errors
    ///
    /// Returns `Cancelled` if the cancel flag is raised mid-computation
    pub fn information_content_matrix(&self) -> Result<Array2<f64>> {
        self.information_content_matrix_with(&NoProgress)
    }

    /// Compute the information content of every cell, reporting progress
    ///
    /// # Errors
    ///
    /// Returns `Cancelled` if the cancel flag is raised mid-computation
    pub fn information_content_matrix_with(
        &self,
        observer: &dyn ProgressObserver,
    ) -> Result<Array2<f64>> {
        let mut tracker = LeafTracker::new(observer);
        self.build(&mut tracker)
    }

    /// Apply reduction, fast path and evaluation in that order of precedence
    pub(crate) fn build(&self, tracker: &mut LeafTracker<'_>) -> Result<Array2<f64>> {
        let shape = (self.table.rows(), self.table.cols());
        if self.table.is_empty() {
            return Ok(Array2::zeros(shape));
        }

        if self.config.subtable_reduction {
            return reduced_matrix(&self.table, &self.fds, self.config, &self.cancel, tracker);
        }

        let pending = self.pending_positions();
        let total = pending.len();
        tracker.begin(
            (total as u64).saturating_mul(leaves_per_cell(self.table.size(), self.config.sample_count)),
        );

        let evaluator = EntropyEvaluator::new(&self.table, &self.fds);
        let mut matrix: Array2<f64> = Array2::ones(shape);

        for (completed, &position) in pending.iter().enumerate() {
            if self.cancel.is_cancelled() {
                return Err(FdError::Cancelled { completed, total });
            }

            let value = if self.config.is_exact() {
                evaluator.exact(position, tracker)
            } else {
                let mut rng = cell_rng(self.config.seed, position);
                evaluator.randomised(position, self.config.sample_count, &mut rng, tracker)
            };

            if let Some(cell) = matrix
                .as_slice_mut()
                .and_then(|cells| cells.get_mut(position))
            {
                *cell = value;
            }
        }

        Ok(matrix)
    }

    /// Row-major positions still needing evaluation after the fast path
    fn pending_positions(&self) -> Vec<usize> {
        if !self.config.fast_path {
            return (0..self.table.size()).collect();
        }

        let classifier = FastPathClassifier::new(&self.table, &self.fds);
        classifier
            .classify()
            .iter()
            .enumerate()
            .filter(|&(_, &free)| !free)
            .map(|(position, _)| position)
            .collect()
    }
}
