//! Tests for per-cell information content evaluation

#[cfg(test)]
mod tests {
    use fdentropy::algorithm::control::{LeafTracker, NoProgress, ProgressObserver};
    use fdentropy::algorithm::entropy::{EntropyEvaluator, cell_rng, leaves_per_cell};
    use fdentropy::algorithm::mask::MaskPattern;
    use fdentropy::io::configuration::MAX_CODE;
    use fdentropy::{FunctionalDependency, Table};
    use rand::Rng;
    use std::cell::Cell;

    const TOLERANCE: f64 = 1e-12;

    fn table() -> Table {
        Table::from_rows(&[vec![1, 1], vec![1, 1], vec![2, 2]]).expect("valid table")
    }

    fn fds(texts: &[&str]) -> Vec<FunctionalDependency> {
        texts
            .iter()
            .map(|text| text.parse().expect("valid dependency"))
            .collect()
    }

    #[derive(Default)]
    struct LastProgress(Cell<(u64, u64)>);

    impl ProgressObserver for LastProgress {
        fn on_progress(&self, current: u64, total: u64) {
            self.0.set((current, total));
        }
    }

    // Tests the fresh code stays distinct when the table holds the largest code
    // Verified by letting the fresh code saturate onto a table code
    #[test]
    fn test_fresh_code_above_largest_code() {
        let table = Table::from_rows(&[vec![MAX_CODE, MAX_CODE], vec![MAX_CODE, MAX_CODE]])
            .expect("valid table");
        let dependencies = fds(&["1->2"]);
        let evaluator = EntropyEvaluator::new(&table, &dependencies);
        let mut tracker = LeafTracker::new(&NoProgress);

        assert!((evaluator.exact(1, &mut tracker) - 0.875).abs() < TOLERANCE);
        assert!((evaluator.exact(0, &mut tracker) - 1.0).abs() < TOLERANCE);
    }

    // Tests single pattern scoring
    // Verified by ignoring the fresh code in the target
    #[test]
    fn test_entropy_of_single_pattern() {
        let table = table();
        let dependencies = fds(&["1->2"]);
        let evaluator = EntropyEvaluator::new(&table, &dependencies);

        assert!((evaluator.entropy(&MaskPattern::revealed(6, 1)) - 0.0).abs() < TOLERANCE);
        assert!((evaluator.entropy(&MaskPattern::hidden(6, 1)) - 1.0).abs() < TOLERANCE);

        let mut determinants_only = MaskPattern::hidden(6, 1);
        determinants_only.reveal(0);
        determinants_only.reveal(2);
        assert!((evaluator.entropy(&determinants_only) - 1.0).abs() < TOLERANCE);
        determinants_only.reveal(3);
        assert!((evaluator.entropy(&determinants_only) - 0.0).abs() < TOLERANCE);
    }

    // Tests exact enumeration against hand-counted patterns
    // Verified by counting the target among the enumerated positions
    #[test]
    fn test_exact_values() {
        let table = table();
        let dependencies = fds(&["1->2"]);
        let evaluator = EntropyEvaluator::new(&table, &dependencies);
        let progress = LastProgress::default();
        let mut tracker = LeafTracker::new(&progress);
        tracker.begin(64);

        // Only patterns revealing (0,0), (1,0) and (1,1) conflict: 1 in 8
        assert!((evaluator.exact(1, &mut tracker) - 0.875).abs() < TOLERANCE);
        assert!((evaluator.exact(0, &mut tracker) - 1.0).abs() < TOLERANCE);
        assert_eq!(progress.0.get(), (64, 64));
    }

    // Tests every cell scores one without dependencies
    // Verified by scoring unconstrained patterns as zero
    #[test]
    fn test_no_dependencies_scores_one() {
        let table = table();
        let evaluator = EntropyEvaluator::new(&table, &[]);
        let mut tracker = LeafTracker::new(&NoProgress);

        for position in 0..table.size() {
            assert!((evaluator.exact(position, &mut tracker) - 1.0).abs() < TOLERANCE);
        }
    }

    // Tests zero samples fall back to exact enumeration
    // Verified by dividing by the zero sample count
    #[test]
    fn test_zero_samples_is_exact() {
        let table = table();
        let dependencies = fds(&["1->2"]);
        let evaluator = EntropyEvaluator::new(&table, &dependencies);
        let mut tracker = LeafTracker::new(&NoProgress);
        let mut rng = cell_rng(1, 1);

        let sampled = evaluator.randomised(1, 0, &mut rng, &mut tracker);
        let exact = evaluator.exact(1, &mut tracker);

        assert!((sampled - exact).abs() < TOLERANCE);
    }

    // Tests sampling converges to the exact value
    // Verified by revealing every position in sampled patterns
    #[test]
    fn test_randomised_converges() {
        let table = table();
        let dependencies = fds(&["1->2"]);
        let evaluator = EntropyEvaluator::new(&table, &dependencies);
        let progress = LastProgress::default();
        let mut tracker = LeafTracker::new(&progress);
        tracker.begin(4000);
        let mut rng = cell_rng(42, 1);

        let estimate = evaluator.randomised(1, 4000, &mut rng, &mut tracker);

        assert!((estimate - 0.875).abs() < 0.05, "estimate {estimate}");
        assert!((0.0..=1.0).contains(&estimate));
        assert_eq!(progress.0.get(), (4000, 4000));
    }

    // Tests pattern counts per cell
    // Verified by using 2^size instead of 2^(size-1)
    #[test]
    fn test_leaves_per_cell() {
        assert_eq!(leaves_per_cell(6, 0), 32);
        assert_eq!(leaves_per_cell(6, 10), 10);
        assert_eq!(leaves_per_cell(1, 0), 1);
        assert_eq!(leaves_per_cell(200, 0), u64::MAX);
    }

    // Tests per-cell random sources depend on seed and position only
    // Verified by ignoring the position when seeding
    #[test]
    fn test_cell_rng_streams() {
        let a: u64 = cell_rng(42, 3).random();
        let b: u64 = cell_rng(42, 3).random();
        let other_position: u64 = cell_rng(42, 4).random();
        let other_seed: u64 = cell_rng(43, 3).random();

        assert_eq!(a, b);
        assert_ne!(a, other_position);
        assert_ne!(a, other_seed);
    }
}
