/// Memoized determinant tuple counts for the fast path
pub mod cache;
/// Progress observation and cooperative cancellation
pub mod control;
/// Exact and sampled per-cell information content
pub mod entropy;
/// Computation orchestration and optimization precedence
pub mod executor;
/// Exact short-circuit for provably free cells
pub mod fast_path;
/// Masking patterns over table cells
pub mod mask;
/// Redundant row and column deletion with re-embedding
pub mod subtable;
