//! Computation constants and runtime configuration defaults

// Sampling
/// Sample count selecting exhaustive enumeration instead of Monte Carlo sampling
pub const EXACT_SAMPLE_COUNT: usize = 0;
/// Fixed seed for reproducible sampling
pub const DEFAULT_SEED: u64 = 42;
/// Odd multiplier spreading cell positions across the seed space
pub const SEED_MIX: u64 = 0x9E37_79B9_7F4A_7C15;

// Table input
/// Largest code a table may hold; the next code is the fresh target value
pub const MAX_CODE: u32 = u32::MAX - 1;
/// Field delimiter for CSV sources
pub const DEFAULT_DELIMITER: u8 = b',';
/// Separator between rows of an inline encoded table
pub const ENCODED_ROW_SEPARATOR: char = ';';
/// Separator between cells of an inline encoded table
pub const ENCODED_CELL_SEPARATOR: char = ',';
/// Bytes read from a CSV source per refill
pub const CSV_INPUT_BUFFER: usize = 16_384;
/// Initial capacity of the CSV field buffer, grown on demand
pub const CSV_FIELD_BUFFER: usize = 1024;

// Dependency text format
/// Arrow between determinant and dependent attribute lists
pub const DEPENDENCY_ARROW: &str = "->";
/// Separator inside an attribute list
pub const ATTRIBUTE_SEPARATOR: char = ',';

// Output settings
/// Cell delimiter for matrices written to files
pub const OUTPUT_DELIMITER: &str = ",";
/// Cell delimiter for matrices shown in the console report
pub const REPORT_DELIMITER: &str = "\t";
/// Text reported for an empty dependency list
pub const NO_DEPENDENCIES: &str = "none";

// Progress bar display settings
/// Template for the leaf-evaluation progress bar
pub const PROGRESS_TEMPLATE: &str = "Processed: [{bar:40.cyan/blue}] {percent:>3}% {msg}";
