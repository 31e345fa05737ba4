//! Constants for matrix generation, recursion cutoffs, and process exit codes.

/// Default leaf size (in rows/columns) below which padded Strassen
/// hands off to brute force.
pub const DEFAULT_STRASSEN_THRESHOLD: usize = 16;

/// Default inclusive lower bound for randomly filled matrices.
pub const DEFAULT_RANDOM_MIN: i64 = -10;

/// Default inclusive upper bound for randomly filled matrices.
pub const DEFAULT_RANDOM_MAX: i64 = 10;

/// Smallest row or column count that can be split into quadrants.
pub const MIN_SPLIT_DIM: usize = 2;

/// Matrices with more entries than this are elided when displayed
/// without verbose output.
pub const DISPLAY_ELEMENT_LIMIT: usize = 400;

/// Largest row, inner or column count the CLI accepts for generated
/// operands.
pub const MAX_CLI_DIMENSION: u64 = 4096;

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Multiplication strategies produced different products.
    pub const ERROR_MISMATCH: i32 = 3;
    /// Invalid configuration or input.
    pub const ERROR_CONFIG: i32 = 4;
}
