//! Multiplier traits and the `CheckedMultiplier` decorator.
//!
//! `Multiplier` is the public trait consumed by orchestration.
//! `CoreMultiplier` is the internal trait implemented by algorithms.
//! `CheckedMultiplier` is a decorator that validates operands once at the
//! top-level entry and logs each multiplication.

use std::sync::Arc;

use tracing::debug;

use crate::matrix_types::{Dims, Element, Matrix};
use crate::options::Options;

/// Error type for matrix operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatrixError {
    /// Operand shapes are incompatible for the requested operation.
    #[error("dimension mismatch in {operation}: {left} vs {right}")]
    DimensionMismatch {
        operation: &'static str,
        left: Dims,
        right: Dims,
    },

    /// Matrix has fewer than two rows or columns and cannot be split.
    #[error("matrix too small to split: {rows}x{cols} (need at least 2x2)")]
    TooSmall { rows: usize, cols: usize },

    /// An entry left the `i64` range.
    #[error("integer overflow in {operation}")]
    Overflow { operation: &'static str },

    /// Requested shape has more entries than fit in memory.
    #[error("matrix too large: {rows}x{cols}")]
    TooLarge { rows: usize, cols: usize },

    /// Matrix has zero rows or zero columns.
    #[error("empty matrix ({rows}x{cols}) cannot be multiplied")]
    EmptyMatrix { rows: usize, cols: usize },

    /// Nested rows of differing length.
    #[error("ragged matrix: row {row} has {found} entries, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Random range with `min > max`.
    #[error("invalid range: min {min} is greater than max {max}")]
    InvalidRange { min: Element, max: Element },

    /// Unknown multiplication algorithm name.
    #[error("unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    /// Results from different algorithms don't match.
    #[error("result mismatch between algorithms")]
    Mismatch,

    /// Matrix text could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),

    /// Reading or writing a matrix file failed.
    #[error("i/o error: {0}")]
    Io(String),
}

/// Check that `left * right` is defined: both non-empty and the inner
/// dimensions agree.
pub fn check_product(left: &Matrix, right: &Matrix) -> Result<(), MatrixError> {
    for m in [left, right] {
        if m.is_empty() {
            return Err(MatrixError::EmptyMatrix {
                rows: m.rows(),
                cols: m.cols(),
            });
        }
    }
    if left.cols() != right.rows() {
        return Err(MatrixError::DimensionMismatch {
            operation: "multiply",
            left: left.dims(),
            right: right.dims(),
        });
    }
    Ok(())
}

/// Public trait for matrix multipliers, consumed by orchestration.
pub trait Multiplier: Send + Sync {
    /// Compute `left * right`.
    fn multiply(&self, left: &Matrix, right: &Matrix, opts: &Options)
        -> Result<Matrix, MatrixError>;

    /// Get the name of this multiplier.
    fn name(&self) -> &str;
}

/// Internal trait for algorithm implementations.
/// Wrapped by `CheckedMultiplier` which adds validation and logging.
pub trait CoreMultiplier: Send + Sync {
    /// Multiply operands that already passed [`check_product`].
    fn multiply_core(
        &self,
        left: &Matrix,
        right: &Matrix,
        opts: &Options,
    ) -> Result<Matrix, MatrixError>;

    /// Get the name of this algorithm.
    fn name(&self) -> &str;
}

/// Decorator that wraps a `CoreMultiplier` with operand validation.
pub struct CheckedMultiplier {
    inner: Arc<dyn CoreMultiplier>,
}

impl CheckedMultiplier {
    /// Create a new `CheckedMultiplier` wrapping the given core algorithm.
    #[must_use]
    pub fn new(inner: Arc<dyn CoreMultiplier>) -> Self {
        Self { inner }
    }
}

impl Multiplier for CheckedMultiplier {
    fn multiply(
        &self,
        left: &Matrix,
        right: &Matrix,
        opts: &Options,
    ) -> Result<Matrix, MatrixError> {
        check_product(left, right)?;

        debug!(
            algorithm = self.inner.name(),
            left = %left.dims(),
            right = %right.dims(),
            "Multiplying"
        );

        let product = self.inner.multiply_core(left, right, opts)?;
        debug_assert_eq!(product.dims(), Dims::new(left.rows(), right.cols()));
        Ok(product)
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}
