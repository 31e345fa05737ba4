//! Brute-force Θ(n³) multiplication.
//!
//! Ground truth for the recursive algorithms and their base case.

use crate::matrix_types::{Dims, Element, Matrix};
use crate::multiplier::{check_product, CoreMultiplier, MatrixError};
use crate::options::Options;

/// Multiply with the triple loop `C[i][j] = Σ_k A[i][k] * B[k][j]`.
///
/// Fails with [`MatrixError::Overflow`] when a product or running sum
/// leaves the `i64` range.
pub fn multiply_bf(a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
    check_product(a, b)?;

    let mut c = Matrix::zeros(a.rows(), b.cols());
    for row in 0..a.rows() {
        let a_row = a.row(row);
        for col in 0..b.cols() {
            c[(row, col)] = a_row
                .iter()
                .enumerate()
                .try_fold(0, |acc: Element, (k, &a_rk)| {
                    a_rk.checked_mul(b[(k, col)])
                        .and_then(|term| acc.checked_add(term))
                })
                .ok_or(MatrixError::Overflow { operation: "multiply" })?;
        }
    }

    debug_assert_eq!(c.dims(), Dims::new(a.rows(), b.cols()));
    Ok(c)
}

/// Brute-force multiplier.
pub struct BruteForce;

impl BruteForce {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for BruteForce {
    fn default() -> Self {
        Self::new()
    }
}

impl CoreMultiplier for BruteForce {
    fn multiply_core(
        &self,
        left: &Matrix,
        right: &Matrix,
        _opts: &Options,
    ) -> Result<Matrix, MatrixError> {
        multiply_bf(left, right)
    }

    fn name(&self) -> &'static str {
        "BruteForce"
    }
}
