//! Divide-and-conquer Θ(n³) multiplication.
//!
//! Splits both operands into quadrants and computes
//! `C[r][c] = L[r][0]·R[0][c] + L[r][1]·R[1][c]` with eight recursive
//! products. Splitting both operands at the floor midpoint keeps the
//! contracting dimension aligned (`cols(L[r][i]) == rows(R[i][c])`), so
//! uneven partitions need no special handling.

use crate::brute_force::multiply_bf;
use crate::matrix_ops::matrix_add;
use crate::matrix_types::Matrix;
use crate::multiplier::{check_product, CoreMultiplier, MatrixError};
use crate::options::Options;
use crate::quadrants::{split, unsplit, Quadrants};

/// Multiply with recursive quadrant decomposition.
pub fn multiply_dac(left: &Matrix, right: &Matrix) -> Result<Matrix, MatrixError> {
    check_product(left, right)?;
    dac(left, right)
}

fn dac(left: &Matrix, right: &Matrix) -> Result<Matrix, MatrixError> {
    // Any unit dimension ends the recursion.
    if left.rows() == 1 || left.cols() == 1 || right.rows() == 1 || right.cols() == 1 {
        return multiply_bf(left, right);
    }

    let l = split(left)?;
    let r = split(right)?;

    let quadrant = |row: usize, col: usize| -> Result<Matrix, MatrixError> {
        matrix_add(
            &dac(&l[(row, 0)], &r[(0, col)])?,
            &dac(&l[(row, 1)], &r[(1, col)])?,
        )
    };

    let c = Quadrants::new(quadrant(0, 0)?, quadrant(0, 1)?, quadrant(1, 0)?, quadrant(1, 1)?)?;
    Ok(unsplit(&c))
}

/// Divide-and-conquer multiplier.
pub struct DivideAndConquer;

impl DivideAndConquer {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for DivideAndConquer {
    fn default() -> Self {
        Self::new()
    }
}

impl CoreMultiplier for DivideAndConquer {
    fn multiply_core(
        &self,
        left: &Matrix,
        right: &Matrix,
        _opts: &Options,
    ) -> Result<Matrix, MatrixError> {
        dac(left, right)
    }

    fn name(&self) -> &'static str {
        "DivideAndConquer"
    }
}
