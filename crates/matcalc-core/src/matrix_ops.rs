//! Elementwise matrix operations.
//!
//! Every operation returns a fresh matrix; operands are never mutated.
//! Arithmetic is checked: an entry that leaves the `i64` range yields
//! [`MatrixError::Overflow`].

use crate::matrix_types::{Element, Matrix};
use crate::multiplier::MatrixError;

/// Add two matrices of identical shape.
pub fn matrix_add(a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
    if a.dims() != b.dims() {
        return Err(MatrixError::DimensionMismatch {
            operation: "add",
            left: a.dims(),
            right: b.dims(),
        });
    }
    let data = a
        .as_slice()
        .iter()
        .zip(b.as_slice())
        .map(|(x, y)| x.checked_add(*y))
        .collect::<Option<Vec<_>>>()
        .ok_or(MatrixError::Overflow { operation: "add" })?;
    Matrix::from_vec(a.rows(), a.cols(), data)
}

/// Subtract `b` from `a`.
///
/// Defined as `a + (-1 * b)` so overflow behaviour matches [`matrix_add`].
pub fn matrix_subtract(a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
    matrix_add(a, &matrix_scalar_multiply(-1, b)?)
}

/// Multiply every entry by `scalar`.
pub fn matrix_scalar_multiply(scalar: Element, a: &Matrix) -> Result<Matrix, MatrixError> {
    let mut out = a.clone();
    for v in out.as_mut_slice() {
        *v = v
            .checked_mul(scalar)
            .ok_or(MatrixError::Overflow { operation: "scalar multiply" })?;
    }
    Ok(out)
}

/// Swap rows and columns.
#[must_use]
pub fn matrix_transpose(a: &Matrix) -> Matrix {
    let mut out = Matrix::zeros(a.cols(), a.rows());
    for (r, row) in a.iter_rows().enumerate() {
        for (c, &v) in row.iter().enumerate() {
            out[(c, r)] = v;
        }
    }
    out
}
