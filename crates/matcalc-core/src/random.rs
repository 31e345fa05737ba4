//! Random matrix generation.
//!
//! The generator is always supplied by the caller, so tests and the CLI
//! control seeding explicitly.

use rand::Rng;

use crate::matrix_types::{Element, Matrix};
use crate::multiplier::MatrixError;

fn check_range(min: Element, max: Element) -> Result<(), MatrixError> {
    if min > max {
        return Err(MatrixError::InvalidRange { min, max });
    }
    Ok(())
}

/// Uniform random integer in the inclusive range `[min, max]`.
pub fn random_integer<R: Rng + ?Sized>(
    rng: &mut R,
    min: Element,
    max: Element,
) -> Result<Element, MatrixError> {
    check_range(min, max)?;
    Ok(rng.random_range(min..=max))
}

/// Overwrite every entry of `a` with a uniform value in `[min, max]`.
pub fn randomly_fill_matrix<R: Rng + ?Sized>(
    a: &mut Matrix,
    min: Element,
    max: Element,
    rng: &mut R,
) -> Result<(), MatrixError> {
    check_range(min, max)?;
    for v in a.as_mut_slice() {
        *v = rng.random_range(min..=max);
    }
    Ok(())
}

impl Matrix {
    /// A `rows x cols` matrix of uniform values in `[min, max]`.
    pub fn random<R: Rng + ?Sized>(
        rows: usize,
        cols: usize,
        min: Element,
        max: Element,
        rng: &mut R,
    ) -> Result<Self, MatrixError> {
        check_range(min, max)?;
        let mut m = Self::try_zeros(rows, cols)?;
        randomly_fill_matrix(&mut m, min, max, rng)?;
        Ok(m)
    }
}
