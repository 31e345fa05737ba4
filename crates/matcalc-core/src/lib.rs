//! # matcalc-core
//!
//! Core matrix engine for MatCalc-rs.
//! Implements elementwise operations, quadrant split/unsplit, and
//! brute-force, divide-and-conquer, and Strassen multiplication.

pub mod brute_force;
pub mod constants;
pub mod divide_conquer;
pub mod matrix_ops;
pub mod matrix_types;
pub mod multiplier;
pub mod options;
pub mod quadrants;
pub mod random;
pub mod registry;
pub mod strassen;

// Re-exports
pub use brute_force::multiply_bf;
pub use constants::{exit_codes, DEFAULT_RANDOM_MAX, DEFAULT_RANDOM_MIN, DEFAULT_STRASSEN_THRESHOLD};
pub use divide_conquer::multiply_dac;
pub use matrix_ops::{matrix_add, matrix_scalar_multiply, matrix_subtract, matrix_transpose};
pub use matrix_types::{Dims, Element, Matrix};
pub use multiplier::{CheckedMultiplier, CoreMultiplier, MatrixError, Multiplier};
pub use options::Options;
pub use quadrants::{split, unsplit, Quadrants};
pub use random::{random_integer, randomly_fill_matrix};
pub use registry::{DefaultFactory, MultiplierFactory};
pub use strassen::{multiply_strassen, multiply_strassen_padded};

/// Multiply two matrices with Strassen's algorithm.
///
/// This is a convenience function for simple use cases. For algorithm
/// selection and options, use the `Multiplier` trait directly.
///
/// # Example
/// ```
/// use matcalc_core::Matrix;
///
/// let a = Matrix::from_rows(vec![vec![8, -3, 6], vec![0, -4, 4]]).unwrap();
/// let b = Matrix::from_rows(vec![vec![10], vec![-3], vec![7]]).unwrap();
/// let c = matcalc_core::multiply(&a, &b).unwrap();
/// assert_eq!(c.to_rows(), vec![vec![131], vec![40]]);
/// ```
pub fn multiply(a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
    let mult = CheckedMultiplier::new(std::sync::Arc::new(strassen::Strassen::new()));
    mult.multiply(a, b, &Options::default())
}
