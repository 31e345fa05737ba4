//! Strassen multiplication, Θ(n^log2 7).
//!
//! Seven recursive products per level instead of eight:
//!
//! ```text
//! P1 = L00 · (R01 − R11)        C00 = P5 + P6 + P4 − P2
//! P2 = (L00 + L01) · R11        C01 = P1 + P2
//! P3 = (L10 + L11) · R00        C10 = P3 + P4
//! P4 = L11 · (R10 − R00)        C11 = P5 + P1 − P3 − P7
//! P5 = (L00 + L11) · (R00 + R11)
//! P6 = (L01 − L11) · (R10 + R11)
//! P7 = (L00 − L10) · (R00 + R01)
//! ```
//!
//! The products need equally sized quadrants. [`multiply_strassen`] falls
//! back to brute force whenever a dimension is odd; [`multiply_strassen_padded`]
//! instead zero-pads odd dimensions by one and crops the result.

use tracing::trace;

use crate::brute_force::multiply_bf;
use crate::matrix_ops::{matrix_add, matrix_subtract};
use crate::matrix_types::Matrix;
use crate::multiplier::{check_product, CoreMultiplier, MatrixError};
use crate::options::Options;
use crate::quadrants::{split, unsplit, Quadrants};

/// Multiply with Strassen's algorithm, using brute force on odd dimensions.
pub fn multiply_strassen(left: &Matrix, right: &Matrix) -> Result<Matrix, MatrixError> {
    check_product(left, right)?;
    strassen(left, right)
}

/// Multiply with Strassen's algorithm, zero-padding odd dimensions.
///
/// Operands with any dimension `<= leaf_size` go to brute force.
pub fn multiply_strassen_padded(
    left: &Matrix,
    right: &Matrix,
    leaf_size: usize,
) -> Result<Matrix, MatrixError> {
    check_product(left, right)?;
    strassen_padded(left, right, leaf_size.max(1))
}

fn has_odd_dimension(left: &Matrix, right: &Matrix) -> bool {
    [left.rows(), left.cols(), right.rows(), right.cols()]
        .iter()
        .any(|d| d % 2 == 1)
}

fn strassen(left: &Matrix, right: &Matrix) -> Result<Matrix, MatrixError> {
    if has_odd_dimension(left, right) {
        trace!(left = %left.dims(), right = %right.dims(), "Strassen odd-dimension fallback");
        return multiply_bf(left, right);
    }
    seven_products(left, right, &strassen)
}

fn strassen_padded(left: &Matrix, right: &Matrix, leaf_size: usize) -> Result<Matrix, MatrixError> {
    let smallest = left.rows().min(left.cols()).min(right.cols());
    if smallest <= leaf_size {
        return multiply_bf(left, right);
    }

    let rows = left.rows().next_multiple_of(2);
    let inner = left.cols().next_multiple_of(2);
    let cols = right.cols().next_multiple_of(2);
    let left_padded = left.pad_to(rows, inner);
    let right_padded = right.pad_to(inner, cols);

    let product = seven_products(&left_padded, &right_padded, &|l: &Matrix, r: &Matrix| {
        strassen_padded(l, r, leaf_size)
    })?;
    Ok(product.crop(left.rows(), right.cols()))
}

/// One Strassen level on even-dimensioned operands, recursing through `recurse`.
fn seven_products(
    left: &Matrix,
    right: &Matrix,
    recurse: &dyn Fn(&Matrix, &Matrix) -> Result<Matrix, MatrixError>,
) -> Result<Matrix, MatrixError> {
    let l = split(left)?;
    let r = split(right)?;
    let (l00, l01, l10, l11) = (&l[(0, 0)], &l[(0, 1)], &l[(1, 0)], &l[(1, 1)]);
    let (r00, r01, r10, r11) = (&r[(0, 0)], &r[(0, 1)], &r[(1, 0)], &r[(1, 1)]);

    let p1 = recurse(l00, &matrix_subtract(r01, r11)?)?;
    let p2 = recurse(&matrix_add(l00, l01)?, r11)?;
    let p3 = recurse(&matrix_add(l10, l11)?, r00)?;
    let p4 = recurse(l11, &matrix_subtract(r10, r00)?)?;
    let p5 = recurse(&matrix_add(l00, l11)?, &matrix_add(r00, r11)?)?;
    let p6 = recurse(&matrix_subtract(l01, l11)?, &matrix_add(r10, r11)?)?;
    let p7 = recurse(&matrix_subtract(l00, l10)?, &matrix_add(r00, r01)?)?;

    let c00 = matrix_subtract(&matrix_add(&matrix_add(&p5, &p6)?, &p4)?, &p2)?;
    let c01 = matrix_add(&p1, &p2)?;
    let c10 = matrix_add(&p3, &p4)?;
    let c11 = matrix_subtract(&matrix_subtract(&matrix_add(&p5, &p1)?, &p3)?, &p7)?;

    Ok(unsplit(&Quadrants::new(c00, c01, c10, c11)?))
}

/// Strassen multiplier with the odd-dimension brute-force fallback.
pub struct Strassen;

impl Strassen {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for Strassen {
    fn default() -> Self {
        Self::new()
    }
}

impl CoreMultiplier for Strassen {
    fn multiply_core(
        &self,
        left: &Matrix,
        right: &Matrix,
        _opts: &Options,
    ) -> Result<Matrix, MatrixError> {
        strassen(left, right)
    }

    fn name(&self) -> &'static str {
        "Strassen"
    }
}

/// Strassen multiplier that pads odd dimensions and recurses down to
/// `Options::strassen_threshold`.
pub struct PaddedStrassen;

impl PaddedStrassen {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for PaddedStrassen {
    fn default() -> Self {
        Self::new()
    }
}

impl CoreMultiplier for PaddedStrassen {
    fn multiply_core(
        &self,
        left: &Matrix,
        right: &Matrix,
        opts: &Options,
    ) -> Result<Matrix, MatrixError> {
        strassen_padded(left, right, opts.strassen_threshold.max(1))
    }

    fn name(&self) -> &'static str {
        "PaddedStrassen"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(rows: Vec<Vec<i64>>) -> Matrix {
        Matrix::from_rows(rows).unwrap()
    }

    fn patterned(rows: usize, cols: usize, modulus: i64) -> Matrix {
        let data = (0..rows * cols)
            .map(|i| i64::try_from(i).unwrap() % modulus - modulus / 2)
            .collect();
        Matrix::from_vec(rows, cols, data).unwrap()
    }

    #[test]
    fn basic_product_uses_fallback() {
        let a = m(vec![vec![8, -3, 6], vec![0, -4, 4]]);
        let b = m(vec![vec![10], vec![-3], vec![7]]);
        assert_eq!(multiply_strassen(&a, &b).unwrap(), m(vec![vec![131], vec![40]]));
    }

    #[test]
    fn two_by_two_single_level() {
        let a = m(vec![vec![1, 3], vec![7, 5]]);
        let b = m(vec![vec![6, 8], vec![4, 2]]);
        assert_eq!(
            multiply_strassen(&a, &b).unwrap(),
            m(vec![vec![18, 14], vec![62, 66]])
        );
    }

    #[test]
    fn four_by_four() {
        let a = m(vec![
            vec![2, 3, 9, 2],
            vec![1, 4, 3, 9],
            vec![2, 1, 4, 8],
            vec![1, 2, 3, 1],
        ]);
        let b = m(vec![
            vec![3, 1, 2, 3],
            vec![3, 0, 9, 2],
            vec![4, 1, 4, 1],
            vec![3, 0, 0, 2],
        ]);
        let expected = m(vec![
            vec![57, 11, 67, 25],
            vec![54, 4, 50, 32],
            vec![49, 6, 29, 28],
            vec![24, 4, 32, 12],
        ]);
        assert_eq!(multiply_strassen(&a, &b).unwrap(), expected);
    }

    #[test]
    fn rectangular_even_dims() {
        let a = patterned(4, 8, 7);
        let b = patterned(8, 2, 5);
        assert_eq!(multiply_strassen(&a, &b).unwrap(), multiply_bf(&a, &b).unwrap());
    }

    #[test]
    fn deep_recursion_matches_brute_force() {
        let a = patterned(16, 16, 9);
        let b = patterned(16, 16, 11);
        assert_eq!(multiply_strassen(&a, &b).unwrap(), multiply_bf(&a, &b).unwrap());
    }

    #[test]
    fn odd_dimension_at_lower_level() {
        // 6x6 splits into 3x3 quadrants, which fall back.
        let a = patterned(6, 6, 5);
        let b = patterned(6, 6, 3);
        assert!(has_odd_dimension(&split(&a).unwrap()[(0, 0)], &b));
        assert_eq!(multiply_strassen(&a, &b).unwrap(), multiply_bf(&a, &b).unwrap());
    }

    #[test]
    fn padded_matches_brute_force_on_odd_dims() {
        for (rows, inner, cols) in [(5, 7, 3), (9, 9, 9), (3, 2, 5), (11, 6, 13)] {
            let a = patterned(rows, inner, 7);
            let b = patterned(inner, cols, 5);
            assert_eq!(
                multiply_strassen_padded(&a, &b, 1).unwrap(),
                multiply_bf(&a, &b).unwrap(),
                "{rows}x{inner} * {inner}x{cols}"
            );
        }
    }

    #[test]
    fn padded_leaf_size_zero_is_clamped() {
        let a = patterned(5, 5, 4);
        assert_eq!(
            multiply_strassen_padded(&a, &a, 0).unwrap(),
            multiply_bf(&a, &a).unwrap()
        );
    }

    #[test]
    fn padded_large_leaf_is_brute_force() {
        let a = patterned(6, 6, 4);
        assert_eq!(
            multiply_strassen_padded(&a, &a, 100).unwrap(),
            multiply_bf(&a, &a).unwrap()
        );
    }

    #[test]
    fn empty_operand_rejected() {
        let a = Matrix::zeros(2, 0);
        let b = Matrix::zeros(0, 2);
        assert!(matches!(
            multiply_strassen(&a, &b),
            Err(MatrixError::EmptyMatrix { .. })
        ));
        assert!(matches!(
            multiply_strassen_padded(&a, &b, 1),
            Err(MatrixError::EmptyMatrix { .. })
        ));
    }

    #[test]
    fn mismatch_rejected_at_entry() {
        let a = Matrix::zeros(4, 4);
        let b = Matrix::zeros(2, 4);
        assert!(matches!(
            multiply_strassen(&a, &b),
            Err(MatrixError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn padded_uses_options_threshold() {
        let a = patterned(10, 10, 6);
        let opts = Options {
            strassen_threshold: 2,
            ..Options::default()
        };
        let got = PaddedStrassen::new().multiply_core(&a, &a, &opts).unwrap();
        assert_eq!(got, multiply_bf(&a, &a).unwrap());
    }

    #[test]
    fn core_multiplier_names() {
        assert_eq!(Strassen::new().name(), "Strassen");
        assert_eq!(PaddedStrassen::new().name(), "PaddedStrassen");
    }
}
