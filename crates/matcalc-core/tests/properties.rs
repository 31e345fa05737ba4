//! Property-based tests for the matrix engine.
//!
//! These tests exercise the free functions directly (without the
//! `CheckedMultiplier` decorator).

use proptest::prelude::*;

use matcalc_core::{
    matrix_add, matrix_scalar_multiply, matrix_subtract, matrix_transpose, multiply_bf,
    multiply_dac, multiply_strassen, multiply_strassen_padded, split, unsplit, Matrix,
    MatrixError,
};

type MulFn = fn(&Matrix, &Matrix) -> Result<Matrix, MatrixError>;

fn strassen_padded_leaf1(a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
    multiply_strassen_padded(a, b, 1)
}

const VARIANTS: [(&str, MulFn); 4] = [
    ("bf", multiply_bf),
    ("dac", multiply_dac),
    ("strassen", multiply_strassen),
    ("strassen-padded", strassen_padded_leaf1),
];

/// Matrix of the given shape with small entries.
fn matrix(rows: usize, cols: usize) -> impl Strategy<Value = Matrix> {
    prop::collection::vec(-20i64..=20, rows * cols)
        .prop_map(move |data| Matrix::from_vec(rows, cols, data).unwrap())
}

/// Matrix whose entries span the whole `i64` range.
fn wide_matrix(rows: usize, cols: usize) -> impl Strategy<Value = Matrix> {
    prop::collection::vec(any::<i64>(), rows * cols)
        .prop_map(move |data| Matrix::from_vec(rows, cols, data).unwrap())
}

/// Compatible pair `(m x k, k x n)`.
fn product_pair() -> impl Strategy<Value = (Matrix, Matrix)> {
    (1usize..10, 1usize..10, 1usize..10)
        .prop_flat_map(|(m, k, n)| (matrix(m, k), matrix(k, n)))
}

/// Compatible triple `(m x k, k x p, p x n)`.
fn product_triple() -> impl Strategy<Value = (Matrix, Matrix, Matrix)> {
    (1usize..7, 1usize..7, 1usize..7, 1usize..7)
        .prop_flat_map(|(m, k, p, n)| (matrix(m, k), matrix(k, p), matrix(p, n)))
}

/// `A` (m x k) with `B`, `C` (k x n) for distributivity.
fn distributive_triple() -> impl Strategy<Value = (Matrix, Matrix, Matrix)> {
    (1usize..8, 1usize..8, 1usize..8)
        .prop_flat_map(|(m, k, n)| (matrix(m, k), matrix(k, n), matrix(k, n)))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// unsplit(split(A)) == A for every A of at least 2x2.
    #[test]
    fn split_round_trip(a in (2usize..12, 2usize..12).prop_flat_map(|(r, c)| matrix(r, c))) {
        let q = split(&a).unwrap();
        prop_assert_eq!(q.dims(), a.dims());
        prop_assert_eq!(unsplit(&q), a);
    }

    /// Split never produces a top/left block larger than the bottom/right one.
    #[test]
    fn split_top_left_not_larger(a in (2usize..12, 2usize..12).prop_flat_map(|(r, c)| matrix(r, c))) {
        let q = split(&a).unwrap();
        prop_assert!(q[(0, 0)].rows() <= q[(1, 0)].rows());
        prop_assert!(q[(0, 0)].cols() <= q[(0, 1)].cols());
        prop_assert_eq!(q[(0, 0)].rows(), a.rows() / 2);
        prop_assert_eq!(q[(0, 0)].cols(), a.cols() / 2);
    }

    /// Every algorithm agrees with brute force.
    #[test]
    fn all_algorithms_agree((a, b) in product_pair()) {
        let expected = multiply_bf(&a, &b).unwrap();
        for (name, f) in VARIANTS {
            prop_assert_eq!(&f(&a, &b).unwrap(), &expected, "{} disagrees", name);
        }
    }

    /// A(BC) == (AB)C for each algorithm.
    #[test]
    fn associativity((a, b, c) in product_triple()) {
        for (name, f) in VARIANTS {
            let left = f(&a, &f(&b, &c).unwrap()).unwrap();
            let right = f(&f(&a, &b).unwrap(), &c).unwrap();
            prop_assert_eq!(left, right, "{} not associative", name);
        }
    }

    /// A(B + C) == AB + AC for each algorithm.
    #[test]
    fn left_distributivity((a, b, c) in distributive_triple()) {
        for (name, f) in VARIANTS {
            let lhs = f(&a, &matrix_add(&b, &c).unwrap()).unwrap();
            let rhs = matrix_add(&f(&a, &b).unwrap(), &f(&a, &c).unwrap()).unwrap();
            prop_assert_eq!(lhs, rhs, "{} not left-distributive", name);
        }
    }

    /// (B + C)A == BA + CA for each algorithm.
    #[test]
    fn right_distributivity((a, b, c) in distributive_triple()) {
        // Reuse the shapes transposed: B^T, C^T are n x k and A^T is k x m.
        let (a, b, c) = (matrix_transpose(&a), matrix_transpose(&b), matrix_transpose(&c));
        for (name, f) in VARIANTS {
            let lhs = f(&matrix_add(&b, &c).unwrap(), &a).unwrap();
            let rhs = matrix_add(&f(&b, &a).unwrap(), &f(&c, &a).unwrap()).unwrap();
            prop_assert_eq!(lhs, rhs, "{} not right-distributive", name);
        }
    }

    /// (AB)^T == B^T A^T.
    #[test]
    fn transpose_of_product((a, b) in product_pair()) {
        let lhs = matrix_transpose(&multiply_bf(&a, &b).unwrap());
        let rhs = multiply_dac(&matrix_transpose(&b), &matrix_transpose(&a)).unwrap();
        prop_assert_eq!(lhs, rhs);
    }

    /// A - B == A + (-1)B and (A - B) + B == A.
    #[test]
    fn subtract_inverts_add((a, b) in (1usize..8, 1usize..8).prop_flat_map(|(r, c)| (matrix(r, c), matrix(r, c)))) {
        let diff = matrix_subtract(&a, &b).unwrap();
        prop_assert_eq!(&diff, &matrix_add(&a, &matrix_scalar_multiply(-1, &b).unwrap()).unwrap());
        prop_assert_eq!(matrix_add(&diff, &b).unwrap(), a);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Huge entries give `Ok` or `Overflow`, never a panic, and every
    /// variant that succeeds matches brute force.
    #[test]
    fn overflow_is_an_error((a, b) in (1usize..6, 1usize..6, 1usize..6)
        .prop_flat_map(|(m, k, n)| (wide_matrix(m, k), wide_matrix(k, n))))
    {
        let expected = multiply_bf(&a, &b);
        for (name, f) in VARIANTS {
            match (f(&a, &b), &expected) {
                (Ok(product), Ok(reference)) => prop_assert_eq!(&product, reference, "{}", name),
                (Ok(_), Err(_)) => {}
                (Err(e), _) => prop_assert!(matches!(e, MatrixError::Overflow { .. }), "{}: {}", name, e),
            }
        }
    }
}

#[test]
fn strassen_intermediate_overflow_is_reported() {
    let big = 1i64 << 62;
    let a = Matrix::from_rows(vec![vec![big, 0], vec![0, big]]).unwrap();
    let id = Matrix::identity(2);
    assert_eq!(multiply_bf(&a, &id).unwrap(), a);
    assert_eq!(multiply_dac(&a, &id).unwrap(), a);
    // L00 + L11 = 2^63 inside P5.
    assert_eq!(
        multiply_strassen(&a, &id),
        Err(MatrixError::Overflow { operation: "add" })
    );
    assert_eq!(
        multiply_strassen_padded(&a, &id, 1),
        Err(MatrixError::Overflow { operation: "add" })
    );
}

#[test]
fn concrete_product_all_variants() {
    let a = Matrix::from_rows(vec![vec![8, -3, 6], vec![0, -4, 4]]).unwrap();
    let b = Matrix::from_rows(vec![vec![10], vec![-3], vec![7]]).unwrap();
    let expected = Matrix::from_rows(vec![vec![131], vec![40]]).unwrap();
    for (name, f) in VARIANTS {
        assert_eq!(f(&a, &b).unwrap(), expected, "{name}");
    }
}

#[test]
fn empty_operand_all_variants() {
    let empty = Matrix::zeros(0, 0);
    let one = Matrix::identity(1);
    for (name, f) in VARIANTS {
        assert!(
            matches!(f(&empty, &one), Err(MatrixError::EmptyMatrix { .. })),
            "{name}"
        );
    }
}

#[test]
fn split_rejects_vectors() {
    for a in [Matrix::zeros(1, 5), Matrix::zeros(5, 1), Matrix::zeros(1, 1)] {
        assert!(matches!(split(&a), Err(MatrixError::TooSmall { .. })));
    }
}
