//! Dense row-major integer matrix.
//!
//! Entries live in a single flat buffer with explicit `rows` and `cols`, so
//! every `Matrix` is rectangular by construction. Nested-row input goes
//! through [`Matrix::from_rows`], which rejects ragged rows.

use std::fmt;
use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use crate::multiplier::MatrixError;

/// Scalar type stored in every matrix.
pub type Element = i64;

/// Shape of a matrix, displayed as `rowsxcols`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dims {
    pub rows: usize,
    pub cols: usize,
}

impl Dims {
    #[must_use]
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// True when either dimension is zero.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.rows == 0 || self.cols == 0
    }
}

impl fmt::Display for Dims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// Rectangular matrix of [`Element`]s.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Element>>", into = "Vec<Vec<Element>>")]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<Element>,
}

impl Matrix {
    /// Number of entries in a `rows x cols` matrix, if one can be allocated.
    pub fn entry_count(rows: usize, cols: usize) -> Result<usize, MatrixError> {
        let max = isize::MAX.unsigned_abs() / std::mem::size_of::<Element>();
        rows.checked_mul(cols)
            .filter(|&n| n <= max)
            .ok_or(MatrixError::TooLarge { rows, cols })
    }

    /// Matrix of the given shape filled with zeros, or `TooLarge` when the
    /// entry count overflows.
    pub fn try_zeros(rows: usize, cols: usize) -> Result<Self, MatrixError> {
        let len = Self::entry_count(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            data: vec![0; len],
        })
    }

    /// Matrix of the given shape filled with zeros.
    ///
    /// # Panics
    ///
    /// Panics if `rows * cols` overflows `usize`; use [`Matrix::try_zeros`]
    /// for caller-supplied shapes.
    #[must_use]
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0; rows * cols],
        }
    }

    /// The `n x n` identity matrix.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m[(i, i)] = 1;
        }
        m
    }

    /// Build a matrix from nested rows.
    ///
    /// An empty outer vector yields a `0x0` matrix; rows of length zero
    /// yield an `rx0` matrix. Rows of differing length are rejected.
    pub fn from_rows(rows: Vec<Vec<Element>>) -> Result<Self, MatrixError> {
        let num_rows = rows.len();
        let num_cols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(num_rows * num_cols);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != num_cols {
                return Err(MatrixError::Ragged {
                    row: i,
                    expected: num_cols,
                    found: row.len(),
                });
            }
            data.extend(row);
        }
        Ok(Self {
            rows: num_rows,
            cols: num_cols,
            data,
        })
    }

    /// Build a matrix from a flat row-major buffer.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<Element>) -> Result<Self, MatrixError> {
        let expected = Self::entry_count(rows, cols)?;
        if data.len() != expected {
            return Err(MatrixError::Ragged {
                row: 0,
                expected,
                found: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Parse a JSON array of row arrays.
    pub fn from_json_str(s: &str) -> Result<Self, MatrixError> {
        serde_json::from_str(s).map_err(|e| MatrixError::Parse(e.to_string()))
    }

    /// Serialize as a JSON array of row arrays.
    pub fn to_json_string(&self) -> Result<String, MatrixError> {
        serde_json::to_string(self).map_err(|e| MatrixError::Parse(e.to_string()))
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[must_use]
    pub fn dims(&self) -> Dims {
        Dims::new(self.rows, self.cols)
    }

    /// A matrix with zero rows or zero columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dims().is_empty()
    }

    /// Number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Entry at `(row, col)`, or `None` when out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<Element> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.data.get(row * self.cols + col).copied()
    }

    /// Borrow one row as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `row >= self.rows()`.
    #[must_use]
    pub fn row(&self, row: usize) -> &[Element] {
        assert!(row < self.rows, "row {row} out of bounds for {}", self.dims());
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    fn row_mut(&mut self, row: usize) -> &mut [Element] {
        let cols = self.cols;
        &mut self.data[row * cols..(row + 1) * cols]
    }

    /// Iterate over rows as slices.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Element]> + '_ {
        (0..self.rows).map(move |r| self.row(r))
    }

    /// Flat row-major view of every entry.
    #[must_use]
    pub fn as_slice(&self) -> &[Element] {
        &self.data
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [Element] {
        &mut self.data
    }

    /// Copy into nested rows.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<Element>> {
        self.iter_rows().map(<[Element]>::to_vec).collect()
    }

    /// Copy of the `rows x cols` block starting at `(row_offset, col_offset)`.
    ///
    /// Callers guarantee the block lies within `self`.
    pub(crate) fn block(&self, row_offset: usize, col_offset: usize, rows: usize, cols: usize) -> Self {
        let mut data = Vec::with_capacity(rows * cols);
        for r in row_offset..row_offset + rows {
            data.extend_from_slice(&self.row(r)[col_offset..col_offset + cols]);
        }
        Self { rows, cols, data }
    }

    /// Write `src` into `self` with its top-left corner at `(row_offset, col_offset)`.
    ///
    /// Callers guarantee `src` fits.
    pub(crate) fn write_block(&mut self, row_offset: usize, col_offset: usize, src: &Self) {
        for r in 0..src.rows {
            self.row_mut(row_offset + r)[col_offset..col_offset + src.cols]
                .copy_from_slice(src.row(r));
        }
    }

    /// Grow to `rows x cols`, filling new entries with zeros.
    ///
    /// Never shrinks; requested dimensions below the current ones are
    /// ignored.
    #[must_use]
    pub fn pad_to(&self, rows: usize, cols: usize) -> Self {
        let rows = rows.max(self.rows);
        let cols = cols.max(self.cols);
        if rows == self.rows && cols == self.cols {
            return self.clone();
        }
        let mut out = Self::zeros(rows, cols);
        out.write_block(0, 0, self);
        out
    }

    /// Keep only the top-left `rows x cols` block.
    ///
    /// Requested dimensions above the current ones are clamped.
    #[must_use]
    pub fn crop(&self, rows: usize, cols: usize) -> Self {
        self.block(0, 0, rows.min(self.rows), cols.min(self.cols))
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = Element;

    fn index(&self, (row, col): (usize, usize)) -> &Element {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of bounds for {}",
            self.dims()
        );
        &self.data[row * self.cols + col]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Element {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of bounds for {}",
            self.dims()
        );
        &mut self.data[row * self.cols + col]
    }
}

impl TryFrom<Vec<Vec<Element>>> for Matrix {
    type Error = MatrixError;

    fn try_from(rows: Vec<Vec<Element>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<Matrix> for Vec<Vec<Element>> {
    fn from(m: Matrix) -> Self {
        m.to_rows()
    }
}

/// Right-aligned, one row per line. Empty matrices render as `[]`.
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "[] ({})", self.dims());
        }
        let width = self
            .data
            .iter()
            .map(|v| v.to_string().len())
            .max()
            .unwrap_or(1);
        for (i, row) in self.iter_rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "[")?;
            for (j, v) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{v:>width$}")?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}
