//! Quadrant split and unsplit.
//!
//! A matrix with `r` rows and `c` columns splits at `r / 2` and `c / 2`
//! (floor), so odd dimensions give the bottom/right blocks the extra
//! row/column. [`Quadrants`] always holds exactly four blocks that tile a
//! rectangle, which makes [`unsplit`] infallible.

use std::ops::Index;

use crate::constants::MIN_SPLIT_DIM;
use crate::matrix_types::{Dims, Matrix};
use crate::multiplier::MatrixError;

/// A 2x2 grid of blocks, indexed `[block_row][block_col]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quadrants {
    blocks: [[Matrix; 2]; 2],
}

impl Quadrants {
    /// Assemble four blocks.
    ///
    /// Blocks in the same block-row must share a row count and blocks in
    /// the same block-column must share a column count.
    pub fn new(
        top_left: Matrix,
        top_right: Matrix,
        bottom_left: Matrix,
        bottom_right: Matrix,
    ) -> Result<Self, MatrixError> {
        let pairs = [
            ("quadrant rows", &top_left, &top_right, true),
            ("quadrant rows", &bottom_left, &bottom_right, true),
            ("quadrant cols", &top_left, &bottom_left, false),
            ("quadrant cols", &top_right, &bottom_right, false),
        ];
        for (operation, a, b, same_rows) in pairs {
            let ok = if same_rows {
                a.rows() == b.rows()
            } else {
                a.cols() == b.cols()
            };
            if !ok {
                return Err(MatrixError::DimensionMismatch {
                    operation,
                    left: a.dims(),
                    right: b.dims(),
                });
            }
        }
        Ok(Self {
            blocks: [[top_left, top_right], [bottom_left, bottom_right]],
        })
    }

    /// Block at `(block_row, block_col)`, each in `0..2`.
    #[must_use]
    pub fn get(&self, block_row: usize, block_col: usize) -> &Matrix {
        &self.blocks[block_row][block_col]
    }

    /// Shape of the matrix these blocks tile.
    #[must_use]
    pub fn dims(&self) -> Dims {
        Dims::new(
            self.blocks[0][0].rows() + self.blocks[1][0].rows(),
            self.blocks[0][0].cols() + self.blocks[0][1].cols(),
        )
    }

    /// Consume into `[[top_left, top_right], [bottom_left, bottom_right]]`.
    #[must_use]
    pub fn into_blocks(self) -> [[Matrix; 2]; 2] {
        self.blocks
    }
}

impl Index<(usize, usize)> for Quadrants {
    type Output = Matrix;

    fn index(&self, (block_row, block_col): (usize, usize)) -> &Matrix {
        self.get(block_row, block_col)
    }
}

/// Split a matrix into four quadrants.
pub fn split(a: &Matrix) -> Result<Quadrants, MatrixError> {
    if a.rows() < MIN_SPLIT_DIM || a.cols() < MIN_SPLIT_DIM {
        return Err(MatrixError::TooSmall {
            rows: a.rows(),
            cols: a.cols(),
        });
    }
    let middle_row = a.rows() / 2;
    let middle_col = a.cols() / 2;
    let row_sizes = [middle_row, a.rows() - middle_row];
    let col_sizes = [middle_col, a.cols() - middle_col];

    let block = |r: usize, c: usize| {
        let row_offset = if r == 0 { 0 } else { row_sizes[0] };
        let col_offset = if c == 0 { 0 } else { col_sizes[0] };
        a.block(row_offset, col_offset, row_sizes[r], col_sizes[c])
    };

    Ok(Quadrants {
        blocks: [[block(0, 0), block(0, 1)], [block(1, 0), block(1, 1)]],
    })
}

/// Reassemble quadrants into one matrix; the inverse of [`split`].
#[must_use]
pub fn unsplit(q: &Quadrants) -> Matrix {
    let mut out = Matrix::zeros(q.dims().rows, q.dims().cols);
    let mut row_offset = 0;
    for block_row in &q.blocks {
        let mut col_offset = 0;
        for block in block_row {
            out.write_block(row_offset, col_offset, block);
            col_offset += block.cols();
        }
        row_offset += block_row[0].rows();
    }
    out
}
