//! Gauss-Jordan elimination to reduced row-echelon form.
//!
//! The pivot of a column is the first row at or below the current pivot row
//! holding a non-zero entry. Zero is tested exactly through `Zero::is_zero`;
//! no tolerance is applied, so floating point noise left by earlier steps is
//! treated as a genuine pivot candidate.

use crate::matrix::matrix::Matrix;
use crate::matrix::matrix_gen::MatrixGen;
use crate::matrix::scalar::Scalar;
use log::{debug, trace};

#[derive(Debug, Clone)]
pub struct Reduction<T> {
    pub matrix: MatrixGen<T>,
    /// 0-indexed pivot column of each non-zero row, top to bottom.
    pub pivot_columns: Vec<usize>,
    /// Entry each pivot row was divided by, in the same order.
    pub pivot_values: Vec<T>,
    pub swaps: usize,
}

impl<T: Scalar> Reduction<T> {
    pub fn rank(&self) -> usize {
        self.pivot_columns.len()
    }

    /// Columns among the first `searched` without a pivot.
    pub fn free_columns(&self, searched: usize) -> Vec<usize> {
        (0..searched)
            .filter(|c| !self.pivot_columns.contains(c))
            .collect()
    }
}

/// Reduce a copy of `matrix`, searching for pivots in its first
/// `pivot_limit` columns only. Row operations always span the full row.
pub fn reduce<T: Scalar>(matrix: &MatrixGen<T>, pivot_limit: usize) -> Reduction<T> {
    let mut mat = matrix.clone();
    let mut pivot_columns = vec![];
    let mut pivot_values = vec![];
    let mut swaps = 0;
    let mut row = 0;

    for col in 0..pivot_limit.min(mat.cols) {
        if row >= mat.rows {
            break;
        }

        let pivot_row = match (row..mat.rows).find(|&r| !mat.at(r, col).is_zero()) {
            Some(r) => r,
            None => {
                trace!("column {} has no pivot", col + 1);
                continue;
            }
        };

        if pivot_row != row {
            mat.swap_rows_raw(row, pivot_row);
            swaps += 1;
        }

        let pivot_val = mat.at(row, col);
        mat.divide_row_raw(row, &pivot_val);

        for r in 0..mat.rows {
            if r == row {
                continue;
            }
            let factor = mat.at(r, col);
            if factor.is_zero() {
                continue;
            }
            mat.add_row_multiple_raw(r, row, &-factor);
        }

        trace!("pivot {} at row {}, column {}", pivot_val, row + 1, col + 1);
        pivot_columns.push(col);
        pivot_values.push(pivot_val);
        row += 1;
    }

    debug!(
        "reduced {}x{} matrix: rank {}, pivot columns {:?}",
        mat.rows,
        mat.cols,
        pivot_columns.len(),
        pivot_columns
    );

    Reduction {
        matrix: mat,
        pivot_columns,
        pivot_values,
        swaps,
    }
}

pub fn is_rref<T: Scalar>(matrix: &MatrixGen<T>) -> bool {
    let mut lead = None;

    for i in 0..matrix.rows {
        let pivot_col_opt = (0..matrix.cols).find(|&c| !matrix.at(i, c).is_zero());

        match pivot_col_opt {
            None => {
                // zero rows sit at the bottom
                for r in i + 1..matrix.rows {
                    if (0..matrix.cols).any(|c| !matrix.at(r, c).is_zero()) {
                        return false;
                    }
                }
                break;
            }
            Some(pivot_col) => {
                if let Some(prev_lead) = lead {
                    if pivot_col <= prev_lead {
                        return false;
                    }
                }
                lead = Some(pivot_col);

                if matrix.at(i, pivot_col) != T::one() {
                    return false;
                }

                for r in 0..matrix.rows {
                    if r != i && !matrix.at(r, pivot_col).is_zero() {
                        return false;
                    }
                }
            }
        }
    }
    true
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
