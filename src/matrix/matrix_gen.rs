use crate::error::{check_index, Axis, LinalgError, Result};
use crate::matrix::echelon::{self, reduce};
use crate::matrix::matrix::{Matrix, RowOperations};
use crate::matrix::matrix_special::IdentityMatrix;
use crate::matrix::scalar::Scalar;
use crate::vector::{add_scaled_into, divide_into, linear_combination, scale_into};
use itertools::{iproduct, Itertools};
use std::fmt;
use std::ops;
use std::ops::Range;

/// Dense matrix stored row-major in a flat buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixGen<T> {
    pub cols: usize,
    pub rows: usize,
    pub cells: Vec<T>,
}

impl<T: Scalar> Matrix<T> for MatrixGen<T> {
    fn rows(&self) -> usize {
        self.rows
    }

    fn cols(&self) -> usize {
        self.cols
    }

    #[inline(always)]
    fn at(&self, row: usize, col: usize) -> T {
        self.cells[row * self.cols + col].clone()
    }

    fn rank(&self) -> usize {
        reduce(self, self.cols).rank()
    }

    fn to_general(&self) -> MatrixGen<T> {
        self.clone()
    }
}

impl<T: Scalar> RowOperations<T> for MatrixGen<T> {
    fn swap_rows_in_place(&mut self, i: usize, j: usize) -> Result<()> {
        check_index(Axis::Row, i, self.rows)?;
        check_index(Axis::Row, j, self.rows)?;
        self.swap_rows_raw(i - 1, j - 1);
        Ok(())
    }

    fn scale_row_in_place(&mut self, i: usize, k: T) -> Result<()> {
        check_index(Axis::Row, i, self.rows)?;
        if k.is_zero() {
            return Err(LinalgError::InvalidScalar);
        }
        let cols = self.cols;
        scale_into(&mut self.cells[(i - 1) * cols..i * cols], &k);
        Ok(())
    }

    fn add_row_multiple_in_place(&mut self, i: usize, j: usize, k: T) -> Result<()> {
        check_index(Axis::Row, i, self.rows)?;
        check_index(Axis::Row, j, self.rows)?;
        self.add_row_multiple_raw(i - 1, j - 1, &k);
        Ok(())
    }

    fn set_entry(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        check_index(Axis::Row, row, self.rows)?;
        check_index(Axis::Column, col, self.cols)?;
        self.cells[(row - 1) * self.cols + col - 1] = value;
        Ok(())
    }
}

impl<T: Scalar> MatrixGen<T> {
    /// Zero-filled `rows x cols` matrix.
    pub fn new(rows: usize, cols: usize) -> Result<MatrixGen<T>> {
        Ok(MatrixGen {
            rows,
            cols,
            cells: (0..cell_count(rows, cols)?).map(|_| T::zero()).collect(),
        })
    }

    pub fn identity(n: usize) -> MatrixGen<T> {
        IdentityMatrix::new(n).to_general()
    }

    /// Build from rows of equal length.
    pub fn from_list(lines: Vec<Vec<T>>) -> Result<MatrixGen<T>> {
        let rows = lines.len();
        let cols = lines.first().map_or(0, Vec::len);

        if let Some(line) = lines.iter().find(|l| l.len() != cols) {
            return Err(LinalgError::DimensionMismatch {
                expected: cols,
                found: line.len(),
            });
        }

        Ok(MatrixGen {
            rows,
            cols,
            cells: lines.into_iter().flatten().collect(),
        })
    }

    /// Build from a row-major buffer.
    pub fn from_vec(rows: usize, cols: usize, cells: Vec<T>) -> Result<MatrixGen<T>> {
        let expected = cell_count(rows, cols)?;
        if cells.len() != expected {
            return Err(LinalgError::DimensionMismatch {
                expected,
                found: cells.len(),
            });
        }
        Ok(MatrixGen { rows, cols, cells })
    }

    pub fn transpose(&self) -> MatrixGen<T> {
        MatrixGen {
            rows: self.cols,
            cols: self.rows,
            cells: (0..self.cols)
                .flat_map(|c| (0..self.rows).map(move |r| self.at(r, c)))
                .collect(),
        }
    }

    /// Reduced row-echelon form. The receiver is left untouched.
    pub fn rref(&self) -> MatrixGen<T> {
        reduce(self, self.cols).matrix
    }

    pub fn is_rref(&self) -> bool {
        echelon::is_rref(self)
    }

    pub fn determinant(&self) -> Result<T> {
        if !self.is_square() {
            return Err(LinalgError::DimensionMismatch {
                expected: self.rows,
                found: self.cols,
            });
        }

        let reduction = reduce(self, self.cols);
        if reduction.rank() < self.rows {
            return Ok(T::zero());
        }

        let product = reduction
            .pivot_values
            .into_iter()
            .fold(T::one(), |acc, p| acc * p);
        if reduction.swaps % 2 == 1 {
            return Ok(-product);
        }
        Ok(product)
    }

    /// Inverse obtained by reducing `[A | I]`.
    pub fn inverse(&self) -> Result<MatrixGen<T>> {
        if !self.is_square() {
            return Err(LinalgError::DimensionMismatch {
                expected: self.rows,
                found: self.cols,
            });
        }

        let n = self.rows;
        let reduction = reduce(&self.augment(&MatrixGen::identity(n))?, n);
        if reduction.rank() < n {
            return Err(LinalgError::Singular);
        }
        Ok(reduction.matrix.select_columns(n..2 * n))
    }

    /// Basis of the null space, one basis vector per column.
    pub fn right_kernel_matrix(&self) -> Result<MatrixGen<T>> {
        let reduction = reduce(self, self.cols);
        let free_cols = reduction.free_columns(self.cols);

        let mut kernel = MatrixGen::new(self.cols, free_cols.len())?;
        for (k, &free_col) in free_cols.iter().enumerate() {
            kernel.cells[free_col * kernel.cols + k] = T::one();
            for (row, &pivot_col) in reduction.pivot_columns.iter().enumerate() {
                kernel.cells[pivot_col * kernel.cols + k] = -reduction.matrix.at(row, free_col);
            }
        }
        Ok(kernel)
    }

    /// Horizontal concatenation `[self | other]`.
    pub fn augment(&self, other: &MatrixGen<T>) -> Result<MatrixGen<T>> {
        if self.rows != other.rows {
            return Err(LinalgError::DimensionMismatch {
                expected: self.rows,
                found: other.rows,
            });
        }

        let cols = self.cols + other.cols;
        Ok(MatrixGen {
            rows: self.rows,
            cols,
            cells: iproduct!(0..self.rows, 0..cols)
                .map(|(r, c)| {
                    if c < self.cols {
                        self.at(r, c)
                    } else {
                        other.at(r, c - self.cols)
                    }
                })
                .collect(),
        })
    }

    /// Copy of the 0-indexed column range.
    pub(crate) fn select_columns(&self, range: Range<usize>) -> MatrixGen<T> {
        let cols = range.len();
        MatrixGen {
            rows: self.rows,
            cols,
            cells: iproduct!(0..self.rows, range)
                .map(|(r, c)| self.at(r, c))
                .collect(),
        }
    }

    pub(crate) fn swap_rows_raw(&mut self, i: usize, j: usize) {
        for k in 0..self.cols {
            self.cells.swap(i * self.cols + k, j * self.cols + k);
        }
    }

    // Dividing keeps `x / x == 1` exact for the pivot entry.
    pub(crate) fn divide_row_raw(&mut self, i: usize, k: &T) {
        let cols = self.cols;
        divide_into(&mut self.cells[i * cols..(i + 1) * cols], k);
    }

    pub(crate) fn add_row_multiple_raw(&mut self, i: usize, j: usize, k: &T) {
        let cols = self.cols;
        let source = self.cells[j * cols..(j + 1) * cols].to_vec();
        add_scaled_into(&mut self.cells[i * cols..(i + 1) * cols], &source, k);
    }
}

// `rows * cols`; `expected` reports the largest row count `cols` allows.
fn cell_count(rows: usize, cols: usize) -> Result<usize> {
    rows.checked_mul(cols).ok_or(LinalgError::DimensionMismatch {
        expected: usize::MAX / cols.max(1),
        found: rows,
    })
}

impl<T: Scalar> ops::Add<&MatrixGen<T>> for &MatrixGen<T> {
    type Output = Result<MatrixGen<T>>;

    fn add(self, rhs: &MatrixGen<T>) -> Result<MatrixGen<T>> {
        if self.cols != rhs.cols || self.rows != rhs.rows {
            return Err(LinalgError::DimensionMismatch {
                expected: self.rows * self.cols,
                found: rhs.rows * rhs.cols,
            });
        }

        Ok(MatrixGen {
            rows: self.rows,
            cols: self.cols,
            cells: self
                .cells
                .iter()
                .zip(rhs.cells.iter())
                .map(|(a, b)| a.to_owned() + b.to_owned())
                .collect(),
        })
    }
}

impl<T: Scalar> ops::Mul<&MatrixGen<T>> for &MatrixGen<T> {
    type Output = Result<MatrixGen<T>>;

    fn mul(self, rhs: &MatrixGen<T>) -> Result<MatrixGen<T>> {
        if self.cols != rhs.rows {
            return Err(LinalgError::DimensionMismatch {
                expected: self.cols,
                found: rhs.rows,
            });
        }

        let lhs_rows = self.to_list();
        let rhs_cols = rhs.transpose().to_list();

        Ok(MatrixGen {
            rows: self.rows,
            cols: rhs.cols,
            cells: iproduct!(lhs_rows.iter(), rhs_cols.iter())
                .map(|(row, col)| linear_combination(row, col))
                .collect::<Result<Vec<T>>>()?,
        })
    }
}

impl<T: Scalar> fmt::Display for MatrixGen<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self
            .iter_rows()
            .map(|(_, row)| format!("[{}]", row.iter().join(", ")))
            .join("\n");
        write!(f, "{}", text)
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
