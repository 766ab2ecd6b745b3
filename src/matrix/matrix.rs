use crate::error::{check_index, Axis, Result};
use crate::matrix::matrix_gen::MatrixGen;
use crate::matrix::scalar::Scalar;
use itertools::iproduct;

/// Read contract shared by every matrix variant.
///
/// Positions taken by the public accessors are 1-indexed. `at` is the raw
/// 0-indexed read used by the algorithms and is only called with positions
/// already known to be in range.
pub trait Matrix<T: Scalar>
where
    Self: Sized,
{
    fn rows(&self) -> usize;
    fn cols(&self) -> usize;
    fn at(&self, row: usize, col: usize) -> T;

    /// Number of pivots in the reduced row-echelon form.
    fn rank(&self) -> usize {
        self.to_general().rank()
    }

    fn entry(&self, row: usize, col: usize) -> Result<T> {
        check_index(Axis::Row, row, self.rows())?;
        check_index(Axis::Column, col, self.cols())?;
        Ok(self.at(row - 1, col - 1))
    }

    /// Copy of row `row`.
    fn row(&self, row: usize) -> Result<Vec<T>> {
        check_index(Axis::Row, row, self.rows())?;
        Ok((0..self.cols()).map(|c| self.at(row - 1, c)).collect())
    }

    /// Copy of column `col`.
    fn column(&self, col: usize) -> Result<Vec<T>> {
        check_index(Axis::Column, col, self.cols())?;
        Ok((0..self.rows()).map(|r| self.at(r, col - 1)).collect())
    }

    fn main_diagonal(&self) -> Vec<T> {
        (0..self.rows().min(self.cols()))
            .map(|i| self.at(i, i))
            .collect()
    }

    fn is_square(&self) -> bool {
        self.rows() == self.cols()
    }

    /// Every entry in row-major order as `(row, col, value)`.
    fn iter_entries(&self) -> impl Iterator<Item = (usize, usize, T)> + '_ {
        iproduct!(1..=self.rows(), 1..=self.cols()).map(move |(r, c)| (r, c, self.at(r - 1, c - 1)))
    }

    fn iter_rows(&self) -> impl Iterator<Item = (usize, Vec<T>)> + '_ {
        (1..=self.rows()).map(move |r| (r, (0..self.cols()).map(|c| self.at(r - 1, c)).collect()))
    }

    fn iter_columns(&self) -> impl Iterator<Item = (usize, Vec<T>)> + '_ {
        (1..=self.cols()).map(move |c| (c, (0..self.rows()).map(|r| self.at(r, c - 1)).collect()))
    }

    fn to_list(&self) -> Vec<Vec<T>> {
        self.iter_rows().map(|(_, row)| row).collect()
    }

    /// Materialize into a dense, mutable matrix.
    fn to_general(&self) -> MatrixGen<T> {
        MatrixGen {
            rows: self.rows(),
            cols: self.cols(),
            cells: iproduct!(0..self.rows(), 0..self.cols())
                .map(|(r, c)| self.at(r, c))
                .collect(),
        }
    }
}

/// The three elementary row operations plus element assignment.
///
/// Only dense variants implement this. The `*_in_place` methods mutate the
/// receiver; the plain methods leave it untouched and return the result.
pub trait RowOperations<T: Scalar>: Matrix<T> + Clone {
    fn swap_rows_in_place(&mut self, i: usize, j: usize) -> Result<()>;

    /// Fails with `InvalidScalar` when `k` is zero.
    fn scale_row_in_place(&mut self, i: usize, k: T) -> Result<()>;

    /// Replace row `i` with `row i + k * row j`.
    fn add_row_multiple_in_place(&mut self, i: usize, j: usize, k: T) -> Result<()>;

    fn set_entry(&mut self, row: usize, col: usize, value: T) -> Result<()>;

    fn swap_rows(&self, i: usize, j: usize) -> Result<Self> {
        let mut result = self.clone();
        result.swap_rows_in_place(i, j)?;
        Ok(result)
    }

    fn scale_row(&self, i: usize, k: T) -> Result<Self> {
        let mut result = self.clone();
        result.scale_row_in_place(i, k)?;
        Ok(result)
    }

    fn add_row_multiple(&self, i: usize, j: usize, k: T) -> Result<Self> {
        let mut result = self.clone();
        result.add_row_multiple_in_place(i, j, k)?;
        Ok(result)
    }
}
