use crate::matrix::matrix::Matrix;
use crate::matrix::scalar::Scalar;
use std::marker::PhantomData;

/// `n x n` identity, entries computed on read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdentityMatrix<T> {
    pub size: usize,
    _marker: PhantomData<T>,
}

impl<T> IdentityMatrix<T> {
    pub fn new(size: usize) -> Self {
        IdentityMatrix {
            size,
            _marker: PhantomData,
        }
    }
}

impl<T: Scalar> Matrix<T> for IdentityMatrix<T> {
    fn rows(&self) -> usize {
        self.size
    }

    fn cols(&self) -> usize {
        self.size
    }

    #[inline(always)]
    fn at(&self, row: usize, col: usize) -> T {
        if row == col {
            T::one()
        } else {
            T::zero()
        }
    }

    fn rank(&self) -> usize {
        self.size
    }
}

/// All-zero matrix, entries computed on read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZeroMatrix<T> {
    pub rows: usize,
    pub cols: usize,
    _marker: PhantomData<T>,
}

impl<T> ZeroMatrix<T> {
    pub fn new(size: usize) -> Self {
        Self::with_shape(size, size)
    }

    pub fn with_shape(rows: usize, cols: usize) -> Self {
        ZeroMatrix {
            rows,
            cols,
            _marker: PhantomData,
        }
    }
}

impl<T: Scalar> Matrix<T> for ZeroMatrix<T> {
    fn rows(&self) -> usize {
        self.rows
    }

    fn cols(&self) -> usize {
        self.cols
    }

    #[inline(always)]
    fn at(&self, _row: usize, _col: usize) -> T {
        T::zero()
    }

    fn rank(&self) -> usize {
        0
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
