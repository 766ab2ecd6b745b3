use crate::equation::augmented::AugmentedMatrix;
use crate::error::{LinalgError, Result};
use crate::matrix::matrix::{Matrix, RowOperations};
use crate::matrix::matrix_gen::MatrixGen;
use crate::matrix::matrix_special::{IdentityMatrix, ZeroMatrix};
use crate::matrix::scalar::Scalar;

/// Any matrix variant behind one type.
///
/// Reads dispatch to the wrapped variant. Mutations succeed on the dense
/// variants and fail with `Unsupported` on the closed-form ones.
#[derive(Debug, Clone)]
pub enum AnyMatrix<T> {
    General(MatrixGen<T>),
    Identity(IdentityMatrix<T>),
    Zero(ZeroMatrix<T>),
    Augmented(AugmentedMatrix<T>),
}

macro_rules! dispatch {
    ($self:expr, $m:ident => $body:expr) => {
        match $self {
            AnyMatrix::General($m) => $body,
            AnyMatrix::Identity($m) => $body,
            AnyMatrix::Zero($m) => $body,
            AnyMatrix::Augmented($m) => $body,
        }
    };
}

// Copy-returning mutation on the dense variants only.
macro_rules! on_dense {
    ($self:expr, $operation:literal, $m:ident => $body:expr) => {
        match $self {
            AnyMatrix::General($m) => Ok(AnyMatrix::from($body)),
            AnyMatrix::Augmented($m) => Ok(AnyMatrix::from($body)),
            AnyMatrix::Identity(_) | AnyMatrix::Zero(_) => Err(LinalgError::Unsupported {
                operation: $operation,
                kind: $self.kind(),
            }),
        }
    };
}

impl<T: Scalar> Matrix<T> for AnyMatrix<T> {
    fn rows(&self) -> usize {
        dispatch!(self, m => m.rows())
    }

    fn cols(&self) -> usize {
        dispatch!(self, m => m.cols())
    }

    fn at(&self, row: usize, col: usize) -> T {
        dispatch!(self, m => m.at(row, col))
    }

    fn rank(&self) -> usize {
        dispatch!(self, m => m.rank())
    }
}

impl<T: Scalar> AnyMatrix<T> {
    pub fn kind(&self) -> &'static str {
        match self {
            AnyMatrix::General(_) => "general matrix",
            AnyMatrix::Identity(_) => "identity matrix",
            AnyMatrix::Zero(_) => "zero matrix",
            AnyMatrix::Augmented(_) => "augmented matrix",
        }
    }

    pub fn is_read_only(&self) -> bool {
        matches!(self, AnyMatrix::Identity(_) | AnyMatrix::Zero(_))
    }

    pub fn swap_rows(&self, i: usize, j: usize) -> Result<AnyMatrix<T>> {
        on_dense!(self, "swap_rows", m => m.swap_rows(i, j)?)
    }

    pub fn scale_row(&self, i: usize, k: T) -> Result<AnyMatrix<T>> {
        on_dense!(self, "scale_row", m => m.scale_row(i, k)?)
    }

    pub fn add_row_multiple(&self, i: usize, j: usize, k: T) -> Result<AnyMatrix<T>> {
        on_dense!(self, "add_row_multiple", m => m.add_row_multiple(i, j, k)?)
    }

    pub fn set_entry(&self, row: usize, col: usize, value: T) -> Result<AnyMatrix<T>> {
        on_dense!(self, "set_entry", m => {
            let mut m = m.clone();
            m.set_entry(row, col, value)?;
            m
        })
    }
}

impl<T> From<MatrixGen<T>> for AnyMatrix<T> {
    fn from(m: MatrixGen<T>) -> Self {
        AnyMatrix::General(m)
    }
}

impl<T> From<IdentityMatrix<T>> for AnyMatrix<T> {
    fn from(m: IdentityMatrix<T>) -> Self {
        AnyMatrix::Identity(m)
    }
}

impl<T> From<ZeroMatrix<T>> for AnyMatrix<T> {
    fn from(m: ZeroMatrix<T>) -> Self {
        AnyMatrix::Zero(m)
    }
}

impl<T> From<AugmentedMatrix<T>> for AnyMatrix<T> {
    fn from(m: AugmentedMatrix<T>) -> Self {
        AnyMatrix::Augmented(m)
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equation::linear_equation::LinearEquation;

    fn variants() -> Vec<AnyMatrix<f64>> {
        vec![
            MatrixGen::from_list(vec![vec![1.0, 0.0], vec![0.0, 1.0]])
                .unwrap()
                .into(),
            IdentityMatrix::new(2).into(),
            ZeroMatrix::new(2).into(),
        ]
    }

    #[test]
    fn test_uniform_reads() {
        let [general, identity, zero]: [AnyMatrix<f64>; 3] = variants().try_into().unwrap();

        assert_eq!(general.to_list(), identity.to_list());
        assert_eq!(general.rank(), 2);
        assert_eq!(identity.rank(), 2);
        assert_eq!(zero.rank(), 0);
        for m in [&general, &identity, &zero] {
            assert_eq!(m.rows(), 2);
            assert_eq!(m.iter_entries().count(), 4);
            assert!(m.entry(3, 1).is_err());
        }
        assert_eq!(identity.entry(2, 2), Ok(1.0));
        assert_eq!(identity.entry(1, 2), Ok(0.0));
    }

    #[test]
    fn test_mutation_rejected_on_closed_form() {
        let identity: AnyMatrix<f64> = IdentityMatrix::new(3).into();
        assert_eq!(
            identity.swap_rows(1, 2).unwrap_err(),
            LinalgError::Unsupported {
                operation: "swap_rows",
                kind: "identity matrix"
            }
        );
        assert!(matches!(
            identity.scale_row(1, 2.0),
            Err(LinalgError::Unsupported { .. })
        ));

        let zero: AnyMatrix<f64> = ZeroMatrix::new(3).into();
        assert!(matches!(
            zero.add_row_multiple(1, 2, 1.0),
            Err(LinalgError::Unsupported { .. })
        ));
        assert!(matches!(
            zero.set_entry(1, 1, 1.0),
            Err(LinalgError::Unsupported { .. })
        ));
    }

    #[test]
    fn test_mutation_on_dense_variants() {
        let general: AnyMatrix<f64> = MatrixGen::from_list(vec![vec![1.0, 2.0], vec![3.0, 4.0]])
            .unwrap()
            .into();
        let swapped = general.swap_rows(1, 2).unwrap();
        assert_eq!(swapped.to_list(), vec![vec![3.0, 4.0], vec![1.0, 2.0]]);
        assert_eq!(general.entry(1, 1), Ok(1.0));
        assert_eq!(general.scale_row(1, 0.0).unwrap_err(), LinalgError::InvalidScalar);
        let assigned = general.set_entry(2, 2, 9.0).unwrap();
        assert_eq!(assigned.entry(2, 2), Ok(9.0));
        assert_eq!(general.entry(2, 2), Ok(4.0));
        assert!(matches!(assigned, AnyMatrix::General(_)));

        let augmented: AnyMatrix<f64> = AugmentedMatrix::from_equations(&[
            LinearEquation::new(vec![1.0, 1.0], 3.0),
            LinearEquation::new(vec![1.0, -1.0], 1.0),
        ])
        .unwrap()
        .into();
        let updated = augmented.add_row_multiple(2, 1, -1.0).unwrap();
        assert_eq!(augmented.set_entry(1, 3, 5.0).unwrap().entry(1, 3), Ok(5.0));
        assert_eq!(updated.row(2), Ok(vec![0.0, -2.0, -2.0]));
        assert_eq!(augmented.row(2), Ok(vec![1.0, -1.0, 1.0]));
    }
}
