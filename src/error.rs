use std::fmt;
use thiserror::Error;

/// Which side of a matrix an index refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Column,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Row => write!(f, "row"),
            Axis::Column => write!(f, "column"),
        }
    }
}

/// Errors raised by matrix and linear system operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LinalgError {
    /// A 1-indexed position falls outside `1..=bound`.
    #[error("{axis} index {index} out of range 1..={bound}")]
    IndexOutOfRange {
        axis: Axis,
        index: usize,
        bound: usize,
    },

    /// Operand lengths or arities do not agree.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    /// A row was scaled by zero.
    #[error("row scaling factor must be non-zero")]
    InvalidScalar,

    /// Structural mutation requested on a closed-form matrix.
    #[error("{operation} is not supported on {kind}")]
    Unsupported {
        operation: &'static str,
        kind: &'static str,
    },

    #[error("matrix is singular")]
    Singular,

    #[error("invalid linear equation: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, LinalgError>;

pub(crate) fn check_index(axis: Axis, index: usize, bound: usize) -> Result<()> {
    if index == 0 || index > bound {
        return Err(LinalgError::IndexOutOfRange { axis, index, bound });
    }
    Ok(())
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
