pub mod error;

pub mod matrix {
    pub mod echelon;
    pub mod matrix;
    pub mod matrix_any;
    pub mod matrix_gen;
    pub mod matrix_special;
    pub mod scalar;
}
pub mod equation {
    pub mod augmented;
    pub mod linear_equation;
    pub mod solution;
}

pub mod vector;

#[cfg(feature = "python")]
pub mod python;

pub use equation::augmented::AugmentedMatrix;
pub use equation::linear_equation::LinearEquation;
pub use equation::solution::{AffineExpression, Solution};
pub use error::{Axis, LinalgError, Result};
pub use matrix::matrix::{Matrix, RowOperations};
pub use matrix::matrix_any::AnyMatrix;
pub use matrix::matrix_gen::MatrixGen;
pub use matrix::matrix_special::{IdentityMatrix, ZeroMatrix};
pub use matrix::scalar::Scalar;
pub use vector::linear_combination;
