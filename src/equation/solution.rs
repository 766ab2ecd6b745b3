use crate::error::{Axis, LinalgError, Result};
use crate::matrix::scalar::Scalar;
use std::collections::{BTreeMap, BTreeSet};

/// Value of a basic variable in terms of the free ones:
/// `constant + sum(coefficient * free_variable)`.
#[derive(Debug, Clone, PartialEq)]
pub struct AffineExpression<T> {
    /// Keyed by the 1-indexed free variable.
    pub coefficients: BTreeMap<usize, T>,
    pub constant: T,
}

impl<T: Scalar> AffineExpression<T> {
    /// Substitute values for every free variable.
    pub fn evaluate(&self, free_values: &BTreeMap<usize, T>) -> Result<T> {
        self.coefficients
            .iter()
            .try_fold(self.constant.clone(), |acc, (variable, coefficient)| {
                let value = free_values
                    .get(variable)
                    .ok_or(LinalgError::DimensionMismatch {
                        expected: self.coefficients.len(),
                        found: free_values.len(),
                    })?;
                Ok(acc + coefficient.clone() * value.clone())
            })
    }
}

/// Outcome of solving one linear system. Variable indices are 1-indexed.
#[derive(Debug, Clone, PartialEq)]
pub enum Solution<T> {
    NoSolution,
    UniqueSolution(Vec<T>),
    InfiniteSolutions {
        free_variables: BTreeSet<usize>,
        expressions: BTreeMap<usize, AffineExpression<T>>,
    },
}

impl<T: Scalar> Solution<T> {
    pub fn is_consistent(&self) -> bool {
        !matches!(self, Solution::NoSolution)
    }

    /// Full assignment for the given free variable values. A unique solution
    /// ignores `free_values`.
    pub fn assignment(&self, free_values: &BTreeMap<usize, T>) -> Result<Option<Vec<T>>> {
        match self {
            Solution::NoSolution => Ok(None),
            Solution::UniqueSolution(values) => Ok(Some(values.clone())),
            Solution::InfiniteSolutions {
                free_variables,
                expressions,
            } => {
                // indices must cover 1..=unknowns exactly once
                let unknowns = free_variables
                    .iter()
                    .chain(expressions.keys())
                    .copied()
                    .max()
                    .unwrap_or(0);
                if free_variables.contains(&0) || expressions.contains_key(&0) {
                    return Err(LinalgError::IndexOutOfRange {
                        axis: Axis::Column,
                        index: 0,
                        bound: unknowns,
                    });
                }
                let listed = free_variables.len() + expressions.len();
                let covered = free_variables
                    .iter()
                    .chain(expressions.keys())
                    .collect::<BTreeSet<_>>()
                    .len();
                if covered != listed || covered != unknowns {
                    return Err(LinalgError::DimensionMismatch {
                        expected: unknowns,
                        found: covered,
                    });
                }

                let mut values = vec![T::zero(); unknowns];
                for &variable in free_variables {
                    values[variable - 1] = free_values
                        .get(&variable)
                        .cloned()
                        .ok_or(LinalgError::DimensionMismatch {
                            expected: free_variables.len(),
                            found: free_values.len(),
                        })?;
                }
                for (&variable, expression) in expressions {
                    values[variable - 1] = expression.evaluate(free_values)?;
                }
                Ok(Some(values))
            }
        }
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
