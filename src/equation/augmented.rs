use crate::equation::linear_equation::LinearEquation;
use crate::equation::solution::{AffineExpression, Solution};
use crate::error::{LinalgError, Result};
use crate::matrix::echelon::{reduce, Reduction};
use crate::matrix::matrix::{Matrix, RowOperations};
use crate::matrix::matrix_gen::MatrixGen;
use crate::matrix::scalar::Scalar;
use log::debug;
use std::collections::{BTreeMap, BTreeSet};

/// `[A | B]`: a coefficient block of `unknowns` columns followed by one or
/// more constant columns.
#[derive(Debug, Clone, PartialEq)]
pub struct AugmentedMatrix<T> {
    matrix: MatrixGen<T>,
    unknowns: usize,
}

impl<T: Scalar> Matrix<T> for AugmentedMatrix<T> {
    fn rows(&self) -> usize {
        self.matrix.rows
    }

    fn cols(&self) -> usize {
        self.matrix.cols
    }

    #[inline(always)]
    fn at(&self, row: usize, col: usize) -> T {
        self.matrix.at(row, col)
    }

    fn rank(&self) -> usize {
        self.matrix.rank()
    }

    fn to_general(&self) -> MatrixGen<T> {
        self.matrix.clone()
    }
}

impl<T: Scalar> RowOperations<T> for AugmentedMatrix<T> {
    fn swap_rows_in_place(&mut self, i: usize, j: usize) -> Result<()> {
        self.matrix.swap_rows_in_place(i, j)
    }

    fn scale_row_in_place(&mut self, i: usize, k: T) -> Result<()> {
        self.matrix.scale_row_in_place(i, k)
    }

    fn add_row_multiple_in_place(&mut self, i: usize, j: usize, k: T) -> Result<()> {
        self.matrix.add_row_multiple_in_place(i, j, k)
    }

    fn set_entry(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        self.matrix.set_entry(row, col, value)
    }
}

impl<T: Scalar> AugmentedMatrix<T> {
    /// Join a coefficient block and a constant block with the same row count.
    pub fn new(coefficients: &impl Matrix<T>, constants: &impl Matrix<T>) -> Result<Self> {
        if constants.cols() == 0 {
            return Err(LinalgError::DimensionMismatch {
                expected: 1,
                found: 0,
            });
        }
        Ok(AugmentedMatrix {
            matrix: coefficients
                .to_general()
                .augment(&constants.to_general())?,
            unknowns: coefficients.cols(),
        })
    }

    /// One row per equation. All equations must share the same unknowns.
    pub fn from_equations(equations: &[LinearEquation<T>]) -> Result<Self> {
        let unknowns = equations
            .first()
            .ok_or(LinalgError::DimensionMismatch {
                expected: 1,
                found: 0,
            })?
            .unknowns();

        if let Some(eq) = equations.iter().find(|eq| eq.unknowns() != unknowns) {
            return Err(LinalgError::DimensionMismatch {
                expected: unknowns,
                found: eq.unknowns(),
            });
        }

        Ok(AugmentedMatrix {
            matrix: MatrixGen {
                rows: equations.len(),
                cols: unknowns + 1,
                cells: equations
                    .iter()
                    .flat_map(|eq| {
                        eq.coefficients()
                            .iter()
                            .cloned()
                            .chain(std::iter::once(eq.constant().clone()))
                    })
                    .collect(),
            },
            unknowns,
        })
    }

    pub fn unknowns(&self) -> usize {
        self.unknowns
    }

    pub fn constant_columns(&self) -> usize {
        self.matrix.cols - self.unknowns
    }

    pub fn coefficient_block(&self) -> MatrixGen<T> {
        self.matrix.select_columns(0..self.unknowns)
    }

    pub fn constant_block(&self) -> MatrixGen<T> {
        self.matrix.select_columns(self.unknowns..self.matrix.cols)
    }

    /// Reduced form, pivots searched in the coefficient block only.
    pub fn rref(&self) -> AugmentedMatrix<T> {
        AugmentedMatrix {
            matrix: reduce(&self.matrix, self.unknowns).matrix,
            unknowns: self.unknowns,
        }
    }

    /// Solve a system with a single constant column.
    pub fn solve(&self) -> Result<Solution<T>> {
        if self.constant_columns() != 1 {
            return Err(LinalgError::DimensionMismatch {
                expected: 1,
                found: self.constant_columns(),
            });
        }
        let reduction = reduce(&self.matrix, self.unknowns);
        Ok(self.classify(&reduction, self.unknowns))
    }

    /// One solution per constant column, sharing a single reduction.
    pub fn solve_all(&self) -> Vec<Solution<T>> {
        let reduction = reduce(&self.matrix, self.unknowns);
        (self.unknowns..self.matrix.cols)
            .map(|col| self.classify(&reduction, col))
            .collect()
    }

    fn classify(&self, reduction: &Reduction<T>, constant_col: usize) -> Solution<T> {
        let reduced = &reduction.matrix;

        let inconsistent = (0..reduced.rows).any(|r| {
            (0..self.unknowns).all(|c| reduced.at(r, c).is_zero())
                && !reduced.at(r, constant_col).is_zero()
        });
        if inconsistent {
            debug!("system is inconsistent");
            return Solution::NoSolution;
        }

        if reduction.rank() == self.unknowns {
            let mut values = vec![T::zero(); self.unknowns];
            for (row, &pivot_col) in reduction.pivot_columns.iter().enumerate() {
                values[pivot_col] = reduced.at(row, constant_col);
            }
            debug!("unique solution over {} unknowns", self.unknowns);
            return Solution::UniqueSolution(values);
        }

        let free_cols = reduction.free_columns(self.unknowns);
        let expressions = reduction
            .pivot_columns
            .iter()
            .enumerate()
            .map(|(row, &pivot_col)| {
                let coefficients = free_cols
                    .iter()
                    .map(|&free_col| (free_col + 1, -reduced.at(row, free_col)))
                    .collect();
                (
                    pivot_col + 1,
                    AffineExpression {
                        coefficients,
                        constant: reduced.at(row, constant_col),
                    },
                )
            })
            .collect::<BTreeMap<_, _>>();

        debug!(
            "infinite solutions: {} free of {} unknowns",
            free_cols.len(),
            self.unknowns
        );
        Solution::InfiniteSolutions {
            free_variables: free_cols.iter().map(|c| c + 1).collect::<BTreeSet<_>>(),
            expressions,
        }
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::matrix_special::{IdentityMatrix, ZeroMatrix};
    use approx::assert_relative_eq;

    fn system(rows: Vec<(Vec<f64>, f64)>) -> AugmentedMatrix<f64> {
        let equations: Vec<_> = rows
            .into_iter()
            .map(|(coefficients, constant)| LinearEquation::new(coefficients, constant))
            .collect();
        AugmentedMatrix::from_equations(&equations).unwrap()
    }

    #[test]
    fn test_from_equations() {
        let a = system(vec![(vec![1.0, 1.0], 3.0), (vec![1.0, -1.0], 1.0)]);
        assert_eq!((a.rows(), a.cols(), a.unknowns()), (2, 3, 2));
        assert_eq!(a.to_list(), vec![vec![1.0, 1.0, 3.0], vec![1.0, -1.0, 1.0]]);
        assert_eq!(a.coefficient_block().to_list(), vec![vec![1.0, 1.0], vec![1.0, -1.0]]);
        assert_eq!(a.constant_block().to_list(), vec![vec![3.0], vec![1.0]]);

        let mismatched = [
            LinearEquation::new(vec![1.0, 1.0], 3.0),
            LinearEquation::new(vec![1.0, -1.0, 2.0], 1.0),
        ];
        assert_eq!(
            AugmentedMatrix::from_equations(&mismatched),
            Err(LinalgError::DimensionMismatch {
                expected: 2,
                found: 3
            })
        );
        assert!(AugmentedMatrix::<f64>::from_equations(&[]).is_err());
    }

    #[test]
    fn test_unique_solution() {
        let a = system(vec![(vec![1.0, 1.0], 3.0), (vec![1.0, -1.0], 1.0)]);
        assert_eq!(a.solve(), Ok(Solution::UniqueSolution(vec![2.0, 1.0])));
        // original untouched
        assert_eq!(a.entry(2, 3), Ok(1.0));
    }

    #[test]
    fn test_infinite_solutions() {
        let a = system(vec![(vec![1.0, 1.0], 2.0), (vec![2.0, 2.0], 4.0)]);
        let expected = Solution::InfiniteSolutions {
            free_variables: BTreeSet::from([2]),
            expressions: BTreeMap::from([(
                1,
                AffineExpression {
                    coefficients: BTreeMap::from([(2, -1.0)]),
                    constant: 2.0,
                },
            )]),
        };
        assert_eq!(a.solve(), Ok(expected));
    }

    #[test]
    fn test_no_solution() {
        let a = system(vec![(vec![1.0, 1.0], 1.0), (vec![1.0, 1.0], 2.0)]);
        assert_eq!(a.solve(), Ok(Solution::NoSolution));
    }

    #[test]
    fn test_overdetermined_consistent() {
        let a = system(vec![
            (vec![1.0, 0.0], 1.0),
            (vec![0.0, 1.0], 2.0),
            (vec![1.0, 1.0], 3.0),
        ]);
        assert_eq!(a.solve(), Ok(Solution::UniqueSolution(vec![1.0, 2.0])));
    }

    #[test]
    fn test_underdetermined_with_middle_free_variable() {
        // x + 2y + z = 4, z = 1
        let a = system(vec![(vec![1.0, 2.0, 1.0], 4.0), (vec![0.0, 0.0, 1.0], 1.0)]);
        match a.solve().unwrap() {
            Solution::InfiniteSolutions {
                free_variables,
                expressions,
            } => {
                assert_eq!(free_variables, BTreeSet::from([2]));
                assert_eq!(expressions[&1].constant, 3.0);
                assert_eq!(expressions[&1].coefficients, BTreeMap::from([(2, -2.0)]));
                assert_eq!(expressions[&3].constant, 1.0);
                assert_eq!(expressions[&3].coefficients[&2], 0.0);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_three_unknowns() {
        let vars = ["x", "y", "z"];
        let equations: Vec<_> = ["2x + y - z = 8", "-3x - y + 2z = -11", "-2x + y + 2z = -3"]
            .iter()
            .map(|text| LinearEquation::<f64>::parse(text, &vars).unwrap())
            .collect();
        let a = AugmentedMatrix::from_equations(&equations).unwrap();

        match a.solve().unwrap() {
            Solution::UniqueSolution(values) => {
                assert_relative_eq!(values[0], 2.0, epsilon = 1e-12);
                assert_relative_eq!(values[1], 3.0, epsilon = 1e-12);
                assert_relative_eq!(values[2], -1.0, epsilon = 1e-12);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_multiple_constant_columns() {
        let coefficients = MatrixGen::from_list(vec![vec![1.0, 1.0], vec![1.0, 1.0]]).unwrap();
        let constants = MatrixGen::from_list(vec![vec![1.0, 2.0], vec![1.0, 3.0]]).unwrap();
        let a = AugmentedMatrix::new(&coefficients, &constants).unwrap();
        assert_eq!(a.constant_columns(), 2);
        assert!(a.solve().is_err());

        let solutions = a.solve_all();
        assert_eq!(solutions.len(), 2);
        assert!(solutions[0].is_consistent());
        assert_eq!(solutions[1], Solution::NoSolution);

        let empty = MatrixGen::<f64>::new(2, 0).unwrap();
        assert!(AugmentedMatrix::new(&coefficients, &empty).is_err());
        let short = MatrixGen::<f64>::new(1, 1).unwrap();
        assert!(AugmentedMatrix::new(&coefficients, &short).is_err());
    }

    #[test]
    fn test_new_from_closed_form_blocks() {
        let constants = MatrixGen::from_list(vec![vec![4.0], vec![-2.0], vec![7.0]]).unwrap();
        let a = AugmentedMatrix::new(&IdentityMatrix::new(3), &constants).unwrap();
        assert_eq!(a.unknowns(), 3);
        assert_eq!(a.solve(), Ok(Solution::UniqueSolution(vec![4.0, -2.0, 7.0])));

        let b = AugmentedMatrix::<f64>::new(&ZeroMatrix::new(2), &ZeroMatrix::with_shape(2, 1))
            .unwrap();
        assert!(matches!(b.solve(), Ok(Solution::InfiniteSolutions { .. })));

        let empty: ZeroMatrix<f64> = ZeroMatrix::with_shape(3, 0);
        assert!(AugmentedMatrix::new(&IdentityMatrix::new(3), &empty).is_err());
    }

    #[test]
    fn test_rref_restricted_to_coefficients() {
        let a = system(vec![(vec![1.0, 1.0], 1.0), (vec![1.0, 1.0], 2.0)]);
        let reduced = a.rref();
        assert_eq!(reduced.to_list(), vec![vec![1.0, 1.0, 1.0], vec![0.0, 0.0, 1.0]]);
        assert_eq!(reduced.unknowns(), 2);
    }

    #[test]
    fn test_row_operations_keep_equations_consistent() {
        let a = system(vec![(vec![1.0, 1.0], 3.0), (vec![1.0, -1.0], 1.0)]);
        let b = a.add_row_multiple(2, 1, -1.0).unwrap().scale_row(2, -0.5).unwrap();
        assert_eq!(b.row(2), Ok(vec![0.0, 1.0, 1.0]));
        assert_eq!(b.solve(), a.solve());
    }
}
