use crate::equation::augmented::AugmentedMatrix;
use crate::equation::linear_equation::LinearEquation;
use crate::equation::solution::Solution;
use crate::error::LinalgError;
use crate::matrix::matrix::Matrix;
use crate::matrix::matrix_gen::MatrixGen;
use pyo3::exceptions::{PyIndexError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyType;
use std::collections::BTreeMap;

impl From<LinalgError> for PyErr {
    fn from(error: LinalgError) -> PyErr {
        match error {
            LinalgError::IndexOutOfRange { .. } => PyIndexError::new_err(error.to_string()),
            _ => PyValueError::new_err(error.to_string()),
        }
    }
}

#[derive(Debug, Clone)]
#[pyclass(frozen, name = "Matrix")]
pub struct PyMatrix {
    inner: MatrixGen<f64>,
}

#[pymethods]
impl PyMatrix {
    #[classmethod]
    pub fn from_list(_cls: &Bound<PyType>, lines: Vec<Vec<f64>>) -> PyResult<Self> {
        Ok(PyMatrix {
            inner: MatrixGen::from_list(lines)?,
        })
    }

    #[classmethod]
    pub fn identity(_cls: &Bound<PyType>, n: usize) -> Self {
        PyMatrix {
            inner: MatrixGen::identity(n),
        }
    }

    pub fn to_list(&self) -> Vec<Vec<f64>> {
        self.inner.to_list()
    }

    #[getter]
    pub fn rows(&self) -> usize {
        self.inner.rows
    }

    #[getter]
    pub fn cols(&self) -> usize {
        self.inner.cols
    }

    #[getter]
    #[allow(non_snake_case)]
    pub fn T(&self) -> PyMatrix {
        PyMatrix {
            inner: self.inner.transpose(),
        }
    }

    pub fn entry(&self, row: usize, col: usize) -> PyResult<f64> {
        Ok(self.inner.entry(row, col)?)
    }

    pub fn rank(&self) -> usize {
        self.inner.rank()
    }

    pub fn rref(&self) -> PyMatrix {
        PyMatrix {
            inner: self.inner.rref(),
        }
    }

    pub fn determinant(&self) -> PyResult<f64> {
        Ok(self.inner.determinant()?)
    }

    pub fn inverse(&self) -> PyResult<PyMatrix> {
        Ok(PyMatrix {
            inner: self.inner.inverse()?,
        })
    }

    pub fn __add__(&self, rhs: &PyMatrix) -> PyResult<PyMatrix> {
        Ok(PyMatrix {
            inner: (&self.inner + &rhs.inner)?,
        })
    }

    pub fn __mul__(&self, rhs: &PyMatrix) -> PyResult<PyMatrix> {
        Ok(PyMatrix {
            inner: (&self.inner * &rhs.inner)?,
        })
    }

    pub fn __repr__(&self) -> String {
        self.inner.to_string()
    }
}

#[pyclass(frozen, name = "Solution")]
pub struct PySolution {
    /// "none", "unique" or "infinite"
    #[pyo3(get)]
    kind: String,
    #[pyo3(get)]
    values: Option<Vec<f64>>,
    #[pyo3(get)]
    free_variables: Vec<usize>,
    /// basic variable -> (coefficient per free variable, constant)
    #[pyo3(get)]
    expressions: BTreeMap<usize, (BTreeMap<usize, f64>, f64)>,
}

impl From<Solution<f64>> for PySolution {
    fn from(solution: Solution<f64>) -> Self {
        match solution {
            Solution::NoSolution => PySolution {
                kind: "none".into(),
                values: None,
                free_variables: vec![],
                expressions: BTreeMap::new(),
            },
            Solution::UniqueSolution(values) => PySolution {
                kind: "unique".into(),
                values: Some(values),
                free_variables: vec![],
                expressions: BTreeMap::new(),
            },
            Solution::InfiniteSolutions {
                free_variables,
                expressions,
            } => PySolution {
                kind: "infinite".into(),
                values: None,
                free_variables: free_variables.into_iter().collect(),
                expressions: expressions
                    .into_iter()
                    .map(|(v, e)| (v, (e.coefficients, e.constant)))
                    .collect(),
            },
        }
    }
}

/// Solve `coefficients * x = constants`.
#[pyfunction]
pub fn solve_system(coefficients: Vec<Vec<f64>>, constants: Vec<f64>) -> PyResult<PySolution> {
    if coefficients.len() != constants.len() {
        return Err(LinalgError::DimensionMismatch {
            expected: coefficients.len(),
            found: constants.len(),
        }
        .into());
    }

    let equations: Vec<_> = coefficients
        .into_iter()
        .zip(constants)
        .map(|(c, k)| LinearEquation::new(c, k))
        .collect();
    Ok(AugmentedMatrix::from_equations(&equations)?.solve()?.into())
}

/// Solve textual equations such as `["x + y = 3", "x - y = 1"]`.
#[pyfunction]
pub fn solve_equations(equations: Vec<String>, variables: Vec<String>) -> PyResult<PySolution> {
    let names: Vec<&str> = variables.iter().map(String::as_str).collect();
    let equations = equations
        .iter()
        .map(|text| LinearEquation::<f64>::parse(text, &names))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(AugmentedMatrix::from_equations(&equations)?.solve()?.into())
}

/// A Python module implemented in Rust.
#[pymodule]
fn rust_linalg(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyMatrix>()?;
    m.add_class::<PySolution>()?;
    m.add_function(wrap_pyfunction!(solve_system, m)?)?;
    m.add_function(wrap_pyfunction!(solve_equations, m)?)?;
    Ok(())
}
