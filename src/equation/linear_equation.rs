use crate::error::{LinalgError, Result};
use crate::matrix::scalar::Scalar;
use crate::vector::linear_combination;
use itertools::Itertools;
use std::fmt;
use std::str::FromStr;

/// `c1*x1 + c2*x2 + ... + cn*xn = k`
#[derive(Debug, Clone, PartialEq)]
pub struct LinearEquation<T> {
    coefficients: Vec<T>,
    constant: T,
}

impl<T: Scalar> LinearEquation<T> {
    pub fn new(coefficients: Vec<T>, constant: T) -> Self {
        LinearEquation {
            coefficients,
            constant,
        }
    }

    pub fn coefficients(&self) -> &[T] {
        &self.coefficients
    }

    pub fn constant(&self) -> &T {
        &self.constant
    }

    pub fn unknowns(&self) -> usize {
        self.coefficients.len()
    }

    pub fn is_satisfied_by(&self, values: &[T]) -> Result<bool> {
        Ok(linear_combination(&self.coefficients, values)? == self.constant)
    }
}

impl<T: Scalar + FromStr> LinearEquation<T> {
    /// Parse text such as `2x + 3.5*y - z = 4`.
    ///
    /// `variables` fixes the order of the unknowns. Terms may sit on either
    /// side; a term without a number has coefficient 1, a term without a
    /// variable is a constant.
    pub fn parse(text: &str, variables: &[&str]) -> Result<Self> {
        let (lhs, rhs): (&str, &str) = text
            .split('=')
            .collect_tuple()
            .ok_or_else(|| LinalgError::Parse(format!("expected exactly one '=' in {:?}", text)))?;

        let mut coefficients = vec![T::zero(); variables.len()];
        let mut constant = T::zero();

        for (side, negate) in [(lhs, false), (rhs, true)] {
            for (variable, value) in parse_side::<T>(side, variables)? {
                let value = if negate { -value } else { value };
                match variable {
                    Some(idx) => coefficients[idx] = coefficients[idx].clone() + value,
                    None => constant = constant - value,
                }
            }
        }

        Ok(LinearEquation {
            coefficients,
            constant,
        })
    }
}

// Signed terms of one side, `None` marking a constant.
fn parse_side<T: Scalar + FromStr>(
    side: &str,
    variables: &[&str],
) -> Result<Vec<(Option<usize>, T)>> {
    let compact: String = side.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() {
        return Err(LinalgError::Parse("empty side".into()));
    }

    let mut terms = vec![];
    let mut current = String::new();
    for c in compact.chars() {
        if (c == '+' || c == '-') && !current.is_empty() {
            terms.push(std::mem::take(&mut current));
        }
        current.push(c);
    }
    terms.push(current);

    terms
        .iter()
        .map(|term| parse_term(term, variables))
        .collect()
}

fn parse_term<T: Scalar + FromStr>(term: &str, variables: &[&str]) -> Result<(Option<usize>, T)> {
    let (negative, body) = match term.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, term.strip_prefix('+').unwrap_or(term)),
    };
    if body.is_empty() {
        return Err(LinalgError::Parse(format!("dangling sign in {:?}", term)));
    }

    let (number, name) = match body.split_once('*') {
        Some((number, name)) => {
            if number.is_empty() || name.is_empty() {
                return Err(LinalgError::Parse(format!("incomplete product in {:?}", term)));
            }
            (number, name)
        }
        None => {
            let split = body
                .find(|c: char| !(c.is_ascii_digit() || c == '.'))
                .unwrap_or(body.len());
            body.split_at(split)
        }
    };

    let value = if number.is_empty() {
        T::one()
    } else {
        number
            .parse::<T>()
            .map_err(|_| LinalgError::Parse(format!("invalid number {:?}", number)))?
    };
    let value = if negative { -value } else { value };

    if name.is_empty() {
        return Ok((None, value));
    }
    let idx = variables
        .iter()
        .position(|v| *v == name)
        .ok_or_else(|| LinalgError::Parse(format!("unknown variable {:?}", name)))?;
    Ok((Some(idx), value))
}

impl<T: Scalar> fmt::Display for LinearEquation<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.coefficients.is_empty() {
            return write!(f, "0 = {}", self.constant);
        }
        let lhs = self
            .coefficients
            .iter()
            .enumerate()
            .map(|(i, c)| format!("{}*x{}", c, i + 1))
            .join(" + ");
        write!(f, "{} = {}", lhs, self.constant)
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
