use crate::error::{LinalgError, Result};
use crate::matrix::scalar::Scalar;
use std::iter::zip;

/// Sum of the pairwise products `p[i] * q[i]`.
pub fn linear_combination<T: Scalar>(p: &[T], q: &[T]) -> Result<T> {
    if p.len() != q.len() {
        return Err(LinalgError::DimensionMismatch {
            expected: p.len(),
            found: q.len(),
        });
    }
    Ok(zip(p, q).map(|(a, b)| a.clone() * b.clone()).sum())
}

// Rows of a flat buffer are updated through these, `target` and `source`
// have the same length by construction.
pub(crate) fn scale_into<T: Scalar>(target: &mut [T], k: &T) {
    target.iter_mut().for_each(|a| *a = a.clone() * k.clone());
}

pub(crate) fn divide_into<T: Scalar>(target: &mut [T], k: &T) {
    target.iter_mut().for_each(|a| *a = a.clone() / k.clone());
}

pub(crate) fn add_scaled_into<T: Scalar>(target: &mut [T], source: &[T], k: &T) {
    zip(target.iter_mut(), source)
        .for_each(|(a, b)| *a = a.clone() + b.clone() * k.clone());
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
