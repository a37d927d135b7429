//! Linear algebra utilities.
//!
//! This module provides the dense LU decomposition used by curve
//! bootstrapping and calibration, plus one-shot helpers built on it.
//!
//! Decompose once with [`LuDecomposition::new`] and call
//! [`LuDecomposition::solve`] for as many right-hand sides as needed. The
//! free functions below decompose on every call.

mod lu;
mod ndarray_interop;

pub use lu::LuDecomposition;

use crate::error::{MathError, MathResult};
use nalgebra::{DMatrix, DVector};

/// Solves a square linear system Ax = b using LU decomposition.
///
/// # Errors
///
/// Returns [`MathError::NotSquare`] if `a` is not square,
/// [`MathError::DimensionMismatch`] if `b` has the wrong length and
/// [`MathError::SingularMatrix`] if `a` is singular.
pub fn solve_linear_system(a: &DMatrix<f64>, b: &DVector<f64>) -> MathResult<DVector<f64>> {
    let n = a.nrows();
    if n != a.ncols() {
        return Err(MathError::not_square(n, a.ncols()));
    }
    if n != b.len() {
        return Err(MathError::dimension_mismatch(a.shape(), (b.len(), 1)));
    }

    LuDecomposition::new(a).solve_vector(b)
}

/// Computes the determinant of a square matrix.
pub fn determinant(a: &DMatrix<f64>) -> MathResult<f64> {
    if !a.is_square() {
        return Err(MathError::not_square(a.nrows(), a.ncols()));
    }
    LuDecomposition::new(a).determinant()
}

/// Computes the inverse of a square, nonsingular matrix.
pub fn inverse(a: &DMatrix<f64>) -> MathResult<DMatrix<f64>> {
    if !a.is_square() {
        return Err(MathError::not_square(a.nrows(), a.ncols()));
    }
    LuDecomposition::new(a).inverse()
}
