//! Adapters for callers holding `ndarray` arrays.

use nalgebra::DMatrix;
use ndarray::{Array2, ArrayView2};

use super::LuDecomposition;
use crate::error::MathResult;

fn to_dmatrix(array: &ArrayView2<'_, f64>) -> DMatrix<f64> {
    let (rows, cols) = array.dim();
    DMatrix::from_fn(rows, cols, |i, j| array[[i, j]])
}

fn to_array(matrix: &DMatrix<f64>) -> Array2<f64> {
    Array2::from_shape_fn(matrix.shape(), |(i, j)| matrix[(i, j)])
}

impl LuDecomposition {
    /// Decomposes a two-dimensional `ndarray` array.
    pub fn from_array(array: &ArrayView2<'_, f64>) -> Self {
        Self::decompose(to_dmatrix(array))
    }

    /// Solves `A * X = B` for an `ndarray` right-hand side.
    ///
    /// # Errors
    ///
    /// Same conditions as [`solve`](Self::solve).
    pub fn solve_array(&self, rhs: &ArrayView2<'_, f64>) -> MathResult<Array2<f64>> {
        let x = self.solve(&to_dmatrix(rhs))?;
        Ok(to_array(&x))
    }
}
