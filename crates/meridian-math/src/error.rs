//! Error types for mathematical operations.

use thiserror::Error;

/// A specialized Result type for mathematical operations.
pub type MathResult<T> = Result<T, MathError>;

/// Errors that can occur during mathematical operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MathError {
    /// Matrix is singular (not invertible).
    #[error("Singular matrix: cannot solve")]
    SingularMatrix,

    /// Operation requires a square matrix.
    #[error("Matrix must be square, got ({rows}x{cols})")]
    NotSquare {
        /// Rows in the matrix.
        rows: usize,
        /// Columns in the matrix.
        cols: usize,
    },

    /// Matrix dimensions are incompatible.
    #[error("Incompatible matrix dimensions: ({rows1}x{cols1}) and ({rows2}x{cols2})")]
    DimensionMismatch {
        /// Rows in first matrix.
        rows1: usize,
        /// Columns in first matrix.
        cols1: usize,
        /// Rows in second matrix.
        rows2: usize,
        /// Columns in second matrix.
        cols2: usize,
    },
}

impl MathError {
    /// Creates a not-square error for a matrix of the given shape.
    #[must_use]
    pub fn not_square(rows: usize, cols: usize) -> Self {
        Self::NotSquare { rows, cols }
    }

    /// Creates a dimension mismatch error from two operand shapes.
    #[must_use]
    pub fn dimension_mismatch(lhs: (usize, usize), rhs: (usize, usize)) -> Self {
        Self::DimensionMismatch {
            rows1: lhs.0,
            cols1: lhs.1,
            rows2: rhs.0,
            cols2: rhs.1,
        }
    }

    /// Returns true for errors caused by incompatible operand shapes.
    #[must_use]
    pub fn is_shape_mismatch(&self) -> bool {
        matches!(self, Self::NotSquare { .. } | Self::DimensionMismatch { .. })
    }
}
