//! LU decomposition with partial pivoting.

use log::{debug, trace};
use nalgebra::{DMatrix, DVector};

use crate::error::{MathError, MathResult};

/// LU decomposition of a dense matrix with partial (row) pivoting.
///
/// For an m-by-n matrix A with m >= n, the decomposition is an m-by-n unit
/// lower triangular matrix L, an n-by-n upper triangular matrix U and a
/// permutation vector `piv` of length m such that `A[piv, :] = L * U`.
/// If m < n, L is m-by-m and U is m-by-n.
///
/// The decomposition always exists, even for singular matrices, so
/// construction never fails. Singularity only surfaces through
/// [`is_non_singular`](Self::is_non_singular) and [`solve`](Self::solve).
///
/// # Example
///
/// ```rust
/// use meridian_math::linear_algebra::LuDecomposition;
/// use nalgebra::DMatrix;
///
/// let a = DMatrix::from_row_slice(2, 2, &[4.0, 3.0, 6.0, 3.0]);
/// let lu = LuDecomposition::new(&a);
///
/// assert!(lu.is_non_singular());
/// assert_eq!(lu.pivot(), vec![1, 0]);
///
/// let b = DMatrix::from_row_slice(2, 1, &[1.0, 1.0]);
/// let x = lu.solve(&b).unwrap();
/// assert!((&a * &x - &b).norm() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LuDecomposition {
    rows: usize,
    cols: usize,
    /// Strict lower part holds L (unit diagonal implied), the rest holds U.
    lu: DMatrix<f64>,
    pivots: Box<[usize]>,
    pivot_sign: f64,
}

impl LuDecomposition {
    /// Decomposes a rectangular matrix.
    ///
    /// The input is copied; the decomposition never aliases caller data.
    pub fn new(matrix: &DMatrix<f64>) -> Self {
        Self::decompose(matrix.clone())
    }

    /// Runs the elimination in place over an owned buffer.
    #[allow(clippy::float_cmp)]
    pub(crate) fn decompose(mut lu: DMatrix<f64>) -> Self {
        let (m, n) = lu.shape();
        let mut pivots: Box<[usize]> = (0..m).collect();
        let mut pivot_sign = 1.0;
        let mut swaps = 0usize;

        let mut column = vec![0.0; m];

        for j in 0..n {
            for (i, value) in column.iter_mut().enumerate() {
                *value = lu[(i, j)];
            }

            // Apply previous transformations to column j.
            for i in 0..m {
                let kmax = i.min(j);
                let mut s = 0.0;
                for k in 0..kmax {
                    s += lu[(i, k)] * column[k];
                }
                column[i] -= s;
                lu[(i, j)] = column[i];
            }

            // First maximum wins on ties.
            let mut p = j;
            for i in (j + 1)..m {
                if column[i].abs() > column[p].abs() {
                    p = i;
                }
            }

            if p != j {
                lu.swap_rows(p, j);
                pivots.swap(p, j);
                pivot_sign = -pivot_sign;
                swaps += 1;
            }

            if j < m && lu[(j, j)] != 0.0 {
                let diagonal = lu[(j, j)];
                for i in (j + 1)..m {
                    lu[(i, j)] /= diagonal;
                }
            }
        }

        let decomposition = Self {
            rows: m,
            cols: n,
            lu,
            pivots,
            pivot_sign,
        };

        trace!(
            "LU decomposition of {}x{} matrix: {} row swaps, nonsingular = {}",
            m,
            n,
            swaps,
            decomposition.is_non_singular()
        );

        decomposition
    }

    /// Number of rows of the decomposed matrix.
    pub fn nrows(&self) -> usize {
        self.rows
    }

    /// Number of columns of the decomposed matrix.
    pub fn ncols(&self) -> usize {
        self.cols
    }

    /// Shape of the decomposed matrix as `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns true if the decomposed matrix is square.
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Returns true if U, and hence A, is nonsingular.
    ///
    /// Every diagonal entry of U must be exactly nonzero; no tolerance is
    /// applied. A matrix with fewer rows than columns has missing diagonal
    /// entries and is never reported nonsingular.
    #[allow(clippy::float_cmp)]
    pub fn is_non_singular(&self) -> bool {
        if self.rows < self.cols {
            return false;
        }
        (0..self.cols).all(|j| self.lu[(j, j)] != 0.0)
    }

    /// Returns the unit lower triangular factor L.
    ///
    /// L is m-by-min(m, n).
    pub fn l(&self) -> DMatrix<f64> {
        let k = self.rows.min(self.cols);
        DMatrix::from_fn(self.rows, k, |i, j| {
            if i > j {
                self.lu[(i, j)]
            } else if i == j {
                1.0
            } else {
                0.0
            }
        })
    }

    /// Returns the upper triangular factor U.
    ///
    /// U is min(m, n)-by-n.
    pub fn u(&self) -> DMatrix<f64> {
        let k = self.rows.min(self.cols);
        DMatrix::from_fn(k, self.cols, |i, j| if i <= j { self.lu[(i, j)] } else { 0.0 })
    }

    /// Returns a copy of the pivot permutation vector.
    ///
    /// Entry `i` is the row of the original matrix that ended up at row `i`.
    pub fn pivot(&self) -> Vec<usize> {
        self.pivots.to_vec()
    }

    /// Returns the pivot permutation vector as floating point values.
    pub fn pivot_as_f64(&self) -> Vec<f64> {
        self.pivots.iter().map(|&p| p as f64).collect()
    }

    /// Returns the parity of the row swaps: `1.0` for even, `-1.0` for odd.
    pub fn pivot_sign(&self) -> f64 {
        self.pivot_sign
    }

    /// Returns the m-by-m permutation matrix P with `P * A = L * U`.
    pub fn permutation(&self) -> DMatrix<f64> {
        let mut p = DMatrix::zeros(self.rows, self.rows);
        for (i, &row) in self.pivots.iter().enumerate() {
            p[(i, row)] = 1.0;
        }
        p
    }

    /// Computes the determinant of the decomposed matrix.
    ///
    /// A singular matrix yields zero; only the shape is checked.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::NotSquare`] if the matrix is not square.
    pub fn determinant(&self) -> MathResult<f64> {
        if !self.is_square() {
            return Err(MathError::not_square(self.rows, self.cols));
        }

        let mut d = self.pivot_sign;
        for j in 0..self.cols {
            d *= self.lu[(j, j)];
        }
        Ok(d)
    }

    /// Solves `A * X = B`.
    ///
    /// `B` must have as many rows as A and may have any number of columns.
    /// The result has one row per column of A.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::DimensionMismatch`] if the row counts differ and
    /// [`MathError::SingularMatrix`] if A is singular.
    pub fn solve(&self, rhs: &DMatrix<f64>) -> MathResult<DMatrix<f64>> {
        if rhs.nrows() != self.rows {
            debug!(
                "Rejecting solve: right-hand side has {} rows, decomposition has {}",
                rhs.nrows(),
                self.rows
            );
            return Err(MathError::dimension_mismatch(self.shape(), rhs.shape()));
        }
        if !self.is_non_singular() {
            debug!(
                "Rejecting solve: {}x{} decomposition is singular",
                self.rows, self.cols
            );
            return Err(MathError::SingularMatrix);
        }

        let n = self.cols;
        let nx = rhs.ncols();
        let mut x = rhs.select_rows(self.pivots.iter());

        // Solve L * Y = B[piv, :]
        for k in 0..n {
            for i in (k + 1)..n {
                let factor = self.lu[(i, k)];
                for j in 0..nx {
                    x[(i, j)] -= x[(k, j)] * factor;
                }
            }
        }

        // Solve U * X = Y
        for k in (0..n).rev() {
            let diagonal = self.lu[(k, k)];
            for j in 0..nx {
                x[(k, j)] /= diagonal;
            }
            for i in 0..k {
                let factor = self.lu[(i, k)];
                for j in 0..nx {
                    x[(i, j)] -= x[(k, j)] * factor;
                }
            }
        }

        if x.nrows() > n {
            let extra = x.nrows() - n;
            x = x.remove_rows(n, extra);
        }

        Ok(x)
    }

    /// Solves `A * x = b` for a single right-hand side vector.
    ///
    /// # Errors
    ///
    /// Same conditions as [`solve`](Self::solve).
    pub fn solve_vector(&self, rhs: &DVector<f64>) -> MathResult<DVector<f64>> {
        let b = DMatrix::from_column_slice(rhs.len(), 1, rhs.as_slice());
        let x = self.solve(&b)?;
        Ok(x.column(0).into_owned())
    }

    /// Computes the inverse of the decomposed matrix by solving `A * X = I`.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::NotSquare`] for rectangular matrices and
    /// [`MathError::SingularMatrix`] if A is singular.
    pub fn inverse(&self) -> MathResult<DMatrix<f64>> {
        if !self.is_square() {
            return Err(MathError::not_square(self.rows, self.cols));
        }
        self.solve(&DMatrix::identity(self.rows, self.rows))
    }
}

impl From<&DMatrix<f64>> for LuDecomposition {
    fn from(matrix: &DMatrix<f64>) -> Self {
        Self::new(matrix)
    }
}

impl From<DMatrix<f64>> for LuDecomposition {
    fn from(matrix: DMatrix<f64>) -> Self {
        Self::decompose(matrix)
    }
}
