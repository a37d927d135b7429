//! # Meridian Math
//!
//! Numerical linear algebra for the Meridian financial analytics library.
//!
//! This crate provides:
//!
//! - **LU Decomposition**: Dense factorization with partial pivoting
//! - **Linear Systems**: Multi right-hand-side solves, determinants, inverses
//! - **Interop**: `nalgebra` matrices natively, `ndarray` arrays via adapters
//!
//! ## Design Philosophy
//!
//! - **Decompose Once**: Factor a matrix once, solve many right-hand sides
//! - **Reproducible**: Deterministic pivot choices, no hidden tolerances
//! - **Explicit Failure**: Singular systems are reported, never solved into NaN
//!
//! ## Example
//!
//! ```rust
//! use meridian_math::prelude::*;
//! use nalgebra::DMatrix;
//!
//! let a = DMatrix::from_row_slice(3, 3, &[2.0, 1.0, 1.0, 4.0, 3.0, 3.0, 8.0, 7.0, 9.0]);
//! let lu = LuDecomposition::new(&a);
//!
//! assert!((lu.determinant().unwrap() - 4.0).abs() < 1e-12);
//! assert!(matches!(
//!     lu.solve(&DMatrix::zeros(2, 1)),
//!     Err(MathError::DimensionMismatch { .. })
//! ));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod linear_algebra;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::linear_algebra::{determinant, inverse, solve_linear_system, LuDecomposition};
}

pub use error::{MathError, MathResult};
