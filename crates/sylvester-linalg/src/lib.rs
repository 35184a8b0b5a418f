//! # sylvester-linalg
//!
//! Matrix decompositions over abstract algebraic structures.
//!
//! This crate provides:
//! - Dense matrices over any `Ring`, with block constructors and arithmetic
//! - Row reduction with recorded elementary operations
//! - Determinant, rank, inverse, null space, linear solve and LUP
//! - Smith Normal Form over Euclidean domains
//! - Characteristic and minimal polynomials, eigenvalues, Jordan and
//!   rational canonical forms
//!
//! ## Pivot Selection
//!
//! Reduction needs only the ring's notion of a unit:
//! - Fields: every nonzero entry is a pivot
//! - Euclidean rings without a unit in the column: LCM row scaling (echelon
//!   form only)
//! - Anything else: [`LinalgError::NoPivotFound`]

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod dense_matrix;
pub mod error;
pub mod operation;
pub mod reduce;

mod derived;
mod smith_normal_form;
mod spectral;
mod vector;

pub use dense_matrix::DenseMatrix;
pub use derived::{LinearSolution, LupDecomposition};
pub use error::{LinalgError, Result};
pub use operation::{ElementaryOp, OperationLog};
pub use reduce::{ReduceMode, ReduceOptions, Reduction};
pub use smith_normal_form::{is_smith_normal_form, smith_normal_form, SmithNormalForm};
pub use spectral::{Eigendecomposition, JordanForm, RationalCanonicalForm};
