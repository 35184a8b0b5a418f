//! # Sylvester
//!
//! Matrix decompositions over rings, fields and Euclidean domains.
//!
//! One dense matrix type works over every scalar structure the workspace
//! provides. What a decomposition can do is decided by the scalar type's
//! capabilities: units drive pivoting, a Euclidean structure unlocks the
//! Smith Normal Form, and an inner product unlocks norms and projections.
//!
//! ## Crates
//!
//! - `sylvester-integers`: arbitrary precision integers and rationals
//! - `sylvester-rings`: the algebraic structure traits and concrete scalars
//! - `sylvester-poly`: dense univariate polynomials and root finding
//! - `sylvester-linalg`: matrices and their decompositions
//!
//! ## Quick Start
//!
//! ```rust
//! use sylvester::prelude::*;
//!
//! let a = DenseMatrix::from_rows(vec![
//!     vec![Z::new(2), Z::new(4)],
//!     vec![Z::new(6), Z::new(8)],
//! ])
//! .unwrap();
//! let snf = a.smith_normal_form().unwrap();
//! assert_eq!(snf.invariant_factors, vec![Z::new(2), Z::new(4)]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use sylvester_integers as integers;
pub use sylvester_linalg as linalg;
pub use sylvester_poly as poly;
pub use sylvester_rings as rings;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use sylvester_integers::{Integer, Rational};
    pub use sylvester_linalg::{
        DenseMatrix, Eigendecomposition, JordanForm, LinalgError, RationalCanonicalForm,
        ReduceOptions, SmithNormalForm,
    };
    pub use sylvester_poly::DensePoly;
    pub use sylvester_rings::{Field, FiniteField, Ring, Space, C64, Q, R64, Z};
}
