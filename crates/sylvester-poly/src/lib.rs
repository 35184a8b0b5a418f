//! # sylvester-poly
//!
//! Dense univariate polynomials for sylvester.
//!
//! Polynomials play two roles in matrix decompositions:
//! - as scalars, filling the characteristic matrix `xI - A` whose Smith
//!   Normal Form yields minimal polynomials and invariant factors
//! - as characteristic polynomials whose complex roots are eigenvalues
//!
//! This crate provides `DensePoly`, Euclidean division and GCD over a
//! field, square-free parts, and iterative complex root finders.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod algorithms;
pub mod dense;

#[cfg(test)]
mod proptests;

pub use algorithms::gcd::{make_monic, poly_div_rem, poly_gcd, poly_lcm};
pub use algorithms::roots::{durand_kerner, find_roots, laguerre, RootFinderConfig};
pub use algorithms::squarefree::square_free_part;
pub use dense::DensePoly;
