//! # sylvester-rings
//!
//! Algebraic capabilities of matrix entries.
//!
//! This crate provides:
//! - Abstract traits: `Ring`, `EuclideanDomain`, `Field`, `Space`
//! - Exact scalars: Z, Q, Z_p
//! - Approximate scalars: `R64`, `C64`, compared within a fixed epsilon
//!
//! ## Trait Hierarchy
//!
//! ```text
//! Ring ── Space
//!  └── CommutativeRing
//!       └── IntegralDomain
//!            └── EuclideanDomain
//!                 └── Field
//! ```
//!
//! Generic algorithms bounded by `Ring` alone discover Euclidean structure
//! at run time through [`Ring::euclidean`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod complex;
pub mod finite_field;
pub mod integers;
pub mod rationals;
pub mod real;
pub mod space;
pub mod traits;

pub use complex::C64;
pub use finite_field::FiniteField;
pub use integers::Z;
pub use rationals::Q;
pub use real::R64;
pub use space::Space;
pub use traits::{CommutativeRing, EuclideanDomain, EuclideanOps, Field, IntegralDomain, Ring};
