//! # sylvester-integers
//!
//! Exact scalar arithmetic underpinning sylvester's algebraic types.
//!
//! This crate wraps `dashu` to provide:
//! - Arbitrary precision integers (`Integer`) with truncated division
//! - Arbitrary precision rationals (`Rational`) in lowest terms
//! - Residues modulo a compile-time prime (`ModInt`)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod integer;
pub mod modular;
pub mod rational;

#[cfg(test)]
mod proptests;

pub use integer::Integer;
pub use modular::ModInt;
pub use rational::Rational;
