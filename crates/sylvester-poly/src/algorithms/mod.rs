//! Polynomial algorithms.
//!
//! - Division with remainder and monic GCD
//! - Square-free part
//! - Laguerre and Durand–Kerner root finding

pub mod gcd;
pub mod roots;
pub mod squarefree;
