//! Double precision reals as an approximate field.

use std::hash::{Hash, Hasher};

use sylvester_integers::Integer;

use crate::space::{euclidean_inner, Space};
use crate::traits::{CommutativeRing, EuclideanDomain, EuclideanOps, Field, IntegralDomain, Ring};

/// A real number stored as `f64`.
///
/// Equality is exact (with `-0.0 == 0.0`), which keeps hashing consistent
/// with `Eq`. Elimination uses [`Ring::is_approx_zero`] instead, so entries
/// within [`R64::EPSILON`] of zero are never chosen as pivots. NaN values
/// are not supported.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct R64(pub f64);

impl R64 {
    /// Absolute tolerance for approximate comparisons.
    pub const EPSILON: f64 = 1e-10;

    /// Wraps a float.
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Returns the wrapped float.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Absolute value.
    #[must_use]
    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }

    /// Square root.
    #[must_use]
    pub fn sqrt(self) -> Self {
        Self(self.0.sqrt())
    }
}

impl Eq for R64 {}

impl Hash for R64 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // -0.0 and 0.0 compare equal
        let bits = if self.0 == 0.0 { 0 } else { self.0.to_bits() };
        bits.hash(state);
    }
}

impl Ring for R64 {
    fn zero() -> Self {
        Self(0.0)
    }

    fn one() -> Self {
        Self(1.0)
    }

    fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    #[allow(clippy::float_cmp)]
    fn is_one(&self) -> bool {
        self.0 == 1.0
    }

    fn is_approx_zero(&self) -> bool {
        self.0.abs() < Self::EPSILON
    }

    fn approx_eq(&self, other: &Self) -> bool {
        (self.0 - other.0).abs() < Self::EPSILON
    }

    fn unit_inverse(&self) -> Option<Self> {
        (!self.is_approx_zero()).then(|| Self(self.0.recip()))
    }

    fn is_unit(&self) -> bool {
        !self.is_approx_zero()
    }

    fn is_field() -> bool {
        true
    }

    fn euclidean() -> Option<EuclideanOps<Self>> {
        Some(EuclideanOps::of())
    }

    #[allow(clippy::cast_precision_loss)]
    fn mul_by_scalar(&self, n: i64) -> Self {
        Self(self.0 * n as f64)
    }

    fn pow(&self, n: u32) -> Self {
        Self(self.0.powi(i32::try_from(n).unwrap_or(i32::MAX)))
    }
}

impl CommutativeRing for R64 {}
impl IntegralDomain for R64 {}

impl EuclideanDomain for R64 {
    fn measure(&self) -> Integer {
        Integer::new(0)
    }

    fn div_rem(&self, other: &Self) -> (Self, Self) {
        (Self(self.0 / other.0), Self(0.0))
    }

    fn normalization_unit(&self) -> Self {
        self.unit_inverse().unwrap_or(Self(1.0))
    }
}

impl Field for R64 {}

impl Space for R64 {
    fn inner_product(u: &[Self], v: &[Self]) -> Option<Self> {
        Some(euclidean_inner(u, v))
    }

    fn norm(v: &[Self]) -> Option<f64> {
        Some(euclidean_inner(v, v).0.sqrt())
    }

    fn has_cross_product() -> bool {
        true
    }
}

impl std::ops::Add for R64 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl std::ops::Sub for R64 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl std::ops::Mul for R64 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl std::ops::Neg for R64 {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl From<f64> for R64 {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl From<i64> for R64 {
    #[allow(clippy::cast_precision_loss)]
    fn from(value: i64) -> Self {
        Self(value as f64)
    }
}

impl From<crate::rationals::Q> for R64 {
    fn from(value: crate::rationals::Q) -> Self {
        Self(value.to_f64())
    }
}

impl std::fmt::Display for R64 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
