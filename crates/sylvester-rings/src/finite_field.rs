//! Prime fields Z_p.

use num_traits::Zero;
use sylvester_integers::{Integer, ModInt};

use crate::space::{euclidean_inner, Space};
use crate::traits::{CommutativeRing, EuclideanDomain, EuclideanOps, Field, IntegralDomain, Ring};

/// The field of integers modulo a prime `P`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct FiniteField<const P: u64>(pub ModInt<P>);

impl<const P: u64> FiniteField<P> {
    /// Reduces `value` modulo `P`.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(ModInt::new(value))
    }

    /// Reduces a signed value modulo `P`.
    #[must_use]
    pub fn from_signed(value: i64) -> Self {
        Self(ModInt::from_signed(value))
    }

    /// Returns the canonical representative in `0..P`.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0.value()
    }

    /// Returns the characteristic `P`.
    #[must_use]
    pub const fn characteristic() -> u64 {
        P
    }
}

impl<const P: u64> Ring for FiniteField<P> {
    fn zero() -> Self {
        Self(ModInt::new(0))
    }

    fn one() -> Self {
        Self(ModInt::new(1))
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    fn is_one(&self) -> bool {
        *self == Self::one()
    }

    fn unit_inverse(&self) -> Option<Self> {
        self.0.inv().map(Self)
    }

    fn is_field() -> bool {
        true
    }

    fn euclidean() -> Option<EuclideanOps<Self>> {
        Some(EuclideanOps::of())
    }
}

impl<const P: u64> CommutativeRing for FiniteField<P> {}
impl<const P: u64> IntegralDomain for FiniteField<P> {}

impl<const P: u64> EuclideanDomain for FiniteField<P> {
    fn measure(&self) -> Integer {
        Integer::zero()
    }

    fn div_rem(&self, other: &Self) -> (Self, Self) {
        (Self(self.0 / other.0), Self::zero())
    }

    fn normalization_unit(&self) -> Self {
        self.unit_inverse().unwrap_or_else(Self::one)
    }
}

impl<const P: u64> Field for FiniteField<P> {}

/// Bilinear form only: a norm would need an ordering the field lacks.
impl<const P: u64> Space for FiniteField<P> {
    fn inner_product(u: &[Self], v: &[Self]) -> Option<Self> {
        Some(euclidean_inner(u, v))
    }
}

impl<const P: u64> std::ops::Add for FiniteField<P> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl<const P: u64> std::ops::Sub for FiniteField<P> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl<const P: u64> std::ops::Mul for FiniteField<P> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl<const P: u64> std::ops::Neg for FiniteField<P> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl<const P: u64> From<i64> for FiniteField<P> {
    fn from(value: i64) -> Self {
        Self::from_signed(value)
    }
}

impl<const P: u64> std::fmt::Display for FiniteField<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// GF(2), the field with two elements.
pub type GF2 = FiniteField<2>;

#[cfg(test)]
mod tests {
    use super::*;

    type F7 = FiniteField<7>;

    #[test]
    fn test_field_ops() {
        let a = F7::new(5);
        let b = F7::new(4);
        assert_eq!((a + b).value(), 2);
        assert_eq!((a - b).value(), 1);
        assert_eq!((a * b).value(), 6);
        assert_eq!(a.field_div(&b) * b, a);
    }

    #[test]
    fn test_units_are_nonzero() {
        assert!(F7::new(3).is_unit());
        assert!(!F7::new(0).is_unit());
        assert!(!F7::new(14).is_unit());
        assert_eq!(F7::new(3).unit_inverse(), Some(F7::new(5)));
    }

    #[test]
    fn test_gf2_characteristic() {
        let one = GF2::one();
        assert!((one + one).is_zero());
        assert_eq!(GF2::characteristic(), 2);
        assert_eq!(GF2::from(-1i64), one);
    }
}
