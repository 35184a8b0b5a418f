//! The ring of integers Z.

use num_traits::{One, Zero};
use sylvester_integers::Integer;

use crate::space::{euclidean_inner, Space};
use crate::traits::{CommutativeRing, EuclideanDomain, EuclideanOps, IntegralDomain, Ring};

/// The ring of integers. Units are ±1, the Euclidean measure is |x|.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Z(pub Integer);

impl Z {
    /// Creates a new integer.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(Integer::new(value))
    }

    /// Returns a reference to the inner Integer.
    #[must_use]
    pub fn as_inner(&self) -> &Integer {
        &self.0
    }

    /// Returns the inner Integer.
    #[must_use]
    pub fn into_inner(self) -> Integer {
        self.0
    }
}

impl Ring for Z {
    fn zero() -> Self {
        Self(Integer::zero())
    }

    fn one() -> Self {
        Self(Integer::one())
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    fn is_one(&self) -> bool {
        self.0.is_one()
    }

    fn unit_inverse(&self) -> Option<Self> {
        // ±1 are their own inverses
        (self.0.abs().is_one()).then(|| self.clone())
    }

    fn euclidean() -> Option<EuclideanOps<Self>> {
        Some(EuclideanOps::of())
    }
}

impl CommutativeRing for Z {}
impl IntegralDomain for Z {}

impl EuclideanDomain for Z {
    fn measure(&self) -> Integer {
        self.0.abs()
    }

    fn div_rem(&self, other: &Self) -> (Self, Self) {
        let (q, r) = self.0.div_rem(&other.0);
        (Self(q), Self(r))
    }

    fn normalization_unit(&self) -> Self {
        if self.0.is_negative() {
            Self::new(-1)
        } else {
            Self::one()
        }
    }

    fn gcd(&self, other: &Self) -> Self {
        Self(self.0.gcd(&other.0))
    }
}

impl Space for Z {
    fn inner_product(u: &[Self], v: &[Self]) -> Option<Self> {
        Some(euclidean_inner(u, v))
    }

    fn norm(v: &[Self]) -> Option<f64> {
        Some(euclidean_inner(v, v).0.to_f64().sqrt())
    }
}

impl std::ops::Add for Z {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl std::ops::Sub for Z {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl std::ops::Mul for Z {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl std::ops::Neg for Z {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl From<i64> for Z {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<Integer> for Z {
    fn from(value: Integer) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for Z {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_units() {
        assert!(Z::new(1).is_unit());
        assert!(Z::new(-1).is_unit());
        assert!(!Z::new(2).is_unit());
        assert!(!Z::new(0).is_unit());
        assert_eq!(Z::new(-1).unit_inverse(), Some(Z::new(-1)));
    }

    #[test]
    fn test_euclidean_domain() {
        let (q, r) = Z::new(17).div_rem(&Z::new(5));
        assert_eq!((q, r), (Z::new(3), Z::new(2)));
        assert_eq!(Z::new(-17).measure(), Integer::new(17));
        assert_eq!(Z::new(-6).gcd(&Z::new(4)), Z::new(2));
    }

    #[test]
    fn test_normalization() {
        let x = Z::new(-12);
        assert_eq!(x.clone() * x.normalization_unit(), Z::new(12));
        assert!(!Z::is_field());
    }

    #[test]
    fn test_space() {
        let v = [Z::new(3), Z::new(4)];
        assert_eq!(Z::norm(&v), Some(5.0));
        assert_eq!(Z::inner_product(&v, &[Z::new(1), Z::new(-1)]), Some(Z::new(-1)));
        assert!(!Z::has_cross_product());
    }
}
