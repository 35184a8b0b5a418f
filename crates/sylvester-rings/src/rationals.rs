//! The field of rational numbers Q.

use num_traits::{One, Zero};
use sylvester_integers::{Integer, Rational};

use crate::space::{euclidean_inner, Space};
use crate::traits::{CommutativeRing, EuclideanDomain, EuclideanOps, Field, IntegralDomain, Ring};

/// The field of rational numbers.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Q(pub Rational);

impl Q {
    /// Creates `num / den`.
    ///
    /// # Panics
    ///
    /// Panics if `den` is zero.
    #[must_use]
    pub fn new(num: i64, den: i64) -> Self {
        Self(Rational::from_i64(num, den))
    }

    /// Embeds a machine integer.
    #[must_use]
    pub fn from_integer(n: i64) -> Self {
        Self(Rational::from(n))
    }

    /// Nearest f64 approximation.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        self.0.to_f64()
    }

    /// Returns a reference to the inner Rational.
    #[must_use]
    pub fn as_inner(&self) -> &Rational {
        &self.0
    }
}

impl Ring for Q {
    fn zero() -> Self {
        Self(Rational::zero())
    }

    fn one() -> Self {
        Self(Rational::one())
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    fn is_one(&self) -> bool {
        self.0.is_one()
    }

    fn unit_inverse(&self) -> Option<Self> {
        self.0.checked_recip().map(Self)
    }

    fn is_unit(&self) -> bool {
        !self.0.is_zero()
    }

    fn is_field() -> bool {
        true
    }

    fn euclidean() -> Option<EuclideanOps<Self>> {
        Some(EuclideanOps::of())
    }
}

impl CommutativeRing for Q {}
impl IntegralDomain for Q {}

impl EuclideanDomain for Q {
    fn measure(&self) -> Integer {
        Integer::zero()
    }

    fn div_rem(&self, other: &Self) -> (Self, Self) {
        (Self(self.0.clone() / other.0.clone()), Self::zero())
    }

    fn normalization_unit(&self) -> Self {
        self.unit_inverse().unwrap_or_else(Self::one)
    }
}

impl Field for Q {}

impl Space for Q {
    fn inner_product(u: &[Self], v: &[Self]) -> Option<Self> {
        Some(euclidean_inner(u, v))
    }

    fn norm(v: &[Self]) -> Option<f64> {
        Some(euclidean_inner(v, v).to_f64().sqrt())
    }
}

impl std::ops::Add for Q {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl std::ops::Sub for Q {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl std::ops::Mul for Q {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl std::ops::Neg for Q {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl From<i64> for Q {
    fn from(value: i64) -> Self {
        Self::from_integer(value)
    }
}

impl From<Rational> for Q {
    fn from(value: Rational) -> Self {
        Self(value)
    }
}

impl From<crate::integers::Z> for Q {
    fn from(value: crate::integers::Z) -> Self {
        Self(Rational::from_integer(value.0))
    }
}

impl std::fmt::Display for Q {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
