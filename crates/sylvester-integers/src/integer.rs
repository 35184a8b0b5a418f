//! Arbitrary precision integers.
//!
//! [`Integer`] is a thin wrapper over `dashu::IBig`. Division truncates
//! toward zero and the remainder takes the sign of the dividend, so
//! `|a % b| < |b|` always holds and the Euclidean algorithm terminates.

use dashu::base::{Abs, Gcd, Signed as DashuSigned};
use dashu::integer::IBig;
use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

/// An arbitrary precision integer.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Integer(IBig);

impl Integer {
    /// Creates a new integer from an i64.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(IBig::from(value))
    }

    /// Parses an integer written in the given radix.
    ///
    /// # Errors
    ///
    /// Returns an error if `s` is not a valid integer literal.
    pub fn from_str_radix(s: &str, radix: u32) -> Result<Self, dashu::base::error::ParseError> {
        IBig::from_str_radix(s, radix).map(Self)
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self(self.0.clone().abs())
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        match (self.0.is_zero(), DashuSigned::is_negative(&self.0)) {
            (true, _) => 0,
            (false, true) => -1,
            (false, false) => 1,
        }
    }

    /// Returns true if this integer is strictly negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        DashuSigned::is_negative(&self.0)
    }

    /// Greatest common divisor, always non-negative.
    #[must_use]
    pub fn gcd(&self, other: &Self) -> Self {
        Self(IBig::from(self.0.clone().gcd(other.0.clone())))
    }

    /// Least common multiple, always non-negative.
    #[must_use]
    pub fn lcm(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }
        let g = self.gcd(other);
        Self(&self.0 / &g.0 * &other.0).abs()
    }

    /// Truncated division returning `(quotient, remainder)`.
    ///
    /// # Panics
    ///
    /// Panics if `other` is zero.
    #[must_use]
    pub fn div_rem(&self, other: &Self) -> (Self, Self) {
        (Self(&self.0 / &other.0), Self(&self.0 % &other.0))
    }

    /// Returns the value as an i64 if it fits.
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        self.0.clone().try_into().ok()
    }

    /// Nearest f64 approximation. Magnitudes beyond f64 range become infinite.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        self.0.to_f64().value()
    }

    /// Computes `self^exp`.
    #[must_use]
    pub fn pow(&self, exp: u32) -> Self {
        Self(self.0.pow(exp as usize))
    }

    /// Returns a reference to the inner `dashu::IBig`.
    #[must_use]
    pub fn as_inner(&self) -> &IBig {
        &self.0
    }

    /// Returns the inner `dashu::IBig`.
    #[must_use]
    pub fn into_inner(self) -> IBig {
        self.0
    }
}

impl Zero for Integer {
    fn zero() -> Self {
        Self(IBig::ZERO)
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for Integer {
    fn one() -> Self {
        Self(IBig::ONE)
    }

    fn is_one(&self) -> bool {
        self.0 == IBig::ONE
    }
}

impl fmt::Debug for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Integer({})", self.0)
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Implements a binary operator for owned/owned, owned/borrowed and
/// borrowed/borrowed operands by forwarding to the wrapped value.
macro_rules! forward_binop {
    ($ty:ident, $op:ident, $method:ident) => {
        impl $op for $ty {
            type Output = $ty;

            fn $method(self, rhs: $ty) -> $ty {
                $ty($op::$method(self.0, rhs.0))
            }
        }

        impl $op<&$ty> for $ty {
            type Output = $ty;

            fn $method(self, rhs: &$ty) -> $ty {
                $ty($op::$method(self.0, &rhs.0))
            }
        }

        impl $op for &$ty {
            type Output = $ty;

            fn $method(self, rhs: &$ty) -> $ty {
                $ty($op::$method(&self.0, &rhs.0))
            }
        }
    };
}

pub(crate) use forward_binop;

forward_binop!(Integer, Add, add);
forward_binop!(Integer, Sub, sub);
forward_binop!(Integer, Mul, mul);
forward_binop!(Integer, Div, div);
forward_binop!(Integer, Rem, rem);

impl Neg for Integer {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Neg for &Integer {
    type Output = Integer;

    fn neg(self) -> Self::Output {
        Integer(-&self.0)
    }
}

impl From<i64> for Integer {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<i32> for Integer {
    fn from(value: i32) -> Self {
        Self::new(i64::from(value))
    }
}

impl From<u64> for Integer {
    fn from(value: u64) -> Self {
        Self(IBig::from(value))
    }
}

impl From<IBig> for Integer {
    fn from(value: IBig) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncated_division() {
        let (q, r) = Integer::new(-7).div_rem(&Integer::new(2));
        assert_eq!(q.to_i64(), Some(-3));
        assert_eq!(r.to_i64(), Some(-1));

        let (q, r) = Integer::new(7).div_rem(&Integer::new(-2));
        assert_eq!(q.to_i64(), Some(-3));
        assert_eq!(r.to_i64(), Some(1));
    }

    #[test]
    fn test_gcd_lcm() {
        let a = Integer::new(-48);
        let b = Integer::new(18);
        assert_eq!(a.gcd(&b).to_i64(), Some(6));
        assert_eq!(a.lcm(&b).to_i64(), Some(144));
        assert!(a.lcm(&Integer::zero()).is_zero());
    }

    #[test]
    fn test_reference_ops() {
        let a = Integer::new(12);
        let b = Integer::new(5);
        assert_eq!((&a + &b).to_i64(), Some(17));
        assert_eq!((&a * &b).to_i64(), Some(60));
        assert_eq!((a.clone() - &b).to_i64(), Some(7));
        assert_eq!((-&a).to_i64(), Some(-12));
    }

    #[test]
    fn test_to_f64() {
        assert_eq!(Integer::new(-3).to_f64(), -3.0);
        let big = Integer::from_str_radix("1000000000000000000000", 10).unwrap();
        assert!((big.to_f64() - 1e21).abs() < 1e6);
    }

    #[test]
    fn test_signum() {
        assert_eq!(Integer::new(-9).signum(), -1);
        assert_eq!(Integer::zero().signum(), 0);
        assert_eq!(Integer::new(4).signum(), 1);
    }
}
