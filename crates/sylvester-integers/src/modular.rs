//! Integers modulo a compile-time prime.

use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A residue class modulo `P`, stored as its canonical representative
/// in `0..P`.
///
/// `P` is expected to be prime; otherwise [`ModInt::inv`] returns `None`
/// for residues sharing a factor with `P`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ModInt<const P: u64>(u64);

impl<const P: u64> ModInt<P> {
    /// Reduces `value` modulo `P`.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value % P)
    }

    /// Reduces a signed value modulo `P` into `0..P`.
    #[must_use]
    pub fn from_signed(value: i64) -> Self {
        let r = value.unsigned_abs() % P;
        if value < 0 && r != 0 {
            Self(P - r)
        } else {
            Self(r)
        }
    }

    /// Returns the canonical representative.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Returns the modulus.
    #[must_use]
    pub const fn modulus() -> u64 {
        P
    }

    /// Multiplicative inverse via the extended Euclidean algorithm.
    #[must_use]
    pub fn inv(self) -> Option<Self> {
        if self.0 == 0 {
            return None;
        }
        let (mut r0, mut r1) = (i128::from(P), i128::from(self.0));
        let (mut t0, mut t1) = (0i128, 1i128);
        while r1 != 0 {
            let q = r0 / r1;
            (r0, r1) = (r1, r0 - q * r1);
            (t0, t1) = (t1, t0 - q * t1);
        }
        if r0 != 1 {
            return None;
        }
        let p = i128::from(P);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        Some(Self((((t0 % p) + p) % p) as u64))
    }

    /// Computes `self^exp` by square-and-multiply.
    #[must_use]
    pub fn pow(self, mut exp: u64) -> Self {
        let mut base = self;
        let mut acc = Self::one();
        while exp > 0 {
            if exp & 1 == 1 {
                acc = acc * base;
            }
            base = base * base;
            exp >>= 1;
        }
        acc
    }
}

impl<const P: u64> Zero for ModInt<P> {
    fn zero() -> Self {
        Self(0)
    }

    fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl<const P: u64> One for ModInt<P> {
    fn one() -> Self {
        Self(1 % P)
    }

    fn is_one(&self) -> bool {
        self.0 == 1 % P
    }
}

impl<const P: u64> fmt::Debug for ModInt<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (mod {P})", self.0)
    }
}

impl<const P: u64> fmt::Display for ModInt<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<const P: u64> Add for ModInt<P> {
    type Output = Self;

    #[allow(clippy::cast_possible_truncation)]
    fn add(self, rhs: Self) -> Self::Output {
        Self(((u128::from(self.0) + u128::from(rhs.0)) % u128::from(P)) as u64)
    }
}

impl<const P: u64> Sub for ModInt<P> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self + (-rhs)
    }
}

impl<const P: u64> Mul for ModInt<P> {
    type Output = Self;

    #[allow(clippy::cast_possible_truncation)]
    fn mul(self, rhs: Self) -> Self::Output {
        Self(((u128::from(self.0) * u128::from(rhs.0)) % u128::from(P)) as u64)
    }
}

impl<const P: u64> Div for ModInt<P> {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if `rhs` has no inverse modulo `P`.
    fn div(self, rhs: Self) -> Self::Output {
        match rhs.inv() {
            Some(inv) => self * inv,
            None => panic!("{rhs:?} is not invertible"),
        }
    }
}

impl<const P: u64> Neg for ModInt<P> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        if self.0 == 0 {
            self
        } else {
            Self(P - self.0)
        }
    }
}

impl<const P: u64> From<u64> for ModInt<P> {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl<const P: u64> From<i64> for ModInt<P> {
    fn from(value: i64) -> Self {
        Self::from_signed(value)
    }
}
