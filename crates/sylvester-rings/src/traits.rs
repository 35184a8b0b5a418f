//! Algebraic capability traits.
//!
//! Every scalar a matrix can hold implements [`Ring`]. The ring carries the
//! notions of zero and unit that elimination needs, an approximate-zero test
//! for floating point domains, and a hook exposing Euclidean structure to
//! code that is only bounded by `Ring`.

use std::fmt::Debug;
use std::ops::{Add, Mul, Neg, Sub};

use sylvester_integers::Integer;

/// A ring with identity.
///
/// # Laws
///
/// - Addition is associative and commutative with identity `zero()`
/// - Multiplication is associative with identity `one()`
/// - Multiplication distributes over addition
/// - `is_approx_zero` implies nothing about `is_zero` for floating domains,
///   but the two coincide for exact ones
pub trait Ring:
    Clone + Eq + Debug + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self> + Neg<Output = Self>
{
    /// The additive identity.
    fn zero() -> Self;

    /// The multiplicative identity.
    fn one() -> Self;

    /// Returns true if this is exactly the additive identity.
    fn is_zero(&self) -> bool;

    /// Returns true if this is exactly the multiplicative identity.
    fn is_one(&self) -> bool;

    /// Returns true if this is zero up to the domain's tolerance.
    fn is_approx_zero(&self) -> bool {
        self.is_zero()
    }

    /// Equality up to the domain's tolerance.
    fn approx_eq(&self, other: &Self) -> bool {
        (self.clone() - other.clone()).is_approx_zero()
    }

    /// Inverse of `self` if it is a unit of the ring.
    fn unit_inverse(&self) -> Option<Self>;

    /// Returns true if `self` has a multiplicative inverse.
    fn is_unit(&self) -> bool {
        self.unit_inverse().is_some()
    }

    /// Returns true if every approximately nonzero element is a unit.
    fn is_field() -> bool {
        false
    }

    /// Euclidean structure of the ring, if it has one.
    fn euclidean() -> Option<EuclideanOps<Self>> {
        None
    }

    /// Computes `n * self` by doubling.
    fn mul_by_scalar(&self, n: i64) -> Self {
        let mut acc = Self::zero();
        let mut addend = self.clone();
        let mut k = n.unsigned_abs();
        while k > 0 {
            if k & 1 == 1 {
                acc = acc + addend.clone();
            }
            addend = addend.clone() + addend;
            k >>= 1;
        }
        if n < 0 {
            -acc
        } else {
            acc
        }
    }

    /// Computes `self^n` by repeated squaring.
    fn pow(&self, n: u32) -> Self {
        let mut acc = Self::one();
        let mut base = self.clone();
        let mut exp = n;
        while exp > 0 {
            if exp & 1 == 1 {
                acc = acc * base.clone();
            }
            exp >>= 1;
            if exp > 0 {
                base = base.clone() * base;
            }
        }
        acc
    }
}

/// A ring whose multiplication is commutative.
pub trait CommutativeRing: Ring {}

/// A commutative ring without zero divisors.
pub trait IntegralDomain: CommutativeRing {}

/// A Euclidean domain supports division with remainder.
///
/// For any a, b with b ≠ 0 there exist q, r with a = b*q + r where either
/// r = 0 or `measure(r) < measure(b)`.
pub trait EuclideanDomain: IntegralDomain {
    /// The Euclidean function. Only meaningful for nonzero elements.
    fn measure(&self) -> Integer;

    /// Computes the quotient and remainder of division.
    ///
    /// # Panics
    ///
    /// May panic if `other` is zero.
    fn div_rem(&self, other: &Self) -> (Self, Self);

    /// A unit `u` such that `self * u` is the canonical associate of `self`.
    fn normalization_unit(&self) -> Self;

    /// Computes the quotient of division.
    fn div(&self, other: &Self) -> Self {
        self.div_rem(other).0
    }

    /// Computes the remainder of division.
    fn rem(&self, other: &Self) -> Self {
        self.div_rem(other).1
    }

    /// Computes a greatest common divisor, normalized to its canonical
    /// associate.
    fn gcd(&self, other: &Self) -> Self {
        let mut a = self.clone();
        let mut b = other.clone();
        while !b.is_approx_zero() {
            let r = a.rem(&b);
            a = b;
            b = r;
        }
        a.clone() * a.normalization_unit()
    }

    /// Computes a least common multiple.
    fn lcm(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }
        self.div(&self.gcd(other)) * other.clone()
    }

    /// Extended Euclidean algorithm.
    ///
    /// Returns (g, x, y) with g = self*x + other*y. `g` is not normalized.
    fn extended_gcd(&self, other: &Self) -> (Self, Self, Self) {
        let (mut old_r, mut r) = (self.clone(), other.clone());
        let (mut old_s, mut s) = (Self::one(), Self::zero());
        let (mut old_t, mut t) = (Self::zero(), Self::one());
        while !r.is_approx_zero() {
            let (q, rem) = old_r.div_rem(&r);
            old_r = std::mem::replace(&mut r, rem);
            let next_s = old_s - q.clone() * s.clone();
            old_s = std::mem::replace(&mut s, next_s);
            let next_t = old_t - q * t.clone();
            old_t = std::mem::replace(&mut t, next_t);
        }
        (old_r, old_s, old_t)
    }
}

/// A field is a ring where every nonzero element has a multiplicative inverse.
pub trait Field: EuclideanDomain {
    /// Computes the multiplicative inverse, `None` for zero.
    fn inv(&self) -> Option<Self> {
        self.unit_inverse()
    }

    /// Divides by another element.
    ///
    /// # Panics
    ///
    /// Panics if `other` is zero.
    fn field_div(&self, other: &Self) -> Self {
        match other.inv() {
            Some(inv) => self.clone() * inv,
            None => panic!("division by zero"),
        }
    }
}

/// Euclidean structure captured as plain function pointers.
///
/// Obtained through [`Ring::euclidean`] so that algorithms bounded only by
/// `Ring` can fall back to Euclidean reduction when the scalar type
/// supports it.
pub struct EuclideanOps<R> {
    /// The Euclidean function.
    pub measure: fn(&R) -> Integer,
    /// Division with remainder.
    pub div_rem: fn(&R, &R) -> (R, R),
    /// Unit mapping an element to its canonical associate.
    pub normalization_unit: fn(&R) -> R,
}

impl<R> Clone for EuclideanOps<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for EuclideanOps<R> {}

impl<R> Debug for EuclideanOps<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("EuclideanOps")
    }
}

impl<R: EuclideanDomain> EuclideanOps<R> {
    /// Captures the Euclidean structure of `R`.
    #[must_use]
    pub fn of() -> Self {
        Self {
            measure: R::measure,
            div_rem: R::div_rem,
            normalization_unit: R::normalization_unit,
        }
    }
}

impl<R: Ring> EuclideanOps<R> {
    /// Euclidean quotient.
    pub fn quotient(&self, a: &R, b: &R) -> R {
        (self.div_rem)(a, b).0
    }

    /// Euclidean remainder.
    pub fn remainder(&self, a: &R, b: &R) -> R {
        (self.div_rem)(a, b).1
    }

    /// Returns true if `b` divides `a`.
    pub fn divides(&self, b: &R, a: &R) -> bool {
        if b.is_approx_zero() {
            return a.is_approx_zero();
        }
        self.remainder(a, b).is_approx_zero()
    }

    /// Greatest common divisor by repeated remainders, not normalized.
    pub fn gcd(&self, a: &R, b: &R) -> R {
        let mut a = a.clone();
        let mut b = b.clone();
        while !b.is_approx_zero() {
            let r = self.remainder(&a, &b);
            a = b;
            b = r;
        }
        a
    }

    /// Least common multiple, `a * (b / gcd(a, b))`.
    pub fn lcm(&self, a: &R, b: &R) -> R {
        if a.is_approx_zero() || b.is_approx_zero() {
            return R::zero();
        }
        let g = self.gcd(a, b);
        a.clone() * self.quotient(b, &g)
    }

    /// Canonical associate of `a`.
    pub fn normalize(&self, a: &R) -> R {
        a.clone() * (self.normalization_unit)(a)
    }
}
