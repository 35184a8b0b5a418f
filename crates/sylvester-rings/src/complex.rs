//! Double precision complex numbers as an approximate field.

use std::hash::{Hash, Hasher};

use num_complex::Complex64;
use sylvester_integers::Integer;

use crate::real::R64;
use crate::space::Space;
use crate::traits::{CommutativeRing, EuclideanDomain, EuclideanOps, Field, IntegralDomain, Ring};

/// A complex number with `f64` parts.
///
/// Approximate comparisons are componentwise: two values are approximately
/// equal when both the real and the imaginary parts differ by less than
/// [`R64::EPSILON`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct C64(pub Complex64);

impl C64 {
    /// Creates `re + im*i`.
    #[must_use]
    pub const fn new(re: f64, im: f64) -> Self {
        Self(Complex64::new(re, im))
    }

    /// The imaginary unit.
    #[must_use]
    pub const fn i() -> Self {
        Self::new(0.0, 1.0)
    }

    /// Real part.
    #[must_use]
    pub const fn re(self) -> f64 {
        self.0.re
    }

    /// Imaginary part.
    #[must_use]
    pub const fn im(self) -> f64 {
        self.0.im
    }

    /// Modulus.
    #[must_use]
    pub fn abs(self) -> f64 {
        self.0.norm()
    }

    /// Complex conjugate.
    #[must_use]
    pub fn conj(self) -> Self {
        Self(self.0.conj())
    }

    /// Principal square root.
    #[must_use]
    pub fn sqrt(self) -> Self {
        Self(self.0.sqrt())
    }

    /// Returns true if the imaginary part is within tolerance of zero.
    #[must_use]
    pub fn is_approx_real(self) -> bool {
        self.0.im.abs() < R64::EPSILON
    }
}

impl Eq for C64 {}

impl Hash for C64 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        R64(self.0.re).hash(state);
        R64(self.0.im).hash(state);
    }
}

impl Ring for C64 {
    fn zero() -> Self {
        Self::new(0.0, 0.0)
    }

    fn one() -> Self {
        Self::new(1.0, 0.0)
    }

    fn is_zero(&self) -> bool {
        self.0.re == 0.0 && self.0.im == 0.0
    }

    #[allow(clippy::float_cmp)]
    fn is_one(&self) -> bool {
        self.0.re == 1.0 && self.0.im == 0.0
    }

    fn is_approx_zero(&self) -> bool {
        self.0.re.abs() < R64::EPSILON && self.0.im.abs() < R64::EPSILON
    }

    fn approx_eq(&self, other: &Self) -> bool {
        (*self - *other).is_approx_zero()
    }

    fn unit_inverse(&self) -> Option<Self> {
        (!self.is_approx_zero()).then(|| Self(self.0.inv()))
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
}

impl CommutativeRing for C64 {}
impl IntegralDomain for C64 {}

impl EuclideanDomain for C64 {
    fn measure(&self) -> Integer {
        Integer::new(0)
    }

    fn div_rem(&self, other: &Self) -> (Self, Self) {
        (Self(self.0 / other.0), Self::zero())
    }

    fn normalization_unit(&self) -> Self {
        self.unit_inverse().unwrap_or_else(Self::one)
    }
}

impl Field for C64 {}

/// Hermitian inner product `sum(u_i * conj(v_i))`; no cross product.
impl Space for C64 {
    fn inner_product(u: &[Self], v: &[Self]) -> Option<Self> {
        Some(
            u.iter()
                .zip(v)
                .fold(Self::zero(), |acc, (a, b)| acc + *a * b.conj()),
        )
    }

    fn norm(v: &[Self]) -> Option<f64> {
        Some(v.iter().map(|z| z.0.norm_sqr()).sum::<f64>().sqrt())
    }
}

impl std::ops::Add for C64 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl std::ops::Sub for C64 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl std::ops::Mul for C64 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl std::ops::Neg for C64 {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl From<R64> for C64 {
    fn from(value: R64) -> Self {
        Self::new(value.0, 0.0)
    }
}

impl From<f64> for C64 {
    fn from(value: f64) -> Self {
        Self::new(value, 0.0)
    }
}

impl From<i64> for C64 {
    #[allow(clippy::cast_precision_loss)]
    fn from(value: i64) -> Self {
        Self::new(value as f64, 0.0)
    }
}

impl std::fmt::Display for C64 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_componentwise_tolerance() {
        assert!(C64::new(1e-12, -1e-12).is_approx_zero());
        assert!(!C64::new(1e-12, 1e-3).is_approx_zero());
        assert!(C64::new(2.0, 1e-13).is_approx_real());
    }

    #[test]
    fn test_inverse() {
        let z = C64::new(3.0, 4.0);
        let w = z.unit_inverse().unwrap();
        assert!((z * w).approx_eq(&C64::one()));
        assert_eq!(C64::zero().inv(), None);
    }

    #[test]
    fn test_hermitian_inner_product() {
        let v = [C64::new(1.0, 1.0), C64::i()];
        let ip = C64::inner_product(&v, &v).unwrap();
        assert_abs_diff_eq!(ip.re(), 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(ip.im(), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(C64::norm(&v).unwrap(), 3f64.sqrt(), epsilon = 1e-12);
        assert!(!C64::has_cross_product());
    }

    #[test]
    fn test_sqrt_of_negative_real() {
        let r = C64::from(-4.0).sqrt();
        assert!(r.approx_eq(&C64::new(0.0, 2.0)));
    }
}
