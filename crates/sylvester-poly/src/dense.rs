//! Dense univariate polynomials.
//!
//! A `DensePoly<R>` is itself a [`Ring`], so it can sit inside a matrix
//! (the characteristic matrix `xI - A` is a matrix of polynomials). When
//! the coefficients form a field the polynomial ring is Euclidean, with the
//! degree as its measure.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use sylvester_integers::Integer;
use sylvester_rings::traits::{
    CommutativeRing, EuclideanDomain, EuclideanOps, Field, IntegralDomain, Ring,
};
use sylvester_rings::Space;

use crate::algorithms::gcd::poly_div_rem;

/// A dense univariate polynomial.
///
/// Coefficients are stored in ascending degree order. Trailing zero
/// coefficients are removed on construction, so the zero polynomial is the
/// single coefficient `[0]`.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct DensePoly<R: Ring> {
    coeffs: Vec<R>,
}

impl<R: Ring> DensePoly<R> {
    /// Creates a polynomial from ascending coefficients.
    #[must_use]
    pub fn new(mut coeffs: Vec<R>) -> Self {
        while coeffs.len() > 1 && coeffs.last().is_some_and(Ring::is_zero) {
            coeffs.pop();
        }
        if coeffs.is_empty() {
            coeffs.push(R::zero());
        }
        Self { coeffs }
    }

    /// Creates a constant polynomial.
    #[must_use]
    pub fn constant(c: R) -> Self {
        Self::new(vec![c])
    }

    /// Creates the polynomial x.
    #[must_use]
    pub fn x() -> Self {
        Self::new(vec![R::zero(), R::one()])
    }

    /// Creates the monomial `c * x^n`.
    #[must_use]
    pub fn monomial(c: R, n: usize) -> Self {
        let mut coeffs = vec![R::zero(); n + 1];
        coeffs[n] = c;
        Self::new(coeffs)
    }

    /// Returns the degree. The zero polynomial has degree 0.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// Returns the leading coefficient.
    #[must_use]
    pub fn leading_coeff(&self) -> &R {
        &self.coeffs[self.coeffs.len() - 1]
    }

    /// Returns the coefficient of x^i.
    #[must_use]
    pub fn coeff(&self, i: usize) -> R {
        self.coeffs.get(i).cloned().unwrap_or_else(R::zero)
    }

    /// Returns all coefficients in ascending order.
    #[must_use]
    pub fn coeffs(&self) -> &[R] {
        &self.coeffs
    }

    /// Drops leading coefficients that are zero up to the ring's tolerance.
    #[must_use]
    pub fn trim_approx(mut self) -> Self {
        while self.coeffs.len() > 1 && self.coeffs.last().is_some_and(Ring::is_approx_zero) {
            self.coeffs.pop();
        }
        if self.coeffs.len() == 1 && self.coeffs[0].is_approx_zero() {
            self.coeffs[0] = R::zero();
        }
        self
    }

    /// Evaluates the polynomial at a point using Horner's method.
    #[must_use]
    pub fn eval(&self, x: &R) -> R {
        self.coeffs
            .iter()
            .rev()
            .fold(R::zero(), |acc, c| acc * x.clone() + c.clone())
    }

    /// Multiplies every coefficient by `c`.
    #[must_use]
    pub fn scale(&self, c: &R) -> Self {
        Self::new(self.coeffs.iter().map(|x| x.clone() * c.clone()).collect())
    }

    /// Multiplies by x^n.
    #[must_use]
    pub fn shift(&self, n: usize) -> Self {
        if Ring::is_zero(self) || n == 0 {
            return self.clone();
        }
        let mut coeffs = vec![R::zero(); n];
        coeffs.extend(self.coeffs.iter().cloned());
        Self::new(coeffs)
    }

    /// Computes the formal derivative.
    #[must_use]
    pub fn derivative(&self) -> Self {
        Self::new(
            self.coeffs
                .iter()
                .enumerate()
                .skip(1)
                .map(|(i, c)| c.mul_by_scalar(i64::try_from(i).unwrap_or(i64::MAX)))
                .collect(),
        )
    }

    /// Converts the coefficients to another ring.
    #[must_use]
    pub fn map<S: Ring>(&self, f: impl FnMut(&R) -> S) -> DensePoly<S> {
        DensePoly::new(self.coeffs.iter().map(f).collect())
    }

    fn zip_with(&self, other: &Self, f: impl Fn(R, R) -> R) -> Self {
        let len = self.coeffs.len().max(other.coeffs.len());
        Self::new((0..len).map(|i| f(self.coeff(i), other.coeff(i))).collect())
    }
}

impl<R: Ring> Add for &DensePoly<R> {
    type Output = DensePoly<R>;

    fn add(self, rhs: Self) -> DensePoly<R> {
        self.zip_with(rhs, |a, b| a + b)
    }
}

impl<R: Ring> Sub for &DensePoly<R> {
    type Output = DensePoly<R>;

    fn sub(self, rhs: Self) -> DensePoly<R> {
        self.zip_with(rhs, |a, b| a - b)
    }
}

impl<R: Ring> Mul for &DensePoly<R> {
    type Output = DensePoly<R>;

    /// Schoolbook product; the polynomials met here have matrix-sized degree.
    fn mul(self, rhs: Self) -> DensePoly<R> {
        if Ring::is_zero(self) || Ring::is_zero(rhs) {
            return DensePoly::constant(R::zero());
        }
        let mut out = vec![R::zero(); self.coeffs.len() + rhs.coeffs.len() - 1];
        for (i, a) in self.coeffs.iter().enumerate() {
            if a.is_zero() {
                continue;
            }
            for (j, b) in rhs.coeffs.iter().enumerate() {
                out[i + j] = out[i + j].clone() + a.clone() * b.clone();
            }
        }
        DensePoly::new(out)
    }
}

impl<R: Ring> Neg for &DensePoly<R> {
    type Output = DensePoly<R>;

    fn neg(self) -> DensePoly<R> {
        DensePoly::new(self.coeffs.iter().map(|c| -c.clone()).collect())
    }
}

impl<R: Ring> Add for DensePoly<R> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        &self + &rhs
    }
}

impl<R: Ring> Sub for DensePoly<R> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        &self - &rhs
    }
}

impl<R: Ring> Mul for DensePoly<R> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        &self * &rhs
    }
}

impl<R: Ring> Neg for DensePoly<R> {
    type Output = Self;

    fn neg(self) -> Self {
        -&self
    }
}

// The Euclidean hooks look through approximately-zero leading
// coefficients: entries of a reduced polynomial matrix pick up rounding
// noise that would otherwise inflate degrees.

fn degree_measure<R: Ring>(p: &DensePoly<R>) -> Integer {
    Integer::from(p.clone().trim_approx().degree() as u64)
}

/// # Panics
///
/// Panics if the divisor is approximately zero.
fn euclidean_div_rem<R: Ring>(a: &DensePoly<R>, b: &DensePoly<R>) -> (DensePoly<R>, DensePoly<R>) {
    let a = a.clone().trim_approx();
    let b = b.clone().trim_approx();
    match poly_div_rem(&a, &b) {
        Some(qr) => qr,
        None => panic!("polynomial division by {b:?}"),
    }
}

fn leading_unit<R: Ring>(p: &DensePoly<R>) -> DensePoly<R> {
    let p = p.clone().trim_approx();
    DensePoly::constant(p.leading_coeff().unit_inverse().unwrap_or_else(R::one))
}

impl<R: Ring> Ring for DensePoly<R> {
    fn zero() -> Self {
        Self::constant(R::zero())
    }

    fn one() -> Self {
        Self::constant(R::one())
    }

    fn is_zero(&self) -> bool {
        self.coeffs.len() == 1 && self.coeffs[0].is_zero()
    }

    fn is_one(&self) -> bool {
        self.coeffs.len() == 1 && self.coeffs[0].is_one()
    }

    fn is_approx_zero(&self) -> bool {
        self.coeffs.iter().all(Ring::is_approx_zero)
    }

    fn approx_eq(&self, other: &Self) -> bool {
        let len = self.coeffs.len().max(other.coeffs.len());
        (0..len).all(|i| self.coeff(i).approx_eq(&other.coeff(i)))
    }

    /// Units are the constants whose value is a unit of `R`, after
    /// approximately-zero leading coefficients are dropped.
    fn unit_inverse(&self) -> Option<Self> {
        let trimmed = self.clone().trim_approx();
        if trimmed.coeffs.len() == 1 {
            trimmed.coeffs[0].unit_inverse().map(Self::constant)
        } else {
            None
        }
    }

    fn euclidean() -> Option<EuclideanOps<Self>> {
        R::is_field().then_some(EuclideanOps {
            measure: degree_measure::<R>,
            div_rem: euclidean_div_rem::<R>,
            normalization_unit: leading_unit::<R>,
        })
    }
}

impl<R: CommutativeRing> CommutativeRing for DensePoly<R> {}
impl<R: IntegralDomain> IntegralDomain for DensePoly<R> {}

impl<F: Field> EuclideanDomain for DensePoly<F> {
    fn measure(&self) -> Integer {
        degree_measure(self)
    }

    fn div_rem(&self, other: &Self) -> (Self, Self) {
        euclidean_div_rem(self, other)
    }

    fn normalization_unit(&self) -> Self {
        leading_unit(self)
    }
}

/// Polynomials carry no norm, inner product or cross product.
impl<R: Ring> Space for DensePoly<R> {}

impl<R: Ring + fmt::Display> fmt::Display for DensePoly<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if Ring::is_zero(self) {
            return write!(f, "0");
        }
        let terms: Vec<String> = self
            .coeffs
            .iter()
            .enumerate()
            .rev()
            .filter(|(_, c)| !c.is_zero())
            .map(|(i, c)| match (i, c.is_one()) {
                (0, _) => format!("{c}"),
                (1, true) => "x".to_string(),
                (1, false) => format!("{c}*x"),
                (_, true) => format!("x^{i}"),
                (_, false) => format!("{c}*x^{i}"),
            })
            .collect();
        write!(f, "{}", terms.join(" + "))
    }
}
