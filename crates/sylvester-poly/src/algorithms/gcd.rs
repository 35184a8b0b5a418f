//! Polynomial division and GCD.

use sylvester_rings::traits::{Field, Ring};

use crate::dense::DensePoly;

/// Divides `a` by `b`, returning `(quotient, remainder)`.
///
/// Works over any coefficient ring as long as the leading coefficient of
/// `b` is a unit; returns `None` otherwise (including when `b` is zero).
/// The eliminated leading term is set to exact zero on every step and the
/// remainder is trimmed of approximately-zero leading coefficients, so
/// floating point remainders keep an honest degree.
#[must_use]
pub fn poly_div_rem<R: Ring>(a: &DensePoly<R>, b: &DensePoly<R>) -> Option<(DensePoly<R>, DensePoly<R>)> {
    let lead_inv = b.leading_coeff().unit_inverse()?;

    if b.degree() == 0 {
        // A unit constant divides everything exactly.
        return Some((a.scale(&lead_inv), DensePoly::zero()));
    }
    if a.degree() < b.degree() {
        return Some((DensePoly::zero(), a.clone()));
    }

    let divisor = b.coeffs();
    let mut quotient = vec![R::zero(); a.degree() - b.degree() + 1];
    let mut remainder = a.coeffs().to_vec();

    for shift in (0..quotient.len()).rev() {
        let top = shift + divisor.len() - 1;
        let coeff = remainder[top].clone() * lead_inv.clone();
        if coeff.is_zero() {
            continue;
        }
        for (i, d) in divisor.iter().enumerate() {
            remainder[shift + i] = remainder[shift + i].clone() - coeff.clone() * d.clone();
        }
        remainder[top] = R::zero();
        quotient[shift] = coeff;
    }

    Some((
        DensePoly::new(quotient),
        DensePoly::new(remainder).trim_approx(),
    ))
}

/// Scales a polynomial so its leading coefficient is one.
///
/// The zero polynomial is returned unchanged.
#[must_use]
pub fn make_monic<F: Field>(p: &DensePoly<F>) -> DensePoly<F> {
    match p.leading_coeff().inv() {
        Some(inv) => p.scale(&inv),
        None => p.clone(),
    }
}

/// Monic greatest common divisor over a field.
///
/// Each remainder is made monic before the next division, which keeps
/// floating point coefficients bounded.
#[must_use]
pub fn poly_gcd<F: Field>(a: &DensePoly<F>, b: &DensePoly<F>) -> DensePoly<F> {
    let mut p = make_monic(a);
    let mut q = make_monic(b);
    while !q.is_approx_zero() {
        let Some((_, r)) = poly_div_rem(&p, &q) else {
            break;
        };
        p = q;
        q = make_monic(&r);
    }
    make_monic(&p)
}

/// Monic least common multiple over a field.
#[must_use]
pub fn poly_lcm<F: Field>(a: &DensePoly<F>, b: &DensePoly<F>) -> DensePoly<F> {
    if a.is_zero() || b.is_zero() {
        return DensePoly::zero();
    }
    let g = poly_gcd(a, b);
    match poly_div_rem(&(a * b), &g) {
        Some((q, _)) => make_monic(&q),
        None => DensePoly::zero(),
    }
}
