//! Square-free part of a polynomial.
//!
//! Over a field of characteristic 0, `f / gcd(f, f')` has the same roots as
//! `f`, each with multiplicity one. Root finders converge poorly at
//! repeated roots, so they work on this part instead.

use sylvester_rings::traits::Field;

use crate::algorithms::gcd::{make_monic, poly_div_rem, poly_gcd};
use crate::dense::DensePoly;

/// Returns the monic square-free part `f / gcd(f, f')`.
///
/// Constants (including zero) are returned as their monic form.
#[must_use]
pub fn square_free_part<F: Field>(f: &DensePoly<F>) -> DensePoly<F> {
    if f.degree() == 0 {
        return make_monic(f);
    }
    let g = poly_gcd(f, &f.derivative());
    match poly_div_rem(f, &g) {
        Some((q, _)) => make_monic(&q),
        None => make_monic(f),
    }
}

/// Returns true if `f` has no repeated factor.
#[must_use]
pub fn is_square_free<F: Field>(f: &DensePoly<F>) -> bool {
    poly_gcd(f, &f.derivative()).degree() == 0
}
