//! Property-based tests for polynomial arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::algorithms::gcd::{poly_div_rem, poly_gcd};
    use crate::dense::DensePoly;
    use sylvester_rings::traits::{EuclideanDomain, Ring};
    use sylvester_rings::Q;

    fn small_coeff() -> impl Strategy<Value = Q> {
        (-20i64..20i64).prop_map(Q::from_integer)
    }

    // degree 0-4
    fn small_poly() -> impl Strategy<Value = DensePoly<Q>> {
        proptest::collection::vec(small_coeff(), 1..=5).prop_map(DensePoly::new)
    }

    fn nonzero_poly() -> impl Strategy<Value = DensePoly<Q>> {
        small_poly().prop_filter("polynomial must be non-zero", |p| !p.is_zero())
    }

    proptest! {
        #[test]
        fn poly_distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
            prop_assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
        }

        #[test]
        fn poly_mul_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(&a * &b, &b * &a);
        }

        #[test]
        fn division_identity(a in small_poly(), b in nonzero_poly()) {
            let (q, r) = poly_div_rem(&a, &b).unwrap();
            prop_assert_eq!(&(&q * &b) + &r, a);
            prop_assert!(r.is_zero() || r.degree() < b.degree());
        }

        #[test]
        fn gcd_divides_both(a in nonzero_poly(), b in nonzero_poly()) {
            let g = poly_gcd(&a, &b);
            prop_assert!(g.leading_coeff().is_one());
            prop_assert!(a.rem(&g).is_zero());
            prop_assert!(b.rem(&g).is_zero());
        }

        #[test]
        fn eval_is_ring_homomorphism(a in small_poly(), b in small_poly(), x in small_coeff()) {
            let lhs = (&a * &b).eval(&x);
            prop_assert_eq!(lhs, a.eval(&x) * b.eval(&x));
        }

        #[test]
        fn derivative_product_rule(a in small_poly(), b in small_poly()) {
            let lhs = (&a * &b).derivative();
            let rhs = &(&a.derivative() * &b) + &(&a * &b.derivative());
            prop_assert_eq!(lhs, rhs);
        }
    }
}
