//! Property-based tests for the exact scalar types.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::{Integer, ModInt, Rational};

    const P: u64 = 998_244_353;

    fn small_int() -> impl Strategy<Value = i64> {
        -10_000i64..10_000i64
    }

    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-10_000i64..=-1i64), (1i64..=10_000i64)]
    }

    proptest! {
        #[test]
        fn division_identity_holds(a in small_int(), b in non_zero_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let (q, r) = a.div_rem(&b);
            prop_assert_eq!(&(&q * &b) + &r, a.clone());
            prop_assert!(r.abs() < b.abs());
            prop_assert!(r.is_zero() || r.signum() == a.signum());
        }

        #[test]
        fn gcd_times_lcm_is_product(a in non_zero_int(), b in non_zero_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            prop_assert_eq!(a.gcd(&b) * a.lcm(&b), (&a * &b).abs());
        }

        #[test]
        fn gcd_divides_both(a in small_int(), b in non_zero_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let g = a.gcd(&b);
            prop_assert!((&a % &g).is_zero());
            prop_assert!((&b % &g).is_zero());
        }

        #[test]
        fn integer_distributive(a in small_int(), b in small_int(), c in small_int()) {
            let (a, b, c) = (Integer::new(a), Integer::new(b), Integer::new(c));
            prop_assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
        }

        #[test]
        fn rational_inverse(num in non_zero_int(), den in non_zero_int()) {
            let a = Rational::from_i64(num, den);
            let inv = a.checked_recip().unwrap();
            prop_assert!((a * inv).is_one());
        }

        #[test]
        fn rational_sub_then_add(
            na in small_int(), da in non_zero_int(),
            nb in small_int(), db in non_zero_int(),
        ) {
            let a = Rational::from_i64(na, da);
            let b = Rational::from_i64(nb, db);
            prop_assert_eq!(&(&a - &b) + &b, a);
        }

        #[test]
        fn modint_inverse(a in 1u64..P) {
            let a = ModInt::<P>::new(a);
            prop_assert!((a * a.inv().unwrap()).is_one());
        }

        #[test]
        fn modint_matches_signed_reduction(a in small_int(), b in small_int()) {
            let lhs = ModInt::<P>::from_signed(a) * ModInt::<P>::from_signed(b);
            prop_assert_eq!(lhs, ModInt::<P>::from_signed(a * b));
        }
    }
}
