//! Vector-space capabilities of a scalar type.
//!
//! Not every scalar type admits a norm or an inner product: integers
//! modulo p have a bilinear form but no norm, polynomials have neither.
//! Each capability defaults to unsupported and scalar types opt in.

use crate::traits::Ring;

/// Norm, inner product and cross product on vectors of `Self`.
pub trait Space: Ring {
    /// Inner product of two vectors of equal length, `None` if the space
    /// defines none.
    #[allow(unused_variables)]
    fn inner_product(u: &[Self], v: &[Self]) -> Option<Self> {
        None
    }

    /// Length of a vector, `None` if the space defines no norm.
    #[allow(unused_variables)]
    fn norm(v: &[Self]) -> Option<f64> {
        None
    }

    /// Returns true if three-dimensional vectors have a cross product.
    fn has_cross_product() -> bool {
        false
    }
}

/// Sum of componentwise products. Extra entries of the longer slice are
/// ignored.
#[must_use]
pub fn euclidean_inner<R: Ring>(u: &[R], v: &[R]) -> R {
    u.iter()
        .zip(v)
        .fold(R::zero(), |acc, (a, b)| acc + a.clone() * b.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finite_field::FiniteField;
    use crate::rationals::Q;

    #[test]
    fn test_euclidean_inner() {
        let u = [Q::new(1, 2), Q::new(3, 1)];
        let v = [Q::new(4, 1), Q::new(-1, 3)];
        // 2 - 1
        assert_eq!(euclidean_inner(&u, &v), Q::new(1, 1));
    }

    #[test]
    fn test_modular_has_no_norm() {
        type F5 = FiniteField<5>;
        let v = [F5::new(1), F5::new(2)];
        assert_eq!(F5::norm(&v), None);
        assert_eq!(F5::inner_product(&v, &v), Some(F5::new(0)));
    }
}
