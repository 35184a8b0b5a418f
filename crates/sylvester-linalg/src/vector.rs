//! Vector operations on single-row or single-column matrices, and the
//! Gram–Schmidt process on the columns of a matrix.
//!
//! Which operations exist depends on the scalar type's [`Space`]
//! capabilities; asking for a missing one is [`LinalgError::Unsupported`].
//! Normalization needs a real-valued norm that converts back into the
//! scalar type, so it is limited to the floating point scalars.

use sylvester_rings::traits::Ring;
use sylvester_rings::{Space, C64, R64};

use crate::dense_matrix::DenseMatrix;
use crate::error::{LinalgError, Result};

impl<R: Space> DenseMatrix<R> {
    fn vector_entries(&self, operation: &'static str) -> Result<&[R]> {
        if self.is_vector() {
            Ok(self.entries())
        } else {
            Err(LinalgError::ShapeMismatch {
                operation,
                left: self.shape(),
                right: (self.num_rows().max(self.num_cols()), 1),
            })
        }
    }

    fn same_length<'a>(&'a self, other: &'a Self, operation: &'static str) -> Result<(&'a [R], &'a [R])> {
        let u = self.vector_entries(operation)?;
        let v = other.vector_entries(operation)?;
        if u.len() == v.len() {
            Ok((u, v))
        } else {
            Err(LinalgError::ShapeMismatch {
                operation,
                left: self.shape(),
                right: other.shape(),
            })
        }
    }

    /// Length of a vector.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::ShapeMismatch`] for non-vectors and
    /// [`LinalgError::Unsupported`] if the scalar type has no norm.
    pub fn norm(&self) -> Result<f64> {
        R::norm(self.vector_entries("norm")?).ok_or(LinalgError::Unsupported("norm"))
    }

    /// Inner product of two vectors of equal length.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::ShapeMismatch`] for non-vectors or different
    /// lengths and [`LinalgError::Unsupported`] if the scalar type has no
    /// inner product.
    pub fn dot(&self, other: &Self) -> Result<R> {
        let (u, v) = self.same_length(other, "dot")?;
        R::inner_product(u, v).ok_or(LinalgError::Unsupported("inner product"))
    }

    /// Cross product of two three-dimensional vectors, shaped like `self`.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::Unsupported`] unless both operands are
    /// three-dimensional and the scalar type has a cross product.
    pub fn cross(&self, other: &Self) -> Result<Self> {
        let (u, v) = self.same_length(other, "cross")?;
        if u.len() != 3 || !R::has_cross_product() {
            return Err(LinalgError::Unsupported("cross product"));
        }
        let c = |i: usize, j: usize| u[i].clone() * v[j].clone() - u[j].clone() * v[i].clone();
        let entries = vec![c(1, 2), c(2, 0), c(0, 1)];
        Ok(if self.num_cols() == 1 {
            Self::column_vector(entries)
        } else {
            Self::row_vector(entries)
        })
    }

    /// Projection of `self` onto the line spanned by `onto`.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::Unsupported`] if the scalar type has no inner
    /// product or `<onto, onto>` is not invertible.
    pub fn projection(&self, onto: &Self) -> Result<Self> {
        let along = self.dot(onto)?;
        let length = onto.dot(onto)?;
        let inv = length
            .unit_inverse()
            .ok_or(LinalgError::Unsupported("projection onto a vector of non-invertible length"))?;
        Ok(onto.scale(&(along * inv)))
    }

    /// Orthogonalizes the columns from left to right, subtracting from each
    /// its projections onto the columns already processed.
    ///
    /// Columns that become zero stay zero and are skipped as projection
    /// targets, so dependent columns do not fail.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::Unsupported`] if the scalar type has no inner
    /// product or some nonzero column has a non-invertible squared length.
    pub fn orthogonalize(&self) -> Result<Self> {
        let mut basis: Vec<Self> = Vec::with_capacity(self.num_cols());
        for j in 0..self.num_cols() {
            let mut a = self.column(j);
            for b in &basis {
                if b.dot(b)?.is_approx_zero() {
                    continue;
                }
                a = a.try_sub(&a.projection(b)?)?;
            }
            basis.push(a);
        }
        if basis.is_empty() {
            return Ok(self.clone());
        }
        Self::concat_columns(&basis)
    }
}

impl<R: Space + From<f64>> DenseMatrix<R> {
    /// The vector scaled to unit length.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::ShapeMismatch`] for non-vectors and
    /// [`LinalgError::Unsupported`] for vectors of zero length.
    pub fn normalize(&self) -> Result<Self> {
        let length = self.norm()?;
        if length < R64::EPSILON {
            return Err(LinalgError::Unsupported("normalizing a zero vector"));
        }
        Ok(self.scale(&R::from(length.recip())))
    }

    /// Gram–Schmidt process: orthonormal columns spanning the same
    /// subspaces as the leading columns of `self`. Columns that depend on
    /// earlier ones come out as zero columns.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::Unsupported`] if the scalar type has no inner
    /// product or norm.
    pub fn gram_schmidt(&self) -> Result<Self> {
        let orthogonal = self.orthogonalize()?;
        let mut columns = Vec::with_capacity(orthogonal.num_cols());
        for j in 0..orthogonal.num_cols() {
            let column = orthogonal.column(j);
            if column.norm()? < R64::EPSILON {
                columns.push(Self::zeros(column.num_rows(), 1));
            } else {
                columns.push(column.normalize()?);
            }
        }
        if columns.is_empty() {
            return Ok(orthogonal);
        }
        Self::concat_columns(&columns)
    }
}

impl DenseMatrix<C64> {
    /// Transpose with every entry conjugated.
    #[must_use]
    pub fn conjugate_transpose(&self) -> Self {
        self.transpose().map(|z| z.conj())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use sylvester_rings::finite_field::FiniteField;
    use sylvester_rings::rationals::Q;

    fn rv(entries: &[f64]) -> DenseMatrix<R64> {
        DenseMatrix::column_vector(entries.iter().map(|&v| R64(v)).collect())
    }

    #[test]
    fn test_norm_and_dot() {
        let v = rv(&[3.0, 4.0]);
        assert_abs_diff_eq!(v.norm().unwrap(), 5.0, epsilon = 1e-12);
        assert_eq!(v.dot(&rv(&[1.0, 1.0])).unwrap(), R64(7.0));
        assert!(v.dot(&rv(&[1.0])).is_err());
    }

    #[test]
    fn test_cross() {
        let x = rv(&[1.0, 0.0, 0.0]);
        let y = rv(&[0.0, 1.0, 0.0]);
        assert_eq!(x.cross(&y).unwrap(), rv(&[0.0, 0.0, 1.0]));
        assert!(matches!(
            rv(&[1.0, 2.0]).cross(&rv(&[3.0, 4.0])),
            Err(LinalgError::Unsupported(_))
        ));

        let q = DenseMatrix::column_vector(vec![Q::from_integer(1), Q::from_integer(0), Q::from_integer(0)]);
        assert!(q.cross(&q).is_err());
    }

    #[test]
    fn test_projection() {
        let v = DenseMatrix::column_vector(vec![Q::from_integer(2), Q::from_integer(3)]);
        let onto = DenseMatrix::column_vector(vec![Q::from_integer(1), Q::from_integer(1)]);
        let p = v.projection(&onto).unwrap();
        assert_eq!(p, DenseMatrix::column_vector(vec![Q::new(5, 2), Q::new(5, 2)]));
    }

    #[test]
    fn test_orthogonalize_exact() {
        let a = DenseMatrix::from_rows(vec![
            vec![Q::from_integer(1), Q::from_integer(1), Q::from_integer(2)],
            vec![Q::from_integer(1), Q::from_integer(0), Q::from_integer(1)],
            vec![Q::from_integer(0), Q::from_integer(1), Q::from_integer(1)],
        ])
        .unwrap();
        let o = a.orthogonalize().unwrap();
        assert_eq!(o.column(0), a.column(0));
        assert_eq!(
            o.column(1),
            DenseMatrix::column_vector(vec![Q::new(1, 2), Q::new(-1, 2), Q::from_integer(1)])
        );
        assert!(o.column(0).dot(&o.column(1)).unwrap().is_zero());
        // third column is the sum of the first two
        assert!(o.column(2).is_zero());
    }

    #[test]
    fn test_normalize() {
        let v = rv(&[3.0, 4.0]).normalize().unwrap();
        assert_abs_diff_eq!(v[(0, 0)].0, 0.6, epsilon = 1e-12);
        assert_abs_diff_eq!(v[(1, 0)].0, 0.8, epsilon = 1e-12);
        assert!(matches!(rv(&[0.0, 0.0]).normalize(), Err(LinalgError::Unsupported(_))));
    }

    #[test]
    fn test_gram_schmidt_real() {
        let a = DenseMatrix::from_rows(vec![
            vec![R64(3.0), R64(1.0), R64(1.0)],
            vec![R64(4.0), R64(2.0), R64(0.0)],
            vec![R64(0.0), R64(2.0), R64(5.0)],
        ])
        .unwrap();
        let q = a.gram_schmidt().unwrap();
        assert!((&q.transpose() * &q).approx_eq(&DenseMatrix::identity(3)));
        assert!(q.column(0).approx_eq(&rv(&[0.6, 0.8, 0.0])));
    }

    #[test]
    fn test_gram_schmidt_complex_is_unitary() {
        let a = DenseMatrix::from_rows(vec![
            vec![C64::new(1.0, 1.0), C64::from(2.0)],
            vec![C64::from(0.0), C64::new(0.0, -1.0)],
        ])
        .unwrap();
        let q = a.gram_schmidt().unwrap();
        assert!((&q.conjugate_transpose() * &q).approx_eq(&DenseMatrix::identity(2)));
    }

    #[test]
    fn test_conjugate_transpose() {
        let a = DenseMatrix::from_rows(vec![
            vec![C64::new(1.0, 1.0), C64::from(2.0)],
            vec![C64::from(3.0), C64::new(0.0, -1.0)],
        ])
        .unwrap();
        let expected = DenseMatrix::from_rows(vec![
            vec![C64::new(1.0, -1.0), C64::from(3.0)],
            vec![C64::from(2.0), C64::new(0.0, 1.0)],
        ])
        .unwrap();
        assert_eq!(a.conjugate_transpose(), expected);
    }

    #[test]
    fn test_capabilities() {
        let f = DenseMatrix::row_vector(vec![FiniteField::<7>::from(3i64), FiniteField::<7>::from(5i64)]);
        assert!(matches!(f.norm(), Err(LinalgError::Unsupported(_))));
        assert_eq!(f.dot(&f).unwrap(), FiniteField::<7>::from(34i64 % 7));

        let c = DenseMatrix::row_vector(vec![C64::i(), C64::from(1.0)]);
        assert_abs_diff_eq!(c.norm().unwrap(), 2f64.sqrt(), epsilon = 1e-12);
        assert!(c.dot(&c).unwrap().approx_eq(&C64::from(2.0)));
    }
}
