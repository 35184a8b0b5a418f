//! Operations derived from row reduction.
//!
//! Everything here is computed from a [`Reduction`] and its recorded
//! history: the determinant corrects the product of pivots for swaps and
//! scalings, inverses and solutions come from replaying the history onto
//! the identity or the right-hand side.

use sylvester_rings::traits::Ring;

use crate::dense_matrix::DenseMatrix;
use crate::error::{LinalgError, Result};
use crate::operation::ElementaryOp;
use crate::reduce::{ReduceOptions, Reduction};

/// Solution set of a linear system `A x = b`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinearSolution<R> {
    /// One solution.
    pub particular: DenseMatrix<R>,
    /// Basis of the null space of A; every solution is the particular one
    /// plus a combination of these.
    pub null_space: Vec<DenseMatrix<R>>,
}

/// Factors `P * A = L * U`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LupDecomposition<R> {
    /// Lower triangular factor.
    pub lower: DenseMatrix<R>,
    /// Upper (row echelon) factor.
    pub upper: DenseMatrix<R>,
    /// Row permutation.
    pub permutation: DenseMatrix<R>,
}

impl<R: Ring> DenseMatrix<R> {
    /// Computes the determinant of a square matrix.
    ///
    /// Sizes up to 2 use the closed formula. Larger matrices are reduced to
    /// echelon form; the product of the diagonal is corrected for each row
    /// swap and divided by each scaling the reduction applied.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::ShapeMismatch`] for non-square input and
    /// propagates reduction failures.
    pub fn determinant(&self) -> Result<R> {
        self.require_square("determinant")?;
        match self.num_rows() {
            0 => return Ok(R::one()),
            1 => return Ok(self[(0, 0)].clone()),
            2 => {
                return Ok(self[(0, 0)].clone() * self[(1, 1)].clone()
                    - self[(0, 1)].clone() * self[(1, 0)].clone())
            }
            _ => {}
        }

        let red = self.reduce(&ReduceOptions::echelon())?;
        if red.rank < self.num_rows() {
            return Ok(R::zero());
        }
        let mut det = (0..self.num_rows()).fold(R::one(), |acc, i| acc * red.matrix[(i, i)].clone());
        for op in red.operations.iter() {
            match op {
                ElementaryOp::Swap(..) => det = -det,
                ElementaryOp::Scale { factor, .. } => {
                    det = match factor.unit_inverse() {
                        Some(inv) => det * inv,
                        None => {
                            let ops = R::euclidean().ok_or(LinalgError::Unsupported(
                                "determinant needs to divide out a non-unit scaling",
                            ))?;
                            ops.quotient(&det, factor)
                        }
                    };
                }
                ElementaryOp::AddMultiple { .. } => {}
            }
        }
        Ok(det)
    }

    /// Number of pivots in echelon form.
    ///
    /// # Errors
    ///
    /// Propagates reduction failures.
    pub fn rank(&self) -> Result<usize> {
        Ok(self.reduce(&ReduceOptions::echelon().without_history())?.rank)
    }

    /// Dimension of the null space, `columns - rank`.
    ///
    /// # Errors
    ///
    /// Propagates reduction failures.
    pub fn nullity(&self) -> Result<usize> {
        Ok(self.num_cols() - self.rank()?)
    }

    /// Inverse of a square matrix, `None` if it is singular.
    ///
    /// Over a field, and whenever unit pivots suffice, the fully reduced
    /// history is replayed onto the identity. Over other Euclidean rings
    /// the inverse is assembled from the Smith form as `V * D^-1 * U`,
    /// which exists exactly when every invariant factor is a unit.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::ShapeMismatch`] for non-square input and
    /// propagates reduction failures.
    pub fn inverse(&self) -> Result<Option<Self>> {
        self.require_square("inverse")?;
        let n = self.num_rows();
        if !R::is_field() && R::euclidean().is_some() {
            let snf = self.smith_normal_form()?;
            if snf.rank < n {
                return Ok(None);
            }
            let Some(inverses) = snf
                .invariant_factors
                .iter()
                .map(Ring::unit_inverse)
                .collect::<Option<Vec<_>>>()
            else {
                return Ok(None);
            };
            let d_inv = Self::diagonal(&inverses);
            return Ok(Some(&(&snf.right_transform * &d_inv) * &snf.left_transform));
        }

        let red = self.reduce(&ReduceOptions::reduced())?;
        if red.rank < n {
            return Ok(None);
        }
        Ok(Some(red.operations.replay_rows(&Self::identity(n))))
    }

    /// Basis of the null space as column vectors, one per free column.
    ///
    /// # Errors
    ///
    /// Propagates reduction failures.
    pub fn null_space(&self) -> Result<Vec<Self>> {
        let red = self.reduce(&ReduceOptions::reduced().without_history())?;
        Ok(null_space_from(&red))
    }

    /// The pivot columns of the original matrix, which span its image.
    ///
    /// # Errors
    ///
    /// Propagates reduction failures.
    pub fn column_space(&self) -> Result<Vec<Self>> {
        let red = self.reduce(&ReduceOptions::echelon().without_history())?;
        Ok(red.pivot_columns.iter().map(|&c| self.column(c)).collect())
    }

    /// Solves `A x = b`, returning one solution or `None` if the system is
    /// inconsistent. `b` may have several columns.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::ShapeMismatch`] if `b` has a different row
    /// count and propagates reduction failures.
    pub fn solve(&self, b: &Self) -> Result<Option<Self>> {
        let red = self.reduce(&ReduceOptions::reduced())?;
        self.solve_reduced(&red, b)
    }

    /// Solves `A x = b`, returning a particular solution together with a
    /// null space basis, or `None` if the system is inconsistent.
    ///
    /// # Errors
    ///
    /// See [`DenseMatrix::solve`].
    pub fn solve_system(&self, b: &Self) -> Result<Option<LinearSolution<R>>> {
        let red = self.reduce(&ReduceOptions::reduced())?;
        Ok(self.solve_reduced(&red, b)?.map(|particular| LinearSolution {
            particular,
            null_space: null_space_from(&red),
        }))
    }

    fn solve_reduced(&self, red: &Reduction<R>, b: &Self) -> Result<Option<Self>> {
        if b.num_rows() != self.num_rows() {
            return Err(LinalgError::ShapeMismatch {
                operation: "solve",
                left: self.shape(),
                right: b.shape(),
            });
        }
        let t = red.operations.replay_rows(b);
        let consistent = (red.rank..t.num_rows()).all(|i| t.row(i).iter().all(Ring::is_approx_zero));
        if !consistent {
            return Ok(None);
        }
        let mut x = Self::zeros(self.num_cols(), b.num_cols());
        for (i, &p) in red.pivot_columns.iter().enumerate() {
            for j in 0..b.num_cols() {
                x[(p, j)] = t[(i, j)].clone();
            }
        }
        Ok(Some(x))
    }

    /// Factors the matrix as `P * A = L * U`.
    ///
    /// `U` is the echelon form, `P` accumulates the row swaps and `L` the
    /// inverses of the eliminations, permuted along with the rows.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::Unsupported`] if the reduction had to scale a
    /// row by a non-unit (the LCM fallback), and propagates reduction
    /// failures.
    pub fn lup(&self) -> Result<LupDecomposition<R>> {
        let n = self.num_rows();
        let red = self.reduce(&ReduceOptions::echelon())?;
        let mut lower = Self::identity(n);
        let mut permutation = Self::identity(n);

        // Invariant: P * A = L * (current matrix).
        for op in red.operations.iter() {
            match op {
                ElementaryOp::Swap(i, j) => {
                    permutation.swap_rows(*i, *j);
                    lower.swap_rows(*i, *j);
                    lower.swap_cols(*i, *j);
                }
                ElementaryOp::AddMultiple {
                    target,
                    source,
                    factor,
                } => lower.add_scaled_col(*source, *target, &-factor.clone()),
                ElementaryOp::Scale { index, factor } => {
                    let inv = factor.unit_inverse().ok_or(LinalgError::Unsupported(
                        "LUP needs unit pivots",
                    ))?;
                    lower.scale_col(*index, &inv);
                }
            }
        }

        Ok(LupDecomposition {
            lower,
            upper: red.matrix,
            permutation,
        })
    }
}

fn null_space_from<R: Ring>(red: &Reduction<R>) -> Vec<DenseMatrix<R>> {
    let cols = red.matrix.num_cols();
    red.free_columns()
        .into_iter()
        .map(|free| {
            let mut v = DenseMatrix::zeros(cols, 1);
            v[(free, 0)] = R::one();
            for (row, &p) in red.pivot_columns.iter().enumerate() {
                v[(p, 0)] = -red.matrix[(row, free)].clone();
            }
            v
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sylvester_rings::integers::Z;
    use sylvester_rings::rationals::Q;
    use sylvester_rings::R64;

    fn q(rows: &[&[i64]]) -> DenseMatrix<Q> {
        DenseMatrix::from_rows(
            rows.iter()
                .map(|r| r.iter().map(|&v| Q::from_integer(v)).collect())
                .collect(),
        )
        .unwrap()
    }

    fn z(rows: &[&[i64]]) -> DenseMatrix<Z> {
        DenseMatrix::from_rows(rows.iter().map(|r| r.iter().map(|&v| Z::new(v)).collect()).collect())
            .unwrap()
    }

    fn qv(entries: &[i64]) -> DenseMatrix<Q> {
        DenseMatrix::column_vector(entries.iter().map(|&v| Q::from_integer(v)).collect())
    }

    #[test]
    fn test_det() {
        // 3*6 - 8*4
        assert_eq!(q(&[&[3, 8], &[4, 6]]).determinant().unwrap(), Q::from_integer(-14));
        assert_eq!(
            q(&[&[2, 0, 1], &[1, 3, 2], &[1, 1, 2]]).determinant().unwrap(),
            Q::from_integer(6)
        );
        assert_eq!(q(&[&[1, 2, 3], &[4, 5, 6], &[7, 8, 9]]).determinant().unwrap(), Q::zero());
        assert_eq!(DenseMatrix::<Q>::zeros(0, 0).determinant().unwrap(), Q::one());
        assert!(q(&[&[1, 2]]).determinant().is_err());
    }

    #[test]
    fn test_det_with_swaps() {
        // one swap needed for the first pivot
        let a = q(&[&[0, 1, 2], &[1, 0, 3], &[4, -3, 8]]);
        assert_eq!(a.determinant().unwrap(), Q::from_integer(-2));
    }

    #[test]
    fn test_det_over_integers_uses_lcm() {
        let a = z(&[&[2, 3, 1], &[4, 1, 5], &[6, 7, 3]]);
        // 2(3-35) - 3(12-30) + 1(28-6)
        assert_eq!(a.determinant().unwrap(), Z::new(12));
    }

    #[test]
    fn test_rank_and_nullity() {
        let a = q(&[&[1, 2, 3], &[2, 4, 6]]);
        assert_eq!(a.rank().unwrap(), 1);
        assert_eq!(a.nullity().unwrap(), 2);
    }

    #[test]
    fn test_inverse() {
        let m = q(&[&[4, 7], &[2, 6]]);
        let inv = m.inverse().unwrap().unwrap();
        assert!((&m * &inv).is_identity());
        assert!((&inv * &m).is_identity());
        assert_eq!(q(&[&[1, 2], &[2, 4]]).inverse().unwrap(), None);
    }

    #[test]
    fn test_inverse_over_integers() {
        // unimodular, but no unit in the first column
        let a = z(&[&[2, 3], &[3, 5]]);
        let inv = a.inverse().unwrap().unwrap();
        assert_eq!(inv, z(&[&[5, -3], &[-3, 2]]));
        // det 2 is not a unit in Z
        assert_eq!(z(&[&[2, 0], &[0, 1]]).inverse().unwrap(), None);
    }

    #[test]
    fn test_solve() {
        let a = q(&[&[1, 2], &[3, 4]]);
        let x = a.solve(&qv(&[5, 11])).unwrap().unwrap();
        assert_eq!(x, qv(&[1, 2]));
    }

    #[test]
    fn test_solve_inconsistent() {
        let a = q(&[&[1, 1], &[1, 1]]);
        assert_eq!(a.solve(&qv(&[1, 2])).unwrap(), None);
        assert!(a.solve(&qv(&[1])).is_err());
    }

    #[test]
    fn test_solve_system_underdetermined() {
        let a = q(&[&[1, 2, 3], &[2, 4, 7]]);
        let b = qv(&[1, 3]);
        let sol = a.solve_system(&b).unwrap().unwrap();
        assert_eq!(&a * &sol.particular, b);
        assert_eq!(sol.null_space.len(), 1);
        for v in &sol.null_space {
            assert!((&a * v).is_zero());
        }
    }

    #[test]
    fn test_null_and_column_space() {
        let m = q(&[&[1, 2, 3], &[2, 4, 6]]);
        let null = m.null_space().unwrap();
        assert_eq!(null.len(), 2);
        for v in &null {
            assert!((&m * v).is_zero());
        }
        assert_eq!(m.column_space().unwrap(), vec![qv(&[1, 2])]);
    }

    #[test]
    fn test_lup() {
        let a = q(&[&[0, 2, 1], &[1, 1, 0], &[2, 4, 5]]);
        let lup = a.lup().unwrap();
        assert_eq!(&lup.permutation * &a, &lup.lower * &lup.upper);
        for i in 0..3 {
            assert!(lup.lower[(i, i)].is_one());
            for j in i + 1..3 {
                assert!(lup.lower[(i, j)].is_zero());
                assert!(lup.upper[(j, i)].is_zero());
            }
        }
    }

    #[test]
    fn test_lup_rejects_lcm_scaling() {
        assert!(matches!(
            z(&[&[2, 1], &[3, 1]]).lup(),
            Err(LinalgError::Unsupported(_))
        ));
    }

    #[test]
    fn test_float_solve() {
        let a = DenseMatrix::from_rows(vec![vec![R64(2.0), R64(1.0)], vec![R64(1.0), R64(3.0)]]).unwrap();
        let b = DenseMatrix::column_vector(vec![R64(3.0), R64(5.0)]);
        let x = a.solve(&b).unwrap().unwrap();
        assert!((&a * &x).approx_eq(&b));
    }
}
