//! Smith Normal Form computation.
//!
//! The Smith Normal Form (SNF) of a matrix A over a Euclidean domain is a
//! diagonal matrix D such that:
//!   - D = U * A * V for invertible matrices U, V
//!   - D[i,i] divides D[i+1,i+1] for all i
//!   - every diagonal entry is in normalized form (non-negative integers,
//!     monic polynomials)
//!
//! The diagonal entries are called the invariant factors. Over the
//! polynomial ring F[x], the invariant factors of `xI - A` determine the
//! rational canonical form and the minimal polynomial of A.
//!
//! # Algorithm
//!
//! For each diagonal position k, the entry of least Euclidean measure in
//! the trailing submatrix is moved to (k, k) and the rest of row k and
//! column k are reduced by Euclidean quotients. The search repeats until
//! the cross is clear; if some trailing entry is not divisible by the
//! pivot, its row is added to row k and the search resumes. Every step
//! strictly lowers the pivot measure, so the loop terminates.

use sylvester_rings::traits::{EuclideanOps, Ring};

use crate::dense_matrix::DenseMatrix;
use crate::error::{LinalgError, Result};
use crate::operation::{ElementaryOp, OperationLog};

/// Result of Smith Normal Form computation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SmithNormalForm<R> {
    /// The diagonal matrix D, same shape as the input.
    pub diagonal: DenseMatrix<R>,
    /// Nonzero diagonal entries d_1, d_2, ..., d_r with d_i | d_{i+1}.
    pub invariant_factors: Vec<R>,
    /// Left transform U with U * A * V = D.
    pub left_transform: DenseMatrix<R>,
    /// Right transform V with U * A * V = D.
    pub right_transform: DenseMatrix<R>,
    /// Rank of the matrix.
    pub rank: usize,
    row_operations: OperationLog<R>,
}

impl<R: Ring> SmithNormalForm<R> {
    /// Inverse of the left transform, rebuilt from the recorded row
    /// operations.
    ///
    /// Returns `None` if some recorded scaling has no inverse in `R`.
    #[must_use]
    pub fn left_inverse(&self) -> Option<DenseMatrix<R>> {
        let n = self.left_transform.num_rows();
        self.row_operations
            .inverse()
            .map(|inverse| inverse.replay_rows(&DenseMatrix::identity(n)))
    }

    /// Row operations that produced the left transform.
    #[must_use]
    pub fn row_operations(&self) -> &OperationLog<R> {
        &self.row_operations
    }
}

struct SmithReducer<R> {
    a: DenseMatrix<R>,
    rows: OperationLog<R>,
    cols: OperationLog<R>,
    ops: EuclideanOps<R>,
}

impl<R: Ring> SmithReducer<R> {
    fn row_op(&mut self, op: ElementaryOp<R>) {
        op.apply_to_rows(&mut self.a);
        self.rows.push(op);
    }

    fn col_op(&mut self, op: ElementaryOp<R>) {
        op.apply_to_columns(&mut self.a);
        self.cols.push(op);
    }

    /// Reduces row k and column k by Euclidean quotients of the pivot.
    fn eliminate(&mut self, k: usize) {
        let pivot = self.a[(k, k)].clone();
        for i in k + 1..self.a.num_rows() {
            if self.a[(i, k)].is_approx_zero() {
                continue;
            }
            let (q, r) = (self.ops.div_rem)(&self.a[(i, k)], &pivot);
            if q.is_zero() {
                continue;
            }
            self.row_op(ElementaryOp::AddMultiple {
                target: i,
                source: k,
                factor: -q,
            });
            self.a[(i, k)] = r;
        }
        for j in k + 1..self.a.num_cols() {
            if self.a[(k, j)].is_approx_zero() {
                continue;
            }
            let (q, r) = (self.ops.div_rem)(&self.a[(k, j)], &pivot);
            if q.is_zero() {
                continue;
            }
            self.col_op(ElementaryOp::AddMultiple {
                target: j,
                source: k,
                factor: -q,
            });
            self.a[(k, j)] = r;
        }
    }

    /// Clears row k and column k if they are approximately zero.
    fn clear_cross(&mut self, k: usize) -> bool {
        let clear = (k + 1..self.a.num_rows()).all(|i| self.a[(i, k)].is_approx_zero())
            && (k + 1..self.a.num_cols()).all(|j| self.a[(k, j)].is_approx_zero());
        if clear {
            for i in k + 1..self.a.num_rows() {
                self.a[(i, k)] = R::zero();
            }
            for j in k + 1..self.a.num_cols() {
                self.a[(k, j)] = R::zero();
            }
        }
        clear
    }

    /// First trailing row holding an entry the pivot does not divide.
    fn indivisible_row(&self, k: usize) -> Option<usize> {
        let pivot = &self.a[(k, k)];
        (k + 1..self.a.num_rows()).find(|&i| {
            (k + 1..self.a.num_cols()).any(|j| !self.ops.divides(pivot, &self.a[(i, j)]))
        })
    }
}

/// Computes the Smith Normal Form of a matrix over a Euclidean domain.
///
/// The Euclidean structure is taken from [`Ring::euclidean`], so fields
/// (trivially Euclidean) and polynomial rings over fields are accepted.
///
/// # Errors
///
/// Returns [`LinalgError::Unsupported`] if the scalar type is not
/// Euclidean.
#[tracing::instrument(level = "debug", skip(matrix), fields(rows = matrix.num_rows(), cols = matrix.num_cols()))]
pub fn smith_normal_form<R: Ring>(matrix: &DenseMatrix<R>) -> Result<SmithNormalForm<R>> {
    let Some(ops) = R::euclidean() else {
        return Err(LinalgError::Unsupported(
            "Smith normal form needs a Euclidean scalar type",
        ));
    };
    let m = matrix.num_rows();
    let n = matrix.num_cols();

    let mut s = SmithReducer {
        a: matrix.clone(),
        rows: OperationLog::new(),
        cols: OperationLog::new(),
        ops,
    };
    let mut rank = 0;

    'diagonal: for k in 0..m.min(n) {
        loop {
            let Some((pi, pj)) = find_pivot(&s.a, k, &s.ops) else {
                break 'diagonal;
            };
            if pi != k {
                s.row_op(ElementaryOp::Swap(k, pi));
            }
            if pj != k {
                s.col_op(ElementaryOp::Swap(k, pj));
            }
            s.eliminate(k);
            if !s.clear_cross(k) {
                continue;
            }
            match s.indivisible_row(k) {
                Some(i) => s.row_op(ElementaryOp::AddMultiple {
                    target: k,
                    source: i,
                    factor: R::one(),
                }),
                None => break,
            }
        }

        // Only invertible scalings keep the left transform invertible.
        let unit = (s.ops.normalization_unit)(&s.a[(k, k)]);
        if !unit.is_one() && unit.is_unit() {
            s.row_op(ElementaryOp::Scale {
                index: k,
                factor: unit,
            });
        }
        rank += 1;
    }

    for i in 0..m {
        for j in 0..n {
            if i != j || i >= rank {
                s.a[(i, j)] = R::zero();
            }
        }
    }
    tracing::debug!(rank, row_ops = s.rows.len(), col_ops = s.cols.len(), "smith form computed");

    let invariant_factors = (0..rank).map(|i| s.a[(i, i)].clone()).collect();
    Ok(SmithNormalForm {
        left_transform: s.rows.replay_rows(&DenseMatrix::identity(m)),
        right_transform: s.cols.replay_columns(&DenseMatrix::identity(n)),
        diagonal: s.a,
        invariant_factors,
        rank,
        row_operations: s.rows,
    })
}

/// Finds the nonzero entry of least measure in the submatrix A[k:, k:].
fn find_pivot<R: Ring>(a: &DenseMatrix<R>, k: usize, ops: &EuclideanOps<R>) -> Option<(usize, usize)> {
    let mut best = None;
    for i in k..a.num_rows() {
        for j in k..a.num_cols() {
            if a[(i, j)].is_approx_zero() {
                continue;
            }
            let measure = (ops.measure)(&a[(i, j)]);
            if best.as_ref().map_or(true, |(m, _)| measure < *m) {
                best = Some((measure, (i, j)));
            }
        }
    }
    best.map(|(_, pos)| pos)
}

/// Checks if a matrix is in Smith Normal Form.
///
/// Always false for scalar types without Euclidean structure.
#[must_use]
pub fn is_smith_normal_form<R: Ring>(matrix: &DenseMatrix<R>) -> bool {
    let Some(ops) = R::euclidean() else {
        return false;
    };
    let m = matrix.num_rows();
    let n = matrix.num_cols();

    for i in 0..m {
        for j in 0..n {
            if i != j && !matrix[(i, j)].is_approx_zero() {
                return false;
            }
        }
    }

    let diagonal: Vec<&R> = (0..m.min(n)).map(|i| &matrix[(i, i)]).collect();
    diagonal.windows(2).all(|w| {
        if w[0].is_approx_zero() {
            w[1].is_approx_zero()
        } else {
            ops.divides(w[0], w[1])
        }
    }) && diagonal.iter().all(|d| d.approx_eq(&ops.normalize(d)))
}

impl<R: Ring> DenseMatrix<R> {
    /// Smith Normal Form of this matrix.
    ///
    /// # Errors
    ///
    /// See [`smith_normal_form`].
    pub fn smith_normal_form(&self) -> Result<SmithNormalForm<R>> {
        smith_normal_form(self)
    }
}
