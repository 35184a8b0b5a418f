//! Elementary operations and their history.
//!
//! Every reduction can record the elementary operations it applied. Replaying
//! a history onto the identity matrix yields the accumulated transform,
//! which is how inverses, LUP factors and Smith transforms are recovered.

use sylvester_rings::traits::Ring;

use crate::dense_matrix::DenseMatrix;

/// An invertible-by-construction elementary operation on rows or columns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ElementaryOp<R> {
    /// Exchange lines `i` and `j`.
    Swap(usize, usize),
    /// Multiply line `index` by `factor`.
    Scale {
        /// Line being scaled.
        index: usize,
        /// Multiplier.
        factor: R,
    },
    /// Add `factor` times line `source` to line `target`.
    AddMultiple {
        /// Line receiving the multiple.
        target: usize,
        /// Line being added.
        source: usize,
        /// Multiplier.
        factor: R,
    },
}

impl<R: Ring> ElementaryOp<R> {
    /// Applies the operation to the rows of `m`.
    pub fn apply_to_rows(&self, m: &mut DenseMatrix<R>) {
        match self {
            Self::Swap(i, j) => m.swap_rows(*i, *j),
            Self::Scale { index, factor } => m.scale_row(*index, factor),
            Self::AddMultiple {
                target,
                source,
                factor,
            } => m.add_scaled_row(*target, *source, factor),
        }
    }

    /// Applies the operation to the columns of `m`.
    pub fn apply_to_columns(&self, m: &mut DenseMatrix<R>) {
        match self {
            Self::Swap(i, j) => m.swap_cols(*i, *j),
            Self::Scale { index, factor } => m.scale_col(*index, factor),
            Self::AddMultiple {
                target,
                source,
                factor,
            } => m.add_scaled_col(*target, *source, factor),
        }
    }

    /// The operation undoing this one, `None` for scaling by a non-unit.
    #[must_use]
    pub fn inverse(&self) -> Option<Self> {
        match self {
            Self::Swap(i, j) => Some(Self::Swap(*i, *j)),
            Self::Scale { index, factor } => Some(Self::Scale {
                index: *index,
                factor: factor.unit_inverse()?,
            }),
            Self::AddMultiple {
                target,
                source,
                factor,
            } => Some(Self::AddMultiple {
                target: *target,
                source: *source,
                factor: -factor.clone(),
            }),
        }
    }
}

/// Ordered history of elementary operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OperationLog<R> {
    ops: Vec<ElementaryOp<R>>,
}

impl<R> Default for OperationLog<R> {
    fn default() -> Self {
        Self { ops: Vec::new() }
    }
}

impl<R: Ring> OperationLog<R> {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an operation.
    pub fn push(&mut self, op: ElementaryOp<R>) {
        self.ops.push(op);
    }

    /// Number of recorded operations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Returns true if nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Recorded operations in application order.
    pub fn iter(&self) -> impl Iterator<Item = &ElementaryOp<R>> {
        self.ops.iter()
    }

    /// Applies every operation, in order, to the rows of a copy of `m`.
    #[must_use]
    pub fn replay_rows(&self, m: &DenseMatrix<R>) -> DenseMatrix<R> {
        let mut out = m.clone();
        for op in &self.ops {
            op.apply_to_rows(&mut out);
        }
        out
    }

    /// Applies every operation, in order, to the columns of a copy of `m`.
    #[must_use]
    pub fn replay_columns(&self, m: &DenseMatrix<R>) -> DenseMatrix<R> {
        let mut out = m.clone();
        for op in &self.ops {
            op.apply_to_columns(&mut out);
        }
        out
    }

    /// The log undoing this one: inverted operations in reverse order.
    ///
    /// Returns `None` if some operation scales by a non-unit.
    #[must_use]
    pub fn inverse(&self) -> Option<Self> {
        let ops = self
            .ops
            .iter()
            .rev()
            .map(ElementaryOp::inverse)
            .collect::<Option<Vec<_>>>()?;
        Some(Self { ops })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sylvester_rings::integers::Z;
    use sylvester_rings::rationals::Q;

    fn z(rows: &[&[i64]]) -> DenseMatrix<Z> {
        DenseMatrix::from_rows(rows.iter().map(|r| r.iter().map(|&v| Z::new(v)).collect()).collect())
            .unwrap()
    }

    #[test]
    fn test_row_replay_matches_left_multiplication() {
        let mut log = OperationLog::new();
        log.push(ElementaryOp::Swap(0, 1));
        log.push(ElementaryOp::AddMultiple {
            target: 1,
            source: 0,
            factor: Z::new(-2),
        });
        let a = z(&[&[1, 2], &[3, 4]]);
        let e = log.replay_rows(&DenseMatrix::identity(2));
        assert_eq!(log.replay_rows(&a), &e * &a);
    }

    #[test]
    fn test_column_replay_matches_right_multiplication() {
        let mut log = OperationLog::new();
        log.push(ElementaryOp::AddMultiple {
            target: 1,
            source: 0,
            factor: Z::new(3),
        });
        log.push(ElementaryOp::Swap(0, 1));
        let a = z(&[&[1, 2], &[3, 4]]);
        let e = log.replay_columns(&DenseMatrix::identity(2));
        assert_eq!(log.replay_columns(&a), &a * &e);
    }

    #[test]
    fn test_inverse_log_undoes() {
        let mut log = OperationLog::new();
        log.push(ElementaryOp::Scale {
            index: 0,
            factor: Q::new(2, 3),
        });
        log.push(ElementaryOp::AddMultiple {
            target: 0,
            source: 1,
            factor: Q::from_integer(5),
        });
        log.push(ElementaryOp::Swap(0, 1));
        let m = DenseMatrix::from_rows(vec![
            vec![Q::from_integer(1), Q::from_integer(2)],
            vec![Q::from_integer(3), Q::from_integer(4)],
        ])
        .unwrap();
        let there = log.replay_rows(&m);
        assert_eq!(log.inverse().unwrap().replay_rows(&there), m);
    }

    #[test]
    fn test_non_unit_scale_has_no_inverse() {
        let mut log = OperationLog::new();
        log.push(ElementaryOp::Scale {
            index: 0,
            factor: Z::new(2),
        });
        assert!(log.inverse().is_none());
    }
}
