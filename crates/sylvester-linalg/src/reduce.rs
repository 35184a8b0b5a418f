//! Row reduction over an arbitrary ring.
//!
//! Columns are processed left to right. For each column the engine looks
//! for a unit pivot at or below the current row, swapping it into place.
//! If the column has nonzero entries but no unit:
//! - in echelon mode over a Euclidean ring, every nonzero row is scaled so
//!   its entry becomes the LCM of the column, then the pivot row is
//!   subtracted from the others
//! - otherwise reduction stops with [`LinalgError::NoPivotFound`]
//!
//! Cleared entries are set to exact zero after elimination so that
//! floating point residue never masquerades as a pivot later.

use sylvester_rings::traits::{EuclideanOps, Ring};

use crate::dense_matrix::DenseMatrix;
use crate::error::{LinalgError, Result};
use crate::operation::{ElementaryOp, OperationLog};

/// Target form of a reduction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReduceMode {
    /// Row echelon form: entries below each pivot are cleared.
    #[default]
    Echelon,
    /// Reduced row echelon form: pivots are one and are the only nonzero
    /// entries of their columns.
    Reduced,
}

/// Options for [`DenseMatrix::reduce`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReduceOptions {
    /// Target form.
    pub mode: ReduceMode,
    /// Whether to keep the history of applied operations.
    pub record_operations: bool,
}

impl Default for ReduceOptions {
    fn default() -> Self {
        Self {
            mode: ReduceMode::Echelon,
            record_operations: true,
        }
    }
}

impl ReduceOptions {
    /// Row echelon form with history.
    #[must_use]
    pub fn echelon() -> Self {
        Self::default()
    }

    /// Reduced row echelon form with history.
    #[must_use]
    pub fn reduced() -> Self {
        Self {
            mode: ReduceMode::Reduced,
            ..Self::default()
        }
    }

    /// Disables history recording.
    #[must_use]
    pub fn without_history(self) -> Self {
        Self {
            record_operations: false,
            ..self
        }
    }
}

/// Outcome of a row reduction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reduction<R> {
    /// The reduced matrix.
    pub matrix: DenseMatrix<R>,
    /// Number of pivots.
    pub rank: usize,
    /// Column of each pivot, by pivot row.
    pub pivot_columns: Vec<usize>,
    /// Applied row operations, empty unless recording was requested.
    pub operations: OperationLog<R>,
}

impl<R: Ring> Reduction<R> {
    /// Columns without a pivot, in increasing order.
    #[must_use]
    pub fn free_columns(&self) -> Vec<usize> {
        (0..self.matrix.num_cols())
            .filter(|c| !self.pivot_columns.contains(c))
            .collect()
    }
}

struct Reducer<R> {
    m: DenseMatrix<R>,
    log: OperationLog<R>,
    record: bool,
}

impl<R: Ring> Reducer<R> {
    fn apply(&mut self, op: ElementaryOp<R>) {
        op.apply_to_rows(&mut self.m);
        if self.record {
            self.log.push(op);
        }
    }

    fn clear(&mut self, target: usize, source: usize, col: usize, factor: R) {
        self.apply(ElementaryOp::AddMultiple {
            target,
            source,
            factor,
        });
        self.m[(target, col)] = R::zero();
    }

    /// Pivots on a unit at (row, col). In reduced mode the pivot row is
    /// normalized and every other row is cleared.
    fn unit_pivot(&mut self, row: usize, col: usize, mode: ReduceMode) {
        let rows = self.m.num_rows();
        match mode {
            ReduceMode::Echelon => {
                let Some(inv) = self.m[(row, col)].unit_inverse() else {
                    return;
                };
                for i in row + 1..rows {
                    if self.m[(i, col)].is_zero() {
                        continue;
                    }
                    let factor = -(self.m[(i, col)].clone() * inv.clone());
                    self.clear(i, row, col, factor);
                }
            }
            ReduceMode::Reduced => {
                if !self.m[(row, col)].is_one() {
                    let Some(inv) = self.m[(row, col)].unit_inverse() else {
                        return;
                    };
                    self.apply(ElementaryOp::Scale {
                        index: row,
                        factor: inv,
                    });
                    self.m[(row, col)] = R::one();
                }
                for i in (0..rows).filter(|&i| i != row) {
                    if self.m[(i, col)].is_zero() {
                        continue;
                    }
                    let factor = -self.m[(i, col)].clone();
                    self.clear(i, row, col, factor);
                }
            }
        }
    }

    /// Scales every nonzero row at or below `row` so its entry in `col`
    /// becomes the LCM of those entries, then subtracts the pivot row.
    fn lcm_pivot(&mut self, row: usize, col: usize, ops: &EuclideanOps<R>) {
        let rows = self.m.num_rows();
        if self.m[(row, col)].is_approx_zero() {
            if let Some(i) = (row + 1..rows).find(|&i| !self.m[(i, col)].is_approx_zero()) {
                self.apply(ElementaryOp::Swap(row, i));
            }
        }
        let targets: Vec<usize> = (row..rows)
            .filter(|&i| !self.m[(i, col)].is_approx_zero())
            .collect();
        let lcm = targets
            .iter()
            .fold(self.m[(row, col)].clone(), |acc, &i| ops.lcm(&acc, &self.m[(i, col)]));
        tracing::debug!(row, col, rows_scaled = targets.len(), "no unit pivot, scaling rows to lcm");

        for &i in &targets {
            let factor = ops.quotient(&lcm, &self.m[(i, col)]);
            if !factor.is_one() {
                self.apply(ElementaryOp::Scale { index: i, factor });
            }
        }
        for &i in targets.iter().filter(|&&i| i != row) {
            self.clear(i, row, col, -R::one());
        }
    }
}

impl<R: Ring> DenseMatrix<R> {
    /// Row reduces the matrix.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::NoPivotFound`] when a column has nonzero
    /// entries, none of them a unit, and either the mode is
    /// [`ReduceMode::Reduced`] or the scalar type is not Euclidean.
    #[tracing::instrument(
        level = "debug",
        skip(self, options),
        fields(rows = self.num_rows(), cols = self.num_cols(), mode = ?options.mode)
    )]
    pub fn reduce(&self, options: &ReduceOptions) -> Result<Reduction<R>> {
        let (rows, cols) = self.shape();
        let mut reducer = Reducer {
            m: self.clone(),
            log: OperationLog::new(),
            record: options.record_operations,
        };
        let mut pivot_columns = Vec::new();
        let mut row = 0;

        for col in 0..cols {
            if row >= rows {
                break;
            }

            if let Some(p) = (row..rows).find(|&i| reducer.m[(i, col)].is_unit()) {
                if p != row {
                    reducer.apply(ElementaryOp::Swap(row, p));
                }
                reducer.unit_pivot(row, col, options.mode);
            } else {
                if (row..rows).all(|i| reducer.m[(i, col)].is_approx_zero()) {
                    for i in row..rows {
                        reducer.m[(i, col)] = R::zero();
                    }
                    continue;
                }
                match (options.mode, R::euclidean()) {
                    (ReduceMode::Echelon, Some(ops)) => reducer.lcm_pivot(row, col, &ops),
                    _ => return Err(LinalgError::NoPivotFound { column: col }),
                }
            }

            for i in row + 1..rows {
                if reducer.m[(i, col)].is_approx_zero() {
                    reducer.m[(i, col)] = R::zero();
                }
            }
            pivot_columns.push(col);
            row += 1;
        }

        tracing::debug!(rank = row, ops = reducer.log.len(), "reduction finished");
        Ok(Reduction {
            matrix: reducer.m,
            rank: row,
            pivot_columns,
            operations: reducer.log,
        })
    }

    /// Row echelon form with recorded history.
    ///
    /// # Errors
    ///
    /// See [`DenseMatrix::reduce`].
    pub fn echelon_form(&self) -> Result<Reduction<R>> {
        self.reduce(&ReduceOptions::echelon())
    }

    /// Reduced row echelon form with recorded history.
    ///
    /// # Errors
    ///
    /// See [`DenseMatrix::reduce`].
    pub fn rref(&self) -> Result<Reduction<R>> {
        self.reduce(&ReduceOptions::reduced())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sylvester_poly::DensePoly;
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

    #[test]
    fn test_rref_over_field() {
        let red = q(&[&[1, 2, 3], &[2, 4, 7], &[1, 2, 4]]).rref().unwrap();
        assert_eq!(red.rank, 2);
        assert_eq!(red.pivot_columns, vec![0, 2]);
        assert_eq!(red.free_columns(), vec![1]);
        assert_eq!(red.matrix, q(&[&[1, 2, 0], &[0, 0, 1], &[0, 0, 0]]));
    }

    #[test]
    fn test_history_replays_to_result() {
        let a = q(&[&[0, 2, 1], &[3, 1, 0], &[6, 4, 1]]);
        for options in [ReduceOptions::echelon(), ReduceOptions::reduced()] {
            let red = a.reduce(&options).unwrap();
            assert_eq!(red.operations.replay_rows(&a), red.matrix);
            let transform = red.operations.replay_rows(&DenseMatrix::identity(3));
            assert_eq!(&transform * &a, red.matrix);
        }
    }

    #[test]
    fn test_history_can_be_disabled() {
        let red = q(&[&[0, 1], &[1, 0]])
            .reduce(&ReduceOptions::echelon().without_history())
            .unwrap();
        assert!(red.operations.is_empty());
        assert_eq!(red.rank, 2);
    }

    #[test]
    fn test_lcm_fallback_over_integers() {
        let a = z(&[&[4, 1], &[6, 1]]);
        let red = a.echelon_form().unwrap();
        assert_eq!(red.rank, 2);
        // both rows scaled to 12 then subtracted
        assert_eq!(red.matrix[(0, 0)], Z::new(12));
        assert_eq!(red.matrix[(1, 0)], Z::new(0));
        assert_eq!(red.operations.replay_rows(&a), red.matrix);
    }

    #[test]
    fn test_lcm_fallback_swaps_in_nonzero_pivot() {
        let red = z(&[&[0, 1], &[2, 1], &[4, 0]]).echelon_form().unwrap();
        assert_eq!(red.pivot_columns, vec![0, 1]);
        assert!(!red.matrix[(0, 0)].is_zero());
        assert!(red.matrix[(1, 0)].is_zero() && red.matrix[(2, 0)].is_zero());
    }

    #[test]
    fn test_no_pivot_in_reduced_mode_over_integers() {
        let err = z(&[&[2, 1], &[4, 3]]).rref().unwrap_err();
        assert_eq!(err, LinalgError::NoPivotFound { column: 0 });
    }

    #[test]
    fn test_no_pivot_without_euclidean_structure() {
        // x and 2 over Z[x]: neither is a unit and Z[x] is not Euclidean.
        let x = DensePoly::new(vec![Z::new(0), Z::new(1)]);
        let two = DensePoly::constant(Z::new(2));
        let m = DenseMatrix::from_rows(vec![vec![x], vec![two]]).unwrap();
        assert_eq!(m.echelon_form().unwrap_err(), LinalgError::NoPivotFound { column: 0 });
    }

    #[test]
    fn test_float_residue_cleared() {
        let a = DenseMatrix::from_rows(vec![
            vec![R64(0.1), R64(0.2)],
            vec![R64(0.3), R64(0.6 + 1e-13)],
        ])
        .unwrap();
        let red = a.echelon_form().unwrap();
        assert_eq!(red.rank, 1);
        assert!(red.matrix[(1, 0)].is_zero());
        assert!(red.matrix[(1, 1)].is_zero());
    }
}
