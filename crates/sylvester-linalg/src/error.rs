//! Error type for matrix operations.
//!
//! Only hard failures are errors. Outcomes that are part of the
//! mathematics (a singular matrix has no inverse, an inconsistent system
//! has no solution) are reported as `None` by the operations themselves.

use thiserror::Error;

/// Hard failures of matrix operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LinalgError {
    /// Operand dimensions are incompatible.
    #[error("shape mismatch in {operation}: {left:?} vs {right:?}")]
    ShapeMismatch {
        /// The operation that was attempted.
        operation: &'static str,
        /// Shape (rows, columns) of the left operand.
        left: (usize, usize),
        /// Shape (rows, columns) of the right operand.
        right: (usize, usize),
    },

    /// Rows of a literal grid have different lengths.
    #[error("row {row} has {found} entries, expected {expected}")]
    RaggedRows {
        /// Index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },

    /// A column has nonzero entries but none of them is a unit, and the
    /// scalar type offers no Euclidean fallback.
    #[error("no pivot found in column {column}")]
    NoPivotFound {
        /// The column being reduced.
        column: usize,
    },

    /// The scalar type lacks a capability the operation needs.
    #[error("unsupported operation: {0}")]
    Unsupported(&'static str),
}

/// Result type for matrix operations.
pub type Result<T> = std::result::Result<T, LinalgError>;
