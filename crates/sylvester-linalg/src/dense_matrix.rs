//! Dense matrices over an arbitrary ring.
//!
//! Matrices are values: every operation that transforms a matrix returns a
//! new one. The in-place row and column mutators exist for the elimination
//! engine and for replaying recorded operations on caller-owned matrices.

use std::fmt;
use std::ops::{Add, Index, IndexMut, Mul, Neg, Sub};

use sylvester_rings::traits::Ring;

use crate::error::{LinalgError, Result};

/// Dense matrix stored in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DenseMatrix<R> {
    /// Matrix entries in row-major order.
    data: Vec<R>,
    /// Number of rows.
    num_rows: usize,
    /// Number of columns.
    num_cols: usize,
}

impl<R: Ring> DenseMatrix<R> {
    /// Creates a new matrix filled with zeros.
    #[must_use]
    pub fn zeros(num_rows: usize, num_cols: usize) -> Self {
        Self {
            data: vec![R::zero(); num_rows * num_cols],
            num_rows,
            num_cols,
        }
    }

    /// Creates a matrix whose entry (i, j) is `f(i, j)`.
    #[must_use]
    pub fn from_fn(num_rows: usize, num_cols: usize, mut f: impl FnMut(usize, usize) -> R) -> Self {
        let mut data = Vec::with_capacity(num_rows * num_cols);
        for i in 0..num_rows {
            for j in 0..num_cols {
                data.push(f(i, j));
            }
        }
        Self {
            data,
            num_rows,
            num_cols,
        }
    }

    /// Creates a matrix from a grid of rows.
    ///
    /// An empty grid gives the 0×0 matrix.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::RaggedRows`] if the rows differ in length.
    pub fn from_rows(rows: Vec<Vec<R>>) -> Result<Self> {
        let num_rows = rows.len();
        let num_cols = rows.first().map_or(0, Vec::len);
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != num_cols) {
            return Err(LinalgError::RaggedRows {
                row,
                expected: num_cols,
                found: r.len(),
            });
        }
        Ok(Self {
            data: rows.into_iter().flatten().collect(),
            num_rows,
            num_cols,
        })
    }

    /// Creates an n×1 column vector.
    #[must_use]
    pub fn column_vector(entries: Vec<R>) -> Self {
        Self {
            num_rows: entries.len(),
            num_cols: 1,
            data: entries,
        }
    }

    /// Creates a 1×n row vector.
    #[must_use]
    pub fn row_vector(entries: Vec<R>) -> Self {
        Self {
            num_rows: 1,
            num_cols: entries.len(),
            data: entries,
        }
    }

    /// Creates an identity matrix.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        Self::scalar(n, R::one())
    }

    /// Creates the n×n matrix `value * I`.
    #[must_use]
    pub fn scalar(n: usize, value: R) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m[(i, i)] = value.clone();
        }
        m
    }

    /// Creates a square diagonal matrix.
    #[must_use]
    pub fn diagonal(entries: &[R]) -> Self {
        let n = entries.len();
        let mut m = Self::zeros(n, n);
        for (i, e) in entries.iter().enumerate() {
            m[(i, i)] = e.clone();
        }
        m
    }

    /// Creates the n×n Jordan block with `eigenvalue` on the diagonal and
    /// ones on the superdiagonal.
    #[must_use]
    pub fn jordan_block(n: usize, eigenvalue: &R) -> Self {
        Self::from_fn(n, n, |i, j| {
            if i == j {
                eigenvalue.clone()
            } else if j == i + 1 {
                R::one()
            } else {
                R::zero()
            }
        })
    }

    /// Direct sum: the blocks placed along the diagonal.
    #[must_use]
    pub fn block_diagonal(blocks: &[Self]) -> Self {
        let rows = blocks.iter().map(|b| b.num_rows).sum();
        let cols = blocks.iter().map(|b| b.num_cols).sum();
        let mut m = Self::zeros(rows, cols);
        let (mut r0, mut c0) = (0, 0);
        for b in blocks {
            for i in 0..b.num_rows {
                for j in 0..b.num_cols {
                    m[(r0 + i, c0 + j)] = b[(i, j)].clone();
                }
            }
            r0 += b.num_rows;
            c0 += b.num_cols;
        }
        m
    }

    /// Direct sum of two matrices, `self` in the upper-left corner.
    #[must_use]
    pub fn direct_sum(&self, other: &Self) -> Self {
        Self::block_diagonal(&[self.clone(), other.clone()])
    }

    /// Places matrices side by side.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::ShapeMismatch`] if the row counts differ.
    pub fn concat_columns(parts: &[Self]) -> Result<Self> {
        let Some(first) = parts.first() else {
            return Ok(Self::zeros(0, 0));
        };
        if let Some(bad) = parts.iter().find(|p| p.num_rows != first.num_rows) {
            return Err(LinalgError::ShapeMismatch {
                operation: "concat_columns",
                left: first.shape(),
                right: bad.shape(),
            });
        }
        let cols = parts.iter().map(|p| p.num_cols).sum();
        let mut m = Self::zeros(first.num_rows, cols);
        let mut c0 = 0;
        for p in parts {
            for i in 0..p.num_rows {
                for j in 0..p.num_cols {
                    m[(i, c0 + j)] = p[(i, j)].clone();
                }
            }
            c0 += p.num_cols;
        }
        Ok(m)
    }

    /// Stacks matrices on top of each other.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::ShapeMismatch`] if the column counts differ.
    pub fn concat_rows(parts: &[Self]) -> Result<Self> {
        let Some(first) = parts.first() else {
            return Ok(Self::zeros(0, 0));
        };
        if let Some(bad) = parts.iter().find(|p| p.num_cols != first.num_cols) {
            return Err(LinalgError::ShapeMismatch {
                operation: "concat_rows",
                left: first.shape(),
                right: bad.shape(),
            });
        }
        Ok(Self {
            num_rows: parts.iter().map(|p| p.num_rows).sum(),
            num_cols: first.num_cols,
            data: parts.iter().flat_map(|p| p.data.iter().cloned()).collect(),
        })
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Returns `(rows, columns)`.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.num_rows, self.num_cols)
    }

    /// Checks if the matrix is square.
    #[must_use]
    pub fn is_square(&self) -> bool {
        self.num_rows == self.num_cols
    }

    /// Checks if the matrix has a single row or a single column.
    #[must_use]
    pub fn is_vector(&self) -> bool {
        self.num_rows == 1 || self.num_cols == 1
    }

    /// Checks if every entry is exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(Ring::is_zero)
    }

    /// Checks if this is a square identity matrix.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.is_square()
            && (0..self.num_rows).all(|i| {
                (0..self.num_cols).all(|j| {
                    let e = &self[(i, j)];
                    if i == j {
                        e.is_one()
                    } else {
                        e.is_zero()
                    }
                })
            })
    }

    /// Entrywise equality up to the scalar type's tolerance.
    #[must_use]
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.shape() == other.shape()
            && self.data.iter().zip(&other.data).all(|(a, b)| a.approx_eq(b))
    }

    /// Returns a reference to the entry at (row, col).
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&R> {
        if row < self.num_rows && col < self.num_cols {
            Some(&self.data[row * self.num_cols + col])
        } else {
            None
        }
    }

    /// Returns a slice of the specified row.
    #[must_use]
    pub fn row(&self, row: usize) -> &[R] {
        let start = row * self.num_cols;
        &self.data[start..start + self.num_cols]
    }

    /// Returns a column as a vector of entries.
    #[must_use]
    pub fn col(&self, col: usize) -> Vec<R> {
        (0..self.num_rows)
            .map(|row| self[(row, col)].clone())
            .collect()
    }

    /// Returns a column as an n×1 matrix.
    #[must_use]
    pub fn column(&self, col: usize) -> Self {
        Self::column_vector(self.col(col))
    }

    /// Entries in row-major order.
    #[must_use]
    pub fn entries(&self) -> &[R] {
        &self.data
    }

    /// The single entry of a 1×1 matrix.
    #[must_use]
    pub fn scalar_value(&self) -> Option<&R> {
        if self.shape() == (1, 1) {
            self.data.first()
        } else {
            None
        }
    }

    /// Returns the transpose of the matrix.
    #[must_use]
    pub fn transpose(&self) -> Self {
        Self::from_fn(self.num_cols, self.num_rows, |i, j| self[(j, i)].clone())
    }

    /// Sum of the diagonal entries.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::ShapeMismatch`] if the matrix is not square.
    pub fn trace(&self) -> Result<R> {
        self.require_square("trace")?;
        Ok((0..self.num_rows).fold(R::zero(), |acc, i| acc + self[(i, i)].clone()))
    }

    /// Applies `f` to every entry, possibly changing the scalar type.
    #[must_use]
    pub fn map<S: Ring>(&self, f: impl FnMut(&R) -> S) -> DenseMatrix<S> {
        DenseMatrix {
            data: self.data.iter().map(f).collect(),
            num_rows: self.num_rows,
            num_cols: self.num_cols,
        }
    }

    /// Scales all entries by a scalar.
    #[must_use]
    pub fn scale(&self, scalar: &R) -> Self {
        self.map(|v| v.clone() * scalar.clone())
    }

    /// Multiplies all entries by an integer.
    #[must_use]
    pub fn mul_by_int(&self, n: i64) -> Self {
        self.map(|v| v.mul_by_scalar(n))
    }

    /// Entrywise sum.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::ShapeMismatch`] if the shapes differ.
    pub fn try_add(&self, other: &Self) -> Result<Self> {
        self.zip_with("add", other, |a, b| a + b)
    }

    /// Entrywise difference.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::ShapeMismatch`] if the shapes differ.
    pub fn try_sub(&self, other: &Self) -> Result<Self> {
        self.zip_with("sub", other, |a, b| a - b)
    }

    /// Matrix product.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::ShapeMismatch`] if the column count of `self`
    /// differs from the row count of `other`.
    pub fn try_mul(&self, other: &Self) -> Result<Self> {
        if self.num_cols != other.num_rows {
            return Err(LinalgError::ShapeMismatch {
                operation: "mul",
                left: self.shape(),
                right: other.shape(),
            });
        }
        Ok(Self::from_fn(self.num_rows, other.num_cols, |i, j| {
            (0..self.num_cols).fold(R::zero(), |sum, k| {
                sum + self[(i, k)].clone() * other[(k, j)].clone()
            })
        }))
    }

    /// Raises a square matrix to a non-negative power by repeated squaring.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::ShapeMismatch`] if the matrix is not square.
    pub fn pow(&self, n: u32) -> Result<Self> {
        self.require_square("pow")?;
        let mut acc = Self::identity(self.num_rows);
        let mut base = self.clone();
        let mut exp = n;
        while exp > 0 {
            if exp & 1 == 1 {
                acc = acc.try_mul(&base)?;
            }
            exp >>= 1;
            if exp > 0 {
                base = base.try_mul(&base)?;
            }
        }
        Ok(acc)
    }

    /// Swaps two rows in-place.
    pub fn swap_rows(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        let i_start = i * self.num_cols;
        let j_start = j * self.num_cols;
        for k in 0..self.num_cols {
            self.data.swap(i_start + k, j_start + k);
        }
    }

    /// Swaps two columns in-place.
    pub fn swap_cols(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        for row in 0..self.num_rows {
            let start = row * self.num_cols;
            self.data.swap(start + i, start + j);
        }
    }

    /// Adds a scaled row to another: row[target] += scale * row[source].
    pub fn add_scaled_row(&mut self, target: usize, source: usize, scale: &R) {
        for k in 0..self.num_cols {
            let val = scale.clone() * self[(source, k)].clone();
            self[(target, k)] = self[(target, k)].clone() + val;
        }
    }

    /// Adds a scaled column to another: col[target] += col[source] * scale.
    pub fn add_scaled_col(&mut self, target: usize, source: usize, scale: &R) {
        for k in 0..self.num_rows {
            let val = self[(k, source)].clone() * scale.clone();
            self[(k, target)] = self[(k, target)].clone() + val;
        }
    }

    /// Scales a row by a scalar.
    pub fn scale_row(&mut self, row: usize, scale: &R) {
        for k in 0..self.num_cols {
            self[(row, k)] = scale.clone() * self[(row, k)].clone();
        }
    }

    /// Scales a column by a scalar.
    pub fn scale_col(&mut self, col: usize, scale: &R) {
        for k in 0..self.num_rows {
            self[(k, col)] = self[(k, col)].clone() * scale.clone();
        }
    }

    pub(crate) fn require_square(&self, operation: &'static str) -> Result<()> {
        if self.is_square() {
            Ok(())
        } else {
            Err(LinalgError::ShapeMismatch {
                operation,
                left: self.shape(),
                right: (self.num_cols, self.num_rows),
            })
        }
    }

    fn zip_with(&self, operation: &'static str, other: &Self, f: impl Fn(R, R) -> R) -> Result<Self> {
        if self.shape() != other.shape() {
            return Err(LinalgError::ShapeMismatch {
                operation,
                left: self.shape(),
                right: other.shape(),
            });
        }
        Ok(Self {
            data: self
                .data
                .iter()
                .zip(&other.data)
                .map(|(a, b)| f(a.clone(), b.clone()))
                .collect(),
            num_rows: self.num_rows,
            num_cols: self.num_cols,
        })
    }
}

impl<R> Index<(usize, usize)> for DenseMatrix<R> {
    type Output = R;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.data[row * self.num_cols + col]
    }
}

impl<R> IndexMut<(usize, usize)> for DenseMatrix<R> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.data[row * self.num_cols + col]
    }
}

fn unwrap_shape<T>(result: Result<T>) -> T {
    match result {
        Ok(v) => v,
        Err(e) => panic!("{e}"),
    }
}

/// # Panics
///
/// Panics if the shapes differ; use [`DenseMatrix::try_add`] to recover.
impl<R: Ring> Add for &DenseMatrix<R> {
    type Output = DenseMatrix<R>;

    fn add(self, other: Self) -> DenseMatrix<R> {
        unwrap_shape(self.try_add(other))
    }
}

/// # Panics
///
/// Panics if the shapes differ; use [`DenseMatrix::try_sub`] to recover.
impl<R: Ring> Sub for &DenseMatrix<R> {
    type Output = DenseMatrix<R>;

    fn sub(self, other: Self) -> DenseMatrix<R> {
        unwrap_shape(self.try_sub(other))
    }
}

/// # Panics
///
/// Panics if the inner dimensions differ; use [`DenseMatrix::try_mul`] to
/// recover.
impl<R: Ring> Mul for &DenseMatrix<R> {
    type Output = DenseMatrix<R>;

    fn mul(self, other: Self) -> DenseMatrix<R> {
        unwrap_shape(self.try_mul(other))
    }
}

impl<R: Ring> Neg for &DenseMatrix<R> {
    type Output = DenseMatrix<R>;

    fn neg(self) -> DenseMatrix<R> {
        self.map(|v| -v.clone())
    }
}

impl<R: Ring> Add for DenseMatrix<R> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        &self + &other
    }
}

impl<R: Ring> Sub for DenseMatrix<R> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        &self - &other
    }
}

impl<R: Ring> Mul for DenseMatrix<R> {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        &self * &other
    }
}

impl<R: Ring> Neg for DenseMatrix<R> {
    type Output = Self;

    fn neg(self) -> Self {
        -&self
    }
}

/// Nested-brace form, `{{1,2},{3,4}}`.
impl<R: fmt::Display> fmt::Display for DenseMatrix<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for i in 0..self.num_rows {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{{")?;
            for j in 0..self.num_cols {
                if j > 0 {
                    write!(f, ",")?;
                }
                write!(f, "{}", self.data[i * self.num_cols + j])?;
            }
            write!(f, "}}")?;
        }
        write!(f, "}}")
    }
}
