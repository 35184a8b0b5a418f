//! Spectral decompositions.
//!
//! Everything here starts from the characteristic matrix `xI - A`, a
//! matrix over the polynomial ring:
//! - its determinant is the characteristic polynomial
//! - its Smith form gives the invariant factors, the last of which is the
//!   minimal polynomial, and the left transform yields a rational canonical
//!   basis
//! - roots of the characteristic polynomial are the eigenvalues, found
//!   numerically over the complex numbers
//!
//! Jordan chains for an eigenvalue are built from the kernels of
//! `(A - λI)^k`, which always yields a full basis of the generalized
//! eigenspace.
//!
//! Floating point roots of the characteristic polynomial are polished by
//! Newton steps on `det(A - λI)` before use, until `A - λI` is singular
//! within the scalar tolerance.

use sylvester_poly::{durand_kerner, make_monic, DensePoly, RootFinderConfig};
use sylvester_rings::traits::{Field, Ring};
use sylvester_rings::{C64, R64};

use crate::dense_matrix::DenseMatrix;
use crate::error::{LinalgError, Result};

const MAX_REFINEMENT_STEPS: usize = 64;

/// Jordan normal form `A = P * J * P^-1`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JordanForm<R> {
    /// Columns are the Jordan chains, each from eigenvector upward.
    pub basis: DenseMatrix<R>,
    /// Block diagonal Jordan matrix.
    pub jordan: DenseMatrix<R>,
    /// Eigenvalue and size of each block, in order.
    pub blocks: Vec<(R, usize)>,
}

/// Rational canonical form `A = P * C * P^-1`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RationalCanonicalForm<R: Ring> {
    /// Change of basis.
    pub basis: DenseMatrix<R>,
    /// Block diagonal matrix of companion blocks.
    pub form: DenseMatrix<R>,
    /// Monic invariant factors of positive degree, one per block.
    pub invariant_factors: Vec<DensePoly<R>>,
}

/// Diagonalization `A = P * D * P^-1`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Eigendecomposition<R> {
    /// Eigenvalues, in the order of the diagonal.
    pub eigenvalues: Vec<R>,
    /// Eigenvectors as columns.
    pub eigenvectors: DenseMatrix<R>,
    /// Diagonal matrix of eigenvalues.
    pub diagonal: DenseMatrix<R>,
}

impl<R: Ring> DenseMatrix<R> {
    /// The characteristic matrix `xI - A` over the polynomial ring.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::ShapeMismatch`] if the matrix is not square.
    pub fn characteristic_matrix(&self) -> Result<DenseMatrix<DensePoly<R>>> {
        self.require_square("characteristic_matrix")?;
        let n = self.num_rows();
        Ok(DenseMatrix::from_fn(n, n, |i, j| {
            let c = -self[(i, j)].clone();
            if i == j {
                DensePoly::new(vec![c, R::one()])
            } else {
                DensePoly::constant(c)
            }
        }))
    }

    /// Evaluates `p(A)` by Horner's rule.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::ShapeMismatch`] if the matrix is not square.
    pub fn eval_polynomial(&self, p: &DensePoly<R>) -> Result<Self> {
        self.require_square("eval_polynomial")?;
        let n = self.num_rows();
        p.coeffs().iter().rev().try_fold(Self::zeros(n, n), |acc, c| {
            acc.try_mul(self)?.try_add(&Self::scalar(n, c.clone()))
        })
    }

    /// Companion matrix of `p`: ones on the subdiagonal and the negated
    /// coefficients of the monic form of `p` in the last column.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::Unsupported`] if the leading coefficient is
    /// not a unit.
    pub fn companion(p: &DensePoly<R>) -> Result<Self> {
        let inv = p
            .leading_coeff()
            .unit_inverse()
            .ok_or(LinalgError::Unsupported("companion of a polynomial with non-unit leading coefficient"))?;
        let m = p.degree();
        Ok(Self::from_fn(m, m, |i, j| {
            if j + 1 == m {
                -(p.coeff(i) * inv.clone())
            } else if i == j + 1 {
                R::one()
            } else {
                R::zero()
            }
        }))
    }
}

impl<R: Field> DenseMatrix<R> {
    /// The characteristic polynomial `det(xI - A)`.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::ShapeMismatch`] if the matrix is not square.
    #[tracing::instrument(level = "debug", skip(self), fields(n = self.num_rows()))]
    pub fn characteristic_polynomial(&self) -> Result<DensePoly<R>> {
        self.characteristic_matrix()?.determinant()
    }

    /// The minimal polynomial: the last invariant factor of `xI - A`,
    /// made monic.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::ShapeMismatch`] if the matrix is not square.
    pub fn minimal_polynomial(&self) -> Result<DensePoly<R>> {
        let snf = self.characteristic_matrix()?.smith_normal_form()?;
        Ok(snf
            .invariant_factors
            .last()
            .map_or_else(DensePoly::one, make_monic))
    }

    /// Null space of `(A - λI)^multiplicity`.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::ShapeMismatch`] if the matrix is not square.
    pub fn eigenspace(&self, eigenvalue: &R, multiplicity: u32) -> Result<Vec<Self>> {
        self.shifted(eigenvalue)?.pow(multiplicity)?.null_space()
    }

    /// Jordan chain above an eigenvector: repeatedly solves
    /// `(A - λI) x = v` for the last vector `v` until no solution exists.
    ///
    /// The chain starts with `eigenvector` and never exceeds the dimension.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::ShapeMismatch`] if the matrix is not square or
    /// the vector has the wrong length.
    pub fn jordan_chain(&self, eigenvalue: &R, eigenvector: &Self) -> Result<Vec<Self>> {
        let shifted = self.shifted(eigenvalue)?;
        let mut chain = vec![eigenvector.clone()];
        while chain.len() < self.num_rows() {
            let Some(last) = chain.last() else { break };
            match shifted.solve(last)? {
                Some(next) => chain.push(next),
                None => break,
            }
        }
        Ok(chain)
    }

    /// Jordan chains spanning the generalized eigenspace of `eigenvalue`,
    /// longest first. Each chain is listed from its eigenvector upward.
    ///
    /// Chain tops are picked level by level from the kernels of
    /// `N^k = (A - λI)^k`, keeping only vectors independent of the lower
    /// kernel and of the chains already found.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::ShapeMismatch`] if the matrix is not square.
    pub fn generalized_eigenspace(&self, eigenvalue: &R) -> Result<Vec<Vec<Self>>> {
        let n = self.num_rows();
        let shifted = self.shifted(eigenvalue)?;

        let mut kernels: Vec<Vec<Self>> = vec![Vec::new()];
        let mut power = Self::identity(n);
        while kernels.len() <= n {
            power = power.try_mul(&shifted)?;
            let kernel = power.null_space()?;
            if kernels.last().is_some_and(|k| k.len() == kernel.len()) {
                break;
            }
            kernels.push(kernel);
        }

        let mut chains: Vec<Vec<Self>> = Vec::new();
        for level in (1..kernels.len()).rev() {
            let mut span: Vec<Self> = kernels[level - 1].clone();
            span.extend(chains.iter().map(|c| c[level - 1].clone()));
            let mut rank = rank_of(&span)?;
            for candidate in &kernels[level] {
                span.push(candidate.clone());
                let extended = rank_of(&span)?;
                if extended == rank {
                    span.pop();
                    continue;
                }
                rank = extended;
                let mut chain = vec![candidate.clone()];
                for _ in 1..level {
                    let below = chain.last().map(|v| &shifted * v);
                    chain.extend(below);
                }
                chain.reverse();
                chains.push(chain);
            }
        }
        Ok(chains)
    }

    /// Jordan normal form for the given distinct eigenvalues.
    ///
    /// Returns `None` if the chains do not fill the whole space, which
    /// happens when some eigenvalue is missing from the list.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::ShapeMismatch`] if the matrix is not square.
    pub fn jordan_normal_form_with(&self, eigenvalues: &[R]) -> Result<Option<JordanForm<R>>> {
        self.require_square("jordan_normal_form")?;
        let mut columns = Vec::new();
        let mut blocks = Vec::new();
        let mut jordan_blocks = Vec::new();
        for lambda in eigenvalues {
            for chain in self.generalized_eigenspace(lambda)? {
                blocks.push((lambda.clone(), chain.len()));
                jordan_blocks.push(Self::jordan_block(chain.len(), lambda));
                columns.extend(chain);
            }
        }
        if columns.len() != self.num_rows() {
            tracing::debug!(found = columns.len(), n = self.num_rows(), "jordan chains incomplete");
            return Ok(None);
        }
        Ok(Some(JordanForm {
            basis: Self::concat_columns(&columns)?,
            jordan: Self::block_diagonal(&jordan_blocks),
            blocks,
        }))
    }

    /// Diagonalization for the given distinct eigenvalues, taking the first
    /// eigenspace vector of each. `None` unless there are as many
    /// eigenvalues as rows and every eigenspace is non-trivial.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::ShapeMismatch`] if the matrix is not square.
    pub fn eigendecomposition_with(&self, eigenvalues: &[R]) -> Result<Option<Eigendecomposition<R>>> {
        self.require_square("eigendecomposition")?;
        if eigenvalues.len() != self.num_rows() {
            return Ok(None);
        }
        let mut vectors = Vec::with_capacity(eigenvalues.len());
        for lambda in eigenvalues {
            match self.eigenspace(lambda, 1)?.into_iter().next() {
                Some(v) => vectors.push(v),
                None => return Ok(None),
            }
        }
        Ok(Some(Eigendecomposition {
            eigenvalues: eigenvalues.to_vec(),
            eigenvectors: Self::concat_columns(&vectors)?,
            diagonal: Self::diagonal(eigenvalues),
        }))
    }

    /// Rational canonical form from the invariant factors of `xI - A`.
    ///
    /// Each invariant factor `d` of positive degree contributes a companion
    /// block. Its basis vectors are `g, A g, ..., A^(deg d - 1) g`, where
    /// `g` is the image of the matching column of the inverse left Smith
    /// transform evaluated at A.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::ShapeMismatch`] if the matrix is not square.
    #[tracing::instrument(level = "debug", skip(self), fields(n = self.num_rows()))]
    pub fn rational_canonical_form(&self) -> Result<RationalCanonicalForm<R>> {
        let n = self.num_rows();
        let snf = self.characteristic_matrix()?.smith_normal_form()?;
        let generators = snf
            .left_inverse()
            .ok_or(LinalgError::Unsupported("rational canonical form with a non-invertible left transform"))?;

        let mut columns = Vec::with_capacity(n);
        let mut blocks = Vec::new();
        let mut invariant_factors = Vec::new();
        for (i, factor) in snf.invariant_factors.iter().enumerate() {
            let factor = make_monic(&factor.clone().trim_approx());
            if factor.degree() == 0 {
                continue;
            }
            let mut v = Self::zeros(n, 1);
            for j in 0..n {
                let image = self.eval_polynomial(&generators[(j, i)])?.column(j);
                v = v.try_add(&image)?;
            }
            for _ in 0..factor.degree() {
                let next = self.try_mul(&v)?;
                columns.push(v);
                v = next;
            }
            blocks.push(Self::companion(&factor)?);
            invariant_factors.push(factor);
        }
        tracing::debug!(blocks = blocks.len(), "rational canonical form computed");

        Ok(RationalCanonicalForm {
            basis: Self::concat_columns(&columns)?,
            form: Self::block_diagonal(&blocks),
            invariant_factors,
        })
    }

    /// Polishes an approximate eigenvalue with Newton's method on
    /// `det(A - λI)`, using `d/dλ log det(A - λI) = -tr((A - λI)^-1)`.
    ///
    /// Stops as soon as `A - λI` has no inverse, so the eigenspace of the
    /// result is non-trivial under the same pivot tolerance. Meant for
    /// floating point scalars; exact fields return an exact eigenvalue
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::ShapeMismatch`] if the matrix is not square.
    pub fn refine_eigenvalue(&self, approximation: &R) -> Result<R> {
        let mut lambda = approximation.clone();
        for _ in 0..MAX_REFINEMENT_STEPS {
            let Some(resolvent) = self.shifted(&lambda)?.inverse()? else {
                break;
            };
            let Some(step) = resolvent.trace()?.unit_inverse() else {
                break;
            };
            lambda = lambda + step;
        }
        Ok(lambda)
    }

    fn shifted(&self, eigenvalue: &R) -> Result<Self> {
        self.try_sub(&Self::scalar(self.num_rows(), eigenvalue.clone()))
    }
}

fn rank_of<R: Ring>(vectors: &[DenseMatrix<R>]) -> Result<usize> {
    if vectors.is_empty() {
        return Ok(0);
    }
    DenseMatrix::concat_columns(vectors)?.rank()
}

impl DenseMatrix<C64> {
    /// Distinct complex eigenvalues with the default root finder.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::ShapeMismatch`] if the matrix is not square.
    pub fn eigenvalues(&self) -> Result<Vec<C64>> {
        self.eigenvalues_with(&RootFinderConfig::default())
    }

    /// Distinct complex eigenvalues: the roots of the characteristic
    /// polynomial found by Durand–Kerner iteration, each refined against
    /// the matrix with [`DenseMatrix::refine_eigenvalue`].
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::ShapeMismatch`] if the matrix is not square.
    pub fn eigenvalues_with(&self, config: &RootFinderConfig) -> Result<Vec<C64>> {
        let mut values: Vec<C64> = Vec::new();
        for root in durand_kerner(&self.characteristic_polynomial()?, config) {
            let lambda = self.refine_eigenvalue(&root)?;
            if !values.iter().any(|v| v.approx_eq(&lambda)) {
                values.push(lambda);
            }
        }
        Ok(values)
    }

    /// Jordan normal form over the complex numbers.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::ShapeMismatch`] if the matrix is not square.
    pub fn jordan_normal_form(&self) -> Result<Option<JordanForm<C64>>> {
        self.jordan_normal_form_with(&self.eigenvalues()?)
    }

    /// Diagonalization over the complex numbers, `None` if some eigenvalue
    /// is repeated.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::ShapeMismatch`] if the matrix is not square.
    pub fn eigendecomposition(&self) -> Result<Option<Eigendecomposition<C64>>> {
        self.eigendecomposition_with(&self.eigenvalues()?)
    }

    /// `A^n` as `P * D^n * P^-1` from the eigendecomposition, `None` if the
    /// matrix is not diagonalizable.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::ShapeMismatch`] if the matrix is not square.
    pub fn pow_diagonalized(&self, n: u32) -> Result<Option<Self>> {
        let Some(eig) = self.eigendecomposition()? else {
            return Ok(None);
        };
        let Some(p_inv) = eig.eigenvectors.inverse()? else {
            return Ok(None);
        };
        let powers: Vec<C64> = eig.eigenvalues.iter().map(|lambda| lambda.pow(n)).collect();
        Ok(Some(eig.eigenvectors.try_mul(&Self::diagonal(&powers))?.try_mul(&p_inv)?))
    }
}

impl DenseMatrix<R64> {
    fn to_complex(&self) -> DenseMatrix<C64> {
        self.map(|&x| C64::from(x))
    }

    /// Distinct real eigenvalues with the default root finder.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::ShapeMismatch`] if the matrix is not square.
    pub fn eigenvalues(&self) -> Result<Vec<R64>> {
        self.eigenvalues_with(&RootFinderConfig::default())
    }

    /// Distinct real eigenvalues: the complex eigenvalues whose imaginary
    /// part is zero within tolerance.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::ShapeMismatch`] if the matrix is not square.
    pub fn eigenvalues_with(&self, config: &RootFinderConfig) -> Result<Vec<R64>> {
        Ok(self
            .to_complex()
            .eigenvalues_with(config)?
            .into_iter()
            .filter(|z| z.is_approx_real())
            .map(|z| R64(z.re()))
            .collect())
    }

    /// Jordan normal form over the reals, `None` if some eigenvalue is not
    /// real.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::ShapeMismatch`] if the matrix is not square.
    pub fn jordan_normal_form(&self) -> Result<Option<JordanForm<R64>>> {
        self.jordan_normal_form_with(&self.eigenvalues()?)
    }

    /// Diagonalization over the reals, `None` unless there are as many
    /// distinct real eigenvalues as rows.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::ShapeMismatch`] if the matrix is not square.
    pub fn eigendecomposition(&self) -> Result<Option<Eigendecomposition<R64>>> {
        self.eigendecomposition_with(&self.eigenvalues()?)
    }

    /// `A^n` through the complex eigendecomposition, keeping real parts.
    /// `None` if the matrix is not diagonalizable over the complex numbers.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::ShapeMismatch`] if the matrix is not square.
    pub fn pow_diagonalized(&self, n: u32) -> Result<Option<Self>> {
        Ok(self
            .to_complex()
            .pow_diagonalized(n)?
            .map(|m| m.map(|z| R64(z.re()))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sylvester_rings::rationals::Q;

    fn q(rows: &[&[i64]]) -> DenseMatrix<Q> {
        DenseMatrix::from_rows(
            rows.iter()
                .map(|r| r.iter().map(|&v| Q::from_integer(v)).collect())
                .collect(),
        )
        .unwrap()
    }

    fn qp(coeffs: &[i64]) -> DensePoly<Q> {
        DensePoly::new(coeffs.iter().map(|&c| Q::from_integer(c)).collect())
    }

    #[test]
    fn test_characteristic_polynomial() {
        // x^2 - 5x - 2
        assert_eq!(q(&[&[1, 2], &[3, 4]]).characteristic_polynomial().unwrap(), qp(&[-2, -5, 1]));
        // (x - 2)^2 (x - 3)
        let a = q(&[&[2, 1, 0], &[0, 2, 0], &[0, 0, 3]]);
        assert_eq!(a.characteristic_polynomial().unwrap(), qp(&[-12, 16, -7, 1]));
    }

    #[test]
    fn test_minimal_polynomial() {
        // diag(2, 2, 3): (x - 2)(x - 3)
        let a = q(&[&[2, 0, 0], &[0, 2, 0], &[0, 0, 3]]);
        assert_eq!(a.minimal_polynomial().unwrap(), qp(&[6, -5, 1]));
        let m = a.minimal_polynomial().unwrap();
        assert!(a.eval_polynomial(&m).unwrap().is_zero());
    }

    #[test]
    fn test_companion_has_polynomial_as_characteristic() {
        let p = qp(&[6, -5, 1]);
        let c = DenseMatrix::companion(&p).unwrap();
        assert_eq!(c, q(&[&[0, -6], &[1, 5]]));
        assert_eq!(c.characteristic_polynomial().unwrap(), p);
        assert!(DenseMatrix::<Q>::companion(&qp(&[1])).unwrap().shape() == (0, 0));
    }

    #[test]
    fn test_eigenspace() {
        let a = q(&[&[2, 1], &[0, 2]]);
        assert_eq!(a.eigenspace(&Q::from_integer(2), 1).unwrap().len(), 1);
        assert_eq!(a.eigenspace(&Q::from_integer(2), 2).unwrap().len(), 2);
        assert!(a.eigenspace(&Q::from_integer(5), 1).unwrap().is_empty());
    }

    #[test]
    fn test_jordan_chain_by_solving() {
        let a = q(&[&[2, 1], &[0, 2]]);
        let v = DenseMatrix::column_vector(vec![Q::from_integer(1), Q::from_integer(0)]);
        let chain = a.jordan_chain(&Q::from_integer(2), &v).unwrap();
        assert_eq!(chain.len(), 2);
        let n = &a - &DenseMatrix::scalar(2, Q::from_integer(2));
        assert_eq!(&n * &chain[1], chain[0]);
    }

    #[test]
    fn test_generalized_eigenspace_mixed_blocks() {
        // J2(1) + J1(1)
        let a = q(&[&[1, 1, 0], &[0, 1, 0], &[0, 0, 1]]);
        let chains = a.generalized_eigenspace(&Q::from_integer(1)).unwrap();
        let lengths: Vec<usize> = chains.iter().map(Vec::len).collect();
        assert_eq!(lengths, vec![2, 1]);
    }

    #[test]
    fn test_jordan_normal_form_with() {
        let a = q(&[&[2, 1, 0], &[0, 2, 0], &[0, 0, 3]]);
        let jf = a
            .jordan_normal_form_with(&[Q::from_integer(2), Q::from_integer(3)])
            .unwrap()
            .unwrap();
        assert_eq!(jf.blocks, vec![(Q::from_integer(2), 2), (Q::from_integer(3), 1)]);
        assert_eq!(jf.jordan, a);
        assert_eq!(&a * &jf.basis, &jf.basis * &jf.jordan);
        // missing eigenvalue
        assert_eq!(a.jordan_normal_form_with(&[Q::from_integer(2)]).unwrap(), None);
    }

    #[test]
    fn test_rational_canonical_form() {
        let a = q(&[&[2, 0, 0], &[0, 2, 0], &[0, 0, 3]]);
        let rcf = a.rational_canonical_form().unwrap();
        assert_eq!(rcf.invariant_factors, vec![qp(&[-2, 1]), qp(&[6, -5, 1])]);
        assert_eq!(rcf.form, q(&[&[2, 0, 0], &[0, 0, -6], &[0, 1, 5]]));
        assert_eq!(&a * &rcf.basis, &rcf.basis * &rcf.form);
        assert!(rcf.basis.inverse().unwrap().is_some());
    }

    #[test]
    fn test_real_eigenvalues_drop_complex_roots() {
        // rotation by 90 degrees
        let rot = DenseMatrix::from_rows(vec![vec![R64(0.0), R64(-1.0)], vec![R64(1.0), R64(0.0)]]).unwrap();
        assert!(rot.eigenvalues().unwrap().is_empty());
        assert_eq!(rot.eigendecomposition().unwrap(), None);
        assert_eq!(rot.to_complex().eigenvalues().unwrap().len(), 2);
    }
}
