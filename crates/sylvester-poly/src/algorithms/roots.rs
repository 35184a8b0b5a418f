//! Numerical root finding for complex polynomials.
//!
//! - Laguerre's method polishes a single root from a starting guess
//! - Durand–Kerner (Weierstrass) iteration finds all roots at once
//!
//! Both stop when successive iterates agree componentwise within the
//! configured tolerance, or when the iteration cap is reached.

use sylvester_rings::traits::Ring;
use sylvester_rings::{C64, R64};

use crate::algorithms::squarefree::square_free_part;
use crate::dense::DensePoly;

/// Configuration for the iterative root finders.
#[derive(Clone, Copy, Debug)]
pub struct RootFinderConfig {
    /// Componentwise tolerance for declaring convergence.
    pub tolerance: f64,
    /// Upper bound on iterations (Laguerre) or sweeps (Durand–Kerner).
    pub max_iterations: usize,
    /// Seed; Durand–Kerner starts root `i` at `start^i`. Must not be real
    /// or a root of unity.
    pub start: C64,
}

impl Default for RootFinderConfig {
    fn default() -> Self {
        Self {
            tolerance: R64::EPSILON,
            max_iterations: 10_000,
            start: C64::new(0.4, 0.9),
        }
    }
}

impl RootFinderConfig {
    fn converged(&self, old: C64, new: C64) -> bool {
        (old.re() - new.re()).abs() < self.tolerance && (old.im() - new.im()).abs() < self.tolerance
    }
}

/// Finds one root of `p` with Laguerre's method starting from `start`.
///
/// Returns `None` for constant polynomials.
#[tracing::instrument(level = "debug", skip(p, config), fields(degree = p.degree()))]
#[must_use]
pub fn laguerre(p: &DensePoly<C64>, start: C64, config: &RootFinderConfig) -> Option<C64> {
    let n = p.degree();
    if n == 0 {
        return None;
    }
    let d1 = p.derivative();
    let d2 = d1.derivative();
    #[allow(clippy::cast_precision_loss)]
    let deg = C64::from(n as f64);
    let deg_minus_one = deg - C64::one();

    let mut x = start;
    for _ in 0..config.max_iterations {
        let y = p.eval(&x);
        let Some(y_inv) = y.unit_inverse() else {
            return Some(x);
        };
        let g = d1.eval(&x) * y_inv;
        let g2 = g * g;
        let h = g2 - d2.eval(&x) * y_inv;
        let root = (deg_minus_one * (deg * h - g2)).sqrt();
        let (plus, minus) = (g + root, g - root);
        let denom = if minus.abs() > plus.abs() { minus } else { plus };
        let Some(denom_inv) = denom.unit_inverse() else {
            return Some(x);
        };
        let next = x - deg * denom_inv;
        if config.converged(x, next) {
            return Some(next);
        }
        x = next;
    }
    tracing::warn!(max_iterations = config.max_iterations, "laguerre did not converge");
    Some(x)
}

/// Finds all distinct roots of `p` with Durand–Kerner iteration.
///
/// Repeated roots are reported once: the iteration runs on the monic
/// square-free part of `p`. Returns an empty vector for constants.
#[tracing::instrument(level = "debug", skip(p, config), fields(degree = p.degree()))]
#[must_use]
pub fn durand_kerner(p: &DensePoly<C64>, config: &RootFinderConfig) -> Vec<C64> {
    let p = square_free_part(p);
    let n = p.degree();
    if n == 0 {
        return Vec::new();
    }

    let mut roots: Vec<C64> = (0..n)
        .map(|i| config.start.pow(u32::try_from(i).unwrap_or(u32::MAX)))
        .collect();
    let mut done = vec![false; n];

    for sweep in 0..config.max_iterations {
        for i in 0..n {
            if done[i] {
                continue;
            }
            let old = roots[i];
            let denom = (0..n)
                .filter(|&j| j != i)
                .fold(C64::one(), |acc, j| acc * (old - roots[j]));
            let Some(denom_inv) = denom.unit_inverse() else {
                continue;
            };
            roots[i] = old - p.eval(&old) * denom_inv;
            if config.converged(old, roots[i]) {
                done[i] = true;
            }
        }
        if done.iter().all(|&d| d) {
            tracing::debug!(sweeps = sweep + 1, "durand-kerner converged");
            return roots;
        }
    }
    tracing::warn!(max_iterations = config.max_iterations, "durand-kerner did not converge");
    roots
}

/// All distinct complex roots with the default configuration.
#[must_use]
pub fn find_roots(p: &DensePoly<C64>) -> Vec<C64> {
    durand_kerner(p, &RootFinderConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn real_poly(coeffs: &[f64]) -> DensePoly<C64> {
        DensePoly::new(coeffs.iter().map(|&c| C64::from(c)).collect())
    }

    fn sorted_by_re(mut roots: Vec<C64>) -> Vec<C64> {
        roots.sort_by(|a, b| a.re().total_cmp(&b.re()).then(a.im().total_cmp(&b.im())));
        roots
    }

    #[test]
    fn test_golden_ratio_roots() {
        // x^2 - x - 1
        let roots = sorted_by_re(find_roots(&real_poly(&[-1.0, -1.0, 1.0])));
        assert_eq!(roots.len(), 2);
        assert_abs_diff_eq!(roots[0].re(), -0.618_033_988_7, epsilon = 1e-9);
        assert_abs_diff_eq!(roots[1].re(), 1.618_033_988_7, epsilon = 1e-9);
        assert!(roots.iter().all(|r| r.is_approx_real()));
    }

    #[test]
    fn test_complex_roots() {
        // x^2 + 1
        let roots = sorted_by_re(find_roots(&real_poly(&[1.0, 0.0, 1.0])));
        assert_eq!(roots.len(), 2);
        for r in &roots {
            assert_abs_diff_eq!(r.re(), 0.0, epsilon = 1e-9);
            assert_abs_diff_eq!(r.im().abs(), 1.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_repeated_roots_reported_once() {
        // (x - 2)^2 (x + 1) = x^3 - 3x^2 + 4
        let roots = sorted_by_re(find_roots(&real_poly(&[4.0, 0.0, -3.0, 1.0])));
        assert_eq!(roots.len(), 2);
        assert_abs_diff_eq!(roots[0].re(), -1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(roots[1].re(), 2.0, epsilon = 1e-9);
    }

    #[test]
    fn test_constant_has_no_roots() {
        assert!(find_roots(&real_poly(&[3.0])).is_empty());
        assert_eq!(laguerre(&real_poly(&[3.0]), C64::zero(), &RootFinderConfig::default()), None);
    }

    #[test]
    fn test_laguerre_single_root() {
        // x^3 - 6x^2 + 11x - 6 = (x - 1)(x - 2)(x - 3)
        let p = real_poly(&[-6.0, 11.0, -6.0, 1.0]);
        let root = laguerre(&p, C64::new(3.4, 0.1), &RootFinderConfig::default()).unwrap();
        assert!(p.eval(&root).abs() < 1e-9);
    }
}
