//! Leading eigenpairs of a symmetric positive semi-definite matrix.

use ndarray::{Array1, Array2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::ProjectConfig;

/// Norm below which a vector is treated as zero.
const ZERO_NORM: f64 = 1e-300;

/// Extracts the `n_components` largest eigenpairs of `sym` by power
/// iteration with deflation.
///
/// Each new direction is re-orthogonalised against the earlier ones on
/// every step, so the returned vectors are orthonormal even when the
/// remaining spectrum is degenerate or zero. Each vector is sign-fixed so
/// that its largest-magnitude entry is positive. Eigenvalues are Rayleigh
/// quotients against the undeflated matrix, clamped at 0, and come out in
/// non-increasing order.
///
/// # Panics
///
/// Debug-asserts that `sym` is square and `n_components <= sym.nrows()`.
pub(crate) fn top_eigenpairs(
    sym: &Array2<f64>,
    n_components: usize,
    config: &ProjectConfig,
) -> Vec<(f64, Array1<f64>)> {
    let d = sym.nrows();
    debug_assert_eq!(d, sym.ncols());
    debug_assert!(n_components <= d);

    let mut work = sym.clone();
    let mut rng = StdRng::seed_from_u64(config.seed());
    let mut found: Vec<Array1<f64>> = Vec::with_capacity(n_components);
    let mut out = Vec::with_capacity(n_components);

    for _ in 0..n_components {
        let mut v = start_vector(d, &found, &mut rng);

        for _ in 0..config.max_iter() {
            let mut w = work.dot(&v);
            orthogonalise(&mut w, &found);
            let norm = w.dot(&w).sqrt();
            if norm < ZERO_NORM {
                // Remaining spectrum is zero: any orthonormal v is an eigenvector.
                break;
            }
            w /= norm;
            let minus = &w - &v;
            let plus = &w + &v;
            let step = minus.dot(&minus).min(plus.dot(&plus)).sqrt();
            v = w;
            if step < config.tol() {
                break;
            }
        }

        fix_sign(&mut v);
        let eigenvalue = v.dot(&sym.dot(&v)).max(0.0);

        // Deflate: work -= λ v vᵀ
        for i in 0..d {
            for j in 0..d {
                work[[i, j]] -= eigenvalue * v[i] * v[j];
            }
        }

        found.push(v.clone());
        out.push((eigenvalue, v));
    }

    // Unconverged near-degenerate pairs can come out swapped.
    out.sort_by(|a, b| b.0.total_cmp(&a.0));
    out
}

/// Random unit vector orthogonal to `found`; falls back to basis vectors if
/// the random draw collapses.
fn start_vector(d: usize, found: &[Array1<f64>], rng: &mut impl Rng) -> Array1<f64> {
    let mut v: Array1<f64> = (0..d).map(|_| rng.random_range(-1.0..1.0)).collect();
    orthogonalise(&mut v, found);
    let norm = v.dot(&v).sqrt();
    if norm > 1e-8 {
        return v / norm;
    }

    for j in 0..d {
        let mut e = Array1::zeros(d);
        e[j] = 1.0;
        orthogonalise(&mut e, found);
        let norm = e.dot(&e).sqrt();
        if norm > 1e-8 {
            return e / norm;
        }
    }
    unreachable!("fewer than d orthonormal vectors always leave a free basis direction")
}

/// Gram-Schmidt projection of `v` off every vector in `basis`.
fn orthogonalise(v: &mut Array1<f64>, basis: &[Array1<f64>]) {
    for b in basis {
        let dot = v.dot(b);
        v.scaled_add(-dot, b);
    }
}

/// Flips `v` so that its largest-magnitude entry is positive.
fn fix_sign(v: &mut Array1<f64>) {
    let mut pivot = 0.0_f64;
    for &x in v.iter() {
        if x.abs() > pivot.abs() {
            pivot = x;
        }
    }
    if pivot < 0.0 {
        v.mapv_inplace(|x| -x);
    }
}
