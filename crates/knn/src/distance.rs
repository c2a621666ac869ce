//! Squared Euclidean distance computation.

/// Computes squared Euclidean distances from `query` to every row.
///
/// For each row `i`:
/// ```text
/// out[i] = Σⱼ (rows[i × n_vars + j] − query[j])²
/// ```
///
/// Dispatches to specialised implementations for the 2D case.
///
/// # Panics
///
/// Debug-asserts that `rows.len() % n_vars == 0`, `query.len() == n_vars`
/// and `out.len() == rows.len() / n_vars`.
pub(crate) fn sq_distances(rows: &[f64], n_vars: usize, query: &[f64], out: &mut [f64]) {
    debug_assert_eq!(rows.len() % n_vars, 0);
    debug_assert_eq!(query.len(), n_vars);
    debug_assert_eq!(out.len(), rows.len() / n_vars);

    match n_vars {
        2 => sq_dist_2d(rows, query, out),
        _ => sq_dist_nd(rows, n_vars, query, out),
    }
}

#[inline]
fn sq_dist_2d(rows: &[f64], query: &[f64], out: &mut [f64]) {
    let q0 = query[0];
    let q1 = query[1];
    for (o, row) in out.iter_mut().zip(rows.chunks_exact(2)) {
        let d0 = row[0] - q0;
        let d1 = row[1] - q1;
        *o = d0 * d0 + d1 * d1;
    }
}

#[inline]
fn sq_dist_nd(rows: &[f64], n_vars: usize, query: &[f64], out: &mut [f64]) {
    for (o, row) in out.iter_mut().zip(rows.chunks_exact(n_vars)) {
        *o = row
            .iter()
            .zip(query.iter())
            .map(|(&x, &q)| (x - q) * (x - q))
            .sum();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_1d_hand_computed() {
        let rows = [1.0, 3.0, 5.0];
        let mut out = [0.0; 3];
        sq_distances(&rows, 1, &[2.0], &mut out);
        assert_abs_diff_eq!(out[0], 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(out[1], 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(out[2], 9.0, epsilon = 1e-12);
    }

    #[test]
    fn test_2d_matches_nd() {
        let rows = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
        let query = [2.5, 3.5];

        let mut out_2d = [0.0; 5];
        sq_distances(&rows, 2, &query, &mut out_2d);

        let mut out_nd = [0.0; 5];
        sq_dist_nd(&rows, 2, &query, &mut out_nd);

        for i in 0..5 {
            assert_abs_diff_eq!(out_2d[i], out_nd[i], epsilon = 1e-12);
        }
    }

    #[test]
    fn test_3d() {
        let rows = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let mut out = [0.0; 2];
        sq_distances(&rows, 3, &[0.0, 0.0, 0.0], &mut out);
        // 1 + 4 + 9, 16 + 25 + 36
        assert_abs_diff_eq!(out[0], 14.0, epsilon = 1e-12);
        assert_abs_diff_eq!(out[1], 77.0, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_distance() {
        let rows = [1.0, 2.0, 3.0, 4.0];
        let mut out = [0.0; 2];
        sq_distances(&rows, 2, &[3.0, 4.0], &mut out);
        assert_eq!(out[1], 0.0);
    }
}
