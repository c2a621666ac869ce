//! Top-k nearest neighbor selection.

use std::cmp::Ordering;

/// Total order on `(squared distance, index)`: nearer first, lower index on
/// equal distance.
#[inline]
fn by_distance_then_index(a: &(f64, usize), b: &(f64, usize)) -> Ordering {
    a.0.total_cmp(&b.0).then(a.1.cmp(&b.1))
}

/// Selects the `k` nearest rows from squared distances.
///
/// Uses `select_nth_unstable_by` to partition the k smallest pairs to the
/// front, then sorts only that prefix. Because the comparison is a total
/// order, the chosen set is deterministic: among equidistant rows at the
/// boundary the lower indices win.
///
/// Writes results into caller-provided buffers:
/// - `pairs`: scratch buffer for (distance, index) pairs
/// - `nn_indices`: indices of the k nearest rows, ascending by distance
/// - `nn_dists`: Euclidean distances (sqrt of squared distances), same order
///
/// # Panics
///
/// Debug-asserts that `k >= 1` and `k <= d2_sq.len()`.
pub(crate) fn select_k_nearest(
    d2_sq: &[f64],
    k: usize,
    pairs: &mut Vec<(f64, usize)>,
    nn_indices: &mut Vec<usize>,
    nn_dists: &mut Vec<f64>,
) {
    debug_assert!(k >= 1);
    debug_assert!(k <= d2_sq.len());

    pairs.clear();
    pairs.extend(d2_sq.iter().copied().enumerate().map(|(i, d)| (d, i)));

    if k < pairs.len() {
        pairs.select_nth_unstable_by(k - 1, by_distance_then_index);
    }
    pairs.truncate(k);
    pairs.sort_unstable_by(by_distance_then_index);

    nn_indices.clear();
    nn_dists.clear();
    for &(d2, idx) in pairs.iter() {
        nn_indices.push(idx);
        nn_dists.push(d2.sqrt());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn run(d2_sq: &[f64], k: usize) -> (Vec<usize>, Vec<f64>) {
        let mut pairs = Vec::new();
        let mut nn_indices = Vec::new();
        let mut nn_dists = Vec::new();
        select_k_nearest(d2_sq, k, &mut pairs, &mut nn_indices, &mut nn_dists);
        (nn_indices, nn_dists)
    }

    #[test]
    fn test_k1_closest() {
        let (indices, dists) = run(&[9.0, 1.0, 4.0], 1);
        assert_eq!(indices, vec![1]);
        assert_abs_diff_eq!(dists[0], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_k_equals_n_all_sorted() {
        let (indices, dists) = run(&[4.0, 1.0, 9.0, 0.0], 4);
        assert_eq!(indices, vec![3, 1, 0, 2]);
        let expected_dists = [0.0, 1.0, 2.0, 3.0];
        for (got, want) in dists.iter().zip(expected_dists.iter()) {
            assert_abs_diff_eq!(got, want, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_partial_selection_sorted_prefix() {
        let d2: Vec<f64> = [25.0, 4.0, 16.0, 1.0, 36.0, 9.0, 0.0].to_vec();
        let (indices, dists) = run(&d2, 3);
        assert_eq!(indices, vec![6, 3, 1]);
        assert_eq!(dists, vec![0.0, 1.0, 2.0]);
    }

    #[test]
    fn test_ties_prefer_lower_index() {
        let (indices, _) = run(&[4.0, 4.0, 1.0, 4.0], 2);
        assert_eq!(indices, vec![2, 0]);
    }

    #[test]
    fn test_buffer_clearing() {
        let mut pairs = Vec::new();
        let mut nn_indices = Vec::new();
        let mut nn_dists = Vec::new();

        select_k_nearest(
            &[9.0, 1.0, 4.0],
            2,
            &mut pairs,
            &mut nn_indices,
            &mut nn_dists,
        );
        assert_eq!(nn_indices.len(), 2);

        select_k_nearest(&[25.0, 16.0], 1, &mut pairs, &mut nn_indices, &mut nn_dists);
        assert_eq!(nn_indices, vec![1]);
        assert_abs_diff_eq!(nn_dists[0], 4.0, epsilon = 1e-12);
        assert_eq!(nn_dists.len(), 1);
    }
}
