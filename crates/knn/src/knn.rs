//! Nearest-neighbor search entry points and scratch buffer management.

use knnlab_dataset::Label;
use knnlab_project::ProjectedPoint;

use crate::distance::sq_distances;
use crate::error::KnnError;
use crate::result::{NeighborSet, Neighbors};
use crate::select::select_k_nearest;
use crate::vote::majority_label;

/// Pre-allocated scratch buffers for repeated neighbor queries.
///
/// Reuse across calls to [`nearest_with_scratch`] to avoid repeated heap
/// allocation when classifying many rows against the same training set.
///
/// # Example
///
/// ```
/// use knnlab_knn::KnnScratch;
///
/// let mut scratch = KnnScratch::new(120);
/// // Use with nearest_with_scratch() in a loop...
/// ```
#[derive(Debug, Clone, Default)]
pub struct KnnScratch {
    /// Squared distances buffer.
    pub(crate) d2_sq: Vec<f64>,
    /// (distance, index) pairs for selection.
    pub(crate) pairs: Vec<(f64, usize)>,
    /// Indices of k nearest neighbors.
    pub(crate) nn_indices: Vec<usize>,
    /// Euclidean distances of k nearest neighbors.
    pub(crate) nn_dists: Vec<f64>,
    /// Labels of k nearest neighbors, for voting.
    pub(crate) nn_labels: Vec<Label>,
}

impl KnnScratch {
    /// Creates a new scratch buffer with capacity for `max_rows` rows.
    pub fn new(max_rows: usize) -> Self {
        Self {
            d2_sq: Vec::with_capacity(max_rows),
            pairs: Vec::with_capacity(max_rows),
            nn_indices: Vec::with_capacity(max_rows),
            nn_dists: Vec::with_capacity(max_rows),
            nn_labels: Vec::new(),
        }
    }
}

/// Validates the row matrix alone and returns the derived `n_rows`.
pub(crate) fn validate_rows(rows: &[f64], n_vars: usize) -> Result<usize, KnnError> {
    // n_vars must be >= 1 to avoid division by zero
    if n_vars == 0 || !rows.len().is_multiple_of(n_vars) {
        return Err(KnnError::ShapeMismatch {
            len: rows.len(),
            n_vars,
        });
    }
    Ok(rows.len() / n_vars)
}

/// Validates k against the number of rows.
pub(crate) fn validate_k(k: usize, n_rows: usize) -> Result<(), KnnError> {
    if k == 0 || k > n_rows {
        return Err(KnnError::InvalidK { k, n: n_rows });
    }
    Ok(())
}

/// Validates the query against `n_vars`.
pub(crate) fn validate_query(query: &[f64], n_vars: usize) -> Result<(), KnnError> {
    if query.len() != n_vars {
        return Err(KnnError::DimensionMismatch {
            query: query.len(),
            n_vars,
        });
    }
    // NaN guard on the query (cheap, one row)
    if query.iter().any(|v| !v.is_finite()) {
        return Err(KnnError::NonFiniteInput { input: "query" });
    }
    Ok(())
}

/// Validates all inputs and returns the derived `n_rows`.
fn validate_inputs(rows: &[f64], n_vars: usize, query: &[f64], k: usize) -> Result<usize, KnnError> {
    let n_rows = validate_rows(rows, n_vars)?;
    validate_query(query, n_vars)?;
    validate_k(k, n_rows)?;
    Ok(n_rows)
}

/// Fills `scratch.nn_indices` / `scratch.nn_dists`. Assumes validated inputs.
pub(crate) fn nearest_inner(
    rows: &[f64],
    n_rows: usize,
    n_vars: usize,
    query: &[f64],
    k: usize,
    scratch: &mut KnnScratch,
) {
    scratch.d2_sq.clear();
    scratch.d2_sq.resize(n_rows, 0.0);
    sq_distances(rows, n_vars, query, &mut scratch.d2_sq);

    select_k_nearest(
        &scratch.d2_sq,
        k,
        &mut scratch.pairs,
        &mut scratch.nn_indices,
        &mut scratch.nn_dists,
    );
}

/// Finds the `k` rows nearest to `query` in Euclidean distance.
///
/// # Arguments
///
/// * `rows`: flat row-major matrix `[n_rows × n_vars]`
/// * `n_vars`: number of variables per row
/// * `query`: query point `[n_vars]`
/// * `k`: number of neighbors, `1..=n_rows`
///
/// # Errors
///
/// Returns [`KnnError`] if the matrix shape is inconsistent, the query has
/// the wrong length or a non-finite value, or `k` is out of range.
pub fn nearest_indices(
    rows: &[f64],
    n_vars: usize,
    query: &[f64],
    k: usize,
) -> Result<Neighbors, KnnError> {
    let n_rows = validate_inputs(rows, n_vars, query, k)?;
    let mut scratch = KnnScratch::new(n_rows);
    nearest_inner(rows, n_rows, n_vars, query, k, &mut scratch);
    Ok(Neighbors::new(scratch.nn_indices, scratch.nn_dists))
}

/// Same as [`nearest_indices`], reusing pre-allocated scratch buffers.
///
/// Buffers grow as needed and never shrink.
///
/// # Errors
///
/// Returns [`KnnError`] if inputs are invalid.
pub fn nearest_with_scratch(
    rows: &[f64],
    n_vars: usize,
    query: &[f64],
    k: usize,
    scratch: &mut KnnScratch,
) -> Result<Neighbors, KnnError> {
    let n_rows = validate_inputs(rows, n_vars, query, k)?;
    nearest_inner(rows, n_rows, n_vars, query, k, scratch);
    Ok(Neighbors::new(
        scratch.nn_indices.clone(),
        scratch.nn_dists.clone(),
    ))
}

/// Finds the `k` projected points nearest to `query` and votes their label.
///
/// Members come back nearest first; equidistant points keep input order.
/// The label is the most frequent member label, ties going to the smallest
/// label value (see [`majority_label`]).
///
/// # Errors
///
/// - [`KnnError::InvalidK`] if `k == 0` or `k > points.len()`.
/// - [`KnnError::NonFiniteInput`] if `query` contains NaN or infinity.
///
/// # Example
///
/// ```
/// use knnlab_knn::k_nearest;
/// use knnlab_project::ProjectedPoint;
///
/// let points: Vec<ProjectedPoint> = [(0.0, 0.0, 0), (0.1, 0.0, 0), (5.0, 5.0, 1)]
///     .iter()
///     .enumerate()
///     .map(|(row, &(x, y, label))| ProjectedPoint { x, y, label, row })
///     .collect();
///
/// let set = k_nearest(&points, [0.05, 0.0], 2).unwrap();
/// assert_eq!(set.label, 0);
/// assert_eq!(set.k(), 2);
/// ```
pub fn k_nearest(
    points: &[ProjectedPoint],
    query: [f64; 2],
    k: usize,
) -> Result<NeighborSet, KnnError> {
    validate_k(k, points.len())?;
    validate_query(&query, 2)?;

    let coords: Vec<f64> = points.iter().flat_map(|p| p.coords()).collect();
    let mut scratch = KnnScratch::new(points.len());
    nearest_inner(&coords, points.len(), 2, &query, k, &mut scratch);

    let members: Vec<ProjectedPoint> = scratch.nn_indices.iter().map(|&i| points[i]).collect();
    let labels: Vec<Label> = members.iter().map(|p| p.label).collect();
    let label = majority_label(&labels).ok_or(KnnError::InvalidK {
        k,
        n: points.len(),
    })?;

    Ok(NeighborSet {
        label,
        members,
        distances: scratch.nn_dists,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn line_points(labels: &[Label]) -> Vec<ProjectedPoint> {
        labels
            .iter()
            .enumerate()
            .map(|(row, &label)| ProjectedPoint {
                x: row as f64,
                y: 0.0,
                label,
                row,
            })
            .collect()
    }

    #[test]
    fn test_scratch_matches_allocating() {
        let rows: Vec<f64> = (0..60).map(|i| (i as f64 * 0.37).sin()).collect();
        let query = [0.1, -0.2, 0.3];

        let r1 = nearest_indices(&rows, 3, &query, 6).unwrap();
        let mut scratch = KnnScratch::new(4);
        let r2 = nearest_with_scratch(&rows, 3, &query, 6, &mut scratch).unwrap();

        assert_eq!(r1, r2);
    }

    #[test]
    fn test_single_point_k1() {
        let points = line_points(&[3]);
        let set = k_nearest(&points, [10.0, 10.0], 1).unwrap();
        assert_eq!(set.label, 3);
        assert_eq!(set.rows(), vec![0]);
        // (0, 0) to (10, 10)
        assert_abs_diff_eq!(set.distances[0], 200.0_f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_diagonal_distance() {
        let points = line_points(&[0, 1, 2]);
        // row 2 sits at (2, 0)
        let set = k_nearest(&points, [5.0, 4.0], 1).unwrap();
        assert_eq!(set.rows(), vec![2]);
        assert_abs_diff_eq!(set.distances[0], 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_k_equals_n_returns_all() {
        let points = line_points(&[0, 1, 1, 0]);
        let set = k_nearest(&points, [1.9, 0.0], 4).unwrap();
        assert_eq!(set.rows(), vec![2, 1, 3, 0]);
        // two of each: tie goes to 0
        assert_eq!(set.label, 0);
    }

    #[test]
    fn test_members_sorted_ascending() {
        let points = line_points(&[0, 1, 2, 0, 1, 2, 0]);
        let set = k_nearest(&points, [3.2, 0.5], 4).unwrap();
        for w in set.distances.windows(2) {
            assert!(w[0] <= w[1]);
        }
    }

    #[test]
    fn test_equidistant_keeps_input_order() {
        let points = line_points(&[0, 1, 2]);
        // rows 0 and 2 are both 1.0 away from x = 1
        let set = k_nearest(&points, [1.0, 0.0], 3).unwrap();
        assert_eq!(set.rows(), vec![1, 0, 2]);
    }

    #[test]
    fn test_error_invalid_k() {
        let points = line_points(&[0, 1]);
        assert!(matches!(
            k_nearest(&points, [0.0, 0.0], 0),
            Err(KnnError::InvalidK { k: 0, n: 2 })
        ));
        assert!(matches!(
            k_nearest(&points, [0.0, 0.0], 3),
            Err(KnnError::InvalidK { k: 3, n: 2 })
        ));
        assert!(matches!(
            k_nearest(&[], [0.0, 0.0], 1),
            Err(KnnError::InvalidK { k: 1, n: 0 })
        ));
    }

    #[test]
    fn test_error_non_finite_query() {
        let points = line_points(&[0, 1]);
        assert!(matches!(
            k_nearest(&points, [f64::NAN, 0.0], 1),
            Err(KnnError::NonFiniteInput { input: "query" })
        ));
    }

    #[test]
    fn test_error_shape() {
        assert!(matches!(
            nearest_indices(&[1.0, 2.0, 3.0], 2, &[0.0, 0.0], 1),
            Err(KnnError::ShapeMismatch { len: 3, n_vars: 2 })
        ));
        assert!(matches!(
            nearest_indices(&[1.0], 0, &[], 1),
            Err(KnnError::ShapeMismatch { n_vars: 0, .. })
        ));
    }

    #[test]
    fn test_error_query_dim() {
        assert!(matches!(
            nearest_indices(&[1.0, 2.0], 2, &[0.0], 1),
            Err(KnnError::DimensionMismatch {
                query: 1,
                n_vars: 2
            })
        ));
    }
}
