//! k-NN classifier over a stored training matrix.

use knnlab_dataset::Label;

use crate::error::KnnError;
use crate::knn::{KnnScratch, nearest_inner, validate_k, validate_query, validate_rows};
use crate::vote::majority_label;

/// Majority-vote k-NN classifier.
///
/// Holds a copy of the training rows and labels. Prediction computes the
/// `k` nearest training rows by Euclidean distance and votes their labels,
/// ties going to the smallest label.
///
/// # Example
///
/// ```
/// use knnlab_knn::KnnClassifier;
///
/// let rows = vec![0.0, 0.0, 0.2, 0.1, 5.0, 5.0, 5.1, 4.9];
/// let labels = vec![0, 0, 1, 1];
/// let clf = KnnClassifier::fit(rows, 2, labels, 1).unwrap();
///
/// assert_eq!(clf.predict_row(&[4.8, 5.2]).unwrap(), 1);
/// assert_eq!(clf.predict(&[0.1, 0.0, 5.0, 5.0]).unwrap(), vec![0, 1]);
/// ```
#[derive(Debug, Clone)]
pub struct KnnClassifier {
    rows: Vec<f64>,
    n_vars: usize,
    labels: Vec<Label>,
    k: usize,
}

impl KnnClassifier {
    /// Stores a flat row-major training matrix with one label per row.
    ///
    /// # Errors
    ///
    /// - [`KnnError::ShapeMismatch`] if `rows.len()` is not a multiple of
    ///   `n_vars` (or `n_vars == 0`).
    /// - [`KnnError::LabelCountMismatch`] if `labels` and rows disagree.
    /// - [`KnnError::InvalidK`] if `k == 0` or `k` exceeds the row count.
    /// - [`KnnError::NonFiniteInput`] if a training value is NaN or infinite.
    pub fn fit(rows: Vec<f64>, n_vars: usize, labels: Vec<Label>, k: usize) -> Result<Self, KnnError> {
        let n_rows = validate_rows(&rows, n_vars)?;
        if labels.len() != n_rows {
            return Err(KnnError::LabelCountMismatch {
                labels: labels.len(),
                rows: n_rows,
            });
        }
        validate_k(k, n_rows)?;
        if rows.iter().any(|v| !v.is_finite()) {
            return Err(KnnError::NonFiniteInput { input: "rows" });
        }
        Ok(Self {
            rows,
            n_vars,
            labels,
            k,
        })
    }

    /// Number of neighbors consulted per prediction.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Number of variables per row.
    pub fn n_vars(&self) -> usize {
        self.n_vars
    }

    /// Number of stored training rows.
    pub fn n_train(&self) -> usize {
        self.labels.len()
    }

    /// Predicts the label of one row.
    ///
    /// # Errors
    ///
    /// Returns [`KnnError::DimensionMismatch`] or [`KnnError::NonFiniteInput`]
    /// for a malformed row.
    pub fn predict_row(&self, row: &[f64]) -> Result<Label, KnnError> {
        let mut scratch = KnnScratch::new(self.n_train());
        self.predict_with_scratch(row, &mut scratch)
    }

    /// Predicts one label per row of a flat row-major matrix.
    ///
    /// # Errors
    ///
    /// Returns [`KnnError::ShapeMismatch`] if `rows` is not a whole number of
    /// rows, or any per-row error from [`predict_row`](Self::predict_row).
    pub fn predict(&self, rows: &[f64]) -> Result<Vec<Label>, KnnError> {
        validate_rows(rows, self.n_vars)?;
        let mut scratch = KnnScratch::new(self.n_train());
        rows.chunks_exact(self.n_vars)
            .map(|row| self.predict_with_scratch(row, &mut scratch))
            .collect()
    }

    /// Fraction of rows whose prediction differs from `labels`.
    ///
    /// # Errors
    ///
    /// Returns [`KnnError::LabelCountMismatch`] if `labels` and rows disagree,
    /// [`KnnError::InvalidK`] with `n = 0` for an empty evaluation set, or any
    /// error from [`predict`](Self::predict).
    pub fn error_rate(&self, rows: &[f64], labels: &[Label]) -> Result<f64, KnnError> {
        let predicted = self.predict(rows)?;
        if predicted.len() != labels.len() {
            return Err(KnnError::LabelCountMismatch {
                labels: labels.len(),
                rows: predicted.len(),
            });
        }
        if predicted.is_empty() {
            return Err(KnnError::InvalidK { k: self.k, n: 0 });
        }
        let correct = predicted
            .iter()
            .zip(labels)
            .filter(|(p, l)| p == l)
            .count();
        Ok(1.0 - correct as f64 / labels.len() as f64)
    }

    fn predict_with_scratch(&self, row: &[f64], scratch: &mut KnnScratch) -> Result<Label, KnnError> {
        validate_query(row, self.n_vars)?;
        nearest_inner(&self.rows, self.n_train(), self.n_vars, row, self.k, scratch);

        scratch.nn_labels.clear();
        scratch
            .nn_labels
            .extend(scratch.nn_indices.iter().map(|&i| self.labels[i]));
        majority_label(&scratch.nn_labels).ok_or(KnnError::InvalidK {
            k: self.k,
            n: self.n_train(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn two_clusters() -> KnnClassifier {
        let rows = vec![
            0.0, 0.0, //
            0.1, 0.2, //
            0.2, 0.0, //
            4.0, 4.0, //
            4.1, 3.9, //
        ];
        KnnClassifier::fit(rows, 2, vec![0, 0, 0, 1, 1], 3).unwrap()
    }

    #[test]
    fn test_accessors() {
        let clf = two_clusters();
        assert_eq!(clf.k(), 3);
        assert_eq!(clf.n_vars(), 2);
        assert_eq!(clf.n_train(), 5);
    }

    #[test]
    fn test_predict_clusters() {
        let clf = two_clusters();
        assert_eq!(clf.predict_row(&[0.1, 0.1]).unwrap(), 0);
        assert_eq!(clf.predict_row(&[4.0, 4.1]).unwrap(), 1);
    }

    #[test]
    fn test_k_equals_n_votes_whole_set() {
        let rows = vec![0.0, 0.0, 0.1, 0.2, 0.2, 0.0, 4.0, 4.0, 4.1, 3.9];
        let clf = KnnClassifier::fit(rows, 2, vec![0, 0, 0, 1, 1], 5).unwrap();
        // every query sees all five: three zeros beat two ones
        assert_eq!(clf.predict_row(&[4.0, 4.0]).unwrap(), 0);
    }

    #[test]
    fn test_error_rate() {
        let clf = two_clusters();
        let rows = [0.0, 0.1, 4.0, 4.0, 3.9, 4.2, 0.1, 0.0];
        let err = clf.error_rate(&rows, &[0, 1, 0, 0]).unwrap();
        assert_abs_diff_eq!(err, 0.25, epsilon = 1e-12);
    }

    #[test]
    fn test_fit_errors() {
        assert!(matches!(
            KnnClassifier::fit(vec![0.0, 1.0, 2.0], 2, vec![0], 1),
            Err(KnnError::ShapeMismatch { .. })
        ));
        assert!(matches!(
            KnnClassifier::fit(vec![0.0, 1.0], 2, vec![0, 1], 1),
            Err(KnnError::LabelCountMismatch { labels: 2, rows: 1 })
        ));
        assert!(matches!(
            KnnClassifier::fit(vec![0.0, 1.0], 2, vec![0], 2),
            Err(KnnError::InvalidK { k: 2, n: 1 })
        ));
        assert!(matches!(
            KnnClassifier::fit(vec![0.0, 1.0], 2, vec![0], 0),
            Err(KnnError::InvalidK { k: 0, n: 1 })
        ));
        assert!(matches!(
            KnnClassifier::fit(vec![f64::INFINITY, 1.0], 2, vec![0], 1),
            Err(KnnError::NonFiniteInput { input: "rows" })
        ));
    }

    #[test]
    fn test_predict_errors() {
        let clf = two_clusters();
        assert!(matches!(
            clf.predict_row(&[0.0]),
            Err(KnnError::DimensionMismatch { .. })
        ));
        assert!(matches!(
            clf.predict(&[0.0, 0.0, 1.0]),
            Err(KnnError::ShapeMismatch { len: 3, n_vars: 2 })
        ));
        assert!(matches!(
            clf.error_rate(&[], &[]),
            Err(KnnError::InvalidK { n: 0, .. })
        ));
    }
}
