//! Misclassification rate of a k-NN classifier as a function of k.

use knnlab_dataset::{Dataset, Label, Split};
use knnlab_knn::KnnClassifier;
use tracing::debug;

use crate::error::TuneError;
use crate::target::Target;

/// Converts a real-valued candidate to a neighbor count by truncation toward
/// zero. Negative values and NaN map to 0, which the classifier rejects.
pub fn truncate_k(value: f64) -> usize {
    // `as` saturates: NaN -> 0, negative -> 0, +inf -> usize::MAX
    value.trunc() as usize
}

/// Error rate of k-NN on a fixed train/test split of one dataset.
///
/// The split is fixed for the lifetime of the objective, so every candidate
/// in a search is scored against the same partition. Each call to
/// [`evaluate`](Self::evaluate) fits a fresh classifier; nothing is cached
/// between calls.
///
/// # Example
///
/// ```
/// use knnlab_dataset::{Split, iris};
/// use knnlab_tune::{Objective, Target};
///
/// let data = iris();
/// let split = Split::for_dataset(&data, 0.8, 42).unwrap();
/// let objective = Objective::new(&data, split).unwrap();
///
/// let err = objective.evaluate(5.0, Target::Test).unwrap();
/// assert!((0.0..=1.0).contains(&err));
/// ```
#[derive(Debug, Clone)]
pub struct Objective<'a> {
    dataset: &'a Dataset,
    split: Split,
    train_rows: Vec<f64>,
    train_labels: Vec<Label>,
    test_rows: Vec<f64>,
    test_labels: Vec<Label>,
}

impl<'a> Objective<'a> {
    /// Binds `dataset` to a split of its rows.
    ///
    /// # Errors
    ///
    /// Returns [`TuneError::SplitMismatch`] if `split` was built for a
    /// different number of rows.
    pub fn new(dataset: &'a Dataset, split: Split) -> Result<Self, TuneError> {
        if split.n_rows() != dataset.n_rows() {
            return Err(TuneError::SplitMismatch {
                split_rows: split.n_rows(),
                dataset_rows: dataset.n_rows(),
            });
        }
        let (train_rows, train_labels) = dataset.gather(split.train());
        let (test_rows, test_labels) = dataset.gather(split.test());
        Ok(Self {
            dataset,
            split,
            train_rows,
            train_labels,
            test_rows,
            test_labels,
        })
    }

    /// The dataset being scored.
    pub fn dataset(&self) -> &'a Dataset {
        self.dataset
    }

    /// The fixed split.
    pub fn split(&self) -> &Split {
        &self.split
    }

    /// Number of training rows, the largest valid k.
    pub fn n_train(&self) -> usize {
        self.train_labels.len()
    }

    /// Misclassification rate `1 - correct / total` on `target` for a
    /// classifier fitted on the training rows with `truncate_k(k)`
    /// neighbors.
    ///
    /// # Errors
    ///
    /// Returns [`TuneError::Knn`] wrapping [`KnnError::InvalidK`] if the
    /// truncated k is 0 or exceeds the training row count.
    ///
    /// [`KnnError::InvalidK`]: knnlab_knn::KnnError::InvalidK
    pub fn evaluate(&self, k: f64, target: Target) -> Result<f64, TuneError> {
        let k_used = truncate_k(k);
        let classifier = KnnClassifier::fit(
            self.train_rows.clone(),
            self.dataset.n_features(),
            self.train_labels.clone(),
            k_used,
        )?;

        let (rows, labels) = match target {
            Target::Train => (&self.train_rows, &self.train_labels),
            Target::Test => (&self.test_rows, &self.test_labels),
        };
        let error = classifier.error_rate(rows, labels)?;

        debug!(k, k_used, %target, error, "objective evaluated");
        Ok(error)
    }

    /// Parses `target` and evaluates.
    ///
    /// # Errors
    ///
    /// Returns [`TuneError::UnknownTarget`] if `target` is neither `"train"`
    /// nor `"test"`, otherwise as [`evaluate`](Self::evaluate).
    pub fn evaluate_named(&self, k: f64, target: &str) -> Result<f64, TuneError> {
        let target: Target = target.parse()?;
        self.evaluate(k, target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use knnlab_knn::KnnError;

    /// Two well-separated 1-D clusters, five rows each.
    fn separated() -> Dataset {
        let features = vec![0.0, 0.1, 0.2, 0.3, 0.4, 10.0, 10.1, 10.2, 10.3, 10.4];
        let labels = vec![0, 0, 0, 0, 0, 1, 1, 1, 1, 1];
        Dataset::new(features, 1, labels).unwrap()
    }

    #[test]
    fn test_truncate_k() {
        assert_eq!(truncate_k(5.9), 5);
        assert_eq!(truncate_k(1.0), 1);
        assert_eq!(truncate_k(0.99), 0);
        assert_eq!(truncate_k(-3.2), 0);
        assert_eq!(truncate_k(f64::NAN), 0);
    }

    #[test]
    fn test_k1_on_train_is_perfect() {
        let data = separated();
        let split = Split::for_dataset(&data, 0.6, 3).unwrap();
        let obj = Objective::new(&data, split).unwrap();
        // every training row is its own nearest neighbor
        assert_abs_diff_eq!(obj.evaluate(1.0, Target::Train).unwrap(), 0.0);
        assert_abs_diff_eq!(obj.evaluate(1.7, Target::Train).unwrap(), 0.0);
    }

    #[test]
    fn test_k_equal_to_n_train_votes_majority() {
        let data = separated();
        let split = Split::for_dataset(&data, 0.5, 0).unwrap();
        let obj = Objective::new(&data, split.clone()).unwrap();
        let err = obj.evaluate(obj.n_train() as f64, Target::Test).unwrap();

        // k = n_train predicts the training-majority label for every row
        let (_, train_labels) = data.gather(split.train());
        let majority = knnlab_knn::majority_label(&train_labels).unwrap();
        let (_, test_labels) = data.gather(split.test());
        let wrong = test_labels.iter().filter(|&&l| l != majority).count();
        assert_abs_diff_eq!(err, wrong as f64 / test_labels.len() as f64, epsilon = 1e-12);
    }

    #[test]
    fn test_invalid_k() {
        let data = separated();
        let split = Split::for_dataset(&data, 0.6, 3).unwrap();
        let obj = Objective::new(&data, split).unwrap();
        assert!(matches!(
            obj.evaluate(0.5, Target::Test),
            Err(TuneError::Knn(KnnError::InvalidK { k: 0, n: 6 }))
        ));
        assert!(matches!(
            obj.evaluate(7.0, Target::Test),
            Err(TuneError::Knn(KnnError::InvalidK { k: 7, n: 6 }))
        ));
        assert!(matches!(
            obj.evaluate(-2.0, Target::Train),
            Err(TuneError::Knn(KnnError::InvalidK { k: 0, .. }))
        ));
    }

    #[test]
    fn test_named_target() {
        let data = separated();
        let split = Split::for_dataset(&data, 0.6, 3).unwrap();
        let obj = Objective::new(&data, split).unwrap();
        assert_eq!(
            obj.evaluate_named(3.0, "test").unwrap(),
            obj.evaluate(3.0, Target::Test).unwrap()
        );
        assert!(matches!(
            obj.evaluate_named(3.0, "bogus"),
            Err(TuneError::UnknownTarget { .. })
        ));
    }

    #[test]
    fn test_split_mismatch() {
        let data = separated();
        let split = Split::new(20, 0.5, 0).unwrap();
        assert!(matches!(
            Objective::new(&data, split),
            Err(TuneError::SplitMismatch {
                split_rows: 20,
                dataset_rows: 10
            })
        ));
    }
}
