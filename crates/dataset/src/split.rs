//! Seeded train/test partition of dataset rows.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::Serialize;
use tracing::debug;

use crate::dataset::Dataset;
use crate::error::DatasetError;

/// A fixed partition of row indices into training and testing subsets.
///
/// Rows are shuffled with `StdRng::seed_from_u64(seed)`; the first
/// `floor(n_rows × train_fraction)` shuffled rows form the training subset
/// and the remainder the testing subset. Both subsets are stored in
/// ascending row order. The two subsets are disjoint and together cover
/// every row.
///
/// # Example
///
/// ```
/// use knnlab_dataset::Split;
///
/// let split = Split::new(10, 0.7, 42).unwrap();
/// assert_eq!(split.train().len(), 7);
/// assert_eq!(split.test().len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Split {
    train: Vec<usize>,
    test: Vec<usize>,
}

impl Split {
    /// Partitions `n_rows` row indices.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::InvalidTrainFraction`] if `train_fraction` is
    /// not a finite value strictly between 0 and 1, and
    /// [`DatasetError::InvalidSplit`] if either subset would be empty.
    pub fn new(n_rows: usize, train_fraction: f64, seed: u64) -> Result<Self, DatasetError> {
        if !train_fraction.is_finite() || train_fraction <= 0.0 || train_fraction >= 1.0 {
            return Err(DatasetError::InvalidTrainFraction {
                fraction: train_fraction,
            });
        }
        let n_train = (n_rows as f64 * train_fraction).floor() as usize;
        if n_train == 0 || n_train >= n_rows {
            return Err(DatasetError::InvalidSplit { n_rows, n_train });
        }

        let mut order: Vec<usize> = (0..n_rows).collect();
        let mut rng = StdRng::seed_from_u64(seed);
        order.shuffle(&mut rng);

        let mut train = order[..n_train].to_vec();
        let mut test = order[n_train..].to_vec();
        train.sort_unstable();
        test.sort_unstable();

        debug!(n_rows, n_train, n_test = test.len(), seed, "split built");
        Ok(Self { train, test })
    }

    /// Partitions the rows of `dataset`.
    ///
    /// # Errors
    ///
    /// See [`Split::new`].
    pub fn for_dataset(
        dataset: &Dataset,
        train_fraction: f64,
        seed: u64,
    ) -> Result<Self, DatasetError> {
        Self::new(dataset.n_rows(), train_fraction, seed)
    }

    /// Training row indices, ascending.
    pub fn train(&self) -> &[usize] {
        &self.train
    }

    /// Testing row indices, ascending.
    pub fn test(&self) -> &[usize] {
        &self.test
    }

    /// Total number of partitioned rows.
    pub fn n_rows(&self) -> usize {
        self.train.len() + self.test.len()
    }
}
