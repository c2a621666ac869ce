//! Error types for the knnlab-tune crate.

use knnlab_dataset::DatasetError;
use knnlab_knn::KnnError;

/// Error type for all fallible operations in the knnlab-tune crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum TuneError {
    /// Returned when a target name is neither `"train"` nor `"test"`.
    #[error("unknown target {name:?}, expected \"train\" or \"test\"")]
    UnknownTarget {
        /// The rejected name.
        name: String,
    },

    /// Returned when a search domain is non-finite or has `low > high`.
    #[error("search domain must be finite with low <= high, got [{low}, {high}]")]
    InvalidDomain {
        /// Lower bound.
        low: f64,
        /// Upper bound.
        high: f64,
    },

    /// Returned when a search is asked for zero candidates.
    #[error("sample count must be >= 1, got {n}")]
    InvalidSampleCount {
        /// The invalid count.
        n: usize,
    },

    /// Returned when a split was built for a different number of rows.
    #[error("split covers {split_rows} rows but dataset has {dataset_rows}")]
    SplitMismatch {
        /// Rows covered by the split.
        split_rows: usize,
        /// Rows in the dataset.
        dataset_rows: usize,
    },

    /// Neighbor search or classification failure.
    #[error(transparent)]
    Knn(#[from] KnnError),

    /// Dataset or split construction failure.
    #[error(transparent)]
    Dataset(#[from] DatasetError),
}
