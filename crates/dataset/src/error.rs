//! Error types for the knnlab-dataset crate.

/// Error type for all fallible operations in the knnlab-dataset crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DatasetError {
    /// Returned when the dataset has no rows.
    #[error("dataset is empty")]
    Empty,

    /// Returned when the number of features per row is zero.
    #[error("n_features must be >= 1, got 0")]
    ZeroFeatures,

    /// Returned when the flat feature buffer is not a whole number of rows.
    #[error("features length {len} is not divisible by n_features {n_features}")]
    ShapeMismatch {
        /// Length of the flat feature buffer.
        len: usize,
        /// Expected number of features per row.
        n_features: usize,
    },

    /// Returned when the label count differs from the row count.
    #[error("labels length {labels} does not match {rows} rows")]
    LabelCountMismatch {
        /// Number of labels supplied.
        labels: usize,
        /// Number of feature rows.
        rows: usize,
    },

    /// Returned when a row of a ragged input has the wrong length.
    #[error("row {row} has {got} features, expected {expected}")]
    RaggedRow {
        /// Offending row index.
        row: usize,
        /// Its length.
        got: usize,
        /// Length of the first row.
        expected: usize,
    },

    /// Returned when a feature value is NaN or infinite.
    #[error("non-finite feature value at row {row}")]
    NonFiniteFeature {
        /// Row containing the value.
        row: usize,
    },

    /// Returned when the train fraction is outside the open interval (0, 1).
    #[error("train fraction must lie in (0, 1), got {fraction}")]
    InvalidTrainFraction {
        /// The rejected fraction.
        fraction: f64,
    },

    /// Returned when a split would leave one side empty.
    #[error("split of {n_rows} rows gives {n_train} train rows; both sides must be non-empty")]
    InvalidSplit {
        /// Total number of rows.
        n_rows: usize,
        /// Rows that would land in the training subset.
        n_train: usize,
    },

    /// Returned when a generator configuration is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },
}
