//! Error types for the knnlab-project crate.

/// Error type for all fallible operations in the knnlab-project crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectError {
    /// Returned when the dataset is too small to fit two principal directions.
    #[error("projection needs at least 2 rows and 2 features, got {n_rows} x {n_features}")]
    Dimension {
        /// Number of rows in the dataset.
        n_rows: usize,
        /// Number of features per row.
        n_features: usize,
    },

    /// Returned when a row passed to a fitted projection has the wrong length.
    #[error("row has {got} features, projection was fitted on {expected}")]
    RowLength {
        /// Length of the supplied row.
        got: usize,
        /// Number of features the projection expects.
        expected: usize,
    },

    /// Returned when a projection configuration is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// Feature buffer could not be viewed as a matrix.
    #[error(transparent)]
    Shape(#[from] ndarray::ShapeError),
}
