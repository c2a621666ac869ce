//! Error types for the knnlab-knn crate.

/// Error type for all fallible operations in the knnlab-knn crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum KnnError {
    /// Returned when k is zero or exceeds the number of available points.
    #[error("k must be in 1..={n}, got {k}")]
    InvalidK {
        /// The invalid k value.
        k: usize,
        /// Number of points available.
        n: usize,
    },

    /// Returned when the query length does not match n_vars.
    #[error("query length {query} does not match n_vars {n_vars}")]
    DimensionMismatch {
        /// Length of the query slice.
        query: usize,
        /// Expected number of variables.
        n_vars: usize,
    },

    /// Returned when the rows slice length is not divisible by n_vars.
    #[error("rows length {len} is not divisible by n_vars {n_vars}")]
    ShapeMismatch {
        /// Length of the rows slice.
        len: usize,
        /// Expected number of variables.
        n_vars: usize,
    },

    /// Returned when the number of labels does not match the number of rows.
    #[error("{labels} labels for {rows} rows")]
    LabelCountMismatch {
        /// Number of labels supplied.
        labels: usize,
        /// Number of rows supplied.
        rows: usize,
    },

    /// Returned when a required input contains NaN or infinity.
    #[error("non-finite value in {input}")]
    NonFiniteInput {
        /// Name of the input containing the non-finite value.
        input: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_k() {
        let e = KnnError::InvalidK { k: 0, n: 12 };
        assert_eq!(e.to_string(), "k must be in 1..=12, got 0");
    }

    #[test]
    fn error_dimension_mismatch() {
        let e = KnnError::DimensionMismatch {
            query: 3,
            n_vars: 2,
        };
        assert_eq!(e.to_string(), "query length 3 does not match n_vars 2");
    }

    #[test]
    fn error_shape_mismatch() {
        let e = KnnError::ShapeMismatch { len: 10, n_vars: 3 };
        assert_eq!(e.to_string(), "rows length 10 is not divisible by n_vars 3");
    }

    #[test]
    fn error_label_count_mismatch() {
        let e = KnnError::LabelCountMismatch { labels: 4, rows: 5 };
        assert_eq!(e.to_string(), "4 labels for 5 rows");
    }

    #[test]
    fn error_non_finite_input() {
        let e = KnnError::NonFiniteInput { input: "query" };
        assert_eq!(e.to_string(), "non-finite value in query");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<KnnError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<KnnError>();
    }
}
