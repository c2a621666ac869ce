//! Labeled feature matrix.

use crate::error::DatasetError;

/// Integer class label.
pub type Label = u32;

/// An immutable labeled dataset.
///
/// Features are stored row-major in one flat buffer
/// `[n_rows × n_features]`, paired 1:1 with `labels`. Optional class names
/// are indexed by label value.
///
/// # Example
///
/// ```
/// use knnlab_dataset::Dataset;
///
/// let ds = Dataset::new(vec![0.0, 1.0, 2.0, 3.0], 2, vec![0, 1]).unwrap();
/// assert_eq!(ds.n_rows(), 2);
/// assert_eq!(ds.row(1), &[2.0, 3.0]);
/// ```
#[derive(Debug, Clone)]
pub struct Dataset {
    features: Vec<f64>,
    n_features: usize,
    labels: Vec<Label>,
    class_names: Vec<String>,
}

impl Dataset {
    /// Builds a dataset from a flat row-major feature buffer.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError`] if `n_features` is zero, the buffer is empty
    /// or not a whole number of rows, the label count differs from the row
    /// count, or any feature is non-finite.
    pub fn new(
        features: Vec<f64>,
        n_features: usize,
        labels: Vec<Label>,
    ) -> Result<Self, DatasetError> {
        if n_features == 0 {
            return Err(DatasetError::ZeroFeatures);
        }
        if features.is_empty() {
            return Err(DatasetError::Empty);
        }
        if !features.len().is_multiple_of(n_features) {
            return Err(DatasetError::ShapeMismatch {
                len: features.len(),
                n_features,
            });
        }
        let rows = features.len() / n_features;
        if labels.len() != rows {
            return Err(DatasetError::LabelCountMismatch {
                labels: labels.len(),
                rows,
            });
        }
        if let Some(pos) = features.iter().position(|v| !v.is_finite()) {
            return Err(DatasetError::NonFiniteFeature {
                row: pos / n_features,
            });
        }

        Ok(Self {
            features,
            n_features,
            labels,
            class_names: Vec::new(),
        })
    }

    /// Builds a dataset from one vector per row.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::RaggedRow`] if rows differ in length, plus
    /// every error of [`Dataset::new`].
    pub fn from_rows(rows: &[Vec<f64>], labels: Vec<Label>) -> Result<Self, DatasetError> {
        let first = rows.first().ok_or(DatasetError::Empty)?;
        let n_features = first.len();
        let mut features = Vec::with_capacity(rows.len() * n_features);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n_features {
                return Err(DatasetError::RaggedRow {
                    row: i,
                    got: row.len(),
                    expected: n_features,
                });
            }
            features.extend_from_slice(row);
        }
        Self::new(features, n_features, labels)
    }

    /// Attaches human-readable class names, indexed by label value.
    pub fn with_class_names<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.class_names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Number of rows.
    pub fn n_rows(&self) -> usize {
        self.labels.len()
    }

    /// Number of features per row.
    pub fn n_features(&self) -> usize {
        self.n_features
    }

    /// Flat row-major feature buffer.
    pub fn features(&self) -> &[f64] {
        &self.features
    }

    /// All labels in row order.
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Feature vector of row `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= n_rows()`.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.features[i * self.n_features..(i + 1) * self.n_features]
    }

    /// Label of row `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= n_rows()`.
    pub fn label(&self, i: usize) -> Label {
        self.labels[i]
    }

    /// Class names, possibly empty.
    pub fn class_names(&self) -> &[String] {
        &self.class_names
    }

    /// Name of `label`, if one was attached.
    pub fn class_name(&self, label: Label) -> Option<&str> {
        self.class_names.get(label as usize).map(String::as_str)
    }

    /// Distinct labels in ascending order.
    pub fn distinct_labels(&self) -> Vec<Label> {
        let mut out = self.labels.clone();
        out.sort_unstable();
        out.dedup();
        out
    }

    /// Copies the rows at `indices` into a flat feature buffer and a label
    /// vector, in the order given.
    ///
    /// # Panics
    ///
    /// Panics if any index is out of range.
    pub fn gather(&self, indices: &[usize]) -> (Vec<f64>, Vec<Label>) {
        let mut features = Vec::with_capacity(indices.len() * self.n_features);
        let mut labels = Vec::with_capacity(indices.len());
        for &i in indices {
            features.extend_from_slice(self.row(i));
            labels.push(self.labels[i]);
        }
        (features, labels)
    }
}
