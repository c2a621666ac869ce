//! Synthetic isotropic Gaussian clusters.

use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::dataset::{Dataset, Label};
use crate::error::DatasetError;

/// Configuration for [`make_blobs`].
///
/// # Example
///
/// ```
/// use knnlab_dataset::{BlobsConfig, make_blobs};
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let config = BlobsConfig::new(3, 20, 4).with_spread(0.5);
/// let mut rng = StdRng::seed_from_u64(7);
/// let ds = make_blobs(&config, &mut rng).unwrap();
/// assert_eq!(ds.n_rows(), 60);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BlobsConfig {
    n_classes: usize,
    n_per_class: usize,
    n_features: usize,
    /// Standard deviation of each cluster.
    spread: f64,
    /// Centers are drawn uniformly from `[-center_box, center_box]` per axis.
    center_box: f64,
}

impl BlobsConfig {
    /// Creates a configuration.
    ///
    /// Defaults: `spread = 1.0`, `center_box = 10.0`.
    pub fn new(n_classes: usize, n_per_class: usize, n_features: usize) -> Self {
        Self {
            n_classes,
            n_per_class,
            n_features,
            spread: 1.0,
            center_box: 10.0,
        }
    }

    /// Sets the per-cluster standard deviation.
    pub fn with_spread(mut self, spread: f64) -> Self {
        self.spread = spread;
        self
    }

    /// Sets the half-width of the box cluster centers are drawn from.
    pub fn with_center_box(mut self, center_box: f64) -> Self {
        self.center_box = center_box;
        self
    }

    /// Returns the number of classes.
    pub fn n_classes(&self) -> usize {
        self.n_classes
    }

    /// Returns the number of rows per class.
    pub fn n_per_class(&self) -> usize {
        self.n_per_class
    }

    /// Returns the number of features.
    pub fn n_features(&self) -> usize {
        self.n_features
    }

    /// Returns the cluster standard deviation.
    pub fn spread(&self) -> f64 {
        self.spread
    }

    /// Returns the center box half-width.
    pub fn center_box(&self) -> f64 {
        self.center_box
    }

    /// Validates this configuration.
    pub fn validate(&self) -> Result<(), DatasetError> {
        if self.n_classes == 0 || self.n_per_class == 0 || self.n_features == 0 {
            return Err(DatasetError::InvalidConfig {
                reason: format!(
                    "n_classes, n_per_class and n_features must be >= 1, got {}, {}, {}",
                    self.n_classes, self.n_per_class, self.n_features
                ),
            });
        }
        if !self.spread.is_finite() || self.spread <= 0.0 {
            return Err(DatasetError::InvalidConfig {
                reason: format!("spread must be finite and positive, got {}", self.spread),
            });
        }
        if !self.center_box.is_finite() || self.center_box < 0.0 {
            return Err(DatasetError::InvalidConfig {
                reason: format!(
                    "center_box must be finite and non-negative, got {}",
                    self.center_box
                ),
            });
        }
        Ok(())
    }
}

/// Draws `n_classes × n_per_class` rows from isotropic Gaussian clusters.
///
/// Rows are grouped by class: class `c` occupies rows
/// `c * n_per_class .. (c + 1) * n_per_class` and carries label `c`.
///
/// # Errors
///
/// Returns [`DatasetError::InvalidConfig`] if `config` is invalid.
pub fn make_blobs(config: &BlobsConfig, rng: &mut impl Rng) -> Result<Dataset, DatasetError> {
    config.validate()?;

    let d = config.n_features;
    let noise = Normal::new(0.0, config.spread).map_err(|e| DatasetError::InvalidConfig {
        reason: e.to_string(),
    })?;

    let centers: Vec<f64> = (0..config.n_classes * d)
        .map(|_| {
            if config.center_box == 0.0 {
                0.0
            } else {
                rng.random_range(-config.center_box..=config.center_box)
            }
        })
        .collect();

    let n_rows = config.n_classes * config.n_per_class;
    let mut features = Vec::with_capacity(n_rows * d);
    let mut labels = Vec::with_capacity(n_rows);
    for class in 0..config.n_classes {
        let center = &centers[class * d..(class + 1) * d];
        for _ in 0..config.n_per_class {
            features.extend(center.iter().map(|&c| c + noise.sample(rng)));
            labels.push(class as Label);
        }
    }

    let names: Vec<String> = (0..config.n_classes).map(|c| format!("blob{c}")).collect();
    Ok(Dataset::new(features, d, labels)?.with_class_names(names))
}
