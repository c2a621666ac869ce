//! Principal component fit and 2-D projection.

use knnlab_dataset::{Dataset, Label};
use ndarray::{Array1, Array2, ArrayView2, Axis};
use serde::Serialize;
use tracing::debug;

use crate::config::ProjectConfig;
use crate::eigen::top_eigenpairs;
use crate::error::ProjectError;

/// Number of projected dimensions.
pub const N_COMPONENTS: usize = 2;

/// A dataset row mapped into principal component space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProjectedPoint {
    /// Coordinate along the first principal direction.
    pub x: f64,
    /// Coordinate along the second principal direction.
    pub y: f64,
    /// Label of the source row.
    pub label: Label,
    /// Index of the source row in the dataset.
    pub row: usize,
}

impl ProjectedPoint {
    /// Returns `[x, y]`.
    pub fn coords(&self) -> [f64; 2] {
        [self.x, self.y]
    }
}

/// A fitted linear map from feature space onto the two leading principal
/// directions.
///
/// The directions are unit length, mutually orthogonal and ordered by
/// descending explained variance. Each direction is oriented so its
/// largest-magnitude entry is positive.
#[derive(Debug, Clone, Serialize)]
pub struct Projection {
    mean: Vec<f64>,
    components: [Vec<f64>; N_COMPONENTS],
    eigenvalues: [f64; N_COMPONENTS],
    explained_variance_ratio: [f64; N_COMPONENTS],
    total_variance: f64,
}

impl Projection {
    /// Per-feature mean subtracted before projecting.
    pub fn mean(&self) -> &[f64] {
        &self.mean
    }

    /// The two principal directions, each of length `n_features`.
    pub fn components(&self) -> &[Vec<f64>; N_COMPONENTS] {
        &self.components
    }

    /// Variance of the data along each direction.
    pub fn eigenvalues(&self) -> [f64; N_COMPONENTS] {
        self.eigenvalues
    }

    /// Fraction of total variance captured by each direction.
    pub fn explained_variance_ratio(&self) -> [f64; N_COMPONENTS] {
        self.explained_variance_ratio
    }

    /// Sum of per-feature sample variances.
    pub fn total_variance(&self) -> f64 {
        self.total_variance
    }

    /// Number of features the projection was fitted on.
    pub fn n_features(&self) -> usize {
        self.mean.len()
    }

    /// Projects one feature row.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectError::RowLength`] if `row` does not have
    /// [`n_features()`](Self::n_features) entries.
    pub fn transform_row(&self, row: &[f64]) -> Result<[f64; 2], ProjectError> {
        if row.len() != self.mean.len() {
            return Err(ProjectError::RowLength {
                got: row.len(),
                expected: self.mean.len(),
            });
        }
        let mut out = [0.0; N_COMPONENTS];
        for (o, component) in out.iter_mut().zip(self.components.iter()) {
            *o = row
                .iter()
                .zip(self.mean.iter())
                .zip(component.iter())
                .map(|((&x, &m), &c)| (x - m) * c)
                .sum();
        }
        Ok(out)
    }

    /// Projects every row of `dataset`.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectError::RowLength`] if the dataset has a different
    /// number of features than the projection.
    pub fn transform(&self, dataset: &Dataset) -> Result<Vec<ProjectedPoint>, ProjectError> {
        (0..dataset.n_rows())
            .map(|i| -> Result<ProjectedPoint, ProjectError> {
                let [x, y] = self.transform_row(dataset.row(i))?;
                Ok(ProjectedPoint {
                    x,
                    y,
                    label: dataset.label(i),
                    row: i,
                })
            })
            .collect()
    }
}

/// Fits a projection with the default [`ProjectConfig`] and projects every
/// row.
///
/// # Errors
///
/// Returns [`ProjectError::Dimension`] if the dataset has fewer than 2 rows
/// or fewer than 2 features.
pub fn fit_transform(
    dataset: &Dataset,
) -> Result<(Projection, Vec<ProjectedPoint>), ProjectError> {
    fit_transform_with(dataset, &ProjectConfig::default())
}

/// Fits a projection with an explicit configuration and projects every row.
///
/// # Errors
///
/// Returns [`ProjectError::Dimension`] for undersized input and
/// [`ProjectError::InvalidConfig`] for an invalid `config`.
#[tracing::instrument(skip_all, fields(n_rows = dataset.n_rows(), n_features = dataset.n_features()))]
pub fn fit_transform_with(
    dataset: &Dataset,
    config: &ProjectConfig,
) -> Result<(Projection, Vec<ProjectedPoint>), ProjectError> {
    let projection = fit(dataset, config)?;
    let points = projection.transform(dataset)?;
    Ok((projection, points))
}

/// Fits the projection without transforming.
///
/// # Errors
///
/// See [`fit_transform_with`].
pub fn fit(dataset: &Dataset, config: &ProjectConfig) -> Result<Projection, ProjectError> {
    config.validate()?;

    let n = dataset.n_rows();
    let d = dataset.n_features();
    if n < 2 || d < N_COMPONENTS {
        return Err(ProjectError::Dimension {
            n_rows: n,
            n_features: d,
        });
    }

    let x = ArrayView2::from_shape((n, d), dataset.features())?;
    let mean: Vec<f64> = x
        .axis_iter(Axis(1))
        .map(|col| knnlab_stats::mean(&col.to_vec()))
        .collect();
    let total_variance: f64 = x
        .axis_iter(Axis(1))
        .map(|col| knnlab_stats::variance(&col.to_vec()))
        .sum();

    let centered = &x - &Array1::from(mean.clone());
    let cov: Array2<f64> = centered.t().dot(&centered) / (n - 1) as f64;

    let pairs = top_eigenpairs(&cov, N_COMPONENTS, config);
    let mut eigenvalues = [0.0; N_COMPONENTS];
    let mut explained_variance_ratio = [0.0; N_COMPONENTS];
    let mut components: [Vec<f64>; N_COMPONENTS] = [Vec::new(), Vec::new()];
    for (c, (value, vector)) in pairs.into_iter().enumerate() {
        eigenvalues[c] = value;
        explained_variance_ratio[c] = if total_variance > 0.0 {
            (value / total_variance).clamp(0.0, 1.0)
        } else {
            0.0
        };
        components[c] = vector.to_vec();
    }

    debug!(
        pc1 = explained_variance_ratio[0],
        pc2 = explained_variance_ratio[1],
        "projection fitted"
    );

    Ok(Projection {
        mean,
        components,
        eigenvalues,
        explained_variance_ratio,
        total_variance,
    })
}
