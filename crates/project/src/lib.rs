//! Principal component projection onto two dimensions.
//!
//! Fits the two leading principal directions of a [`Dataset`] and maps every
//! row onto them, keeping the row's label.
//!
//! # Quick start
//!
//! ```
//! use knnlab_dataset::iris;
//! use knnlab_project::fit_transform;
//!
//! let (projection, points) = fit_transform(&iris()).unwrap();
//! let [pc1, pc2] = projection.explained_variance_ratio();
//! assert!(pc1 > pc2);
//! assert_eq!(points.len(), 150);
//! ```
//!
//! # Architecture
//!
//! ```text
//! fit_transform()
//!   ├─ center columns, build covariance   (pca.rs)
//!   ├─ top_eigenpairs()                    (eigen.rs)
//!   └─ Projection::transform()             (pca.rs)
//! ```
//!
//! [`Dataset`]: knnlab_dataset::Dataset

pub mod config;
pub mod error;
pub mod pca;

pub(crate) mod eigen;

pub use config::ProjectConfig;
pub use error::ProjectError;
pub use pca::{N_COMPONENTS, ProjectedPoint, Projection, fit, fit_transform, fit_transform_with};
