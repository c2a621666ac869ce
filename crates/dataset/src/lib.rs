//! Labeled datasets and seeded train/test splits.
//!
//! A [`Dataset`] is an immutable row-major feature matrix paired with integer
//! class labels. [`Split`] partitions its rows once per run from an explicit
//! seed so that every downstream evaluation sees the same partition.
//!
//! Two sources are built in:
//!
//! | Source | Function | Shape |
//! |--------|----------|-------|
//! | Fisher iris | [`iris()`] | 150 × 4, 3 classes |
//! | Gaussian blobs | [`make_blobs()`] | configurable |
//!
//! # Quick start
//!
//! ```
//! use knnlab_dataset::{Split, iris};
//!
//! let ds = iris();
//! let split = Split::for_dataset(&ds, 0.8, 42).unwrap();
//! assert_eq!(split.train().len() + split.test().len(), ds.n_rows());
//! ```

pub mod blobs;
pub mod dataset;
pub mod error;
pub mod iris;
pub mod split;

pub use blobs::{BlobsConfig, make_blobs};
pub use dataset::{Dataset, Label};
pub use error::DatasetError;
pub use iris::{IRIS_CLASS_NAMES, IRIS_FEATURE_NAMES, iris};
pub use split::Split;
