//! Euclidean k-nearest-neighbor search and majority-vote classification.
//!
//! Two entry points share one selection core:
//!
//! | Entry point | Input | Output |
//! |-------------|-------|--------|
//! | [`k_nearest`] | projected 2-D points + query | [`NeighborSet`] with voted label |
//! | [`nearest_indices`] | flat `[n × d]` matrix + query | [`Neighbors`] (indices, distances) |
//!
//! [`KnnClassifier`] stores a training matrix and predicts by majority vote
//! over the k nearest rows. Vote ties go to the smallest label value.
//!
//! # Quick start
//!
//! ```
//! use knnlab_knn::nearest_indices;
//!
//! let rows = vec![1.0, 3.0, 5.0, 7.0, 9.0];
//! let neighbors = nearest_indices(&rows, 1, &[4.0], 3).unwrap();
//! assert_eq!(neighbors.indices(), &[1, 2, 0]);
//! ```
//!
//! # Architecture
//!
//! ```text
//! k_nearest() / nearest_indices() / KnnClassifier::predict()
//!   ├─ validate inputs
//!   ├─ sq_distances()       (distance.rs)
//!   ├─ select_k_nearest()   (select.rs)
//!   └─ majority_label()     (vote.rs)
//! ```
//!
//! For hot loops, use [`nearest_with_scratch`] with a reusable
//! [`KnnScratch`] to avoid per-call heap allocation.

pub mod classifier;
pub mod error;
pub mod knn;
pub mod result;
pub mod vote;

pub(crate) mod distance;
pub(crate) mod select;

pub use classifier::KnnClassifier;
pub use error::KnnError;
pub use knn::{KnnScratch, k_nearest, nearest_indices, nearest_with_scratch};
pub use result::{NeighborSet, Neighbors};
pub use vote::majority_label;
