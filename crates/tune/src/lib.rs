//! Hyperparameter search for the k-NN neighborhood size.
//!
//! An [`Objective`] binds a dataset to one fixed train/test [`Split`] and
//! scores a candidate k as the misclassification rate of a k-NN classifier
//! fitted on the training rows. A [`SearchStrategy`] draws candidate values
//! from a [`Domain`], scores each on both subsets, and reports the first
//! candidate with minimum test error.
//!
//! | Strategy | Sampling |
//! |----------|----------|
//! | [`GridStrategy`] | `n` evenly spaced values, endpoints included |
//! | [`RandomStrategy`] | `n` seeded uniform draws |
//!
//! Real-valued candidates are truncated toward zero to obtain k.
//!
//! # Quick start
//!
//! ```
//! use knnlab_dataset::{Split, iris};
//! use knnlab_tune::{Domain, GridStrategy, Objective, SearchStrategy};
//!
//! let data = iris();
//! let split = Split::for_dataset(&data, 0.8, 42).unwrap();
//! let objective = Objective::new(&data, split).unwrap();
//! let domain = Domain::new(1.0, 100.0).unwrap();
//!
//! let result = GridStrategy.search(&objective, &domain, 10).unwrap();
//! assert_eq!(result.candidates().len(), 10);
//! let best = result.best();
//! assert!(result.candidates().iter().all(|c| best.test_error <= c.test_error));
//! ```
//!
//! # Architecture
//!
//! ```text
//! SearchStrategy::search()
//!   ├─ sample()                 (GridStrategy / RandomStrategy)
//!   └─ evaluate_candidates()    (strategy.rs, optional rayon)
//!        ├─ Objective::evaluate(Train)
//!        ├─ Objective::evaluate(Test)
//!        └─ argmin_first()      (knnlab-stats)
//! ```
//!
//! [`Split`]: knnlab_dataset::Split

pub mod domain;
pub mod error;
pub mod objective;
pub mod result;
pub mod strategy;
pub mod target;

pub use domain::Domain;
pub use error::TuneError;
pub use objective::{Objective, truncate_k};
pub use result::{Candidate, SearchResult};
pub use strategy::{GridStrategy, RandomStrategy, SearchOptions, SearchStrategy};
pub use target::Target;
