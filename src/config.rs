use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level knnlab configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KnnlabConfig {
    /// Global RNG seed for the split, random search and synthetic data.
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Data source settings.
    #[serde(default)]
    pub data: DataToml,

    /// Train/test split settings.
    #[serde(default)]
    pub split: SplitToml,

    /// PCA settings.
    #[serde(default)]
    pub project: ProjectToml,

    /// Neighbor query settings.
    #[serde(default)]
    pub query: QueryToml,

    /// Hyperparameter search settings.
    #[serde(default)]
    pub search: SearchToml,
}

impl Default for KnnlabConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            data: DataToml::default(),
            split: SplitToml::default(),
            project: ProjectToml::default(),
            query: QueryToml::default(),
            search: SearchToml::default(),
        }
    }
}

impl KnnlabConfig {
    /// Reads a TOML file, or returns the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str).context("failed to parse TOML config")
    }
}

fn default_seed() -> u64 {
    42
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DataToml {
    /// `"iris"` or `"blobs"`.
    #[serde(default = "default_source")]
    pub source: String,
    #[serde(default = "default_n_classes")]
    pub n_classes: usize,
    #[serde(default = "default_n_per_class")]
    pub n_per_class: usize,
    #[serde(default = "default_n_features")]
    pub n_features: usize,
    #[serde(default = "default_spread")]
    pub spread: f64,
    #[serde(default = "default_center_box")]
    pub center_box: f64,
}

impl Default for DataToml {
    fn default() -> Self {
        Self {
            source: default_source(),
            n_classes: default_n_classes(),
            n_per_class: default_n_per_class(),
            n_features: default_n_features(),
            spread: default_spread(),
            center_box: default_center_box(),
        }
    }
}

fn default_source() -> String {
    "iris".to_string()
}
fn default_n_classes() -> usize {
    3
}
fn default_n_per_class() -> usize {
    50
}
fn default_n_features() -> usize {
    4
}
fn default_spread() -> f64 {
    1.0
}
fn default_center_box() -> f64 {
    10.0
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SplitToml {
    #[serde(default = "default_train_fraction")]
    pub train_fraction: f64,
}

impl Default for SplitToml {
    fn default() -> Self {
        Self {
            train_fraction: default_train_fraction(),
        }
    }
}

fn default_train_fraction() -> f64 {
    0.8
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectToml {
    #[serde(default = "default_max_iter")]
    pub max_iter: usize,
    #[serde(default = "default_tol")]
    pub tol: f64,
}

impl Default for ProjectToml {
    fn default() -> Self {
        Self {
            max_iter: default_max_iter(),
            tol: default_tol(),
        }
    }
}

fn default_max_iter() -> usize {
    300
}
fn default_tol() -> f64 {
    1e-10
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QueryToml {
    /// Query location in projected coordinates.
    #[serde(default = "default_point")]
    pub point: [f64; 2],
    #[serde(default = "default_k")]
    pub k: usize,
}

impl Default for QueryToml {
    fn default() -> Self {
        Self {
            point: default_point(),
            k: default_k(),
        }
    }
}

fn default_point() -> [f64; 2] {
    [-1.0, 0.5]
}
fn default_k() -> usize {
    5
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchToml {
    #[serde(default = "default_low")]
    pub low: f64,
    #[serde(default = "default_high")]
    pub high: f64,
    #[serde(default = "default_n")]
    pub n: usize,
    /// Any of `"grid"` and `"random"`, run in the listed order.
    #[serde(default = "default_strategies")]
    pub strategies: Vec<String>,
    #[serde(default)]
    pub parallel: bool,
}

impl Default for SearchToml {
    fn default() -> Self {
        Self {
            low: default_low(),
            high: default_high(),
            n: default_n(),
            strategies: default_strategies(),
            parallel: false,
        }
    }
}

fn default_low() -> f64 {
    1.0
}
fn default_high() -> f64 {
    100.0
}
fn default_n() -> usize {
    10
}
fn default_strategies() -> Vec<String> {
    vec!["grid".to_string(), "random".to_string()]
}
