//! Pure conversion functions: TOML config structs -> crate API types.

use std::path::Path;

use anyhow::{Context, Result, bail};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;

use knnlab_dataset::{BlobsConfig, Dataset, iris, make_blobs};
use knnlab_project::ProjectConfig;
use knnlab_tune::{Domain, GridStrategy, RandomStrategy, SearchOptions, SearchStrategy};

use crate::cli::CommonArgs;
use crate::config::*;

/// Applies the flags every subcommand shares on top of the file config.
pub fn apply_common(config: &mut KnnlabConfig, common: &CommonArgs) {
    if let Some(seed) = common.seed {
        config.seed = seed;
    }
    if let Some(source) = common.source {
        config.data.source = source.as_str().to_string();
    }
}

/// Builds the configured dataset. Synthetic data is drawn from `seed`.
pub fn build_dataset(data: &DataToml, seed: u64) -> Result<Dataset> {
    match data.source.to_lowercase().as_str() {
        "iris" => Ok(iris()),
        "blobs" => {
            let cfg = BlobsConfig::new(data.n_classes, data.n_per_class, data.n_features)
                .with_spread(data.spread)
                .with_center_box(data.center_box);
            let mut rng = StdRng::seed_from_u64(seed);
            make_blobs(&cfg, &mut rng).context("failed to generate blobs dataset")
        }
        other => bail!("unknown data source: {other:?}"),
    }
}

/// Builds a [`ProjectConfig`] from the TOML PCA section.
pub fn build_project_config(project: &ProjectToml, seed: u64) -> Result<ProjectConfig> {
    let cfg = ProjectConfig::default()
        .with_max_iter(project.max_iter)
        .with_tol(project.tol)
        .with_seed(seed);
    cfg.validate().context("invalid [project] config")?;
    Ok(cfg)
}

/// Parses a strategy name into a boxed [`SearchStrategy`].
pub fn parse_strategy(s: &str, seed: u64) -> Result<Box<dyn SearchStrategy>> {
    match s.to_lowercase().as_str() {
        "grid" => Ok(Box::new(GridStrategy)),
        "random" => Ok(Box::new(RandomStrategy::new(seed))),
        other => bail!("unknown search strategy: {other:?}"),
    }
}

/// Builds the search domain and options from the TOML search section.
pub fn build_search(search: &SearchToml) -> Result<(Domain, SearchOptions)> {
    let domain = Domain::new(search.low, search.high).context("invalid [search] domain")?;
    let options = SearchOptions::new().with_parallel(search.parallel);
    Ok((domain, options))
}

/// Serialises `value` as pretty JSON to `output`, or to stdout.
pub fn write_json<T: Serialize>(value: &T, output: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("failed to serialise output")?;
    match output {
        Some(path) => std::fs::write(path, json + "\n")
            .with_context(|| format!("failed to write output: {}", path.display())),
        None => {
            println!("{json}");
            Ok(())
        }
    }
}
