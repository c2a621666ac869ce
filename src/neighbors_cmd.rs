//! Neighbors command: k nearest projected points to a query.

use anyhow::{Context, Result, bail};
use serde::Serialize;
use tracing::{info, info_span};

use knnlab_dataset::Label;
use knnlab_knn::{NeighborSet, k_nearest};
use knnlab_project::fit_transform_with;

use crate::cli::NeighborsArgs;
use crate::config::KnnlabConfig;
use crate::convert;

#[derive(Serialize)]
struct NeighborsReport<'a> {
    query: [f64; 2],
    k: usize,
    label: Label,
    class_name: Option<&'a str>,
    explained_variance_ratio: [f64; 2],
    neighbors: &'a NeighborSet,
}

/// Project the dataset, then vote a label for the query point.
pub fn run(args: NeighborsArgs) -> Result<()> {
    let _cmd = info_span!("neighbors").entered();
    let mut config = KnnlabConfig::load(args.common.config.as_deref())?;
    convert::apply_common(&mut config, &args.common);

    let query = match args.query.as_deref() {
        None => config.query.point,
        Some(&[x, y]) => [x, y],
        Some(other) => bail!("query needs exactly 2 coordinates, got {}", other.len()),
    };
    let k = args.k.unwrap_or(config.query.k);

    let dataset = convert::build_dataset(&config.data, config.seed)?;
    let project_cfg = convert::build_project_config(&config.project, config.seed)?;
    let (projection, points) =
        fit_transform_with(&dataset, &project_cfg).context("PCA projection failed")?;

    let set = k_nearest(&points, query, k)
        .with_context(|| format!("neighbor search failed for query {query:?}"))?;
    let class_name = dataset.class_name(set.label);
    info!(
        x = query[0],
        y = query[1],
        k,
        label = set.label,
        class_name = class_name.unwrap_or("-"),
        "query classified"
    );

    let report = NeighborsReport {
        query,
        k,
        label: set.label,
        class_name,
        explained_variance_ratio: projection.explained_variance_ratio(),
        neighbors: &set,
    };
    convert::write_json(&report, args.common.output.as_deref())
}
