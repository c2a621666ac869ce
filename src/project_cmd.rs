//! Project command: PCA onto two dimensions.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, info_span};

use knnlab_project::{ProjectedPoint, Projection, fit_transform_with};

use crate::cli::ProjectArgs;
use crate::config::KnnlabConfig;
use crate::convert;

#[derive(Serialize)]
struct ProjectReport<'a> {
    source: &'a str,
    class_names: &'a [String],
    explained_variance_ratio: [f64; 2],
    projection: &'a Projection,
    points: &'a [ProjectedPoint],
}

/// Fit PCA on the configured dataset and print the projected points.
pub fn run(args: ProjectArgs) -> Result<()> {
    let _cmd = info_span!("project").entered();
    let mut config = KnnlabConfig::load(args.common.config.as_deref())?;
    convert::apply_common(&mut config, &args.common);

    let dataset = convert::build_dataset(&config.data, config.seed)?;
    info!(
        source = %config.data.source,
        n_rows = dataset.n_rows(),
        n_features = dataset.n_features(),
        "dataset loaded"
    );

    let project_cfg = convert::build_project_config(&config.project, config.seed)?;
    let (projection, points) =
        fit_transform_with(&dataset, &project_cfg).context("PCA projection failed")?;
    let [pc1, pc2] = projection.explained_variance_ratio();
    info!(pc1, pc2, "projection fitted");

    let report = ProjectReport {
        source: &config.data.source,
        class_names: dataset.class_names(),
        explained_variance_ratio: [pc1, pc2],
        projection: &projection,
        points: &points,
    };
    convert::write_json(&report, args.common.output.as_deref())
}
