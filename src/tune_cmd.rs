//! Tune command: grid and random search over k.

use anyhow::{Context, Result, bail};
use serde::Serialize;
use tracing::{info, info_span};

use knnlab_dataset::Split;
use knnlab_tune::{Objective, SearchResult};

use crate::cli::TuneArgs;
use crate::config::KnnlabConfig;
use crate::convert;

#[derive(Serialize)]
struct TuneReport<'a> {
    source: &'a str,
    seed: u64,
    train_fraction: f64,
    n_train: usize,
    n_test: usize,
    results: &'a [SearchResult],
}

/// Build the split once and run every configured strategy against it.
pub fn run(args: TuneArgs) -> Result<()> {
    let _cmd = info_span!("tune").entered();
    let mut config = KnnlabConfig::load(args.common.config.as_deref())?;
    convert::apply_common(&mut config, &args.common);
    if let Some(low) = args.low {
        config.search.low = low;
    }
    if let Some(high) = args.high {
        config.search.high = high;
    }
    if let Some(n) = args.n {
        config.search.n = n;
    }
    if !args.strategies.is_empty() {
        config.search.strategies = args
            .strategies
            .iter()
            .map(|s| s.as_str().to_string())
            .collect();
    }
    if let Some(fraction) = args.train_fraction {
        config.split.train_fraction = fraction;
    }
    if args.parallel {
        config.search.parallel = true;
    }
    if config.search.strategies.is_empty() {
        bail!("no search strategies configured");
    }

    let dataset = convert::build_dataset(&config.data, config.seed)?;
    let split = Split::for_dataset(&dataset, config.split.train_fraction, config.seed)
        .context("failed to build train/test split")?;
    let (n_train, n_test) = (split.train().len(), split.test().len());
    info!(n_train, n_test, seed = config.seed, "split built");

    let objective = Objective::new(&dataset, split).context("failed to build objective")?;
    let (domain, options) = convert::build_search(&config.search)?;

    let mut results = Vec::with_capacity(config.search.strategies.len());
    for name in &config.search.strategies {
        let strategy = convert::parse_strategy(name, config.seed)?;
        let result = strategy
            .search_with(&objective, &domain, config.search.n, &options)
            .with_context(|| format!("{name} search failed"))?;
        let best = result.best();
        info!(
            strategy = %name,
            best_value = best.value,
            best_k = best.k,
            test_error = best.test_error,
            "best candidate"
        );
        results.push(result);
    }

    let report = TuneReport {
        source: &config.data.source,
        seed: config.seed,
        train_fraction: config.split.train_fraction,
        n_train,
        n_test,
        results: &results,
    };
    convert::write_json(&report, args.common.output.as_deref())
}
