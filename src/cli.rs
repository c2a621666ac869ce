use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// knnlab: PCA projection and k-NN experiments.
#[derive(Parser)]
#[command(
    name = "knnlab",
    version,
    about = "PCA projection, k-nearest-neighbor queries and k tuning"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Project the dataset onto its two leading principal directions.
    Project(ProjectArgs),
    /// Find the k nearest projected points to a query and vote a label.
    Neighbors(NeighborsArgs),
    /// Search for the k with the lowest held-out error.
    Tune(TuneArgs),
}

/// Options shared by every subcommand.
#[derive(clap::Args)]
pub struct CommonArgs {
    /// Path to TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override global RNG seed from config.
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Override the data source from config.
    #[arg(long, value_enum)]
    pub source: Option<SourceArg>,

    /// Write JSON output to this path instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `project` subcommand.
#[derive(clap::Args)]
pub struct ProjectArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

/// Arguments for the `neighbors` subcommand.
#[derive(clap::Args)]
pub struct NeighborsArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Query point in projected coordinates.
    #[arg(long, num_args = 2, value_names = ["X", "Y"], allow_negative_numbers = true)]
    pub query: Option<Vec<f64>>,

    /// Number of neighbors.
    #[arg(short, long)]
    pub k: Option<usize>,
}

/// Arguments for the `tune` subcommand.
#[derive(clap::Args)]
pub struct TuneArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Lower bound of the k domain.
    #[arg(long, allow_negative_numbers = true)]
    pub low: Option<f64>,

    /// Upper bound of the k domain.
    #[arg(long, allow_negative_numbers = true)]
    pub high: Option<f64>,

    /// Number of candidates per strategy.
    #[arg(short, long)]
    pub n: Option<usize>,

    /// Strategies to run, in order (repeatable).
    #[arg(long = "strategy", value_enum)]
    pub strategies: Vec<StrategyArg>,

    /// Override the training fraction from config.
    #[arg(long)]
    pub train_fraction: Option<f64>,

    /// Evaluate candidates in parallel.
    #[arg(long)]
    pub parallel: bool,
}

/// Data source names accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SourceArg {
    Iris,
    Blobs,
}

/// Search strategy names accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    Grid,
    Random,
}

impl SourceArg {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Iris => "iris",
            Self::Blobs => "blobs",
        }
    }
}

impl StrategyArg {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Grid => "grid",
            Self::Random => "random",
        }
    }
}
