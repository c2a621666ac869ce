//! Grid and random search over the neighbor count.

use knnlab_stats::{argmin_first, linspace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::Serialize;
use tracing::info;

use crate::domain::Domain;
use crate::error::TuneError;
use crate::objective::{Objective, truncate_k};
use crate::result::{Candidate, SearchResult};
use crate::target::Target;

/// Execution options shared by every strategy.
///
/// # Example
///
/// ```
/// use knnlab_tune::SearchOptions;
///
/// let opts = SearchOptions::new().with_parallel(true);
/// assert!(opts.parallel());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchOptions {
    parallel: bool,
}

impl SearchOptions {
    /// Sequential evaluation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluate candidates on the rayon thread pool. Results are identical
    /// to sequential evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Whether candidates are evaluated in parallel.
    pub fn parallel(&self) -> bool {
        self.parallel
    }
}

/// A way of choosing candidate values for k from a domain.
///
/// Implementors supply [`sample`](Self::sample); the provided
/// [`search`](Self::search) scores every sample on both train and test
/// subsets and reports the first minimum of test error.
pub trait SearchStrategy {
    /// Short name reported in [`SearchResult::strategy`].
    fn name(&self) -> &'static str;

    /// Draws `n` candidate values from `domain`, in evaluation order.
    ///
    /// # Errors
    ///
    /// Returns [`TuneError::InvalidSampleCount`] if `n == 0`.
    fn sample(&self, domain: &Domain, n: usize) -> Result<Vec<f64>, TuneError>;

    /// Samples `n` values and evaluates each sequentially.
    ///
    /// # Errors
    ///
    /// Propagates any sampling or objective failure; no partial result is
    /// returned.
    fn search(
        &self,
        objective: &Objective<'_>,
        domain: &Domain,
        n: usize,
    ) -> Result<SearchResult, TuneError> {
        self.search_with(objective, domain, n, &SearchOptions::default())
    }

    /// Same as [`search`](Self::search) with explicit [`SearchOptions`].
    ///
    /// # Errors
    ///
    /// See [`search`](Self::search).
    fn search_with(
        &self,
        objective: &Objective<'_>,
        domain: &Domain,
        n: usize,
        options: &SearchOptions,
    ) -> Result<SearchResult, TuneError> {
        let values = self.sample(domain, n)?;
        evaluate_candidates(self.name(), objective, &values, options)
    }
}

/// Scores `values` on both targets and picks the first minimum test error.
#[tracing::instrument(skip(objective, values, options), fields(n = values.len(), parallel = options.parallel()))]
fn evaluate_candidates(
    strategy: &str,
    objective: &Objective<'_>,
    values: &[f64],
    options: &SearchOptions,
) -> Result<SearchResult, TuneError> {
    let score = |&value: &f64| -> Result<Candidate, TuneError> {
        Ok(Candidate {
            value,
            k: truncate_k(value),
            train_error: objective.evaluate(value, Target::Train)?,
            test_error: objective.evaluate(value, Target::Test)?,
        })
    };

    // Indexed collect keeps sampling order in both modes.
    let candidates: Vec<Candidate> = if options.parallel() {
        values.par_iter().map(score).collect::<Result<_, _>>()?
    } else {
        values.iter().map(score).collect::<Result<_, _>>()?
    };

    let test_errors: Vec<f64> = candidates.iter().map(|c| c.test_error).collect();
    let best_index =
        argmin_first(&test_errors).ok_or(TuneError::InvalidSampleCount { n: values.len() })?;
    let best = candidates[best_index];
    info!(
        strategy,
        n = candidates.len(),
        best_index,
        best_value = best.value,
        best_k = best.k,
        best_test_error = best.test_error,
        "search complete"
    );

    Ok(SearchResult::new(strategy, candidates, best_index))
}

fn check_count(n: usize) -> Result<(), TuneError> {
    if n == 0 {
        return Err(TuneError::InvalidSampleCount { n });
    }
    Ok(())
}

/// Evenly spaced candidates over the domain, both endpoints included.
///
/// `n = 1` samples only `low`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GridStrategy;

impl SearchStrategy for GridStrategy {
    fn name(&self) -> &'static str {
        "grid"
    }

    fn sample(&self, domain: &Domain, n: usize) -> Result<Vec<f64>, TuneError> {
        check_count(n)?;
        Ok(linspace(domain.low(), domain.high(), n))
    }
}

/// Independent uniform draws from `[low, high]`.
///
/// Each call to [`sample`](SearchStrategy::sample) reseeds from the stored
/// seed, so the same seed and `n` always give the same sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomStrategy {
    seed: u64,
}

impl RandomStrategy {
    /// Creates a random strategy with an explicit seed.
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// The seed.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl SearchStrategy for RandomStrategy {
    fn name(&self) -> &'static str {
        "random"
    }

    fn sample(&self, domain: &Domain, n: usize) -> Result<Vec<f64>, TuneError> {
        check_count(n)?;
        let mut rng = StdRng::seed_from_u64(self.seed);
        Ok((0..n)
            .map(|_| rng.random_range(domain.low()..=domain.high()))
            .collect())
    }
}
