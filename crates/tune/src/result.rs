//! Search output types.

use serde::Serialize;

/// One evaluated candidate value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Candidate {
    /// Sampled real value.
    pub value: f64,
    /// Neighbor count the value truncates to.
    pub k: usize,
    /// Misclassification rate on the training rows.
    pub train_error: f64,
    /// Misclassification rate on the held-out rows.
    pub test_error: f64,
}

/// Outcome of one search run.
///
/// `candidates` are in sampling order. `best_index` is the first index
/// holding the minimum test error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    strategy: String,
    candidates: Vec<Candidate>,
    best_index: usize,
}

impl SearchResult {
    pub(crate) fn new(strategy: &str, candidates: Vec<Candidate>, best_index: usize) -> Self {
        debug_assert!(best_index < candidates.len());
        Self {
            strategy: strategy.to_string(),
            candidates,
            best_index,
        }
    }

    /// Name of the strategy that produced the candidates.
    pub fn strategy(&self) -> &str {
        &self.strategy
    }

    /// Evaluated candidates in sampling order.
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Index of the first candidate with minimum test error.
    pub fn best_index(&self) -> usize {
        self.best_index
    }

    /// The best candidate.
    pub fn best(&self) -> &Candidate {
        &self.candidates[self.best_index]
    }

    /// Sampled values in order.
    pub fn values(&self) -> Vec<f64> {
        self.candidates.iter().map(|c| c.value).collect()
    }

    /// Test errors in order.
    pub fn test_errors(&self) -> Vec<f64> {
        self.candidates.iter().map(|c| c.test_error).collect()
    }

    /// Train errors in order.
    pub fn train_errors(&self) -> Vec<f64> {
        self.candidates.iter().map(|c| c.train_error).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cand(value: f64, test_error: f64) -> Candidate {
        Candidate {
            value,
            k: value as usize,
            train_error: 0.0,
            test_error,
        }
    }

    #[test]
    fn test_accessors() {
        let r = SearchResult::new("grid", vec![cand(1.0, 0.3), cand(2.0, 0.1)], 1);
        assert_eq!(r.strategy(), "grid");
        assert_eq!(r.best_index(), 1);
        assert_eq!(r.best().value, 2.0);
        assert_eq!(r.values(), vec![1.0, 2.0]);
        assert_eq!(r.test_errors(), vec![0.3, 0.1]);
        assert_eq!(r.train_errors(), vec![0.0, 0.0]);
    }
}
