//! Configuration for the power-iteration eigen solver.

use crate::error::ProjectError;

/// Settings for principal component extraction.
///
/// # Example
///
/// ```
/// use knnlab_project::ProjectConfig;
///
/// let config = ProjectConfig::default().with_max_iter(500);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectConfig {
    /// Maximum power iterations per component.
    max_iter: usize,
    /// Convergence threshold on the step `‖v_new − v_old‖`, taken up to sign.
    tol: f64,
    /// Seed for the start vectors.
    seed: u64,
}

impl Default for ProjectConfig {
    /// Defaults: `max_iter = 300`, `tol = 1e-10`, `seed = 0`.
    fn default() -> Self {
        Self {
            max_iter: 300,
            tol: 1e-10,
            seed: 0,
        }
    }
}

impl ProjectConfig {
    /// Sets the maximum number of power iterations per component.
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Sets the convergence tolerance.
    pub fn with_tol(mut self, tol: f64) -> Self {
        self.tol = tol;
        self
    }

    /// Sets the start-vector seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Returns the maximum number of power iterations.
    pub fn max_iter(&self) -> usize {
        self.max_iter
    }

    /// Returns the convergence tolerance.
    pub fn tol(&self) -> f64 {
        self.tol
    }

    /// Returns the start-vector seed.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Validates this configuration.
    pub fn validate(&self) -> Result<(), ProjectError> {
        if self.max_iter == 0 {
            return Err(ProjectError::InvalidConfig {
                reason: "max_iter must be >= 1".to_string(),
            });
        }
        if !self.tol.is_finite() || self.tol <= 0.0 {
            return Err(ProjectError::InvalidConfig {
                reason: format!("tol must be finite and positive, got {}", self.tol),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = ProjectConfig::default();
        assert_eq!(cfg.max_iter(), 300);
        assert_eq!(cfg.seed(), 0);
        assert!((cfg.tol() - 1e-10).abs() < f64::EPSILON);
    }

    #[test]
    fn test_builder_chaining() {
        let cfg = ProjectConfig::default()
            .with_max_iter(10)
            .with_tol(1e-6)
            .with_seed(7);
        assert_eq!(cfg.max_iter(), 10);
        assert_eq!(cfg.seed(), 7);
        assert!((cfg.tol() - 1e-6).abs() < f64::EPSILON);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(ProjectConfig::default().with_max_iter(0).validate().is_err());
        assert!(ProjectConfig::default().with_tol(0.0).validate().is_err());
        assert!(ProjectConfig::default().with_tol(f64::NAN).validate().is_err());
    }
}
