//! Closed interval searched over for k.

use serde::Serialize;

use crate::error::TuneError;

/// The closed interval `[low, high]` candidate values are drawn from.
///
/// # Example
///
/// ```
/// use knnlab_tune::Domain;
///
/// let domain = Domain::new(1.0, 100.0).unwrap();
/// assert_eq!(domain.width(), 99.0);
/// assert!(Domain::new(5.0, 1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Domain {
    low: f64,
    high: f64,
}

impl Domain {
    /// Creates a domain.
    ///
    /// # Errors
    ///
    /// Returns [`TuneError::InvalidDomain`] if either bound is non-finite or
    /// `low > high`. A single-point domain (`low == high`) is allowed.
    pub fn new(low: f64, high: f64) -> Result<Self, TuneError> {
        if !low.is_finite() || !high.is_finite() || low > high {
            return Err(TuneError::InvalidDomain { low, high });
        }
        Ok(Self { low, high })
    }

    /// Lower bound.
    pub fn low(&self) -> f64 {
        self.low
    }

    /// Upper bound.
    pub fn high(&self) -> f64 {
        self.high
    }

    /// `high - low`.
    pub fn width(&self) -> f64 {
        self.high - self.low
    }

    /// Whether `value` lies in `[low, high]`.
    pub fn contains(&self, value: f64) -> bool {
        (self.low..=self.high).contains(&value)
    }
}
