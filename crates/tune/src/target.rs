//! Which subset of a split an objective is measured on.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::TuneError;

/// Evaluation subset of a [`Split`](knnlab_dataset::Split).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    /// The rows the classifier was fitted on.
    Train,
    /// The held-out rows.
    Test,
}

impl Target {
    /// Lowercase name, as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Train => "train",
            Self::Test => "test",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Target {
    type Err = TuneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "train" => Ok(Self::Train),
            "test" => Ok(Self::Test),
            other => Err(TuneError::UnknownTarget {
                name: other.to_string(),
            }),
        }
    }
}
