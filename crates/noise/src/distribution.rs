//! Noise distribution registry.

use std::fmt;
use std::str::FromStr;

use crate::error::NoiseError;

/// The fixed registry of noise distributions.
///
/// Parsed from the names `"gaussian"`, `"normal"` (an alias for
/// gaussian), and `"laplace"`. Lookup is case sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoiseDistribution {
    /// Normally distributed noise.
    Gaussian,
    /// Laplace distributed noise (double exponential).
    Laplace,
}

impl FromStr for NoiseDistribution {
    type Err = NoiseError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "gaussian" | "normal" => Ok(Self::Gaussian),
            "laplace" => Ok(Self::Laplace),
            _ => Err(NoiseError::UnknownDistribution {
                name: name.to_string(),
            }),
        }
    }
}

impl fmt::Display for NoiseDistribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gaussian => write!(f, "gaussian"),
            Self::Laplace => write!(f, "laplace"),
        }
    }
}
