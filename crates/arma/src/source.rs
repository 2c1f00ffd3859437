//! Noise sources for the ARMA recurrence.

use std::fmt;

use cadence_noise::{NoiseDistribution, NoiseParams};

/// A boxed sampler callback.
///
/// Called with the number of samples to draw and the noise parameters;
/// returns the samples or a message describing why sampling failed.
pub type SamplerFn = Box<dyn FnMut(usize, NoiseParams) -> Result<Vec<f64>, String>>;

/// Where the ARMA recurrence draws its noise from.
///
/// The default source samples a Gaussian distribution.
pub enum NoiseSource {
    /// Sample a named distribution with the generator's parameters.
    Distribution(NoiseDistribution),
    /// Use a caller-supplied array as the reported noise terms.
    ///
    /// The array must match the requested series size. Its trailing
    /// values are replayed as burn-in seed so the output length still
    /// matches the request.
    Array(Vec<f64>),
    /// Draw from a caller-supplied sampler.
    ///
    /// The sampler is asked for burn-in and series samples in one call
    /// and must return exactly as many as requested.
    Sampler(SamplerFn),
}

impl NoiseSource {
    /// Wraps a sampler callback as a noise source.
    pub fn sampler<F>(sampler: F) -> Self
    where
        F: FnMut(usize, NoiseParams) -> Result<Vec<f64>, String> + 'static,
    {
        Self::Sampler(Box::new(sampler))
    }
}

impl Default for NoiseSource {
    fn default() -> Self {
        Self::Distribution(NoiseDistribution::Gaussian)
    }
}

impl From<NoiseDistribution> for NoiseSource {
    fn from(distribution: NoiseDistribution) -> Self {
        Self::Distribution(distribution)
    }
}

impl From<Vec<f64>> for NoiseSource {
    fn from(values: Vec<f64>) -> Self {
        Self::Array(values)
    }
}

impl fmt::Debug for NoiseSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Distribution(distribution) => {
                f.debug_tuple("Distribution").field(distribution).finish()
            }
            Self::Array(values) => f.debug_tuple("Array").field(values).finish(),
            Self::Sampler(_) => f.write_str("Sampler(..)"),
        }
    }
}
