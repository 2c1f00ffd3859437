//! Error types for the cadence-arma crate.

use cadence_calendar::CalendarError;
use cadence_noise::NoiseError;
use cadence_series::SeriesError;

/// Error type for all fallible operations in the cadence-arma crate.
///
/// Covers malformed noise inputs plus failures of the timeline, noise,
/// and series layers the engine builds on.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ArmaError {
    /// Timeline construction error.
    #[error(transparent)]
    Timeline(#[from] CalendarError),

    /// Noise sampling error.
    #[error(transparent)]
    Noise(#[from] NoiseError),

    /// Series construction error.
    #[error(transparent)]
    Series(#[from] SeriesError),

    /// Returned when a noise buffer has the wrong length: a precomputed
    /// array must match the requested size, and a sampler must return
    /// exactly the number of samples asked for.
    #[error("noise length mismatch: expected {expected}, got {got}")]
    NoiseLengthMismatch {
        /// Length required by the engine.
        expected: usize,
        /// Length actually supplied.
        got: usize,
    },

    /// Returned when a precomputed noise array is shorter than the
    /// burn-in it must seed.
    #[error("burn-in of {burn_in} exceeds the series size {size}")]
    BurnInExceedsSize {
        /// Burn-in length, the larger of the two coefficient orders.
        burn_in: usize,
        /// Requested series size.
        size: usize,
    },

    /// Returned when a caller-supplied noise sampler reports an error.
    #[error("noise sampler failed: {message}")]
    SamplerFailed {
        /// Message reported by the sampler.
        message: String,
    },
}
