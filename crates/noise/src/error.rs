//! Error types for the cadence-noise crate.

use cadence_calendar::CalendarError;
use cadence_series::SeriesError;

/// Error type for all fallible operations in the cadence-noise crate.
///
/// Covers unknown distribution names, parameters the underlying
/// distributions reject, and failures of the timeline or series layers
/// the generators build on.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NoiseError {
    /// Timeline construction error.
    #[error(transparent)]
    Timeline(#[from] CalendarError),

    /// Series construction error.
    #[error(transparent)]
    Series(#[from] SeriesError),

    /// Returned when a distribution name is not in the registry.
    #[error("unknown noise distribution `{name}` (expected gaussian, normal, or laplace)")]
    UnknownDistribution {
        /// The rejected name.
        name: String,
    },

    /// Returned when the underlying distribution rejects the parameters,
    /// for example a negative or non-finite scale.
    #[error("invalid noise parameters (loc={loc}, scale={scale}): {message}")]
    InvalidParams {
        /// Requested location.
        loc: f64,
        /// Requested scale.
        scale: f64,
        /// Reason reported by the distribution.
        message: String,
    },
}
