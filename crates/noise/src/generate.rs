//! Dated noise series generation.

use cadence_calendar::TimelineSpec;
use cadence_series::Series;
use rand::Rng;
use tracing::debug;

use crate::distribution::NoiseDistribution;
use crate::error::NoiseError;
use crate::params::NoiseParams;
use crate::sample::sample;

/// Generates a series of independent gaussian noise.
///
/// `scale` is a per-year standard deviation: the per-step deviation is
/// `scale * sqrt(step_years)`, where the step comes from resolving
/// `spec` (1 for the default index timeline).
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`NoiseError::Timeline`] | `spec` names dates but cannot be resolved |
/// | [`NoiseError::InvalidParams`] | negative or non-finite `scale` |
/// | [`NoiseError::Series`] | `size < 2` |
pub fn gaussian_noise(
    size: usize,
    scale: f64,
    spec: TimelineSpec,
    rng: &mut impl Rng,
) -> Result<Series, NoiseError> {
    noise_series(NoiseDistribution::Gaussian, "Gaussian", size, scale, spec, rng)
}

/// Generates a series of independent laplace noise.
///
/// The interval handling matches [`gaussian_noise`]: the per-step
/// diversity is `scale * sqrt(step_years)`.
///
/// # Errors
///
/// As for [`gaussian_noise`], except the laplace distribution also
/// rejects a zero scale.
pub fn laplacian_noise(
    size: usize,
    scale: f64,
    spec: TimelineSpec,
    rng: &mut impl Rng,
) -> Result<Series, NoiseError> {
    noise_series(NoiseDistribution::Laplace, "Laplacian", size, scale, spec, rng)
}

fn noise_series(
    distribution: NoiseDistribution,
    label: &str,
    size: usize,
    scale: f64,
    spec: TimelineSpec,
    rng: &mut impl Rng,
) -> Result<Series, NoiseError> {
    let timeline = spec.resolve(size)?;
    let params = NoiseParams::new().with_scale(scale * timeline.step_years().sqrt());
    debug!(
        %distribution,
        size,
        step_years = timeline.step_years(),
        "drawing noise series"
    );
    let values = sample(distribution, size, params, rng)?;
    let series = Series::builder()
        .with_name(format!("{label} noise (scale={scale})"))
        .with_timeline(timeline.into_points())
        .build(values)?;
    Ok(series)
}
