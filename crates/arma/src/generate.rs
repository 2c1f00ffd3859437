//! The ARMA generating recurrence.

use cadence_calendar::TimelineSpec;
use cadence_noise::NoiseParams;
use cadence_series::Series;
use rand::Rng;
use tracing::debug;

use crate::error::ArmaError;
use crate::model::ArmaModel;
use crate::source::NoiseSource;

impl ArmaModel {
    /// Generates a series of `size` values on the timeline described by
    /// `spec`.
    ///
    /// The model seeds `burn_in` extra noise samples ahead of the series
    /// so the recurrence windows are full from the start, runs the
    /// recurrence, and reports the last `size` values. The first reported
    /// value is always a raw noise term; the recurrence starts one step
    /// later.
    ///
    /// When `params` carries an explicit scale, it is divided by the
    /// timeline step in years before the noise is drawn. The default
    /// scale is used as-is.
    ///
    /// The series is named after the model orders, for example
    /// `ARMA (2,1)`.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`ArmaError::Timeline`] | `spec` is underspecified or rejects `size` |
    /// | [`ArmaError::Noise`] | the distribution rejects `params` |
    /// | [`ArmaError::NoiseLengthMismatch`] | an array or sampler source produced the wrong number of samples |
    /// | [`ArmaError::BurnInExceedsSize`] | an array source is too short to seed the burn-in |
    /// | [`ArmaError::SamplerFailed`] | a sampler source reported an error |
    /// | [`ArmaError::Series`] | `size` is below the series minimum |
    #[tracing::instrument(skip_all, fields(size, p = self.ar_order(), q = self.ma_order()))]
    pub fn generate<R: Rng>(
        &self,
        size: usize,
        source: NoiseSource,
        params: NoiseParams,
        spec: TimelineSpec,
        rng: &mut R,
    ) -> Result<Series, ArmaError> {
        let timeline = spec.resolve(size)?;
        let params = match params.explicit_scale() {
            Some(scale) => params.with_scale(scale / timeline.step_years()),
            None => params,
        };

        let burn_in = self.burn_in();
        let noise = seeded_noise(source, burn_in, size, params, rng)?;
        debug!(
            burn_in,
            samples = noise.len(),
            step_years = timeline.step_years(),
            "noise seeded"
        );

        let mut values = noise.clone();
        for t in (burn_in + 1)..(burn_in + size) {
            let mut increment = 0.0;
            for (lag, coefficient) in self.ar().iter().enumerate() {
                increment += coefficient * values[t - 1 - lag];
            }
            for (lag, coefficient) in self.ma().iter().enumerate() {
                increment += coefficient * noise[t - 1 - lag];
            }
            values[t] += increment;
        }

        let series = Series::builder()
            .with_name(format!("ARMA ({},{})", self.ar_order(), self.ma_order()))
            .with_timeline(timeline.into_points())
            .build(values[burn_in..].to_vec())?;
        Ok(series)
    }
}

/// Draws `burn_in + size` noise samples from `source`.
///
/// Array sources carry exactly `size` values; their tail is replayed as
/// the burn-in seed so the reported noise terms are the caller's array.
fn seeded_noise(
    source: NoiseSource,
    burn_in: usize,
    size: usize,
    params: NoiseParams,
    rng: &mut impl Rng,
) -> Result<Vec<f64>, ArmaError> {
    match source {
        NoiseSource::Distribution(distribution) => {
            Ok(cadence_noise::sample(distribution, burn_in + size, params, rng)?)
        }
        NoiseSource::Array(values) => {
            if values.len() != size {
                return Err(ArmaError::NoiseLengthMismatch {
                    expected: size,
                    got: values.len(),
                });
            }
            if burn_in > size {
                return Err(ArmaError::BurnInExceedsSize { burn_in, size });
            }
            let mut noise = Vec::with_capacity(burn_in + size);
            noise.extend_from_slice(&values[size - burn_in..]);
            noise.extend_from_slice(&values);
            Ok(noise)
        }
        NoiseSource::Sampler(mut sampler) => {
            let noise = sampler(burn_in + size, params)
                .map_err(|message| ArmaError::SamplerFailed { message })?;
            if noise.len() != burn_in + size {
                return Err(ArmaError::NoiseLengthMismatch {
                    expected: burn_in + size,
                    got: noise.len(),
                });
            }
            Ok(noise)
        }
    }
}
