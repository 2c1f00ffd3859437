//! Random sampling from the distribution registry.

use rand::Rng;
use rand::distr::Open01;
use rand_distr::{Distribution, Normal};
use statrs::distribution::{ContinuousCDF, Laplace};

use crate::distribution::NoiseDistribution;
use crate::error::NoiseError;
use crate::params::NoiseParams;

/// Draws `size` independent samples from `distribution`.
///
/// Gaussian samples come from [`rand_distr::Normal`]. Laplace samples
/// are drawn by inverse transform through the statrs quantile function,
/// with open-interval uniforms so the quantile is never evaluated at its
/// divergent endpoints.
///
/// # Errors
///
/// Returns [`NoiseError::InvalidParams`] if the distribution rejects
/// `params`, for example a negative gaussian scale or a non-positive
/// laplace scale.
pub fn sample(
    distribution: NoiseDistribution,
    size: usize,
    params: NoiseParams,
    rng: &mut impl Rng,
) -> Result<Vec<f64>, NoiseError> {
    match distribution {
        NoiseDistribution::Gaussian => {
            let normal = Normal::new(params.loc(), params.scale())
                .map_err(|e| invalid_params(params, e.to_string()))?;
            Ok((0..size).map(|_| normal.sample(rng)).collect())
        }
        NoiseDistribution::Laplace => {
            let laplace = Laplace::new(params.loc(), params.scale())
                .map_err(|e| invalid_params(params, e.to_string()))?;
            Ok((0..size)
                .map(|_| {
                    let u: f64 = rng.sample(Open01);
                    laplace.inverse_cdf(u)
                })
                .collect())
        }
    }
}

fn invalid_params(params: NoiseParams, message: String) -> NoiseError {
    NoiseError::InvalidParams {
        loc: params.loc(),
        scale: params.scale(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn mean(xs: &[f64]) -> f64 {
        xs.iter().sum::<f64>() / xs.len() as f64
    }

    fn std_dev(xs: &[f64]) -> f64 {
        let m = mean(xs);
        (xs.iter().map(|x| (x - m).powi(2)).sum::<f64>() / xs.len() as f64).sqrt()
    }

    #[test]
    fn sample_length_and_determinism() {
        let mut rng = StdRng::seed_from_u64(7);
        let a = sample(NoiseDistribution::Gaussian, 100, NoiseParams::new(), &mut rng).unwrap();
        assert_eq!(a.len(), 100);

        let mut rng = StdRng::seed_from_u64(7);
        let b = sample(NoiseDistribution::Gaussian, 100, NoiseParams::new(), &mut rng).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn gaussian_moments() {
        let mut rng = StdRng::seed_from_u64(42);
        let xs = sample(NoiseDistribution::Gaussian, 4000, NoiseParams::new(), &mut rng).unwrap();
        let m = mean(&xs);
        let s = std_dev(&xs);
        assert!(m.abs() < 0.1, "gaussian mean: expected ~0, got {m:.3}");
        assert!((s - 1.0).abs() < 0.1, "gaussian std: expected ~1, got {s:.3}");
    }

    #[test]
    fn gaussian_location_shift() {
        let mut rng = StdRng::seed_from_u64(42);
        let params = NoiseParams::new().with_loc(5.0).with_scale(0.5);
        let xs = sample(NoiseDistribution::Gaussian, 4000, params, &mut rng).unwrap();
        let m = mean(&xs);
        assert!((m - 5.0).abs() < 0.1, "shifted mean: expected ~5, got {m:.3}");
    }

    #[test]
    fn gaussian_zero_scale_is_degenerate() {
        let mut rng = StdRng::seed_from_u64(1);
        let params = NoiseParams::new().with_loc(3.0).with_scale(0.0);
        let xs = sample(NoiseDistribution::Gaussian, 10, params, &mut rng).unwrap();
        assert!(xs.iter().all(|&x| x == 3.0));
    }

    #[test]
    fn laplace_moments() {
        // Laplace variance is 2 * scale^2.
        let mut rng = StdRng::seed_from_u64(42);
        let xs = sample(NoiseDistribution::Laplace, 4000, NoiseParams::new(), &mut rng).unwrap();
        let m = mean(&xs);
        let s = std_dev(&xs);
        let expected = 2.0_f64.sqrt();
        assert!(m.abs() < 0.15, "laplace mean: expected ~0, got {m:.3}");
        assert!(
            (s - expected).abs() < 0.15,
            "laplace std: expected ~{expected:.3}, got {s:.3}"
        );
    }

    #[test]
    fn laplace_is_heavier_tailed_than_gaussian() {
        let mut rng = StdRng::seed_from_u64(9);
        let laplace = sample(NoiseDistribution::Laplace, 4000, NoiseParams::new(), &mut rng).unwrap();
        let mut rng = StdRng::seed_from_u64(9);
        let gauss = sample(NoiseDistribution::Gaussian, 4000, NoiseParams::new(), &mut rng).unwrap();

        let kurtosis = |xs: &[f64]| {
            let m = mean(xs);
            let var = xs.iter().map(|x| (x - m).powi(2)).sum::<f64>() / xs.len() as f64;
            xs.iter().map(|x| (x - m).powi(4)).sum::<f64>() / xs.len() as f64 / (var * var)
        };
        assert!(
            kurtosis(&laplace) > kurtosis(&gauss),
            "laplace kurtosis {:.2} should exceed gaussian {:.2}",
            kurtosis(&laplace),
            kurtosis(&gauss)
        );
    }

    #[test]
    fn negative_scale_is_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        let params = NoiseParams::new().with_scale(-1.0);
        for distribution in [NoiseDistribution::Gaussian, NoiseDistribution::Laplace] {
            let err = sample(distribution, 10, params, &mut rng).unwrap_err();
            assert!(matches!(err, NoiseError::InvalidParams { .. }));
        }
    }

    #[test]
    fn zero_size_is_empty() {
        let mut rng = StdRng::seed_from_u64(1);
        let xs = sample(NoiseDistribution::Laplace, 0, NoiseParams::new(), &mut rng).unwrap();
        assert!(xs.is_empty());
    }
}
