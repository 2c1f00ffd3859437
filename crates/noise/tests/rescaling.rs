//! Interval rescaling integration tests for cadence-noise.

use cadence_calendar::TimelineSpec;
use cadence_noise::{gaussian_noise, laplacian_noise};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn std_dev(xs: &[f64]) -> f64 {
    let m = xs.iter().sum::<f64>() / xs.len() as f64;
    (xs.iter().map(|x| (x - m).powi(2)).sum::<f64>() / xs.len() as f64).sqrt()
}

fn daily_spec() -> TimelineSpec {
    TimelineSpec::new()
        .with_start_literal("2000-01-01")
        .unwrap()
        .with_by_literal("1d")
        .unwrap()
}

#[test]
fn same_seed_reproduces_the_series() {
    let mut rng = StdRng::seed_from_u64(99);
    let a = gaussian_noise(200, 1.0, daily_spec(), &mut rng).unwrap();
    let mut rng = StdRng::seed_from_u64(99);
    let b = gaussian_noise(200, 1.0, daily_spec(), &mut rng).unwrap();
    assert_eq!(a.values(), b.values());
    assert_eq!(a.timeline(), b.timeline());
}

#[test]
fn laplace_spread_exceeds_gaussian_at_equal_scale() {
    // With the same scale parameter the laplace draw has sqrt(2) times
    // the standard deviation of the gaussian draw.
    let mut rng = StdRng::seed_from_u64(42);
    let gauss = gaussian_noise(4000, 1.0, TimelineSpec::new(), &mut rng).unwrap();
    let mut rng = StdRng::seed_from_u64(42);
    let laplace = laplacian_noise(4000, 1.0, TimelineSpec::new(), &mut rng).unwrap();

    let ratio = std_dev(laplace.values()) / std_dev(gauss.values());
    let expected = 2.0_f64.sqrt();
    assert!(
        (ratio - expected).abs() < 0.12,
        "std ratio: expected ~{expected:.3}, got {ratio:.3}"
    );
}

#[test]
fn monthly_step_rescales_both_generators() {
    let spec = TimelineSpec::new()
        .with_start_literal("2000-01-01")
        .unwrap()
        .with_by_literal("1m")
        .unwrap();
    let step: f64 = 30.4 / 365.25;

    let mut rng = StdRng::seed_from_u64(7);
    let gauss = gaussian_noise(3000, 2.0, spec, &mut rng).unwrap();
    let expected = 2.0 * step.sqrt();
    let s = std_dev(gauss.values());
    assert!(
        (s - expected).abs() < 0.05,
        "monthly gaussian std: expected ~{expected:.3}, got {s:.3}"
    );

    let mut rng = StdRng::seed_from_u64(7);
    let laplace = laplacian_noise(3000, 2.0, spec, &mut rng).unwrap();
    let expected = 2.0 * step.sqrt() * 2.0_f64.sqrt();
    let s = std_dev(laplace.values());
    assert!(
        (s - expected).abs() < 0.08,
        "monthly laplace std: expected ~{expected:.3}, got {s:.3}"
    );
}

#[test]
fn generated_series_are_splittable() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut series = gaussian_noise(10, 1.0, TimelineSpec::new(), &mut rng).unwrap();
    series
        .train_test_split(cadence_series::SplitSpec::new())
        .unwrap();
    assert_eq!(series.train().unwrap().len(), 8);
    assert_eq!(series.test(false).unwrap().len(), 2);
}
