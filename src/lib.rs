//! # cadence
//!
//! Evenly spaced one-dimensional time series: timeline construction,
//! train/validation/test splitting, and stochastic generation.
//!
//! This crate re-exports the workspace members; depend on it for the
//! whole toolkit or on the individual `cadence-*` crates for a subset.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph TD
//!     calendar["cadence-calendar<br/>dates, periods, timelines"] --> series["cadence-series<br/>series + splitting"]
//!     series --> noise["cadence-noise<br/>noise sampling"]
//!     calendar --> noise
//!     noise --> arma["cadence-arma<br/>ARMA generation"]
//!     series --> arma
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use cadence::{ArmaModel, NoiseParams, NoiseSource, SplitSpec, TimelineSpec};
//!
//! let spec = TimelineSpec::new()
//!     .with_start_literal("2000-01-01")?
//!     .with_by_literal("1d")?;
//! let mut series = ArmaModel::new(vec![0.6], vec![0.3]).generate(
//!     365,
//!     NoiseSource::default(),
//!     NoiseParams::new(),
//!     spec,
//!     &mut rng,
//! )?;
//! series.train_test_split(SplitSpec::new())?;
//! let train = series.train()?;
//! ```
//!
//! ## Crates
//!
//! | Crate | Concern |
//! |-------|---------|
//! | [`calendar`] | date and period parsing, evenly spaced timelines, interval years |
//! | [`series`] | the [`Series`] container and one-time train/val/test splits |
//! | [`noise`] | gaussian and laplace noise, interval-aware rescaling |
//! | [`arma`] | the ARMA(p,q) generating recurrence over any noise source |

pub use cadence_arma as arma;
pub use cadence_calendar as calendar;
pub use cadence_noise as noise;
pub use cadence_series as series;

pub use cadence_arma::{ArmaError, ArmaModel, NoiseSource, SamplerFn};
pub use cadence_calendar::{
    BuiltTimeline, CalendarError, TimePoint, TimelineSpec, delta_years, parse_date, parse_period,
};
pub use cadence_noise::{
    NoiseDistribution, NoiseError, NoiseParams, gaussian_noise, laplacian_noise,
};
pub use cadence_series::{
    Series, SeriesBuilder, SeriesError, SplitProportions, SplitSpec, validate_proportions,
};
