//! # cadence-arma
//!
//! ARMA(p,q) series generation over evenly spaced timelines.
//!
//! ## Workflow
//!
//! ```mermaid
//! graph LR
//!     A["ArmaModel::new(ar, ma)"] -->|".generate(size, source, params, spec, rng)?"| B["Series"]
//!     C["NoiseSource::Distribution"] --> A
//!     D["NoiseSource::Array"] --> A
//!     E["NoiseSource::Sampler"] --> A
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! let model = ArmaModel::new(vec![0.6, -0.2], vec![0.3]);
//! let series = model.generate(
//!     365,
//!     NoiseSource::default(),
//!     NoiseParams::new(),
//!     TimelineSpec::new()
//!         .with_start_literal("2000-01-01")?
//!         .with_by_literal("1d")?,
//!     &mut rng,
//! )?;
//! ```
//!
//! ## Noise Sources
//!
//! | Variant | Behavior |
//! |---------|----------|
//! | [`NoiseSource::Distribution`] | samples a named distribution with the model's parameters |
//! | [`NoiseSource::Array`] | replays a caller-supplied array as the noise terms |
//! | [`NoiseSource::Sampler`] | defers to a caller-supplied callback |

mod error;
mod generate;
mod model;
mod source;

pub use error::ArmaError;
pub use model::ArmaModel;
pub use source::{NoiseSource, SamplerFn};
