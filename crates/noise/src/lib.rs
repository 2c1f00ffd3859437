//! # cadence-noise
//!
//! Independent noise generation with interval-aware variance rescaling.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["name"] -->|"FromStr"| B["NoiseDistribution"]
//!     B --> C["sample()"]
//!     D["NoiseParams"] --> C
//!     C --> E["Vec of f64"]
//!     F["TimelineSpec"] --> G["gaussian_noise() / laplacian_noise()"]
//!     G --> H["Series"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use cadence_calendar::TimelineSpec;
//! use cadence_noise::gaussian_noise;
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//! let spec = TimelineSpec::new()
//!     .with_start_literal("2000-01-01")?
//!     .with_by_literal("1d")?;
//!
//! // Per-year scale 1.0, rescaled by sqrt of the daily step.
//! let series = gaussian_noise(365, 1.0, spec, &mut rng)?;
//! assert_eq!(series.len(), 365);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `distribution` | Distribution registry and name parsing |
//! | `params` | Location/scale draw parameters |
//! | `sample` | Registry-dispatch sampling |
//! | `generate` | Dated noise series generators |
//! | `error` | Error types |

mod distribution;
mod error;
mod generate;
mod params;
mod sample;

pub use distribution::NoiseDistribution;
pub use error::NoiseError;
pub use generate::{gaussian_noise, laplacian_noise};
pub use params::NoiseParams;
pub use sample::sample;
