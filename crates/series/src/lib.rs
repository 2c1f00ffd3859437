//! # cadence-series
//!
//! The evenly spaced series data model and its train/val/test splitting.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["values"] --> B["SeriesBuilder"]
//!     C["TimePoint list"] --> B
//!     D["TimelineSpec"] --> B
//!     B -->|".build()"| E["Series"]
//!     F["SplitSpec"] -->|".train_test_split()"| E
//!     E -->|".train()"| G["Series"]
//!     E -->|".validation()"| G
//!     E -->|".test()"| G
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use cadence_series::{Series, SplitSpec};
//!
//! let mut series = Series::new((1..=10).map(f64::from).collect())?;
//! series.train_test_split(SplitSpec::new().with_test(0.3).with_val(0.3))?;
//!
//! let train = series.train()?;        // first 4 points
//! let val = series.validation(false)?; // next 3 points
//! let test = series.test(false)?;      // last 3 points
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `series` | Series type and builder |
//! | `split` | Split configuration and boundaries |
//! | `proportions` | Proportion validation |
//! | `error` | Error types |

mod error;
mod proportions;
mod series;
mod split;

pub use error::SeriesError;
pub use proportions::{SplitProportions, validate_proportions};
pub use series::{MIN_SERIES_LEN, Series, SeriesBuilder};
pub use split::{DEFAULT_TRAIN, SplitSpec, SplitState};
