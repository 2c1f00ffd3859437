//! # cadence-calendar
//!
//! Date arithmetic and timeline construction for evenly spaced series.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["date literal"] -->|"parse_date()"| B["NaiveDateTime"]
//!     C["period literal"] -->|"parse_period()"| D["TimeDelta"]
//!     B --> E["TimelineSpec"]
//!     D --> E
//!     E -->|".build(size)"| F["BuiltTimeline"]
//!     F -->|".points()"| G["Vec of TimePoint"]
//!     D -->|"delta_years()"| H["fractional years"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use cadence_calendar::{TimelineSpec, TimePoint, parse_period, delta_years};
//!
//! // Literal parsing
//! let by = parse_period("2.5d")?;
//!
//! // Timeline construction: any two of start, end, by
//! let timeline = TimelineSpec::new()
//!     .with_start_literal("2000-01-01")?
//!     .with_by(by)
//!     .build(100)?;
//! assert_eq!(timeline.len(), 100);
//!
//! // Step between points in fractional years
//! let step = timeline.step_years();
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `parse` | Date and period literal parsing |
//! | `point` | Timeline point type (index or date) |
//! | `sequence` | Date sequence generation |
//! | `spec` | Timeline specification and resolution |
//! | `years` | Duration-to-years conversion |
//! | `error` | Error types |

mod error;
mod parse;
mod point;
mod sequence;
mod spec;
mod years;

pub use error::CalendarError;
pub use parse::{DATE_FORMATS, parse_date, parse_period};
pub use point::TimePoint;
pub use sequence::{evenly_spaced, fixed_period};
pub use spec::{BuiltTimeline, MIN_TIMELINE_LEN, TimelineSpec};
pub use years::delta_years;
