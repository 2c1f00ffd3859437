//! Timeline specification and construction.

use chrono::{NaiveDateTime, TimeDelta};
use tracing::debug;

use crate::error::CalendarError;
use crate::parse::{parse_date, parse_period};
use crate::point::TimePoint;
use crate::sequence::{evenly_spaced, fixed_period};
use crate::years::delta_years;

/// Minimum number of points in a built timeline.
pub const MIN_TIMELINE_LEN: usize = 2;

/// Declarative description of a timeline: any two of start date, end date
/// and sampling period.
///
/// [`build`](Self::build) resolves the description into concrete dates.
/// When all three fields are set, the start date and period win and the
/// end date is ignored.
///
/// ```ignore
/// let timeline = TimelineSpec::new()
///     .with_start_literal("2000-01-01")?
///     .with_by_literal("1d")?
///     .build(100)?;
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TimelineSpec {
    start: Option<NaiveDateTime>,
    end: Option<NaiveDateTime>,
    by: Option<TimeDelta>,
}

impl TimelineSpec {
    /// Creates an empty specification.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the start date.
    pub fn with_start(mut self, start: NaiveDateTime) -> Self {
        self.start = Some(start);
        self
    }

    /// Sets the end date.
    pub fn with_end(mut self, end: NaiveDateTime) -> Self {
        self.end = Some(end);
        self
    }

    /// Sets the sampling period.
    pub fn with_by(mut self, by: TimeDelta) -> Self {
        self.by = Some(by);
        self
    }

    /// Sets the start date from a date literal such as `"2000-01-01"`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDateFormat`] if the literal matches
    /// none of the supported formats.
    pub fn with_start_literal(self, literal: &str) -> Result<Self, CalendarError> {
        Ok(self.with_start(parse_date(literal)?))
    }

    /// Sets the end date from a date literal.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDateFormat`] if the literal matches
    /// none of the supported formats.
    pub fn with_end_literal(self, literal: &str) -> Result<Self, CalendarError> {
        Ok(self.with_end(parse_date(literal)?))
    }

    /// Sets the sampling period from a period literal such as `"2.5d"`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidPeriodFormat`] if the literal is not
    /// a number followed by `d`, `m` or `y`.
    pub fn with_by_literal(self, literal: &str) -> Result<Self, CalendarError> {
        Ok(self.with_by(parse_period(literal)?))
    }

    /// Returns the start date, if set.
    pub fn start(&self) -> Option<NaiveDateTime> {
        self.start
    }

    /// Returns the end date, if set.
    pub fn end(&self) -> Option<NaiveDateTime> {
        self.end
    }

    /// Returns the sampling period, if set.
    pub fn by(&self) -> Option<TimeDelta> {
        self.by
    }

    /// Returns `true` if no field is set.
    pub fn is_empty(&self) -> bool {
        self.start.is_none() && self.end.is_none() && self.by.is_none()
    }

    /// Resolves the specification into a timeline of `size` dates.
    ///
    /// Three combinations of fields are accepted, tried in this order:
    ///
    /// 1. start and period: `size` dates forward from the start;
    /// 2. end and period: `size` dates backward from the end, returned in
    ///    ascending order;
    /// 3. start and end: `size` dates linearly interpolated between the
    ///    two, both inclusive.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`CalendarError::SizeTooSmall`] | `size < 2` |
    /// | [`CalendarError::UnderspecifiedTimeline`] | fewer than two fields set |
    /// | [`CalendarError::InvalidRange`] | interpolation with `end < start` |
    /// | [`CalendarError::DateOutOfRange`] | a generated date overflows |
    pub fn build(&self, size: usize) -> Result<BuiltTimeline, CalendarError> {
        if size < MIN_TIMELINE_LEN {
            return Err(CalendarError::SizeTooSmall {
                size,
                min: MIN_TIMELINE_LEN,
            });
        }

        let dates = match (self.start, self.end, self.by) {
            (Some(start), _, Some(by)) => {
                debug!(%start, size, "building timeline forward from start");
                fixed_period(start, by, size)?
            }
            (None, Some(end), Some(by)) => {
                debug!(%end, size, "building timeline backward from end");
                let backward = TimeDelta::zero()
                    .checked_sub(&by)
                    .ok_or(CalendarError::DateOutOfRange)?;
                fixed_period(end, backward, size)?
            }
            (Some(start), Some(end), None) => {
                debug!(%start, %end, size, "interpolating timeline between endpoints");
                evenly_spaced(start, end, size)?
            }
            _ => return Err(CalendarError::UnderspecifiedTimeline),
        };

        let step_years = delta_years(dates[1] - dates[0]);
        let points = dates.into_iter().map(TimePoint::Date).collect();
        Ok(BuiltTimeline { points, step_years })
    }

    /// Resolves the specification, falling back to the unit index
    /// timeline when no field is set.
    ///
    /// This is the defaulting rule used by the generators: a request
    /// without dates gets integer points `0..size` and a unit step.
    ///
    /// # Errors
    ///
    /// As for [`build`](Self::build), except that an empty specification
    /// is not an error here.
    pub fn resolve(&self, size: usize) -> Result<BuiltTimeline, CalendarError> {
        if self.is_empty() {
            return Ok(BuiltTimeline::unit(size));
        }
        self.build(size)
    }
}

/// A resolved timeline: ordered points plus the step between the first
/// two expressed in fractional years.
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltTimeline {
    points: Vec<TimePoint>,
    step_years: f64,
}

impl BuiltTimeline {
    /// Creates an index timeline `0..size` with a unit step.
    pub fn unit(size: usize) -> Self {
        Self {
            points: (0..size).map(|i| TimePoint::Index(i as i64)).collect(),
            step_years: 1.0,
        }
    }

    /// Returns the timeline points.
    pub fn points(&self) -> &[TimePoint] {
        &self.points
    }

    /// Consumes the timeline, returning its points.
    pub fn into_points(self) -> Vec<TimePoint> {
        self.points
    }

    /// Returns the step between consecutive points in fractional years.
    pub fn step_years(&self) -> f64 {
        self.step_years
    }

    /// Returns the number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the timeline holds no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
