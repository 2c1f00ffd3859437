//! Evenly spaced series data model.

use cadence_calendar::{TimePoint, TimelineSpec};
use tracing::debug;

use crate::error::SeriesError;
use crate::split::{SplitSpec, SplitState};

/// Minimum number of values in a series.
pub const MIN_SERIES_LEN: usize = 2;

/// An evenly spaced one-dimensional time series.
///
/// Pairs a value sequence with a timeline of equal length, sorted
/// ascending by time. A series is immutable after construction except
/// for [`train_test_split`](Self::train_test_split), which may run once
/// and only records index boundaries.
///
/// # Example
///
/// ```ignore
/// use cadence_series::{Series, SplitSpec};
///
/// let mut series = Series::new(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0])?;
/// series.train_test_split(SplitSpec::new())?;
/// assert_eq!(series.train()?.len(), 8);
/// assert_eq!(series.test(false)?.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    values: Vec<f64>,
    timeline: Vec<TimePoint>,
    name: Option<String>,
    split: Option<SplitState>,
}

impl Series {
    /// Creates a series over the default index timeline `0..n`.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::TooFewValues`] if fewer than two values are
    /// given.
    pub fn new(values: Vec<f64>) -> Result<Self, SeriesError> {
        SeriesBuilder::new().build(values)
    }

    /// Creates a series over an explicit timeline.
    ///
    /// The `(timeline, value)` pairs are sorted ascending by time, so the
    /// timeline may be supplied in any order.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`SeriesError::TooFewValues`] | fewer than two values |
    /// | [`SeriesError::LengthMismatch`] | timeline length differs from values |
    pub fn with_timeline(
        values: Vec<f64>,
        timeline: Vec<TimePoint>,
    ) -> Result<Self, SeriesError> {
        SeriesBuilder::new().with_timeline(timeline).build(values)
    }

    /// Returns a builder for series with names or date timelines.
    pub fn builder() -> SeriesBuilder {
        SeriesBuilder::new()
    }

    /// Returns the values, sorted by their timeline.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Consumes the series and returns its values.
    pub fn into_values(self) -> Vec<f64> {
        self.values
    }

    /// Returns the timeline, sorted ascending.
    pub fn timeline(&self) -> &[TimePoint] {
        &self.timeline
    }

    /// Returns the series name, if one was given.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the number of observations.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the series is empty.
    ///
    /// Note: a valid `Series` is never empty (minimum length is 2).
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns `true` once the series has been split.
    pub fn is_split(&self) -> bool {
        self.split.is_some()
    }

    /// Returns the recorded split boundaries, if the series was split.
    pub fn split_state(&self) -> Option<SplitState> {
        self.split
    }

    /// Returns `true` if a split reserved a validation segment.
    pub fn has_validation(&self) -> bool {
        self.split.is_some_and(|state| state.has_validation())
    }

    /// Splits the series into train, test, and optional validation
    /// segments by recording index boundaries.
    ///
    /// The values and timeline are untouched; the segments are read back
    /// through [`train`](Self::train), [`validation`](Self::validation),
    /// and [`test`](Self::test).
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`SeriesError::AlreadySplit`] | the series was split before |
    /// | [`SeriesError::ProportionOutOfRange`] | a proportion outside `[0, 1]` |
    /// | [`SeriesError::ProportionsNotNormalized`] | given proportions do not sum to one |
    /// | [`SeriesError::OverAllocated`] | train or test plus val exceeds one |
    pub fn train_test_split(&mut self, spec: SplitSpec) -> Result<(), SeriesError> {
        if self.split.is_some() {
            return Err(SeriesError::AlreadySplit);
        }
        let proportions = spec.resolve()?;
        let state = SplitState::from_proportions(self.values.len(), &proportions);
        debug!(
            train_end = state.train_end(),
            val_end = ?state.val_end(),
            "recorded split boundaries"
        );
        self.split = Some(state);
        Ok(())
    }

    /// Returns the training segment as a fresh series.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::NotSplit`] if the series was never split,
    /// or [`SeriesError::TooFewValues`] if the segment holds fewer than
    /// two points.
    pub fn train(&self) -> Result<Series, SeriesError> {
        let split = self.split.ok_or(SeriesError::NotSplit)?;
        self.sub_series(0, split.train_end())
    }

    /// Returns the validation segment as a fresh series.
    ///
    /// With `include_last` the segment is extended one point to the left
    /// to overlap the last training point.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::NoValidationSet`] unless the split recorded
    /// a validation boundary, or [`SeriesError::TooFewValues`] if the
    /// segment holds fewer than two points.
    pub fn validation(&self, include_last: bool) -> Result<Series, SeriesError> {
        let split = self.split.ok_or(SeriesError::NoValidationSet)?;
        let val_end = split.val_end().ok_or(SeriesError::NoValidationSet)?;
        let start = split.train_end().saturating_sub(usize::from(include_last));
        self.sub_series(start, val_end)
    }

    /// Returns the testing segment as a fresh series.
    ///
    /// The segment starts after the validation boundary when one exists,
    /// otherwise after the training boundary. With `include_last` it is
    /// extended one point to the left to overlap the preceding segment.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::NotSplit`] if the series was never split,
    /// or [`SeriesError::TooFewValues`] if the segment holds fewer than
    /// two points.
    pub fn test(&self, include_last: bool) -> Result<Series, SeriesError> {
        let split = self.split.ok_or(SeriesError::NotSplit)?;
        let anchor = split.val_end().unwrap_or(split.train_end());
        let start = anchor.saturating_sub(usize::from(include_last));
        self.sub_series(start, self.values.len())
    }

    /// Copies `[start, end)` into a fresh unsplit, unnamed series.
    fn sub_series(&self, start: usize, end: usize) -> Result<Series, SeriesError> {
        Series::with_timeline(
            self.values[start..end].to_vec(),
            self.timeline[start..end].to_vec(),
        )
    }
}

/// Builder for [`Series`] with optional name and timeline sources.
///
/// Timeline sources take priority in this order: an explicit point list,
/// then a non-empty [`TimelineSpec`], then default integer indices.
///
/// ```ignore
/// let series = Series::builder()
///     .with_name("discharge")
///     .with_spec(TimelineSpec::new().with_start_literal("2000-01-01")?.with_by_literal("1d")?)
///     .build(values)?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct SeriesBuilder {
    name: Option<String>,
    timeline: Option<Vec<TimePoint>>,
    spec: TimelineSpec,
}

impl SeriesBuilder {
    /// Creates a builder with no name and the default index timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the series name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets an explicit timeline, overriding any specification.
    pub fn with_timeline(mut self, timeline: Vec<TimePoint>) -> Self {
        self.timeline = Some(timeline);
        self
    }

    /// Sets a timeline specification to resolve at build time.
    pub fn with_spec(mut self, spec: TimelineSpec) -> Self {
        self.spec = spec;
        self
    }

    /// Builds the series.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`SeriesError::TooFewValues`] | fewer than two values |
    /// | [`SeriesError::LengthMismatch`] | explicit timeline length differs |
    /// | [`SeriesError::Timeline`] | the timeline specification fails to resolve |
    pub fn build(self, values: Vec<f64>) -> Result<Series, SeriesError> {
        if values.len() < MIN_SERIES_LEN {
            return Err(SeriesError::TooFewValues {
                len: values.len(),
                min: MIN_SERIES_LEN,
            });
        }

        let (values, timeline) = if let Some(timeline) = self.timeline {
            if timeline.len() != values.len() {
                return Err(SeriesError::LengthMismatch {
                    values: values.len(),
                    timeline: timeline.len(),
                });
            }
            // Keep pairs together while ordering by time. The sort is
            // stable, so values on tied points keep their input order.
            let mut pairs: Vec<(TimePoint, f64)> = timeline.into_iter().zip(values).collect();
            pairs.sort_by_key(|(point, _)| *point);
            let (timeline, values): (Vec<TimePoint>, Vec<f64>) = pairs.into_iter().unzip();
            (values, timeline)
        } else {
            let built = self.spec.resolve(values.len())?;
            (values, built.into_points())
        };

        Ok(Series {
            values,
            timeline,
            name: self.name,
            split: None,
        })
    }
}
