//! Error types for the cadence-series crate.

use cadence_calendar::CalendarError;

/// Error type for all fallible operations in the cadence-series crate.
///
/// Covers construction failures, invalid split proportions, and split
/// accessors called before the required boundary exists.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SeriesError {
    /// Timeline construction error.
    #[error(transparent)]
    Timeline(#[from] CalendarError),

    /// Returned when a series is constructed with too few values.
    #[error("series needs at least {min} values, got {len}")]
    TooFewValues {
        /// Number of values supplied.
        len: usize,
        /// Minimum number of values required.
        min: usize,
    },

    /// Returned when an explicit timeline and the values differ in length.
    #[error("values and timeline lengths differ: {values} values, {timeline} points")]
    LengthMismatch {
        /// Number of values supplied.
        values: usize,
        /// Number of timeline points supplied.
        timeline: usize,
    },

    /// Returned when a series is split a second time.
    #[error("series is already split")]
    AlreadySplit,

    /// Returned when a split accessor is called on an unsplit series.
    #[error("series is not split; call train_test_split first")]
    NotSplit,

    /// Returned when the validation set is requested but no validation
    /// boundary was set by the split.
    #[error("series has no validation set; split with a nonzero val proportion first")]
    NoValidationSet,

    /// Returned when neither a train nor a test proportion is given.
    #[error("at least one of the train and test proportions must be given")]
    MissingProportion,

    /// Returned when a proportion falls outside the unit interval.
    #[error("{name} proportion must lie in [0, 1], got {value}")]
    ProportionOutOfRange {
        /// Which proportion was rejected.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// Returned when train, test, and val are all given but do not sum
    /// to one.
    #[error("train, test, and val proportions must sum to one, got {sum}")]
    ProportionsNotNormalized {
        /// The offending sum.
        sum: f64,
    },

    /// Returned when a given proportion plus val exceeds one on its own.
    #[error("{name} plus val proportions already exceed one, got {sum}")]
    OverAllocated {
        /// Which proportion overflowed together with val.
        name: &'static str,
        /// The offending sum.
        sum: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_too_few_values() {
        let err = SeriesError::TooFewValues { len: 1, min: 2 };
        assert_eq!(err.to_string(), "series needs at least 2 values, got 1");
    }

    #[test]
    fn error_length_mismatch() {
        let err = SeriesError::LengthMismatch {
            values: 5,
            timeline: 4,
        };
        assert_eq!(
            err.to_string(),
            "values and timeline lengths differ: 5 values, 4 points"
        );
    }

    #[test]
    fn error_already_split() {
        let err = SeriesError::AlreadySplit;
        assert_eq!(err.to_string(), "series is already split");
    }

    #[test]
    fn error_proportion_out_of_range() {
        let err = SeriesError::ProportionOutOfRange {
            name: "train",
            value: 1.2,
        };
        assert_eq!(
            err.to_string(),
            "train proportion must lie in [0, 1], got 1.2"
        );
    }

    #[test]
    fn error_over_allocated() {
        let err = SeriesError::OverAllocated {
            name: "test",
            sum: 1.3,
        };
        assert_eq!(
            err.to_string(),
            "test plus val proportions already exceed one, got 1.3"
        );
    }

    #[test]
    fn error_timeline_transparent() {
        let inner = CalendarError::UnderspecifiedTimeline;
        let err = SeriesError::from(inner);
        assert_eq!(err.to_string(), "timeline needs two of start, end, and by");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<SeriesError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<SeriesError>();
    }
}
