//! Error types for the cadence-calendar crate.

use chrono::NaiveDateTime;

/// Error type for all fallible operations in the cadence-calendar crate.
///
/// This enum covers literal parsing failures, invalid date ranges, and
/// timeline specifications that cannot be resolved into a concrete
/// sequence of points.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a date literal matches none of the supported formats.
    #[error(
        "failed to parse date `{literal}` (expected yyyy-mm-dd, yyyy/mm/dd, dd-mm-yyyy, or dd/mm/yyyy)"
    )]
    InvalidDateFormat {
        /// The literal that failed to parse.
        literal: String,
    },

    /// Returned when a period literal is not a float magnitude followed by
    /// a `d`, `m`, or `y` unit tag.
    #[error("failed to parse period `{literal}` (expected a float magnitude followed by d, m, or y)")]
    InvalidPeriodFormat {
        /// The literal that failed to parse.
        literal: String,
    },

    /// Returned when the end of an evenly spaced range precedes its start.
    #[error("end date {end} precedes start date {start}")]
    InvalidRange {
        /// Requested first date.
        start: NaiveDateTime,
        /// Requested last date.
        end: NaiveDateTime,
    },

    /// Returned when a timeline specification does not pin down a
    /// sequence: two of start, end, and by are required.
    #[error("timeline needs two of start, end, and by")]
    UnderspecifiedTimeline,

    /// Returned when a timeline is built with too few points to derive a
    /// sampling interval.
    #[error("timeline needs at least {min} points, got {size}")]
    SizeTooSmall {
        /// Number of points requested.
        size: usize,
        /// Minimum number of points required.
        min: usize,
    },

    /// Returned when date arithmetic leaves the representable range.
    #[error("date arithmetic overflowed the supported range")]
    DateOutOfRange,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_date_format() {
        let err = CalendarError::InvalidDateFormat {
            literal: "yesterday".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "failed to parse date `yesterday` (expected yyyy-mm-dd, yyyy/mm/dd, dd-mm-yyyy, or dd/mm/yyyy)"
        );
    }

    #[test]
    fn error_invalid_period_format() {
        let err = CalendarError::InvalidPeriodFormat {
            literal: "1w".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "failed to parse period `1w` (expected a float magnitude followed by d, m, or y)"
        );
    }

    #[test]
    fn error_underspecified_timeline() {
        let err = CalendarError::UnderspecifiedTimeline;
        assert_eq!(err.to_string(), "timeline needs two of start, end, and by");
    }

    #[test]
    fn error_size_too_small() {
        let err = CalendarError::SizeTooSmall { size: 1, min: 2 };
        assert_eq!(err.to_string(), "timeline needs at least 2 points, got 1");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_clone_and_partial_eq() {
        let err = CalendarError::UnderspecifiedTimeline;
        assert_eq!(err.clone(), err);
    }
}
