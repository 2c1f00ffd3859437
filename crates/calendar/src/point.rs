//! Time points: calendar timestamps or plain integer indices.

use std::fmt;

use chrono::NaiveDateTime;

/// A single point on a timeline.
///
/// Timelines are either calendar-based or integer-indexed; both kinds are
/// carried by one type so that series code stays agnostic about which kind
/// it holds. The ordering is total: indices and dates each compare
/// naturally, and an index sorts before any date. The cross-kind ordering
/// is arbitrary but fixed; timelines built by this crate are always
/// homogeneous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimePoint {
    /// Position on a unit-spaced, calendar-free timeline.
    Index(i64),
    /// Calendar timestamp (midnight for points parsed from date literals).
    Date(NaiveDateTime),
}

impl TimePoint {
    /// Returns the integer index, if this point carries one.
    pub fn as_index(self) -> Option<i64> {
        match self {
            TimePoint::Index(i) => Some(i),
            TimePoint::Date(_) => None,
        }
    }

    /// Returns the calendar timestamp, if this point carries one.
    pub fn as_date(self) -> Option<NaiveDateTime> {
        match self {
            TimePoint::Index(_) => None,
            TimePoint::Date(d) => Some(d),
        }
    }

    /// Returns `true` if this point carries a calendar timestamp.
    pub fn is_date(self) -> bool {
        matches!(self, TimePoint::Date(_))
    }
}

impl PartialOrd for TimePoint {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TimePoint {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        use std::cmp::Ordering;
        match (self, other) {
            (TimePoint::Index(a), TimePoint::Index(b)) => a.cmp(b),
            (TimePoint::Date(a), TimePoint::Date(b)) => a.cmp(b),
            (TimePoint::Index(_), TimePoint::Date(_)) => Ordering::Less,
            (TimePoint::Date(_), TimePoint::Index(_)) => Ordering::Greater,
        }
    }
}

impl From<i64> for TimePoint {
    fn from(index: i64) -> Self {
        TimePoint::Index(index)
    }
}

impl From<NaiveDateTime> for TimePoint {
    fn from(date: NaiveDateTime) -> Self {
        TimePoint::Date(date)
    }
}

impl fmt::Display for TimePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimePoint::Index(i) => write!(f, "{i}"),
            TimePoint::Date(d) => write!(f, "{d}"),
        }
    }
}
