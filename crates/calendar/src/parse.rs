//! Date and period literal parsing.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

use crate::error::CalendarError;

/// Date formats tried in order; the first successful parse wins.
///
/// The order is part of the wire contract: a literal that is valid under
/// more than one pattern resolves to whichever pattern comes first, so
/// callers relying on day-first formats must use separators or widths the
/// year-first patterns reject.
pub const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%Y/%m/%d", "%d-%m-%Y", "%d/%m/%Y"];

/// Days per month for period literals, an approximation.
const DAYS_PER_MONTH: f64 = 30.4;

/// Days per year for period literals.
///
/// This is the 365-day approximation used for parsing only;
/// [`delta_years`](crate::delta_years) converts the other way with
/// 365.25-day years. Both constants are kept for compatibility with data
/// produced under the original convention.
const DAYS_PER_YEAR: f64 = 365.0;

const MICROS_PER_DAY: f64 = 86_400_000_000.0;

/// Parses a date literal into a midnight timestamp.
///
/// Each format in [`DATE_FORMATS`] is tried in turn; the first successful
/// parse wins.
///
/// # Example
///
/// ```
/// use cadence_calendar::parse_date;
///
/// let a = parse_date("2000-01-02").unwrap();
/// let b = parse_date("02-01-2000").unwrap();
/// assert_eq!(a, b);
/// ```
///
/// # Errors
///
/// Returns [`CalendarError::InvalidDateFormat`] if no format matches.
pub fn parse_date(literal: &str) -> Result<NaiveDateTime, CalendarError> {
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(literal, format) {
            return Ok(date.and_time(NaiveTime::MIN));
        }
    }
    Err(CalendarError::InvalidDateFormat {
        literal: literal.to_string(),
    })
}

/// Parses a period literal: a float magnitude followed by a unit tag,
/// `d` for days, `m` for months (30.4 days), or `y` for years (365 days).
///
/// The magnitude may be fractional or negative: `"0.5y"` is 182.5 days,
/// `"-1d"` is minus one day. The result has microsecond resolution.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidPeriodFormat`] on an unknown unit tag,
/// an unparsable magnitude, or a magnitude too large to represent.
pub fn parse_period(literal: &str) -> Result<TimeDelta, CalendarError> {
    let invalid = || CalendarError::InvalidPeriodFormat {
        literal: literal.to_string(),
    };

    let mut chars = literal.chars();
    let unit = chars.next_back().ok_or_else(invalid)?;
    let magnitude: f64 = chars.as_str().parse().map_err(|_| invalid())?;

    let days = match unit {
        'd' => magnitude,
        'm' => magnitude * DAYS_PER_MONTH,
        'y' => magnitude * DAYS_PER_YEAR,
        _ => return Err(invalid()),
    };

    let micros = (days * MICROS_PER_DAY).round();
    if !micros.is_finite() || micros.abs() >= i64::MAX as f64 {
        return Err(invalid());
    }
    Ok(TimeDelta::microseconds(micros as i64))
}
