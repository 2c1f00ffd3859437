//! Duration-to-years conversion.

use chrono::TimeDelta;

/// Seconds in a Julian year of 365.25 days.
const SECONDS_PER_YEAR: f64 = 365.25 * 24.0 * 3600.0;

/// Converts a duration to fractional Julian years (365.25 days per year).
///
/// Note the asymmetry with [`parse_period`](crate::parse_period), which
/// expands `y` literals at 365 days per year. A round trip through both
/// therefore does not return exactly 1.0:
///
/// ```ignore
/// let years = delta_years(parse_period("1y")?);
/// assert!(years < 1.0); // 365.0 / 365.25
/// ```
pub fn delta_years(delta: TimeDelta) -> f64 {
    let seconds = delta.num_seconds() as f64 + f64::from(delta.subsec_nanos()) * 1e-9;
    seconds / SECONDS_PER_YEAR
}
