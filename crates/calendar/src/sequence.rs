//! Date sequence generation.

use chrono::{NaiveDateTime, TimeDelta};

use crate::error::CalendarError;

/// Generates `n` dates linearly interpolated between `start` and `end`
/// inclusive, stepping by `(end - start) / (n - 1)`.
///
/// The step is truncated to whole nanoseconds, so the final date can fall
/// marginally before `end`. For `n < 2` there is no step to compute and
/// the result is the first `n` elements of `[start]`.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`CalendarError::InvalidRange`] | `end` precedes `start` |
/// | [`CalendarError::DateOutOfRange`] | interpolation overflows the date range |
pub fn evenly_spaced(
    start: NaiveDateTime,
    end: NaiveDateTime,
    n: usize,
) -> Result<Vec<NaiveDateTime>, CalendarError> {
    if end < start {
        return Err(CalendarError::InvalidRange { start, end });
    }
    if n == 0 {
        return Ok(Vec::new());
    }
    if n == 1 {
        return Ok(vec![start]);
    }

    let denom = i32::try_from(n - 1).map_err(|_| CalendarError::DateOutOfRange)?;
    let step = (end - start) / denom;

    let mut dates = Vec::with_capacity(n);
    for i in 0..n {
        let offset = step
            .checked_mul(i as i32)
            .ok_or(CalendarError::DateOutOfRange)?;
        let date = start
            .checked_add_signed(offset)
            .ok_or(CalendarError::DateOutOfRange)?;
        dates.push(date);
    }
    Ok(dates)
}

/// Generates `n` dates spaced by `period`, in chronological order.
///
/// A positive period makes `reference` the first date of the sequence; a
/// negative period makes it the last (the sequence is generated backwards
/// from `reference` and then reversed into ascending order). A zero
/// period repeats `reference` `n` times.
///
/// # Errors
///
/// Returns [`CalendarError::DateOutOfRange`] if any generated date
/// overflows the representable range.
pub fn fixed_period(
    reference: NaiveDateTime,
    period: TimeDelta,
    n: usize,
) -> Result<Vec<NaiveDateTime>, CalendarError> {
    let mut dates = Vec::with_capacity(n);
    for i in 0..n {
        let idx = i32::try_from(i).map_err(|_| CalendarError::DateOutOfRange)?;
        let offset = period
            .checked_mul(idx)
            .ok_or(CalendarError::DateOutOfRange)?;
        let date = reference
            .checked_add_signed(offset)
            .ok_or(CalendarError::DateOutOfRange)?;
        dates.push(date);
    }
    if period < TimeDelta::zero() {
        dates.reverse();
    }
    Ok(dates)
}
