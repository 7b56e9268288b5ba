use chrono::{NaiveDateTime, Timelike};

use crate::errors::ValidationError;

/// First bookable hour of the day.
pub const OPENING_HOUR: u32 = 7;
/// Last bookable hour of the day, inclusive.
pub const CLOSING_HOUR: u32 = 21;

/// Checks a proposed booking window against the business rules.
///
/// `now` is the caller's wall clock, passed in explicitly. Rules are
/// applied in submission order: past start, then end-before-start, then
/// the daily window. On success the pair comes back unchanged.
pub fn validate(
    start: NaiveDateTime,
    end: NaiveDateTime,
    now: NaiveDateTime,
) -> Result<(NaiveDateTime, NaiveDateTime), ValidationError> {
    if start < now {
        return Err(ValidationError::PastStart);
    }
    if end <= start {
        return Err(ValidationError::EndBeforeStart);
    }
    if !within_hours(start) || !within_hours(end) {
        return Err(ValidationError::OutOfHours);
    }
    Ok((start, end))
}

// Inclusive on both ends, so a 21:59 start passes. That bound is the
// backend's contract; pending product clarification it is kept as-is.
fn within_hours(ts: NaiveDateTime) -> bool {
    (OPENING_HOUR..=CLOSING_HOUR).contains(&ts.hour())
}
