use chrono::NaiveDateTime;
use pretty_assertions::assert_eq;
use roomly_core::errors::ValidationError;
use roomly_core::validate::validate;
use rstest::rstest;

fn dt(raw: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M").expect("test timestamp")
}

#[test]
fn accepts_future_booking_within_hours() {
    let start = dt("2025-01-10T09:00");
    let end = dt("2025-01-10T10:00");
    let now = dt("2025-01-01T00:00");

    let accepted = validate(start, end, now).expect("candidate should be accepted");

    // The validated pair comes back unchanged.
    assert_eq!(accepted, (start, end));
}

#[test]
fn rejects_late_evening_booking_as_out_of_hours() {
    let result = validate(
        dt("2025-01-10T22:00"),
        dt("2025-01-10T23:00"),
        dt("2025-01-01T00:00"),
    );

    assert_eq!(result, Err(ValidationError::OutOfHours));
}

#[rstest]
// End exactly equal to start is not strictly after it.
#[case("2025-01-10T09:00", "2025-01-10T09:00")]
#[case("2025-01-10T10:00", "2025-01-10T09:00")]
// Hour-of-day does not matter once the ordering rule fails.
#[case("2025-01-10T22:00", "2025-01-10T22:00")]
#[case("2025-01-10T03:00", "2025-01-10T02:00")]
fn rejects_end_not_after_start(#[case] start: &str, #[case] end: &str) {
    let result = validate(dt(start), dt(end), dt("2025-01-01T00:00"));

    assert_eq!(result, Err(ValidationError::EndBeforeStart));
}

#[rstest]
#[case("2024-12-31T09:00", "2024-12-31T10:00")]
// Past start wins even when the window is also inverted and out of hours.
#[case("2024-12-31T23:00", "2024-12-31T22:00")]
fn rejects_start_in_the_past(#[case] start: &str, #[case] end: &str) {
    let result = validate(dt(start), dt(end), dt("2025-01-01T00:00"));

    assert_eq!(result, Err(ValidationError::PastStart));
}

#[rstest]
#[case("2025-01-10T06:59", "2025-01-10T08:00")]
#[case("2025-01-10T08:00", "2025-01-10T22:00")]
#[case("2025-01-10T05:00", "2025-01-10T06:00")]
fn rejects_bounds_outside_daily_window(#[case] start: &str, #[case] end: &str) {
    let result = validate(dt(start), dt(end), dt("2025-01-01T00:00"));

    assert_eq!(result, Err(ValidationError::OutOfHours));
}

#[rstest]
#[case("2025-01-10T07:00", "2025-01-10T08:00")]
#[case("2025-01-10T20:00", "2025-01-10T21:00")]
// The closing hour is inclusive, so even a 21:58 start passes.
#[case("2025-01-10T21:58", "2025-01-10T21:59")]
fn accepts_bounds_on_window_edges(#[case] start: &str, #[case] end: &str) {
    let result = validate(dt(start), dt(end), dt("2025-01-01T00:00"));

    assert_eq!(result, Ok((dt(start), dt(end))));
}
