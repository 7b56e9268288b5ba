use chrono::NaiveDateTime;
use reqwest::Method;
use roomly_core::calendar::{Event, normalize};
use roomly_core::errors::ApiResult;
use roomly_core::models::booking::{Booking, CreateBookingRequest};
use roomly_core::validate::validate;
use tracing::info;

use crate::api::ListPayload;
use crate::session::Session;

pub async fn list_bookings(session: &Session) -> ApiResult<Vec<Booking>> {
    let payload: ListPayload<Booking> = session
        .send_json(session.request(Method::GET, "/bookings/"))
        .await?;
    let bookings = payload.into_vec();
    info!(count = bookings.len(), "loaded bookings");
    Ok(bookings)
}

/// Submits a booking after validating its time window against `now`.
///
/// A rule violation fails with `ApiError::Validation` before any request
/// is sent. The clock is the caller's, never read globally.
pub async fn create_booking(
    session: &Session,
    request: &CreateBookingRequest,
    now: NaiveDateTime,
) -> ApiResult<Booking> {
    validate(request.start_time, request.end_time, now)?;

    let booking: Booking = session
        .send_json(session.request(Method::POST, "/bookings/").json(request))
        .await?;
    info!(id = booking.id, room = booking.room, "booking created");
    Ok(booking)
}

/// Cancels a booking. Any response that arrives at all counts as success.
pub async fn cancel_booking(session: &Session, id: i64) -> ApiResult<()> {
    session
        .send_expect_any(session.request(Method::DELETE, &format!("/bookings/{id}/")))
        .await?;
    info!(id, "booking cancelled");
    Ok(())
}

/// Loads the renderable event list, rebuilt from scratch on every call.
///
/// The previous list is simply dropped by the caller, the same
/// tear-down-and-recreate lifecycle the calendar view uses.
pub async fn load_calendar(session: &Session) -> ApiResult<Vec<Event>> {
    let records = list_bookings(session).await?;
    let events: Vec<Event> = normalize(records).collect();
    info!(count = events.len(), "calendar events normalized");
    Ok(events)
}
