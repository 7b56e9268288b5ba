use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::models::booking::Booking;

/// Title shown when a booking record carries none.
pub const FALLBACK_TITLE: &str = "Sin título";

/// The calendar-display projection of a booking.
///
/// Ephemeral by design: the event list is rebuilt from the booking records
/// on every calendar load and the previous list is dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl Event {
    /// Interval-overlap test (`start < other.end && end > other.start`),
    /// the same rule the backend applies for room availability. Advisory
    /// only; the server remains authoritative.
    pub fn overlaps(&self, other: &Event) -> bool {
        self.start < other.end && self.end > other.start
    }
}

/// Projects raw booking records onto renderable calendar events.
///
/// Records missing either timestamp, or carrying one that fails to parse,
/// are dropped. The result is lazy, order-preserving and bounded by the
/// input; duplicate ids pass through untouched since id uniqueness belongs
/// to the backend. The sequence is restartable: cloning it rewinds to the
/// clone point without touching the original's progress.
pub fn normalize<I>(records: I) -> impl Iterator<Item = Event> + Clone
where
    I: IntoIterator<Item = Booking>,
    I::IntoIter: Clone,
{
    records.into_iter().filter_map(event_from_record)
}

fn event_from_record(record: Booking) -> Option<Event> {
    let start = parse_timestamp(record.start_time.as_deref()?)?;
    let end = parse_timestamp(record.end_time.as_deref()?)?;
    Some(Event {
        id: record.id,
        title: record
            .title
            .filter(|title| !title.is_empty())
            .unwrap_or_else(|| FALLBACK_TITLE.to_string()),
        start,
        end,
    })
}

/// Parses a wire timestamp, accepting RFC 3339 as well as the naive
/// `YYYY-MM-DDTHH:MM[:SS]` forms the backend emits.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.naive_local());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M"))
        .ok()
}
