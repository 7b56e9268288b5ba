pub mod bookings;
pub mod rooms;

use serde::Deserialize;

/// List endpoints answer with either a bare array or a `{data: [...]}`
/// wrapper depending on backend vintage; both count as success, so the
/// decoder accepts both.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum ListPayload<T> {
    Wrapped { data: Vec<T> },
    Bare(Vec<T>),
}

impl<T> ListPayload<T> {
    pub(crate) fn into_vec(self) -> Vec<T> {
        match self {
            ListPayload::Wrapped { data } => data,
            ListPayload::Bare(items) => items,
        }
    }
}
