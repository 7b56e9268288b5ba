use serde::{Deserialize, Serialize};

/// Room availability as reported by the backend.
///
/// The backend only ever emits `disponible` or `ocupada`, but older
/// deployments have leaked other strings, so anything unrecognized decodes
/// to [`RoomStatus::Unknown`] instead of failing the whole room list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomStatus {
    #[default]
    Disponible,
    Ocupada,
    #[serde(other)]
    Unknown,
}

impl RoomStatus {
    pub fn is_available(&self) -> bool {
        matches!(self, RoomStatus::Disponible)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: RoomStatus,
    #[serde(default)]
    pub capacity: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRoomRequest {
    pub name: String,
    pub description: Option<String>,
    pub status: RoomStatus,
}

impl CreateRoomRequest {
    /// New rooms start available, matching the creation form.
    pub fn new(name: impl Into<String>, description: Option<String>) -> Self {
        Self {
            name: name.into(),
            description,
            status: RoomStatus::Disponible,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenameRoomRequest {
    pub name: String,
}
