use reqwest::Method;
use roomly_core::errors::ApiResult;
use roomly_core::models::room::{CreateRoomRequest, RenameRoomRequest, Room};
use tracing::info;

use crate::api::ListPayload;
use crate::session::Session;

pub async fn list_rooms(session: &Session) -> ApiResult<Vec<Room>> {
    let payload: ListPayload<Room> = session
        .send_json(session.request(Method::GET, "/rooms/"))
        .await?;
    let rooms = payload.into_vec();
    info!(count = rooms.len(), "loaded rooms");
    Ok(rooms)
}

pub async fn create_room(session: &Session, request: &CreateRoomRequest) -> ApiResult<Room> {
    let room: Room = session
        .send_json(session.request(Method::POST, "/rooms/").json(request))
        .await?;
    info!(id = room.id, name = %room.name, "room created");
    Ok(room)
}

pub async fn rename_room(session: &Session, id: i64, name: &str) -> ApiResult<Room> {
    let request = RenameRoomRequest {
        name: name.to_string(),
    };
    let room: Room = session
        .send_json(
            session
                .request(Method::PUT, &format!("/rooms/{id}/"))
                .json(&request),
        )
        .await?;
    info!(id, name = %room.name, "room renamed");
    Ok(room)
}

/// Removes a room. Any response that arrives at all counts as success;
/// only a network failure is surfaced.
pub async fn delete_room(session: &Session, id: i64) -> ApiResult<()> {
    session
        .send_expect_any(session.request(Method::DELETE, &format!("/rooms/{id}/")))
        .await?;
    info!(id, "room deleted");
    Ok(())
}
