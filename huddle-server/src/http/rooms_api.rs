use std::str::FromStr;
use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::HeaderMap;
use huddle_core::{ParticipantId, RoomId, RoomRecord};
use serde::Deserialize;

use crate::AppState;
use crate::error::ApiError;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoomRequest {
    pub name: String,
    #[serde(default)]
    pub is_private: bool,
}

/// Acting identity for the room path comes from the `x-user-id` header; the
/// authentication mechanism behind it is out of scope here. Guests cannot
/// use the room path at all.
async fn acting_user(state: &AppState, headers: &HeaderMap) -> Result<ParticipantId, ApiError> {
    let token = headers
        .get("x-user-id")
        .and_then(|v| v.to_str().ok())
        .ok_or(ApiError::Unauthorized)?;
    let id = ParticipantId::from_str(token).map_err(|_| ApiError::Unauthorized)?;
    if id.is_guest() {
        return Err(ApiError::Unauthorized);
    }
    state
        .users
        .resolve(&id)
        .await
        .map(|profile| profile.id)
        .ok_or(ApiError::Unauthorized)
}

pub async fn create_room(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<CreateRoomRequest>,
) -> Result<Json<RoomRecord>, ApiError> {
    let owner = acting_user(&state, &headers).await?;
    if body.name.trim().is_empty() {
        return Err(ApiError::BadRequest("room name must not be empty".to_owned()));
    }
    let record = state
        .rooms
        .create_room(body.name, owner, body.is_private)
        .await;
    Ok(Json(record))
}

pub async fn list_rooms(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Vec<RoomRecord>>, ApiError> {
    acting_user(&state, &headers).await?;
    Ok(Json(state.rooms.rooms().await))
}

pub async fn get_room(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Result<Json<RoomRecord>, ApiError> {
    acting_user(&state, &headers).await?;
    state
        .rooms
        .room(RoomId(id))
        .await
        .map(Json)
        .ok_or(ApiError::NotFound)
}
