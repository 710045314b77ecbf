mod rooms_api;

pub use rooms_api::{CreateRoomRequest, create_room, get_room, list_rooms};

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};

use crate::AppState;
use crate::signaling::ws_handler;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/ws", get(ws_handler))
        .route("/api/rooms", post(create_room).get(list_rooms))
        .route("/api/rooms/{id}", get(get_room))
        .with_state(state)
}
