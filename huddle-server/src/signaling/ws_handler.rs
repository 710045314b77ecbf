use std::sync::Arc;

use axum::extract::ws::{Message, WebSocket};
use axum::extract::{Query, State, WebSocketUpgrade};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use futures::{SinkExt, StreamExt};
use huddle_core::ParticipantId;
use serde::Deserialize;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::AppState;
use crate::signaling::SignalingService;

/// Lifecycle of one signaling session.
#[derive(Debug, Clone, Copy, PartialEq)]
enum SessionState {
    Connecting,
    Authenticated,
    Active,
    Closed,
}

#[derive(Deserialize)]
pub struct ConnectParams {
    #[serde(rename = "userId")]
    user_id: Option<String>,
}

pub async fn ws_handler(
    ws: WebSocketUpgrade,
    Query(params): Query<ConnectParams>,
    State(state): State<Arc<AppState>>,
) -> Response {
    debug!(state = ?SessionState::Connecting, "signaling upgrade requested");

    let Some(token) = params.user_id else {
        debug!("upgrade without identity token rejected");
        return StatusCode::UNAUTHORIZED.into_response();
    };

    let Some((participant, profile)) = state.signaling.authenticate(&token).await else {
        warn!(%token, "unresolvable identity, terminating before upgrade");
        return StatusCode::UNAUTHORIZED.into_response();
    };

    info!(%participant, username = %profile.username, "identity resolved");
    let service = state.signaling.clone();
    ws.on_upgrade(move |socket| handle_socket(socket, participant, service))
        .into_response()
}

async fn handle_socket(socket: WebSocket, participant: ParticipantId, service: SignalingService) {
    info!(%participant, "new signaling connection");

    let (mut sender, mut receiver) = socket.split();
    let (tx, mut rx) = mpsc::unbounded_channel();

    let seq = service.connect(participant.clone(), tx);

    let mut send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(msg).await.is_err() {
                break;
            }
        }
    });

    let mut recv_task = tokio::spawn({
        let service = service.clone();
        let participant = participant.clone();

        async move {
            let mut session = SessionState::Authenticated;
            while let Some(Ok(msg)) = receiver.next().await {
                match msg {
                    Message::Text(text) => {
                        let accepted = service.handle_message(&participant, text.as_str()).await;
                        if accepted && session == SessionState::Authenticated {
                            session = SessionState::Active;
                            debug!(%participant, ?session, "session advanced");
                        }
                    }
                    Message::Close(_) => break,
                    _ => {}
                }
            }
        }
    });

    tokio::select! {
        _ = (&mut send_task) => recv_task.abort(),
        _ = (&mut recv_task) => send_task.abort(),
    };

    service.disconnect(&participant, seq).await;
    debug!(%participant, state = ?SessionState::Closed, "signaling connection closed");
}
