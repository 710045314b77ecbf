use std::str::FromStr;
use std::sync::Arc;

use axum::extract::ws::Message;
use huddle_core::{ParticipantId, SignalMessage, UserProfile};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::presence::PresenceBroadcaster;
use crate::registry::ConnectionRegistry;
use crate::room::RoomTable;
use crate::store::{RoomStore, UserStore};

/// The signaling router: owns the process-wide connection and membership
/// state and decides fan-out per message kind. Cheap to clone; all parts are
/// shared handles, injected at construction.
#[derive(Clone)]
pub struct SignalingService {
    registry: ConnectionRegistry,
    rooms: RoomTable,
    presence: PresenceBroadcaster,
    users: Arc<dyn UserStore>,
    room_store: Arc<dyn RoomStore>,
}

impl SignalingService {
    pub fn new(users: Arc<dyn UserStore>, room_store: Arc<dyn RoomStore>) -> Self {
        let registry = ConnectionRegistry::new();
        let rooms = RoomTable::new();
        let presence = PresenceBroadcaster::new(rooms.clone(), registry.clone(), users.clone());
        Self {
            registry,
            rooms,
            presence,
            users,
            room_store,
        }
    }

    pub fn registry(&self) -> &ConnectionRegistry {
        &self.registry
    }

    pub fn rooms(&self) -> &RoomTable {
        &self.rooms
    }

    /// Resolve the connection-establishment token to an identity. `None`
    /// means the connection is terminated before any message is exchanged.
    pub async fn authenticate(&self, token: &str) -> Option<(ParticipantId, UserProfile)> {
        let id = ParticipantId::from_str(token).ok()?;
        let profile = self.users.resolve(&id).await?;
        Some((id, profile))
    }

    /// Register a live connection for `id`, superseding any previous one.
    /// Returns the sequence number `disconnect` must present at teardown.
    pub fn connect(&self, id: ParticipantId, tx: mpsc::UnboundedSender<Message>) -> u64 {
        self.registry.add(id, tx)
    }

    /// Dispatch one inbound frame. Returns whether the frame parsed to a
    /// known kind. Nothing in here ever closes the connection: every failure
    /// degrades to a logged no-op.
    pub async fn handle_message(&self, id: &ParticipantId, text: &str) -> bool {
        let msg = match serde_json::from_str::<SignalMessage>(text) {
            Ok(msg) => msg,
            Err(e) => {
                warn!(%id, "dropping malformed frame: {e}");
                return false;
            }
        };

        match &msg {
            SignalMessage::JoinRoom { room_id } => {
                // Room existence is authoritative in the room store.
                if !self.room_store.exists(*room_id).await {
                    warn!(%id, %room_id, "join for unknown room ignored");
                    return true;
                }
                self.rooms.join(*room_id, id.clone()).await;
                self.presence.announce(*room_id).await;
            }
            SignalMessage::LeaveRoom { room_id } => {
                if self.rooms.leave(*room_id, id).await {
                    self.presence.announce(*room_id).await;
                }
            }
            SignalMessage::Offer { target, .. }
            | SignalMessage::Answer { target, .. }
            | SignalMessage::IceCandidate { target, .. } => {
                self.registry.send(target, &msg);
            }
            SignalMessage::ChatMessage { room_id, .. } => {
                for member in self.rooms.members_of(*room_id).await {
                    self.registry.send(&member, &msg);
                }
            }
            SignalMessage::Error { message } => {
                warn!(%id, "peer reported error: {message}");
            }
            SignalMessage::RoomUsers { .. } => {
                warn!(%id, "dropping server-only frame from client");
            }
        }

        true
    }

    /// Transport-level teardown: purge memberships, drop the handle, then
    /// tell the affected rooms. A superseded connection must leave both
    /// tables alone; its identity now belongs to the newer socket.
    pub async fn disconnect(&self, id: &ParticipantId, seq: u64) {
        if !self.registry.owns(id, seq) {
            debug!(%id, seq, "teardown of superseded connection, skipping purge");
            return;
        }

        let affected = self.rooms.purge(id).await;
        self.registry.remove(id, seq);
        for room_id in affected {
            self.presence.announce(room_id).await;
        }
        info!(%id, "participant disconnected");
    }
}
