use std::sync::Arc;

use huddle_core::{RoomId, SignalMessage};
use tracing::warn;

use crate::registry::ConnectionRegistry;
use crate::room::RoomTable;
use crate::store::UserStore;

/// Pushes the authoritative member roster to everyone in a room.
#[derive(Clone)]
pub struct PresenceBroadcaster {
    rooms: RoomTable,
    registry: ConnectionRegistry,
    users: Arc<dyn UserStore>,
}

impl PresenceBroadcaster {
    pub fn new(
        rooms: RoomTable,
        registry: ConnectionRegistry,
        users: Arc<dyn UserStore>,
    ) -> Self {
        Self {
            rooms,
            registry,
            users,
        }
    }

    /// Broadcast a `room_users` roster reflecting membership at this moment.
    /// Concurrent joins may each produce a broadcast; every one is internally
    /// consistent. A member whose profile lookup fails is logged and left
    /// off the roster.
    pub async fn announce(&self, room_id: RoomId) {
        let members = self.rooms.members_of(room_id).await;
        if members.is_empty() {
            return;
        }

        let mut users = Vec::with_capacity(members.len());
        for id in &members {
            match self.users.resolve(id).await {
                Some(profile) => users.push(profile),
                None => warn!(%id, %room_id, "member profile lookup failed"),
            }
        }

        let roster = SignalMessage::RoomUsers { room_id, users };
        for id in &members {
            self.registry.send(id, &roster);
        }
    }
}
