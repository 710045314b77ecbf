use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use huddle_core::{ParticipantId, RoomId};
use tokio::sync::Mutex;
use tracing::debug;

/// Which participants currently occupy which rooms. A single lock serializes
/// every mutation; it is held only for the in-memory change, never across a
/// send. An emptied room is removed outright, so the table never accumulates
/// dead keys.
#[derive(Clone, Default)]
pub struct RoomTable {
    rooms: Arc<Mutex<HashMap<RoomId, BTreeSet<ParticipantId>>>>,
}

impl RoomTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Idempotent; lazily creates the room's set on first join.
    pub async fn join(&self, room_id: RoomId, id: ParticipantId) -> bool {
        let mut rooms = self.rooms.lock().await;
        rooms.entry(room_id).or_default().insert(id)
    }

    /// Idempotent; drops the room entry once its last member leaves.
    pub async fn leave(&self, room_id: RoomId, id: &ParticipantId) -> bool {
        let mut rooms = self.rooms.lock().await;
        let Some(members) = rooms.get_mut(&room_id) else {
            return false;
        };
        let removed = members.remove(id);
        if members.is_empty() {
            rooms.remove(&room_id);
            debug!(%room_id, "room emptied, dropping entry");
        }
        removed
    }

    /// Snapshot of the member set in ascending id order; empty for an
    /// unknown room, never an error.
    pub async fn members_of(&self, room_id: RoomId) -> Vec<ParticipantId> {
        let rooms = self.rooms.lock().await;
        rooms
            .get(&room_id)
            .map(|members| members.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Remove `id` from every room it occupies, dropping rooms that empty.
    /// Returns the rooms whose membership changed.
    pub async fn purge(&self, id: &ParticipantId) -> Vec<RoomId> {
        let mut rooms = self.rooms.lock().await;
        let mut affected = Vec::new();
        rooms.retain(|room_id, members| {
            if members.remove(id) {
                affected.push(*room_id);
            }
            !members.is_empty()
        });
        affected
    }

    pub async fn contains_room(&self, room_id: RoomId) -> bool {
        self.rooms.lock().await.contains_key(&room_id)
    }
}
