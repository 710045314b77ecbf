use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;
use huddle_core::{ParticipantId, RoomId, RoomRecord, UserProfile};

use crate::store::{RoomStore, UserStore};

/// In-memory backing store for users and rooms.
pub struct MemStore {
    users: DashMap<i64, UserProfile>,
    rooms: DashMap<i64, RoomRecord>,
    next_user_id: AtomicI64,
    next_room_id: AtomicI64,
}

impl MemStore {
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
            rooms: DashMap::new(),
            next_user_id: AtomicI64::new(1),
            next_room_id: AtomicI64::new(1),
        }
    }

    pub fn create_user(&self, username: &str) -> UserProfile {
        let id = self.next_user_id.fetch_add(1, Ordering::Relaxed);
        let profile = UserProfile {
            id: ParticipantId::User(id),
            username: username.to_owned(),
            points: 0,
        };
        self.users.insert(id, profile.clone());
        profile
    }
}

impl Default for MemStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserStore for MemStore {
    async fn resolve(&self, id: &ParticipantId) -> Option<UserProfile> {
        match id {
            ParticipantId::User(user_id) => self.users.get(user_id).map(|p| p.value().clone()),
            ParticipantId::Guest(token) => Some(UserProfile {
                id: id.clone(),
                username: token.clone(),
                points: 0,
            }),
        }
    }
}

#[async_trait]
impl RoomStore for MemStore {
    async fn exists(&self, room_id: RoomId) -> bool {
        self.rooms.contains_key(&room_id.0)
    }

    async fn owner_of(&self, room_id: RoomId) -> Option<ParticipantId> {
        self.rooms.get(&room_id.0).map(|r| r.value().owner_id.clone())
    }

    async fn create_room(
        &self,
        name: String,
        owner: ParticipantId,
        is_private: bool,
    ) -> RoomRecord {
        let id = self.next_room_id.fetch_add(1, Ordering::Relaxed);
        let record = RoomRecord {
            id: RoomId(id),
            name,
            owner_id: owner,
            is_private,
        };
        self.rooms.insert(id, record.clone());
        record
    }

    async fn room(&self, room_id: RoomId) -> Option<RoomRecord> {
        self.rooms.get(&room_id.0).map(|r| r.value().clone())
    }

    async fn rooms(&self) -> Vec<RoomRecord> {
        let mut all: Vec<_> = self.rooms.iter().map(|r| r.value().clone()).collect();
        all.sort_by_key(|r| r.id);
        all
    }
}
