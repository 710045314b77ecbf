use async_trait::async_trait;
use huddle_core::{ParticipantId, RoomId, RoomRecord};

/// External room-lookup collaborator. Room existence is authoritative here,
/// not in the signaling layer.
#[async_trait]
pub trait RoomStore: Send + Sync {
    async fn exists(&self, room_id: RoomId) -> bool;

    async fn owner_of(&self, room_id: RoomId) -> Option<ParticipantId>;

    async fn create_room(
        &self,
        name: String,
        owner: ParticipantId,
        is_private: bool,
    ) -> RoomRecord;

    async fn room(&self, room_id: RoomId) -> Option<RoomRecord>;

    async fn rooms(&self) -> Vec<RoomRecord>;
}
