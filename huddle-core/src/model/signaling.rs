use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::participant::{ParticipantId, UserProfile};
use crate::model::room::RoomId;

/// Wire frames exchanged over the signaling socket.
///
/// Session descriptions and ICE candidates are opaque blobs: the server
/// relays them to `target` without ever looking inside, so nothing here is
/// coupled to a particular WebRTC binding. `room_users` and `error` are
/// server-to-client only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SignalMessage {
    JoinRoom {
        #[serde(rename = "roomId")]
        room_id: RoomId,
    },
    LeaveRoom {
        #[serde(rename = "roomId")]
        room_id: RoomId,
    },
    Offer {
        target: ParticipantId,
        offer: Value,
    },
    Answer {
        target: ParticipantId,
        answer: Value,
    },
    IceCandidate {
        target: ParticipantId,
        candidate: Value,
    },
    ChatMessage {
        #[serde(rename = "roomId")]
        room_id: RoomId,
        message: String,
    },
    RoomUsers {
        #[serde(rename = "roomId")]
        room_id: RoomId,
        users: Vec<UserProfile>,
    },
    Error {
        message: String,
    },
}
