pub mod model;

pub use model::{
    ParseIdentityError, ParticipantId, RoomId, RoomRecord, SignalMessage, UserProfile,
};
