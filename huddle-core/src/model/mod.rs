mod participant;
mod room;
mod signaling;

pub use participant::{ParseIdentityError, ParticipantId, UserProfile};
pub use room::{RoomId, RoomRecord};
pub use signaling::SignalMessage;
