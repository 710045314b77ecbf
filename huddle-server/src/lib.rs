pub mod config;
pub mod error;
pub mod http;
pub mod presence;
pub mod registry;
pub mod room;
pub mod signaling;
pub mod store;

pub use config::ServerConfig;
pub use error::ApiError;
pub use http::router;
pub use presence::PresenceBroadcaster;
pub use registry::ConnectionRegistry;
pub use room::RoomTable;
pub use signaling::{SignalingService, ws_handler};
pub use store::{MemStore, RoomStore, UserStore};

use std::sync::Arc;

/// Process-wide state behind the axum router.
pub struct AppState {
    pub signaling: SignalingService,
    pub users: Arc<dyn UserStore>,
    pub rooms: Arc<dyn RoomStore>,
}
