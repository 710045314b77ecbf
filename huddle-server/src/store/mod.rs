mod memory;
mod room_store;
mod user_store;

pub use memory::MemStore;
pub use room_store::RoomStore;
pub use user_store::UserStore;
