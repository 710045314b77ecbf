mod room_table;

pub use room_table::RoomTable;
