//! In-memory repositories owned by the room flow service.

pub mod connections;
pub mod rooms;

pub use connections::{ConnId, Connection, ConnectionRepository, Membership};
pub use rooms::{Room, RoomRepository, SeatedPlayer};
