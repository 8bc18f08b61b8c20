//! Websocket transport: wire protocol, session actors, the lobby that owns
//! the room flow, and the registry that routes events back to sockets.

pub mod hub;
pub mod lobby;
pub mod protocol;
pub mod session;

pub use hub::{Deliver, WsRegistry};
pub use lobby::Lobby;
