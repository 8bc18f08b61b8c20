//! Wire payloads shared by the room flow and the websocket layer.

pub mod game_state;
