use std::sync::Arc;

use actix::{Actor, Addr};

use crate::services::room_flow::{RoomFlowService, RoomSettings};
use crate::ws::hub::WsRegistry;
use crate::ws::lobby::Lobby;

/// Application state shared with every worker.
#[derive(Clone)]
pub struct AppState {
    /// The actor that owns all rooms.
    pub lobby: Addr<Lobby>,
    /// Live websocket sessions, also the lobby's outbox.
    registry: Arc<WsRegistry>,
}

impl AppState {
    pub fn new(lobby: Addr<Lobby>, registry: Arc<WsRegistry>) -> Self {
        Self { lobby, registry }
    }

    /// Start the lobby over a fresh registry. Must run inside an actix system.
    pub fn launch(settings: RoomSettings, deal_seed: Option<u64>) -> Self {
        let registry = Arc::new(WsRegistry::new());
        let flow = RoomFlowService::new(registry.clone(), settings, deal_seed);
        let lobby = Lobby::new(flow).start();
        Self::new(lobby, registry)
    }

    pub fn websocket_registry(&self) -> Arc<WsRegistry> {
        Arc::clone(&self.registry)
    }
}
