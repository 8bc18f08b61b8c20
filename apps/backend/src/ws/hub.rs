use actix::prelude::*;
use dashmap::DashMap;
use tracing::warn;

use crate::repos::ConnId;
use crate::services::room_flow::Outbox;
use crate::ws::protocol::ServerMsg;

/// A serialized event on its way to one websocket session.
#[derive(Message, Clone, Debug)]
#[rtype(result = "()")]
pub struct Deliver(pub String);

/// Live websocket sessions keyed by connection id.
#[derive(Default)]
pub struct WsRegistry {
    sessions: DashMap<ConnId, Recipient<Deliver>>,
}

impl WsRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self, conn_id: ConnId, recipient: Recipient<Deliver>) {
        self.sessions.insert(conn_id, recipient);
    }

    pub fn unregister(&self, conn_id: ConnId) {
        self.sessions.remove(&conn_id);
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

impl Outbox for WsRegistry {
    fn deliver(&self, to: ConnId, msg: &ServerMsg) -> bool {
        let Some(recipient) = self.sessions.get(&to) else {
            return false;
        };
        if !recipient.connected() {
            return false;
        }
        match serde_json::to_string(msg) {
            Ok(payload) => {
                recipient.do_send(Deliver(payload));
                true
            }
            Err(err) => {
                warn!(conn_id = %to, kind = msg.kind(), error = %err, "[WS HUB] failed to serialize outbound message");
                false
            }
        }
    }
}
