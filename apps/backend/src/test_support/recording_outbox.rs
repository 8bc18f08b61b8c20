use std::collections::HashSet;

use parking_lot::Mutex;

use crate::repos::ConnId;
use crate::services::room_flow::Outbox;
use crate::ws::protocol::ServerMsg;

/// Outbox that keeps every delivered event in order, per recipient.
///
/// Connections marked with [`RecordingOutbox::drop_conn`] behave like a
/// socket that already went away: delivery reports `false` and nothing is kept.
#[derive(Default)]
pub struct RecordingOutbox {
    events: Mutex<Vec<(ConnId, ServerMsg)>>,
    dropped: Mutex<HashSet<ConnId>>,
}

impl RecordingOutbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn drop_conn(&self, conn: ConnId) {
        self.dropped.lock().insert(conn);
    }

    /// Every event delivered so far, across all connections.
    pub fn all(&self) -> Vec<(ConnId, ServerMsg)> {
        self.events.lock().clone()
    }

    /// Events delivered to `conn`, in delivery order.
    pub fn for_conn(&self, conn: ConnId) -> Vec<ServerMsg> {
        self.events
            .lock()
            .iter()
            .filter(|(to, _)| *to == conn)
            .map(|(_, msg)| msg.clone())
            .collect()
    }

    /// `type` tags delivered to `conn`, in delivery order.
    pub fn kinds_for(&self, conn: ConnId) -> Vec<&'static str> {
        self.events
            .lock()
            .iter()
            .filter(|(to, _)| *to == conn)
            .map(|(_, msg)| msg.kind())
            .collect()
    }

    /// The most recent event delivered to `conn`.
    pub fn last_for(&self, conn: ConnId) -> Option<ServerMsg> {
        self.events
            .lock()
            .iter()
            .rev()
            .find(|(to, _)| *to == conn)
            .map(|(_, msg)| msg.clone())
    }

    /// Forget everything recorded so far.
    pub fn clear(&self) {
        self.events.lock().clear();
    }
}

impl Outbox for RecordingOutbox {
    fn deliver(&self, to: ConnId, msg: &ServerMsg) -> bool {
        if self.dropped.lock().contains(&to) {
            return false;
        }
        self.events.lock().push((to, msg.clone()));
        true
    }
}
