use crate::repos::ConnId;
use crate::ws::protocol::ServerMsg;

/// Where room events go. Implemented by the websocket registry in production
/// and by a recording outbox in tests.
pub trait Outbox: Send + Sync {
    /// Queue `msg` for `to`. Returns false when the connection is not open;
    /// such messages are dropped, never queued.
    fn deliver(&self, to: ConnId, msg: &ServerMsg) -> bool;
}
