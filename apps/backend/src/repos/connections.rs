//! Connection repository: every open socket, and the room it joined.

use std::collections::HashMap;

use uuid::Uuid;

/// Opaque per-socket identifier; doubles as the player id on the wire.
pub type ConnId = Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    pub id: ConnId,
    /// Set once `join_room` succeeds.
    pub membership: Option<Membership>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Membership {
    pub room_id: String,
    pub name: String,
}

#[derive(Debug, Default)]
pub struct ConnectionRepository {
    conns: HashMap<ConnId, Connection>,
}

impl ConnectionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new, room-less connection. Re-registering is a no-op.
    pub fn open(&mut self, id: ConnId) {
        self.conns.entry(id).or_insert(Connection {
            id,
            membership: None,
        });
    }

    pub fn close(&mut self, id: ConnId) -> Option<Connection> {
        self.conns.remove(&id)
    }

    pub fn get(&self, id: ConnId) -> Option<&Connection> {
        self.conns.get(&id)
    }

    pub fn membership(&self, id: ConnId) -> Option<&Membership> {
        self.conns.get(&id).and_then(|c| c.membership.as_ref())
    }

    /// Records a successful join. Returns false for an unknown connection.
    pub fn assign(&mut self, id: ConnId, room_id: &str, name: &str) -> bool {
        match self.conns.get_mut(&id) {
            Some(conn) => {
                conn.membership = Some(Membership {
                    room_id: room_id.to_string(),
                    name: name.to_string(),
                });
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.conns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conns.is_empty()
    }
}
