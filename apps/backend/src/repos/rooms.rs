//! Room repository and the room aggregate it owns.

use std::collections::HashMap;

use crate::domain::rules::PLAYERS;
use crate::domain::{BiddingState, Hands, Phase, PlayState, Seat};
use crate::protocol::game_state::PlayerSummary;
use crate::repos::connections::ConnId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatedPlayer {
    pub id: ConnId,
    pub name: String,
    pub ready: bool,
}

/// One table. Roster order is the turn order: the player at index `i` sits in seat `i`.
#[derive(Debug, Clone)]
pub struct Room {
    pub id: String,
    pub players: Vec<SeatedPlayer>,
    pub phase: Phase,
    /// Bumped whenever a deal starts or is thrown away; stamps deferred work.
    pub generation: u64,
    pub hands: Hands,
    pub bidding: Option<BiddingState>,
    pub play: Option<PlayState>,
}

impl Room {
    pub fn new(id: impl Into<String>, hands: Hands) -> Self {
        Self {
            id: id.into(),
            players: Vec::with_capacity(PLAYERS),
            phase: Phase::Waiting,
            generation: 0,
            hands,
            bidding: None,
            play: None,
        }
    }

    pub fn is_full(&self) -> bool {
        self.players.len() >= PLAYERS
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn seat_of(&self, id: ConnId) -> Option<Seat> {
        self.players
            .iter()
            .position(|p| p.id == id)
            .map(|i| i as Seat)
    }

    pub fn player_at(&self, seat: Seat) -> Option<&SeatedPlayer> {
        self.players.get(seat as usize)
    }

    pub fn has_name(&self, name: &str) -> bool {
        self.players.iter().any(|p| p.name == name)
    }

    pub fn all_ready(&self) -> bool {
        self.players.len() == PLAYERS && self.players.iter().all(|p| p.ready)
    }

    pub fn clear_ready(&mut self) {
        for p in &mut self.players {
            p.ready = false;
        }
    }

    pub fn summaries(&self) -> Vec<PlayerSummary> {
        self.players
            .iter()
            .map(|p| PlayerSummary {
                id: p.id,
                name: p.name.clone(),
                ready: p.ready,
            })
            .collect()
    }

    /// Back to `waiting` with a fresh deal and every ready flag cleared.
    pub fn reset_deal(&mut self, hands: Hands) {
        self.phase = Phase::Waiting;
        self.hands = hands;
        self.bidding = None;
        self.play = None;
        self.generation += 1;
        self.clear_ready();
    }
}

#[derive(Debug, Default)]
pub struct RoomRepository {
    rooms: HashMap<String, Room>,
}

impl RoomRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> Option<&Room> {
        self.rooms.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Room> {
        self.rooms.get_mut(id)
    }

    /// Existing room, or one built by `create` and stored under `id`.
    pub fn get_or_create(&mut self, id: &str, create: impl FnOnce() -> Room) -> &mut Room {
        self.rooms.entry(id.to_string()).or_insert_with(create)
    }

    pub fn remove(&mut self, id: &str) -> Option<Room> {
        self.rooms.remove(id)
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}
