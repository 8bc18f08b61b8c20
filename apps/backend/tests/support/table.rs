//! Drives a `RoomFlowService` directly, standing in for the lobby actor.
//!
//! Deferred transitions are queued instead of timed; tests fire them
//! explicitly, which makes stale-timer and ordering cases deterministic.

use std::sync::Arc;
use std::time::Duration;

use bridge_backend::domain::{Card, Phase, Strain};
use bridge_backend::repos::{ConnId, Room};
use bridge_backend::services::room_flow::{Deferred, RoomFlowService, RoomSettings};
use bridge_backend::test_support::RecordingOutbox;
use bridge_backend::ws::protocol::ClientMsg;
use uuid::Uuid;

pub const ROOM: &str = "table-1";
pub const NAMES: [&str; 4] = ["North", "East", "South", "West"];

pub fn fast_settings() -> RoomSettings {
    RoomSettings {
        trick_clear_delay: Duration::from_millis(1),
        deal_end_delay: Duration::from_millis(1),
        auction_reset_delay: Duration::from_millis(1),
        restart_notify_all: true,
    }
}

pub struct Table {
    pub flow: RoomFlowService,
    pub outbox: Arc<RecordingOutbox>,
    /// Connection ids in seat order.
    pub seats: Vec<ConnId>,
    pending: Vec<Deferred>,
}

impl Table {
    pub fn new(seed: u64) -> Self {
        Self::with_settings(fast_settings(), seed)
    }

    pub fn with_settings(settings: RoomSettings, seed: u64) -> Self {
        let outbox = Arc::new(RecordingOutbox::new());
        let flow = RoomFlowService::new(outbox.clone(), settings, Some(seed));
        Self {
            flow,
            outbox,
            seats: Vec::new(),
            pending: Vec::new(),
        }
    }

    /// Four players seated in `ROOM`, nobody ready yet.
    pub fn seated(seed: u64) -> Self {
        let mut table = Self::new(seed);
        for name in NAMES {
            table.join(name);
        }
        table
    }

    /// Four players, all ready: the auction is open.
    pub fn bidding(seed: u64) -> Self {
        let mut table = Self::seated(seed);
        table.ready_all();
        table
    }

    /// North opens 1NT and the other three pass; West is on lead.
    pub fn playing_1nt(seed: u64) -> Self {
        let mut table = Self::bidding(seed);
        table.bid(0, 1, Strain::NoTrump);
        table.pass(1);
        table.pass(2);
        table.pass(3);
        table
    }

    pub fn connect(&mut self) -> ConnId {
        let conn = Uuid::new_v4();
        self.flow.connect(conn);
        conn
    }

    pub fn send(&mut self, conn: ConnId, msg: ClientMsg) {
        let deferred = self.flow.handle(conn, msg);
        self.pending.extend(deferred);
    }

    /// Connect and join `ROOM`; seated connections are remembered in order.
    pub fn join(&mut self, name: &str) -> ConnId {
        let conn = self.connect();
        self.send(
            conn,
            ClientMsg::JoinRoom {
                room_id: ROOM.to_string(),
                player_name: name.to_string(),
            },
        );
        if self.room().is_some_and(|r| r.seat_of(conn).is_some()) {
            self.seats.push(conn);
        }
        conn
    }

    pub fn ready_all(&mut self) {
        for conn in self.seats.clone() {
            self.send(conn, ClientMsg::Ready);
        }
    }

    pub fn bid(&mut self, seat: usize, level: u8, suit: Strain) {
        self.send(self.seats[seat], ClientMsg::MakeBid { level, suit });
    }

    pub fn pass(&mut self, seat: usize) {
        self.send(self.seats[seat], ClientMsg::PassBid);
    }

    pub fn play(&mut self, seat: usize, card_index: usize) {
        self.send(self.seats[seat], ClientMsg::PlayCard { card_index });
    }

    pub fn disconnect(&mut self, conn: ConnId) {
        self.outbox.drop_conn(conn);
        self.flow.disconnect(conn);
        self.seats.retain(|c| *c != conn);
    }

    pub fn room(&self) -> Option<&Room> {
        self.flow.room(ROOM)
    }

    pub fn phase(&self) -> Phase {
        self.room().map(|r| r.phase).unwrap_or(Phase::Waiting)
    }

    pub fn pending(&self) -> &[Deferred] {
        &self.pending
    }

    pub fn take_pending(&mut self) -> Vec<Deferred> {
        std::mem::take(&mut self.pending)
    }

    /// Fire everything queued, including whatever that schedules in turn.
    pub fn fire_pending(&mut self) -> usize {
        let mut fired = 0;
        while !self.pending.is_empty() {
            for deferred in self.take_pending() {
                let next = self.flow.fire(deferred);
                self.pending.extend(next);
                fired += 1;
            }
        }
        fired
    }

    /// Seat whose turn it is to play, if play is waiting on someone.
    pub fn current_player(&self) -> Option<usize> {
        self.room()?.play.as_ref()?.current_player().map(usize::from)
    }

    /// Index in `seat`'s hand of its first legal card.
    pub fn legal_index(&self, seat: usize) -> usize {
        let room = self.room().expect("room exists");
        let play = room.play.as_ref().expect("play in progress");
        let hand = &room.hands[seat];
        let legal = play.legal_moves(hand);
        let first: Card = legal[0];
        hand.iter().position(|c| *c == first).expect("legal card in hand")
    }

    /// Play legal cards and fire trick clears until the deal ends.
    pub fn play_out_deal(&mut self) {
        for _ in 0..200 {
            if self.phase() != Phase::Playing {
                return;
            }
            match self.current_player() {
                Some(seat) => {
                    let idx = self.legal_index(seat);
                    self.play(seat, idx);
                }
                None => {
                    self.fire_pending();
                }
            }
        }
        panic!("deal did not finish");
    }
}
