//! Room flow service: the authoritative per-room state machine.
//!
//! Every inbound intent, every disconnect and every deferred transition is
//! applied here, one at a time, by a single owner. Events go out through an
//! [`Outbox`]; time-based transitions come back as [`Deferred`] values the
//! caller schedules and later hands to [`RoomFlowService::fire`].

mod outbox;
mod player_actions;
mod room_ctx;
mod round_lifecycle;
mod seats;
mod views;

use std::sync::Arc;
use std::time::Duration;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, error, info};

pub use outbox::Outbox;
use room_ctx::RoomCtx;

use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};
use crate::repos::{ConnId, ConnectionRepository, Room, RoomRepository};
use crate::ws::protocol::{ClientMsg, ServerMsg};

/// Timing and notification knobs for the room flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomSettings {
    pub trick_clear_delay: Duration,
    pub deal_end_delay: Duration,
    pub auction_reset_delay: Duration,
    /// `restart_game` refreshes every seat rather than only the requester.
    pub restart_notify_all: bool,
}

impl Default for RoomSettings {
    fn default() -> Self {
        Self {
            trick_clear_delay: Duration::from_millis(5000),
            deal_end_delay: Duration::from_millis(5000),
            auction_reset_delay: Duration::from_millis(3000),
            restart_notify_all: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredAction {
    ClearTrick,
    FinishDeal,
    ResetAfterVoidedAuction,
}

/// A transition to apply to `room_id` after `delay`, valid only while the
/// room is still on `generation`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deferred {
    pub room_id: String,
    pub generation: u64,
    pub delay: Duration,
    pub action: DeferredAction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomStats {
    pub rooms: usize,
    pub connections: usize,
}

pub struct RoomFlowService {
    rooms: RoomRepository,
    connections: ConnectionRepository,
    outbox: Arc<dyn Outbox>,
    rng: ChaCha8Rng,
    settings: RoomSettings,
}

impl RoomFlowService {
    /// `seed` fixes the deal sequence; `None` draws from OS entropy.
    pub fn new(outbox: Arc<dyn Outbox>, settings: RoomSettings, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_os_rng(),
        };
        Self::with_repositories(
            RoomRepository::new(),
            ConnectionRepository::new(),
            outbox,
            rng,
            settings,
        )
    }

    pub fn with_repositories(
        rooms: RoomRepository,
        connections: ConnectionRepository,
        outbox: Arc<dyn Outbox>,
        rng: ChaCha8Rng,
        settings: RoomSettings,
    ) -> Self {
        Self {
            rooms,
            connections,
            outbox,
            rng,
            settings,
        }
    }

    pub fn stats(&self) -> RoomStats {
        RoomStats {
            rooms: self.rooms.len(),
            connections: self.connections.len(),
        }
    }

    pub fn room(&self, room_id: &str) -> Option<&Room> {
        self.rooms.get(room_id)
    }

    pub fn connect(&mut self, conn: ConnId) {
        self.connections.open(conn);
        debug!(conn_id = %conn, "Connection opened");
    }

    /// Apply one intent. Any rejection becomes a single `error` event for `conn`.
    pub fn handle(&mut self, conn: ConnId, msg: ClientMsg) -> Vec<Deferred> {
        let kind = msg.kind();
        debug!(conn_id = %conn, kind, "Handling intent");

        let result = match msg {
            ClientMsg::JoinRoom {
                room_id,
                player_name,
            } => self.join_room(conn, &room_id, &player_name),
            ClientMsg::Ready => self.ready(conn),
            ClientMsg::CancelReady => self.cancel_ready(conn),
            ClientMsg::MakeBid { level, suit } => self.make_bid(conn, level, suit),
            ClientMsg::PassBid => self.pass_bid(conn),
            ClientMsg::PlayCard { card_index } => self.play_card(conn, card_index),
            ClientMsg::RestartGame => self.restart_game(conn),
        };

        match result {
            Ok(deferred) => deferred,
            Err(err) => {
                self.reject(conn, kind, &err);
                Vec::new()
            }
        }
    }

    /// Report a message that never made it to a typed intent.
    pub fn reject_malformed(&mut self, conn: ConnId, detail: impl Into<String>) {
        let err = DomainError::validation(ValidationKind::MalformedMessage, detail);
        self.reject(conn, "malformed", &err);
    }

    fn reject(&self, conn: ConnId, kind: &'static str, err: &DomainError) {
        info!(
            conn_id = %conn,
            kind,
            code = err.code(),
            detail = err.detail(),
            "Intent rejected"
        );
        self.outbox.deliver(conn, &ServerMsg::error(err.detail()));
    }

    pub fn disconnect(&mut self, conn: ConnId) {
        self.leave(conn);
    }

    /// Apply a previously scheduled transition, unless the room moved on.
    pub fn fire(&mut self, deferred: Deferred) -> Vec<Deferred> {
        let Some(mut ctx) = self.ctx_for_room(&deferred.room_id) else {
            debug!(room_id = %deferred.room_id, action = ?deferred.action, "Deferred action for vanished room");
            return Vec::new();
        };
        if ctx.room.generation != deferred.generation {
            debug!(
                room_id = %deferred.room_id,
                action = ?deferred.action,
                scheduled = deferred.generation,
                current = ctx.room.generation,
                "Stale deferred action skipped"
            );
            return Vec::new();
        }

        let result = match deferred.action {
            DeferredAction::ClearTrick => ctx.clear_trick(),
            DeferredAction::FinishDeal => ctx.finish_deal(),
            DeferredAction::ResetAfterVoidedAuction => ctx.reset_after_voided_auction(),
        };

        result.unwrap_or_else(|err| {
            error!(
                room_id = %deferred.room_id,
                action = ?deferred.action,
                error = %err,
                "Deferred action failed"
            );
            Vec::new()
        })
    }

    /// Room context for the room `conn` has joined.
    fn ctx_for_conn(&mut self, conn: ConnId) -> Result<RoomCtx<'_>, DomainError> {
        let Some(membership) = self.connections.membership(conn) else {
            return Err(DomainError::validation(
                ValidationKind::NotInRoom,
                "Join a room first",
            ));
        };
        let Some(room) = self.rooms.get_mut(&membership.room_id) else {
            return Err(DomainError::not_found(
                NotFoundKind::Room,
                "Room no longer exists",
            ));
        };
        Ok(RoomCtx {
            room,
            outbox: &*self.outbox,
            rng: &mut self.rng,
            settings: &self.settings,
        })
    }

    fn ctx_for_room(&mut self, room_id: &str) -> Option<RoomCtx<'_>> {
        let room = self.rooms.get_mut(room_id)?;
        Some(RoomCtx {
            room,
            outbox: &*self.outbox,
            rng: &mut self.rng,
            settings: &self.settings,
        })
    }
}
