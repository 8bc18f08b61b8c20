use std::time::Duration;

use rand_chacha::ChaCha8Rng;

use super::{Deferred, DeferredAction, Outbox, RoomSettings};
use crate::domain::{BiddingState, Phase, PlayState, Seat};
use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};
use crate::repos::{ConnId, Room, SeatedPlayer};
use crate::ws::protocol::ServerMsg;

/// Mutable view of one room plus the shared service pieces a transition needs.
pub(super) struct RoomCtx<'a> {
    pub room: &'a mut Room,
    pub outbox: &'a dyn Outbox,
    pub rng: &'a mut ChaCha8Rng,
    pub settings: &'a RoomSettings,
}

impl RoomCtx<'_> {
    pub fn require_seat(&self, conn: ConnId) -> Result<Seat, DomainError> {
        self.room.seat_of(conn).ok_or_else(|| {
            DomainError::not_found(NotFoundKind::Connection, "You are not seated in this room")
        })
    }

    pub fn require_player(&self, seat: Seat) -> Result<&SeatedPlayer, DomainError> {
        super::views::seated(&*self.room, seat)
    }

    pub fn require_phase(&self, phase: Phase, detail: &str) -> Result<(), DomainError> {
        if self.room.phase != phase {
            return Err(DomainError::validation(ValidationKind::PhaseMismatch, detail));
        }
        Ok(())
    }

    pub fn bidding(&self) -> Result<&BiddingState, DomainError> {
        self.room
            .bidding
            .as_ref()
            .ok_or_else(|| DomainError::validation_other("Invariant violated: no auction in bidding"))
    }

    pub fn bidding_mut(&mut self) -> Result<&mut BiddingState, DomainError> {
        self.room
            .bidding
            .as_mut()
            .ok_or_else(|| DomainError::validation_other("Invariant violated: no auction in bidding"))
    }

    pub fn play(&self) -> Result<&PlayState, DomainError> {
        self.room
            .play
            .as_ref()
            .ok_or_else(|| DomainError::validation_other("Invariant violated: no play state"))
    }

    /// Stamp `action` with this room's current generation.
    pub fn defer(&self, action: DeferredAction, delay: Duration) -> Deferred {
        Deferred {
            room_id: self.room.id.clone(),
            generation: self.room.generation,
            delay,
            action,
        }
    }

    pub fn send(&self, to: ConnId, msg: &ServerMsg) {
        self.outbox.deliver(to, msg);
    }

    /// Deliver to every seated player. Closed connections are skipped.
    pub fn broadcast(&self, msg: &ServerMsg) {
        for player in &self.room.players {
            self.outbox.deliver(player.id, msg);
        }
    }
}
