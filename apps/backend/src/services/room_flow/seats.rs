//! Seating: joining, ready checks and departures.

use tracing::{debug, info};

use super::room_ctx::RoomCtx;
use super::{Deferred, RoomFlowService};
use crate::domain::rules::PLAYERS;
use crate::domain::{deal_hands, Hands, Phase};
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind, ValidationKind};
use crate::protocol::game_state::{PlayerRef, PlayerSummary};
use crate::repos::{ConnId, Room, SeatedPlayer};
use crate::ws::protocol::ServerMsg;

impl RoomFlowService {
    pub(super) fn join_room(
        &mut self,
        conn: ConnId,
        room_id: &str,
        player_name: &str,
    ) -> Result<Vec<Deferred>, DomainError> {
        let Some(connection) = self.connections.get(conn) else {
            return Err(DomainError::not_found(
                NotFoundKind::Connection,
                "Unknown connection",
            ));
        };
        if connection.membership.is_some() {
            return Err(DomainError::validation(
                ValidationKind::AlreadyInRoom,
                "You have already joined a room",
            ));
        }

        let room_id = room_id.trim();
        if room_id.is_empty() {
            return Err(DomainError::validation(
                ValidationKind::InvalidRoomId,
                "Room id is required",
            ));
        }
        let name = player_name.trim();
        if name.is_empty() {
            return Err(DomainError::validation(
                ValidationKind::InvalidName,
                "Player name is required",
            ));
        }

        if let Some(room) = self.rooms.get(room_id) {
            if room.is_full() {
                return Err(DomainError::conflict(ConflictKind::RoomFull, "Room is full"));
            }
            if room.has_name(name) {
                return Err(DomainError::conflict(
                    ConflictKind::DuplicateName,
                    "A player with that name is already in the room",
                ));
            }
        }

        let room = self
            .rooms
            .get_or_create(room_id, || Room::new(room_id, Hands::default()));
        room.players.push(SeatedPlayer {
            id: conn,
            name: name.to_string(),
            ready: false,
        });
        self.connections.assign(conn, room_id, name);

        info!(
            room_id,
            conn_id = %conn,
            player_name = name,
            seat = room.players.len() - 1,
            "Player joined room"
        );

        self.outbox.deliver(
            conn,
            &ServerMsg::RoomInfo {
                room_id: room_id.to_string(),
                player_id: conn,
                players: room.summaries(),
            },
        );
        let joined = ServerMsg::PlayerJoined {
            player: PlayerSummary {
                id: conn,
                name: name.to_string(),
                ready: false,
            },
        };
        for other in room.players.iter().filter(|p| p.id != conn) {
            self.outbox.deliver(other.id, &joined);
        }

        Ok(Vec::new())
    }

    pub(super) fn ready(&mut self, conn: ConnId) -> Result<Vec<Deferred>, DomainError> {
        let mut ctx = self.ctx_for_conn(conn)?;
        let seat = ctx.require_waiting_seat(conn)?;

        ctx.room.players[seat as usize].ready = true;
        ctx.broadcast(&ServerMsg::PlayerReady { player_id: conn });

        if ctx.room.all_ready() {
            ctx.start_bidding()?;
        }
        Ok(Vec::new())
    }

    pub(super) fn cancel_ready(&mut self, conn: ConnId) -> Result<Vec<Deferred>, DomainError> {
        let ctx = self.ctx_for_conn(conn)?;
        let seat = ctx.require_waiting_seat(conn)?;

        ctx.room.players[seat as usize].ready = false;
        ctx.broadcast(&ServerMsg::PlayerCancelReady { player_id: conn });
        Ok(Vec::new())
    }

    /// Drop `conn` and everything it held: its seat, and the room if it was the last one.
    pub(super) fn leave(&mut self, conn: ConnId) {
        let Some(closed) = self.connections.close(conn) else {
            return;
        };
        let Some(membership) = closed.membership else {
            debug!(conn_id = %conn, "Connection closed before joining a room");
            return;
        };
        let room_id = membership.room_id;

        let Some(mut ctx) = self.ctx_for_room(&room_id) else {
            return;
        };
        let Some(seat) = ctx.room.seat_of(conn) else {
            return;
        };
        let departed = ctx.room.players.remove(seat as usize);
        info!(
            room_id = %room_id,
            conn_id = %conn,
            player_name = %departed.name,
            phase = ctx.room.phase.as_str(),
            "Player left room"
        );

        if ctx.room.is_empty() {
            self.rooms.remove(&room_id);
            info!(room_id = %room_id, "Room closed");
            return;
        }
        ctx.after_departure(departed);
    }
}

impl RoomCtx<'_> {
    fn require_waiting_seat(&self, conn: ConnId) -> Result<u8, DomainError> {
        let seat = self.require_seat(conn)?;
        if self.room.phase != Phase::Waiting {
            return Err(DomainError::validation(
                ValidationKind::PhaseMismatch,
                "Ready checks only happen while waiting for players",
            ));
        }
        Ok(seat)
    }

    fn after_departure(&mut self, departed: SeatedPlayer) {
        if self.room.phase == Phase::Playing {
            // Any loss mid-play ends the hand; there is no reconnect window.
            self.room.phase = Phase::Finished;
            self.room.generation += 1;
            self.room.clear_ready();
            let remaining_players = self
                .room
                .players
                .iter()
                .map(|p| PlayerRef {
                    id: p.id,
                    name: p.name.clone(),
                })
                .collect();
            self.broadcast(&ServerMsg::GameEndedDisconnect {
                message: format!(
                    "The game ended because {} disconnected. Restart to deal again",
                    departed.name
                ),
                disconnected_player: PlayerRef {
                    id: departed.id,
                    name: departed.name,
                },
                remaining_players,
            });
            return;
        }

        let remaining = self.room.players.len();
        self.broadcast(&ServerMsg::PlayerLeft {
            player_id: departed.id,
            remaining_players: remaining,
        });

        if self.room.phase != Phase::Waiting {
            let hands = deal_hands(&mut *self.rng);
            self.room.reset_deal(hands);
        }
        if remaining < PLAYERS {
            self.room.clear_ready();
            self.broadcast(&ServerMsg::GameReset {
                message: "A player left. Please get ready again".to_string(),
            });
        }
    }
}
