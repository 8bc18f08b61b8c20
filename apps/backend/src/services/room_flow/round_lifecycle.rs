//! Deal lifecycle: dealing into the auction, opening play, timed
//! transitions, restarts.

use tracing::{debug, info};

use super::room_ctx::RoomCtx;
use super::{views, Deferred, RoomFlowService};
use crate::domain::scoring::contract_outcome;
use crate::domain::{deal_hands, AuctionStatus, BiddingState, Contract, Phase, PlayState};
use crate::errors::domain::DomainError;
use crate::protocol::game_state::PlayedCardsView;
use crate::repos::ConnId;
use crate::ws::protocol::ServerMsg;

/// Seat that opens every auction.
const OPENING_BIDDER: u8 = 0;

impl RoomFlowService {
    /// Back to a freshly dealt `waiting` table. Everyone must ready up again.
    pub(super) fn restart_game(&mut self, conn: ConnId) -> Result<Vec<Deferred>, DomainError> {
        let mut ctx = self.ctx_for_conn(conn)?;
        let seat = ctx.require_seat(conn)?;

        let hands = deal_hands(&mut *ctx.rng);
        ctx.room.reset_deal(hands);
        info!(room_id = %ctx.room.id, conn_id = %conn, "Room restarted");

        let players = ctx.room.summaries();
        let message = "The game has been restarted. Please get ready again".to_string();
        if ctx.settings.restart_notify_all {
            for (i, player) in ctx.room.players.iter().enumerate() {
                ctx.send(
                    player.id,
                    &ServerMsg::GameRestarted {
                        message: message.clone(),
                        players: players.clone(),
                        hand: ctx.room.hands[i].clone(),
                    },
                );
            }
        } else {
            ctx.send(
                conn,
                &ServerMsg::GameRestarted {
                    message,
                    players,
                    hand: ctx.room.hands[seat as usize].clone(),
                },
            );
        }
        Ok(Vec::new())
    }
}

impl RoomCtx<'_> {
    /// All four seats ready: deal, open the auction and show each seat its hand.
    pub(super) fn start_bidding(&mut self) -> Result<(), DomainError> {
        let hands = deal_hands(&mut *self.rng);
        self.room.hands = hands;
        self.room.phase = Phase::Bidding;
        self.room.generation += 1;
        self.room.play = None;
        self.room.bidding = Some(BiddingState::new(OPENING_BIDDER));

        let opener = self.require_player(OPENING_BIDDER)?;
        let (current_bidder, current_bidder_name) = (opener.id, opener.name.clone());
        for (seat, player) in self.room.players.iter().enumerate() {
            self.send(
                player.id,
                &ServerMsg::BiddingStarted {
                    current_bidder,
                    current_bidder_name: current_bidder_name.clone(),
                    hand: self.room.hands[seat].clone(),
                    bids: Vec::new(),
                },
            );
        }

        info!(
            room_id = %self.room.id,
            generation = self.room.generation,
            "Bidding started"
        );
        Ok(())
    }

    /// Auction sealed: open play with the lead to the declarer's right.
    pub(super) fn start_play(&mut self, contract: Contract) -> Result<(), DomainError> {
        let play = PlayState::start(contract);
        let leader = play
            .current_player()
            .ok_or_else(|| DomainError::validation_other("Invariant violated: no opening leader"))?;
        self.room.phase = Phase::Playing;
        self.room.play = Some(play);

        let leader = self.require_player(leader)?;
        let msg = ServerMsg::GameStarted {
            current_player: leader.id,
            current_player_name: leader.name.clone(),
            trump_suit: contract.strain,
            final_contract: views::contract_view(&*self.room, &contract)?,
        };
        self.broadcast(&msg);

        info!(
            room_id = %self.room.id,
            declarer = contract.declarer,
            level = contract.level,
            strain = contract.strain.symbol(),
            "Contract sealed, play started"
        );
        Ok(())
    }

    pub(super) fn clear_trick(&mut self) -> Result<Vec<Deferred>, DomainError> {
        if self.room.phase != Phase::Playing {
            return Ok(Vec::new());
        }
        let Some(play) = self.room.play.as_mut() else {
            return Ok(Vec::new());
        };
        let Some(leader) = play.clear_trick() else {
            debug!(room_id = %self.room.id, "No completed trick to clear");
            return Ok(Vec::new());
        };
        let current_trick = play.trick_number();

        let msg = ServerMsg::TrickCleared {
            current_trick,
            current_player: self.require_player(leader)?.id,
            player_played_cards: PlayedCardsView::new(),
        };
        self.broadcast(&msg);
        Ok(Vec::new())
    }

    pub(super) fn finish_deal(&mut self) -> Result<Vec<Deferred>, DomainError> {
        if self.room.phase != Phase::Playing {
            return Ok(Vec::new());
        }
        let Some(play) = self.room.play.as_ref() else {
            return Ok(Vec::new());
        };
        if !play.is_deal_over() {
            return Ok(Vec::new());
        }

        let outcome = contract_outcome(&play.contract(), play.stats());
        let contract_result = views::contract_result(&*self.room, &outcome)?;
        self.room.phase = Phase::Finished;

        self.broadcast(&ServerMsg::GameEnded {
            contract_result,
            final_hands: self.room.hands.to_vec(),
        });

        info!(
            room_id = %self.room.id,
            made = outcome.made,
            declarer_tricks = outcome.declarer_tricks,
            defender_tricks = outcome.defender_tricks,
            "Deal finished"
        );
        Ok(Vec::new())
    }

    /// Four passes and no bid: throw the cards in and wait for fresh ready checks.
    pub(super) fn reset_after_voided_auction(&mut self) -> Result<Vec<Deferred>, DomainError> {
        let voided = self.room.phase == Phase::Bidding
            && self
                .room
                .bidding
                .as_ref()
                .is_some_and(|b| b.status() == AuctionStatus::Voided);
        if !voided {
            return Ok(Vec::new());
        }

        let hands = deal_hands(&mut *self.rng);
        self.room.reset_deal(hands);
        self.broadcast(&ServerMsg::GameReset {
            message: "Everyone passed. The cards have been redealt; please get ready again"
                .to_string(),
        });

        info!(room_id = %self.room.id, "Voided auction reset");
        Ok(Vec::new())
    }
}
