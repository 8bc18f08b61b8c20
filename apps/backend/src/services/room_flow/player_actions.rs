//! In-deal intents: bids, passes and card plays.

use tracing::info;

use super::{views, Deferred, DeferredAction, RoomFlowService};
use crate::domain::{Bid, CallOutcome, Phase, Strain};
use crate::errors::domain::DomainError;
use crate::repos::ConnId;
use crate::ws::protocol::ServerMsg;

impl RoomFlowService {
    pub(super) fn make_bid(
        &mut self,
        conn: ConnId,
        level: u8,
        strain: Strain,
    ) -> Result<Vec<Deferred>, DomainError> {
        let mut ctx = self.ctx_for_conn(conn)?;
        let seat = ctx.require_seat(conn)?;
        ctx.require_phase(Phase::Bidding, "Bidding is not in progress")?;

        let bidding = ctx.bidding_mut()?;
        bidding.ensure_turn(seat)?;
        let bid = Bid::new(level, strain)?;
        let CallOutcome::Continue { next_bidder } = bidding.place_bid(seat, bid)? else {
            return Err(DomainError::validation_other(
                "Invariant violated: a bid cannot close the auction",
            ));
        };

        let bidding = ctx.bidding()?;
        let bids = views::bid_history(&*ctx.room, bidding)?;
        let bid = bids
            .last()
            .cloned()
            .ok_or_else(|| DomainError::validation_other("Invariant violated: bid not recorded"))?;
        let next = ctx.require_player(next_bidder)?;
        let msg = ServerMsg::BidMade {
            bid,
            bids,
            current_bidder: next.id,
            current_bidder_name: next.name.clone(),
        };
        ctx.broadcast(&msg);
        Ok(Vec::new())
    }

    pub(super) fn pass_bid(&mut self, conn: ConnId) -> Result<Vec<Deferred>, DomainError> {
        let mut ctx = self.ctx_for_conn(conn)?;
        let seat = ctx.require_seat(conn)?;
        ctx.require_phase(Phase::Bidding, "Bidding is not in progress")?;

        let outcome = ctx.bidding_mut()?.pass(seat)?;
        match outcome {
            CallOutcome::Continue { next_bidder } => {
                let bidding = ctx.bidding()?;
                let bids = views::bid_history(&*ctx.room, bidding)?;
                let pass_info = bids.last().cloned().ok_or_else(|| {
                    DomainError::validation_other("Invariant violated: pass not recorded")
                })?;
                let next = ctx.require_player(next_bidder)?;
                let msg = ServerMsg::BidPassed {
                    pass_info,
                    bids,
                    current_bidder: next.id,
                    current_bidder_name: next.name.clone(),
                    pass_count: bidding.consecutive_passes(),
                };
                ctx.broadcast(&msg);
                Ok(Vec::new())
            }
            CallOutcome::Sealed(contract) => {
                ctx.start_play(contract)?;
                Ok(Vec::new())
            }
            CallOutcome::Voided => {
                ctx.broadcast(&ServerMsg::BiddingFailed {
                    message: "All players passed. The cards will be redealt".to_string(),
                });
                info!(room_id = %ctx.room.id, "Auction voided");
                Ok(vec![ctx.defer(
                    DeferredAction::ResetAfterVoidedAuction,
                    ctx.settings.auction_reset_delay,
                )])
            }
        }
    }

    pub(super) fn play_card(
        &mut self,
        conn: ConnId,
        card_index: usize,
    ) -> Result<Vec<Deferred>, DomainError> {
        let mut ctx = self.ctx_for_conn(conn)?;
        let seat = ctx.require_seat(conn)?;
        ctx.require_phase(Phase::Playing, "Cards can only be played after the auction")?;

        let result = {
            let room = &mut *ctx.room;
            let play = room.play.as_mut().ok_or_else(|| {
                DomainError::validation_other("Invariant violated: no play state")
            })?;
            play.play_card(&mut room.hands, seat, card_index)?
        };

        let play = ctx.play()?;
        let player_played_cards = views::played_cards(&*ctx.room, play);
        let current_player = match result.next_player {
            Some(next) => Some(ctx.require_player(next)?.id),
            None => None,
        };
        ctx.broadcast(&ServerMsg::CardPlayed {
            player_id: conn,
            card: result.card,
            current_player,
            current_trick: play.trick_number(),
            trick_count: play.trick().len(),
            player_played_cards: player_played_cards.clone(),
        });

        let Some(done) = result.completed else {
            return Ok(Vec::new());
        };

        let winner = views::trick_winner(&*ctx.room, &done)?;
        info!(
            room_id = %ctx.room.id,
            trick = done.trick_number,
            winner = %winner.player_name,
            declarer_side = done.declarer_side_won,
            "Trick completed"
        );
        ctx.broadcast(&ServerMsg::TrickCompleted {
            trick_number: done.trick_number,
            trick_cards: views::trick_cards(&*ctx.room, &done)?,
            player_played_cards,
            trick_winner: winner,
            trick_stats: views::trick_stats(&*ctx.room, play.stats())?,
        });

        let next = if done.deal_over {
            ctx.defer(DeferredAction::FinishDeal, ctx.settings.deal_end_delay)
        } else {
            ctx.defer(DeferredAction::ClearTrick, ctx.settings.trick_clear_delay)
        };
        Ok(vec![next])
    }
}
