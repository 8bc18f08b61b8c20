//! Builders turning room state into wire payloads.

use crate::domain::bidding::{Call, CallRecord};
use crate::domain::tricks::{CompletedTrick, TrickStats};
use crate::domain::{BiddingState, Contract, ContractOutcome, PlayState, Seat};
use crate::errors::domain::DomainError;
use crate::protocol::game_state::{
    BidRecord, CallKind, ContractResultKind, ContractResultView, ContractStatsView, ContractView,
    PlayedCardsView, PlayerRef, TeamView, TeamsView, TrickCardView, TrickRecordView,
    TrickStatsView, TrickWinnerView,
};
use crate::repos::{Room, SeatedPlayer};

pub(super) fn seated(room: &Room, seat: Seat) -> Result<&SeatedPlayer, DomainError> {
    room.player_at(seat).ok_or_else(|| {
        DomainError::validation_other(format!("Invariant violated: seat {seat} is empty"))
    })
}

pub fn player_ref(room: &Room, seat: Seat) -> Result<PlayerRef, DomainError> {
    let p = seated(room, seat)?;
    Ok(PlayerRef {
        id: p.id,
        name: p.name.clone(),
    })
}

pub fn call_record(room: &Room, record: &CallRecord) -> Result<BidRecord, DomainError> {
    let p = seated(room, record.seat)?;
    let (kind, level, suit) = match record.call {
        Call::Bid(bid) => (CallKind::Bid, Some(bid.level), Some(bid.strain)),
        Call::Pass => (CallKind::Pass, None, None),
    };
    Ok(BidRecord {
        player_id: p.id,
        player_name: p.name.clone(),
        kind,
        level,
        suit,
    })
}

pub fn bid_history(room: &Room, bidding: &BiddingState) -> Result<Vec<BidRecord>, DomainError> {
    bidding
        .calls()
        .iter()
        .map(|r| call_record(room, r))
        .collect()
}

pub fn contract_view(room: &Room, contract: &Contract) -> Result<ContractView, DomainError> {
    let p = seated(room, contract.declarer)?;
    Ok(ContractView {
        player_id: p.id,
        player_name: p.name.clone(),
        level: contract.level,
        suit: contract.strain,
    })
}

pub fn played_cards(room: &Room, play: &PlayState) -> PlayedCardsView {
    room.players
        .iter()
        .zip(play.played().iter())
        .filter(|(_, cards)| !cards.is_empty())
        .map(|(p, cards)| (p.id, cards.clone()))
        .collect()
}

pub fn trick_cards(room: &Room, trick: &CompletedTrick) -> Result<Vec<TrickCardView>, DomainError> {
    trick
        .plays
        .iter()
        .map(|play| {
            Ok(TrickCardView {
                player_id: seated(room, play.seat)?.id,
                card: play.card,
            })
        })
        .collect()
}

pub fn trick_winner(room: &Room, trick: &CompletedTrick) -> Result<TrickWinnerView, DomainError> {
    let p = seated(room, trick.winner.seat)?;
    Ok(TrickWinnerView {
        player_id: p.id,
        player_name: p.name.clone(),
        winning_card: trick.winner.card,
    })
}

pub fn trick_stats(room: &Room, stats: &TrickStats) -> Result<TrickStatsView, DomainError> {
    let trick_records = stats
        .records
        .iter()
        .map(|r| {
            Ok(TrickRecordView {
                player_id: seated(room, r.seat)?.id,
                trick_number: r.trick_number,
                is_our_team: r.our_team_won,
                winner_name: seated(room, r.winner)?.name.clone(),
                winning_card: r.winning_card,
            })
        })
        .collect::<Result<Vec<_>, DomainError>>()?;

    Ok(TrickStatsView {
        declarer_team_tricks: stats.declarer_tricks,
        defender_team_tricks: stats.defender_tricks,
        trick_records,
    })
}

fn team(room: &Room, seats: [Seat; 2], tricks: u8, won: bool) -> Result<TeamView, DomainError> {
    let players = seats
        .iter()
        .map(|&seat| player_ref(room, seat))
        .collect::<Result<Vec<_>, DomainError>>()?;
    Ok(TeamView {
        players,
        tricks,
        won,
    })
}

pub fn contract_result(
    room: &Room,
    outcome: &ContractOutcome,
) -> Result<ContractResultView, DomainError> {
    Ok(ContractResultView {
        result: if outcome.made {
            ContractResultKind::ContractMade
        } else {
            ContractResultKind::ContractFailed
        },
        stats: ContractStatsView {
            required: outcome.required,
            defender_required: outcome.defender_required,
            actual: outcome.actual,
            undertricks: outcome.undertricks,
            tricks_played: outcome.tricks_played,
        },
        teams: TeamsView {
            declarer: team(
                room,
                outcome.declarer_seats,
                outcome.declarer_tricks,
                outcome.made,
            )?,
            defender: team(
                room,
                outcome.defender_seats,
                outcome.defender_tricks,
                !outcome.made,
            )?,
        },
    })
}
