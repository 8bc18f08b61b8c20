//! Trick engine: play order, follow-suit enforcement, trick resolution and
//! per-seat trick bookkeeping for a single deal.

use crate::domain::bidding::Contract;
use crate::domain::cards_logic::is_legal_play;
use crate::domain::dealing::Hands;
use crate::domain::rules::PLAYERS;
use crate::domain::scoring::is_deal_over;
use crate::domain::state::{next_seat, prev_seat, same_partnership, Seat};
use crate::domain::{card_beats, Card, Strain, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct TrickPlay {
    pub seat: Seat,
    pub card: Card,
}

/// Cards played to the current trick, in play order. Never holds more than four.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Trick {
    plays: Vec<TrickPlay>,
}

impl Trick {
    pub fn plays(&self) -> &[TrickPlay] {
        &self.plays
    }

    pub fn lead_suit(&self) -> Option<Suit> {
        self.plays.first().map(|p| p.card.suit)
    }

    pub fn len(&self) -> usize {
        self.plays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plays.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.plays.len() == PLAYERS
    }
}

/// Winner of a trick: the highest trump if any trump was played, otherwise
/// the highest card of the lead suit. Returns `None` for an empty trick.
pub fn resolve_trick_winner(plays: &[TrickPlay], strain: Strain) -> Option<TrickPlay> {
    let first = *plays.first()?;
    let lead = first.card.suit;
    let winner = plays.iter().skip(1).fold(first, |best, p| {
        if card_beats(p.card, best.card, lead, strain) {
            *p
        } else {
            best
        }
    });
    Some(winner)
}

/// One seat's view of a finished trick.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct TrickRecord {
    pub seat: Seat,
    pub trick_number: u8,
    /// Whether the trick went to this seat's own partnership.
    pub our_team_won: bool,
    pub winner: Seat,
    pub winning_card: Card,
}

#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct TrickStats {
    pub declarer_tricks: u8,
    pub defender_tricks: u8,
    pub records: Vec<TrickRecord>,
}

impl TrickStats {
    pub fn tricks_played(&self) -> u8 {
        self.declarer_tricks + self.defender_tricks
    }
}

/// Snapshot of a trick at the moment its fourth card lands.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct CompletedTrick {
    pub trick_number: u8,
    pub plays: Vec<TrickPlay>,
    pub winner: TrickPlay,
    pub declarer_side_won: bool,
    /// Either partnership has reached its target; no further trick is led.
    pub deal_over: bool,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct PlayCardResult {
    pub card: Card,
    /// Next seat to play; `None` when the trick just completed.
    pub next_player: Option<Seat>,
    pub completed: Option<CompletedTrick>,
}

#[derive(Debug, Clone)]
pub struct PlayState {
    contract: Contract,
    current_player: Option<Seat>,
    trick: Trick,
    trick_number: u8,
    stats: TrickStats,
    played: [Vec<Card>; PLAYERS],
    last_winner: Option<Seat>,
    deal_over: bool,
}

impl PlayState {
    /// Opening lead belongs to the seat counter-clockwise of the declarer.
    pub fn start(contract: Contract) -> Self {
        Self {
            contract,
            current_player: Some(prev_seat(contract.declarer)),
            trick: Trick::default(),
            trick_number: 1,
            stats: TrickStats::default(),
            played: Default::default(),
            last_winner: None,
            deal_over: false,
        }
    }

    pub fn contract(&self) -> Contract {
        self.contract
    }

    pub fn current_player(&self) -> Option<Seat> {
        self.current_player
    }

    pub fn trick(&self) -> &Trick {
        &self.trick
    }

    pub fn trick_number(&self) -> u8 {
        self.trick_number
    }

    pub fn stats(&self) -> &TrickStats {
        &self.stats
    }

    pub fn played(&self) -> &[Vec<Card>; PLAYERS] {
        &self.played
    }

    pub fn is_deal_over(&self) -> bool {
        self.deal_over
    }

    /// Cards `hand` may legally contribute to the current trick, ignoring turn.
    pub fn legal_moves(&self, hand: &[Card]) -> Vec<Card> {
        let lead = self.trick.lead_suit();
        hand.iter()
            .copied()
            .filter(|c| is_legal_play(*c, lead, hand))
            .collect()
    }

    /// Play the card at `card_index` of `seat`'s hand into the current trick.
    pub fn play_card(
        &mut self,
        hands: &mut Hands,
        seat: Seat,
        card_index: usize,
    ) -> Result<PlayCardResult, DomainError> {
        let Some(turn) = self.current_player else {
            return Err(DomainError::validation(
                ValidationKind::TrickResolving,
                "Wait for the current trick to be cleared",
            ));
        };
        if turn != seat {
            return Err(DomainError::validation(
                ValidationKind::OutOfTurn,
                "It is not your turn to play",
            ));
        }

        let hand = &mut hands[seat as usize];
        let Some(&card) = hand.get(card_index) else {
            return Err(DomainError::validation(
                ValidationKind::CardIndexOutOfRange,
                "Invalid card",
            ));
        };

        let lead = self.trick.lead_suit();
        if !is_legal_play(card, lead, hand) {
            let detail = match lead {
                Some(suit) => format!("You must follow {}, unless you have none", suit.symbol()),
                None => "Card cannot be played".to_string(),
            };
            return Err(DomainError::validation(ValidationKind::MustFollowSuit, detail));
        }

        hand.remove(card_index);
        self.trick.plays.push(TrickPlay { seat, card });
        self.played[seat as usize].push(card);

        if !self.trick.is_complete() {
            let next = next_seat(seat);
            self.current_player = Some(next);
            return Ok(PlayCardResult {
                card,
                next_player: Some(next),
                completed: None,
            });
        }

        self.current_player = None;
        let completed = self.complete_trick()?;
        Ok(PlayCardResult {
            card,
            next_player: None,
            completed: Some(completed),
        })
    }

    fn complete_trick(&mut self) -> Result<CompletedTrick, DomainError> {
        let winner = resolve_trick_winner(self.trick.plays(), self.contract.strain)
            .ok_or_else(|| DomainError::validation_other("Invariant violated: empty trick"))?;

        let declarer_side_won = self.contract.is_declarer_side(winner.seat);
        if declarer_side_won {
            self.stats.declarer_tricks += 1;
        } else {
            self.stats.defender_tricks += 1;
        }

        for seat in 0..PLAYERS as Seat {
            self.stats.records.push(TrickRecord {
                seat,
                trick_number: self.trick_number,
                our_team_won: same_partnership(seat, winner.seat),
                winner: winner.seat,
                winning_card: winner.card,
            });
        }

        self.last_winner = Some(winner.seat);
        self.deal_over = is_deal_over(&self.contract, &self.stats);

        Ok(CompletedTrick {
            trick_number: self.trick_number,
            plays: self.trick.plays.clone(),
            winner,
            declarer_side_won,
            deal_over: self.deal_over,
        })
    }

    /// Empty a completed trick and hand the lead to its winner.
    ///
    /// Returns the new leader, or `None` when there is no completed trick to
    /// clear or the deal is already over.
    pub fn clear_trick(&mut self) -> Option<Seat> {
        if !self.trick.is_complete() || self.deal_over {
            return None;
        }
        let leader = self.last_winner?;
        self.trick = Trick::default();
        self.trick_number += 1;
        self.current_player = Some(leader);
        Some(leader)
    }
}
