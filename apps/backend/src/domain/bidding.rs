//! Auction: turn order, bid legality and contract finalisation.

use crate::domain::rules::{declarer_required, defender_required, valid_level_range};
use crate::domain::state::{next_seat, same_partnership, Seat};
use crate::domain::Strain;
use crate::errors::domain::{DomainError, ValidationKind};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Bid {
    pub level: u8,
    pub strain: Strain,
}

impl Bid {
    pub fn new(level: u8, strain: Strain) -> Result<Self, DomainError> {
        let range = valid_level_range();
        if !range.contains(&level) {
            return Err(DomainError::validation(
                ValidationKind::InvalidBid,
                format!("Bid level must be in range {range:?}"),
            ));
        }
        Ok(Self { level, strain })
    }

    /// Strictly higher: a higher level, or the same level in a higher-ranking strain.
    pub fn outranks(&self, other: &Bid) -> bool {
        self.level > other.level
            || (self.level == other.level && self.strain.rank() > other.strain.rank())
    }
}

/// A bid is legal when nothing has been bid yet or it outranks the last bid.
pub fn is_legal_bid(bid: &Bid, last: Option<&Bid>) -> bool {
    match last {
        None => true,
        Some(last) => bid.outranks(last),
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Call {
    Bid(Bid),
    Pass,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct CallRecord {
    pub seat: Seat,
    pub call: Call,
}

/// The sealed final bid the declaring side must fulfil.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Contract {
    pub declarer: Seat,
    pub level: u8,
    pub strain: Strain,
}

impl Contract {
    pub fn declarer_required(&self) -> u8 {
        declarer_required(self.level)
    }

    pub fn defender_required(&self) -> u8 {
        defender_required(self.level)
    }

    pub fn is_declarer_side(&self, seat: Seat) -> bool {
        same_partnership(seat, self.declarer)
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum AuctionStatus {
    Open,
    Sealed(Contract),
    /// Four passes with no bid: the deal is thrown in.
    Voided,
}

/// What a call did to the auction.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum CallOutcome {
    Continue { next_bidder: Seat },
    Sealed(Contract),
    Voided,
}

#[derive(Debug, Clone)]
pub struct BiddingState {
    current_bidder: Seat,
    calls: Vec<CallRecord>,
    consecutive_passes: u8,
    status: AuctionStatus,
}

impl BiddingState {
    pub fn new(opening_bidder: Seat) -> Self {
        Self {
            current_bidder: opening_bidder,
            calls: Vec::new(),
            consecutive_passes: 0,
            status: AuctionStatus::Open,
        }
    }

    /// Seat expected to call next; `None` once the auction is closed.
    pub fn current_bidder(&self) -> Option<Seat> {
        match self.status {
            AuctionStatus::Open => Some(self.current_bidder),
            _ => None,
        }
    }

    pub fn calls(&self) -> &[CallRecord] {
        &self.calls
    }

    pub fn consecutive_passes(&self) -> u8 {
        self.consecutive_passes
    }

    pub fn status(&self) -> AuctionStatus {
        self.status
    }

    pub fn final_contract(&self) -> Option<Contract> {
        match self.status {
            AuctionStatus::Sealed(contract) => Some(contract),
            _ => None,
        }
    }

    /// Most recent actual bid (passes skipped) and who made it.
    pub fn last_bid(&self) -> Option<(Seat, Bid)> {
        self.calls.iter().rev().find_map(|r| match r.call {
            Call::Bid(bid) => Some((r.seat, bid)),
            Call::Pass => None,
        })
    }

    /// Rejects calls once the auction is closed or when it is not `seat`'s turn.
    pub fn ensure_turn(&self, seat: Seat) -> Result<(), DomainError> {
        if self.status != AuctionStatus::Open {
            return Err(DomainError::validation(
                ValidationKind::AuctionClosed,
                "The auction is already over",
            ));
        }
        if seat != self.current_bidder {
            return Err(DomainError::validation(
                ValidationKind::OutOfTurn,
                "It is not your turn to bid",
            ));
        }
        Ok(())
    }

    pub fn place_bid(&mut self, seat: Seat, bid: Bid) -> Result<CallOutcome, DomainError> {
        self.ensure_turn(seat)?;

        let last = self.last_bid().map(|(_, b)| b);
        if !is_legal_bid(&bid, last.as_ref()) {
            return Err(DomainError::validation(
                ValidationKind::BidTooLow,
                "A bid must be higher than the previous bid",
            ));
        }

        self.calls.push(CallRecord {
            seat,
            call: Call::Bid(bid),
        });
        self.consecutive_passes = 0;
        self.current_bidder = next_seat(seat);
        Ok(CallOutcome::Continue {
            next_bidder: self.current_bidder,
        })
    }

    pub fn pass(&mut self, seat: Seat) -> Result<CallOutcome, DomainError> {
        self.ensure_turn(seat)?;

        self.calls.push(CallRecord {
            seat,
            call: Call::Pass,
        });
        self.consecutive_passes = self.consecutive_passes.saturating_add(1);

        // Three passes behind a bid seals it; checked first because it is
        // reached at exactly three passes while a bid exists.
        if self.consecutive_passes >= 3 {
            if let Some((declarer, bid)) = self.last_bid() {
                let contract = Contract {
                    declarer,
                    level: bid.level,
                    strain: bid.strain,
                };
                self.status = AuctionStatus::Sealed(contract);
                return Ok(CallOutcome::Sealed(contract));
            }
        }

        if self.consecutive_passes >= 4 {
            self.status = AuctionStatus::Voided;
            return Ok(CallOutcome::Voided);
        }

        self.current_bidder = next_seat(seat);
        Ok(CallOutcome::Continue {
            next_bidder: self.current_bidder,
        })
    }
}
