//! Contract evaluation: early end-of-deal detection and the final result.

use crate::domain::bidding::Contract;
use crate::domain::state::{next_seat, partner_of, Seat};
use crate::domain::tricks::TrickStats;

/// True once either partnership has reached the tricks it needs.
///
/// Declarer needs `6 + level`; defenders need enough to make that impossible.
/// This can happen well before all thirteen tricks are played.
pub fn is_deal_over(contract: &Contract, stats: &TrickStats) -> bool {
    stats.declarer_tricks >= contract.declarer_required()
        || stats.defender_tricks >= contract.defender_required()
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct ContractOutcome {
    pub made: bool,
    pub required: u8,
    pub defender_required: u8,
    /// Tricks taken by the declaring side.
    pub actual: u8,
    pub undertricks: u8,
    pub declarer_tricks: u8,
    pub defender_tricks: u8,
    pub tricks_played: u8,
    pub declarer_seats: [Seat; 2],
    pub defender_seats: [Seat; 2],
}

pub fn contract_outcome(contract: &Contract, stats: &TrickStats) -> ContractOutcome {
    let required = contract.declarer_required();
    let actual = stats.declarer_tricks;
    let made = actual >= required;
    let declarer = contract.declarer;
    let defender = next_seat(declarer);

    ContractOutcome {
        made,
        required,
        defender_required: contract.defender_required(),
        actual,
        undertricks: if made { 0 } else { required - actual },
        declarer_tricks: stats.declarer_tricks,
        defender_tricks: stats.defender_tricks,
        tricks_played: stats.tricks_played(),
        declarer_seats: [declarer, partner_of(declarer)],
        defender_seats: [defender, partner_of(defender)],
    }
}
