//! Domain layer: pure game logic types and helpers.

pub mod bidding;
pub mod cards_logic;
pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod dealing;
pub mod rules;
pub mod scoring;
pub mod state;
pub mod tricks;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod tests_domain_dealing;
#[cfg(test)]
mod tests_props_bidding;
#[cfg(test)]
mod tests_props_legality;
#[cfg(test)]
mod tests_props_trick_winner;
#[cfg(test)]
mod tests_props_tricks;
#[cfg(test)]
mod tests_scoring;
#[cfg(test)]
mod tests_tricks;

// Re-exports for ergonomics
pub use bidding::{AuctionStatus, Bid, BiddingState, Call, CallOutcome, CallRecord, Contract};
pub use cards_logic::{card_beats, hand_has_suit, is_legal_play};
pub use cards_types::{Card, Rank, Strain, Suit};
pub use dealing::{deal_hands, Hands};
pub use scoring::{contract_outcome, ContractOutcome};
pub use state::{Phase, Seat};
pub use tricks::{PlayCardResult, PlayState, TrickPlay, TrickStats};
