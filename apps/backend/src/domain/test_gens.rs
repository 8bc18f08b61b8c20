// Proptest generators for domain types.
// Card generators never repeat a card within one value.

use proptest::prelude::*;

use crate::domain::dealing::full_deck;
use crate::domain::{Bid, Card, Rank, Seat, Strain, Suit};

pub fn suit() -> impl Strategy<Value = Suit> {
    prop::sample::select(Suit::ALL.to_vec())
}

/// Any strain, including no-trump.
pub fn strain() -> impl Strategy<Value = Strain> {
    prop::sample::select(Strain::ALL.to_vec())
}

/// A strain with a trump suit.
pub fn trump_strain() -> impl Strategy<Value = Strain> {
    prop_oneof![
        Just(Strain::Clubs),
        Just(Strain::Diamonds),
        Just(Strain::Hearts),
        Just(Strain::Spades),
    ]
}

pub fn rank() -> impl Strategy<Value = Rank> {
    prop::sample::select(Rank::ALL.to_vec())
}

pub fn card() -> impl Strategy<Value = Card> {
    (suit(), rank()).prop_map(|(suit, rank)| Card { suit, rank })
}

/// `count` distinct cards drawn from a full deck.
pub fn unique_cards(count: usize) -> impl Strategy<Value = Vec<Card>> {
    Just(()).prop_perturb(move |_, mut rng| {
        let mut all_cards = full_deck();
        for i in 0..count.min(all_cards.len()) {
            let j = rng.random_range(i..all_cards.len());
            all_cards.swap(i, j);
        }
        all_cards.truncate(count);
        all_cards
    })
}

pub fn unique_cards_up_to(max_count: usize) -> impl Strategy<Value = Vec<Card>> {
    (1..=max_count).prop_flat_map(unique_cards)
}

/// 1-13 distinct cards.
pub fn hand() -> impl Strategy<Value = Vec<Card>> {
    unique_cards_up_to(13)
}

pub fn seat() -> impl Strategy<Value = Seat> {
    0u8..=3u8
}

/// Four plays in clockwise order from `leader`, plus a strain.
pub fn complete_trick() -> impl Strategy<Value = (Seat, Vec<(Seat, Card)>, Strain)> {
    (seat(), unique_cards(4), strain()).prop_map(|(leader, cards, strain)| {
        let plays = cards
            .into_iter()
            .enumerate()
            .map(|(i, card)| ((leader + i as u8) % 4, card))
            .collect();
        (leader, plays, strain)
    })
}

/// 1-13 cards, none of them in `excluded_suit`.
pub fn hand_without_suit(excluded_suit: Suit) -> impl Strategy<Value = Vec<Card>> {
    Just(()).prop_perturb(move |_, mut rng| {
        let mut cards: Vec<Card> = full_deck()
            .into_iter()
            .filter(|c| c.suit != excluded_suit)
            .collect();
        let count = rng.random_range(1..=13);
        for i in 0..count {
            let j = rng.random_range(i..cards.len());
            cards.swap(i, j);
        }
        cards.truncate(count);
        cards
    })
}

pub fn bid() -> impl Strategy<Value = Bid> {
    (1u8..=7u8, strain()).prop_map(|(level, strain)| Bid { level, strain })
}

pub fn seed() -> impl Strategy<Value = u64> {
    any::<u64>()
}
