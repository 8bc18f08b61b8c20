//! Deck construction, unbiased shuffling and round-robin dealing.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::domain::rules::PLAYERS;
use crate::domain::{Card, Rank, Suit};

/// One hand per seat, indexed by seat.
pub type Hands = [Vec<Card>; PLAYERS];

/// Generate a full 52-card deck in standard order.
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(52);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            deck.push(Card { suit, rank });
        }
    }
    deck
}

/// A fresh deck, uniformly permuted (Fisher-Yates via `SliceRandom::shuffle`).
pub fn shuffled_deck<R: Rng + ?Sized>(rng: &mut R) -> Vec<Card> {
    let mut deck = full_deck();
    deck.shuffle(rng);
    deck
}

/// Partition `deck` round-robin: card `i` goes to seat `i % seats`.
pub fn deal_round_robin(deck: Vec<Card>, seats: usize) -> Vec<Vec<Card>> {
    if seats == 0 {
        return Vec::new();
    }
    let mut hands: Vec<Vec<Card>> = (0..seats)
        .map(|_| Vec::with_capacity(deck.len() / seats + 1))
        .collect();
    for (i, card) in deck.into_iter().enumerate() {
        hands[i % seats].push(card);
    }
    hands
}

/// Display order only: suit groups ♠ ♥ ♦ ♣, ascending rank within a suit.
pub fn sort_hand(hand: &mut [Card]) {
    hand.sort();
}

/// Shuffle a new deck and deal 13 sorted cards to each of the four seats.
pub fn deal_hands<R: Rng + ?Sized>(rng: &mut R) -> Hands {
    let dealt = deal_round_robin(shuffled_deck(rng), PLAYERS);
    let mut hands: Hands = Default::default();
    for (slot, mut hand) in hands.iter_mut().zip(dealt) {
        sort_hand(&mut hand);
        *slot = hand;
    }
    hands
}

/// Reproducible deal for a fixed seed.
pub fn deal_hands_seeded(seed: u64) -> Hands {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    deal_hands(&mut rng)
}
