use std::collections::HashSet;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::domain::dealing::{deal_hands, deal_hands_seeded, deal_round_robin, full_deck};
use crate::domain::rules::{HAND_SIZE, PLAYERS};
use crate::domain::Card;

#[test]
fn seeded_deal_is_reproducible() {
    assert_eq!(deal_hands_seeded(42), deal_hands_seeded(42));
    assert_ne!(deal_hands_seeded(42), deal_hands_seeded(43));
}

#[test]
fn consecutive_deals_from_one_rng_differ() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let first = deal_hands(&mut rng);
    let second = deal_hands(&mut rng);
    assert_ne!(first, second);
}

#[test]
fn every_hand_has_thirteen_and_the_union_is_the_deck() {
    let hands = deal_hands_seeded(2024);
    let mut seen: HashSet<Card> = HashSet::new();
    for hand in &hands {
        assert_eq!(hand.len(), HAND_SIZE);
        for card in hand {
            assert!(seen.insert(*card), "card {card} dealt twice");
        }
    }
    let deck: HashSet<Card> = full_deck().into_iter().collect();
    assert_eq!(seen, deck);
}

#[test]
fn round_robin_assigns_by_index_mod_seats() {
    let deck = full_deck();
    let hands = deal_round_robin(deck.clone(), PLAYERS);
    assert_eq!(hands[0][0], deck[0]);
    assert_eq!(hands[1][0], deck[1]);
    assert_eq!(hands[3][1], deck[7]);
}
