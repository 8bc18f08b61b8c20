/// Property-based tests for dealing and whole-deal play
use std::collections::HashSet;

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::domain::bidding::Contract;
use crate::domain::dealing::{deal_hands_seeded, full_deck, shuffled_deck};
use crate::domain::rules::{HAND_SIZE, TOTAL_TRICKS};
use crate::domain::scoring::is_deal_over;
use crate::domain::tricks::PlayState;
use crate::domain::{test_gens, test_prelude, Card};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: every shuffle is a permutation of the 52-card deck.
    #[test]
    fn prop_shuffle_is_permutation(seed in test_gens::seed()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = shuffled_deck(&mut rng);
        prop_assert_eq!(deck.len(), 52);
        let unique: HashSet<Card> = deck.iter().copied().collect();
        let expected: HashSet<Card> = full_deck().into_iter().collect();
        prop_assert_eq!(unique, expected);
    }

    /// Property: four hands of 13 partition the deck exactly.
    #[test]
    fn prop_deal_partitions_deck(seed in test_gens::seed()) {
        let hands = deal_hands_seeded(seed);
        let mut seen = HashSet::new();
        for hand in &hands {
            prop_assert_eq!(hand.len(), HAND_SIZE);
            for card in hand {
                prop_assert!(seen.insert(*card));
            }
        }
        prop_assert_eq!(seen.len(), 52);
    }

    /// Property: playing the first legal card every turn always reaches
    /// the end-of-deal condition within thirteen tricks, and the counters
    /// stay consistent along the way.
    #[test]
    fn prop_deal_always_terminates(
        seed in test_gens::seed(),
        declarer in test_gens::seat(),
        level in 1u8..=7u8,
        strain in test_gens::strain(),
    ) {
        let contract = Contract { declarer, level, strain };
        let mut hands = deal_hands_seeded(seed);
        let mut play = PlayState::start(contract);

        let mut guard = 0;
        while !play.is_deal_over() {
            guard += 1;
            prop_assert!(guard <= 70, "deal did not terminate");

            let Some(seat) = play.current_player() else {
                prop_assert!(play.clear_trick().is_some());
                continue;
            };
            let hand = &hands[seat as usize];
            let legal = play.legal_moves(hand);
            prop_assert!(!legal.is_empty());
            let index = hand.iter().position(|c| *c == legal[0]).unwrap();
            play.play_card(&mut hands, seat, index).unwrap();
        }

        let stats = play.stats();
        prop_assert!(stats.tricks_played() <= TOTAL_TRICKS);
        prop_assert!(is_deal_over(&contract, stats));
        prop_assert_eq!(stats.records.len(), stats.tricks_played() as usize * 4);
        let played: usize = play.played().iter().map(Vec::len).sum();
        prop_assert_eq!(played, stats.tricks_played() as usize * 4);
    }
}
