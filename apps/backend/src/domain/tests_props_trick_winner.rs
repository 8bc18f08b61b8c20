/// Property-based tests for trick winner resolution
use proptest::prelude::*;

use crate::domain::domain_prop_helpers::oracle_trick_winner;
use crate::domain::tricks::{resolve_trick_winner, TrickPlay};
use crate::domain::{test_gens, test_prelude};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: the engine agrees with the longhand oracle for every strain.
    #[test]
    fn prop_trick_winner_matches_oracle(trick in test_gens::complete_trick()) {
        let (_leader, plays, strain) = trick;
        let trick_plays: Vec<TrickPlay> = plays
            .iter()
            .map(|&(seat, card)| TrickPlay { seat, card })
            .collect();

        let winner = resolve_trick_winner(&trick_plays, strain).expect("complete trick has a winner");
        let oracle = plays[oracle_trick_winner(&plays, strain)];
        prop_assert_eq!((winner.seat, winner.card), oracle,
            "strain={:?} plays={:?}", strain, plays);
    }

    /// Property: with a trump strain, a trick containing trump is won by trump.
    #[test]
    fn prop_trump_present_wins(
        trick in test_gens::complete_trick(),
        strain in test_gens::trump_strain(),
    ) {
        let (_leader, plays, _) = trick;
        let trump = strain.trump_suit().unwrap();
        let trick_plays: Vec<TrickPlay> = plays
            .iter()
            .map(|&(seat, card)| TrickPlay { seat, card })
            .collect();
        let winner = resolve_trick_winner(&trick_plays, strain).unwrap();

        if plays.iter().any(|(_, c)| c.suit == trump) {
            prop_assert_eq!(winner.card.suit, trump);
        } else {
            prop_assert_eq!(winner.card.suit, plays[0].1.suit);
        }
    }
}
