/// Property-based tests for follow-suit legality rules
use std::collections::HashSet;

use proptest::prelude::*;

use crate::domain::domain_prop_helpers::legal_moves_helper;
use crate::domain::{is_legal_play, test_gens, test_prelude, Card};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: holding the lead suit, only lead-suit cards are legal.
    #[test]
    fn prop_follow_suit_when_able(
        lead_suit in test_gens::suit(),
        lead_rank in test_gens::rank(),
        other_cards in test_gens::unique_cards_up_to(12),
    ) {
        let mut hand = vec![Card { suit: lead_suit, rank: lead_rank }];
        for card in other_cards {
            if !(card.suit == lead_suit && card.rank == lead_rank) {
                hand.push(card);
            }
        }

        for card in &hand {
            let legal = is_legal_play(*card, Some(lead_suit), &hand);
            prop_assert_eq!(legal, card.suit == lead_suit,
                "card {:?} with lead {:?}", card, lead_suit);
        }

        let legal: HashSet<Card> = legal_moves_helper(&hand, Some(lead_suit)).into_iter().collect();
        let expected: HashSet<Card> = hand.iter().copied().filter(|c| c.suit == lead_suit).collect();
        prop_assert_eq!(legal, expected);
    }

    /// Property: void in the lead suit, every card is legal.
    #[test]
    fn prop_any_card_when_void(
        lead_suit in test_gens::suit(),
        hand in test_gens::suit().prop_flat_map(test_gens::hand_without_suit),
    ) {
        let hand: Vec<Card> = hand.into_iter().filter(|c| c.suit != lead_suit).collect();
        for card in &hand {
            prop_assert!(is_legal_play(*card, Some(lead_suit), &hand));
        }
    }

    /// Property: the leader may play anything.
    #[test]
    fn prop_leader_unrestricted(hand in test_gens::hand()) {
        for card in &hand {
            prop_assert!(is_legal_play(*card, None, &hand));
        }
    }
}
