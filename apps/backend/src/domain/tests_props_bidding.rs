/// Property-based tests for auction ordering and termination
use proptest::prelude::*;

use crate::domain::bidding::{is_legal_bid, BiddingState, CallOutcome};
use crate::domain::{test_gens, test_prelude};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: bid ordering is a strict total order on (level, strain rank).
    #[test]
    fn prop_bid_order_is_strict(a in test_gens::bid(), b in test_gens::bid()) {
        let key = |x: &crate::domain::Bid| (x.level, x.strain.rank());
        prop_assert_eq!(a.outranks(&b), key(&a) > key(&b));
        prop_assert!(!(a.outranks(&b) && b.outranks(&a)));
        if a != b {
            prop_assert!(a.outranks(&b) || b.outranks(&a));
        }
        prop_assert!(!a.outranks(&a));
    }

    /// Property: the auction accepts a bid iff it outranks the last accepted bid,
    /// and a rejected bid leaves the turn where it was.
    #[test]
    fn prop_auction_accepts_only_higher_bids(bids in prop::collection::vec(test_gens::bid(), 1..20)) {
        let mut auction = BiddingState::new(0);
        for bid in bids {
            let seat = auction.current_bidder().expect("auction of bids only never closes");
            let last = auction.last_bid().map(|(_, b)| b);
            let expected = is_legal_bid(&bid, last.as_ref());
            let result = auction.place_bid(seat, bid);
            prop_assert_eq!(result.is_ok(), expected);
            if expected {
                prop_assert_eq!(auction.last_bid(), Some((seat, bid)));
                prop_assert_eq!(auction.current_bidder(), Some((seat + 1) % 4));
            } else {
                prop_assert_eq!(auction.current_bidder(), Some(seat));
            }
        }
    }

    /// Property: after any opening bid, exactly three passes seal it for that bidder.
    #[test]
    fn prop_three_passes_seal_last_bid(opening in test_gens::seat(), bid in test_gens::bid()) {
        let mut auction = BiddingState::new(opening);
        auction.place_bid(opening, bid).unwrap();
        let mut outcome = None;
        for i in 1..=3u8 {
            outcome = Some(auction.pass((opening + i) % 4).unwrap());
        }
        match outcome {
            Some(CallOutcome::Sealed(contract)) => {
                prop_assert_eq!(contract.declarer, opening);
                prop_assert_eq!(contract.level, bid.level);
                prop_assert_eq!(contract.strain, bid.strain);
            }
            other => prop_assert!(false, "expected sealed, got {:?}", other),
        }
    }
}
