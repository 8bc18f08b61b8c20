use crate::domain::bidding::Contract;
use crate::domain::scoring::{contract_outcome, is_deal_over};
use crate::domain::tricks::TrickStats;
use crate::domain::Strain;

fn three_nt(declarer: u8) -> Contract {
    Contract {
        declarer,
        level: 3,
        strain: Strain::NoTrump,
    }
}

fn stats(declarer_tricks: u8, defender_tricks: u8) -> TrickStats {
    TrickStats {
        declarer_tricks,
        defender_tricks,
        records: Vec::new(),
    }
}

#[test]
fn three_nt_thresholds() {
    let c = three_nt(0);
    assert_eq!(c.declarer_required(), 9);
    assert_eq!(c.defender_required(), 5);
}

#[test]
fn declarer_reaching_target_ends_deal_early_and_makes() {
    let c = three_nt(0);
    assert!(!is_deal_over(&c, &stats(8, 2)));
    assert!(is_deal_over(&c, &stats(9, 2)));

    let outcome = contract_outcome(&c, &stats(9, 2));
    assert!(outcome.made);
    assert_eq!(outcome.required, 9);
    assert_eq!(outcome.actual, 9);
    assert_eq!(outcome.undertricks, 0);
    assert_eq!(outcome.tricks_played, 11);
}

#[test]
fn defenders_reaching_target_defeat_contract() {
    let c = three_nt(1);
    assert!(!is_deal_over(&c, &stats(4, 4)));
    assert!(is_deal_over(&c, &stats(4, 5)));

    let outcome = contract_outcome(&c, &stats(4, 5));
    assert!(!outcome.made);
    assert_eq!(outcome.undertricks, 5);
    assert_eq!(outcome.defender_required, 5);
    assert_eq!(outcome.defender_tricks, 5);
}

#[test]
fn teams_split_by_fixed_partnership() {
    let outcome = contract_outcome(&three_nt(1), &stats(9, 0));
    assert_eq!(outcome.declarer_seats, [1, 3]);
    assert_eq!(outcome.defender_seats, [2, 0]);

    let outcome = contract_outcome(&three_nt(2), &stats(9, 0));
    assert_eq!(outcome.declarer_seats, [2, 0]);
    assert_eq!(outcome.defender_seats, [3, 1]);
}

#[test]
fn one_level_needs_seven_and_six_stop_it() {
    let c = Contract {
        declarer: 0,
        level: 1,
        strain: Strain::Clubs,
    };
    assert!(is_deal_over(&c, &stats(7, 0)));
    assert!(is_deal_over(&c, &stats(0, 7)));
    assert!(!is_deal_over(&c, &stats(6, 6)));
    let outcome = contract_outcome(&c, &stats(6, 7));
    assert!(!outcome.made);
    assert_eq!(outcome.undertricks, 1);
}
