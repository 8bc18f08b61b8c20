use crate::domain::bidding::Contract;
use crate::domain::dealing::Hands;
use crate::domain::tricks::{resolve_trick_winner, PlayState, TrickPlay};
use crate::domain::{Card, Strain, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

fn parse_cards(tokens: &[&str]) -> Vec<Card> {
    tokens
        .iter()
        .map(|t| t.parse::<Card>().expect("hardcoded valid card token"))
        .collect()
}

fn contract(declarer: u8, level: u8, strain: Strain) -> Contract {
    Contract {
        declarer,
        level,
        strain,
    }
}

fn plays(tokens: [&str; 4]) -> Vec<TrickPlay> {
    parse_cards(&tokens)
        .into_iter()
        .enumerate()
        .map(|(i, card)| TrickPlay {
            seat: i as u8,
            card,
        })
        .collect()
}

#[test]
fn trump_beats_lead_suit_ace() {
    let trick = plays(["2S", "KH", "AS", "3C"]);
    let winner = resolve_trick_winner(&trick, Strain::Hearts).unwrap();
    assert_eq!(winner.seat, 1);
    assert_eq!(winner.card, "KH".parse::<Card>().unwrap());
}

#[test]
fn no_trump_highest_lead_suit_wins() {
    let trick = plays(["2S", "KH", "AS", "3C"]);
    let winner = resolve_trick_winner(&trick, Strain::NoTrump).unwrap();
    assert_eq!(winner.seat, 2);
}

#[test]
fn off_suit_cards_never_win() {
    let trick = plays(["2D", "AS", "AH", "AC"]);
    let winner = resolve_trick_winner(&trick, Strain::NoTrump).unwrap();
    assert_eq!(winner.seat, 0);
    assert!(resolve_trick_winner(&[], Strain::NoTrump).is_none());
}

#[test]
fn opening_lead_is_counter_clockwise_of_declarer() {
    assert_eq!(PlayState::start(contract(0, 1, Strain::Clubs)).current_player(), Some(3));
    assert_eq!(PlayState::start(contract(1, 1, Strain::Clubs)).current_player(), Some(0));
    let play = PlayState::start(contract(3, 1, Strain::Clubs));
    assert_eq!(play.current_player(), Some(2));
    assert_eq!(play.trick_number(), 1);
    assert!(play.trick().is_empty());
}

#[test]
fn full_trick_resolves_records_and_waits_for_clear() {
    let mut hands: Hands = [
        parse_cards(&["2S", "5D"]),
        parse_cards(&["KH", "6D"]),
        parse_cards(&["AS", "7D"]),
        parse_cards(&["3C", "8D"]),
    ];
    let mut play = PlayState::start(contract(1, 1, Strain::Hearts));

    let r = play.play_card(&mut hands, 0, 0).unwrap();
    assert_eq!(r.next_player, Some(1));
    assert_eq!(play.trick().lead_suit(), Some(Suit::Spades));
    play.play_card(&mut hands, 1, 0).unwrap();
    play.play_card(&mut hands, 2, 0).unwrap();
    let r = play.play_card(&mut hands, 3, 0).unwrap();

    assert_eq!(r.next_player, None);
    let done = r.completed.expect("fourth card completes the trick");
    assert_eq!(done.trick_number, 1);
    assert_eq!(done.winner.seat, 1);
    assert!(done.declarer_side_won);
    assert!(!done.deal_over);
    assert_eq!(done.plays.len(), 4);

    let stats = play.stats();
    assert_eq!(stats.declarer_tricks, 1);
    assert_eq!(stats.defender_tricks, 0);
    assert_eq!(stats.records.len(), 4);
    let by_seat: Vec<bool> = stats.records.iter().map(|r| r.our_team_won).collect();
    assert_eq!(by_seat, vec![false, true, false, true]);

    assert!(hands.iter().all(|h| h.len() == 1));
    assert_eq!(play.played()[2], parse_cards(&["AS"]));

    let err = play.play_card(&mut hands, 1, 0).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::TrickResolving, _)
    ));

    assert_eq!(play.clear_trick(), Some(1));
    assert_eq!(play.trick_number(), 2);
    assert_eq!(play.current_player(), Some(1));
    assert!(play.trick().is_empty());
    // Nothing left to clear.
    assert_eq!(play.clear_trick(), None);
}

#[test]
fn must_follow_suit_when_holding_lead() {
    let mut hands: Hands = [
        parse_cards(&["2S"]),
        parse_cards(&["KH", "4S"]),
        parse_cards(&["AS"]),
        parse_cards(&["3C"]),
    ];
    let mut play = PlayState::start(contract(1, 1, Strain::Hearts));
    play.play_card(&mut hands, 0, 0).unwrap();

    let err = play.play_card(&mut hands, 1, 0).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::MustFollowSuit, _)
    ));
    assert_eq!(hands[1].len(), 2);
    assert_eq!(play.current_player(), Some(1));
    assert_eq!(play.legal_moves(&hands[1]), parse_cards(&["4S"]));

    assert!(play.play_card(&mut hands, 1, 1).is_ok());
}

#[test]
fn out_of_turn_and_bad_index_are_rejected() {
    let mut hands: Hands = [
        parse_cards(&["2S"]),
        parse_cards(&["KH"]),
        parse_cards(&["AS"]),
        parse_cards(&["3C"]),
    ];
    let mut play = PlayState::start(contract(1, 1, Strain::NoTrump));

    let err = play.play_card(&mut hands, 2, 0).unwrap_err();
    assert_eq!(
        err,
        DomainError::validation(ValidationKind::OutOfTurn, "It is not your turn to play")
    );

    let err = play.play_card(&mut hands, 0, 5).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::CardIndexOutOfRange, _)
    ));
    assert_eq!(hands[0].len(), 1);
    assert!(play.trick().is_empty());
}

#[test]
fn deal_can_end_before_thirteen_tricks() {
    // Seven-level contract: a single defensive trick defeats it.
    let mut hands: Hands = [
        parse_cards(&["AS", "KS"]),
        parse_cards(&["2S", "3D"]),
        parse_cards(&["3S", "4D"]),
        parse_cards(&["4S", "5D"]),
    ];
    let mut play = PlayState::start(contract(1, 7, Strain::NoTrump));
    for seat in 0..4 {
        play.play_card(&mut hands, seat, 0).unwrap();
    }
    assert!(play.is_deal_over());
    assert_eq!(play.stats().defender_tricks, 1);
    assert_eq!(play.clear_trick(), None);
    assert_eq!(play.current_player(), None);
}
