//! Card game logic: checking suits in hands, follow-suit legality, comparing card strength

use super::cards_types::{Card, Strain, Suit};

pub fn hand_has_suit(hand: &[Card], suit: Suit) -> bool {
    hand.iter().any(|c| c.suit == suit)
}

/// Follow-suit rule: a player may only discard or trump when void in the lead suit.
///
/// `lead` is `None` when the player is leading the trick, in which case any card is legal.
pub fn is_legal_play(card: Card, lead: Option<Suit>, hand: &[Card]) -> bool {
    match lead {
        None => true,
        Some(lead) if card.suit == lead => true,
        Some(lead) => !hand_has_suit(hand, lead),
    }
}

/// Whether `a` beats `b` in a trick led with `lead` under `strain`.
///
/// Trumps beat everything else; otherwise only lead-suit cards can win.
/// Two cards that can't win (off-suit, non-trump) never beat one another.
pub fn card_beats(a: Card, b: Card, lead: Suit, strain: Strain) -> bool {
    if let Some(trump) = strain.trump_suit() {
        let a_trump = a.suit == trump;
        let b_trump = b.suit == trump;
        if a_trump && !b_trump {
            return true;
        }
        if b_trump && !a_trump {
            return false;
        }
        if a_trump && b_trump {
            return a.rank > b.rank;
        }
    }
    let a_follows = a.suit == lead;
    let b_follows = b.suit == lead;
    if a_follows && !b_follows {
        return true;
    }
    if b_follows && !a_follows {
        return false;
    }
    if a_follows && b_follows {
        return a.rank > b.rank;
    }
    false
}
