use std::ops::RangeInclusive;

pub const PLAYERS: usize = 4;
pub const HAND_SIZE: usize = 13;
pub const TOTAL_TRICKS: u8 = 13;

/// Tricks the declaring side takes "for free" before the contract level counts.
pub const BOOK: u8 = 6;

pub fn valid_level_range() -> RangeInclusive<u8> {
    1..=7
}

/// Tricks the declaring side needs to make a contract at `level`.
pub fn declarer_required(level: u8) -> u8 {
    BOOK + level
}

/// Tricks the defending side needs to defeat a contract at `level`.
pub fn defender_required(level: u8) -> u8 {
    TOTAL_TRICKS - declarer_required(level) + 1
}
