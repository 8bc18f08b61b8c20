use serde::{Deserialize, Serialize};

use crate::domain::rules::PLAYERS;

/// Position in the fixed turn order (0..=3). Seats 0 & 2 and 1 & 3 are partners.
pub type Seat = u8;

/// Room lifecycle phases.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Seats joining and readying up; a deal is prepared but not shown.
    Waiting,
    /// Auction in progress.
    Bidding,
    /// Tricks being played against the final contract.
    Playing,
    /// Deal over (result announced or aborted by a disconnect).
    Finished,
}

impl Phase {
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Waiting => "waiting",
            Phase::Bidding => "bidding",
            Phase::Playing => "playing",
            Phase::Finished => "finished",
        }
    }
}

/// Seat / turn math helpers (4 fixed seats: 0..=3).
///
/// Clockwise direction is positive (+1).
/// Counter-clockwise direction is negative (-1).
#[inline]
pub fn seat_offset(seat: Seat, delta: i8) -> Seat {
    let seat_i = seat as i16;
    let delta_i = delta as i16;
    ((seat_i + delta_i).rem_euclid(PLAYERS as i16)) as Seat
}

/// Returns the next seat clockwise (0 → 1 → 2 → 3 → 0).
#[inline]
pub fn next_seat(seat: Seat) -> Seat {
    seat_offset(seat, 1)
}

/// Returns the previous seat counter-clockwise (0 ← 1 ← 2 ← 3 ← 0).
#[inline]
pub fn prev_seat(seat: Seat) -> Seat {
    seat_offset(seat, -1)
}

#[inline]
pub fn partner_of(seat: Seat) -> Seat {
    seat_offset(seat, 2)
}

#[inline]
pub fn same_partnership(a: Seat, b: Seat) -> bool {
    a % 2 == b % 2
}
