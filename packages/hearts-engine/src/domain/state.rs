use crate::domain::rules::PLAYERS;
use crate::errors::domain::{DomainError, ValidationKind};

pub type PlayerId = u8; // 0..=3
pub type Seat = u8; // 0..=3, positional alias for PlayerId

/// Seat math helpers (4 fixed seats: 0..=3).
///
/// Clockwise direction is positive (+1), so "left" is +1,
/// "right" is -1 and "across" is +2.
#[inline]
pub fn seat_offset(seat: PlayerId, delta: i8) -> PlayerId {
    let seat_i = seat as i16;
    let delta_i = delta as i16;
    ((seat_i + delta_i).rem_euclid(PLAYERS as i16)) as PlayerId
}

/// Returns the next player clockwise (0 → 1 → 2 → 3 → 0).
#[inline]
pub fn next_player(p: PlayerId) -> PlayerId {
    seat_offset(p, 1)
}

/// Returns the previous player counter-clockwise (0 ← 1 ← 2 ← 3 ← 0).
#[inline]
pub fn prev_player(p: PlayerId) -> PlayerId {
    seat_offset(p, -1)
}

/// Returns the seat `n` steps clockwise from `start`.
#[inline]
pub fn nth_from(start: PlayerId, n: u8) -> PlayerId {
    seat_offset(start, (n % PLAYERS as u8) as i8)
}

/// Dealer for a 0-based round position, rotating clockwise from `starting_dealer`.
#[inline]
pub fn dealer_for_round(starting_dealer: PlayerId, round_position: u32) -> PlayerId {
    nth_from(starting_dealer, (round_position % PLAYERS as u32) as u8)
}

/// Expected actor seat during a trick.
///
/// `leader` opened the trick; `play_count` is how many cards
/// have already been played into it.
#[inline]
pub fn expected_actor(leader: PlayerId, play_count: u8) -> PlayerId {
    nth_from(leader, play_count)
}

pub fn require_seat(seat: PlayerId) -> Result<PlayerId, DomainError> {
    if (seat as usize) < PLAYERS {
        Ok(seat)
    } else {
        Err(DomainError::validation(
            ValidationKind::InvalidSeat,
            format!("Seat {seat} is outside 0..{PLAYERS}"),
        ))
    }
}
