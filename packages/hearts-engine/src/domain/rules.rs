pub const PLAYERS: usize = 4;
pub const DECK_SIZE: usize = 52;
pub const HAND_SIZE: usize = 13;
pub const TRICKS_PER_ROUND: usize = 13;
pub const PASS_COUNT: usize = 3;

pub const QUEEN_OF_SPADES_POINTS: u8 = 13;
/// Points available in one round: 13 hearts plus the queen of spades.
pub const ROUND_POINTS: u8 = 26;
/// A player holding every point of the round has shot the moon.
pub const MOON_SHOT_POINTS: u8 = ROUND_POINTS;

/// Cards each player should hold after `tricks_played` completed tricks.
pub fn hand_size_after(tricks_played: usize) -> usize {
    HAND_SIZE.saturating_sub(tricks_played)
}
