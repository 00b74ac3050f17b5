//! RNG seed derivation for deterministic dealing.
//!
//! A game carries one base seed; every round derives its own dealing seed
//! from it so that replaying a game reproduces every deal.

/// Derive a seed for dealing cards in a round.
///
/// # Arguments
///
/// * `game_seed` - Base RNG seed of the game
/// * `round_position` - 0-based round sequence number
///
/// # Returns
///
/// Derived seed that is unique per (game, round) combination.
pub fn derive_dealing_seed(game_seed: i64, round_position: u32) -> u64 {
    // Cast i64 to u64 for RNG (sign doesn't matter for seed)
    let base = game_seed as u64;

    base.wrapping_add((round_position as u64).wrapping_mul(1_000_000))
        .wrapping_add(2)
}

/// Derive a seed for an automated player's private RNG.
///
/// Kept separate from dealing so an auto player never sees the deal order.
pub fn derive_player_seed(game_seed: i64, seat: u8) -> u64 {
    let base = game_seed as u64;

    base.wrapping_add((seat as u64).wrapping_mul(100))
        .wrapping_add(1)
}
