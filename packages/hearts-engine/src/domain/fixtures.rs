use super::cards_types::Card;
use super::rules::PLAYERS;

/// Centralized helper for parsing hardcoded card tokens in fixtures and tests.
pub struct CardFixtures;

impl CardFixtures {
    /// Parse hardcoded card tokens into Card instances.
    ///
    /// Only for literal tokens known to be valid (e.g., ["AS", "2C", "TH"]).
    pub fn parse_hardcoded(tokens: &[&str]) -> Vec<Card> {
        tokens
            .iter()
            .map(|s| {
                #[allow(clippy::expect_used)]
                s.parse::<Card>().expect("hardcoded valid card token")
            })
            .collect()
    }

    /// Four hands from four token lists, indexed by seat.
    pub fn hands(tokens: [&[&str]; PLAYERS]) -> [Vec<Card>; PLAYERS] {
        tokens.map(Self::parse_hardcoded)
    }

    /// A full deal where seat `s` holds every card of suit `s` (C, D, H, S).
    ///
    /// Seat 0 owns the two of clubs and seat 2 owns all thirteen hearts.
    pub fn suit_per_seat() -> [Vec<Card>; PLAYERS] {
        use super::cards_types::{Rank, Suit};
        Suit::ALL.map(|suit| Rank::ALL.iter().map(|&rank| Card { suit, rank }).collect())
    }
}
