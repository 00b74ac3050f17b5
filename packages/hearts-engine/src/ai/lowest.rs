//! Deterministic player that always dumps its lowest cards.

use super::trait_def::{AiError, AutoPlayer};
use crate::domain::player_view::PlayerView;
use crate::domain::rules::PASS_COUNT;
use crate::domain::Card;

/// Passes its three lowest cards and plays its lowest legal card.
///
/// "Lowest" is rank first, then suit, so it sheds twos before aces
/// regardless of suit.
#[derive(Debug, Default, Clone, Copy)]
pub struct LowestFirst;

impl LowestFirst {
    pub const NAME: &'static str = "lowest";
}

fn by_rank(c: &Card) -> (crate::domain::Rank, crate::domain::Suit) {
    (c.rank, c.suit)
}

impl AutoPlayer for LowestFirst {
    fn choose_pass(&self, hand: &[Card]) -> Result<[Card; PASS_COUNT], AiError> {
        let mut sorted = hand.to_vec();
        sorted.sort_by_key(by_rank);
        match sorted.as_slice() {
            [a, b, c, ..] => Ok([*a, *b, *c]),
            _ => Err(AiError::InvalidMove(format!(
                "Need {PASS_COUNT} cards to pass, hand has {}",
                hand.len()
            ))),
        }
    }

    fn choose_play(&self, view: &PlayerView) -> Result<Card, AiError> {
        view.legal_plays
            .iter()
            .copied()
            .min_by_key(by_rank)
            .ok_or_else(|| AiError::InvalidMove("No legal plays available".into()))
    }
}
