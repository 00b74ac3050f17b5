//! Random player: uniform choice among legal options.

use std::sync::Mutex;

use rand::prelude::*;

use super::trait_def::{AiError, AutoPlayer};
use crate::domain::player_view::PlayerView;
use crate::domain::rules::PASS_COUNT;
use crate::domain::Card;

/// Makes random legal moves.
///
/// Seeded instances replay identically, which the simulator relies on.
pub struct RandomPlayer {
    /// Trait methods take `&self`; the RNG needs mutable access.
    rng: Mutex<StdRng>,
}

impl RandomPlayer {
    pub const NAME: &'static str = "random";

    /// `Some(seed)` for reproducible play, `None` for OS entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }
}

impl AutoPlayer for RandomPlayer {
    fn choose_pass(&self, hand: &[Card]) -> Result<[Card; PASS_COUNT], AiError> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|e| AiError::Internal(format!("RNG lock poisoned: {e}")))?;

        let picked: Vec<Card> = hand.choose_multiple(&mut *rng, PASS_COUNT).copied().collect();
        picked.try_into().map_err(|v: Vec<Card>| {
            AiError::InvalidMove(format!(
                "Need {PASS_COUNT} cards to pass, only {} available",
                v.len()
            ))
        })
    }

    fn choose_play(&self, view: &PlayerView) -> Result<Card, AiError> {
        if view.legal_plays.is_empty() {
            return Err(AiError::InvalidMove("No legal plays available".into()));
        }

        let mut rng = self
            .rng
            .lock()
            .map_err(|e| AiError::Internal(format!("RNG lock poisoned: {e}")))?;

        view.legal_plays
            .choose(&mut *rng)
            .copied()
            .ok_or_else(|| AiError::Internal("Failed to choose random card".into()))
    }
}
