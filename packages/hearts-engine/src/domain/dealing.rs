//! Deterministic card dealing logic.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::domain::rules::{DECK_SIZE, HAND_SIZE, PLAYERS};
use crate::domain::{Card, Rank, Suit};

/// Generate a full 52-card deck in standard order (C, D, H, S; Two..Ace).
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            deck.push(Card { suit, rank });
        }
    }
    deck
}

/// Shuffle a full deck with the supplied RNG and deal 13 cards to each seat.
///
/// Hands are sorted for convenience. No card is left over.
pub fn deal_hands_with<R: Rng + ?Sized>(rng: &mut R) -> [Vec<Card>; PLAYERS] {
    let mut deck = full_deck();
    deck.shuffle(rng);

    let mut hands: [Vec<Card>; PLAYERS] = Default::default();
    for (hand_slot, chunk) in hands.iter_mut().zip(deck.chunks(HAND_SIZE)) {
        let mut hand = chunk.to_vec();
        hand.sort();
        *hand_slot = hand;
    }
    hands
}

/// Deal hands deterministically from a seed.
///
/// The same seed always yields the same four hands.
pub fn deal_hands(seed: u64) -> [Vec<Card>; PLAYERS] {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    deal_hands_with(&mut rng)
}
