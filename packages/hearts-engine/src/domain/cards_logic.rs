//! Card game logic: checking suits in hands, comparing card strength, card points

use super::cards_types::{Card, Suit};
use super::rules::QUEEN_OF_SPADES_POINTS;

pub fn hand_has_suit(hand: &[Card], suit: Suit) -> bool {
    hand.iter().any(|c| c.suit == suit)
}

/// True when every card in the hand is a heart (an empty hand is not).
pub fn hand_is_all_hearts(hand: &[Card]) -> bool {
    !hand.is_empty() && hand.iter().all(|c| c.is_heart())
}

/// True when every card in the hand carries points.
pub fn hand_is_all_points(hand: &[Card]) -> bool {
    !hand.is_empty() && hand.iter().all(|c| is_point_card(*c))
}

/// Whether `a` beats `b` in a trick led with `lead`.
///
/// Hearts has no trump: only cards of the led suit can win, and among
/// them the higher rank wins.
pub fn card_beats(a: Card, b: Card, lead: Suit) -> bool {
    let a_follows = a.suit == lead;
    let b_follows = b.suit == lead;
    match (a_follows, b_follows) {
        (true, false) => true,
        (false, true) => false,
        (true, true) => a.rank > b.rank,
        (false, false) => false,
    }
}

/// Penalty points carried by a single card.
pub fn card_points(card: Card) -> u8 {
    if card.is_heart() {
        1
    } else if card.is_queen_of_spades() {
        QUEEN_OF_SPADES_POINTS
    } else {
        0
    }
}

pub fn is_point_card(card: Card) -> bool {
    card_points(card) > 0
}
