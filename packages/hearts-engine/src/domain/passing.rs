//! Passing phase: direction schedule and the atomic three-card exchange.

use serde::{Deserialize, Serialize};

use crate::domain::rules::{PASS_COUNT, PLAYERS};
use crate::domain::state::{seat_offset, PlayerId};
use crate::domain::Card;
use crate::errors::domain::{DomainError, ValidationKind};

/// Cards chosen by each seat, indexed by the passing seat.
pub type PassSelections = [[Card; PASS_COUNT]; PLAYERS];

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PassDirection {
    Left,
    Right,
    Across,
    None,
}

impl PassDirection {
    /// Seat offset of the receiver relative to the passer.
    ///
    /// left = +1 (next seat clockwise), right = -1, across = +2, none = 0.
    pub fn offset(self) -> i8 {
        match self {
            PassDirection::Left => 1,
            PassDirection::Right => -1,
            PassDirection::Across => 2,
            PassDirection::None => 0,
        }
    }

    /// Seat that receives the cards passed by `from`.
    pub fn target(self, from: PlayerId) -> PlayerId {
        seat_offset(from, self.offset())
    }

    pub fn moves_cards(self) -> bool {
        self != PassDirection::None
    }
}

/// Pass direction for a 0-based round position; the schedule repeats every 4 rounds.
pub fn pass_direction(round_position: u32) -> PassDirection {
    match round_position % 4 {
        0 => PassDirection::Left,
        1 => PassDirection::Right,
        2 => PassDirection::Across,
        _ => PassDirection::None,
    }
}

/// Check that `selection` is three distinct cards held in `hand`.
pub fn validate_selection(
    seat: PlayerId,
    hand: &[Card],
    selection: &[Card; PASS_COUNT],
) -> Result<(), DomainError> {
    for (i, card) in selection.iter().enumerate() {
        if selection[..i].contains(card) {
            return Err(DomainError::validation(
                ValidationKind::InvalidPassSelection,
                format!("Seat {seat} selected {card} twice"),
            ));
        }
        if !hand.contains(card) {
            return Err(DomainError::validation(
                ValidationKind::InvalidPassSelection,
                format!("Seat {seat} does not hold {card}"),
            ));
        }
    }
    Ok(())
}

/// Move three cards from every hand to the hand at `direction`'s offset.
///
/// All selections are validated before any hand changes, so either all
/// four transfers happen or none do. `PassDirection::None` is a no-op.
pub fn pass_cards(
    hands: &mut [Vec<Card>; PLAYERS],
    direction: PassDirection,
    selections: &PassSelections,
) -> Result<(), DomainError> {
    if !direction.moves_cards() {
        return Ok(());
    }

    for (seat, (hand, selection)) in hands.iter().zip(selections.iter()).enumerate() {
        validate_selection(seat as PlayerId, hand, selection)?;
    }

    for (seat, selection) in selections.iter().enumerate() {
        hands[seat].retain(|c| !selection.contains(c));
    }
    for (seat, selection) in selections.iter().enumerate() {
        let to = direction.target(seat as PlayerId) as usize;
        hands[to].extend_from_slice(selection);
    }
    for hand in hands.iter_mut() {
        hand.sort();
    }
    Ok(())
}
