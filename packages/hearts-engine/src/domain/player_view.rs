//! What a single seat is allowed to see when it has to act.

use crate::domain::passing::PassDirection;
use crate::domain::round::Round;
use crate::domain::state::PlayerId;
use crate::domain::tricks::Play;
use crate::domain::{Card, Suit};
use crate::errors::domain::DomainError;

/// Visible state for one seat: its own hand plus public round facts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerView {
    pub seat: PlayerId,
    pub round_position: u32,
    pub pass_direction: PassDirection,
    pub hand: Vec<Card>,
    pub hearts_broken: bool,
    /// Position of the open trick, if any.
    pub trick_position: Option<u8>,
    /// Cards already played into the open trick.
    pub current_trick: Vec<Play>,
    /// Seat whose turn it is, if a trick is open.
    pub turn: Option<PlayerId>,
    /// Legal cards for this seat right now (empty if not its turn).
    pub legal_plays: Vec<Card>,
}

impl PlayerView {
    pub fn lead_suit(&self) -> Option<Suit> {
        self.current_trick.first().map(|p| p.card.suit)
    }

    pub fn is_my_turn(&self) -> bool {
        self.turn == Some(self.seat)
    }

    pub fn is_leading(&self) -> bool {
        self.is_my_turn() && self.current_trick.is_empty()
    }
}

impl Round {
    pub fn player_view(&self, seat: PlayerId) -> Result<PlayerView, DomainError> {
        let hand = self.hand(seat)?.to_vec();
        let open = self.last_trick().filter(|t| !t.is_complete());
        Ok(PlayerView {
            seat,
            round_position: self.position(),
            pass_direction: self.pass_direction(),
            hand,
            hearts_broken: self.hearts_broken(),
            trick_position: open.map(|t| t.position()),
            current_trick: open.map(|t| t.plays().to_vec()).unwrap_or_default(),
            turn: self.turn(),
            legal_plays: self.legal_moves(seat),
        })
    }
}
