use serde::{Deserialize, Serialize};

use crate::config::RulesConfig;
use crate::domain::cards_logic::{
    card_beats, card_points, hand_has_suit, hand_is_all_hearts, hand_is_all_points, is_point_card,
};
use crate::domain::rules::PLAYERS;
use crate::domain::state::{expected_actor, PlayerId};
use crate::domain::{Card, Suit};
use crate::errors::domain::{DomainError, InvalidPlayKind};

/// What scoring and leader selection need to know about a trick.
///
/// Implemented by [`Trick`]; tests substitute lightweight fakes.
pub trait TrickOutcome {
    /// Winner of a complete trick; `None` while the trick is open.
    fn trick_winner(&self) -> Option<PlayerId>;
    /// Penalty points captured by the trick.
    fn trick_score(&self) -> u8;
    fn is_over(&self) -> bool;

    fn is_not_over(&self) -> bool {
        !self.is_over()
    }
}

/// One card played into a trick.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Play {
    pub seat: PlayerId,
    pub card: Card,
}

/// Winner and points of a complete trick.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct TrickResolution {
    pub winner: PlayerId,
    pub score: u8,
}

/// An ordered sequence of up to four plays.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Trick {
    position: u8,
    leader: PlayerId,
    plays: Vec<Play>,
}

impl Trick {
    pub fn new(position: u8, leader: PlayerId) -> Self {
        Self {
            position,
            leader,
            plays: Vec::with_capacity(PLAYERS),
        }
    }

    pub fn position(&self) -> u8 {
        self.position
    }

    pub fn leader(&self) -> PlayerId {
        self.leader
    }

    pub fn plays(&self) -> &[Play] {
        &self.plays
    }

    /// Suit of the first play; fixed for the rest of the trick.
    pub fn lead_suit(&self) -> Option<Suit> {
        self.plays.first().map(|p| p.card.suit)
    }

    /// Seat expected to play next, or `None` once four cards are down.
    pub fn next_seat(&self) -> Option<PlayerId> {
        if self.is_complete() {
            return None;
        }
        Some(expected_actor(self.leader, self.plays.len() as u8))
    }

    pub fn is_complete(&self) -> bool {
        self.plays.len() == PLAYERS
    }

    pub fn contains(&self, card: Card) -> bool {
        self.plays.iter().any(|p| p.card == card)
    }

    /// Highest card of the led suit, once the trick is complete.
    pub fn winner(&self) -> Option<PlayerId> {
        if !self.is_complete() {
            return None;
        }
        let lead = self.lead_suit()?;
        let mut best = self.plays.first()?;
        for play in &self.plays[1..] {
            if card_beats(play.card, best.card, lead) {
                best = play;
            }
        }
        Some(best.seat)
    }

    /// Hearts count one point each; the queen of spades counts thirteen.
    pub fn score(&self) -> u8 {
        self.plays.iter().map(|p| card_points(p.card)).sum()
    }

    pub fn resolve(&self) -> Option<TrickResolution> {
        self.winner().map(|winner| TrickResolution {
            winner,
            score: self.score(),
        })
    }

    /// Append a play after checking turn order. Hand legality is the caller's job.
    pub(crate) fn push(&mut self, seat: PlayerId, card: Card) -> Result<(), DomainError> {
        let Some(expected) = self.next_seat() else {
            return Err(DomainError::invalid_play(
                InvalidPlayKind::TrickComplete,
                format!("Trick {} already has four plays", self.position),
            ));
        };
        if expected != seat {
            return Err(DomainError::invalid_play(
                InvalidPlayKind::OutOfTurn,
                format!("Seat {seat} played but seat {expected} is due"),
            ));
        }
        self.plays.push(Play { seat, card });
        Ok(())
    }
}

impl TrickOutcome for Trick {
    fn trick_winner(&self) -> Option<PlayerId> {
        self.winner()
    }

    fn trick_score(&self) -> u8 {
        self.score()
    }

    fn is_over(&self) -> bool {
        self.is_complete()
    }
}

/// Everything legality depends on besides the trick itself.
#[derive(Debug, Clone, Copy)]
pub struct PlayContext<'a> {
    pub hand: &'a [Card],
    pub hearts_broken: bool,
    pub rules: &'a RulesConfig,
}

/// Check a play against Hearts legality without mutating anything.
///
/// - the card must be in hand
/// - the opening lead of the round is the two of clubs
/// - hearts may not be led before they are broken, unless the hand is all hearts
/// - a player holding the led suit must follow it
/// - optionally, no points may be discarded on the first trick unless unavoidable
pub fn check_play(trick: &Trick, card: Card, ctx: &PlayContext<'_>) -> Result<(), DomainError> {
    if !ctx.hand.contains(&card) {
        return Err(DomainError::invalid_play(
            InvalidPlayKind::CardNotInHand,
            format!("{card} is not in hand"),
        ));
    }

    let first_trick = trick.position() == 0;
    let Some(lead) = trick.lead_suit() else {
        if first_trick && ctx.hand.contains(&Card::TWO_OF_CLUBS) && card != Card::TWO_OF_CLUBS {
            return Err(DomainError::invalid_play(
                InvalidPlayKind::MustLeadTwoOfClubs,
                "The first trick must be led with the two of clubs",
            ));
        }
        if card.is_heart() && !ctx.hearts_broken && !hand_is_all_hearts(ctx.hand) {
            return Err(DomainError::invalid_play(
                InvalidPlayKind::HeartsNotBroken,
                format!("Cannot lead {card} before hearts are broken"),
            ));
        }
        return Ok(());
    };

    if card.suit != lead {
        if hand_has_suit(ctx.hand, lead) {
            return Err(DomainError::invalid_play(
                InvalidPlayKind::MustFollowSuit,
                format!("Must follow {lead} instead of playing {card}"),
            ));
        }
        if first_trick
            && ctx.rules.no_points_on_first_trick
            && is_point_card(card)
            && !hand_is_all_points(ctx.hand)
        {
            return Err(DomainError::invalid_play(
                InvalidPlayKind::PointsOnFirstTrick,
                format!("Cannot discard {card} on the first trick"),
            ));
        }
    }
    Ok(())
}

/// Cards from the hand that `check_play` accepts, sorted.
pub fn legal_moves(trick: &Trick, ctx: &PlayContext<'_>) -> Vec<Card> {
    let mut v: Vec<Card> = ctx
        .hand
        .iter()
        .copied()
        .filter(|&c| check_play(trick, c, ctx).is_ok())
        .collect();
    v.sort();
    v
}

/// Whether playing `card` breaks hearts under `rules`.
pub fn breaks_hearts(card: Card, rules: &RulesConfig) -> bool {
    card.is_heart() || (rules.queen_breaks_hearts && card.is_queen_of_spades())
}
