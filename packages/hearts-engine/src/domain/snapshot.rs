//! Serializable round state for the host's persistence layer.
//!
//! The engine never stores anything itself. Hosts save a [`RoundSnapshot`]
//! between calls and hand it back later; [`Round::from_snapshot`] re-checks
//! every structural invariant before the round is usable again.

use serde::{Deserialize, Serialize};

use crate::config::RulesConfig;
use crate::domain::invariants::verify_round;
use crate::domain::passing::PassDirection;
use crate::domain::round::{Round, RoundPhase};
use crate::domain::rules::PLAYERS;
use crate::domain::state::{require_seat, PlayerId};
use crate::domain::tricks::Trick;
use crate::domain::Card;
use crate::errors::domain::{DomainError, ValidationKind};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundSnapshot {
    pub position: u32,
    pub dealer: PlayerId,
    #[serde(default)]
    pub rules: RulesConfig,
    pub hands: [Vec<Card>; PLAYERS],
    pub dealt: bool,
    pub passed: bool,
    pub hearts_broken: bool,
    pub tricks: Vec<Trick>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub round_scores: Option<[u8; PLAYERS]>,
    #[serde(default)]
    pub totals_applied: bool,
    /// Informational; recomputed on restore.
    pub phase: RoundPhase,
    /// Informational; recomputed on restore.
    pub pass_direction: PassDirection,
}

impl RoundSnapshot {
    pub fn to_json(&self) -> Result<String, DomainError> {
        serde_json::to_string(self)
            .map_err(|e| DomainError::validation(ValidationKind::InvalidSnapshot, e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, DomainError> {
        serde_json::from_str(json)
            .map_err(|e| DomainError::validation(ValidationKind::InvalidSnapshot, e.to_string()))
    }
}

impl Round {
    pub fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot {
            position: self.position,
            dealer: self.dealer,
            rules: self.rules,
            hands: self.hands.clone(),
            dealt: self.dealt,
            passed: self.passed,
            hearts_broken: self.hearts_broken,
            tricks: self.tricks.clone(),
            round_scores: self.round_scores,
            totals_applied: self.totals_applied,
            phase: self.phase(),
            pass_direction: self.pass_direction(),
        }
    }

    /// Rebuild a round from persisted state, rejecting anything inconsistent.
    pub fn from_snapshot(snapshot: RoundSnapshot) -> Result<Self, DomainError> {
        for trick in &snapshot.tricks {
            require_seat(trick.leader())?;
        }
        let mut round = Round::new(snapshot.position, snapshot.dealer, snapshot.rules)?;
        round.hands = snapshot.hands;
        round.dealt = snapshot.dealt;
        round.passed = snapshot.passed;
        round.hearts_broken = snapshot.hearts_broken;
        round.tricks = snapshot.tricks;
        round.round_scores = snapshot.round_scores;
        round.totals_applied = snapshot.totals_applied;
        verify_round(&round)?;
        Ok(round)
    }
}
