//! One hand of Hearts: dealing, passing, thirteen tricks and scoring.
//!
//! [`Round`] owns the four hands and the ordered trick list. Every mutating
//! operation validates first and mutates second, so a rejected call leaves
//! the round untouched.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::RulesConfig;
use crate::domain::dealing::{deal_hands, deal_hands_with};
use crate::domain::passing::{self, pass_direction, PassDirection, PassSelections};
use crate::domain::rules::{PLAYERS, TRICKS_PER_ROUND};
use crate::domain::scoring::{self, RoundResult, ScoreBoard};
use crate::domain::state::{require_seat, PlayerId};
use crate::domain::tricks::{
    breaks_hearts, check_play, legal_moves, PlayContext, Trick, TrickOutcome, TrickResolution,
};
use crate::domain::Card;
use crate::errors::domain::{DomainError, NotReadyKind};

/// Where a round is in its lifecycle.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundPhase {
    /// Hands not yet dealt.
    Initialized,
    /// Hands dealt and passing pending.
    Passing,
    /// Hands dealt and passing settled (done, or nothing to pass); no trick
    /// created yet. A round still waiting on its pass reports `Passing`.
    ReadyToLead,
    /// Tricks being created and played.
    InPlay,
    /// Thirteen tricks exist and the last one is over.
    Complete,
}

/// What happened as a result of a single play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayCardResult {
    pub trick_position: u8,
    /// Winner and points, once the fourth card is down.
    pub resolution: Option<TrickResolution>,
    /// This play flipped `hearts_broken` from false to true.
    pub broke_hearts: bool,
    pub round_over: bool,
}

/// Trick with the highest position that is strictly before the most recent one.
///
/// With N tricks this is trick N-2; `None` with fewer than two tricks.
pub fn previous_of<T>(tricks: &[T]) -> Option<&T> {
    tricks.len().checked_sub(2).and_then(|idx| tricks.get(idx))
}

/// Leader of the next trick given the tricks so far.
///
/// The first trick is led by the two of clubs owner; later tricks by the
/// winner of the most recent trick, which must be over.
pub fn next_leader<T: TrickOutcome>(
    tricks: &[T],
    two_of_clubs_owner: impl FnOnce() -> Result<PlayerId, DomainError>,
) -> Result<PlayerId, DomainError> {
    match tricks.last() {
        None => two_of_clubs_owner(),
        Some(last) => last.trick_winner().ok_or_else(|| {
            DomainError::not_ready(
                NotReadyKind::TrickInProgress,
                format!("Trick {} is still open", tricks.len() - 1),
            )
        }),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Round {
    pub(crate) position: u32,
    pub(crate) dealer: PlayerId,
    pub(crate) rules: RulesConfig,
    pub(crate) hands: [Vec<Card>; PLAYERS],
    pub(crate) dealt: bool,
    pub(crate) passed: bool,
    pub(crate) hearts_broken: bool,
    pub(crate) tricks: Vec<Trick>,
    pub(crate) round_scores: Option<[u8; PLAYERS]>,
    pub(crate) totals_applied: bool,
}

impl Round {
    /// A fresh, undealt round at `position` (0-based sequence within the game).
    pub fn new(position: u32, dealer: PlayerId, rules: RulesConfig) -> Result<Self, DomainError> {
        Ok(Self {
            position,
            dealer: require_seat(dealer)?,
            rules,
            hands: Default::default(),
            dealt: false,
            passed: false,
            hearts_broken: false,
            tricks: Vec::with_capacity(TRICKS_PER_ROUND),
            round_scores: None,
            totals_applied: false,
        })
    }

    /// A round whose hands were dealt elsewhere (host replay, tests).
    ///
    /// The hands must form a full deck, 13 cards each.
    pub fn with_hands(
        position: u32,
        dealer: PlayerId,
        hands: [Vec<Card>; PLAYERS],
        rules: RulesConfig,
    ) -> Result<Self, DomainError> {
        let mut round = Self::new(position, dealer, rules)?;
        round.install_hands(hands)?;
        Ok(round)
    }

    // ---- accessors -------------------------------------------------------

    pub fn position(&self) -> u32 {
        self.position
    }

    pub fn dealer(&self) -> PlayerId {
        self.dealer
    }

    pub fn rules(&self) -> &RulesConfig {
        &self.rules
    }

    pub fn hands(&self) -> &[Vec<Card>; PLAYERS] {
        &self.hands
    }

    pub fn hand(&self, seat: PlayerId) -> Result<&[Card], DomainError> {
        Ok(&self.hands[require_seat(seat)? as usize])
    }

    pub fn hearts_broken(&self) -> bool {
        self.hearts_broken
    }

    pub fn tricks(&self) -> &[Trick] {
        &self.tricks
    }

    /// Number of tricks created so far (the position of the next trick).
    pub fn tricks_played(&self) -> usize {
        self.tricks.len()
    }

    pub fn last_trick(&self) -> Option<&Trick> {
        self.tricks.last()
    }

    pub fn previous_trick(&self) -> Option<&Trick> {
        previous_of(&self.tricks)
    }

    pub fn round_scores(&self) -> Option<[u8; PLAYERS]> {
        self.round_scores
    }

    pub fn pass_direction(&self) -> PassDirection {
        pass_direction(self.position)
    }

    pub fn phase(&self) -> RoundPhase {
        if !self.dealt {
            RoundPhase::Initialized
        } else if self.is_over() {
            RoundPhase::Complete
        } else if self.passing_time() {
            RoundPhase::Passing
        } else if self.tricks.is_empty() {
            RoundPhase::ReadyToLead
        } else {
            RoundPhase::InPlay
        }
    }

    // ---- state predicates -----------------------------------------------

    /// Passing is open: hands dealt, nothing passed yet, no trick created,
    /// and this round passes in some direction.
    pub fn passing_time(&self) -> bool {
        self.dealt && !self.passed && self.tricks.is_empty() && self.pass_direction().moves_cards()
    }

    pub fn has_an_active_trick(&self) -> bool {
        self.tricks.last().is_some_and(|t| t.is_not_over())
    }

    pub fn is_ready_for_new_trick(&self) -> bool {
        if !self.dealt || self.passing_time() {
            return false;
        }
        match self.tricks.last() {
            None => true,
            Some(last) => last.is_over() && self.tricks.len() < TRICKS_PER_ROUND,
        }
    }

    pub fn is_over(&self) -> bool {
        self.tricks.len() == TRICKS_PER_ROUND && self.tricks.last().is_some_and(|t| t.is_over())
    }

    /// Seat expected to play into the active trick.
    pub fn turn(&self) -> Option<PlayerId> {
        self.tricks.last().and_then(|t| t.next_seat())
    }

    // ---- dealing & passing ----------------------------------------------

    /// Shuffle with a seeded RNG and deal 13 cards to every seat.
    pub fn deal(&mut self, seed: u64) -> Result<&[Vec<Card>; PLAYERS], DomainError> {
        self.ensure_undealt()?;
        self.install_hands(deal_hands(seed))?;
        Ok(&self.hands)
    }

    /// Deal using a caller-supplied RNG.
    pub fn deal_with<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<&[Vec<Card>; PLAYERS], DomainError> {
        self.ensure_undealt()?;
        self.install_hands(deal_hands_with(rng))?;
        Ok(&self.hands)
    }

    fn ensure_undealt(&self) -> Result<(), DomainError> {
        if self.dealt {
            return Err(DomainError::not_ready(
                NotReadyKind::AlreadyDealt,
                format!("Round {} was already dealt", self.position),
            ));
        }
        Ok(())
    }

    fn install_hands(&mut self, hands: [Vec<Card>; PLAYERS]) -> Result<(), DomainError> {
        let mut hands = hands;
        for hand in hands.iter_mut() {
            hand.sort();
        }
        crate::domain::invariants::verify_fresh_deal(&hands)?;
        self.hands = hands;
        self.dealt = true;
        info!(
            round = self.position,
            dealer = self.dealer,
            direction = ?self.pass_direction(),
            "Round dealt"
        );
        Ok(())
    }

    /// Exchange three cards per seat in this round's direction.
    ///
    /// Allowed exactly once, before the first trick, and only when the
    /// round passes at all. On a `none` round this is
    /// `NotReady(PassingClosed)`, not a silent no-op; use
    /// [`passing::pass_cards`] directly for the no-op form.
    pub fn pass_cards(&mut self, selections: &PassSelections) -> Result<(), DomainError> {
        if !self.dealt {
            return Err(DomainError::not_ready(
                NotReadyKind::NotDealt,
                "Cannot pass before dealing",
            ));
        }
        if !self.passing_time() {
            return Err(DomainError::not_ready(
                NotReadyKind::PassingClosed,
                format!(
                    "Passing is closed for round {} (direction {:?})",
                    self.position,
                    self.pass_direction()
                ),
            ));
        }

        let direction = self.pass_direction();
        let mut hands = self.hands.clone();
        passing::pass_cards(&mut hands, direction, selections)?;
        crate::domain::invariants::verify_fresh_deal(&hands)?;

        self.hands = hands;
        self.passed = true;
        info!(round = self.position, direction = ?direction, "Cards passed");
        Ok(())
    }

    /// Seat currently holding the two of clubs.
    pub fn two_of_clubs_owner(&self) -> Result<PlayerId, DomainError> {
        self.hands
            .iter()
            .position(|h| h.contains(&Card::TWO_OF_CLUBS))
            .map(|seat| seat as PlayerId)
            .ok_or_else(|| DomainError::invariant("No hand holds the two of clubs"))
    }

    // ---- tricks ---------------------------------------------------------

    pub fn get_new_leader(&self) -> Result<PlayerId, DomainError> {
        next_leader(&self.tricks, || self.two_of_clubs_owner())
    }

    /// Open the next trick at `position = tricks_played`.
    pub fn create_trick(&mut self) -> Result<&Trick, DomainError> {
        if !self.is_ready_for_new_trick() {
            return Err(self.not_ready_for_trick());
        }
        let leader = self.get_new_leader()?;
        let position = self.tricks.len() as u8;
        self.tricks.push(Trick::new(position, leader));
        debug!(round = self.position, position, leader, "Trick created");
        self.tricks
            .last()
            .ok_or_else(|| DomainError::invariant("Trick vanished after creation"))
    }

    fn not_ready_for_trick(&self) -> DomainError {
        let (kind, detail) = if !self.dealt {
            (NotReadyKind::NotDealt, "Hands not dealt".to_string())
        } else if self.passing_time() {
            (
                NotReadyKind::PassingPending,
                format!("Pass {:?} before the first trick", self.pass_direction()),
            )
        } else if self.has_an_active_trick() {
            (
                NotReadyKind::TrickInProgress,
                format!("Trick {} is still open", self.tricks.len() - 1),
            )
        } else {
            (
                NotReadyKind::RoundComplete,
                format!("Round {} already has 13 tricks", self.position),
            )
        };
        DomainError::not_ready(kind, detail)
    }

    fn active_trick(&self) -> Result<&Trick, DomainError> {
        self.tricks
            .last()
            .filter(|t| t.is_not_over())
            .ok_or_else(|| DomainError::not_ready(NotReadyKind::NoActiveTrick, "No open trick"))
    }

    /// Cards `seat` may legally play into the active trick right now.
    ///
    /// Empty when there is no open trick or it is not `seat`'s turn.
    pub fn legal_moves(&self, seat: PlayerId) -> Vec<Card> {
        let Ok(trick) = self.active_trick() else {
            return Vec::new();
        };
        if trick.next_seat() != Some(seat) {
            return Vec::new();
        }
        let Some(hand) = self.hands.get(seat as usize) else {
            return Vec::new();
        };
        legal_moves(trick, &self.play_context(hand))
    }

    fn play_context<'a>(&'a self, hand: &'a [Card]) -> PlayContext<'a> {
        PlayContext {
            hand,
            hearts_broken: self.hearts_broken,
            rules: &self.rules,
        }
    }

    /// Play `card` from `seat` into the active trick.
    pub fn play_card(&mut self, seat: PlayerId, card: Card) -> Result<PlayCardResult, DomainError> {
        let seat = require_seat(seat)?;
        let current = self.active_trick()?;
        let mut trick = current.clone();
        trick.push(seat, card)?;
        check_play(current, card, &self.play_context(&self.hands[seat as usize]))?;

        // Validation passed; mutate.
        self.hands[seat as usize].retain(|&c| c != card);
        let trick_position = trick.position();
        let resolution = trick.resolve();
        if let Some(last) = self.tricks.last_mut() {
            *last = trick;
        }

        let broke_hearts = !self.hearts_broken && breaks_hearts(card, &self.rules);
        if broke_hearts {
            self.mark_hearts_broken();
            info!(round = self.position, trick = trick_position, seat, %card, "Hearts broken");
        }

        if let Some(res) = resolution {
            debug!(
                round = self.position,
                trick = trick_position,
                winner = res.winner,
                score = res.score,
                "Trick complete"
            );
        }

        Ok(PlayCardResult {
            trick_position,
            resolution,
            broke_hearts,
            round_over: self.is_over(),
        })
    }

    fn mark_hearts_broken(&mut self) {
        debug_assert!(!self.hearts_broken, "hearts_broken only flips once");
        self.hearts_broken = true;
    }

    // ---- scoring --------------------------------------------------------

    /// Points taken by each seat this round. Requires the round to be over.
    pub fn calculate_round_scores(&mut self) -> Result<[u8; PLAYERS], DomainError> {
        if !self.is_over() {
            return Err(DomainError::not_ready(
                NotReadyKind::RoundIncomplete,
                format!(
                    "Round {} has {} of 13 tricks",
                    self.position,
                    self.tricks.len()
                ),
            ));
        }
        crate::domain::invariants::verify_round(self)?;
        let scores = scoring::round_scores(&self.tricks)?;
        self.round_scores = Some(scores);
        Ok(scores)
    }

    /// Fold this round's scores into `board`, at most once.
    pub fn update_total_scores(&mut self, board: &mut ScoreBoard) -> Result<RoundResult, DomainError> {
        let scores = self.round_scores.ok_or_else(|| {
            DomainError::not_ready(
                NotReadyKind::RoundIncomplete,
                "Round scores have not been calculated",
            )
        })?;
        if self.totals_applied {
            return Err(DomainError::not_ready(
                NotReadyKind::AlreadyScored,
                format!("Round {} was already added to the totals", self.position),
            ));
        }
        let result = board.apply_round(self.position, scores);
        self.totals_applied = true;

        if let Some(shooter) = result.moon_shooter {
            info!(round = self.position, seat = shooter, "Shot the moon");
        }
        info!(
            round = self.position,
            scores = ?result.round_scores,
            totals = ?result.totals_after,
            "Round scored"
        );
        Ok(result)
    }

    /// Calculate round scores and add them to the totals.
    pub fn finalize(&mut self, board: &mut ScoreBoard) -> Result<RoundResult, DomainError> {
        if self.totals_applied {
            return Err(DomainError::not_ready(
                NotReadyKind::AlreadyScored,
                format!("Round {} was already finalized", self.position),
            ));
        }
        self.calculate_round_scores()?;
        self.update_total_scores(board)
    }

    pub fn is_scored(&self) -> bool {
        self.totals_applied
    }
}
