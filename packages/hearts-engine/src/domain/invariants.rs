//! Structural checks over round state.
//!
//! Failures here mean the state is corrupted (bad snapshot, host bug), not
//! that a player did something illegal, so they surface as
//! `DomainError::InvariantViolation`.

use std::collections::HashSet;

use crate::domain::rules::{hand_size_after, DECK_SIZE, HAND_SIZE, PLAYERS, ROUND_POINTS};
use crate::domain::round::Round;
use crate::domain::scoring;
use crate::domain::state::expected_actor;
use crate::domain::tricks::{breaks_hearts, TrickOutcome};
use crate::domain::Card;
use crate::errors::domain::DomainError;

/// Four hands of 13 forming a full deck.
pub fn verify_fresh_deal(hands: &[Vec<Card>; PLAYERS]) -> Result<(), DomainError> {
    for (seat, hand) in hands.iter().enumerate() {
        if hand.len() != HAND_SIZE {
            return Err(DomainError::invariant(format!(
                "Seat {seat} holds {} cards, expected {HAND_SIZE}",
                hand.len()
            )));
        }
    }
    let unique: HashSet<Card> = hands.iter().flatten().copied().collect();
    if unique.len() != DECK_SIZE {
        return Err(DomainError::invariant(format!(
            "Hands contain {} distinct cards, expected {DECK_SIZE}",
            unique.len()
        )));
    }
    Ok(())
}

/// Full consistency check of a round: cards, trick order, leaders, flags, scores.
pub fn verify_round(round: &Round) -> Result<(), DomainError> {
    if !round.dealt {
        if round.hands.iter().any(|h| !h.is_empty()) || !round.tricks.is_empty() {
            return Err(DomainError::invariant(
                "Undealt round must have empty hands and no tricks",
            ));
        }
        if round.passed
            || round.hearts_broken
            || round.round_scores.is_some()
            || round.totals_applied
        {
            return Err(DomainError::invariant(format!(
                "Undealt round carries progress: passed={} hearts_broken={} scores={:?} totals_applied={}",
                round.passed, round.hearts_broken, round.round_scores, round.totals_applied
            )));
        }
        return Ok(());
    }

    verify_tricks(round)?;
    verify_cards(round)?;
    verify_flags(round)?;
    Ok(())
}

fn verify_tricks(round: &Round) -> Result<(), DomainError> {
    let tricks = &round.tricks;
    if tricks.len() > HAND_SIZE {
        return Err(DomainError::invariant(format!(
            "Round has {} tricks",
            tricks.len()
        )));
    }
    for (idx, trick) in tricks.iter().enumerate() {
        if trick.position() as usize != idx {
            return Err(DomainError::invariant(format!(
                "Trick at index {idx} has position {}",
                trick.position()
            )));
        }
        if trick.plays().len() > PLAYERS {
            return Err(DomainError::invariant(format!(
                "Trick {idx} has {} plays",
                trick.plays().len()
            )));
        }
        if idx + 1 < tricks.len() && trick.is_not_over() {
            return Err(DomainError::invariant(format!(
                "Trick {idx} is open but later tricks exist"
            )));
        }
        for (n, play) in trick.plays().iter().enumerate() {
            if play.seat != expected_actor(trick.leader(), n as u8) {
                return Err(DomainError::invariant(format!(
                    "Trick {idx} play {n} by seat {} out of order",
                    play.seat
                )));
            }
        }
        if idx > 0 {
            let prev_winner = tricks[idx - 1].trick_winner();
            if prev_winner != Some(trick.leader()) {
                return Err(DomainError::invariant(format!(
                    "Trick {idx} led by seat {} but trick {} was won by {prev_winner:?}",
                    trick.leader(),
                    idx - 1
                )));
            }
        }
    }
    if let Some(first) = tricks.first() {
        match first.plays().first() {
            Some(opener) if opener.card != Card::TWO_OF_CLUBS => {
                return Err(DomainError::invariant(
                    "First trick was not opened with the two of clubs",
                ));
            }
            Some(_) => {}
            None => {
                let owner = round.two_of_clubs_owner()?;
                if first.leader() != owner {
                    return Err(DomainError::invariant(format!(
                        "First trick led by seat {} but seat {owner} holds the two of clubs",
                        first.leader()
                    )));
                }
            }
        }
    }
    Ok(())
}

fn verify_cards(round: &Round) -> Result<(), DomainError> {
    let mut seen: HashSet<Card> = HashSet::with_capacity(DECK_SIZE);
    let mut played_by = [0usize; PLAYERS];

    for trick in &round.tricks {
        for play in trick.plays() {
            played_by[play.seat as usize] += 1;
            if !seen.insert(play.card) {
                return Err(DomainError::invariant(format!(
                    "{} was played twice",
                    play.card
                )));
            }
        }
    }
    for (seat, hand) in round.hands.iter().enumerate() {
        if played_by[seat] > HAND_SIZE || hand.len() != hand_size_after(played_by[seat]) {
            return Err(DomainError::invariant(format!(
                "Seat {seat} holds {} cards after playing {}",
                hand.len(),
                played_by[seat]
            )));
        }
        for card in hand {
            if !seen.insert(*card) {
                return Err(DomainError::invariant(format!(
                    "{card} appears in more than one place"
                )));
            }
        }
    }
    if seen.len() != DECK_SIZE {
        return Err(DomainError::invariant(format!(
            "Round accounts for {} cards, expected {DECK_SIZE}",
            seen.len()
        )));
    }
    Ok(())
}

fn verify_flags(round: &Round) -> Result<(), DomainError> {
    let broken_by_play = round
        .tricks
        .iter()
        .flat_map(|t| t.plays())
        .any(|p| breaks_hearts(p.card, &round.rules));
    if broken_by_play != round.hearts_broken {
        return Err(DomainError::invariant(format!(
            "hearts_broken is {} but plays say {broken_by_play}",
            round.hearts_broken
        )));
    }

    let direction = round.pass_direction();
    if round.passed && !direction.moves_cards() {
        return Err(DomainError::invariant(
            "Round marked as passed but its direction is none",
        ));
    }
    if !round.tricks.is_empty() && direction.moves_cards() && !round.passed {
        return Err(DomainError::invariant("Tricks exist but passing never ran"));
    }

    if let Some(scores) = round.round_scores {
        let total: u32 = scores.iter().map(|&s| s as u32).sum();
        if !round.is_over() || total != ROUND_POINTS as u32 {
            return Err(DomainError::invariant(format!(
                "Round scores {scores:?} recorded for an unfinished or inconsistent round"
            )));
        }
        let earned = scoring::round_scores(&round.tricks)?;
        if scores != earned {
            return Err(DomainError::invariant(format!(
                "Recorded round scores {scores:?} differ from trick points {earned:?}"
            )));
        }
    }
    if round.totals_applied && round.round_scores.is_none() {
        return Err(DomainError::invariant(
            "Totals applied without round scores",
        ));
    }
    Ok(())
}
