use std::collections::HashSet;

use crate::config::RulesConfig;
use crate::domain::fixtures::CardFixtures;
use crate::domain::round::{PlayCardResult, Round, RoundPhase};
use crate::domain::scoring::ScoreBoard;
use crate::domain::{Card, PlayerId};
use crate::errors::domain::{DomainError, InvalidPlayKind, NotReadyKind, ValidationKind};

/// Position 3 never passes, so tricks can start right after the deal.
fn hold_round() -> Round {
    Round::with_hands(3, 2, CardFixtures::suit_per_seat(), RulesConfig::default()).unwrap()
}

fn play_lowest(round: &mut Round) -> PlayCardResult {
    let seat = round.turn().expect("open trick");
    let card = round.legal_moves(seat)[0];
    round.play_card(seat, card).unwrap()
}

fn play_full_trick(round: &mut Round) -> PlayCardResult {
    round.create_trick().unwrap();
    let mut last = None;
    for _ in 0..4 {
        last = Some(play_lowest(round));
    }
    last.unwrap()
}

fn not_ready_kind(err: DomainError) -> NotReadyKind {
    match err {
        DomainError::NotReady { kind, .. } => kind,
        other => panic!("expected NotReady, got {other:?}"),
    }
}

#[test]
fn fresh_round_is_initialized() {
    let mut round = Round::new(0, 1, RulesConfig::default()).unwrap();
    assert_eq!(round.phase(), RoundPhase::Initialized);
    assert!(!round.is_over());
    assert!(!round.has_an_active_trick());
    assert!(!round.is_ready_for_new_trick());
    assert!(!round.passing_time());
    assert!(round.last_trick().is_none());
    assert!(round.previous_trick().is_none());

    let err = round.create_trick().unwrap_err();
    assert_eq!(not_ready_kind(err), NotReadyKind::NotDealt);
}

#[test]
fn rejects_seat_out_of_range() {
    let err = Round::new(0, 4, RulesConfig::default()).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation {
            kind: ValidationKind::InvalidSeat,
            ..
        }
    ));
}

#[test]
fn deal_gives_thirteen_distinct_cards_each() {
    let mut round = Round::new(0, 0, RulesConfig::default()).unwrap();
    let hands = round.deal(2024).unwrap().clone();
    let mut all = HashSet::new();
    for hand in &hands {
        assert_eq!(hand.len(), 13);
        all.extend(hand.iter().copied());
    }
    assert_eq!(all.len(), 52);
    assert_eq!(round.phase(), RoundPhase::Passing);

    let err = round.deal(2024).unwrap_err();
    assert_eq!(not_ready_kind(err), NotReadyKind::AlreadyDealt);
}

#[test]
fn same_seed_deals_same_hands() {
    let mut a = Round::new(0, 0, RulesConfig::default()).unwrap();
    let mut b = Round::new(0, 0, RulesConfig::default()).unwrap();
    assert_eq!(a.deal(99).unwrap(), b.deal(99).unwrap());
}

#[test]
fn deal_with_accepts_any_rng() {
    use rand::SeedableRng;
    let mut rng = rand::rngs::StdRng::seed_from_u64(8);
    let mut round = Round::new(1, 0, RulesConfig::default()).unwrap();
    let hands = round.deal_with(&mut rng).unwrap();
    assert!(hands.iter().all(|h| h.len() == 13));
    assert_eq!(round.pass_direction(), crate::domain::PassDirection::Right);
}

#[test]
fn with_hands_rejects_incomplete_deck() {
    let mut hands = CardFixtures::suit_per_seat();
    hands[1].pop();
    hands[2].push(Card::TWO_OF_CLUBS);
    let err = Round::with_hands(0, 0, hands, RulesConfig::default()).unwrap_err();
    assert_eq!(err.code(), "INVARIANT_VIOLATION");
}

#[test]
fn first_leader_owns_two_of_clubs() {
    let mut round = hold_round();
    assert_eq!(round.get_new_leader().unwrap(), 0);
    let trick = round.create_trick().unwrap();
    assert_eq!(trick.position(), 0);
    assert_eq!(trick.leader(), 0);
    assert_eq!(round.phase(), RoundPhase::InPlay);
    assert_eq!(round.turn(), Some(0));
}

#[test]
fn second_trick_cannot_start_while_first_is_open() {
    let mut round = hold_round();
    round.create_trick().unwrap();
    assert!(round.has_an_active_trick());
    assert!(!round.is_ready_for_new_trick());
    let err = round.create_trick().unwrap_err();
    assert_eq!(not_ready_kind(err), NotReadyKind::TrickInProgress);
    let err = round.get_new_leader().unwrap_err();
    assert_eq!(not_ready_kind(err), NotReadyKind::TrickInProgress);
}

#[test]
fn play_without_trick_is_not_ready() {
    let mut round = hold_round();
    let err = round.play_card(0, Card::TWO_OF_CLUBS).unwrap_err();
    assert_eq!(not_ready_kind(err), NotReadyKind::NoActiveTrick);
}

#[test]
fn out_of_turn_play_leaves_round_untouched() {
    let mut round = hold_round();
    round.create_trick().unwrap();
    let before = round.clone();
    let two_d = CardFixtures::parse_hardcoded(&["2D"])[0];

    let err = round.play_card(1, two_d).unwrap_err();
    assert!(matches!(
        err,
        DomainError::InvalidPlay {
            kind: InvalidPlayKind::OutOfTurn,
            ..
        }
    ));
    assert_eq!(round, before);
}

#[test]
fn illegal_opening_lead_is_rejected() {
    let mut round = hold_round();
    round.create_trick().unwrap();
    let three_c = CardFixtures::parse_hardcoded(&["3C"])[0];
    let err = round.play_card(0, three_c).unwrap_err();
    assert_eq!(err.code(), "MUST_LEAD_TWO_OF_CLUBS");
    assert!(round.last_trick().unwrap().plays().is_empty());
}

#[test]
fn winner_of_previous_trick_leads_next() {
    let mut round = hold_round();
    let result = play_full_trick(&mut round);
    let resolution = result.resolution.unwrap();
    assert_eq!(resolution.winner, 0);
    assert!(round.is_ready_for_new_trick());
    assert_eq!(round.get_new_leader().unwrap(), resolution.winner);
}

#[test]
fn hearts_break_on_first_heart_played() {
    let mut round = hold_round();
    round.create_trick().unwrap();
    assert!(!play_lowest(&mut round).broke_hearts); // 2C
    assert!(!play_lowest(&mut round).broke_hearts); // 2D
    assert!(!round.hearts_broken());
    let third = play_lowest(&mut round); // 2H, seat 2 holds only hearts
    assert!(third.broke_hearts);
    assert!(round.hearts_broken());
    assert!(!play_lowest(&mut round).broke_hearts);
    assert!(round.hearts_broken());
}

#[test]
fn previous_trick_is_second_to_last() {
    let mut round = hold_round();
    play_full_trick(&mut round);
    assert!(round.previous_trick().is_none());
    play_full_trick(&mut round);
    play_full_trick(&mut round);
    assert_eq!(round.previous_trick().unwrap().position(), 1);
    round.create_trick().unwrap();
    assert_eq!(round.previous_trick().unwrap().position(), 2);
}

#[test]
fn round_is_over_only_after_fifty_second_card() {
    let mut round = hold_round();
    for expected_position in 0..12u8 {
        let result = play_full_trick(&mut round);
        assert_eq!(result.trick_position, expected_position);
        assert!(!result.round_over);
    }
    round.create_trick().unwrap();
    for _ in 0..3 {
        play_lowest(&mut round);
        assert_eq!(round.tricks_played(), 13);
        assert!(!round.is_over());
    }
    let last = play_lowest(&mut round);
    assert!(last.round_over);
    assert!(round.is_over());
    assert_eq!(round.phase(), RoundPhase::Complete);
    assert!(round.hands().iter().all(|h| h.is_empty()));

    let positions: Vec<u8> = round.tricks().iter().map(|t| t.position()).collect();
    assert_eq!(positions, (0..13).collect::<Vec<u8>>());

    let err = round.create_trick().unwrap_err();
    assert_eq!(not_ready_kind(err), NotReadyKind::RoundComplete);
}

#[test]
fn scoring_requires_finished_round() {
    let mut round = hold_round();
    play_full_trick(&mut round);
    let err = round.calculate_round_scores().unwrap_err();
    assert_eq!(not_ready_kind(err), NotReadyKind::RoundIncomplete);

    let mut board = ScoreBoard::new();
    let err = round.update_total_scores(&mut board).unwrap_err();
    assert_eq!(not_ready_kind(err), NotReadyKind::RoundIncomplete);
    assert_eq!(board.totals(), [0; 4]);
}

#[test]
fn seat_taking_every_point_shoots_the_moon() {
    // Seat 0 holds every club and wins all thirteen tricks.
    let mut round = hold_round();
    for _ in 0..13 {
        play_full_trick(&mut round);
    }
    assert_eq!(round.calculate_round_scores().unwrap(), [26, 0, 0, 0]);

    let mut board = ScoreBoard::new();
    let result = round.update_total_scores(&mut board).unwrap();
    assert_eq!(result.moon_shooter, Some(0));
    assert_eq!(board.totals(), [0, 26, 26, 26]);
    assert!(round.is_scored());

    let err = round.update_total_scores(&mut board).unwrap_err();
    assert_eq!(not_ready_kind(err), NotReadyKind::AlreadyScored);
    let err = round.finalize(&mut board).unwrap_err();
    assert_eq!(not_ready_kind(err), NotReadyKind::AlreadyScored);
    assert_eq!(board.totals(), [0, 26, 26, 26]);
}

#[test]
fn player_view_exposes_turn_and_legal_plays() {
    let mut round = hold_round();
    round.create_trick().unwrap();
    play_lowest(&mut round);

    let view = round.player_view(1).unwrap();
    assert!(view.is_my_turn());
    assert!(!view.is_leading());
    assert_eq!(view.trick_position, Some(0));
    assert_eq!(view.current_trick.len(), 1);
    assert_eq!(view.lead_suit(), Some(crate::domain::Suit::Clubs));
    assert!(view.legal_plays.iter().all(|c| c.suit == crate::domain::Suit::Diamonds));

    let other: PlayerId = 2;
    let view = round.player_view(other).unwrap();
    assert!(!view.is_my_turn());
    assert!(view.legal_plays.is_empty());
}
