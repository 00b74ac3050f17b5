use crate::config::RulesConfig;
use crate::domain::fixtures::CardFixtures;
use crate::domain::tricks::{breaks_hearts, check_play, legal_moves, PlayContext, Trick, TrickResolution};
use crate::domain::{Card, TrickOutcome};
use crate::errors::domain::{DomainError, InvalidPlayKind};

fn c(token: &str) -> Card {
    CardFixtures::parse_hardcoded(&[token])[0]
}

fn cards(tokens: &[&str]) -> Vec<Card> {
    CardFixtures::parse_hardcoded(tokens)
}

fn ctx<'a>(hand: &'a [Card], hearts_broken: bool, rules: &'a RulesConfig) -> PlayContext<'a> {
    PlayContext {
        hand,
        hearts_broken,
        rules,
    }
}

fn kind(err: DomainError) -> InvalidPlayKind {
    match err {
        DomainError::InvalidPlay { kind, .. } => kind,
        other => panic!("expected InvalidPlay, got {other:?}"),
    }
}

#[test]
fn opening_lead_must_be_two_of_clubs() {
    let rules = RulesConfig::default();
    let hand = cards(&["2C", "5D", "AS"]);
    let trick = Trick::new(0, 0);

    let err = check_play(&trick, c("AS"), &ctx(&hand, false, &rules)).unwrap_err();
    assert_eq!(kind(err), InvalidPlayKind::MustLeadTwoOfClubs);
    assert_eq!(legal_moves(&trick, &ctx(&hand, false, &rules)), cards(&["2C"]));
}

#[test]
fn card_must_be_in_hand() {
    let rules = RulesConfig::default();
    let hand = cards(&["5D", "AS"]);
    let trick = Trick::new(4, 1);
    let err = check_play(&trick, c("KH"), &ctx(&hand, true, &rules)).unwrap_err();
    assert_eq!(kind(err), InvalidPlayKind::CardNotInHand);
}

#[test]
fn hearts_cannot_lead_until_broken() {
    let rules = RulesConfig::default();
    let hand = cards(&["2H", "5D"]);
    let trick = Trick::new(3, 2);

    let err = check_play(&trick, c("2H"), &ctx(&hand, false, &rules)).unwrap_err();
    assert_eq!(kind(err), InvalidPlayKind::HeartsNotBroken);
    assert_eq!(legal_moves(&trick, &ctx(&hand, false, &rules)), cards(&["5D"]));

    assert!(check_play(&trick, c("2H"), &ctx(&hand, true, &rules)).is_ok());
}

#[test]
fn all_hearts_hand_may_lead_hearts() {
    let rules = RulesConfig::default();
    let hand = cards(&["2H", "9H"]);
    let trick = Trick::new(9, 0);
    assert_eq!(legal_moves(&trick, &ctx(&hand, false, &rules)), hand);
}

#[test]
fn must_follow_led_suit() {
    let rules = RulesConfig::default();
    let mut trick = Trick::new(2, 1);
    trick.push(1, c("5D")).unwrap();

    let hand = cards(&["KD", "AS", "3H"]);
    let err = check_play(&trick, c("AS"), &ctx(&hand, false, &rules)).unwrap_err();
    assert_eq!(kind(err), InvalidPlayKind::MustFollowSuit);
    assert_eq!(legal_moves(&trick, &ctx(&hand, false, &rules)), cards(&["KD"]));
}

#[test]
fn void_in_led_suit_may_discard_anything() {
    let rules = RulesConfig::default();
    let mut trick = Trick::new(2, 1);
    trick.push(1, c("5D")).unwrap();

    let hand = cards(&["AS", "3H"]);
    assert_eq!(
        legal_moves(&trick, &ctx(&hand, false, &rules)),
        cards(&["3H", "AS"])
    );
}

#[test]
fn no_points_on_first_trick_unless_forced() {
    let rules = RulesConfig::default();
    let mut trick = Trick::new(0, 0);
    trick.push(0, Card::TWO_OF_CLUBS).unwrap();

    let hand = cards(&["QS", "3H", "5D"]);
    let err = check_play(&trick, c("QS"), &ctx(&hand, false, &rules)).unwrap_err();
    assert_eq!(kind(err), InvalidPlayKind::PointsOnFirstTrick);
    assert_eq!(legal_moves(&trick, &ctx(&hand, false, &rules)), cards(&["5D"]));

    let forced = cards(&["QS", "3H"]);
    assert_eq!(legal_moves(&trick, &ctx(&forced, false, &rules)), cards(&["3H", "QS"]));
}

#[test]
fn first_trick_points_allowed_when_rule_disabled() {
    let rules = RulesConfig {
        no_points_on_first_trick: false,
        ..RulesConfig::default()
    };
    let mut trick = Trick::new(0, 0);
    trick.push(0, Card::TWO_OF_CLUBS).unwrap();

    let hand = cards(&["QS", "3H", "5D"]);
    assert_eq!(
        legal_moves(&trick, &ctx(&hand, false, &rules)),
        cards(&["5D", "3H", "QS"])
    );
}

#[test]
fn push_enforces_turn_order_and_capacity() {
    let mut trick = Trick::new(5, 3);
    let err = trick.push(0, c("2D")).unwrap_err();
    assert_eq!(kind(err), InvalidPlayKind::OutOfTurn);

    for (seat, token) in [(3, "2D"), (0, "3D"), (1, "4D"), (2, "5D")] {
        trick.push(seat, c(token)).unwrap();
    }
    assert!(trick.is_complete());
    assert_eq!(trick.next_seat(), None);
    let err = trick.push(3, c("6D")).unwrap_err();
    assert_eq!(kind(err), InvalidPlayKind::TrickComplete);
}

#[test]
fn highest_of_led_suit_wins_and_collects_points() {
    let mut trick = Trick::new(6, 2);
    for (seat, token) in [(2, "5D"), (3, "KS"), (0, "9D"), (1, "AH")] {
        trick.push(seat, c(token)).unwrap();
    }
    assert_eq!(trick.winner(), Some(0));
    assert_eq!(trick.score(), 1);
    assert_eq!(
        trick.resolve(),
        Some(TrickResolution {
            winner: 0,
            score: 1
        })
    );
    assert!(trick.is_over());
}

#[test]
fn queen_of_spades_trick_scores_thirteen_plus_hearts() {
    let mut trick = Trick::new(7, 1);
    for (seat, token) in [(1, "KS"), (2, "QS"), (3, "2H"), (0, "TH")] {
        trick.push(seat, c(token)).unwrap();
    }
    assert_eq!(trick.trick_winner(), Some(1));
    assert_eq!(trick.trick_score(), 15);
}

#[test]
fn open_trick_has_no_winner() {
    let mut trick = Trick::new(1, 0);
    trick.push(0, c("AC")).unwrap();
    assert_eq!(trick.trick_winner(), None);
    assert!(trick.is_not_over());
    assert_eq!(trick.next_seat(), Some(1));
}

#[test]
fn queen_breaks_hearts_is_configurable() {
    let on = RulesConfig::default();
    let off = RulesConfig {
        queen_breaks_hearts: false,
        ..RulesConfig::default()
    };
    assert!(breaks_hearts(Card::QUEEN_OF_SPADES, &on));
    assert!(!breaks_hearts(Card::QUEEN_OF_SPADES, &off));
    assert!(breaks_hearts(c("3H"), &off));
    assert!(!breaks_hearts(c("KS"), &on));
}
