use proptest::prelude::*;

use crate::config::RulesConfig;
use crate::domain::state::nth_from;
use crate::domain::tricks::{check_play, legal_moves, PlayContext, Trick};
use crate::domain::{test_gens, test_prelude};
use crate::domain::{card_points, Card};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// The winner holds the highest card of the led suit; off-suit never wins.
    #[test]
    fn prop_trick_winner_is_highest_of_lead(
        (leader, cards) in test_gens::complete_trick(),
    ) {
        let mut trick = Trick::new(5, leader);
        for (n, card) in cards.iter().enumerate() {
            trick.push(nth_from(leader, n as u8), *card).unwrap();
        }
        let lead = cards[0].suit;
        let best = cards
            .iter()
            .enumerate()
            .filter(|(_, c)| c.suit == lead)
            .max_by_key(|(_, c)| c.rank)
            .map(|(n, _)| nth_from(leader, n as u8))
            .unwrap();

        prop_assert_eq!(trick.winner(), Some(best));
        let expected: u8 = cards.iter().map(|c| card_points(*c)).sum();
        prop_assert_eq!(trick.score(), expected);
    }

    /// Legal moves are exactly the cards `check_play` accepts, and never empty
    /// for a non-empty hand once the opening lead is down.
    #[test]
    fn prop_legal_moves_match_check_play(
        cards in test_gens::unique_cards(8),
        leader in test_gens::player_id(),
        position in 1u8..13,
        hearts_broken in any::<bool>(),
    ) {
        let rules = RulesConfig::default();
        let (led, hand) = cards.split_at(1);
        let mut trick = Trick::new(position, leader);
        trick.push(leader, led[0]).unwrap();

        let ctx = PlayContext { hand, hearts_broken, rules: &rules };
        let legal = legal_moves(&trick, &ctx);
        prop_assert!(!legal.is_empty());
        for card in hand {
            prop_assert_eq!(legal.contains(card), check_play(&trick, *card, &ctx).is_ok());
        }

        let follows = hand.iter().any(|c| c.suit == led[0].suit);
        if follows {
            prop_assert!(legal.iter().all(|c: &Card| c.suit == led[0].suit));
        } else {
            prop_assert_eq!(legal.len(), hand.len());
        }
    }

    /// A leader always has some legal lead.
    #[test]
    fn prop_some_lead_is_always_legal(
        hand in test_gens::hand(),
        position in 1u8..13,
        hearts_broken in any::<bool>(),
    ) {
        let rules = RulesConfig::default();
        let trick = Trick::new(position, 0);
        let ctx = PlayContext { hand: &hand, hearts_broken, rules: &rules };
        prop_assert!(!legal_moves(&trick, &ctx).is_empty());
    }
}
