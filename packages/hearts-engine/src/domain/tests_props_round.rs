use std::collections::HashSet;

use proptest::prelude::*;

use crate::ai::{play_out_round, AutoPlayer, RandomPlayer};
use crate::config::RulesConfig;
use crate::domain::invariants::verify_round;
use crate::domain::round::Round;
use crate::domain::scoring::ScoreBoard;
use crate::domain::{test_gens, test_prelude};
use crate::domain::{Card, PlayerId};

fn random_seats(seeds: [u64; 4]) -> Vec<RandomPlayer> {
    seeds.iter().map(|&s| RandomPlayer::new(Some(s))).collect()
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Passing keeps 13 cards per seat and the full deck intact, and every
    /// passed card lands at the direction's target.
    #[test]
    fn prop_passing_conserves_cards(
        deal_seed in any::<u64>(),
        position in test_gens::round_position(),
        player_seeds in any::<[u64; 4]>(),
    ) {
        let mut round = Round::new(position, 0, RulesConfig::default()).unwrap();
        round.deal(deal_seed).unwrap();
        let seats = random_seats(player_seeds);
        let players: [&dyn AutoPlayer; 4] = [&seats[0], &seats[1], &seats[2], &seats[3]];

        if round.passing_time() {
            let selections = crate::ai::collect_pass_selections(&round, &players).unwrap();
            round.pass_cards(&selections).unwrap();
            let direction = round.pass_direction();
            for (from, picked) in selections.iter().enumerate() {
                let to = direction.target(from as PlayerId);
                for card in picked {
                    prop_assert!(round.hand(to).unwrap().contains(card));
                }
            }
        }

        let all: HashSet<Card> = round.hands().iter().flatten().copied().collect();
        prop_assert_eq!(all.len(), 52);
        prop_assert!(round.hands().iter().all(|h| h.len() == 13));
        prop_assert!(!round.passing_time());
    }

    /// Random legal play always completes a consistent round worth 26 points.
    #[test]
    fn prop_random_rounds_complete_consistently(
        (deal_seed, player_seeds) in test_gens::round_seeds(),
        position in test_gens::round_position(),
    ) {
        let mut round = Round::new(position, 1, RulesConfig::default()).unwrap();
        round.deal(deal_seed).unwrap();
        let seats = random_seats(player_seeds);
        let players: [&dyn AutoPlayer; 4] = [&seats[0], &seats[1], &seats[2], &seats[3]];

        play_out_round(&mut round, &players).unwrap();
        prop_assert!(round.is_over());
        verify_round(&round).unwrap();

        let first = &round.tricks()[0];
        prop_assert_eq!(first.plays()[0].card, Card::TWO_OF_CLUBS);

        let scores = round.calculate_round_scores().unwrap();
        prop_assert_eq!(scores.iter().map(|&s| s as u32).sum::<u32>(), 26);

        let mut board = ScoreBoard::new();
        let result = round.update_total_scores(&mut board);
        prop_assert!(result.is_ok());
        let total: u32 = board.totals().iter().sum();
        prop_assert!(total == 26 || total == 78);

        let restored = Round::from_snapshot(round.snapshot()).unwrap();
        prop_assert_eq!(restored, round);
    }
}
