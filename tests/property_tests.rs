//! Property tests for card generation and scoring.

use proptest::prelude::*;

use bingo_sim::{
    generate_card_seeded, line_score, line_table, reduce_card_score, score_card, Card,
    ScoreEvaluator, CARD_CELLS,
};

fn permutation_card() -> impl Strategy<Value = Vec<u32>> {
    Just((1..=CARD_CELLS as u32).collect::<Vec<u32>>()).prop_shuffle()
}

proptest! {
    #[test]
    fn generated_cards_are_valid(max_num in 24u32..=200, seed in any::<u64>()) {
        let card = generate_card_seeded(max_num, seed).unwrap();
        let values = card.values();

        prop_assert_eq!(values.len(), CARD_CELLS);
        prop_assert!(values.iter().all(|&v| v >= 1 && v <= max_num));

        let mut sorted = values.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        prop_assert_eq!(sorted.len(), CARD_CELLS);
    }

    #[test]
    fn generation_is_deterministic(max_num in 24u32..=120, seed in any::<u64>()) {
        let a = generate_card_seeded(max_num, seed).unwrap();
        let b = generate_card_seeded(max_num, seed).unwrap();
        prop_assert_eq!(a.score(), b.score());
        prop_assert_eq!(a, b);
    }

    #[test]
    fn small_max_num_is_rejected(max_num in 0u32..24, seed in any::<u64>()) {
        prop_assert!(generate_card_seeded(max_num, seed).is_err());
    }

    #[test]
    fn card_score_is_min_of_line_maxima(values in permutation_card()) {
        let card = Card::from_values(&values).unwrap();
        let line_scores: Vec<u32> = line_table().iter().map(|line| line_score(&card, line)).collect();

        let expected = line_scores.iter().copied().min().unwrap();
        prop_assert_eq!(reduce_card_score(line_scores), Some(expected));
        prop_assert_eq!(score_card(&values), Ok(expected));
        prop_assert!(expected <= card.max_value());
    }

    #[test]
    fn scoring_is_idempotent(max_num in 24u32..=100, seed in any::<u64>()) {
        let card = generate_card_seeded(max_num, seed).unwrap();
        let evaluator = ScoreEvaluator::new();
        let first = evaluator.card_score(&card);
        prop_assert_eq!(first, evaluator.card_score(&card));
        prop_assert_eq!(first, evaluator.breakdown(&card).card_score);
    }

    #[test]
    fn winning_line_contains_the_score(values in permutation_card()) {
        let card = Card::from_values(&values).unwrap();
        let breakdown = ScoreEvaluator::new().breakdown(&card);
        let winner = breakdown.winning_lines().next().unwrap();
        let line = line_table().get(winner).unwrap();

        prop_assert!(line
            .positions()
            .iter()
            .any(|&p| card.value_at(p as usize) == breakdown.card_score));
    }
}
