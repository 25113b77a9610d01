//! Card scoring.
//!
//! Card values are call rounds, so a line completes at the round of its last
//! cell (the maximum over the line) and the card wins at its first completed
//! line (the minimum over lines). The Free cell is left out of the line table
//! and needs no call.

use serde::{Deserialize, Serialize};

use crate::card::{line_table, Card, LineDefinition, LineId, LineTable};
use crate::core::EngineError;

/// Round at which `line` completes on `card`.
#[must_use]
pub fn line_score(card: &Card, line: &LineDefinition) -> u32 {
    line.positions()
        .iter()
        .map(|&p| card.value_at(p as usize))
        .fold(0, u32::max)
}

/// Reduce line scores to the round of the first win.
///
/// Returns `None` for an empty input.
#[must_use]
pub fn reduce_card_score(line_scores: impl IntoIterator<Item = u32>) -> Option<u32> {
    line_scores.into_iter().min()
}

/// Validate raw values as a card and score it.
///
/// ```
/// use bingo_sim::score_card;
///
/// let card = [
///     45, 37, 27, 69, 28, 39, 14, 8, 50, 34, 56, 47,
///     1, 63, 64, 43, 4, 75, 23, 16, 66, 35, 10, 30,
/// ];
/// assert_eq!(score_card(&card), Ok(35));
/// assert!(score_card(&card[..12]).is_err());
/// ```
pub fn score_card(values: &[u32]) -> Result<u32, EngineError> {
    Ok(Card::from_values(values)?.score())
}

/// Score of a single line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineScore {
    pub line: LineId,
    pub score: u32,
}

/// Per-line scores of one card together with its card score.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub line_scores: Vec<LineScore>,
    pub card_score: u32,
}

impl ScoreBreakdown {
    /// Lines that complete at the card score.
    pub fn winning_lines(&self) -> impl Iterator<Item = LineId> + '_ {
        self.line_scores
            .iter()
            .filter(move |ls| ls.score == self.card_score)
            .map(|ls| ls.line)
    }

    /// Score of a given line.
    #[must_use]
    pub fn score_of(&self, line: LineId) -> Option<u32> {
        self.line_scores
            .iter()
            .find(|ls| ls.line == line)
            .map(|ls| ls.score)
    }
}

/// Evaluates cards against the shared line table.
#[derive(Clone, Copy, Debug)]
pub struct ScoreEvaluator {
    table: &'static LineTable,
}

impl Default for ScoreEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreEvaluator {
    /// Create an evaluator over the standard line table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            table: line_table(),
        }
    }

    /// Round at which `card` first completes a line.
    #[must_use]
    pub fn card_score(&self, card: &Card) -> u32 {
        // The table always holds 12 lines.
        reduce_card_score(self.table.iter().map(|line| line_score(card, line))).unwrap_or_default()
    }

    /// Every line's score plus the card score.
    #[must_use]
    pub fn breakdown(&self, card: &Card) -> ScoreBreakdown {
        let line_scores: Vec<LineScore> = self
            .table
            .iter()
            .map(|line| LineScore {
                line: line.id,
                score: line_score(card, line),
            })
            .collect();
        let card_score = reduce_card_score(line_scores.iter().map(|ls| ls.score)).unwrap_or_default();

        ScoreBreakdown {
            line_scores,
            card_score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: [u32; 24] = [
        45, 37, 27, 69, 28, 39, 14, 8, 50, 34, 56, 47, 1, 63, 64, 43, 4, 75, 23, 16, 66, 35, 10, 30,
    ];

    fn sample() -> Card {
        Card::from_values(&SAMPLE).unwrap()
    }

    #[test]
    fn test_sample_line_scores() {
        let breakdown = ScoreEvaluator::new().breakdown(&sample());
        let scores: Vec<u32> = breakdown.line_scores.iter().map(|ls| ls.score).collect();

        assert_eq!(scores, vec![69, 50, 63, 75, 66, 64, 66, 35, 75, 63, 75, 50]);
        assert_eq!(breakdown.card_score, 35);
        assert_eq!(breakdown.winning_lines().collect::<Vec<_>>(), vec![LineId::Column(2)]);
    }

    #[test]
    fn test_sample_card_score() {
        assert_eq!(ScoreEvaluator::new().card_score(&sample()), 35);
        assert_eq!(sample().score(), 35);
        assert_eq!(score_card(&SAMPLE), Ok(35));
    }

    #[test]
    fn test_short_lines_skip_free() {
        let breakdown = ScoreEvaluator::new().breakdown(&sample());
        assert_eq!(breakdown.score_of(LineId::Row(2)), Some(63));
        assert_eq!(breakdown.score_of(LineId::AntiDiagonal), Some(50));
    }

    #[test]
    fn test_line_score_is_max() {
        let line = line_table().get(LineId::MainDiagonal).unwrap();
        // positions 0, 6, 17, 23
        assert_eq!(line_score(&sample(), line), 75);
    }

    #[test]
    fn test_reduce_card_score() {
        assert_eq!(reduce_card_score([9, 4, 12]), Some(4));
        assert_eq!(reduce_card_score(std::iter::empty()), None);
    }

    #[test]
    fn test_identity_card_wins_on_first_row() {
        let values: Vec<u32> = (1..=24).collect();
        let card = Card::from_values(&values).unwrap();
        assert_eq!(card.score(), 5);
    }

    #[test]
    fn test_scoring_is_idempotent() {
        let evaluator = ScoreEvaluator::new();
        let card = sample();
        assert_eq!(evaluator.card_score(&card), evaluator.card_score(&card));
        assert_eq!(card.values(), &SAMPLE);
    }

    #[test]
    fn test_score_card_rejects_malformed() {
        assert!(matches!(score_card(&[1, 2, 3]), Err(EngineError::InvalidInput(_))));

        let mut dup = SAMPLE;
        dup[1] = dup[0];
        assert!(matches!(score_card(&dup), Err(EngineError::InvalidInput(_))));
    }
}
