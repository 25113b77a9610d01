//! Line and card scoring.

pub mod evaluator;

pub use evaluator::{
    line_score, reduce_card_score, score_card, LineScore, ScoreBreakdown, ScoreEvaluator,
};
