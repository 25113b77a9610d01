//! # bingo-sim
//!
//! Monte Carlo estimation of when a random Bingo card wins.
//!
//! ## Model
//!
//! A card stores, for each of its 24 non-free cells, the round at which that
//! cell's number is called. A line completes at the largest round among its
//! cells, and the card wins at the smallest such round over its 12 lines.
//! Simulating the game therefore needs no caller loop: shuffle the call
//! order, read off the card, take a min of maxes.
//!
//! ## Design Principles
//!
//! 1. **Fixed layout as data**: the 5×5 grid and its Free-cell line
//!    exceptions are a table derived once, not twelve hand-written cases.
//!
//! 2. **Explicit randomness**: every card comes from a seedable [`SimRng`].
//!    There is no process-wide random state.
//!
//! 3. **Pure scoring**: line and card scores are plain functions of a card.
//!
//! ## Modules
//!
//! - `core`: RNG, errors, configuration
//! - `card`: grid layout, line table, cards, card generation
//! - `scoring`: line and card scores
//! - `simulation`: trial loops, statistics, score files

pub mod core;
pub mod card;
pub mod scoring;
pub mod simulation;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    CardDefect, EngineError, SimRng, SimRngState, SimulationConfig, SimulationError,
};

pub use crate::card::{
    generate_card, generate_card_seeded, line_table, Card, CardGenerator, LineDefinition, LineId,
    LineTable, CARD_CELLS, LINE_COUNT,
};

pub use crate::scoring::{
    line_score, reduce_card_score, score_card, LineScore, ScoreBreakdown, ScoreEvaluator,
};

pub use crate::simulation::{
    simulate, ScoreAccumulator, ScoreFile, ScoreStatistics, SimulationResult, SimulationRunner,
};
