//! Monte Carlo orchestration around the card engine.
//!
//! - `runner`: sequential and rayon-parallel trial loops
//! - `stats`: mean, variance, percentiles and histograms of card scores
//! - `storage`: bincode score files

pub mod runner;
pub mod stats;
pub mod storage;

pub use runner::{simulate, SimulationResult, SimulationRunner};
pub use stats::{histogram, progressive_histograms, Percentiles, ScoreAccumulator, ScoreStatistics};
pub use storage::ScoreFile;
