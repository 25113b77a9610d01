//! Simulation configuration.
//!
//! Defaults mirror the classic setup: 10,000 trials over a 75-ball game.
//! Values can come from a TOML file, with every field optional:
//!
//! ```toml
//! iterations = 50000
//! max_num = 90
//! seed = 7
//! parallel = true
//! chunk_size = 2048
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{EngineError, SimulationError};
use crate::card::CARD_CELLS;

/// Configuration for a Monte Carlo run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of trials (generate + score) to run.
    pub iterations: usize,

    /// Number of distinct call values (75 in classic Bingo).
    /// Must be at least the number of cells on a card.
    pub max_num: u32,

    /// Root seed. Same seed produces identical scores.
    pub seed: u64,

    /// Run trials on the rayon thread pool.
    pub parallel: bool,

    /// Trials per parallel chunk. Each chunk owns a forked RNG stream,
    /// so results depend on this value but not on the thread count.
    pub chunk_size: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            iterations: 10_000,
            max_num: 75,
            seed: 42,
            parallel: false,
            chunk_size: 1024,
        }
    }
}

impl SimulationConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of trials.
    #[must_use]
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set the number of distinct call values.
    #[must_use]
    pub fn with_max_num(mut self, max_num: u32) -> Self {
        self.max_num = max_num;
        self
    }

    /// Set the root seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Enable or disable parallel execution.
    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Set the number of trials per parallel chunk.
    #[must_use]
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Check that a run with this configuration can proceed.
    pub fn validate(&self) -> Result<(), SimulationError> {
        if (self.max_num as usize) < CARD_CELLS {
            return Err(EngineError::InvalidConfiguration {
                max_num: self.max_num,
            }
            .into());
        }
        if self.chunk_size == 0 {
            return Err(SimulationError::InvalidSetting {
                field: "chunk_size",
                reason: "must be positive".to_string(),
            });
        }
        Ok(())
    }

    /// Parse a configuration from TOML. Missing fields take default values.
    pub fn from_toml_str(source: &str) -> Result<Self, SimulationError> {
        Ok(toml::from_str(source)?)
    }

    /// Load a configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, SimulationError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }
}
