//! Core engine types: RNG, errors, configuration.
//!
//! Everything the card and simulation modules share lives here.

pub mod rng;
pub mod error;
pub mod config;

pub use rng::{SimRng, SimRngState};
pub use error::{CardDefect, EngineError, SimulationError};
pub use config::SimulationConfig;
