//! Error types for the engine and the simulation runner.

use crate::card::CARD_CELLS;

/// Why a sequence of values is not a valid card.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CardDefect {
    #[error("expected {cells} values, got {len}", cells = CARD_CELLS)]
    WrongLength { len: usize },

    #[error("value at position {position} is not positive")]
    NonPositive { position: usize },

    #[error("value {value} appears more than once")]
    Duplicate { value: u32 },
}

/// Errors raised by card generation and scoring.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// `max_num` cannot fill the card with distinct values.
    #[error(
        "invalid configuration: max_num {max_num} is smaller than the {cells} cells of a card",
        cells = CARD_CELLS
    )]
    InvalidConfiguration { max_num: u32 },

    /// A malformed card reached the evaluator.
    #[error("invalid card: {0}")]
    InvalidInput(#[from] CardDefect),
}

/// Errors raised while configuring or running a simulation.
#[derive(Debug, thiserror::Error)]
pub enum SimulationError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("invalid setting `{field}`: {reason}")]
    InvalidSetting { field: &'static str, reason: String },

    #[error("failed to parse configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("simulation cancelled before completing {requested} trials")]
    Cancelled { requested: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("score file encoding error: {0}")]
    Encoding(#[from] bincode::Error),
}
