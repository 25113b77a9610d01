//! A Bingo card as call order.
//!
//! Each value is the round at which the caller announces that cell's number.
//! A card therefore needs no ball numbers at all: `1` marks the first ball
//! called, and values missing from the card are balls that miss it.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::grid::{card_position, grid_index, COLUMN_LETTERS, GRID_SIZE};
use super::CARD_CELLS;
use crate::core::{CardDefect, EngineError};
use crate::scoring::ScoreEvaluator;

/// One card: 24 distinct positive call rounds in card-position order.
///
/// Only constructed through validation, so every `Card` can be scored
/// without further checks.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<u32>", into = "Vec<u32>")]
pub struct Card {
    values: [u32; CARD_CELLS],
}

impl Card {
    /// Validate raw values and build a card.
    ///
    /// ```
    /// use bingo_sim::Card;
    ///
    /// let values: Vec<u32> = (1..=24).collect();
    /// let card = Card::from_values(&values).unwrap();
    /// assert_eq!(card.value_at(0), 1);
    ///
    /// assert!(Card::from_values(&values[..23]).is_err());
    /// ```
    pub fn from_values(values: &[u32]) -> Result<Self, EngineError> {
        let values: [u32; CARD_CELLS] = values
            .try_into()
            .map_err(|_| CardDefect::WrongLength { len: values.len() })?;

        let mut seen = FxHashSet::default();
        for (position, &value) in values.iter().enumerate() {
            if value == 0 {
                return Err(CardDefect::NonPositive { position }.into());
            }
            if !seen.insert(value) {
                return Err(CardDefect::Duplicate { value }.into());
            }
        }

        Ok(Self { values })
    }

    /// Build from values the caller guarantees are distinct and positive.
    pub(crate) fn from_array_unchecked(values: [u32; CARD_CELLS]) -> Self {
        debug_assert!(Self::from_values(&values).is_ok());
        Self { values }
    }

    /// Values in card-position order.
    #[must_use]
    pub fn values(&self) -> &[u32; CARD_CELLS] {
        &self.values
    }

    /// Value at a card position.
    ///
    /// # Panics
    ///
    /// Panics if `position >= 24`.
    #[must_use]
    pub fn value_at(&self, position: usize) -> u32 {
        self.values[position]
    }

    /// Value at a grid cell, or `None` for the Free cell.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<u32> {
        card_position(grid_index(row, col)).map(|p| self.values[p])
    }

    /// Largest call round on the card.
    #[must_use]
    pub fn max_value(&self) -> u32 {
        self.values.iter().copied().max().unwrap_or(0)
    }

    /// Round at which this card first completes a line.
    #[must_use]
    pub fn score(&self) -> u32 {
        ScoreEvaluator::new().card_score(self)
    }
}

impl TryFrom<&[u32]> for Card {
    type Error = EngineError;

    fn try_from(values: &[u32]) -> Result<Self, Self::Error> {
        Self::from_values(values)
    }
}

impl TryFrom<Vec<u32>> for Card {
    type Error = EngineError;

    fn try_from(values: Vec<u32>) -> Result<Self, Self::Error> {
        Self::from_values(&values)
    }
}

impl From<Card> for Vec<u32> {
    fn from(card: Card) -> Self {
        card.values.to_vec()
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for letter in COLUMN_LETTERS {
            write!(f, "| {letter:^4} ")?;
        }
        writeln!(f, "|")?;
        for _ in 0..GRID_SIZE {
            write!(f, "|------")?;
        }
        writeln!(f, "|")?;
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                match self.cell(row, col) {
                    Some(value) => write!(f, "| {value:^4} ")?,
                    None => write!(f, "| Free ")?,
                }
            }
            writeln!(f, "|")?;
        }
        Ok(())
    }
}
