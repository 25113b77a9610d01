//! Random card generation.
//!
//! A card is drawn by shuffling the full call order `1..=max_num` and keeping
//! the first 24 entries in card-position order. The prefix of a uniform
//! permutation is a uniform sample without replacement, so the values past
//! position 24 never influence the card.

use super::{Card, CARD_CELLS};
use crate::core::{EngineError, SimRng};

/// Draws cards for a game with `max_num` distinct call values.
#[derive(Clone, Debug)]
pub struct CardGenerator {
    max_num: u32,
}

impl CardGenerator {
    /// Create a generator.
    ///
    /// Fails with [`EngineError::InvalidConfiguration`] when `max_num` is
    /// below the number of cells on a card.
    pub fn new(max_num: u32) -> Result<Self, EngineError> {
        if (max_num as usize) < CARD_CELLS {
            return Err(EngineError::InvalidConfiguration { max_num });
        }
        Ok(Self { max_num })
    }

    /// Number of distinct call values.
    #[must_use]
    pub fn max_num(&self) -> u32 {
        self.max_num
    }

    /// Draw one card.
    pub fn generate(&self, rng: &mut SimRng) -> Card {
        let mut order: Vec<u32> = (1..=self.max_num).collect();
        rng.shuffle(&mut order);

        let mut values = [0u32; CARD_CELLS];
        values.copy_from_slice(&order[..CARD_CELLS]);
        Card::from_array_unchecked(values)
    }
}

/// Draw one card from `rng`.
pub fn generate_card(max_num: u32, rng: &mut SimRng) -> Result<Card, EngineError> {
    Ok(CardGenerator::new(max_num)?.generate(rng))
}

/// Draw one card from a fresh RNG seeded with `seed`.
///
/// ```
/// use bingo_sim::generate_card_seeded;
///
/// let a = generate_card_seeded(75, 7).unwrap();
/// let b = generate_card_seeded(75, 7).unwrap();
/// assert_eq!(a, b);
/// ```
pub fn generate_card_seeded(max_num: u32, seed: u64) -> Result<Card, EngineError> {
    generate_card(max_num, &mut SimRng::new(seed))
}
