//! Cards, the grid layout, line definitions and card generation.

pub mod grid;
pub mod lines;
#[allow(clippy::module_inception)]
pub mod card;
pub mod generator;

pub use grid::{CARD_CELLS, FREE_CELL, GRID_SIZE};
pub use lines::{line_table, LineDefinition, LineId, LineTable, LINE_COUNT};
pub use card::Card;
pub use generator::{generate_card, generate_card_seeded, CardGenerator};
