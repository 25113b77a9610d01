//! The fixed 5×5 card layout.
//!
//! Cells are numbered row-major over the 25-cell grid. The centre cell is
//! Free and has no value, so the card stores 24 values: grid indices before
//! the Free cell keep their index, later ones shift down by one.
//!
//! ```text
//! | B  | I  |  N   | G  | O  |
//! |----|----|------|----|----|
//! |  0 |  1 |  2   |  3 |  4 |
//! |  5 |  6 |  7   |  8 |  9 |
//! | 10 | 11 | Free | 12 | 13 |
//! | 14 | 15 | 16   | 17 | 18 |
//! | 19 | 20 | 21   | 22 | 23 |
//! ```

/// Side length of the card.
pub const GRID_SIZE: usize = 5;

/// Cells on the grid, including the Free cell.
pub const GRID_CELLS: usize = GRID_SIZE * GRID_SIZE;

/// Grid index of the Free cell.
pub const FREE_CELL: usize = GRID_CELLS / 2;

/// Cells that carry a value.
pub const CARD_CELLS: usize = GRID_CELLS - 1;

/// Column headers.
pub const COLUMN_LETTERS: [char; GRID_SIZE] = ['B', 'I', 'N', 'G', 'O'];

/// Grid index of the cell at `(row, col)`.
#[must_use]
pub const fn grid_index(row: usize, col: usize) -> usize {
    row * GRID_SIZE + col
}

/// Card position of a grid cell, or `None` for the Free cell.
#[must_use]
pub const fn card_position(grid_index: usize) -> Option<usize> {
    if grid_index < FREE_CELL {
        Some(grid_index)
    } else if grid_index == FREE_CELL {
        None
    } else {
        Some(grid_index - 1)
    }
}

/// Grid index of a card position.
#[must_use]
pub const fn grid_index_of(position: usize) -> usize {
    if position < FREE_CELL {
        position
    } else {
        position + 1
    }
}
