//! Winning line definitions.
//!
//! A line is a row, column or diagonal. The Free cell is always marked, so it
//! is left out of every line that crosses it: the middle row, the middle
//! column and both diagonals have 4 cells, the other lines have 5.
//!
//! The table is derived once from the grid layout and shared read-only.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::grid::{card_position, grid_index, COLUMN_LETTERS, GRID_SIZE};

/// Number of winning lines on a card.
pub const LINE_COUNT: usize = 2 * GRID_SIZE + 2;

/// Identifies one winning line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineId {
    /// Row, 0-based from the top.
    Row(u8),
    /// Column, 0-based from the left (B = 0).
    Column(u8),
    /// Top-left to bottom-right.
    MainDiagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

impl std::fmt::Display for LineId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LineId::Row(r) => write!(f, "row {}", r + 1),
            LineId::Column(c) => write!(f, "column {}", COLUMN_LETTERS[*c as usize]),
            LineId::MainDiagonal => write!(f, "main diagonal"),
            LineId::AntiDiagonal => write!(f, "anti-diagonal"),
        }
    }
}

/// Card positions making up one line, in grid order.
///
/// Deserializing only accepts a definition identical to the table entry for
/// its ID.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawLineDefinition")]
pub struct LineDefinition {
    pub id: LineId,
    positions: SmallVec<[u8; GRID_SIZE]>,
}

#[derive(Deserialize)]
struct RawLineDefinition {
    id: LineId,
    positions: Vec<u8>,
}

impl TryFrom<RawLineDefinition> for LineDefinition {
    type Error = String;

    fn try_from(raw: RawLineDefinition) -> Result<Self, Self::Error> {
        let line = line_table()
            .get(raw.id)
            .ok_or_else(|| format!("no winning line {:?}", raw.id))?;
        if line.positions() != raw.positions.as_slice() {
            return Err(format!(
                "{} covers positions {:?}, not {:?}",
                line.id,
                line.positions(),
                raw.positions
            ));
        }
        Ok(line.clone())
    }
}

impl LineDefinition {
    /// Build a line from grid cells, dropping the Free cell.
    fn from_cells(id: LineId, cells: impl IntoIterator<Item = (usize, usize)>) -> Self {
        let positions = cells
            .into_iter()
            .filter_map(|(row, col)| card_position(grid_index(row, col)))
            .map(|p| p as u8)
            .collect();
        Self { id, positions }
    }

    /// Card positions of this line.
    #[must_use]
    pub fn positions(&self) -> &[u8] {
        &self.positions
    }

    /// Number of calls needed to complete the line.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Always false; every line has at least 4 cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// The 12 winning lines: rows, then columns, then the two diagonals.
#[derive(Clone, Debug)]
pub struct LineTable {
    lines: Vec<LineDefinition>,
}

impl LineTable {
    fn derive() -> Self {
        let n = GRID_SIZE;
        let mut lines = Vec::with_capacity(LINE_COUNT);

        for row in 0..n {
            lines.push(LineDefinition::from_cells(
                LineId::Row(row as u8),
                (0..n).map(|col| (row, col)),
            ));
        }
        for col in 0..n {
            lines.push(LineDefinition::from_cells(
                LineId::Column(col as u8),
                (0..n).map(|row| (row, col)),
            ));
        }
        lines.push(LineDefinition::from_cells(
            LineId::MainDiagonal,
            (0..n).map(|i| (i, i)),
        ));
        lines.push(LineDefinition::from_cells(
            LineId::AntiDiagonal,
            (0..n).map(|i| (i, n - 1 - i)),
        ));

        Self { lines }
    }

    /// All lines in table order.
    #[must_use]
    pub fn lines(&self) -> &[LineDefinition] {
        &self.lines
    }

    /// Look up a line by ID.
    #[must_use]
    pub fn get(&self, id: LineId) -> Option<&LineDefinition> {
        self.lines.iter().find(|line| line.id == id)
    }

    /// Iterate over lines in table order.
    pub fn iter(&self) -> std::slice::Iter<'_, LineDefinition> {
        self.lines.iter()
    }
}

impl<'a> IntoIterator for &'a LineTable {
    type Item = &'a LineDefinition;
    type IntoIter = std::slice::Iter<'a, LineDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

static LINE_TABLE: LazyLock<LineTable> = LazyLock::new(LineTable::derive);

/// The shared line table.
#[must_use]
pub fn line_table() -> &'static LineTable {
    &LINE_TABLE
}
