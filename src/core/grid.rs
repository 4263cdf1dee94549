//! The playing field: a fixed `GRID_SIZE` x `GRID_SIZE` matrix of cells.
//!
//! ## Grid
//!
//! Plain value type (`Copy`), separate from any rendering. Every public
//! coordinate access is bounds-checked and fails with
//! [`GameError::OutOfBounds`]. Neighborhoods are Moore neighborhoods clipped
//! at the edges; the grid does not wrap.
//!
//! ## Snapshot
//!
//! Immutable copy of a grid used by undo. Because `Grid` is a value type a
//! snapshot can never alias the live grid.
//!
//! ## Text format
//!
//! `Display` and `FromStr` use one line per row with `.` for empty,
//! `R` for player one and `B` for player two.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::str::FromStr;

use super::cell::{Cell, Player};
use super::config::GRID_SIZE;
use super::error::GameError;
use super::player::PlayerMap;

/// Coordinates of the up to eight cells around a square.
pub type Neighborhood = SmallVec<[(usize, usize); 8]>;

const OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Square matrix of cell values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grid {
    cells: [[Cell; GRID_SIZE]; GRID_SIZE],
}

impl Grid {
    /// Create an all-empty grid.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Side length.
    #[must_use]
    pub const fn size(&self) -> usize {
        GRID_SIZE
    }

    fn check(row: usize, col: usize) -> Result<(), GameError> {
        if row < GRID_SIZE && col < GRID_SIZE {
            Ok(())
        } else {
            Err(GameError::OutOfBounds { row, col })
        }
    }

    /// Get the cell at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, GameError> {
        Self::check(row, col)?;
        Ok(self.cells[row][col])
    }

    /// Set the cell at (row, col).
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), GameError> {
        Self::check(row, col)?;
        self.cells[row][col] = cell;
        Ok(())
    }

    /// Unchecked write for callers iterating `0..GRID_SIZE`.
    pub(crate) fn write(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row][col] = cell;
    }

    /// In-grid coordinates of the Moore neighborhood of (row, col).
    pub fn neighbors(&self, row: usize, col: usize) -> Result<Neighborhood, GameError> {
        Self::check(row, col)?;
        Ok(neighborhood(row, col))
    }

    /// Count player one and player two cells around (row, col).
    ///
    /// Squares beyond the edge contribute nothing.
    pub fn count_neighbors(&self, row: usize, col: usize) -> Result<PlayerMap<usize>, GameError> {
        Self::check(row, col)?;
        Ok(self.tally_neighbors(row, col))
    }

    /// Neighbor tally for a coordinate already known to be in bounds.
    pub(crate) fn tally_neighbors(&self, row: usize, col: usize) -> PlayerMap<usize> {
        let mut counts = PlayerMap::default();
        for (r, c) in neighborhood(row, col) {
            if let Some(owner) = self.cells[r][c].owner() {
                counts[owner] += 1;
            }
        }
        counts
    }

    /// Live cells per player over the whole grid.
    #[must_use]
    pub fn count_all(&self) -> PlayerMap<usize> {
        let mut counts = PlayerMap::default();
        for (_, _, cell) in self.iter() {
            if let Some(owner) = cell.owner() {
                counts[owner] += 1;
            }
        }
        counts
    }

    /// Live cells of one player.
    #[must_use]
    pub fn population(&self, player: Player) -> usize {
        self.count_all()[player]
    }

    /// True when no square is occupied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.iter().all(|(_, _, cell)| cell.is_empty())
    }

    /// Reset every square to empty.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Iterate over `(row, col, cell)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells.iter().enumerate().flat_map(|(r, row)| {
            row.iter().enumerate().map(move |(c, &cell)| (r, c, cell))
        })
    }

    /// Rows for rendering.
    #[must_use]
    pub fn rows(&self) -> &[[Cell; GRID_SIZE]; GRID_SIZE] {
        &self.cells
    }

    /// Take an immutable copy for the undo history.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot(*self)
    }

    /// Overwrite this grid with a snapshot's contents.
    pub fn restore(&mut self, snapshot: &Snapshot) {
        *self = snapshot.0;
    }
}

fn neighborhood(row: usize, col: usize) -> Neighborhood {
    OFFSETS
        .iter()
        .filter_map(|&(dr, dc)| {
            let r = row.checked_add_signed(dr)?;
            let c = col.checked_add_signed(dc)?;
            (r < GRID_SIZE && c < GRID_SIZE).then_some((r, c))
        })
        .collect()
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.cells {
            let line: String = row.iter().map(|cell| cell.glyph()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Failure to parse the text grid format.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ParseGridError {
    #[display("expected {} rows, found {}", GRID_SIZE, _0)]
    RowCount(usize),

    #[display("row {}: expected {} cells, found {}", row, GRID_SIZE, len)]
    RowLength { row: usize, len: usize },

    #[display("row {row}, column {col}: unknown cell '{glyph}'")]
    UnknownGlyph { row: usize, col: usize, glyph: char },
}

impl std::error::Error for ParseGridError {}

impl FromStr for Grid {
    type Err = ParseGridError;

    /// Parse the `Display` format. Blank lines and surrounding whitespace
    /// are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if lines.len() != GRID_SIZE {
            return Err(ParseGridError::RowCount(lines.len()));
        }

        let mut grid = Grid::new();
        for (row, line) in lines.iter().enumerate() {
            let len = line.chars().count();
            if len != GRID_SIZE {
                return Err(ParseGridError::RowLength { row, len });
            }
            for (col, glyph) in line.chars().enumerate() {
                grid.cells[row][col] = Cell::from_glyph(glyph)
                    .ok_or(ParseGridError::UnknownGlyph { row, col, glyph })?;
            }
        }
        Ok(grid)
    }
}

/// Frozen copy of a full grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Snapshot(Grid);

impl Snapshot {
    /// Read-only view of the captured grid.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.0
    }
}
