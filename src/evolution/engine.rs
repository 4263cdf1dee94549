//! One generation of two-colour Life.
//!
//! ## Rules
//!
//! For a cell owned by player P, with `same` neighbors of P's colour and
//! `diff` of the other colour:
//! - dies if `same <= 1`, `same >= 4` or `diff > same`
//! - otherwise survives unchanged
//!
//! For an empty cell, with `p1` and `p2` neighbor counts:
//! - `p1 == 3 && p2 != 3`: born as player one
//! - `p2 == 3 && p1 != 3`: born as player two
//! - `p1 == 2 && p2 == 2`: contested, colour from the [`TieBreaker`]
//! - otherwise stays empty
//!
//! Every cell reads the frozen current grid and writes a fresh one, so no
//! update within a generation sees another.

use crate::core::{Cell, Grid, PlayerMap, GRID_SIZE};

use super::tie_break::TieBreaker;

/// What a single cell becomes next generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fate {
    /// Decided by the counts alone.
    Settled(Cell),
    /// Empty cell with a 2-2 tie; needs a tie-break.
    Contested,
}

/// Stateless generation stepper.
#[derive(Clone, Copy, Debug, Default)]
pub struct EvolutionEngine;

impl EvolutionEngine {
    /// Apply the rules to one cell given its neighbor counts.
    #[must_use]
    pub fn fate(cell: Cell, neighbors: PlayerMap<usize>) -> Fate {
        match cell.owner() {
            Some(owner) => {
                let same = neighbors[owner];
                let diff = neighbors[owner.opponent()];
                if same <= 1 || same >= 4 || diff > same {
                    Fate::Settled(Cell::Empty)
                } else {
                    Fate::Settled(cell)
                }
            }
            None => match neighbors.pair() {
                (3, p2) if p2 != 3 => Fate::Settled(Cell::Player1),
                (p1, 3) if p1 != 3 => Fate::Settled(Cell::Player2),
                (2, 2) => Fate::Contested,
                _ => Fate::Settled(Cell::Empty),
            },
        }
    }

    /// Compute the next generation.
    ///
    /// `grid` is not modified. The tie-breaker is consulted once for each
    /// contested cell, in row-major order.
    #[must_use]
    pub fn step<T: TieBreaker + ?Sized>(grid: &Grid, tie_breaker: &mut T) -> Grid {
        let mut next = Grid::new();
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let cell = grid.rows()[row][col];
                let born = match Self::fate(cell, grid.tally_neighbors(row, col)) {
                    Fate::Settled(cell) => cell,
                    Fate::Contested => tie_breaker.break_tie(row, col).cell(),
                };
                next.write(row, col, born);
            }
        }
        next
    }

    /// Advance `generations` steps.
    #[must_use]
    pub fn run<T: TieBreaker + ?Sized>(
        grid: &Grid,
        tie_breaker: &mut T,
        generations: usize,
    ) -> Grid {
        (0..generations).fold(*grid, |current, _| Self::step(&current, tie_breaker))
    }
}
