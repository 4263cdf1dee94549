//! Policies for settling contested births.
//!
//! An empty cell with exactly two neighbors of each colour is born in a
//! colour chosen by a `TieBreaker`. Live play flips a fair coin per cell per
//! generation; tests can pin the outcome.

use crate::core::{GameRng, Player};

/// Chooses the colour of a contested birth.
pub trait TieBreaker {
    /// Pick the colour born at (row, col).
    fn break_tie(&mut self, row: usize, col: usize) -> Player;
}

/// Fair coin flip from the session RNG.
impl TieBreaker for GameRng {
    fn break_tie(&mut self, _row: usize, _col: usize) -> Player {
        if self.coin_flip() {
            Player::One
        } else {
            Player::Two
        }
    }
}

/// Always awards contested births to one player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Favor(pub Player);

impl TieBreaker for Favor {
    fn break_tie(&mut self, _row: usize, _col: usize) -> Player {
        self.0
    }
}
