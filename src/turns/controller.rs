//! Placement turns during setup.
//!
//! Players alternate strictly. Each may place up to `MAX_PLACEMENTS`
//! cells. Once both have used every placement the turn stops advancing and
//! the session is ready to start.

use serde::{Deserialize, Serialize};

use crate::core::{GameError, Grid, Player, PlayerMap, Snapshot, MAX_PLACEMENTS};

/// An accepted placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    /// Who placed the cell.
    pub player: Player,
    pub row: usize,
    pub col: usize,
    /// Whose turn it is now.
    pub next_player: Player,
    /// Both players have placed every cell.
    pub complete: bool,
}

/// Whose turn it is and how many cells each player has placed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnController {
    current: Player,
    placed: PlayerMap<u8>,
}

impl Default for TurnController {
    fn default() -> Self {
        Self::new()
    }
}

impl TurnController {
    /// Fresh controller with player one to move.
    #[must_use]
    pub fn new() -> Self {
        Self {
            current: Player::One,
            placed: PlayerMap::default(),
        }
    }

    /// Controller with every placement already used.
    ///
    /// Used when a session starts from an arbitrary position.
    #[must_use]
    pub fn completed() -> Self {
        Self {
            current: Player::One,
            placed: PlayerMap::with_value(MAX_PLACEMENTS),
        }
    }

    #[must_use]
    pub fn current_player(&self) -> Player {
        self.current
    }

    /// Cells placed so far by `player`.
    #[must_use]
    pub fn placed(&self, player: Player) -> u8 {
        self.placed[player]
    }

    /// Cells placed so far by both players.
    #[must_use]
    pub fn counts(&self) -> PlayerMap<u8> {
        self.placed
    }

    /// Placements `player` still has.
    #[must_use]
    pub fn remaining(&self, player: Player) -> u8 {
        MAX_PLACEMENTS.saturating_sub(self.placed[player])
    }

    /// Both players have placed `MAX_PLACEMENTS` cells.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.placed.iter().all(|(_, &n)| n == MAX_PLACEMENTS)
    }

    /// Check a placement for the current player without applying it.
    pub fn validate(&self, row: usize, col: usize, grid: &Grid) -> Result<(), GameError> {
        if !grid.get(row, col)?.is_empty() {
            return Err(GameError::CellOccupied { row, col });
        }
        if self.placed[self.current] >= MAX_PLACEMENTS {
            return Err(GameError::PlacementLimitReached(self.current));
        }
        Ok(())
    }

    /// Place the current player's cell at (row, col).
    ///
    /// On success the grid holds the new cell, the player's count went up
    /// by one and the turn passed to the opponent, unless both players are
    /// now done. On error nothing changed.
    pub fn attempt_place(
        &mut self,
        row: usize,
        col: usize,
        grid: &mut Grid,
    ) -> Result<Placement, GameError> {
        self.validate(row, col, grid)?;

        let player = self.current;
        grid.set(row, col, player.cell())?;
        self.placed[player] += 1;

        let complete = self.is_complete();
        if !complete {
            self.current = player.opponent();
        }

        Ok(Placement {
            player,
            row,
            col,
            next_player: self.current,
            complete,
        })
    }

    /// Take back a placement made by `mover`.
    ///
    /// Restores the grid from `snapshot`, gives `mover` the placement back
    /// and hands them the turn. Attribution comes from the caller rather
    /// than the turn order, so undoing the final placement (after which
    /// the turn did not advance) credits the right player.
    pub fn undo_last(&mut self, snapshot: &Snapshot, mover: Player, grid: &mut Grid) {
        grid.restore(snapshot);
        self.placed[mover] = self.placed[mover].saturating_sub(1);
        self.current = mover;
    }

    /// Back to zero placements with player one to move.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Cell;

    #[test]
    fn test_alternates() {
        let mut turns = TurnController::default();
        let mut grid = Grid::new();

        let first = turns.attempt_place(0, 0, &mut grid).unwrap();
        assert_eq!(first.player, Player::One);
        assert_eq!(first.next_player, Player::Two);
        assert!(!first.complete);

        let second = turns.attempt_place(0, 1, &mut grid).unwrap();
        assert_eq!(second.player, Player::Two);
        assert_eq!(turns.current_player(), Player::One);

        assert_eq!(grid.get(0, 0), Ok(Cell::Player1));
        assert_eq!(grid.get(0, 1), Ok(Cell::Player2));
        assert_eq!(turns.counts().pair(), (1, 1));
    }

    #[test]
    fn test_occupied_rejected_without_mutation() {
        let mut turns = TurnController::default();
        let mut grid = Grid::new();
        turns.attempt_place(3, 3, &mut grid).unwrap();

        let before = (turns, grid);
        assert_eq!(
            turns.attempt_place(3, 3, &mut grid),
            Err(GameError::CellOccupied { row: 3, col: 3 })
        );
        assert_eq!((turns, grid), before);
    }

    #[test]
    fn test_out_of_bounds() {
        let mut turns = TurnController::default();
        let mut grid = Grid::new();

        assert_eq!(
            turns.attempt_place(0, 12, &mut grid),
            Err(GameError::OutOfBounds { row: 0, col: 12 })
        );
        assert_eq!(turns.counts().pair(), (0, 0));
    }

    #[test]
    fn test_limit_and_completion() {
        let mut turns = TurnController::default();
        let mut grid = Grid::new();

        for i in 0..(2 * MAX_PLACEMENTS as usize) {
            let placement = turns.attempt_place(i / 12, i % 12, &mut grid).unwrap();
            assert_eq!(placement.complete, i == 2 * MAX_PLACEMENTS as usize - 1);
        }

        assert!(turns.is_complete());
        assert_eq!(turns.remaining(Player::One), 0);
        // Player two placed last and keeps the turn.
        assert_eq!(turns.current_player(), Player::Two);
        assert_eq!(
            turns.attempt_place(11, 11, &mut grid),
            Err(GameError::PlacementLimitReached(Player::Two))
        );
    }

    #[test]
    fn test_undo_credits_mover() {
        let mut turns = TurnController::default();
        let mut grid = Grid::new();

        let snapshot = grid.snapshot();
        let placement = turns.attempt_place(4, 4, &mut grid).unwrap();
        turns.undo_last(&snapshot, placement.player, &mut grid);

        assert!(grid.is_empty());
        assert_eq!(turns, TurnController::default());
    }

    #[test]
    fn test_undo_final_placement() {
        let mut turns = TurnController::default();
        let mut grid = Grid::new();

        let mut last = None;
        for i in 0..(2 * MAX_PLACEMENTS as usize) {
            let snapshot = grid.snapshot();
            let placement = turns.attempt_place(i / 12, i % 12, &mut grid).unwrap();
            last = Some((snapshot, placement.player));
        }

        let (snapshot, mover) = last.unwrap();
        assert_eq!(mover, Player::Two);
        turns.undo_last(&snapshot, mover, &mut grid);

        assert_eq!(turns.counts().pair(), (MAX_PLACEMENTS, MAX_PLACEMENTS - 1));
        assert_eq!(turns.current_player(), Player::Two);
        assert!(!turns.is_complete());
    }

    #[test]
    fn test_reset_gives_player_one_the_turn() {
        let mut turns = TurnController::new();
        let mut grid = Grid::new();
        turns.attempt_place(0, 0, &mut grid).unwrap();
        assert_eq!(turns.current_player(), Player::Two);

        turns.reset();

        assert_eq!(turns.current_player(), Player::One);
        assert_eq!(turns.counts().pair(), (0, 0));
        assert_eq!(turns.attempt_place(1, 1, &mut grid).unwrap().player, Player::One);
    }
}
