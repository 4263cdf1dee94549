//! Rejection reasons for engine commands.
//!
//! Every variant is recoverable. A command that returns an error has left
//! the session exactly as it found it, so the caller may retry at once.

use super::cell::Player;
use super::config::MAX_PLACEMENTS;
use super::phase::GamePhase;

/// Why the engine refused a command.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// Coordinate outside the grid. Indicates a caller bug.
    #[display("({row}, {col}) is outside the grid")]
    OutOfBounds { row: usize, col: usize },

    /// Target square already holds a cell.
    #[display("({row}, {col}) is already occupied")]
    CellOccupied { row: usize, col: usize },

    /// The player has used every placement.
    #[display("Player {_0} has no placements left")]
    PlacementLimitReached(Player),

    /// Command not allowed in the current phase.
    #[display("Cannot {operation} while {phase}")]
    WrongPhase {
        operation: &'static str,
        phase: GamePhase,
    },

    /// Undo with nothing to undo.
    #[display("Nothing to undo")]
    EmptyHistory,

    /// Start before both players finished placing.
    #[display("Each player must place {} cells", MAX_PLACEMENTS)]
    IncompletePlacement { player1: u8, player2: u8 },
}

impl std::error::Error for GameError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            GameError::OutOfBounds { row: 12, col: 0 }.to_string(),
            "(12, 0) is outside the grid"
        );
        assert_eq!(
            GameError::PlacementLimitReached(Player::Two).to_string(),
            "Player BLUE has no placements left"
        );
        assert_eq!(
            GameError::IncompletePlacement { player1: 8, player2: 3 }.to_string(),
            "Each player must place 8 cells"
        );
        assert_eq!(
            GameError::WrongPhase {
                operation: "undo",
                phase: GamePhase::Setup,
            }
            .to_string(),
            "Cannot undo while in setup"
        );
    }
}
