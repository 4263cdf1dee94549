//! Game lifecycle phases and results.

use serde::{Deserialize, Serialize};

use super::cell::Player;
use super::player::PlayerMap;

/// Whether the automatic generation cadence is live.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cadence {
    /// `tick()` advances the grid.
    Running,
    /// Halted by `stop()`; `start()` resumes.
    Paused,
}

/// Where a session is in its lifecycle.
///
/// `Setup -> Simulating -> Finished`, and `reset()` from anywhere back to
/// `Setup`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// Players take turns placing cells.
    Setup,
    /// The grid evolves on each tick.
    Simulating(Cadence),
    /// Terminal. At least one colour has been wiped out.
    Finished(GameResult),
}

impl GamePhase {
    #[must_use]
    pub fn is_setup(self) -> bool {
        matches!(self, GamePhase::Setup)
    }

    #[must_use]
    pub fn is_running(self) -> bool {
        matches!(self, GamePhase::Simulating(Cadence::Running))
    }

    /// The result, if the game is over.
    #[must_use]
    pub fn result(self) -> Option<GameResult> {
        match self {
            GamePhase::Finished(result) => Some(result),
            _ => None,
        }
    }
}

impl std::fmt::Display for GamePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GamePhase::Setup => f.write_str("in setup"),
            GamePhase::Simulating(Cadence::Running) => f.write_str("simulating"),
            GamePhase::Simulating(Cadence::Paused) => f.write_str("paused"),
            GamePhase::Finished(_) => f.write_str("finished"),
        }
    }
}

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// The other colour was eliminated.
    Winner(Player),
    /// Both colours died out in the same generation.
    Draw,
}

impl GameResult {
    /// Decide the game from live-cell totals.
    ///
    /// Returns `None` while both colours are still on the board.
    #[must_use]
    pub fn from_scores(scores: PlayerMap<usize>) -> Option<Self> {
        match scores.pair() {
            (0, 0) => Some(GameResult::Draw),
            (_, 0) => Some(GameResult::Winner(Player::One)),
            (0, _) => Some(GameResult::Winner(Player::Two)),
            _ => None,
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }

    /// One-line game-over summary for a notification.
    #[must_use]
    pub fn summary(&self) -> String {
        match self {
            GameResult::Winner(p) => format!("All {} cells are gone.", p.opponent()),
            GameResult::Draw => "Both colours died out together.".to_string(),
        }
    }
}
