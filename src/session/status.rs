//! Status line for the presentation layer.

use serde::{Deserialize, Serialize};

use crate::core::{GameResult, Player, PlayerMap};

/// What the status label should say.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// Setup, waiting on this player.
    Turn(Player),
    /// Setup complete, waiting for `start()`.
    Ready,
    Running,
    Stopped,
    Over(GameResult),
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Turn(player) => write!(f, "Player {player}'s turn"),
            Status::Ready => f.write_str("Simulation ready"),
            Status::Running => f.write_str("Simulation running..."),
            Status::Stopped => f.write_str("Simulation stopped"),
            Status::Over(GameResult::Winner(player)) => write!(f, "Player {player} wins!"),
            Status::Over(GameResult::Draw) => f.write_str("Draw!"),
        }
    }
}

/// Live-cell counts rendered as the score label, `Red: N   Blue: N`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreLine(pub PlayerMap<usize>);

impl std::fmt::Display for ScoreLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (red, blue) = self.0.pair();
        write!(f, "Red: {red}   Blue: {blue}")
    }
}
