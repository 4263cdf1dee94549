//! The game session state machine.
//!
//! ## Lifecycle
//!
//! ```text
//! Setup --start()--> Simulating(Running) <--stop()/start()--> Simulating(Paused)
//!                         |
//!                       tick() eliminates a colour
//!                         v
//!                      Finished
//! ```
//!
//! `reset()` returns to a fresh `Setup` from any phase.
//!
//! ## Cadence
//!
//! The session never sleeps or spawns anything. The presentation layer
//! calls `tick()` every [`TICK_INTERVAL`](crate::core::TICK_INTERVAL) while
//! the phase is `Simulating(Running)` and stops calling it after `stop()` or
//! once the game is finished.
//!
//! ## Rejections
//!
//! Every command returns `Result<_, GameError>`. An `Err` leaves the session
//! untouched.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::core::{
    Cadence, Cell, GameError, GamePhase, GameResult, GameRng, GameRngState, Grid, Player,
    PlayerMap, SessionConfig,
};
use crate::evolution::EvolutionEngine;
use crate::history::{HistoryEntry, HistoryStack};
use crate::turns::{Placement, TurnController};

use super::status::{ScoreLine, Status};

/// Outcome of one generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickReport {
    /// Generations applied since `start()`, including this one.
    pub generation: u64,
    /// Live cells per player after this generation.
    pub scores: PlayerMap<usize>,
    /// Set when this generation ended the game.
    pub result: Option<GameResult>,
}

/// A two-player game from first placement to elimination.
///
/// ## Example
///
/// ```
/// use duel_of_life::{GameSession, SessionConfig, Player, Cell};
///
/// let mut session = GameSession::new(SessionConfig::default().with_seed(1));
/// session.place(5, 5).unwrap();
///
/// assert_eq!(session.cell(5, 5), Ok(Cell::Player1));
/// assert_eq!(session.current_player(), Player::Two);
/// assert!(session.place(5, 5).is_err());
/// ```
#[derive(Clone, Debug)]
pub struct GameSession {
    config: SessionConfig,
    grid: Grid,
    history: HistoryStack,
    turns: TurnController,
    phase: GamePhase,
    rng: GameRng,
    generation: u64,
    scores: PlayerMap<usize>,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl GameSession {
    /// Fresh session in `Setup` with an empty grid.
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        let rng = GameRng::from_seed_option(config.seed);
        debug!(seed = rng.seed(), "new session");
        Self {
            grid: Grid::new(),
            history: HistoryStack::new(),
            turns: TurnController::new(),
            phase: GamePhase::Setup,
            rng,
            generation: 0,
            scores: PlayerMap::default(),
            config,
        }
    }

    /// Session that skips setup and starts simulating `grid` directly.
    ///
    /// Both players count as having placed every cell, the history is
    /// empty and the cadence is running.
    #[must_use]
    pub fn from_position(grid: Grid, config: SessionConfig) -> Self {
        let mut session = Self::new(config);
        session.turns = TurnController::completed();
        session.scores = grid.count_all();
        session.grid = grid;
        session.phase = GamePhase::Simulating(Cadence::Running);
        session
    }

    // === Queries ===

    /// Cell at (row, col).
    pub fn cell(&self, row: usize, col: usize) -> Result<Cell, GameError> {
        self.grid.get(row, col)
    }

    /// Read-only grid for rendering.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Player who places next during setup.
    #[must_use]
    pub fn current_player(&self) -> Player {
        self.turns.current_player()
    }

    /// Cells placed per player during setup.
    #[must_use]
    pub fn counts(&self) -> PlayerMap<u8> {
        self.turns.counts()
    }

    /// Live cells per player on the grid.
    #[must_use]
    pub fn scores(&self) -> PlayerMap<usize> {
        self.scores
    }

    /// Result of a finished game.
    pub fn winner(&self) -> Result<GameResult, GameError> {
        self.phase.result().ok_or(GameError::WrongPhase {
            operation: "report a winner",
            phase: self.phase,
        })
    }

    /// Generations applied since the simulation started.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// True when `undo()` would succeed.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.phase.is_setup() && !self.history.is_empty()
    }

    /// Placements recorded for undo, oldest first.
    #[must_use]
    pub fn history(&self) -> &HistoryStack {
        &self.history
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// RNG position, for replaying the rest of a simulation.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Status line text for the current state.
    #[must_use]
    pub fn status(&self) -> Status {
        match self.phase {
            GamePhase::Setup if self.turns.is_complete() => Status::Ready,
            GamePhase::Setup => Status::Turn(self.turns.current_player()),
            GamePhase::Simulating(Cadence::Running) => Status::Running,
            GamePhase::Simulating(Cadence::Paused) => Status::Stopped,
            GamePhase::Finished(result) => Status::Over(result),
        }
    }

    /// Score label text, e.g. `Red: 8   Blue: 8`.
    #[must_use]
    pub fn score_line(&self) -> ScoreLine {
        ScoreLine(self.scores)
    }

    // === Commands ===

    fn require_setup(&self, operation: &'static str) -> Result<(), GameError> {
        if self.phase.is_setup() {
            Ok(())
        } else {
            Err(GameError::WrongPhase {
                operation,
                phase: self.phase,
            })
        }
    }

    /// Place the current player's cell at (row, col).
    #[instrument(skip(self), err(level = "debug"))]
    pub fn place(&mut self, row: usize, col: usize) -> Result<Placement, GameError> {
        self.require_setup("place a cell")?;

        let snapshot = self.grid.snapshot();
        let placement = self.turns.attempt_place(row, col, &mut self.grid)?;
        self.history.push(HistoryEntry {
            snapshot,
            player: placement.player,
            row,
            col,
        });
        self.scores = self.grid.count_all();

        debug!(
            player = %placement.player,
            next = %placement.next_player,
            complete = placement.complete,
            "placed"
        );
        if placement.complete {
            info!("all cells placed, simulation ready");
        }
        Ok(placement)
    }

    /// Take back the most recent placement.
    ///
    /// Returns the undone entry. The turn passes back to the player who made
    /// that placement.
    #[instrument(skip(self), err(level = "debug"))]
    pub fn undo(&mut self) -> Result<HistoryEntry, GameError> {
        self.require_setup("undo")?;

        let entry = self.history.pop()?;
        self.turns.undo_last(&entry.snapshot, entry.player, &mut self.grid);
        self.scores = self.grid.count_all();

        debug!(player = %entry.player, row = entry.row, col = entry.col, "undone");
        Ok(entry)
    }

    /// Begin the simulation, or resume it after `stop()`.
    #[instrument(skip(self), err(level = "debug"))]
    pub fn start(&mut self) -> Result<(), GameError> {
        match self.phase {
            GamePhase::Setup => {
                if !self.turns.is_complete() {
                    let (player1, player2) = self.turns.counts().pair();
                    return Err(GameError::IncompletePlacement { player1, player2 });
                }
                info!("simulation started");
            }
            GamePhase::Simulating(Cadence::Paused) => {
                info!(generation = self.generation, "simulation resumed");
            }
            phase => {
                return Err(GameError::WrongPhase {
                    operation: "start",
                    phase,
                })
            }
        }
        self.phase = GamePhase::Simulating(Cadence::Running);
        Ok(())
    }

    /// Halt the cadence. The grid is kept; `start()` resumes.
    #[instrument(skip(self), err(level = "debug"))]
    pub fn stop(&mut self) -> Result<(), GameError> {
        match self.phase {
            GamePhase::Simulating(_) => {
                self.phase = GamePhase::Simulating(Cadence::Paused);
                info!(generation = self.generation, "simulation stopped");
                Ok(())
            }
            phase => Err(GameError::WrongPhase {
                operation: "stop",
                phase,
            }),
        }
    }

    /// Advance one generation and check for elimination.
    #[instrument(skip(self), err(level = "debug"))]
    pub fn tick(&mut self) -> Result<TickReport, GameError> {
        if !self.phase.is_running() {
            return Err(GameError::WrongPhase {
                operation: "advance a generation",
                phase: self.phase,
            });
        }

        self.grid = EvolutionEngine::step(&self.grid, &mut self.rng);
        self.generation = self.generation.saturating_add(1);
        self.scores = self.grid.count_all();

        let result = GameResult::from_scores(self.scores);
        if let Some(result) = result {
            self.phase = GamePhase::Finished(result);
            info!(generation = self.generation, ?result, "game over");
        } else {
            let (red, blue) = self.scores.pair();
            debug!(generation = self.generation, red, blue, "generation");
        }

        Ok(TickReport {
            generation: self.generation,
            scores: self.scores,
            result,
        })
    }

    /// Clear everything back to a fresh `Setup`.
    ///
    /// The RNG keeps its stream; it is not reseeded.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.grid.clear();
        self.turns.reset();
        self.history.clear();
        self.phase = GamePhase::Setup;
        self.generation = 0;
        self.scores = PlayerMap::default();
        info!("session reset");
    }
}
