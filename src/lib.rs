//! # duel-of-life
//!
//! Engine for a two-player variant of Conway's Game of Life.
//!
//! Players alternately place up to eight cells each on a 12x12 grid. The
//! grid then evolves on its own under modified survival and birth rules
//! until one colour has been wiped out.
//!
//! ## Design Principles
//!
//! 1. **Engine only**: no rendering, timers, threads or I/O. A presentation
//!    layer sends commands to a [`GameSession`], renders what it reads back,
//!    and calls [`GameSession::tick`] on its own timer.
//!
//! 2. **Value-type state**: the grid is a plain `Copy` value. Undo
//!    snapshots can never alias the live grid.
//!
//! 3. **Reproducible randomness**: contested births draw from a seedable
//!    [`GameRng`], so whole simulations replay from a seed.
//!
//! ## Modules
//!
//! - `core`: cells, players, grid, phases, errors, RNG, configuration
//! - `history`: undo stack of pre-move snapshots
//! - `turns`: placement turns and validation
//! - `evolution`: the generation step and contested-birth policies
//! - `session`: the lifecycle state machine, status line and score label

pub mod core;
pub mod history;
pub mod turns;
pub mod evolution;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Cadence, Cell, GameError, GamePhase, GameResult, GameRng, GameRngState, Grid, Player,
    PlayerMap, SessionConfig, Snapshot, GRID_SIZE, MAX_PLACEMENTS, RULES, TICK_INTERVAL,
};

pub use crate::history::{HistoryEntry, HistoryStack};

pub use crate::turns::{Placement, TurnController};

pub use crate::evolution::{EvolutionEngine, Fate, Favor, TieBreaker};

pub use crate::session::{GameSession, ScoreLine, Status, TickReport};
