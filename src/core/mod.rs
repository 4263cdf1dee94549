//! Core engine types: cells, players, grid, phases, errors, RNG, configuration.
//!
//! Everything here is plain data. The rules live in `turns` and
//! `evolution`; the lifecycle lives in `session`.

pub mod cell;
pub mod player;
pub mod grid;
pub mod phase;
pub mod error;
pub mod rng;
pub mod config;

pub use cell::{Cell, Player};
pub use player::PlayerMap;
pub use grid::{Grid, Neighborhood, ParseGridError, Snapshot};
pub use phase::{Cadence, GamePhase, GameResult};
pub use error::GameError;
pub use rng::{GameRng, GameRngState};
pub use config::{SessionConfig, GRID_SIZE, MAX_PLACEMENTS, RULES, TICK_INTERVAL};
