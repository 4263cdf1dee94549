//! Fixed game constants and per-session configuration.
//!
//! Grid size, placement limit and the evolution rules are fixed. A session
//! only configures where its randomness comes from. Player one (RED)
//! always places first, including after a reset.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Side length of the square grid.
pub const GRID_SIZE: usize = 12;

/// Cells each player places during setup.
pub const MAX_PLACEMENTS: u8 = 8;

/// Interval at which the presentation layer should call `tick()`.
///
/// The engine never sleeps or schedules anything itself.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Rules blurb for a help dialog.
pub const RULES: &str = "\
1. Each player gets 8 moves to place cells (RED and BLUE).
2. After setup, the grid evolves automatically.
3. Rules per generation:
   - A cell survives with 2 or 3 neighbours of its own colour,
     unless it is outnumbered by the other colour.
   - An empty cell with exactly 3 neighbours of one colour is born
     in that colour. A 2-2 tie is settled by a coin flip.
   - Any other cell dies.
4. You cannot overwrite an opponent's cell or your own.
5. First player to eliminate all opponent cells wins.
6. Undo takes back the last move before the simulation starts.
7. Restart resets the game.
";

/// Per-session configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Seed for contested-birth coin flips.
    /// `None` draws a fresh seed from OS entropy.
    pub seed: Option<u64>,
}

impl SessionConfig {
    /// Use a fixed seed so simulations are reproducible.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
