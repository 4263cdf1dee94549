//! Generation evolution: survival, birth and contested-birth rules.
//!
//! - `engine`: `EvolutionEngine::step`, a pure double-buffered step
//! - `tie_break`: `TieBreaker` policies for 2-2 contested births

pub mod engine;
pub mod tie_break;

pub use engine::{EvolutionEngine, Fate};
pub use tie_break::{Favor, TieBreaker};
