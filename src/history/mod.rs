//! Undo history for the setup phase.
//!
//! Each accepted placement pushes a [`HistoryEntry`]: the grid as it was
//! before the move, plus who made the move and where. Undo pops entries in
//! LIFO order. Simulation generations are never recorded.

pub mod stack;

pub use stack::{HistoryEntry, HistoryStack};
