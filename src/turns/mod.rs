//! Setup-phase turn management: who places next, how many cells each
//! player has left, and placement validation.

pub mod controller;

pub use controller::{Placement, TurnController};
