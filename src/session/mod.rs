//! The public game interface consumed by a presentation layer.
//!
//! `GameSession` composes the grid, turn controller, undo history and
//! evolution engine into the `Setup -> Simulating -> Finished` lifecycle.
//! The presentation layer sends commands, reads state back for rendering
//! and drives `tick()` on a timer.

pub mod game;
pub mod status;

pub use game::{GameSession, TickReport};
pub use status::{ScoreLine, Status};
