//! LIFO stack of pre-move snapshots.
//!
//! Backed by an `im::Vector` so cloning a whole session (for example to
//! preview a line of play) stays O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{GameError, Player, Snapshot};

/// One undoable placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Grid before the placement.
    pub snapshot: Snapshot,
    /// Who placed the cell. Undo credits the placement back to this player.
    pub player: Player,
    pub row: usize,
    pub col: usize,
}

/// Stack of [`HistoryEntry`] values.
#[derive(Clone, Debug, Default)]
pub struct HistoryStack {
    entries: Vector<HistoryEntry>,
}

impl HistoryStack {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry.
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push_back(entry);
    }

    /// Remove and return the most recent entry.
    pub fn pop(&mut self) -> Result<HistoryEntry, GameError> {
        self.entries.pop_back().ok_or(GameError::EmptyHistory)
    }

    /// The most recent entry without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&HistoryEntry> {
        self.entries.back()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }
}
