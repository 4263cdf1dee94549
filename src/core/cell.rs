//! Cell values and the two players.
//!
//! Both are closed enumerations: a grid cell is either empty or owned by
//! exactly one of the two players, and no other value ever exists.

use serde::{Deserialize, Serialize};

/// One of the two competing players.
///
/// Player one plays RED and moves first by default; player two plays BLUE.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// RED.
    One,
    /// BLUE.
    Two,
}

impl Player {
    /// Both players, in seat order.
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// The cell value this player paints.
    #[must_use]
    pub const fn cell(self) -> Cell {
        match self {
            Player::One => Cell::Player1,
            Player::Two => Cell::Player2,
        }
    }

    /// Seat index (0 or 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    /// Colour name shown to the players.
    #[must_use]
    pub const fn color_name(self) -> &'static str {
        match self {
            Player::One => "RED",
            Player::Two => "BLUE",
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.color_name())
    }
}

/// Contents of a single grid square.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Player1,
    Player2,
}

impl Cell {
    /// The owning player, or `None` for an empty cell.
    #[must_use]
    pub const fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Player1 => Some(Player::One),
            Cell::Player2 => Some(Player::Two),
        }
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Single-character glyph used by the text grid format.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Player1 => 'R',
            Cell::Player2 => 'B',
        }
    }

    /// Parse a glyph produced by [`Cell::glyph`].
    #[must_use]
    pub const fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            '.' => Some(Cell::Empty),
            'R' => Some(Cell::Player1),
            'B' => Some(Cell::Player2),
            _ => None,
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        player.cell()
    }
}
