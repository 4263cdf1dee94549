//! Per-player data storage.
//!
//! `PlayerMap` holds exactly one value per [`Player`] with O(1) access,
//! indexed by `Player`. It carries placement counts, live-cell scores and
//! neighbor tallies.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::cell::Player;

/// One value per player.
///
/// ## Example
///
/// ```
/// use duel_of_life::core::{Player, PlayerMap};
///
/// let mut placed: PlayerMap<u8> = PlayerMap::default();
/// placed[Player::Two] += 1;
///
/// assert_eq!(placed[Player::One], 0);
/// assert_eq!(placed[Player::Two], 1);
/// assert_eq!(placed.pair(), (0, 1));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(Player) -> T) -> Self {
        Self {
            data: [factory(Player::One), factory(Player::Two)],
        }
    }

    /// Create a map from explicit values for player one and player two.
    pub const fn from_pair(player1: T, player2: T) -> Self {
        Self {
            data: [player1, player2],
        }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    #[must_use]
    pub fn get(&self, player: Player) -> &T {
        &self.data[player.index()]
    }

    pub fn get_mut(&mut self, player: Player) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (Player, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Player, &T)> {
        Player::ALL.into_iter().zip(self.data.iter())
    }

    /// Values as a `(player1, player2)` tuple.
    #[must_use]
    pub fn pair(&self) -> (T, T)
    where
        T: Copy,
    {
        (self.data[0], self.data[1])
    }
}

impl<T> Index<Player> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: Player) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<Player> for PlayerMap<T> {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        self.get_mut(player)
    }
}
