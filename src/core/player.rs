//! Players, position/cell owners, and total maps keyed by them.
//!
//! ## Player and Owner
//!
//! `Owner` is the closed three-valued state of a position or cell:
//! `Empty`, `Player1` or `Player2`. `Player` is the two-valued subset used
//! wherever "empty" makes no sense (whose turn it is, who won).
//!
//! ## PlayerMap and OwnerMap
//!
//! Array-backed maps with an entry for every variant, so lookups never
//! miss and the ownership partition can be checked mechanically.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use crate::topology::Axis;

/// One of the two players. Player 1 always moves first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Player {
    Player1,
    Player2,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::Player1, Player::Player2];

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::Player1 => Player::Player2,
            Player::Player2 => Player::Player1,
        }
    }

    /// The axis this player must connect: Player 1 top to bottom,
    /// Player 2 left to right.
    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Player::Player1 => Axis::Y,
            Player::Player2 => Axis::X,
        }
    }

    /// 0 for Player 1, 1 for Player 2.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::Player1 => 0,
            Player::Player2 => 1,
        }
    }

    /// The player to move after `plies` moves from the start.
    #[must_use]
    pub const fn to_move_after(plies: usize) -> Self {
        if plies % 2 == 0 {
            Player::Player1
        } else {
            Player::Player2
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::Player1 => write!(f, "Player 1"),
            Player::Player2 => write!(f, "Player 2"),
        }
    }
}

/// Occupant of a position or owner of a cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Owner {
    #[default]
    Empty,
    Player1,
    Player2,
}

impl Owner {
    pub const ALL: [Owner; 3] = [Owner::Empty, Owner::Player1, Owner::Player2];

    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Owner::Empty)
    }

    /// The player, if not empty.
    #[must_use]
    pub const fn player(self) -> Option<Player> {
        match self {
            Owner::Empty => None,
            Owner::Player1 => Some(Player::Player1),
            Owner::Player2 => Some(Player::Player2),
        }
    }

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Owner::Empty => 0,
            Owner::Player1 => 1,
            Owner::Player2 => 2,
        }
    }

    /// Compact numeric code: 0 empty, 1 and 2 for the players.
    #[must_use]
    pub const fn code(self) -> i8 {
        self.index() as i8
    }
}

impl From<Player> for Owner {
    fn from(player: Player) -> Self {
        match player {
            Player::Player1 => Owner::Player1,
            Player::Player2 => Owner::Player2,
        }
    }
}

impl From<Option<Player>> for Owner {
    fn from(player: Option<Player>) -> Self {
        player.map_or(Owner::Empty, Owner::from)
    }
}

impl std::fmt::Display for Owner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.player() {
            Some(player) => player.fmt(f),
            None => write!(f, "Empty"),
        }
    }
}

/// Per-player data, one entry for each player.
///
/// ```
/// use conhex::core::{Player, PlayerMap};
///
/// let mut names = PlayerMap::new(|p| p.to_string());
/// assert_eq!(names[Player::Player2], "Player 2");
///
/// names[Player::Player1] = "alice".to_string();
/// assert_eq!(names[Player::Player1], "alice");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(Player) -> T) -> Self {
        Self {
            data: [factory(Player::Player1), factory(Player::Player2)],
        }
    }

    /// Create a map with all entries set to the same value.
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

    /// Iterate over `(Player, &T)` pairs, Player 1 first.
    pub fn iter(&self) -> impl Iterator<Item = (Player, &T)> {
        Player::ALL.into_iter().zip(self.data.iter())
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

/// Per-owner data with an entry for `Empty`, `Player1` and `Player2`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OwnerMap<T> {
    data: [T; 3],
}

impl<T> OwnerMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(Owner) -> T) -> Self {
        Self {
            data: [
                factory(Owner::Empty),
                factory(Owner::Player1),
                factory(Owner::Player2),
            ],
        }
    }

    /// Create a map with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    #[must_use]
    pub fn get(&self, owner: Owner) -> &T {
        &self.data[owner.index()]
    }

    pub fn get_mut(&mut self, owner: Owner) -> &mut T {
        &mut self.data[owner.index()]
    }

    /// Iterate over `(Owner, &T)` pairs, `Empty` first.
    pub fn iter(&self) -> impl Iterator<Item = (Owner, &T)> {
        Owner::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Owner> for OwnerMap<T> {
    type Output = T;

    fn index(&self, owner: Owner) -> &Self::Output {
        self.get(owner)
    }
}

impl<T> IndexMut<Owner> for OwnerMap<T> {
    fn index_mut(&mut self, owner: Owner) -> &mut Self::Output {
        self.get_mut(owner)
    }
}
