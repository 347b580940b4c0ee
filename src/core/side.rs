//! Side identification and per-side data storage.
//!
//! ## Side
//!
//! The duel always has exactly two seats: the human (`User`) and the
//! automated opponent (`Opponent`).
//!
//! ## PerSide
//!
//! Two-slot storage indexed by `Side`. The match controller keeps both
//! `Player` records in one of these so the engine can address either seat
//! uniformly.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two seats in a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    User,
    Opponent,
}

impl Side {
    /// The seat across the table.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Side::User => Side::Opponent,
            Side::Opponent => Side::User,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::User => write!(f, "user"),
            Side::Opponent => write!(f, "opponent"),
        }
    }
}

/// Per-side data storage.
///
/// ## Example
///
/// ```
/// use plus_minus::core::{PerSide, Side};
///
/// let mut scores: PerSide<u32> = PerSide::new(0, 0);
/// scores[Side::User] += 1;
///
/// assert_eq!(scores[Side::User], 1);
/// assert_eq!(scores[Side::Opponent], 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerSide<T> {
    user: T,
    opponent: T,
}

impl<T> PerSide<T> {
    /// Create with explicit values for both seats.
    pub fn new(user: T, opponent: T) -> Self {
        Self { user, opponent }
    }

    /// Get a reference to a seat's data.
    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        match side {
            Side::User => &self.user,
            Side::Opponent => &self.opponent,
        }
    }

    /// Get a mutable reference to a seat's data.
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        match side {
            Side::User => &mut self.user,
            Side::Opponent => &mut self.opponent,
        }
    }

    /// Iterate over (Side, &T) pairs, user first.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        [(Side::User, &self.user), (Side::Opponent, &self.opponent)].into_iter()
    }
}

impl<T> Index<Side> for PerSide<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for PerSide<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        self.get_mut(side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other() {
        assert_eq!(Side::User.other(), Side::Opponent);
        assert_eq!(Side::Opponent.other(), Side::User);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Side::User), "user");
        assert_eq!(format!("{}", Side::Opponent), "opponent");
    }

    #[test]
    fn test_per_side_indexing() {
        let mut map = PerSide::new("a", "b");

        assert_eq!(map[Side::User], "a");
        assert_eq!(map[Side::Opponent], "b");

        map[Side::Opponent] = "c";
        assert_eq!(map[Side::Opponent], "c");
    }

    #[test]
    fn test_per_side_iter() {
        let map = PerSide::new(1, 2);
        let pairs: Vec<_> = map.iter().collect();

        assert_eq!(pairs, vec![(Side::User, &1), (Side::Opponent, &2)]);
    }

    #[test]
    fn test_serialization() {
        let map = PerSide::new(3u32, 7u32);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: PerSide<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
