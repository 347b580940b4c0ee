//! The initial deal: one permutation of base values 1-9 per side.
//!
//! Nothing in the core shuffles implicitly. Hosts either pass explicit
//! permutations (reproducible tests, network play) or a seed.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::player::{Player, DECK_SIZE};
use super::rng::SeededRng;
use super::side::PerSide;

/// A rejected deal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum DealError {
    #[error("deck values must be a permutation of 1 through 9")]
    NotAPermutation,
}

/// The base-value layout both decks start from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deal {
    user: [u8; DECK_SIZE],
    opponent: [u8; DECK_SIZE],
}

impl Deal {
    /// Both decks in 1-9 order. Handy for tests and examples.
    #[must_use]
    pub fn sequential() -> Self {
        let values = [1, 2, 3, 4, 5, 6, 7, 8, 9];
        Self {
            user: values,
            opponent: values,
        }
    }

    /// Shuffle both decks from a seed. Same seed, same deal.
    #[must_use]
    pub fn shuffled(seed: u64) -> Self {
        let mut rng = SeededRng::new(seed);
        let mut user = [1, 2, 3, 4, 5, 6, 7, 8, 9];
        let mut opponent = user;
        rng.shuffle(&mut user);
        rng.shuffle(&mut opponent);
        Self { user, opponent }
    }

    /// Caller-supplied layouts, validated.
    pub fn from_values(
        user: [u8; DECK_SIZE],
        opponent: [u8; DECK_SIZE],
    ) -> Result<Self, DealError> {
        if !is_permutation(&user) || !is_permutation(&opponent) {
            return Err(DealError::NotAPermutation);
        }
        Ok(Self { user, opponent })
    }

    /// The user's deal-order values.
    #[must_use]
    pub fn user(&self) -> [u8; DECK_SIZE] {
        self.user
    }

    /// The opponent's deal-order values.
    #[must_use]
    pub fn opponent(&self) -> [u8; DECK_SIZE] {
        self.opponent
    }

    /// Materialize both players.
    pub(crate) fn players(&self) -> PerSide<Player> {
        PerSide::new(
            Player::from_values(self.user),
            Player::from_values(self.opponent),
        )
    }
}

fn is_permutation(values: &[u8; DECK_SIZE]) -> bool {
    let mut seen = [false; DECK_SIZE];
    for &v in values {
        if !(1..=9).contains(&v) || seen[v as usize - 1] {
            return false;
        }
        seen[v as usize - 1] = true;
    }
    true
}
