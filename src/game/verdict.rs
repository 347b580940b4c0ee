//! The final verdict after nine rounds.

use serde::{Deserialize, Serialize};

use crate::core::{Player, Side};

/// Result of a completed match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchResult {
    /// Single winner.
    Winner(Side),
    /// Dead level on score and raw sums.
    Draw,
}

impl MatchResult {
    /// Check if a side won.
    #[must_use]
    pub fn is_winner(&self, side: Side) -> bool {
        matches!(self, MatchResult::Winner(w) if *w == side)
    }

    /// Decide the match: higher score wins; level scores fall to the
    /// tie-break, where the *lower* win-raw-sum wins (fewer raw points
    /// spent winning); level again is a draw.
    pub(crate) fn decide(user: &Player, opponent: &Player) -> Self {
        use std::cmp::Ordering;

        match user.score().cmp(&opponent.score()) {
            Ordering::Greater => MatchResult::Winner(Side::User),
            Ordering::Less => MatchResult::Winner(Side::Opponent),
            Ordering::Equal => match user.win_raw_sum().cmp(&opponent.win_raw_sum()) {
                Ordering::Less => MatchResult::Winner(Side::User),
                Ordering::Greater => MatchResult::Winner(Side::Opponent),
                Ordering::Equal => MatchResult::Draw,
            },
        }
    }
}
