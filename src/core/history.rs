//! The authoritative audit log of resolved rounds.

use serde::{Deserialize, Serialize};

use super::side::Side;

/// Immutable record of one resolved round.
///
/// Appended exactly once per round and never mutated afterward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Round number, 1-9.
    pub round: u8,

    /// Base value of the card the user committed.
    pub user_base: u8,

    /// The user card's token-adjusted value at resolution.
    pub user_final: i64,

    /// Base value of the card the opponent committed.
    pub opponent_base: u8,

    /// The opponent card's token-adjusted value at resolution.
    pub opponent_final: i64,

    /// Who took the round. `None` is a tie: no score or raw-sum change.
    pub winner: Option<Side>,
}

impl RoundRecord {
    /// Did the given side win this round?
    #[must_use]
    pub fn won_by(&self, side: Side) -> bool {
        self.winner == Some(side)
    }

    /// Did the round end level?
    #[must_use]
    pub fn is_tie(&self) -> bool {
        self.winner.is_none()
    }
}
