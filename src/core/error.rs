//! Recoverable move rejections.
//!
//! An `IllegalMove` names the exact rule a request violated so the caller
//! can re-prompt instead of aborting. Programming defects (broken engine
//! invariants) are not errors — they panic.

use thiserror::Error;

use super::card::CardId;

/// The request shapes a caller can submit to a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveKind {
    PlaceTokens,
    Reveal,
    Play,
    Advance,
}

impl std::fmt::Display for MoveKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveKind::PlaceTokens => write!(f, "place-tokens"),
            MoveKind::Reveal => write!(f, "reveal"),
            MoveKind::Play => write!(f, "play"),
            MoveKind::Advance => write!(f, "advance"),
        }
    }
}

/// A rejected request. The phase does not advance; resubmit a legal move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum IllegalMove {
    #[error("no card {0} on this side")]
    UnknownCard(CardId),
    #[error("card {0} has already been played")]
    CardUsed(CardId),
    #[error("card {0} is already revealed")]
    AlreadyRevealed(CardId),
    #[error("a minus token on card {0} would push its value below zero")]
    MinusBelowZero(CardId),
    #[error("{0} is not accepted in the current phase")]
    OutOfPhase(MoveKind),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_card() {
        let err = IllegalMove::CardUsed(CardId::new(3));
        assert_eq!(err.to_string(), "card 3 has already been played");

        let err = IllegalMove::MinusBelowZero(CardId::new(0));
        assert!(err.to_string().contains("below zero"));
    }

    #[test]
    fn test_out_of_phase_names_the_request() {
        let err = IllegalMove::OutOfPhase(MoveKind::Reveal);
        assert_eq!(err.to_string(), "reveal is not accepted in the current phase");
    }
}
