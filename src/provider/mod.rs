//! The opponent move boundary.
//!
//! The round engine consults a [`MoveProvider`] at three decision points:
//! token placement, reveal, and battle. Anything that satisfies the trait
//! can sit behind it — a remote model call, a heuristic, a scripted stub.
//! The engine validates every returned move; on an error or an illegal
//! choice it substitutes the deterministic fallback and the round goes on.
//!
//! Two reference strategies ship with the crate: [`FirstAvailable`] and
//! [`SeededRandom`].

pub mod reference;
pub mod view;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::CardId;

pub use reference::{FirstAvailable, SeededRandom};
pub use view::{OpponentCard, OwnCard, ProviderView};

/// A failed provider call. Never surfaced to the user interface; the
/// engine logs it and falls back.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ProviderError {
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("call timed out")]
    Timeout,
    #[error("malformed response: {0}")]
    Malformed(String),
    #[error("no legal move available")]
    NoLegalMove,
}

/// Placement decision: where the plus and minus tokens go.
///
/// Both ids name the provider's own cards; they may be equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPlacement {
    pub plus_id: CardId,
    pub minus_id: CardId,
}

/// Reveal decision: which of the *other* side's cards to flip.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealChoice {
    pub reveal_id: CardId,
}

/// Battle decision: which own card to commit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattlePlay {
    pub play_id: CardId,
}

/// An automated opponent.
///
/// Each method receives a censored [`ProviderView`] — own cards in full,
/// the other side's values only where revealed. Implementations never see
/// an unrevealed card's true value, so there is nothing to leak.
pub trait MoveProvider {
    /// Choose a plus target and a minus target among own cards.
    fn place_tokens(&mut self, view: &ProviderView) -> Result<TokenPlacement, ProviderError>;

    /// Choose one of the other side's hidden cards to reveal.
    fn reveal(&mut self, view: &ProviderView) -> Result<RevealChoice, ProviderError>;

    /// Choose an own card to commit to the battle.
    fn play(&mut self, view: &ProviderView) -> Result<BattlePlay, ProviderError>;
}
