//! Reference strategies.
//!
//! Neither plays well; both always play legally. `FirstAvailable` is the
//! deterministic baseline (and doubles as a predictable test stub);
//! `SeededRandom` gives reproducible variety from a seed.

use crate::core::SeededRng;

use super::view::{OwnCard, ProviderView};
use super::{BattlePlay, MoveProvider, ProviderError, RevealChoice, TokenPlacement};

fn can_take_minus(card: &OwnCard) -> bool {
    card.final_value() >= 1
}

/// Always the lowest-id legal choice.
///
/// Placement puts both tokens on the first card that can absorb the minus,
/// netting to zero — the same selection the engine's fallback makes.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstAvailable;

impl MoveProvider for FirstAvailable {
    fn place_tokens(&mut self, view: &ProviderView) -> Result<TokenPlacement, ProviderError> {
        let target = view
            .own
            .iter()
            .find(|c| can_take_minus(c))
            .ok_or(ProviderError::NoLegalMove)?;
        Ok(TokenPlacement {
            plus_id: target.id,
            minus_id: target.id,
        })
    }

    fn reveal(&mut self, view: &ProviderView) -> Result<RevealChoice, ProviderError> {
        let target = view.hidden_opponent().next().ok_or(ProviderError::NoLegalMove)?;
        Ok(RevealChoice {
            reveal_id: target.id,
        })
    }

    fn play(&mut self, view: &ProviderView) -> Result<BattlePlay, ProviderError> {
        let card = view.own.first().ok_or(ProviderError::NoLegalMove)?;
        Ok(BattlePlay { play_id: card.id })
    }
}

/// Uniform choice among legal moves, from a caller-supplied seed.
#[derive(Clone, Debug)]
pub struct SeededRandom {
    rng: SeededRng,
}

impl SeededRandom {
    /// Create a strategy from a seed. Same seed, same match.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SeededRng::new(seed),
        }
    }
}

impl MoveProvider for SeededRandom {
    fn place_tokens(&mut self, view: &ProviderView) -> Result<TokenPlacement, ProviderError> {
        let plus = self
            .rng
            .choose(&view.own)
            .ok_or(ProviderError::NoLegalMove)?
            .id;
        let minus_targets: Vec<&OwnCard> =
            view.own.iter().filter(|c| can_take_minus(c)).collect();
        let minus = self
            .rng
            .choose(&minus_targets)
            .ok_or(ProviderError::NoLegalMove)?
            .id;
        Ok(TokenPlacement {
            plus_id: plus,
            minus_id: minus,
        })
    }

    fn reveal(&mut self, view: &ProviderView) -> Result<RevealChoice, ProviderError> {
        let hidden: Vec<_> = view.hidden_opponent().collect();
        let target = self.rng.choose(&hidden).ok_or(ProviderError::NoLegalMove)?;
        Ok(RevealChoice {
            reveal_id: target.id,
        })
    }

    fn play(&mut self, view: &ProviderView) -> Result<BattlePlay, ProviderError> {
        let card = self.rng.choose(&view.own).ok_or(ProviderError::NoLegalMove)?;
        Ok(BattlePlay { play_id: card.id })
    }
}
