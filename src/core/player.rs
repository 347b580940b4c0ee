//! A player's deck and match bookkeeping.
//!
//! Each player holds nine cards (base values a permutation of 1-9), a score
//! in rounds won, and the tie-break accumulator `win_raw_sum`. The match
//! controller is the only owner; the round engine borrows a player for the
//! duration of one round's transitions.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::card::{Card, CardId};

/// Cards per deck, one per round.
pub const DECK_SIZE: usize = 9;

/// One seat's deck and running totals.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// The nine cards, in deal order (index = id).
    cards: SmallVec<[Card; DECK_SIZE]>,

    /// Rounds won.
    score: u8,

    /// Sum of `base_value` over cards played in rounds this player won.
    /// Lower is better in the tie-break.
    win_raw_sum: u32,
}

impl Player {
    /// Build a player from a deal-order permutation of base values 1-9.
    ///
    /// Ids are assigned sequentially; validation of the permutation belongs
    /// to [`Deal`](super::deal::Deal).
    pub(crate) fn from_values(values: [u8; DECK_SIZE]) -> Self {
        let cards = values
            .iter()
            .enumerate()
            .map(|(i, &v)| Card::new(CardId::new(i as u8), v))
            .collect();
        Self {
            cards,
            score: 0,
            win_raw_sum: 0,
        }
    }

    /// All nine cards, in deal order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Look up a card by id.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.get(id.index())
    }

    pub(crate) fn card_mut(&mut self, id: CardId) -> Option<&mut Card> {
        self.cards.get_mut(id.index())
    }

    /// Rounds won so far.
    #[must_use]
    pub fn score(&self) -> u8 {
        self.score
    }

    /// Tie-break accumulator: raw values of winning cards.
    #[must_use]
    pub fn win_raw_sum(&self) -> u32 {
        self.win_raw_sum
    }

    /// Credit a round won with a card of the given base value.
    pub(crate) fn record_win(&mut self, base_value: u8) {
        self.score += 1;
        self.win_raw_sum += base_value as u32;
    }

    /// Cards not yet committed to a battle, in id order.
    pub fn unused(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter().filter(|c| !c.is_used)
    }

    /// Number of cards not yet played.
    #[must_use]
    pub fn unused_count(&self) -> usize {
        self.unused().count()
    }

    /// Lowest-id card not yet played.
    #[must_use]
    pub fn first_unused(&self) -> Option<&Card> {
        self.unused().next()
    }

    /// Does this player still hold an unplayed card the other side has not
    /// seen?
    #[must_use]
    pub fn has_hidden_unused(&self) -> bool {
        self.unused().any(|c| c.is_hidden())
    }

    /// Is every remaining (unplayed) card already known to the other side?
    #[must_use]
    pub fn all_unused_revealed(&self) -> bool {
        !self.has_hidden_unused()
    }
}
