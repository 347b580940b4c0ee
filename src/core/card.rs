//! Cards and the tokens that modify them.
//!
//! A card carries an immutable base value (1-9) plus the running counts of
//! plus and minus tokens attached to it over the match. Its fighting
//! strength is the derived `final_value`, which the legality rules keep at
//! zero or above.

use serde::{Deserialize, Serialize};

/// Card identifier, unique within its owner's deck.
///
/// Ids are assigned in deal order, so ordering by id equals deal order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u8);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw deck index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A +1 or -1 modifier placed during token placement.
///
/// Each player places exactly one of each per round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Token {
    Plus,
    Minus,
}

/// A single card in a player's deck.
///
/// Token counts accumulate across rounds; `is_used` and
/// `is_revealed_to_opponent` are one-way flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Identifier within the owner's deck.
    pub id: CardId,

    /// Printed value, 1-9, unique within the deck.
    pub base_value: u8,

    /// Plus tokens attached so far.
    pub plus_count: u8,

    /// Minus tokens attached so far.
    pub minus_count: u8,

    /// Has this card been committed to a battle?
    pub is_used: bool,

    /// Does the other side know this card's value?
    pub is_revealed_to_opponent: bool,
}

impl Card {
    /// Create a fresh, face-down, unused card.
    #[must_use]
    pub fn new(id: CardId, base_value: u8) -> Self {
        assert!(
            (1..=9).contains(&base_value),
            "base value {base_value} outside 1-9"
        );
        Self {
            id,
            base_value,
            plus_count: 0,
            minus_count: 0,
            is_used: false,
            is_revealed_to_opponent: false,
        }
    }

    /// Fighting strength: base value adjusted by all attached tokens.
    ///
    /// The legality rules guarantee this never drops below zero.
    #[must_use]
    pub fn final_value(&self) -> i64 {
        self.base_value as i64 + self.plus_count as i64 - self.minus_count as i64
    }

    /// Is this card's value still unknown to the other side?
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        !self.is_revealed_to_opponent
    }

    /// Attach a token. The caller must have checked legality first.
    pub(crate) fn apply_token(&mut self, token: Token) {
        assert!(!self.is_used, "token placed on used card {}", self.id);
        match token {
            Token::Plus => self.plus_count += 1,
            Token::Minus => {
                assert!(
                    self.final_value() > 0,
                    "minus token would drop card {} below zero",
                    self.id
                );
                self.minus_count += 1;
            }
        }
    }

    /// Mark this card's value as known to the other side.
    pub(crate) fn mark_revealed(&mut self) {
        self.is_revealed_to_opponent = true;
    }

    /// Consume this card in a battle. Playing a card also reveals it.
    pub(crate) fn mark_played(&mut self) {
        assert!(!self.is_used, "card {} played twice", self.id);
        self.is_used = true;
        self.is_revealed_to_opponent = true;
    }
}
