//! The censored table snapshot handed to a move provider.
//!
//! A provider sees its own remaining cards in full, and the other side's
//! remaining cards with the base value present only when that card has been
//! revealed. Unrevealed true values never cross this boundary.

use serde::{Deserialize, Serialize};

use crate::core::{CardId, Player};

/// One of the provider's own remaining cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnCard {
    pub id: CardId,
    pub base_value: u8,
    pub plus_count: u8,
    pub minus_count: u8,
}

impl OwnCard {
    /// Token-adjusted value.
    #[must_use]
    pub fn final_value(&self) -> i64 {
        self.base_value as i64 + self.plus_count as i64 - self.minus_count as i64
    }
}

/// One of the other side's remaining cards, censored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpponentCard {
    pub id: CardId,
    pub revealed: bool,
    /// `Some` exactly when `revealed`.
    pub base_value: Option<u8>,
}

/// Snapshot for one provider decision. Lists unplayed cards only.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderView {
    /// Current round, 1-9.
    pub round: u8,

    /// The provider's own remaining cards, in id order.
    pub own: Vec<OwnCard>,

    /// The other side's remaining cards, in id order, censored.
    pub opponent: Vec<OpponentCard>,
}

impl ProviderView {
    /// Capture a snapshot from the provider's seat.
    #[must_use]
    pub fn capture(round: u8, own: &Player, other: &Player) -> Self {
        let own = own
            .unused()
            .map(|c| OwnCard {
                id: c.id,
                base_value: c.base_value,
                plus_count: c.plus_count,
                minus_count: c.minus_count,
            })
            .collect();

        let opponent = other
            .unused()
            .map(|c| OpponentCard {
                id: c.id,
                revealed: c.is_revealed_to_opponent,
                base_value: if c.is_revealed_to_opponent {
                    Some(c.base_value)
                } else {
                    None
                },
            })
            .collect();

        Self {
            round,
            own,
            opponent,
        }
    }

    /// The other side's still-hidden cards, in id order.
    pub fn hidden_opponent(&self) -> impl Iterator<Item = &OpponentCard> {
        self.opponent.iter().filter(|c| !c.revealed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Token;

    fn players() -> (Player, Player) {
        (
            Player::from_values([1, 2, 3, 4, 5, 6, 7, 8, 9]),
            Player::from_values([9, 8, 7, 6, 5, 4, 3, 2, 1]),
        )
    }

    #[test]
    fn test_capture_lists_unused_only() {
        let (mut own, other) = players();
        own.card_mut(CardId::new(0)).unwrap().mark_played();

        let view = ProviderView::capture(2, &own, &other);

        assert_eq!(view.round, 2);
        assert_eq!(view.own.len(), 8);
        assert_eq!(view.opponent.len(), 9);
        assert!(view.own.iter().all(|c| c.id != CardId::new(0)));
    }

    #[test]
    fn test_unrevealed_values_are_censored() {
        let (own, mut other) = players();
        other.card_mut(CardId::new(3)).unwrap().mark_revealed();

        let view = ProviderView::capture(1, &own, &other);

        for card in &view.opponent {
            if card.id == CardId::new(3) {
                assert!(card.revealed);
                assert_eq!(card.base_value, Some(6));
            } else {
                assert!(!card.revealed);
                assert_eq!(card.base_value, None);
            }
        }
    }

    #[test]
    fn test_own_cards_carry_tokens() {
        let (mut own, other) = players();
        own.card_mut(CardId::new(1)).unwrap().apply_token(Token::Plus);

        let view = ProviderView::capture(1, &own, &other);
        let card = view.own.iter().find(|c| c.id == CardId::new(1)).unwrap();

        assert_eq!(card.plus_count, 1);
        assert_eq!(card.final_value(), 3);
    }

    #[test]
    fn test_hidden_opponent_iterator() {
        let (own, mut other) = players();
        other.card_mut(CardId::new(0)).unwrap().mark_revealed();
        other.card_mut(CardId::new(1)).unwrap().mark_played();

        let view = ProviderView::capture(1, &own, &other);
        let hidden: Vec<CardId> = view.hidden_opponent().map(|c| c.id).collect();

        assert_eq!(hidden.len(), 7);
        assert!(!hidden.contains(&CardId::new(0)));
        assert!(!hidden.contains(&CardId::new(1)));
    }

    #[test]
    fn test_played_cards_leave_the_view() {
        let (own, mut other) = players();
        // Playing a card reveals it, but it must also leave the view.
        other.card_mut(CardId::new(2)).unwrap().mark_played();

        let view = ProviderView::capture(1, &own, &other);
        assert!(view.opponent.iter().all(|c| c.id != CardId::new(2)));
    }

    /// A provider view must survive a serialization round-trip unchanged,
    /// since remote providers receive it over the wire.
    #[test]
    fn test_serialization() {
        let (own, other) = players();
        let view = ProviderView::capture(5, &own, &other);

        let json = serde_json::to_string(&view).unwrap();
        let deserialized: ProviderView = serde_json::from_str(&json).unwrap();
        assert_eq!(view, deserialized);
    }
}
