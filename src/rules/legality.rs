//! Pure legality predicates.
//!
//! Every human and provider move passes through here before any state
//! changes. The `can_*` forms answer yes/no; the `check_*` forms name the
//! violated rule so the caller can re-prompt. All of them read a snapshot
//! and mutate nothing.

use crate::core::{Card, CardId, IllegalMove, Player, Token};

/// May this token go on this card?
///
/// Used cards take no tokens. A minus token is rejected when it would push
/// the card's final value below zero; a plus token has no numeric bound.
#[must_use]
pub fn can_place_token(card: &Card, token: Token) -> bool {
    check_place_token(card, token).is_ok()
}

/// May this plus/minus pair be placed? The two ids may name the same card.
#[must_use]
pub fn can_place_token_pair(player: &Player, plus: CardId, minus: CardId) -> bool {
    check_place_token_pair(player, plus, minus).is_ok()
}

/// May the other side flip this card? Only unplayed, still-hidden cards.
#[must_use]
pub fn can_reveal(card: &Card) -> bool {
    !card.is_used && card.is_hidden()
}

/// May this card be committed to a battle?
#[must_use]
pub fn can_play(card: &Card) -> bool {
    !card.is_used
}

/// `can_place_token` with the violated rule.
pub fn check_place_token(card: &Card, token: Token) -> Result<(), IllegalMove> {
    if card.is_used {
        return Err(IllegalMove::CardUsed(card.id));
    }
    if token == Token::Minus && card.final_value() - 1 < 0 {
        return Err(IllegalMove::MinusBelowZero(card.id));
    }
    Ok(())
}

/// `can_place_token_pair` with the violated rule.
///
/// Both placements are judged against the same pre-placement snapshot: a
/// minus is not rescued by a plus landing on the same card this round.
pub fn check_place_token_pair(
    player: &Player,
    plus: CardId,
    minus: CardId,
) -> Result<(), IllegalMove> {
    let plus_card = player.card(plus).ok_or(IllegalMove::UnknownCard(plus))?;
    let minus_card = player.card(minus).ok_or(IllegalMove::UnknownCard(minus))?;
    check_place_token(plus_card, Token::Plus)?;
    check_place_token(minus_card, Token::Minus)?;
    Ok(())
}

/// `can_reveal` with the violated rule, resolving the id.
pub fn check_reveal(player: &Player, id: CardId) -> Result<(), IllegalMove> {
    let card = player.card(id).ok_or(IllegalMove::UnknownCard(id))?;
    if card.is_used {
        return Err(IllegalMove::CardUsed(id));
    }
    if card.is_revealed_to_opponent {
        return Err(IllegalMove::AlreadyRevealed(id));
    }
    Ok(())
}

/// `can_play` with the violated rule, resolving the id.
pub fn check_play(player: &Player, id: CardId) -> Result<(), IllegalMove> {
    let card = player.card(id).ok_or(IllegalMove::UnknownCard(id))?;
    if card.is_used {
        return Err(IllegalMove::CardUsed(id));
    }
    Ok(())
}
