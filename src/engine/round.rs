//! The round state machine.
//!
//! A round walks TOKEN_PLACEMENT -> REVEAL -> BATTLE -> RESOLVED. The
//! reveal phase can be skipped outright when there is nothing left to
//! discover. Human moves arrive through the three phase methods and are
//! validated before anything mutates; opponent moves are pulled from the
//! [`MoveProvider`] at the matching decision points and validated the same
//! way, with a deterministic fallback when the provider errs.
//!
//! No state changes while a provider call is outstanding, so a failed call
//! never needs a rollback.

use serde::{Deserialize, Serialize};

use crate::core::{CardId, IllegalMove, MoveKind, PerSide, Player, RoundRecord, Side, Token};
use crate::provider::{MoveProvider, ProviderView, TokenPlacement};
use crate::rules;

/// Where a round currently stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Both sides place one plus and one minus token.
    TokenPlacement,
    /// The human flips one opponent card; the opponent answers in kind.
    Reveal,
    /// Both sides secretly commit a card.
    Battle,
    /// The round is decided; advance the match to continue.
    Resolved,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::TokenPlacement => write!(f, "token-placement"),
            Phase::Reveal => write!(f, "reveal"),
            Phase::Battle => write!(f, "battle"),
            Phase::Resolved => write!(f, "resolved"),
        }
    }
}

/// What happened when tokens were confirmed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlacementReport {
    /// The phase the round moved to (REVEAL, or BATTLE when skipped).
    pub phase: Phase,
    /// The user card the opponent flipped, when the user's own reveal was
    /// skipped and the opponent still got one.
    pub opponent_revealed: Option<CardId>,
}

/// What happened when the human revealed a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealReport {
    /// The flipped card's base value.
    pub revealed_value: u8,
    /// The user card the opponent flipped in answer, if the user still had
    /// a hidden one.
    pub opponent_revealed: Option<CardId>,
}

/// One round of the duel.
///
/// Owns only the phase cursor; player state stays with the match
/// controller and is borrowed per call.
#[derive(Clone, Copy, Debug)]
pub struct Round {
    number: u8,
    phase: Phase,
}

impl Round {
    pub(crate) fn new(number: u8) -> Self {
        Self {
            number,
            phase: Phase::TokenPlacement,
        }
    }

    /// Round number, 1-9.
    #[must_use]
    pub fn number(&self) -> u8 {
        self.number
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub(crate) fn mark_resolved(&mut self) {
        self.phase = Phase::Resolved;
    }

    /// TOKEN_PLACEMENT: confirm the human's plus/minus targets.
    ///
    /// Applies the human pair, pulls and applies the opponent's pair, then
    /// runs the reveal skip logic.
    pub(crate) fn place_tokens<P: MoveProvider>(
        &mut self,
        players: &mut PerSide<Player>,
        provider: &mut P,
        plus: CardId,
        minus: CardId,
    ) -> Result<PlacementReport, IllegalMove> {
        if self.phase != Phase::TokenPlacement {
            return Err(IllegalMove::OutOfPhase(MoveKind::PlaceTokens));
        }
        rules::check_place_token_pair(&players[Side::User], plus, minus)?;

        apply_placement(&mut players[Side::User], TokenPlacement {
            plus_id: plus,
            minus_id: minus,
        });

        let opponent_placement = self.opponent_placement(players, provider);
        apply_placement(&mut players[Side::Opponent], opponent_placement);

        let opponent_revealed = self.enter_reveal(players, provider);
        Ok(PlacementReport {
            phase: self.phase,
            opponent_revealed,
        })
    }

    /// REVEAL: flip one opponent card for the human.
    ///
    /// The opponent then flips one of the human's cards, unless the human
    /// has none left hidden.
    pub(crate) fn reveal<P: MoveProvider>(
        &mut self,
        players: &mut PerSide<Player>,
        provider: &mut P,
        target: CardId,
    ) -> Result<RevealReport, IllegalMove> {
        if self.phase != Phase::Reveal {
            return Err(IllegalMove::OutOfPhase(MoveKind::Reveal));
        }
        rules::check_reveal(&players[Side::Opponent], target)?;

        let card = players[Side::Opponent]
            .card_mut(target)
            .expect("reveal target was just validated");
        card.mark_revealed();
        let revealed_value = card.base_value;

        let opponent_revealed = if players[Side::User].has_hidden_unused() {
            Some(self.opponent_reveal(players, provider))
        } else {
            None
        };

        self.phase = Phase::Battle;
        log::debug!("round {}: entering battle", self.number);
        Ok(RevealReport {
            revealed_value,
            opponent_revealed,
        })
    }

    /// BATTLE: commit the human's card, pull the opponent's, resolve.
    ///
    /// Neither selection is disclosed before both are in: the provider
    /// decides from a view that cannot contain the human's pick.
    pub(crate) fn play<P: MoveProvider>(
        &mut self,
        players: &mut PerSide<Player>,
        provider: &mut P,
        card: CardId,
    ) -> Result<RoundRecord, IllegalMove> {
        if self.phase != Phase::Battle {
            return Err(IllegalMove::OutOfPhase(MoveKind::Play));
        }
        rules::check_play(&players[Side::User], card)?;

        let opponent_card = self.opponent_play(players, provider);
        Ok(self.resolve(players, card, opponent_card))
    }

    /// Reveal skip logic, straight after placement.
    ///
    /// Nothing left to discover on either side: jump to BATTLE. Only the
    /// opponent's board fully known: the human's reveal is skipped but the
    /// opponent still flips one human card. Otherwise the human reveals
    /// first.
    fn enter_reveal<P: MoveProvider>(
        &mut self,
        players: &mut PerSide<Player>,
        provider: &mut P,
    ) -> Option<CardId> {
        let all_opponent_known = players[Side::Opponent].all_unused_revealed();
        let all_user_known = players[Side::User].all_unused_revealed();

        if all_opponent_known && all_user_known {
            self.phase = Phase::Battle;
            log::debug!("round {}: both boards known, reveal skipped", self.number);
            None
        } else if all_opponent_known {
            let flipped = self.opponent_reveal(players, provider);
            self.phase = Phase::Battle;
            log::debug!(
                "round {}: user reveal skipped, opponent flipped card {}",
                self.number,
                flipped
            );
            Some(flipped)
        } else {
            self.phase = Phase::Reveal;
            None
        }
    }

    /// Pull the opponent's token placement, falling back when it errs.
    fn opponent_placement<P: MoveProvider>(
        &self,
        players: &PerSide<Player>,
        provider: &mut P,
    ) -> TokenPlacement {
        let opponent = &players[Side::Opponent];
        let view = ProviderView::capture(self.number, opponent, &players[Side::User]);

        match provider.place_tokens(&view) {
            Ok(p) if rules::can_place_token_pair(opponent, p.plus_id, p.minus_id) => p,
            Ok(p) => {
                log::warn!(
                    "round {}: provider placement +{} -{} is illegal, using fallback",
                    self.number,
                    p.plus_id,
                    p.minus_id
                );
                fallback_placement(opponent)
            }
            Err(err) => {
                log::warn!(
                    "round {}: provider placement failed ({err}), using fallback",
                    self.number
                );
                fallback_placement(opponent)
            }
        }
    }

    /// Pull the opponent's reveal choice and flip that user card.
    ///
    /// Callers guarantee the user still has a hidden, unplayed card.
    fn opponent_reveal<P: MoveProvider>(
        &self,
        players: &mut PerSide<Player>,
        provider: &mut P,
    ) -> CardId {
        let view = ProviderView::capture(
            self.number,
            &players[Side::Opponent],
            &players[Side::User],
        );

        let target = match provider.reveal(&view) {
            Ok(c) if rules::check_reveal(&players[Side::User], c.reveal_id).is_ok() => c.reveal_id,
            Ok(c) => {
                log::warn!(
                    "round {}: provider reveal of card {} is illegal, using fallback",
                    self.number,
                    c.reveal_id
                );
                fallback_reveal(&players[Side::User])
            }
            Err(err) => {
                log::warn!(
                    "round {}: provider reveal failed ({err}), using fallback",
                    self.number
                );
                fallback_reveal(&players[Side::User])
            }
        };

        players[Side::User]
            .card_mut(target)
            .expect("reveal target was just validated")
            .mark_revealed();
        target
    }

    /// Pull the opponent's battle commitment.
    fn opponent_play<P: MoveProvider>(
        &self,
        players: &PerSide<Player>,
        provider: &mut P,
    ) -> CardId {
        let opponent = &players[Side::Opponent];
        let view = ProviderView::capture(self.number, opponent, &players[Side::User]);

        match provider.play(&view) {
            Ok(c) if rules::check_play(opponent, c.play_id).is_ok() => c.play_id,
            Ok(c) => {
                log::warn!(
                    "round {}: provider play of card {} is illegal, using fallback",
                    self.number,
                    c.play_id
                );
                fallback_play(opponent)
            }
            Err(err) => {
                log::warn!(
                    "round {}: provider play failed ({err}), using fallback",
                    self.number
                );
                fallback_play(opponent)
            }
        }
    }

    /// RESULT: consume both cards, compare, credit the winner.
    fn resolve(
        &mut self,
        players: &mut PerSide<Player>,
        user_id: CardId,
        opponent_id: CardId,
    ) -> RoundRecord {
        let (user_base, user_final) = {
            let c = players[Side::User].card(user_id).expect("validated play");
            (c.base_value, c.final_value())
        };
        let (opponent_base, opponent_final) = {
            let c = players[Side::Opponent]
                .card(opponent_id)
                .expect("validated play");
            (c.base_value, c.final_value())
        };

        players[Side::User]
            .card_mut(user_id)
            .expect("validated play")
            .mark_played();
        players[Side::Opponent]
            .card_mut(opponent_id)
            .expect("validated play")
            .mark_played();

        let winner = match user_final.cmp(&opponent_final) {
            std::cmp::Ordering::Greater => Some(Side::User),
            std::cmp::Ordering::Less => Some(Side::Opponent),
            std::cmp::Ordering::Equal => None,
        };
        match winner {
            Some(Side::User) => players[Side::User].record_win(user_base),
            Some(Side::Opponent) => players[Side::Opponent].record_win(opponent_base),
            None => {}
        }

        self.phase = Phase::Resolved;
        log::debug!(
            "round {}: user {} vs opponent {} -> {:?}",
            self.number,
            user_final,
            opponent_final,
            winner
        );

        RoundRecord {
            round: self.number,
            user_base,
            user_final,
            opponent_base,
            opponent_final,
            winner,
        }
    }
}

/// Apply a validated token pair.
fn apply_placement(player: &mut Player, placement: TokenPlacement) {
    player
        .card_mut(placement.plus_id)
        .expect("validated placement")
        .apply_token(Token::Plus);
    player
        .card_mut(placement.minus_id)
        .expect("validated placement")
        .apply_token(Token::Minus);
}

/// Deterministic placement fallback: both tokens on the first unplayed
/// card that can absorb the minus, netting to zero.
fn fallback_placement(player: &Player) -> TokenPlacement {
    let target = player
        .unused()
        .find(|c| rules::can_place_token(c, Token::Minus))
        .unwrap_or_else(|| panic!("no legal minus placement remains"));
    TokenPlacement {
        plus_id: target.id,
        minus_id: target.id,
    }
}

/// Deterministic reveal fallback: the first hidden, unplayed card.
fn fallback_reveal(target: &Player) -> CardId {
    target
        .unused()
        .find(|c| c.is_hidden())
        .map(|c| c.id)
        .unwrap_or_else(|| panic!("opponent reveal requested with no hidden cards"))
}

/// Deterministic battle fallback: the first unplayed card.
fn fallback_play(player: &Player) -> CardId {
    player
        .first_unused()
        .map(|c| c.id)
        .unwrap_or_else(|| panic!("battle requested with no unused cards"))
}
