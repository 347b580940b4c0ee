//! The match controller.
//!
//! Owns the authoritative player records, the round counter, and the
//! history for the lifetime of a match. Phase actions are delegated to the
//! round engine; the controller only appends history, advances the
//! counter, and computes the verdict. Scores move exclusively as a
//! consequence of a round resolving.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{CardId, Deal, IllegalMove, MoveKind, PerSide, Player, RoundRecord, Side};
use crate::engine::{Phase, PlacementReport, RevealReport, Round};
use crate::provider::MoveProvider;

use super::verdict::MatchResult;

/// Rounds per match: one per card.
pub const ROUNDS_PER_MATCH: u8 = 9;

/// The serializable between-rounds state of a match.
///
/// Obtained from [`Match::snapshot`] and fed back to [`Match::resume`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    players: PerSide<Player>,
    round: u8,
    history: Vec<RoundRecord>,
}

impl MatchState {
    /// Both player records.
    #[must_use]
    pub fn players(&self) -> &PerSide<Player> {
        &self.players
    }

    /// The round counter, 1-9.
    #[must_use]
    pub fn round(&self) -> u8 {
        self.round
    }

    /// Resolved rounds, oldest first.
    #[must_use]
    pub fn history(&self) -> &[RoundRecord] {
        &self.history
    }
}

/// A snapshot that does not describe a reachable between-rounds state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ResumeError {
    #[error("history holds {0} records, more than a match can produce")]
    TooManyRounds(usize),
    #[error("round counter {round} does not fit {resolved} resolved rounds")]
    RoundMismatch { round: u8, resolved: usize },
    #[error("history record {index} is out of sequence")]
    OutOfSequence { index: usize },
    #[error("the {side} ledger does not match the resolved history")]
    LedgerMismatch { side: Side },
}

/// What `advance` produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Progress {
    /// The next round has entered token placement.
    NextRound(u8),
    /// Round nine is resolved; the verdict is in.
    Finished(MatchResult),
}

/// A full nine-round duel against one opponent strategy.
pub struct Match<P> {
    state: MatchState,
    current: Round,
    provider: P,
    result: Option<MatchResult>,
}

impl<P: MoveProvider> Match<P> {
    /// Start a match from a deal, entering round 1 token placement.
    pub fn new(provider: P, deal: &Deal) -> Self {
        Self {
            state: MatchState {
                players: deal.players(),
                round: 1,
                history: Vec::new(),
            },
            current: Round::new(1),
            provider,
            result: None,
        }
    }

    /// Reconstruct a match from a between-rounds snapshot.
    ///
    /// The snapshot is cross-checked against its own history before it is
    /// trusted: round counter, per-side used-card counts, token totals,
    /// and score/raw-sum ledgers must all agree.
    pub fn resume(state: MatchState, provider: P) -> Result<Self, ResumeError> {
        let resolved = state.history.len();
        if resolved > ROUNDS_PER_MATCH as usize {
            return Err(ResumeError::TooManyRounds(resolved));
        }

        let expected_round = if resolved == ROUNDS_PER_MATCH as usize {
            ROUNDS_PER_MATCH
        } else {
            resolved as u8 + 1
        };
        if state.round != expected_round {
            return Err(ResumeError::RoundMismatch {
                round: state.round,
                resolved,
            });
        }

        for (index, record) in state.history.iter().enumerate() {
            if record.round as usize != index + 1 {
                return Err(ResumeError::OutOfSequence { index });
            }
        }

        for (side, player) in state.players.iter() {
            if !ledger_consistent(side, player, &state.history) {
                return Err(ResumeError::LedgerMismatch { side });
            }
        }

        let finished = resolved == ROUNDS_PER_MATCH as usize;
        let mut current = Round::new(state.round);
        let mut result = None;
        if finished {
            current.mark_resolved();
            result = Some(MatchResult::decide(
                &state.players[Side::User],
                &state.players[Side::Opponent],
            ));
        }

        Ok(Self {
            state,
            current,
            provider,
            result,
        })
    }

    /// Between rounds (or once the match is over), the serializable state.
    /// `None` mid-round: in-flight rounds are not a snapshot concern.
    #[must_use]
    pub fn snapshot(&self) -> Option<MatchState> {
        if self.result.is_some() || self.current.phase() == Phase::TokenPlacement {
            Some(self.state.clone())
        } else {
            None
        }
    }

    // === Phase actions ===

    /// Confirm the human's token pair for this round.
    pub fn place_tokens(
        &mut self,
        plus: CardId,
        minus: CardId,
    ) -> Result<PlacementReport, IllegalMove> {
        self.current
            .place_tokens(&mut self.state.players, &mut self.provider, plus, minus)
    }

    /// Flip one opponent card.
    pub fn reveal(&mut self, target: CardId) -> Result<RevealReport, IllegalMove> {
        self.current
            .reveal(&mut self.state.players, &mut self.provider, target)
    }

    /// Commit the human's battle card and resolve the round.
    pub fn play(&mut self, card: CardId) -> Result<RoundRecord, IllegalMove> {
        let record = self
            .current
            .play(&mut self.state.players, &mut self.provider, card)?;
        self.state.history.push(record);
        Ok(record)
    }

    /// Leave a resolved round: start the next one, or decide the match
    /// after round nine.
    pub fn advance(&mut self) -> Result<Progress, IllegalMove> {
        if self.result.is_some() || self.current.phase() != Phase::Resolved {
            return Err(IllegalMove::OutOfPhase(MoveKind::Advance));
        }

        if self.state.round == ROUNDS_PER_MATCH {
            let result = MatchResult::decide(
                &self.state.players[Side::User],
                &self.state.players[Side::Opponent],
            );
            self.result = Some(result);
            Ok(Progress::Finished(result))
        } else {
            self.state.round += 1;
            self.current = Round::new(self.state.round);
            Ok(Progress::NextRound(self.state.round))
        }
    }

    // === Observers ===

    /// Current round number, 1-9.
    #[must_use]
    pub fn round_number(&self) -> u8 {
        self.state.round
    }

    /// Current phase of the current round.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.current.phase()
    }

    /// A seat's authoritative state.
    #[must_use]
    pub fn player(&self, side: Side) -> &Player {
        &self.state.players[side]
    }

    /// Resolved rounds, oldest first.
    #[must_use]
    pub fn history(&self) -> &[RoundRecord] {
        &self.state.history
    }

    /// The verdict, once round nine has been advanced past.
    #[must_use]
    pub fn result(&self) -> Option<MatchResult> {
        self.result
    }

    /// Has the verdict been decided?
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.result.is_some()
    }
}

/// A side's counters must be derivable from the history: used cards and
/// token totals equal resolved rounds, score and raw sum equal its wins.
fn ledger_consistent(side: Side, player: &Player, history: &[RoundRecord]) -> bool {
    let resolved = history.len();

    let used = player.cards().iter().filter(|c| c.is_used).count();
    let plus: u32 = player.cards().iter().map(|c| c.plus_count as u32).sum();
    let minus: u32 = player.cards().iter().map(|c| c.minus_count as u32).sum();
    if used != resolved || plus as usize != resolved || minus as usize != resolved {
        return false;
    }

    let wins: Vec<&RoundRecord> = history.iter().filter(|r| r.won_by(side)).collect();
    let raw_sum: u32 = wins
        .iter()
        .map(|r| match side {
            Side::User => r.user_base as u32,
            Side::Opponent => r.opponent_base as u32,
        })
        .sum();

    player.score() as usize == wins.len() && player.win_raw_sum() == raw_sum
}
